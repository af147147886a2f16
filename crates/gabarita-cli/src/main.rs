// Gabarita CLI entry point

use gabarita_cli::{output, router::CommandRouter};

#[tokio::main]
async fn main() {
    // A missing .env file is normal
    dotenv::dotenv().ok();

    if let Err(e) = CommandRouter::route().await {
        output::print_error(&e.user_message());
        std::process::exit(1);
    }
}
