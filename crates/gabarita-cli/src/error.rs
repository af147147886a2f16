// CLI error types

use thiserror::Error;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("API error: {0}")]
    Api(#[from] gabarita_api::ApiError),

    #[error("Session error: {0}")]
    Session(#[from] gabarita_session::Error),

    #[error("Request rejected: {0}")]
    Rejected(String),

    #[error("Payment error: {0}")]
    Payment(String),

    #[error("Access restricted")]
    AccessDenied,

    #[error("Not signed in")]
    NotSignedIn,
}

/// Result type for CLI operations
pub type CliResult<T> = std::result::Result<T, CliError>;

pub const PAYMENT_ALERT: &str = "Erro ao processar pagamento. Tente novamente.";

impl CliError {
    /// Get a user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            CliError::InvalidArgument { message } => {
                format!(
                    "Invalid argument: {}\n\nRun 'gabarita --help' for usage information.",
                    message
                )
            }
            CliError::Io(e) => format!("File operation failed: {}", e),
            CliError::Api(e) if e.is_cancelled() => "Operation cancelled.".to_string(),
            CliError::Api(e) => format!(
                "Could not reach the Gabarita backend: {}\n\nCheck your connection or the GABARITA_API_URL setting.",
                e
            ),
            CliError::Session(e) => format!("Session storage failed: {}", e),
            CliError::Rejected(message) => message.clone(),
            CliError::Payment(_) => PAYMENT_ALERT.to_string(),
            CliError::AccessDenied => {
                "Access restricted. Run 'gabarita plans' to upgrade your plan.".to_string()
            }
            CliError::NotSignedIn => {
                "You are not signed in.\n\nRun 'gabarita login <email>' first.".to_string()
            }
        }
    }
}
