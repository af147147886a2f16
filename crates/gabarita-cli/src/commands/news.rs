//! News feed (public)

use serde_json::Value;

use crate::app::AppContext;
use crate::commands::{print_data, Command};
use crate::error::CliResult;
use crate::output;
use crate::views::load_or_default;

pub struct NewsCommand {
    id: Option<String>,
}

impl NewsCommand {
    pub fn new(id: Option<String>) -> Self {
        Self { id }
    }
}

#[async_trait::async_trait]
impl Command for NewsCommand {
    async fn execute(&self, app: &AppContext) -> CliResult<()> {
        let news = app.client().news();

        match &self.id {
            Some(id) => {
                let article: Value = load_or_default("news", news.get(app.ctx(), id)).await?;
                print_data(&article, "Notícia não encontrada");
            }
            None => {
                let feed: Value = load_or_default("news", news.list(app.ctx())).await?;
                output::print_header("Notícias");
                print_data(&feed, "Nenhuma notícia publicada");
            }
        }
        Ok(())
    }
}
