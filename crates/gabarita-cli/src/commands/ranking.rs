//! Rankings

use serde_json::Value;

use crate::app::AppContext;
use crate::commands::{print_data, Command};
use crate::error::CliResult;
use crate::output;
use crate::views::load_or_default;

pub struct RankingCommand {
    kind: Option<String>,
    mine: bool,
}

impl RankingCommand {
    pub fn new(kind: Option<String>, mine: bool) -> Self {
        Self { kind, mine }
    }
}

#[async_trait::async_trait]
impl Command for RankingCommand {
    async fn execute(&self, app: &AppContext) -> CliResult<()> {
        let ranking = app.client().ranking();

        if self.mine {
            let position: Value =
                load_or_default("ranking position", ranking.user(app.ctx())).await?;
            output::print_header("Minha posição");
            print_data(&position, "Posição indisponível");
            return Ok(());
        }

        let board: Value =
            load_or_default("ranking", ranking.list(app.ctx(), self.kind.as_deref())).await?;
        output::print_header(&format!(
            "Ranking {}",
            self.kind
                .as_deref()
                .unwrap_or(gabarita_api::services::ranking::DEFAULT_RANKING_TYPE)
        ));
        print_data(&board, "Ranking vazio");
        Ok(())
    }
}
