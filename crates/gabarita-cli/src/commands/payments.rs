//! Payment history and status

use serde_json::Value;

use crate::app::AppContext;
use crate::commands::{print_data, Command};
use crate::error::CliResult;
use crate::output;
use crate::views::load_or_default;

#[derive(Debug, Clone)]
pub enum PaymentsAction {
    History,
    Verify { id: String },
}

pub struct PaymentsCommand {
    action: PaymentsAction,
}

impl PaymentsCommand {
    pub fn new(action: PaymentsAction) -> Self {
        Self { action }
    }
}

#[async_trait::async_trait]
impl Command for PaymentsCommand {
    async fn execute(&self, app: &AppContext) -> CliResult<()> {
        let payments = app.client().payments();

        match &self.action {
            PaymentsAction::History => {
                let history: Value =
                    load_or_default("payment history", payments.history(app.ctx())).await?;
                output::print_header("Pagamentos");
                print_data(&history, "Nenhum pagamento encontrado");
            }
            PaymentsAction::Verify { id } => {
                let status: Value =
                    load_or_default("payment status", payments.verify(app.ctx(), id)).await?;
                print_data(&status, "Pagamento não encontrado");
            }
        }
        Ok(())
    }
}
