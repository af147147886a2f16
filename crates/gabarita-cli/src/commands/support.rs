//! Help center

use serde_json::Value;

use crate::app::AppContext;
use crate::commands::{print_data, Command};
use crate::error::CliResult;
use crate::output;
use crate::views::{expect_success, load_or_default};

#[derive(Debug, Clone)]
pub enum SupportAction {
    Faq,
    Ticket { subject: String, message: String },
    Tickets,
}

pub struct SupportCommand {
    action: SupportAction,
}

impl SupportCommand {
    pub fn new(action: SupportAction) -> Self {
        Self { action }
    }
}

#[async_trait::async_trait]
impl Command for SupportCommand {
    async fn execute(&self, app: &AppContext) -> CliResult<()> {
        let support = app.client().support();

        match &self.action {
            SupportAction::Faq => {
                let faq: Value = load_or_default("faq", support.faq(app.ctx())).await?;
                output::print_header("Perguntas frequentes");
                print_data(&faq, "Nenhuma pergunta cadastrada");
            }
            SupportAction::Ticket { subject, message } => {
                let body = support.submit_ticket(app.ctx(), subject, message).await?;
                let ticket = expect_success(body, "Não foi possível abrir o chamado")?;
                output::print_success("Chamado aberto");
                print_data(&ticket, "");
            }
            SupportAction::Tickets => {
                let tickets: Value =
                    load_or_default("tickets", support.tickets(app.ctx())).await?;
                output::print_header("Chamados");
                print_data(&tickets, "Nenhum chamado aberto");
            }
        }
        Ok(())
    }
}
