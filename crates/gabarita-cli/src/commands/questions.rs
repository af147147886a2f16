//! Question bank

use serde_json::Value;

use crate::app::AppContext;
use crate::commands::{print_data, Command};
use crate::error::{CliError, CliResult};
use crate::output;
use crate::views::{expect_success, load_or_default};

#[derive(Debug, Clone)]
pub enum QuestionsAction {
    /// `filters` are `key=value` pairs sent as the query string
    List { filters: Vec<String> },
    Show { id: String },
    Answer { id: String, answer: String },
}

pub struct QuestionsCommand {
    action: QuestionsAction,
}

impl QuestionsCommand {
    pub fn new(action: QuestionsAction) -> Self {
        Self { action }
    }
}

/// Split `key=value` arguments
pub fn parse_filters(filters: &[String]) -> CliResult<Vec<(String, String)>> {
    filters
        .iter()
        .map(|filter| {
            filter
                .split_once('=')
                .filter(|(key, _)| !key.is_empty())
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .ok_or_else(|| CliError::InvalidArgument {
                    message: format!("filter '{}' is not key=value", filter),
                })
        })
        .collect()
}

#[async_trait::async_trait]
impl Command for QuestionsCommand {
    async fn execute(&self, app: &AppContext) -> CliResult<()> {
        let questions = app.client().questions();

        match &self.action {
            QuestionsAction::List { filters } => {
                let filters = parse_filters(filters)?;
                let list: Value =
                    load_or_default("questions", questions.list(app.ctx(), filters)).await?;
                output::print_header("Questões");
                print_data(&list, "Nenhuma questão encontrada");
            }
            QuestionsAction::Show { id } => {
                let question: Value =
                    load_or_default("question", questions.get(app.ctx(), id)).await?;
                print_data(&question, "Questão não encontrada");
            }
            QuestionsAction::Answer { id, answer } => {
                let body = questions.answer(app.ctx(), id, answer).await?;
                let result = expect_success(body, "Não foi possível registrar a resposta")?;
                output::print_success("Resposta registrada");
                print_data(&result, "");
            }
        }
        Ok(())
    }
}
