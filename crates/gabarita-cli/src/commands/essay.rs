//! Essays ("redações")

use std::path::PathBuf;

use serde_json::Value;

use crate::app::AppContext;
use crate::commands::{print_data, Command};
use crate::error::{CliError, CliResult};
use crate::output;
use crate::views::{expect_success, load_or_default};

#[derive(Debug, Clone)]
pub enum EssayAction {
    /// Text comes from `text`, else from `file`
    Submit {
        theme: String,
        text: Option<String>,
        file: Option<PathBuf>,
    },
    List,
    Show { id: String },
}

pub struct EssayCommand {
    action: EssayAction,
}

impl EssayCommand {
    pub fn new(action: EssayAction) -> Self {
        Self { action }
    }
}

fn essay_text(text: &Option<String>, file: &Option<PathBuf>) -> CliResult<String> {
    match (text, file) {
        (Some(text), _) => Ok(text.clone()),
        (None, Some(path)) => Ok(std::fs::read_to_string(path)?),
        (None, None) => Err(CliError::InvalidArgument {
            message: "provide the essay with --text or --file".to_string(),
        }),
    }
}

#[async_trait::async_trait]
impl Command for EssayCommand {
    async fn execute(&self, app: &AppContext) -> CliResult<()> {
        let essays = app.client().essays();

        match &self.action {
            EssayAction::Submit { theme, text, file } => {
                let text = essay_text(text, file)?;
                let body = essays.submit(app.ctx(), theme, &text).await?;
                let result = expect_success(body, "Não foi possível enviar a redação")?;
                output::print_success("Redação enviada");
                print_data(&result, "");
            }
            EssayAction::List => {
                let history: Value =
                    load_or_default("essays", essays.list(app.ctx())).await?;
                output::print_header("Redações");
                print_data(&history, "Nenhuma redação enviada");
            }
            EssayAction::Show { id } => {
                let essay: Value = load_or_default("essay", essays.get(app.ctx(), id)).await?;
                print_data(&essay, "Redação não encontrada");
            }
        }
        Ok(())
    }
}
