//! Practice exams ("simulados")

use gabarita_api::{ApiEnvelope, ExamConfig};
use gabarita_guard::PlanTier;
use serde_json::Value;
use tracing::error;

use crate::app::AppContext;
use crate::commands::{print_data, require_plan, Command};
use crate::error::{CliError, CliResult};
use crate::output;
use crate::views::{expect_success, load_or_default};

pub const EXAM_CREATE_ALERT: &str = "Erro ao criar simulado. Tente novamente.";

#[derive(Debug, Clone)]
pub enum ExamAction {
    Create(ExamConfig),
    List,
    Show { id: String },
    /// `answers` is the raw JSON sent as `respostas`
    Submit { id: String, answers: String },
}

pub struct ExamCommand {
    action: ExamAction,
}

impl ExamCommand {
    pub fn new(action: ExamAction) -> Self {
        Self { action }
    }
}

#[async_trait::async_trait]
impl Command for ExamCommand {
    async fn execute(&self, app: &AppContext) -> CliResult<()> {
        require_plan(app, PlanTier::Basic).await?;

        match &self.action {
            ExamAction::Create(config) => create_exam(app, config).await,
            ExamAction::List => {
                let exams: Value =
                    load_or_default("exams", app.client().exams().list(app.ctx())).await?;
                output::print_header("Simulados");
                print_data(&exams, "Nenhum simulado realizado");
                Ok(())
            }
            ExamAction::Show { id } => {
                let exam: Value =
                    load_or_default("exam", app.client().exams().get(app.ctx(), id)).await?;
                print_data(&exam, "Simulado não encontrado");
                Ok(())
            }
            ExamAction::Submit { id, answers } => submit_exam(app, id, answers).await,
        }
    }
}

async fn create_exam(app: &AppContext, config: &ExamConfig) -> CliResult<()> {
    let body = match app.client().exams().create(app.ctx(), config).await {
        Ok(body) => body,
        Err(e) if e.is_cancelled() => return Err(e.into()),
        Err(e) => {
            error!("Failed to create exam: {}", e);
            return Err(CliError::Rejected(EXAM_CREATE_ALERT.to_string()));
        }
    };

    // Only the success flag decides
    let exam = ApiEnvelope::<Value>::from_value(body)
        .ok()
        .filter(|envelope| envelope.success)
        .ok_or_else(|| CliError::Rejected(EXAM_CREATE_ALERT.to_string()))?
        .data
        .unwrap_or(Value::Null);

    output::print_success(&format!(
        "Simulado de {} criado: {} questões, {} minutos",
        config.subject, config.question_count, config.time_limit_minutes
    ));
    print_data(&exam, "");
    Ok(())
}

async fn submit_exam(app: &AppContext, id: &str, answers: &str) -> CliResult<()> {
    let answers: Value = serde_json::from_str(answers).map_err(|e| CliError::InvalidArgument {
        message: format!("answers must be JSON: {}", e),
    })?;

    let body = app.client().exams().submit(app.ctx(), id, &answers).await?;
    let result = expect_success(body, "Não foi possível finalizar o simulado")?;

    output::print_success("Simulado finalizado");
    print_data(&result, "");
    Ok(())
}
