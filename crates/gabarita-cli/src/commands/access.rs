//! Access command and the plan gate used by protected pages

use gabarita_api::ApiError;
use gabarita_guard::{GuardView, PlanGuard, PlanTier};

use crate::app::AppContext;
use crate::commands::Command;
use crate::error::{CliError, CliResult};
use crate::output;

/// Gate a page behind `required`
///
/// Prints the restricted notice when access is denied.
pub async fn require_plan(app: &AppContext, required: PlanTier) -> CliResult<()> {
    let mut guard = PlanGuard::new(app.client(), required);

    match guard.protect(app.ctx(), ()).await {
        GuardView::Content(()) => Ok(()),
        GuardView::Redirect(route) => {
            tracing::debug!("Guard redirected to {}", route);
            Err(CliError::NotSignedIn)
        }
        GuardView::Restricted(notice) => {
            output::print_warning(notice.title());
            println!("{}", notice.message);
            println!("{}", notice.current_plan_line());
            println!("{}", notice.required_plan_line());
            for (label, route) in notice.links() {
                output::print_info(&format!("{}: {}", label, route));
            }
            Err(CliError::AccessDenied)
        }
        GuardView::Loading => Err(CliError::Api(ApiError::Cancelled)),
    }
}

/// Run the guard for a tier and report the outcome
pub struct AccessCommand {
    required: PlanTier,
}

impl AccessCommand {
    pub fn new(required: PlanTier) -> Self {
        Self { required }
    }
}

#[async_trait::async_trait]
impl Command for AccessCommand {
    async fn execute(&self, app: &AppContext) -> CliResult<()> {
        require_plan(app, self.required).await?;
        output::print_success(&format!("Acesso liberado ao conteúdo {}", self.required));
        Ok(())
    }
}
