// Command handlers for the gabarita CLI

pub mod access;
pub mod auth;
pub mod dashboard;
pub mod essay;
pub mod exam;
pub mod news;
pub mod payments;
pub mod plans;
pub mod profile;
pub mod questions;
pub mod ranking;
pub mod support;

pub use access::{require_plan, AccessCommand};
pub use auth::{LoginCommand, LogoutCommand, RegisterCommand};
pub use dashboard::DashboardCommand;
pub use essay::{EssayAction, EssayCommand};
pub use exam::{ExamAction, ExamCommand};
pub use news::NewsCommand;
pub use payments::{PaymentsAction, PaymentsCommand};
pub use plans::{PlansCommand, SubscribeCommand};
pub use profile::{ProfileAction, ProfileCommand};
pub use questions::{QuestionsAction, QuestionsCommand};
pub use ranking::RankingCommand;
pub use support::{SupportAction, SupportCommand};

use crate::app::AppContext;
use crate::error::CliResult;

/// Trait for command handlers
#[async_trait::async_trait]
pub trait Command: Send + Sync {
    /// Execute the command
    async fn execute(&self, app: &AppContext) -> CliResult<()>;
}

/// Print a passthrough payload, or a placeholder for the empty state
///
/// An empty `empty` prints nothing for an empty payload.
pub(crate) fn print_data(data: &serde_json::Value, empty: &str) {
    let is_empty = match data {
        serde_json::Value::Null => true,
        serde_json::Value::Array(items) => items.is_empty(),
        serde_json::Value::Object(fields) => fields.is_empty(),
        _ => false,
    };

    if is_empty {
        if !empty.is_empty() {
            crate::output::print_info(empty);
        }
    } else {
        crate::output::print_json(data);
    }
}
