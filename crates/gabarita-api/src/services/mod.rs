//! Request helpers, one service per backend resource group
//!
//! Each service borrows the [`crate::ApiClient`] and exposes one async
//! function per backend operation.

pub mod auth;
pub mod dashboard;
pub mod essays;
pub mod exams;
pub mod news;
pub mod payments;
pub mod plans;
pub mod questions;
pub mod ranking;
pub mod support;
pub mod users;

pub use auth::AuthService;
pub use dashboard::DashboardService;
pub use essays::EssayService;
pub use exams::ExamService;
pub use news::NewsService;
pub use payments::PaymentService;
pub use plans::PlanService;
pub use questions::QuestionService;
pub use ranking::RankingService;
pub use support::SupportService;
pub use users::UserService;
