//! Plan gating for protected views
//!
//! A [`PlanGuard`] sits in front of a view that needs a minimum subscription
//! tier. It looks the user's tier up once, compares ranks, and then renders
//! either the view or a [`RestrictedNotice`].

pub mod guard;
pub mod lookup;
pub mod notice;
pub mod tier;

pub use guard::{GuardConfig, GuardDecision, GuardState, GuardView, PlanGuard};
pub use lookup::{plan_name, TierResponse, TierSource};
pub use notice::RestrictedNotice;
pub use tier::{ParseTierError, PlanTier};
