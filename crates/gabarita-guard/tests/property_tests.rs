//! Property-based tests for tier gating

use gabarita_guard::{GuardConfig, GuardDecision, PlanTier, TierResponse};
use gabarita_http::StatusCode;
use proptest::prelude::*;
use serde_json::json;

fn tier_strategy() -> impl Strategy<Value = PlanTier> {
    prop::sample::select(PlanTier::ALL.to_vec())
}

proptest! {
    /// Access is granted iff rank(current) >= rank(required)
    #[test]
    fn prop_access_iff_rank_at_least_required(
        current in tier_strategy(),
        required in tier_strategy(),
    ) {
        let decision = GuardDecision::evaluate(current, &GuardConfig::new(required));
        prop_assert_eq!(decision.is_granted(), current.rank() >= required.rank());
    }

    /// A denial always reports the tiers it compared
    #[test]
    fn prop_denial_reports_both_tiers(
        current in tier_strategy(),
        required in tier_strategy(),
    ) {
        if let GuardDecision::Denied(notice) =
            GuardDecision::evaluate(current, &GuardConfig::new(required))
        {
            prop_assert_eq!(notice.current, current);
            prop_assert_eq!(notice.current_name.as_str(), current.as_str());
            prop_assert_eq!(notice.required, required);
            prop_assert!(notice.current < notice.required);
        }
    }

    /// Names outside the known set rank as free
    #[test]
    fn prop_unknown_names_rank_zero(name in "[a-z]{1,12}") {
        prop_assume!(!["gratuito", "free", "basico", "basic", "premium", "vip"].contains(&name.as_str()));
        prop_assert_eq!(PlanTier::from_wire(&name).rank(), 0);
    }

    /// Non-2xx responses never yield a tier, whatever the body says
    #[test]
    fn prop_error_status_ignores_body(
        status in 300u16..600,
        claimed in tier_strategy(),
    ) {
        let status = StatusCode::from_u16(status).unwrap();
        let response = TierResponse::new(status, json!({ "plano": claimed.as_str() }));
        prop_assert_eq!(response.tier(), None);
    }
}
