//! The access guard

use gabarita_api::{ApiError, RequestContext};
use gabarita_http::StatusCode;
use tracing::{debug, warn};

use crate::{
    lookup::TierSource,
    notice::{RestrictedNotice, DEFAULT_FALLBACK_MESSAGE},
    tier::PlanTier,
};

pub const LOGIN_ROUTE: &str = "/login";
pub const UPGRADE_ROUTE: &str = "/planos";
pub const HOME_ROUTE: &str = "/";

/// Settings for one protected view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardConfig {
    /// Minimum tier the view needs
    pub required: PlanTier,
    /// Message shown on the restricted notice
    pub fallback_message: String,
    pub login_route: String,
    pub upgrade_route: String,
    pub home_route: String,
    /// Treat HTTP 401 from the tier lookup as a missing session
    ///
    /// Off by default: every lookup failure, 401 included, downgrades to free.
    pub redirect_on_unauthorized: bool,
}

impl GuardConfig {
    pub fn new(required: PlanTier) -> Self {
        Self {
            required,
            fallback_message: DEFAULT_FALLBACK_MESSAGE.to_string(),
            login_route: LOGIN_ROUTE.to_string(),
            upgrade_route: UPGRADE_ROUTE.to_string(),
            home_route: HOME_ROUTE.to_string(),
            redirect_on_unauthorized: false,
        }
    }

    pub fn with_fallback_message(mut self, message: impl Into<String>) -> Self {
        self.fallback_message = message.into();
        self
    }

    pub fn with_redirect_on_unauthorized(mut self, enabled: bool) -> Self {
        self.redirect_on_unauthorized = enabled;
        self
    }
}

/// Outcome of one authorization check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// No session: send the user to the login route, render nothing
    RedirectToLogin { route: String },
    /// The user's tier meets the requirement
    Granted { current: PlanTier },
    /// The user's tier is too low
    Denied(RestrictedNotice),
    /// The view went away before the check finished; nothing is stored
    Cancelled,
}

impl GuardDecision {
    pub fn is_granted(&self) -> bool {
        matches!(self, GuardDecision::Granted { .. })
    }

    /// Compare `current` against the requirement in `config`
    pub fn evaluate(current: PlanTier, config: &GuardConfig) -> Self {
        Self::evaluate_named(current, current.as_str(), config)
    }

    /// Like [`GuardDecision::evaluate`], showing `current_name` on a denial
    pub fn evaluate_named(current: PlanTier, current_name: &str, config: &GuardConfig) -> Self {
        if current.satisfies(config.required) {
            GuardDecision::Granted { current }
        } else {
            GuardDecision::Denied(RestrictedNotice {
                message: config.fallback_message.clone(),
                current,
                current_name: current_name.to_string(),
                required: config.required,
                upgrade_route: config.upgrade_route.clone(),
                home_route: config.home_route.clone(),
            })
        }
    }
}

/// Guard lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardState {
    /// No decision yet
    Loading,
    Decided(GuardDecision),
}

/// What the protected view should show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardView<T> {
    /// Check pending: show a loading indicator, never the content
    Loading,
    /// Navigate to the given route
    Redirect(String),
    Restricted(RestrictedNotice),
    /// The protected content, unmodified
    Content(T),
}

/// Access guard around one protected view
pub struct PlanGuard<S> {
    source: S,
    config: GuardConfig,
    state: GuardState,
}

impl<S: TierSource> PlanGuard<S> {
    pub fn new(source: S, required: PlanTier) -> Self {
        Self::with_config(source, GuardConfig::new(required))
    }

    pub fn with_config(source: S, config: GuardConfig) -> Self {
        Self {
            source,
            config,
            state: GuardState::Loading,
        }
    }

    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    pub fn state(&self) -> &GuardState {
        &self.state
    }

    /// Run the authorization check and store its decision
    ///
    /// A cancelled context yields [`GuardDecision::Cancelled`] and leaves the
    /// guard in [`GuardState::Loading`]. There is no timeout: a lookup that
    /// never answers keeps the guard loading.
    pub async fn check(&mut self, ctx: &RequestContext) -> GuardDecision {
        let decision = self.decide(ctx).await;

        if decision != GuardDecision::Cancelled {
            debug!(
                "Access check for {} decided: {:?}",
                self.config.required, decision
            );
            self.state = GuardState::Decided(decision.clone());
        }

        decision
    }

    /// Check (if not already decided) and render
    pub async fn protect<T>(&mut self, ctx: &RequestContext, children: T) -> GuardView<T> {
        if self.state == GuardState::Loading {
            self.check(ctx).await;
        }
        self.render(children)
    }

    /// View for the current state
    pub fn render<T>(&self, children: T) -> GuardView<T> {
        match &self.state {
            GuardState::Loading | GuardState::Decided(GuardDecision::Cancelled) => {
                GuardView::Loading
            }
            GuardState::Decided(GuardDecision::RedirectToLogin { route }) => {
                GuardView::Redirect(route.clone())
            }
            GuardState::Decided(GuardDecision::Granted { .. }) => GuardView::Content(children),
            GuardState::Decided(GuardDecision::Denied(notice)) => {
                GuardView::Restricted(notice.clone())
            }
        }
    }

    async fn decide(&self, ctx: &RequestContext) -> GuardDecision {
        if ctx.is_cancelled() {
            return GuardDecision::Cancelled;
        }

        if ctx.session().token().is_none() {
            debug!("No session token, redirecting to {}", self.config.login_route);
            return self.redirect_to_login();
        }

        let (current, current_name) = match self.source.fetch_tier(ctx).await {
            Ok(response) => match (response.tier(), response.display_name()) {
                (Some(tier), Some(name)) => (tier, name),
                _ if response.status == StatusCode::UNAUTHORIZED
                    && self.config.redirect_on_unauthorized =>
                {
                    debug!("Plan lookup rejected the session, redirecting to login");
                    return self.redirect_to_login();
                }
                _ => {
                    warn!(
                        "Plan lookup returned {}, assuming {}",
                        response.status,
                        PlanTier::Free
                    );
                    (PlanTier::Free, PlanTier::Free.as_str().to_string())
                }
            },
            Err(ApiError::Cancelled) => return GuardDecision::Cancelled,
            Err(e) => {
                warn!("Plan lookup failed, assuming {}: {}", PlanTier::Free, e);
                (PlanTier::Free, PlanTier::Free.as_str().to_string())
            }
        };

        if ctx.is_cancelled() {
            return GuardDecision::Cancelled;
        }

        GuardDecision::evaluate_named(current, &current_name, &self.config)
    }

    fn redirect_to_login(&self) -> GuardDecision {
        GuardDecision::RedirectToLogin {
            route: self.config.login_route.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use gabarita_session::{Session, SessionToken};
    use serde_json::{json, Value};

    use super::*;
    use crate::lookup::TierResponse;

    /// Canned lookup that counts calls
    struct StaticSource {
        result: fn() -> gabarita_api::Result<TierResponse>,
        calls: AtomicUsize,
    }

    impl StaticSource {
        fn new(result: fn() -> gabarita_api::Result<TierResponse>) -> Self {
            Self {
                result,
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TierSource for StaticSource {
        async fn fetch_tier(&self, _ctx: &RequestContext) -> gabarita_api::Result<TierResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.result)()
        }
    }

    fn ok(body: Value) -> gabarita_api::Result<TierResponse> {
        Ok(TierResponse::new(StatusCode::OK, body))
    }

    fn signed_in() -> RequestContext {
        RequestContext::new(Session::with_token(SessionToken::new("tok").unwrap()))
    }

    #[tokio::test]
    async fn test_no_session_redirects_without_lookup() {
        let source = StaticSource::new(|| ok(json!({ "plano": "vip" })));
        let mut guard = PlanGuard::new(&source, PlanTier::Free);
        let ctx = RequestContext::new(Session::in_memory());

        let decision = guard.check(&ctx).await;

        assert_eq!(
            decision,
            GuardDecision::RedirectToLogin {
                route: "/login".to_string()
            }
        );
        assert_eq!(source.calls(), 0);
        assert_eq!(guard.render("page"), GuardView::Redirect("/login".to_string()));
    }

    #[tokio::test]
    async fn test_granted_renders_children() {
        let source = StaticSource::new(|| ok(json!({ "plano": "premium" })));
        let mut guard = PlanGuard::new(&source, PlanTier::Basic);

        let view = guard.protect(&signed_in(), "page").await;

        assert_eq!(view, GuardView::Content("page"));
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_denied_renders_notice() {
        let source = StaticSource::new(|| ok(json!({ "plano": "basico" })));
        let mut guard = PlanGuard::new(&source, PlanTier::Vip);

        match guard.protect(&signed_in(), "page").await {
            GuardView::Restricted(notice) => {
                assert_eq!(notice.current_plan_line(), "Seu plano atual: basico");
                assert_eq!(notice.required_plan_line(), "Plano necessário: vip");
                assert_eq!(notice.upgrade_route, "/planos");
                assert_eq!(notice.home_route, "/");
            }
            other => panic!("Expected restricted notice, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unknown_plan_name_shown_verbatim_but_ranked_free() {
        let source = StaticSource::new(|| ok(json!({ "plano": "ouro" })));
        let mut guard = PlanGuard::new(&source, PlanTier::Basic);

        match guard.check(&signed_in()).await {
            GuardDecision::Denied(notice) => {
                assert_eq!(notice.current, PlanTier::Free);
                assert_eq!(notice.current_plan_line(), "Seu plano atual: ouro");
            }
            other => panic!("Expected denial, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_error_status_downgrades_to_free_ignoring_body() {
        let source = StaticSource::new(|| {
            Ok(TierResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "plano": "vip" }),
            ))
        });
        let mut guard = PlanGuard::new(&source, PlanTier::Basic);

        let decision = guard.check(&signed_in()).await;

        match decision {
            GuardDecision::Denied(notice) => {
                assert_eq!(notice.current, PlanTier::Free);
                assert_eq!(notice.current_plan_line(), "Seu plano atual: gratuito");
            }
            other => panic!("Expected denial, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_lookup_error_downgrades_to_free() {
        let source = StaticSource::new(|| Err(ApiError::Decode("bad body".to_string())));
        let mut guard = PlanGuard::new(&source, PlanTier::Free);

        // Free content stays reachable when the lookup fails
        let decision = guard.check(&signed_in()).await;
        assert_eq!(
            decision,
            GuardDecision::Granted {
                current: PlanTier::Free
            }
        );
    }

    #[tokio::test]
    async fn test_unauthorized_downgrades_by_default() {
        let source = StaticSource::new(|| {
            Ok(TierResponse::new(StatusCode::UNAUTHORIZED, json!({})))
        });
        let mut guard = PlanGuard::new(&source, PlanTier::Free);

        assert!(guard.check(&signed_in()).await.is_granted());
    }

    #[tokio::test]
    async fn test_unauthorized_redirects_when_enabled() {
        let source = StaticSource::new(|| {
            Ok(TierResponse::new(StatusCode::UNAUTHORIZED, json!({})))
        });
        let config = GuardConfig::new(PlanTier::Free).with_redirect_on_unauthorized(true);
        let mut guard = PlanGuard::with_config(&source, config);

        assert!(matches!(
            guard.check(&signed_in()).await,
            GuardDecision::RedirectToLogin { .. }
        ));
    }

    #[tokio::test]
    async fn test_cancelled_check_stores_nothing() {
        let source = StaticSource::new(|| ok(json!({ "plano": "vip" })));
        let mut guard = PlanGuard::new(&source, PlanTier::Free);
        let ctx = signed_in();
        ctx.cancel();

        assert_eq!(guard.check(&ctx).await, GuardDecision::Cancelled);
        assert_eq!(guard.state(), &GuardState::Loading);
        assert_eq!(guard.render("page"), GuardView::Loading);
        assert_eq!(source.calls(), 0);
    }

    #[tokio::test]
    async fn test_cancelled_lookup_error_stores_nothing() {
        let source = StaticSource::new(|| Err(ApiError::Cancelled));
        let mut guard = PlanGuard::new(&source, PlanTier::Free);

        assert_eq!(guard.check(&signed_in()).await, GuardDecision::Cancelled);
        assert_eq!(guard.state(), &GuardState::Loading);
    }

    #[test]
    fn test_loading_before_check() {
        let source = StaticSource::new(|| ok(json!({ "plano": "vip" })));
        let guard = PlanGuard::new(&source, PlanTier::Free);

        assert_eq!(guard.render("page"), GuardView::Loading);
    }

    #[test]
    fn test_custom_fallback_message() {
        let config = GuardConfig::new(PlanTier::Premium).with_fallback_message("Só para assinantes");
        match GuardDecision::evaluate(PlanTier::Basic, &config) {
            GuardDecision::Denied(notice) => assert_eq!(notice.message, "Só para assinantes"),
            other => panic!("Expected denial, got {:?}", other),
        }
    }
}
