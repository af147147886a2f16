//! API client and request builder

use std::future::Future;
use std::sync::Arc;

use gabarita_http::{
    header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    HttpClient, Method, Response, StatusCode,
};
use gabarita_session::Session;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::{
    config::ApiConfig,
    context::RequestContext,
    error::{ApiError, Result},
    services::{
        AuthService, DashboardService, EssayService, ExamService, NewsService, PaymentService,
        PlanService, QuestionService, RankingService, SupportService, UserService,
    },
};

/// Client for the Gabarita backend
///
/// Holds the base URL and the shared transport. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Arc<HttpClient>,
    config: Arc<ApiConfig>,
}

impl ApiClient {
    /// Create a client from configuration
    pub fn new(config: ApiConfig) -> Result<Self> {
        config.validate()?;
        let http = gabarita_http::shared_client(config.http.clone())?;

        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    /// Create a client whose base URL comes from the environment
    pub fn from_env() -> Result<Self> {
        Self::new(ApiConfig::from_env())
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Start a request to `path` (e.g. `/api/planos`)
    ///
    /// Requests are authenticated by default; see [`ApiRequest::unauthenticated`].
    pub fn request<'a>(
        &'a self,
        ctx: &'a RequestContext,
        method: Method,
        path: impl Into<String>,
    ) -> ApiRequest<'a> {
        ApiRequest {
            client: self,
            ctx,
            method,
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
            authenticated: true,
        }
    }

    pub fn get<'a>(&'a self, ctx: &'a RequestContext, path: impl Into<String>) -> ApiRequest<'a> {
        self.request(ctx, Method::GET, path)
    }

    pub fn post<'a>(&'a self, ctx: &'a RequestContext, path: impl Into<String>) -> ApiRequest<'a> {
        self.request(ctx, Method::POST, path)
    }

    pub fn put<'a>(&'a self, ctx: &'a RequestContext, path: impl Into<String>) -> ApiRequest<'a> {
        self.request(ctx, Method::PUT, path)
    }

    pub fn auth(&self) -> AuthService<'_> {
        AuthService::new(self)
    }

    pub fn users(&self) -> UserService<'_> {
        UserService::new(self)
    }

    pub fn plans(&self) -> PlanService<'_> {
        PlanService::new(self)
    }

    pub fn questions(&self) -> QuestionService<'_> {
        QuestionService::new(self)
    }

    pub fn exams(&self) -> ExamService<'_> {
        ExamService::new(self)
    }

    pub fn dashboard(&self) -> DashboardService<'_> {
        DashboardService::new(self)
    }

    pub fn payments(&self) -> PaymentService<'_> {
        PaymentService::new(self)
    }

    pub fn essays(&self) -> EssayService<'_> {
        EssayService::new(self)
    }

    pub fn news(&self) -> NewsService<'_> {
        NewsService::new(self)
    }

    pub fn ranking(&self) -> RankingService<'_> {
        RankingService::new(self)
    }

    pub fn support(&self) -> SupportService<'_> {
        SupportService::new(self)
    }
}

/// A single request being prepared against the backend
#[must_use = "requests do nothing until sent"]
pub struct ApiRequest<'a> {
    client: &'a ApiClient,
    ctx: &'a RequestContext,
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    body: Option<Value>,
    authenticated: bool,
}

impl<'a> ApiRequest<'a> {
    /// Append query-string pairs
    pub fn query<K, V>(mut self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.query
            .extend(pairs.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Per-call header; overrides the defaults of the same name
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// JSON request body
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Do not send the session token with this request
    pub fn unauthenticated(mut self) -> Self {
        self.authenticated = false;
        self
    }

    /// Send and return the raw response, whatever its status
    pub async fn send_raw(self) -> Result<Response> {
        let ctx = self.ctx;
        cancellable(ctx, self.dispatch()).await
    }

    /// Send and return the parsed JSON body, whatever its status
    pub async fn send(self) -> Result<Value> {
        let ctx = self.ctx;
        cancellable(ctx, async move {
            let response = self.dispatch().await?;
            let body = response.json::<Value>().await?;
            Ok(body)
        })
        .await
    }

    /// Send and return the status together with the parsed JSON body
    pub async fn send_with_status(self) -> Result<(StatusCode, Value)> {
        let ctx = self.ctx;
        cancellable(ctx, async move {
            let response = self.dispatch().await?;
            let status = response.status();
            let body = response.json::<Value>().await?;
            Ok((status, body))
        })
        .await
    }

    async fn dispatch(self) -> Result<Response> {
        let url = self.client.config.endpoint(&self.path);
        let headers = build_headers(self.ctx.session(), self.authenticated, &self.headers)?;

        let mut request = self
            .client
            .http
            .request(self.method, &url)?
            .headers(headers);

        if !self.query.is_empty() {
            request = request.query(&self.query);
        }
        if let Some(body) = &self.body {
            request = request.body(body.to_string());
        }

        let response = self.client.http.send(request).await?;
        debug!("{} -> {}", self.path, response.status());
        Ok(response)
    }
}

/// Headers sent with every request
///
/// `Content-Type: application/json` always; `Authorization: Bearer <token>`
/// when `authenticated` and the session holds a token; then per-call
/// overrides, which replace defaults of the same name.
pub fn build_headers(
    session: &Session,
    authenticated: bool,
    overrides: &[(String, String)],
) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    if authenticated {
        if let Some(token) = session.token() {
            let mut value = HeaderValue::from_str(&token.bearer()).map_err(|e| {
                ApiError::InvalidHeader {
                    name: AUTHORIZATION.to_string(),
                    message: e.to_string(),
                }
            })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
    }

    for (name, value) in overrides {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| ApiError::InvalidHeader {
                name: name.clone(),
                message: e.to_string(),
            })?;
        let header_value = HeaderValue::from_str(value).map_err(|e| ApiError::InvalidHeader {
            name: name.clone(),
            message: e.to_string(),
        })?;
        headers.insert(header_name, header_value);
    }

    Ok(headers)
}

async fn cancellable<T, F>(ctx: &RequestContext, operation: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    if ctx.is_cancelled() {
        return Err(ApiError::Cancelled);
    }

    tokio::select! {
        biased;
        _ = ctx.cancel_token().cancelled() => Err(ApiError::Cancelled),
        result = operation => result,
    }
}

#[cfg(test)]
mod tests {
    use gabarita_session::SessionToken;

    use super::*;

    #[test]
    fn test_headers_without_token() {
        let headers = build_headers(&Session::in_memory(), true, &[]).unwrap();
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_headers_with_token() {
        let session = Session::with_token(SessionToken::new("abc").unwrap());
        let headers = build_headers(&session, true, &[]).unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer abc");
    }

    #[test]
    fn test_unauthenticated_skips_token() {
        let session = Session::with_token(SessionToken::new("abc").unwrap());
        let headers = build_headers(&session, false, &[]).unwrap();
        assert!(headers.get(AUTHORIZATION).is_none());
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn test_overrides_replace_defaults() {
        let session = Session::with_token(SessionToken::new("abc").unwrap());
        let overrides = vec![
            ("Content-Type".to_string(), "text/plain".to_string()),
            ("Authorization".to_string(), "Bearer other".to_string()),
            ("X-Trace".to_string(), "1".to_string()),
        ];
        let headers = build_headers(&session, true, &overrides).unwrap();

        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "text/plain");
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer other");
        assert_eq!(headers.get("x-trace").unwrap(), "1");
        assert_eq!(headers.get_all(CONTENT_TYPE).iter().count(), 1);
    }

    #[test]
    fn test_invalid_override_name() {
        let overrides = vec![("bad header".to_string(), "x".to_string())];
        let result = build_headers(&Session::in_memory(), true, &overrides);
        assert!(matches!(result, Err(ApiError::InvalidHeader { .. })));
    }

    #[test]
    fn test_client_rejects_invalid_base_url() {
        let result = ApiClient::new(ApiConfig::with_base_url("::nope::"));
        assert!(matches!(result, Err(ApiError::Config(_))));
    }

    #[tokio::test]
    async fn test_cancelled_context_short_circuits() {
        let client = ApiClient::new(ApiConfig::with_base_url("http://127.0.0.1:1")).unwrap();
        let ctx = RequestContext::new(Session::in_memory());
        ctx.cancel();

        let result = client.get(&ctx, "/api/planos").send().await;
        assert!(matches!(result, Err(ApiError::Cancelled)));
    }
}
