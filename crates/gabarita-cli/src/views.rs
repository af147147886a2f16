//! Typed views over backend payloads and the fallback loader
//!
//! Pages never fail on a data-loading error: the failure is logged and the
//! page renders its empty state.

use std::future::Future;

use anyhow::{anyhow, Context};
use gabarita_api::{ApiEnvelope, ApiError};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::error;

use crate::error::{CliError, CliResult};

/// Dashboard statistics (`/api/dashboard/estatisticas`)
///
/// Each field decodes on its own: a `null`, missing or oddly typed value
/// reads as zero without affecting its neighbours.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardStats {
    #[serde(deserialize_with = "lenient::count")]
    pub simulados_realizados: u64,
    #[serde(deserialize_with = "lenient::count")]
    pub questoes_respondidas: u64,
    #[serde(deserialize_with = "lenient::count")]
    pub acertos: u64,
    #[serde(deserialize_with = "lenient::number")]
    pub media_geral: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub tempo_estudo: f64,
}

impl DashboardStats {
    /// Percentage of correct answers, rounded; 0 when nothing was answered
    pub fn hit_rate(&self) -> u64 {
        if self.questoes_respondidas == 0 {
            return 0;
        }
        (self.acertos as f64 / self.questoes_respondidas as f64 * 100.0).round() as u64
    }
}

/// Account panel data (`/api/usuario/perfil`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    #[serde(deserialize_with = "lenient::optional_text")]
    pub nome: Option<String>,
    #[serde(deserialize_with = "lenient::optional_text")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient::optional_text")]
    pub plano: Option<String>,
    #[serde(deserialize_with = "lenient::optional_text")]
    pub data_cadastro: Option<String>,
}

/// One entry of the plans listing
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Plan {
    pub id: Value,
    #[serde(deserialize_with = "lenient::text")]
    pub nome: String,
    #[serde(deserialize_with = "lenient::number")]
    pub preco: f64,
    #[serde(deserialize_with = "lenient::text")]
    pub descricao: String,
    #[serde(deserialize_with = "lenient::text_list")]
    pub recursos: Vec<String>,
    #[serde(deserialize_with = "lenient::flag")]
    pub popular: bool,
}

/// Field decoders that fall back to the default instead of failing
mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    fn as_number(value: &Value) -> Option<f64> {
        let number: Option<f64> = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        };
        number.filter(|n| n.is_finite())
    }

    fn as_text(value: Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    pub fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(as_number(&value).unwrap_or_default())
    }

    /// Non-negative whole number; fractional values are rounded
    pub fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(as_number(&value)
            .filter(|n| *n >= 0.0)
            .map(|n| n.round() as u64)
            .unwrap_or_default())
    }

    pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(optional_text(deserializer)?.unwrap_or_default())
    }

    pub fn optional_text<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        Ok(as_text(Value::deserialize(deserializer)?))
    }

    /// Text entries of an array; anything else reads as empty
    pub fn text_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Array(items) => items.into_iter().filter_map(as_text).collect(),
            _ => Vec::new(),
        })
    }

    pub fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        Ok(matches!(Value::deserialize(deserializer)?, Value::Bool(true)))
    }
}

impl Plan {
    /// Plan id as sent back in payment requests
    pub fn id_label(&self) -> String {
        match &self.id {
            Value::String(id) => id.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        }
    }

    pub fn price_label(&self) -> String {
        if self.preco == 0.0 {
            "Grátis".to_string()
        } else {
            format!("R$ {:.2}", self.preco)
        }
    }
}

/// Await a request and decode its `data`, falling back to `T::default()`
///
/// Cancellation is not a loading failure and is returned as an error.
pub async fn load_or_default<T, F>(what: &str, request: F) -> CliResult<T>
where
    T: DeserializeOwned + Default,
    F: Future<Output = gabarita_api::Result<Value>>,
{
    match fetch_data(what, request).await {
        Ok(data) => Ok(data),
        Err(e) if matches!(e.downcast_ref::<ApiError>(), Some(ApiError::Cancelled)) => {
            Err(CliError::Api(ApiError::Cancelled))
        }
        Err(e) => {
            error!("{:#}", e);
            Ok(T::default())
        }
    }
}

async fn fetch_data<T, F>(what: &str, request: F) -> anyhow::Result<T>
where
    T: DeserializeOwned,
    F: Future<Output = gabarita_api::Result<Value>>,
{
    let body = request
        .await
        .with_context(|| format!("Failed to load {}", what))?;
    let envelope = ApiEnvelope::<T>::from_value(body)
        .with_context(|| format!("Unexpected {} payload", what))?;

    let message = envelope.message.clone();
    envelope.into_data().ok_or_else(|| match message {
        Some(message) => anyhow!("Failed to load {}: {}", what, message),
        None => anyhow!("Failed to load {}: backend reported failure", what),
    })
}

/// Turn a body whose `success` flag is false into [`CliError::Rejected`]
pub fn expect_success(body: Value, fallback: &str) -> CliResult<Value> {
    let envelope = ApiEnvelope::<Value>::from_value(body)
        .map_err(|_| CliError::Rejected(fallback.to_string()))?;

    if envelope.success {
        Ok(envelope.data.unwrap_or(Value::Null))
    } else {
        Err(CliError::Rejected(
            envelope.message.unwrap_or_else(|| fallback.to_string()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_hit_rate_rounds() {
        let stats = DashboardStats {
            questoes_respondidas: 3,
            acertos: 2,
            ..Default::default()
        };
        assert_eq!(stats.hit_rate(), 67);
    }

    #[test]
    fn test_hit_rate_without_answers_is_zero() {
        assert_eq!(DashboardStats::default().hit_rate(), 0);
    }

    #[test]
    fn test_stats_tolerate_missing_fields() {
        let stats: DashboardStats =
            serde_json::from_value(json!({ "acertos": 5, "outro": true })).unwrap();
        assert_eq!(stats.acertos, 5);
        assert_eq!(stats.simulados_realizados, 0);
    }

    #[test]
    fn test_stats_null_field_does_not_zero_the_rest() {
        let stats: DashboardStats = serde_json::from_value(json!({
            "acertos": 8,
            "questoes_respondidas": 10,
            "simulados_realizados": 3,
            "media_geral": null
        }))
        .unwrap();

        assert_eq!(stats.simulados_realizados, 3);
        assert_eq!(stats.media_geral, 0.0);
        assert_eq!(stats.hit_rate(), 80);
    }

    #[test]
    fn test_stats_accept_float_and_string_counts() {
        let stats: DashboardStats = serde_json::from_value(json!({
            "acertos": "7",
            "questoes_respondidas": 10.0,
            "tempo_estudo": "12.5",
            "simulados_realizados": -2
        }))
        .unwrap();

        assert_eq!(stats.acertos, 7);
        assert_eq!(stats.questoes_respondidas, 10);
        assert_eq!(stats.tempo_estudo, 12.5);
        assert_eq!(stats.simulados_realizados, 0);
        assert_eq!(stats.hit_rate(), 70);
    }

    #[tokio::test]
    async fn test_dashboard_payload_with_null_field_loads() {
        let stats: DashboardStats = load_or_default("stats", async {
            Ok(json!({
                "success": true,
                "data": { "acertos": 8, "questoes_respondidas": 10, "media_geral": null }
            }))
        })
        .await
        .unwrap();
        assert_eq!(stats.hit_rate(), 80);
    }

    #[test]
    fn test_profile_and_plan_tolerate_nulls() {
        let profile: UserProfile =
            serde_json::from_value(json!({ "nome": null, "email": "ana@example.com", "plano": 2 }))
                .unwrap();
        assert_eq!(profile.nome, None);
        assert_eq!(profile.email.as_deref(), Some("ana@example.com"));
        assert_eq!(profile.plano.as_deref(), Some("2"));

        let plan: Plan = serde_json::from_value(json!({
            "id": 1,
            "nome": "Premium",
            "preco": null,
            "descricao": null,
            "recursos": ["Simulados", null, "Redação"],
            "popular": null
        }))
        .unwrap();
        assert_eq!(plan.nome, "Premium");
        assert_eq!(plan.price_label(), "Grátis");
        assert_eq!(plan.recursos, vec!["Simulados".to_string(), "Redação".to_string()]);
        assert!(!plan.popular);
    }

    #[test]
    fn test_plan_price_labels() {
        let free = Plan::default();
        assert_eq!(free.price_label(), "Grátis");

        let paid = Plan {
            preco: 29.9,
            ..Default::default()
        };
        assert_eq!(paid.price_label(), "R$ 29.90");
    }

    #[test]
    fn test_plan_id_label() {
        let plan: Plan = serde_json::from_value(json!({ "id": 3, "nome": "VIP" })).unwrap();
        assert_eq!(plan.id_label(), "3");

        let plan: Plan = serde_json::from_value(json!({ "id": "premium" })).unwrap();
        assert_eq!(plan.id_label(), "premium");
    }

    #[tokio::test]
    async fn test_load_falls_back_on_failure_flag() {
        let stats: DashboardStats = load_or_default("stats", async {
            Ok(json!({ "success": false, "message": "boom" }))
        })
        .await
        .unwrap();
        assert_eq!(stats, DashboardStats::default());
    }

    #[tokio::test]
    async fn test_load_falls_back_on_transport_error() {
        let profile: UserProfile = load_or_default("profile", async {
            Err(ApiError::Decode("not json".to_string()))
        })
        .await
        .unwrap();
        assert_eq!(profile, UserProfile::default());
    }

    #[tokio::test]
    async fn test_load_propagates_cancellation() {
        let result: CliResult<UserProfile> =
            load_or_default("profile", async { Err(ApiError::Cancelled) }).await;
        assert!(matches!(result, Err(CliError::Api(ApiError::Cancelled))));
    }

    #[tokio::test]
    async fn test_load_returns_data() {
        let profile: UserProfile = load_or_default("profile", async {
            Ok(json!({ "success": true, "data": { "nome": "Ana", "plano": "vip" } }))
        })
        .await
        .unwrap();
        assert_eq!(profile.nome.as_deref(), Some("Ana"));
        assert_eq!(profile.plano.as_deref(), Some("vip"));
    }

    #[test]
    fn test_expect_success() {
        let data = expect_success(json!({ "success": true, "data": { "id": 1 } }), "x").unwrap();
        assert_eq!(data, json!({ "id": 1 }));

        let err = expect_success(json!({ "success": false, "mensagem": "Tema vazio" }), "x")
            .unwrap_err();
        assert!(matches!(err, CliError::Rejected(ref m) if m == "Tema vazio"));

        let err = expect_success(json!({ "success": false }), "Falhou").unwrap_err();
        assert!(matches!(err, CliError::Rejected(ref m) if m == "Falhou"));
    }
}
