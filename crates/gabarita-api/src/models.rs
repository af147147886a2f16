//! Optional typed views over backend bodies
//!
//! The request helpers return bodies verbatim. These types let callers read
//! the conventional `{ success, data }` envelope without committing the API
//! layer to any schema.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Conventional backend response envelope
///
/// A missing `success` flag reads as `false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct ApiEnvelope<T = Value> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default, alias = "mensagem", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: DeserializeOwned> ApiEnvelope<T> {
    /// Decode a body returned by one of the request helpers
    pub fn from_value(body: Value) -> Result<Self> {
        Ok(serde_json::from_value(body)?)
    }

    /// The payload, only when the backend reported success
    pub fn into_data(self) -> Option<T> {
        if self.success {
            self.data
        } else {
            None
        }
    }
}

/// Payment checkout handed back by `/api/pagamentos/criar`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Provider checkout URL the user must be sent to
    #[serde(default)]
    pub init_point: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl CheckoutSession {
    /// Extract the checkout from a payment-creation body
    ///
    /// `None` unless the body reports success and carries a non-empty `init_point`.
    pub fn from_body(body: &Value) -> Option<Self> {
        let envelope = ApiEnvelope::<CheckoutSession>::from_value(body.clone()).ok()?;
        envelope
            .into_data()
            .filter(|checkout| checkout.checkout_url().is_some())
    }

    pub fn checkout_url(&self) -> Option<&str> {
        self.init_point.as_deref().filter(|url| !url.is_empty())
    }
}

/// Practice exam ("simulado") settings sent to `/api/simulados/criar`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamConfig {
    /// Subject
    #[serde(rename = "materia")]
    pub subject: String,
    /// Difficulty
    #[serde(rename = "dificuldade")]
    pub difficulty: String,
    /// Number of questions
    #[serde(rename = "quantidade")]
    pub question_count: u32,
    /// Time limit in minutes
    #[serde(rename = "tempo")]
    pub time_limit_minutes: u32,
}

impl Default for ExamConfig {
    fn default() -> Self {
        Self {
            subject: "matematica".to_string(),
            difficulty: "medio".to_string(),
            question_count: 10,
            time_limit_minutes: 60,
        }
    }
}
