//! Wire models for the OAuth and REST endpoints

use serde::{Deserialize, Serialize};

// Re-export sobject-models types
pub use sfgen_models::{GlobalObjects, PickListValue, SObject, SObjectDescription, SObjectField};

/// Successful response of `POST /services/oauth2/token`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub instance_url: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub issued_at: Option<String>,
}

/// Error body of the OAuth endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuthError {
    pub error: String,
    #[serde(default)]
    pub error_description: Option<String>,
}

impl std::fmt::Display for OAuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.error_description {
            Some(desc) => write!(f, "{} ({})", self.error, desc),
            None => f.write_str(&self.error),
        }
    }
}

/// One entry of the error array returned by the REST API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub error_code: String,
    pub message: String,
    #[serde(default)]
    pub fields: Vec<String>,
}
