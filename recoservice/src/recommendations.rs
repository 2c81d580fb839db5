use std::fmt;

use crate::api::{RecoResponse, UserId};

/// Users with id above this value are never known to the service
pub const MAX_USER_ID: u64 = 1_000_000_000;

/// Models that can be asked for recommendations
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ModelName {
    Test,
    Mock,
}

impl ModelName {
    pub const ALL: [ModelName; 2] = [ModelName::Test, ModelName::Mock];

    /// Exact, case-sensitive match against the known model names
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|model| model.as_str() == name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelName::Test => "test_model",
            ModelName::Mock => "mock_model",
        }
    }
}

impl fmt::Display for ModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
pub enum RecoError {
    #[error("Model {} not found. Available models: {}", .0, available_models())]
    ModelNotFound(String),

    #[error("User {0} not found")]
    UserNotFound(UserId),
}

impl RecoError {
    pub fn error_key(&self) -> &'static str {
        match self {
            RecoError::ModelNotFound(_) => "model_not_found",
            RecoError::UserNotFound(_) => "user_not_found",
        }
    }
}

fn available_models() -> String {
    let names: Vec<String> = ModelName::ALL
        .iter()
        .map(|model| format!("'{}'", model))
        .collect();
    format!("[{}]", names.join(", "))
}

/// Validates the request and returns the placeholder recommendations,
/// which are always the first `k_recs` item ids
pub fn recommend(
    model_name: &str,
    user_id: UserId,
    k_recs: usize,
) -> Result<RecoResponse, RecoError> {
    ModelName::parse(model_name)
        .ok_or_else(|| RecoError::ModelNotFound(model_name.to_string()))?;

    // Negative ids pass, only the upper bound is checked
    if user_id.is_above(MAX_USER_ID) {
        return Err(RecoError::UserNotFound(user_id));
    }

    Ok(RecoResponse {
        user_id,
        items: (0..k_recs).collect(),
    })
}
