use std::fmt;
use std::str::FromStr;

use paperclip::actix::Apiv2Schema;
use paperclip::v2::models::DataType;
use paperclip::v2::schema::TypedData;
use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;

pub type ItemId = usize;

/// Decimal user id of any magnitude, stored without sign noise or leading zeros
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct UserId {
    negative: bool,
    digits: String,
}

#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
#[error("value is not a valid integer: {0:?}")]
pub struct InvalidUserId(pub String);

impl UserId {
    /// True if the id is strictly greater than `bound`
    pub fn is_above(&self, bound: u64) -> bool {
        if self.negative {
            return false;
        }
        // More than 20 digits never fits in u64
        if self.digits.len() > 20 {
            return true;
        }
        self.digits
            .parse::<u128>()
            .map(|value| value > u128::from(bound))
            .unwrap_or(true)
    }
}

impl FromStr for UserId {
    type Err = InvalidUserId;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (negative, unsigned) = match value.as_bytes().first() {
            Some(b'-') => (true, &value[1..]),
            Some(b'+') => (false, &value[1..]),
            _ => (false, value),
        };
        if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidUserId(value.to_string()));
        }
        let digits = unsigned.trim_start_matches('0');
        if digits.is_empty() {
            return Ok(Self::from(0_i64));
        }
        Ok(Self {
            negative,
            digits: digits.to_string(),
        })
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self {
            negative: value < 0,
            digits: value.unsigned_abs().to_string(),
        }
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str(&self.digits)
    }
}

// Written as a bare JSON number whatever its size
impl Serialize for UserId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RawValue::from_string(self.to_string())
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        raw.get().parse().map_err(D::Error::custom)
    }
}

impl TypedData for UserId {
    fn data_type() -> DataType {
        DataType::Integer
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq, Apiv2Schema)]
/// Recommendations generated for a single user
pub struct RecoResponse {
    /// Id of the user who requested recommendations
    pub user_id: UserId,
    /// Recommended item ids, in ranking order
    pub items: Vec<ItemId>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq, Apiv2Schema)]
/// Path parameters of the recommendations endpoint
pub struct RecoPath {
    pub model_name: String,
    /// Decimal integer, validated by the handler
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq, Apiv2Schema)]
/// Single error entry returned by the service
pub struct ErrorDetails {
    /// Machine readable error identifier, e.g. `model_not_found`
    pub error_key: String,
    /// Human readable description of the error
    pub error_message: String,
    /// Where in the request the error was found, only set for validation errors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_loc: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq, Apiv2Schema)]
pub struct ErrorResponse {
    pub errors: Vec<ErrorDetails>,
}

/// Outcome of a recommendations call as seen by the client
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum RecoReply {
    Recommendations(RecoResponse),
    NotFound(ErrorResponse),
}
