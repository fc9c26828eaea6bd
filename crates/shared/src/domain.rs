use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identifier used to address a single robot's detail page.
///
/// Anything that implements `Display` converts into it, so numeric ids are
/// stringified the same way the view layer would print them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RobotId(pub String);

impl RobotId {
    pub fn new(value: impl fmt::Display) -> Self {
        Self(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RobotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RobotId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RobotId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A robot record exactly as the collection endpoint returned it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Robot(pub Value);

impl Robot {
    /// Reads the record's `id` field for display. Strings and numbers are
    /// accepted; any other shape yields `None`.
    pub fn id(&self) -> Option<RobotId> {
        match self.0.get("id")? {
            Value::String(id) => Some(RobotId(id.clone())),
            Value::Number(id) => Some(RobotId(id.to_string())),
            _ => None,
        }
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for Robot {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
