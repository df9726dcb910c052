//! # Ad Network Records
//!
//! The persisted record type plus the request payloads that create and
//! update it. String fields are stored lowercase; body keys are matched
//! case-insensitively.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One ad network entry as stored in the data file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdNetwork {
    pub id: i64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub value: i64,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub osversion: String,
    #[serde(default)]
    pub appname: String,
    #[serde(default)]
    pub appversion: String,
    #[serde(default)]
    pub countrycode: String,
    #[serde(default)]
    pub adtype: String,
}

impl AdNetwork {
    /// Build a stored record from a creation payload and an assigned id
    pub fn from_new(id: i64, new: NewAdNetwork) -> Self {
        let new = new.normalized();
        Self {
            id,
            description: new.description,
            value: new.value,
            platform: new.platform,
            osversion: new.osversion,
            appname: new.appname,
            appversion: new.appversion,
            countrycode: new.countrycode,
            adtype: new.adtype,
        }
    }

    /// Render as a JSON document for the query engine
    pub fn to_document(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Creation payload. Any `id` in the body is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NewAdNetwork {
    pub description: String,
    pub value: i64,
    pub platform: String,
    pub osversion: String,
    pub appname: String,
    pub appversion: String,
    pub countrycode: String,
    pub adtype: String,
}

impl NewAdNetwork {
    /// Parse a request body, matching keys case-insensitively
    pub fn from_body(body: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(lowercase_keys(body))
    }

    /// Lowercase every string field
    pub fn normalized(self) -> Self {
        Self {
            description: self.description.to_lowercase(),
            value: self.value,
            platform: self.platform.to_lowercase(),
            osversion: self.osversion.to_lowercase(),
            appname: self.appname.to_lowercase(),
            appversion: self.appversion.to_lowercase(),
            countrycode: self.countrycode.to_lowercase(),
            adtype: self.adtype.to_lowercase(),
        }
    }
}

/// Update payload. Only `value` is ever committed; other keys are accepted
/// and dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ValueUpdate {
    #[serde(default)]
    pub value: Option<i64>,
}

impl ValueUpdate {
    pub fn new(value: i64) -> Self {
        Self { value: Some(value) }
    }

    /// Parse a request body, matching keys case-insensitively
    pub fn from_body(body: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(lowercase_keys(body))
    }
}

/// Lowercase the keys of a top-level JSON object; other values pass through.
///
/// On duplicate keys after lowercasing, the last one in document order wins.
fn lowercase_keys(body: Value) -> Value {
    match body {
        Value::Object(obj) => {
            let mut lowered = Map::with_capacity(obj.len());
            for (key, value) in obj {
                lowered.insert(key.to_lowercase(), value);
            }
            Value::Object(lowered)
        }
        other => other,
    }
}
