use std::fmt;

use configs::{score_in_range, WorkshopConfig};
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::errors::ServiceError;

/// The workshop record exposed on `/workshop`.
///
/// Decoding is lenient about absent keys: a missing or `null` field becomes the
/// empty value of its type, so a replace never inherits the previous record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workshop {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(rename = "presentator", default, deserialize_with = "null_as_default")]
    pub presenter: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub participants: Vec<String>,
    #[serde(rename = "sweaterscore", default, deserialize_with = "null_as_default")]
    pub sweater_score: i64,
}

const WIRE_KEYS: [&str; 5] = ["name", "date", "presentator", "participants", "sweaterscore"];

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Top-level object members in document order, duplicates kept.
/// A literal `null` document yields no members.
struct Members(Vec<(String, Value)>);

impl<'de> Deserialize<'de> for Members {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MembersVisitor;

        impl<'de> de::Visitor<'de> for MembersVisitor {
            type Value = Members;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a workshop JSON object")
            }

            fn visit_unit<E: de::Error>(self) -> Result<Members, E> {
                Ok(Members(Vec::new()))
            }

            fn visit_map<A: de::MapAccess<'de>>(self, mut map: A) -> Result<Members, A::Error> {
                let mut members = Vec::new();
                while let Some(entry) = map.next_entry::<String, serde_json::Value>()? {
                    members.push(entry);
                }
                Ok(Members(members))
            }
        }

        deserializer.deserialize_any(MembersVisitor)
    }
}

impl Members {
    /// Fold keys onto the wire names case-insensitively; the last non-null
    /// member for a field wins, unknown keys are dropped.
    fn into_document(self) -> Value {
        let mut doc = Map::new();
        for (key, value) in self.0 {
            if value.is_null() {
                continue;
            }
            let key = key.to_lowercase();
            if let Some(wire) = WIRE_KEYS.iter().find(|w| **w == key) {
                doc.insert((*wire).to_string(), value);
            }
        }
        Value::Object(doc)
    }
}

impl Workshop {
    /// Built-in record served until the first successful replace.
    pub fn template(sweater_score: i64) -> Self {
        Self {
            name: "ALM Workshop".to_string(),
            date: "1/12/2025".to_string(),
            presenter: "AE Consultants".to_string(),
            participants: ["John Doe", "Mary Little Lamb", "Chuck Norris", "Joe Ayoub"]
                .into_iter()
                .map(String::from)
                .collect(),
            sweater_score,
        }
    }

    /// Template seeded with the score resolved at startup.
    pub fn from_config(cfg: &WorkshopConfig) -> Self {
        Self::template(cfg.sweater_score)
    }

    /// Decode a request body. Only an object is a workshop document; a literal
    /// `null` decodes to the empty record. Keys match the wire names without
    /// regard to case.
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let members: Members = serde_json::from_slice(bytes)?;
        serde_json::from_value(members.into_document())
    }

    pub fn validate(&self) -> Result<(), ServiceError> {
        if !score_in_range(self.sweater_score) {
            return Err(ServiceError::InvalidSweaterScore(self.sweater_score));
        }
        Ok(())
    }
}
