use serde::de::Error;
use serde::{Deserialize, Deserializer};

/// Custom deserializer for required text fields that rejects empty or blank strings
pub fn deserialize_non_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;

    if s.trim().is_empty() {
        return Err(Error::custom("field cannot be empty"));
    }

    Ok(s)
}

/// Custom deserializer for phrase lists that drops blank phrases and accepts `null`
pub fn deserialize_phrases<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let phrases = Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(phrases.into_iter().filter(|p| !p.trim().is_empty()).collect())
}
