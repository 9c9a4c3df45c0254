use serde::{Deserialize, Serialize};

/// Placeholder written into the table when a page yields no usable value.
pub const NOT_FOUND: &str = "not found";

/// One scraped rental listing, numeric values kept as strings the way they
/// were read off the page. Rooms is the only mandatory field; a listing
/// without a room count is dropped before it ever becomes a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingRecord {
    #[serde(rename = "Price", with = "sentinel")]
    pub price: Option<String>,
    #[serde(rename = "Size", with = "sentinel")]
    pub size: Option<String>,
    #[serde(rename = "Rooms")]
    pub rooms: String,
}

/// Maps absent price/size to the sentinel string in the exported table and
/// back again on load.
mod sentinel {
    use super::NOT_FOUND;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value.as_deref().unwrap_or(NOT_FOUND))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(if raw == NOT_FOUND { None } else { Some(raw) })
    }
}
