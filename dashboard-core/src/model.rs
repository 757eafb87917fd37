use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field added to every stored record at write time.
pub const TIMESTAMP_FIELD: &str = "timestamp";

/// A weather observation as returned by the provider: the raw JSON mapping,
/// kept unmodified apart from the `timestamp` field inserted at write time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeatherRecord(Map<String, Value>);

impl WeatherRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Stamp the record with the write-time timestamp.
    pub fn set_timestamp(&mut self, timestamp: &str) {
        self.0.insert(TIMESTAMP_FIELD.to_owned(), Value::String(timestamp.to_owned()));
    }

    pub fn to_json_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(&self.0)
    }
}

/// Current local time as `YYYYMMDDHHMMSS`, the format used both inside the
/// record and in collision-avoidance keys.
pub fn timestamp_now() -> String {
    Local::now().format("%Y%m%d%H%M%S").to_string()
}

/// Default storage key for a city; never overwritten once present.
pub fn base_key(city: &str) -> String {
    format!("{city}_weather.json")
}

/// Collision-avoidance key used when the base key is already occupied.
pub fn timestamped_key(city: &str, timestamp: &str) -> String {
    format!("{city}_weather_{timestamp}.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn key_derivation() {
        assert_eq!(base_key("Seattle"), "Seattle_weather.json");
        assert_eq!(
            timestamped_key("Seattle", "20250101120000"),
            "Seattle_weather_20250101120000.json"
        );
    }

    #[test]
    fn timestamp_is_fourteen_digits() {
        let ts = timestamp_now();
        assert_eq!(ts.len(), 14);
        assert!(ts.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn set_timestamp_adds_field_and_keeps_payload() {
        let fields = json!({"main": {"temp": 70.0}})
            .as_object()
            .cloned()
            .unwrap();
        let mut record = WeatherRecord::new(fields);

        record.set_timestamp("20250101120000");

        assert_eq!(record.get("timestamp"), Some(&json!("20250101120000")));
        assert_eq!(record.get("main"), Some(&json!({"temp": 70.0})));
    }

    #[test]
    fn serializes_as_plain_object() {
        let fields = json!({"a": 1}).as_object().cloned().unwrap();
        let record = WeatherRecord::new(fields);

        let bytes = record.to_json_bytes().unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(parsed, json!({"a": 1}));
    }
}
