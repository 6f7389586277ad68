use serde_json::Value;

/// An untyped hierarchical crew record as produced by the transport layer.
///
/// Consumed exactly once by the reconciler, then dropped. Scalar fields that
/// are missing or carry the wrong type fall back to defaults; only the
/// identity is load-bearing.
#[derive(Clone, Debug)]
pub struct RawRecord {
    root: Value,
}

impl RawRecord {
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// The record's identity, if present and non-empty
    pub fn identity(&self) -> Option<&str> {
        match self.root.get("name").and_then(Value::as_str) {
            Some("") | None => None,
            Some(name) => Some(name),
        }
    }

    pub fn str_field<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.root.get(key).and_then(Value::as_str).unwrap_or(default)
    }

    pub fn f32_field(&self, key: &str, default: f32) -> f32 {
        self.root
            .get(key)
            .and_then(Value::as_f64)
            .map(|v| v as f32)
            .unwrap_or(default)
    }

    pub fn f64_field(&self, key: &str, default: f64) -> f64 {
        self.root.get(key).and_then(Value::as_f64).unwrap_or(default)
    }

    pub fn i32_field(&self, key: &str, default: i32) -> i32 {
        self.root
            .get(key)
            .and_then(Value::as_i64)
            .map(|v| v as i32)
            .unwrap_or(default)
    }

    pub fn bool_field(&self, key: &str, default: bool) -> bool {
        self.root.get(key).and_then(Value::as_bool).unwrap_or(default)
    }

    /// An optional log section. `None` means the section is absent from the
    /// record (existing entries must be kept), which is distinct from an
    /// empty array (existing entries must be cleared).
    pub fn log_section(&self, key: &str) -> Option<&Vec<Value>> {
        self.root.get(key).and_then(Value::as_array)
    }
}

impl From<Value> for RawRecord {
    fn from(root: Value) -> Self {
        Self::new(root)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::RawRecord;

    #[test]
    fn empty_identity_is_missing() {
        let record = RawRecord::new(json!({ "name": "" }));
        assert_eq!(record.identity(), None);

        let record = RawRecord::new(json!({ "courage": 0.5 }));
        assert_eq!(record.identity(), None);
    }

    #[test]
    fn mistyped_scalars_fall_back_to_defaults() {
        let record = RawRecord::new(json!({
            "name": "Jeb",
            "courage": "brave",
            "seatIdx": true,
        }));

        assert_eq!(record.identity(), Some("Jeb"));
        assert_eq!(record.f32_field("courage", 0.25), 0.25);
        assert_eq!(record.i32_field("seatIdx", -1), -1);
    }

    #[test]
    fn absent_section_differs_from_empty_section() {
        let record = RawRecord::new(json!({ "name": "Jeb", "careerLog": [] }));
        assert!(record.log_section("careerLog").is_some());
        assert!(record.log_section("flightLog").is_none());
    }
}
