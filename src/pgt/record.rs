use serde::Deserialize;

/// App type that the old DALiuGE translator emits incorrectly. Records with this app are
/// dropped from the graph entirely.
pub const SLEEP_APP: &str = "dlg.apps.simple.SleepApp";

/// One entry of an unrolled physical graph template.
///
/// Only the fields used to rebuild the graph are modelled; everything else the translator
/// writes is ignored. Every field is optional at this level, the parser decides which ones
/// a record actually needs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PgtRecord {
    #[serde(default)]
    pub oid: Option<String>,
    #[serde(default)]
    pub nm: Option<String>,
    #[serde(default)]
    pub tw: Option<f64>,
    #[serde(default)]
    pub app: Option<String>,
    #[serde(default)]
    pub inputs: Option<Vec<DropRef>>,
    #[serde(default)]
    pub outputs: Option<Vec<DropRef>>,
    #[serde(default)]
    pub producers: Option<Vec<DropRef>>,
    #[serde(default)]
    pub consumers: Option<Vec<DropRef>>,
}

impl PgtRecord {
    /// A record is a compute node when it names an app.
    pub fn is_compute(&self) -> bool {
        self.app.is_some()
    }

    pub fn is_sleep_app(&self) -> bool {
        self.app.as_deref() == Some(SLEEP_APP)
    }
}

/// A reference to another drop by its oid.
///
/// Older translators write plain id strings, newer ones write `{"<oid>": "<name>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "RawDropRef")]
pub struct DropRef(String);

impl DropRef {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DropRef {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDropRef {
    Id(String),
    Named(serde_json::Map<String, serde_json::Value>),
}

impl TryFrom<RawDropRef> for DropRef {
    type Error = String;

    fn try_from(raw: RawDropRef) -> Result<Self, Self::Error> {
        match raw {
            RawDropRef::Id(id) => Ok(Self(id)),
            RawDropRef::Named(map) => {
                let mut keys = map.into_iter().map(|(k, _)| k);
                match (keys.next(), keys.next()) {
                    (Some(id), None) => Ok(Self(id)),
                    _ => Err("drop reference object must have exactly one key".to_string()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_ref_accepts_both_forms() {
        let refs: Vec<DropRef> =
            serde_json::from_str(r#"["1_0", {"2_0": "Image"}]"#).unwrap();
        assert_eq!(refs[0].as_str(), "1_0");
        assert_eq!(refs[1].as_str(), "2_0");
    }

    #[test]
    fn test_drop_ref_rejects_ambiguous_object() {
        let result: Result<Vec<DropRef>, _> = serde_json::from_str(r#"[{"a": 1, "b": 2}]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_record_ignores_unknown_fields() {
        let record: PgtRecord = serde_json::from_str(
            r##"{"oid": "x", "app": "dlg.apps.simple.SleepApp", "node": "#0", "rank": [0]}"##,
        )
        .unwrap();
        assert!(record.is_compute());
        assert!(record.is_sleep_app());
        assert!(record.nm.is_none());
    }
}
