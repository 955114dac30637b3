use serde::{Deserialize, Serialize};

use crate::colors::Color;

/// Per-call overrides. Nothing here outlives the call it is passed to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogOptions {
    /// Replaces the level's default label. Empty counts as unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Also append a record to today's log file.
    #[serde(default)]
    pub log_to_file: bool,
    /// On the error level, fail the call with `<label> <message>` after emitting.
    /// Ignored on other levels.
    #[serde(default, rename = "isThrow")]
    pub raise: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl LogOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn to_file(mut self) -> Self {
        self.log_to_file = true;
        self
    }

    pub fn raise(mut self) -> Self {
        self.raise = true;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub(crate) fn label(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_all_off() {
        let opts = LogOptions::default();
        assert!(opts.label().is_none());
        assert!(!opts.log_to_file);
        assert!(!opts.raise);
        assert!(opts.color.is_none());
    }

    #[test]
    fn empty_name_is_treated_as_unset() {
        assert!(LogOptions::new().name("").label().is_none());
        assert_eq!(LogOptions::new().name("FATAL").label(), Some("FATAL"));
    }

    #[test]
    fn accepts_is_throw_key() {
        let opts: LogOptions =
            serde_json::from_str(r#"{"isThrow": true, "logToFile": true, "color": "bg-blue"}"#)
                .unwrap();
        assert!(opts.raise);
        assert!(opts.log_to_file);
        assert_eq!(opts.color, Some(Color::BgBlue));
    }

    #[test]
    fn serializes_under_documented_keys() {
        let opts = LogOptions::new().name("FATAL").to_file().raise().color(Color::FgRed);
        let value = serde_json::to_value(&opts).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "FATAL",
                "logToFile": true,
                "isThrow": true,
                "color": "fg-red"
            })
        );
        assert_eq!(serde_json::from_value::<LogOptions>(value).unwrap(), opts);
    }
}
