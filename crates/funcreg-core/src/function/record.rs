//! Function record type and defaults.

use serde::{Deserialize, Serialize};

use super::limits::{DEFAULT_MIN_NEG_POINTS, DEFAULT_MIN_POS_POINTS, DEFAULT_STARTSWITH_BOX};
use crate::errors::ValidationError;

/// A registered serverless inference function.
///
/// `name` is the primary key and never changes once the record exists.
/// The remaining fields are replaced wholesale on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    pub name: String,
    /// Serialized manifest, stored verbatim.
    #[serde(default)]
    pub spec: String,
    #[serde(default)]
    pub framework: String,
    #[serde(default)]
    pub description: String,
    /// Function category, e.g. `detector` or `interactor`.
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub help_message: String,
    #[serde(default)]
    pub animated_gif: String,
    #[serde(default = "default_min_pos_points")]
    pub min_pos_points: i64,
    #[serde(default = "default_min_neg_points")]
    pub min_neg_points: i64,
    #[serde(default)]
    pub startswith_box: bool,
    #[serde(default)]
    pub status: String,
}

fn default_min_pos_points() -> i64 {
    DEFAULT_MIN_POS_POINTS
}

fn default_min_neg_points() -> i64 {
    DEFAULT_MIN_NEG_POINTS
}

impl Default for Function {
    fn default() -> Self {
        Self {
            name: String::new(),
            spec: String::new(),
            framework: String::new(),
            description: String::new(),
            kind: String::new(),
            help_message: String::new(),
            animated_gif: String::new(),
            min_pos_points: DEFAULT_MIN_POS_POINTS,
            min_neg_points: DEFAULT_MIN_NEG_POINTS,
            startswith_box: DEFAULT_STARTSWITH_BOX,
            status: String::new(),
        }
    }
}

impl Function {
    /// A record with the given name and every other field at its default.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Parse `spec` as a JSON manifest.
    pub fn manifest(&self) -> Result<serde_json::Value, ValidationError> {
        serde_json::from_str(&self.spec).map_err(|e| ValidationError::InvalidManifest {
            name: self.name.clone(),
            message: e.to_string(),
        })
    }

    /// Whether the function accepts interactive point prompts.
    pub fn is_interactive(&self) -> bool {
        self.kind == super::kinds::INTERACTOR
    }
}
