use crate::element::ElementId;
use serde::{Deserialize, Serialize};

/// Stored per-element decision, kept apart from a plain `bool` so "no record" never
/// reads as "overridden to false".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OverrideState {
    /// An administrator explicitly set the element to this value.
    Overridden(bool),
    /// No record exists; the content-type default applies.
    #[default]
    NotOverridden,
}

impl OverrideState {
    /// The explicit value, if one was recorded.
    #[must_use]
    pub const fn explicit(self) -> Option<bool> {
        match self {
            Self::Overridden(v) => Some(v),
            Self::NotOverridden => None,
        }
    }
}

impl From<Option<bool>> for OverrideState {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Self::NotOverridden, Self::Overridden)
    }
}

/// Persisted shape: one record per overridden element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OverrideRecord {
    pub element_id: ElementId,
    pub enabled: bool,
}
