//! Administrator settings: which content types force the slug to follow the title
//! by default.

use crate::constants::setting_keys;
use crate::element::TypeHandle;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt::Debug;

/// Read-only access to named lists of enabled type handles.
pub trait SettingsProvider: Debug + Send + Sync {
    /// Enabled handles for `key`; unknown keys yield an empty list.
    fn enabled_types(&self, key: &str) -> Cow<'_, [TypeHandle]>;

    /// Whether `handle` is enabled under `key`.
    fn is_enabled(&self, key: &str, handle: &TypeHandle) -> bool {
        self.enabled_types(key).contains(handle)
    }
}

/// Plugin settings as persisted by the host settings subsystem.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[serde(alias = "enabledCategoryGroups")]
    pub enabled_category_groups: Vec<TypeHandle>,
    #[serde(alias = "enabledSections")]
    pub enabled_sections: Vec<TypeHandle>,
    #[serde(alias = "enabledProductTypes")]
    pub enabled_product_types: Vec<TypeHandle>,
    /// Lists for families registered beyond the built-in ones, keyed by setting name.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Vec<TypeHandle>>,
}

impl Settings {
    /// Mutable list for `key`, creating an extra entry for unknown keys.
    pub fn list_mut(&mut self, key: &str) -> &mut Vec<TypeHandle> {
        match key {
            setting_keys::CATEGORY_GROUPS => &mut self.enabled_category_groups,
            setting_keys::SECTIONS => &mut self.enabled_sections,
            setting_keys::PRODUCT_TYPES => &mut self.enabled_product_types,
            other => self.extra.entry(other.to_owned()).or_default(),
        }
    }

    /// Builder-style helper to enable a handle under `key`.
    #[must_use]
    pub fn enable(mut self, key: &str, handle: impl Into<TypeHandle>) -> Self {
        let handle = handle.into();
        let list = self.list_mut(key);
        if !list.contains(&handle) {
            list.push(handle);
        }
        self
    }
}

impl SettingsProvider for Settings {
    fn enabled_types(&self, key: &str) -> Cow<'_, [TypeHandle]> {
        let list = match key {
            setting_keys::CATEGORY_GROUPS => Some(&self.enabled_category_groups),
            setting_keys::SECTIONS => Some(&self.enabled_sections),
            setting_keys::PRODUCT_TYPES => Some(&self.enabled_product_types),
            other => self.extra.get(other),
        };
        Cow::Borrowed(list.map_or(&[][..], Vec::as_slice))
    }
}
