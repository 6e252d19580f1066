use serde::Serialize;

/// One checkbox of the administrator settings screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
    pub checked: bool,
}

/// All options of one family, published under its template variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingOptions {
    pub template_variable: &'static str,
    pub setting_key: &'static str,
    pub options: Vec<SelectOption>,
}
