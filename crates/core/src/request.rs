//! Typed operation parameters.
//!
//! One struct per operation, deserialized from the caller's JSON arguments.
//! Required fields are plain `String`s so a missing parameter is a
//! deserialization error surfaced before any process is spawned; optional
//! fields carry their documented defaults through `#[serde(default)]`.

use serde::Deserialize;

/// Behavior when the resource being added already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddMode {
    /// Fail if the resource already exists.
    #[default]
    Add,
    /// Replace the resource if it already exists.
    AddOverwrite,
    /// Leave the existing resource untouched.
    AddSkip,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractParams {
    pub input_file: String,
    pub output_path: String,
    #[serde(default)]
    pub resource_mask: Option<String>,
    #[serde(default)]
    pub log_file: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddParams {
    pub input_file: String,
    pub output_file: String,
    pub resource_file: String,
    #[serde(default)]
    pub resource_mask: Option<String>,
    #[serde(default)]
    pub mode: AddMode,
    #[serde(default)]
    pub log_file: Option<String>,
}

/// Delete is the one operation where the mask is mandatory: it identifies
/// what to remove, and there is no safe default.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteParams {
    pub input_file: String,
    pub output_file: String,
    pub resource_mask: String,
    #[serde(default)]
    pub log_file: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModifyParams {
    pub input_file: String,
    pub output_file: String,
    pub resource_file: String,
    #[serde(default)]
    pub resource_mask: Option<String>,
    #[serde(default)]
    pub log_file: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompileParams {
    pub input_rc: String,
    pub output_res: String,
    #[serde(default)]
    pub log_file: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChangeLanguageParams {
    pub input_file: String,
    pub output_file: String,
    pub language_id: u32,
    #[serde(default)]
    pub log_file: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RunScriptParams {
    pub script_file: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HelpParams {
    #[serde(default)]
    pub topic: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListParams {
    pub input_file: String,
}
