//! Tool-name dispatch.
//!
//! Routes a `tools/call` to the matching operation handler through a closed
//! enum, so adding an operation is a compile-checked change rather than a
//! stringly-typed branch. Argument validation failures and unknown tool
//! names surface as error-flagged text results, never as transport errors.

use serde::de::DeserializeOwned;
use serde_json::Value;

use reshack_core::error::CoreError;
use reshack_core::ops;
use reshack_core::request::{
    AddParams, ChangeLanguageParams, CompileParams, DeleteParams, ExtractParams, HelpParams,
    ListParams, ModifyParams, RunScriptParams,
};
use reshack_core::runner::EditorConfig;

use crate::protocol::ToolCallResult;

/// The closed set of dispatchable tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    Extract,
    Add,
    Delete,
    Modify,
    Compile,
    ChangeLanguage,
    RunScript,
    GetHelp,
    List,
}

impl ToolKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "extract_resource" => Some(Self::Extract),
            "add_resource" => Some(Self::Add),
            "delete_resource" => Some(Self::Delete),
            "modify_resource" => Some(Self::Modify),
            "compile_rc" => Some(Self::Compile),
            "change_language" => Some(Self::ChangeLanguage),
            "run_script" => Some(Self::RunScript),
            "get_help" => Some(Self::GetHelp),
            "list_resources" => Some(Self::List),
            _ => None,
        }
    }
}

/// Route one tool call to its handler and wrap the outcome.
pub async fn call_tool(config: &EditorConfig, name: &str, arguments: Value) -> ToolCallResult {
    let Some(kind) = ToolKind::from_name(name) else {
        return ToolCallResult::text(format!("Error: Unknown tool: {name}"), true);
    };

    tracing::info!(tool = name, "Handling tool call");

    let output = match kind {
        ToolKind::Extract => match parse_params::<ExtractParams>(arguments) {
            Ok(params) => ops::extract_resource(config, params).await,
            Err(e) => return validation_failure(e),
        },
        ToolKind::Add => match parse_params::<AddParams>(arguments) {
            Ok(params) => ops::add_resource(config, params).await,
            Err(e) => return validation_failure(e),
        },
        ToolKind::Delete => match parse_params::<DeleteParams>(arguments) {
            Ok(params) => ops::delete_resource(config, params).await,
            Err(e) => return validation_failure(e),
        },
        ToolKind::Modify => match parse_params::<ModifyParams>(arguments) {
            Ok(params) => ops::modify_resource(config, params).await,
            Err(e) => return validation_failure(e),
        },
        ToolKind::Compile => match parse_params::<CompileParams>(arguments) {
            Ok(params) => ops::compile_rc(config, params).await,
            Err(e) => return validation_failure(e),
        },
        ToolKind::ChangeLanguage => match parse_params::<ChangeLanguageParams>(arguments) {
            Ok(params) => ops::change_language(config, params).await,
            Err(e) => return validation_failure(e),
        },
        ToolKind::RunScript => match parse_params::<RunScriptParams>(arguments) {
            Ok(params) => ops::run_script(config, params).await,
            Err(e) => return validation_failure(e),
        },
        ToolKind::GetHelp => match parse_params::<HelpParams>(arguments) {
            Ok(params) => ops::get_help(config, params).await,
            Err(e) => return validation_failure(e),
        },
        ToolKind::List => match parse_params::<ListParams>(arguments) {
            Ok(params) => ops::list_resources(config, params).await,
            Err(e) => return validation_failure(e),
        },
    };

    ToolCallResult::text(output.text, output.is_error)
}

/// Deserialize tool arguments into the typed parameter struct.
///
/// Missing or malformed required parameters become a validation failure
/// here, before any process is spawned.
fn parse_params<T: DeserializeOwned>(arguments: Value) -> Result<T, CoreError> {
    serde_json::from_value(arguments).map_err(|e| CoreError::Validation(e.to_string()))
}

fn validation_failure(error: CoreError) -> ToolCallResult {
    ToolCallResult::text(format!("Error: {error}"), true)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;

    use super::*;

    fn config() -> EditorConfig {
        EditorConfig {
            executable: "/nonexistent/ResourceHacker.exe".to_string(),
            timeout: Duration::from_secs(5),
        }
    }

    #[test]
    fn every_advertised_tool_is_dispatchable() {
        for tool in crate::tools::tool_definitions() {
            assert!(
                ToolKind::from_name(tool.name).is_some(),
                "tool {} has no dispatch target",
                tool.name
            );
        }
    }

    #[test]
    fn unknown_names_do_not_dispatch() {
        assert_eq!(ToolKind::from_name("bogus_tool"), None);
        assert_eq!(ToolKind::from_name(""), None);
    }

    #[tokio::test]
    async fn unknown_tool_yields_error_result() {
        let result = call_tool(&config(), "bogus_tool", json!({})).await;
        assert!(result.is_error);
        let crate::protocol::ContentBlock::Text { text } = &result.content[0];
        assert!(text.contains("Unknown tool: bogus_tool"));
    }

    #[tokio::test]
    async fn missing_required_parameter_fails_before_spawn() {
        // delete_resource without a mask: validated away before any process
        // work, so even a nonexistent executable never matters.
        let result = call_tool(
            &config(),
            "delete_resource",
            json!({ "input_file": "a.exe", "output_file": "b.exe" }),
        )
        .await;
        assert!(result.is_error);
        let crate::protocol::ContentBlock::Text { text } = &result.content[0];
        assert!(text.contains("Validation failed"));
        assert!(text.contains("resource_mask"));
    }

    #[tokio::test]
    async fn spawn_failure_surfaces_as_error_text() {
        let result = call_tool(
            &config(),
            "extract_resource",
            json!({ "input_file": "a.exe", "output_path": "out" }),
        )
        .await;
        assert!(result.is_error);
        let crate::protocol::ContentBlock::Text { text } = &result.content[0];
        assert!(text.contains("Failed to start"));
    }
}
