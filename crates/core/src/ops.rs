//! Operation handlers.
//!
//! One handler per supported operation. Each builds the argument vector,
//! runs the editor, and renders a human-readable outcome: a success/failure
//! marker, the effective output location when applicable, and the captured
//! tool output (stdout, falling back to stderr). Failures never propagate
//! as errors past this module; they surface as [`OpOutput`] with
//! `is_error` set so one bad request cannot affect the next.

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::command::{self, CommandSpec};
use crate::error::CoreError;
use crate::rcscript;
use crate::request::{
    AddParams, ChangeLanguageParams, CompileParams, DeleteParams, ExtractParams, HelpParams,
    ListParams, ModifyParams, RunScriptParams,
};
use crate::runner::{run_editor, EditorConfig, ExecOutcome, HELP_TIMEOUT};

/// Rendered outcome of one operation call.
#[derive(Debug, Clone)]
pub struct OpOutput {
    pub text: String,
    pub is_error: bool,
}

impl OpOutput {
    fn success(text: String) -> Self {
        Self {
            text,
            is_error: false,
        }
    }

    fn failure(text: String) -> Self {
        Self {
            text,
            is_error: true,
        }
    }
}

pub async fn extract_resource(config: &EditorConfig, params: ExtractParams) -> OpOutput {
    let args = CommandSpec::extract(&params).into_args();
    let outcome = run_editor(config, &args, config.timeout).await;
    render(
        &outcome,
        "Resource extraction completed successfully",
        "Resource extraction failed",
        Some(&params.output_path),
    )
}

pub async fn add_resource(config: &EditorConfig, params: AddParams) -> OpOutput {
    let args = CommandSpec::add(&params).into_args();
    let outcome = run_editor(config, &args, config.timeout).await;
    render(
        &outcome,
        &format!("Resource added successfully (mode: {})", params.mode.keyword()),
        "Failed to add resource",
        Some(&params.output_file),
    )
}

pub async fn delete_resource(config: &EditorConfig, params: DeleteParams) -> OpOutput {
    let args = CommandSpec::delete(&params).into_args();
    let outcome = run_editor(config, &args, config.timeout).await;
    render(
        &outcome,
        "Resource deleted successfully",
        "Failed to delete resource",
        Some(&params.output_file),
    )
}

pub async fn modify_resource(config: &EditorConfig, params: ModifyParams) -> OpOutput {
    let args = CommandSpec::modify(&params).into_args();
    let outcome = run_editor(config, &args, config.timeout).await;
    render(
        &outcome,
        "Resource modified successfully",
        "Failed to modify resource",
        Some(&params.output_file),
    )
}

pub async fn compile_rc(config: &EditorConfig, params: CompileParams) -> OpOutput {
    let args = CommandSpec::compile(&params).into_args();
    let outcome = run_editor(config, &args, config.timeout).await;
    render(
        &outcome,
        "RC file compiled successfully",
        "Failed to compile RC file",
        Some(&params.output_res),
    )
}

pub async fn change_language(config: &EditorConfig, params: ChangeLanguageParams) -> OpOutput {
    let args = CommandSpec::change_language(&params).into_args();
    let outcome = run_editor(config, &args, config.timeout).await;
    render(
        &outcome,
        &format!("Language changed successfully to ID {}", params.language_id),
        "Failed to change language",
        Some(&params.output_file),
    )
}

pub async fn run_script(config: &EditorConfig, params: RunScriptParams) -> OpOutput {
    let args = command::script_args(&params.script_file);
    let outcome = run_editor(config, &args, config.timeout).await;
    render(
        &outcome,
        "Script executed successfully",
        "Script execution failed",
        None,
    )
}

/// Help output is informational: whatever the tool printed is returned
/// verbatim, and an empty response is not treated as an error.
pub async fn get_help(config: &EditorConfig, params: HelpParams) -> OpOutput {
    let args = command::help_args(params.topic.as_deref());
    let outcome = run_editor(config, &args, HELP_TIMEOUT).await;
    let text = if outcome.captured().is_empty() {
        "No help output available".to_string()
    } else {
        outcome.captured().to_string()
    };
    OpOutput::success(text)
}

/// List the resources in a PE file.
///
/// Extracts everything into a uniquely-named temporary resource script,
/// reads it back, and parses it into an inventory table. The artifact is
/// removed on every exit path by the [`TempArtifact`] drop guard, and a
/// read-back failure is reported distinctly from an extraction failure.
pub async fn list_resources(config: &EditorConfig, params: ListParams) -> OpOutput {
    let artifact = TempArtifact::new();
    let args = CommandSpec::list(&params.input_file, artifact.path_string()).into_args();
    let outcome = run_editor(config, &args, config.timeout).await;

    if !outcome.success {
        return OpOutput::failure(format!(
            "✗ Failed to list resources (extraction failed)\n\nError: {}\n{}",
            outcome.failure.as_deref().unwrap_or("unknown error"),
            outcome.stderr
        ));
    }

    let script = match tokio::fs::read_to_string(artifact.path()).await {
        Ok(script) => script,
        Err(e) => return OpOutput::failure(CoreError::ArtifactRead(e).to_string()),
    };

    let entries = rcscript::parse(&script);
    OpOutput::success(format!(
        "✓ Resources listed for: {}\n\n{}",
        params.input_file,
        rcscript::render(&entries)
    ))
}

fn render(
    outcome: &ExecOutcome,
    success_heading: &str,
    failure_heading: &str,
    output_location: Option<&str>,
) -> OpOutput {
    if outcome.success {
        let mut text = format!("✓ {success_heading}");
        if let Some(location) = output_location {
            text.push_str(&format!("\n\nOutput: {location}"));
        }
        text.push_str("\n\n");
        text.push_str(outcome.captured());
        OpOutput::success(text)
    } else {
        OpOutput::failure(format!(
            "✗ {failure_heading}\n\nError: {}\n{}",
            outcome.failure.as_deref().unwrap_or("unknown error"),
            outcome.stderr
        ))
    }
}

/// Scoped temporary artifact for the listing operation.
///
/// The path embeds a UUID so concurrent listing calls cannot collide, and
/// `Drop` removes the file on every exit path, including early returns.
struct TempArtifact {
    path: PathBuf,
}

impl TempArtifact {
    fn new() -> Self {
        let path = std::env::temp_dir().join(format!("rh_list_{}.rc", Uuid::new_v4()));
        Self { path }
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn path_string(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}

impl Drop for TempArtifact {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to remove temp artifact");
            }
        }
    }
}
