//! Argument-vector construction for Resource Hacker invocations.
//!
//! Every operation maps to one well-formed flag sequence. The open/save
//! family shares [`CommandSpec`]; `-script` and `-help` invocations have
//! their own minimal shapes and bypass it entirely.

use crate::mask;
use crate::paths;
use crate::request::{
    AddMode, AddParams, ChangeLanguageParams, CompileParams, DeleteParams, ExtractParams,
    ModifyParams,
};

/// Log destination sentinel for console output.
pub const LOG_CONSOLE: &str = "CONSOLE";

/// Log destination sentinel that suppresses logging entirely.
pub const LOG_NUL: &str = "NUL";

/// A fully-determined editor invocation for the open/save action family.
///
/// Paths are resolved to absolute form at construction time. Consumed once
/// via [`CommandSpec::into_args`] and discarded.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    pub open: String,
    pub save: String,
    pub action: String,
    pub resource: Option<String>,
    pub mask: Option<String>,
    pub log: String,
}

impl CommandSpec {
    /// Emit the ordered argument vector.
    ///
    /// Flag order is fixed: `-open`, `-save`, `-action`, `-resource`,
    /// `-mask`, `-log`, with absent optional flags omitted.
    pub fn into_args(self) -> Vec<String> {
        let mut args = vec![
            "-open".to_string(),
            self.open,
            "-save".to_string(),
            self.save,
            "-action".to_string(),
            self.action,
        ];
        if let Some(resource) = self.resource {
            args.push("-resource".to_string());
            args.push(resource);
        }
        if let Some(mask) = self.mask {
            args.push("-mask".to_string());
            args.push(mask);
        }
        args.push("-log".to_string());
        args.push(self.log);
        args
    }

    pub fn extract(params: &ExtractParams) -> Self {
        Self {
            open: paths::resolve(&params.input_file),
            save: paths::resolve(&params.output_path),
            action: "extract".to_string(),
            resource: None,
            mask: Some(mask::normalize(params.resource_mask.as_deref())),
            log: log_or_console(params.log_file.as_deref()),
        }
    }

    pub fn add(params: &AddParams) -> Self {
        Self {
            open: paths::resolve(&params.input_file),
            save: paths::resolve(&params.output_file),
            action: params.mode.keyword().to_string(),
            resource: Some(paths::resolve(&params.resource_file)),
            mask: Some(mask::normalize(params.resource_mask.as_deref())),
            log: log_or_console(params.log_file.as_deref()),
        }
    }

    pub fn delete(params: &DeleteParams) -> Self {
        Self {
            open: paths::resolve(&params.input_file),
            save: paths::resolve(&params.output_file),
            action: "delete".to_string(),
            resource: None,
            mask: Some(mask::normalize(Some(&params.resource_mask))),
            log: log_or_console(params.log_file.as_deref()),
        }
    }

    pub fn modify(params: &ModifyParams) -> Self {
        Self {
            open: paths::resolve(&params.input_file),
            save: paths::resolve(&params.output_file),
            action: "modify".to_string(),
            resource: Some(paths::resolve(&params.resource_file)),
            mask: Some(mask::normalize(params.resource_mask.as_deref())),
            log: log_or_console(params.log_file.as_deref()),
        }
    }

    pub fn compile(params: &CompileParams) -> Self {
        Self {
            open: paths::resolve(&params.input_rc),
            save: paths::resolve(&params.output_res),
            action: "compile".to_string(),
            resource: None,
            mask: None,
            log: log_or_console(params.log_file.as_deref()),
        }
    }

    pub fn change_language(params: &ChangeLanguageParams) -> Self {
        Self {
            open: paths::resolve(&params.input_file),
            save: paths::resolve(&params.output_file),
            action: format!("changelanguage({})", params.language_id),
            resource: None,
            mask: None,
            log: log_or_console(params.log_file.as_deref()),
        }
    }

    /// Internal listing invocation: extract everything into a temporary
    /// resource script with logging suppressed.
    pub fn list(input_file: &str, artifact_path: String) -> Self {
        Self {
            open: paths::resolve(input_file),
            save: artifact_path,
            action: "extract".to_string(),
            resource: None,
            mask: Some(mask::EMPTY_MASK.to_string()),
            log: LOG_NUL.to_string(),
        }
    }
}

/// Argument vector for executing a Resource Hacker script file.
pub fn script_args(script_file: &str) -> Vec<String> {
    vec!["-script".to_string(), paths::resolve(script_file)]
}

/// Argument vector for a help request.
///
/// Recognized topics are `commandline` and `script`; anything else
/// (including `general` and absent) falls back to the bare help flag.
pub fn help_args(topic: Option<&str>) -> Vec<String> {
    match topic {
        Some("commandline") => vec!["-help".to_string(), "commandline".to_string()],
        Some("script") => vec!["-help".to_string(), "script".to_string()],
        _ => vec!["-help".to_string()],
    }
}

fn log_or_console(log_file: Option<&str>) -> String {
    match log_file {
        Some(log) if !log.is_empty() => log.to_string(),
        _ => LOG_CONSOLE.to_string(),
    }
}

impl AddMode {
    /// The `-action` keyword for this add mode.
    pub fn keyword(self) -> &'static str {
        match self {
            AddMode::Add => "add",
            AddMode::AddOverwrite => "addoverwrite",
            AddMode::AddSkip => "addskip",
        }
    }
}
