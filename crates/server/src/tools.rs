//! Static tool catalog.
//!
//! Schema and description metadata for every advertised tool. This is data,
//! not logic: dispatch routes by name through a closed enum in
//! [`crate::dispatch`], and nothing here branches.

use serde::Serialize;
use serde_json::{json, Value};

#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// The full advertised tool catalog.
pub fn tool_definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: "extract_resource",
            description: "Extract resource(s) from a PE file (exe, dll, etc) or resource file. \
                          Can extract a single resource or multiple resources to a folder.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "input_file": {
                        "type": "string",
                        "description": "Path to the input PE file or resource file",
                    },
                    "output_path": {
                        "type": "string",
                        "description": "Output file path or folder path for extraction",
                    },
                    "resource_mask": {
                        "type": "string",
                        "description": "Resource mask in format 'Type,Name,Language' (e.g. 'ICON,,' or 'BITMAP,128,0'). Empty parts can be omitted.",
                        "default": ",,",
                    },
                    "log_file": {
                        "type": "string",
                        "description": "Log file path. Use 'CONSOLE' or 'CON' for console output, 'NUL' to disable logging",
                        "default": "CONSOLE",
                    },
                },
                "required": ["input_file", "output_path"],
            }),
        },
        ToolDefinition {
            name: "add_resource",
            description: "Add a new resource to a PE file. Fails if the resource already exists; \
                          use mode 'addoverwrite' or 'addskip' for different behaviors.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "input_file": {
                        "type": "string",
                        "description": "Path to the PE file to modify",
                    },
                    "output_file": {
                        "type": "string",
                        "description": "Path for the output file",
                    },
                    "resource_file": {
                        "type": "string",
                        "description": "Path to the resource file to add (e.g. .ico, .bmp, .rc, .res)",
                    },
                    "resource_mask": {
                        "type": "string",
                        "description": "Resource mask 'Type,Name,Language' (e.g. 'ICONGROUP,MAINICON,0')",
                        "default": ",,",
                    },
                    "mode": {
                        "type": "string",
                        "enum": ["add", "addoverwrite", "addskip"],
                        "description": "Add mode: 'add' (fail if exists), 'addoverwrite' (replace if exists), 'addskip' (skip if exists)",
                        "default": "add",
                    },
                    "log_file": {
                        "type": "string",
                        "description": "Log file path",
                        "default": "CONSOLE",
                    },
                },
                "required": ["input_file", "output_file", "resource_file"],
            }),
        },
        ToolDefinition {
            name: "delete_resource",
            description: "Delete resource(s) from a PE file",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "input_file": {
                        "type": "string",
                        "description": "Path to the PE file to modify",
                    },
                    "output_file": {
                        "type": "string",
                        "description": "Path for the output file",
                    },
                    "resource_mask": {
                        "type": "string",
                        "description": "Resource mask 'Type,Name,Language' identifying the resources to delete",
                    },
                    "log_file": {
                        "type": "string",
                        "description": "Log file path",
                        "default": "CONSOLE",
                    },
                },
                "required": ["input_file", "output_file", "resource_mask"],
            }),
        },
        ToolDefinition {
            name: "modify_resource",
            description: "Modify an existing resource in a PE file",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "input_file": {
                        "type": "string",
                        "description": "Path to the PE file to modify",
                    },
                    "output_file": {
                        "type": "string",
                        "description": "Path for the output file",
                    },
                    "resource_file": {
                        "type": "string",
                        "description": "Path to the new resource file",
                    },
                    "resource_mask": {
                        "type": "string",
                        "description": "Resource mask 'Type,Name,Language'",
                        "default": ",,",
                    },
                    "log_file": {
                        "type": "string",
                        "description": "Log file path",
                        "default": "CONSOLE",
                    },
                },
                "required": ["input_file", "output_file", "resource_file"],
            }),
        },
        ToolDefinition {
            name: "compile_rc",
            description: "Compile a resource script (.rc) file to a binary resource (.res) file",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "input_rc": {
                        "type": "string",
                        "description": "Path to the .rc resource script file",
                    },
                    "output_res": {
                        "type": "string",
                        "description": "Path for the output .res file",
                    },
                    "log_file": {
                        "type": "string",
                        "description": "Log file path",
                        "default": "CONSOLE",
                    },
                },
                "required": ["input_rc", "output_res"],
            }),
        },
        ToolDefinition {
            name: "change_language",
            description: "Change the language of all resources in a PE file",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "input_file": {
                        "type": "string",
                        "description": "Path to the PE file to modify",
                    },
                    "output_file": {
                        "type": "string",
                        "description": "Path for the output file",
                    },
                    "language_id": {
                        "type": "number",
                        "description": "Language ID (e.g. 1033 for English-US, 1049 for Russian, 2052 for Chinese-Simplified)",
                    },
                    "log_file": {
                        "type": "string",
                        "description": "Log file path",
                        "default": "CONSOLE",
                    },
                },
                "required": ["input_file", "output_file", "language_id"],
            }),
        },
        ToolDefinition {
            name: "run_script",
            description: "Execute a Resource Hacker script file with multiple commands",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "script_file": {
                        "type": "string",
                        "description": "Path to the Resource Hacker script file",
                    },
                },
                "required": ["script_file"],
            }),
        },
        ToolDefinition {
            name: "get_help",
            description: "Get Resource Hacker command-line help information",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "topic": {
                        "type": "string",
                        "enum": ["general", "commandline", "script"],
                        "description": "Help topic to display",
                        "default": "general",
                    },
                },
            }),
        },
        ToolDefinition {
            name: "list_resources",
            description: "List all resources in a PE file as a Type/Name inventory table",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "input_file": {
                        "type": "string",
                        "description": "Path to the PE file or resource file to inspect",
                    },
                },
                "required": ["input_file"],
            }),
        },
    ]
}
