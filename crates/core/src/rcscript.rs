//! Resource-script (`.rc`) output parsing.
//!
//! Resource Hacker's `extract` action with the universal mask writes a
//! resource script describing everything in the binary. The format is only
//! semi-structured, so parsing is deliberately lenient: each line either
//! yields a `name type` pair or is silently skipped. Parsing never fails.

use std::sync::LazyLock;

use regex::Regex;

/// Matches a leading `name type` token pair: the name is a quoted string or
/// a contiguous non-whitespace run, the type is the next token.
static ENTRY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^(".*?"|\S+)\s+(\S+)"#).expect("valid regex"));

/// Script directives that start a line without describing a resource.
const DIRECTIVES: [&str; 2] = ["LANGUAGE", "CODEPAGE"];

/// Name tokens that are reserved words yet still denote a real resource
/// when paired with the manifest type. Manifest resources conventionally
/// use numeric ids 1 or 24, which collide with the directive filter.
const MANIFEST_EXCEPTIONS: [&str; 4] = ["LANGUAGE", "CODEPAGE", "1", "24"];

/// The manifest resource type keyword.
const MANIFEST_TYPE: &str = "RT_MANIFEST";

/// One recognized resource line: a `(type, name-or-id)` pair in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceEntry {
    pub resource_type: String,
    pub name: String,
}

/// Parse resource-script text into an ordered resource list.
///
/// Lines are processed independently with no lookahead. Blank lines and
/// comments (`//` or `#`) are skipped, `LANGUAGE`/`CODEPAGE` directives are
/// dropped (except in the `RT_MANIFEST` context, see
/// [`MANIFEST_EXCEPTIONS`]), and unrecognized lines are ignored rather than
/// treated as errors. Duplicates are preserved; the output mirrors the tool.
pub fn parse(text: &str) -> Vec<ResourceEntry> {
    let mut entries = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("//") || trimmed.starts_with('#') {
            continue;
        }

        let Some(caps) = ENTRY_RE.captures(trimmed) else {
            continue;
        };
        let name = &caps[1];
        let resource_type = &caps[2];

        if MANIFEST_EXCEPTIONS.contains(&name) && resource_type == MANIFEST_TYPE {
            entries.push(ResourceEntry {
                resource_type: resource_type.to_string(),
                name: name.to_string(),
            });
            continue;
        }
        if DIRECTIVES.contains(&name) {
            continue;
        }

        entries.push(ResourceEntry {
            resource_type: resource_type.to_string(),
            name: name.to_string(),
        });
    }

    entries
}

/// Render a resource list as a padded `Type / Name` table.
///
/// An empty list renders as an explicit message rather than a bare table,
/// so callers can show the result to an operator unmodified.
pub fn render(entries: &[ResourceEntry]) -> String {
    if entries.is_empty() {
        return "No resources found or failed to parse RC file.".to_string();
    }

    let mut out = String::from("Type                 Name/ID\n");
    out.push_str(&"-".repeat(40));
    for entry in entries {
        out.push('\n');
        out.push_str(&format!("{:<20} {}", entry.resource_type, entry.name));
    }
    out
}
