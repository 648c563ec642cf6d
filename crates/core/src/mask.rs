//! Resource mask normalization.
//!
//! Resource Hacker selects resources with a `Type,Name,Language` triple
//! where any field may be empty. The tool requires exactly two commas, so
//! user-supplied masks are padded or truncated to three fields here. Field
//! contents are opaque pass-through strings; the external tool is the
//! authority on valid type/name/language values.

/// The universal mask: matches every resource.
pub const EMPTY_MASK: &str = ",,";

/// Normalize a raw mask string to exactly three comma-joined fields.
///
/// Absent or empty input yields [`EMPTY_MASK`]. Fewer than three fields are
/// right-padded with empty strings; more than three are truncated.
pub fn normalize(raw: Option<&str>) -> String {
    let raw = match raw {
        Some(r) if !r.is_empty() => r,
        _ => return EMPTY_MASK.to_string(),
    };

    let mut fields: Vec<&str> = raw.split(',').collect();
    fields.truncate(3);
    while fields.len() < 3 {
        fields.push("");
    }
    fields.join(",")
}
