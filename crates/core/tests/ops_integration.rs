//! End-to-end operation handler tests against a stub editor.
//!
//! A small shell script stands in for Resource Hacker: it understands the
//! `-open`/`-save` flags, fails when the input file is missing, and writes
//! a resource script to the save path otherwise. This exercises the full
//! handler path (argument construction, subprocess execution, output
//! rendering, temp artifact lifecycle) without the real tool.

#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::time::Duration;

use reshack_core::ops;
use reshack_core::request::{ExtractParams, HelpParams, ListParams};
use reshack_core::runner::EditorConfig;

/// Shared stub prologue: collect `-open` and `-save` values from the args.
const PARSE_ARGS: &str = r#"
OPEN=""; SAVE=""
while [ "$#" -gt 0 ]; do
  case "$1" in
    -open) OPEN="$2"; shift 2 ;;
    -save) SAVE="$2"; shift 2 ;;
    *) shift ;;
  esac
done
"#;

/// Write an executable stub editor script into `dir` and return its path.
fn stub_editor(dir: &tempfile::TempDir, body: &str) -> String {
    let path = dir.path().join("fake_rh.sh");
    std::fs::write(&path, format!("#!/bin/sh\n{PARSE_ARGS}\n{body}\n")).expect("write stub");
    let mut perms = std::fs::metadata(&path).expect("stub metadata").permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).expect("chmod stub");
    path.to_string_lossy().into_owned()
}

fn config(executable: String) -> EditorConfig {
    EditorConfig {
        executable,
        timeout: Duration::from_secs(5),
    }
}

/// Stub matching the real tool's shape: fail with diagnostics when the
/// input is missing, otherwise emit a resource script to the save path.
const REALISTIC_BODY: &str = r#"
if [ ! -f "$OPEN" ]; then
  echo "Error: cannot open $OPEN" >&2
  exit 1
fi
printf 'ICON 128\nLANGUAGE 9,1\n24 RT_MANIFEST\n' > "$SAVE"
echo "Extraction complete"
"#;

#[tokio::test]
async fn extract_success_reports_output_location() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = config(stub_editor(&dir, REALISTIC_BODY));

    let input = dir.path().join("app.exe");
    std::fs::write(&input, b"not really a PE").expect("write input");
    let output = dir.path().join("out.rc");

    let result = ops::extract_resource(
        &cfg,
        ExtractParams {
            input_file: input.to_string_lossy().into_owned(),
            output_path: output.to_string_lossy().into_owned(),
            resource_mask: None,
            log_file: None,
        },
    )
    .await;

    assert!(!result.is_error, "unexpected failure: {}", result.text);
    assert!(result.text.contains("✓ Resource extraction completed successfully"));
    assert!(result.text.contains(&format!("Output: {}", output.to_string_lossy())));
    assert!(result.text.contains("Extraction complete"));
    assert!(output.exists(), "stub should have written the output file");
}

#[tokio::test]
async fn extract_failure_carries_tool_diagnostics() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = config(stub_editor(&dir, REALISTIC_BODY));

    let result = ops::extract_resource(
        &cfg,
        ExtractParams {
            input_file: dir.path().join("missing.exe").to_string_lossy().into_owned(),
            output_path: dir.path().join("out.rc").to_string_lossy().into_owned(),
            resource_mask: None,
            log_file: None,
        },
    )
    .await;

    assert!(result.is_error);
    assert!(result.text.contains("✗ Resource extraction failed"));
    assert!(result.text.contains("cannot open"), "diagnostics: {}", result.text);
}

#[tokio::test]
async fn list_resources_parses_inventory_and_cleans_up() {
    let dir = tempfile::tempdir().expect("tempdir");
    // Record the artifact path the stub was asked to write, so cleanup is
    // observable after the call.
    let body = format!(
        "echo \"$SAVE\" >> {}\n{}",
        dir.path().join("saves").display(),
        REALISTIC_BODY
    );
    let cfg = config(stub_editor(&dir, &body));

    let input = dir.path().join("app.exe");
    std::fs::write(&input, b"pe").expect("write input");

    let result = ops::list_resources(
        &cfg,
        ListParams {
            input_file: input.to_string_lossy().into_owned(),
        },
    )
    .await;

    assert!(!result.is_error, "unexpected failure: {}", result.text);
    assert!(result.text.contains("✓ Resources listed for:"));
    // ICON line kept, LANGUAGE directive dropped, numeric manifest kept.
    assert!(result.text.contains("128"));
    assert!(result.text.contains("RT_MANIFEST"));
    assert!(!result.text.contains("LANGUAGE"));

    let saves = std::fs::read_to_string(dir.path().join("saves")).expect("saves record");
    let artifact = saves.lines().next().expect("recorded artifact path");
    assert!(
        !std::path::Path::new(artifact).exists(),
        "temp artifact {artifact} should be removed after the call"
    );
}

#[tokio::test]
async fn list_resources_failure_still_cleans_up() {
    let dir = tempfile::tempdir().expect("tempdir");
    let body = format!(
        "echo \"$SAVE\" >> {}\n{}",
        dir.path().join("saves").display(),
        REALISTIC_BODY
    );
    let cfg = config(stub_editor(&dir, &body));

    let result = ops::list_resources(
        &cfg,
        ListParams {
            input_file: dir.path().join("missing.exe").to_string_lossy().into_owned(),
        },
    )
    .await;

    assert!(result.is_error);
    assert!(result.text.contains("Failed to list resources (extraction failed)"));

    let saves = std::fs::read_to_string(dir.path().join("saves")).expect("saves record");
    let artifact = saves.lines().next().expect("recorded artifact path");
    assert!(!std::path::Path::new(artifact).exists());
}

#[tokio::test]
async fn list_resources_read_failure_is_distinct() {
    let dir = tempfile::tempdir().expect("tempdir");
    // Exits zero without writing the save file: extraction "succeeds" but
    // the artifact cannot be read back.
    let cfg = config(stub_editor(&dir, "exit 0"));

    let result = ops::list_resources(
        &cfg,
        ListParams {
            input_file: dir.path().join("app.exe").to_string_lossy().into_owned(),
        },
    )
    .await;

    assert!(result.is_error);
    assert!(
        result.text.contains("Failed to read generated resource script"),
        "expected distinct read-failure message, got: {}",
        result.text
    );
}

#[tokio::test]
async fn concurrent_listings_do_not_collide() {
    let dir = tempfile::tempdir().expect("tempdir");
    // Each listing's inventory is derived from its own input file name, so
    // a shared or clobbered artifact would show up as crossed results.
    let body = format!(
        "echo \"$SAVE\" >> {}\nprintf '%s BITMAP\\n' \"$(basename \"$OPEN\")\" > \"$SAVE\"",
        dir.path().join("saves").display()
    );
    let cfg = config(stub_editor(&dir, &body));

    let first = ops::list_resources(
        &cfg,
        ListParams {
            input_file: "alpha.exe".to_string(),
        },
    );
    let second = ops::list_resources(
        &cfg,
        ListParams {
            input_file: "beta.exe".to_string(),
        },
    );
    let (first, second) = tokio::join!(first, second);

    assert!(!first.is_error, "{}", first.text);
    assert!(!second.is_error, "{}", second.text);
    assert!(first.text.contains("alpha.exe"));
    assert!(!first.text.contains("beta.exe"));
    assert!(second.text.contains("beta.exe"));
    assert!(!second.text.contains("alpha.exe"));

    // Two distinct artifact paths were used, and both are gone.
    let saves = std::fs::read_to_string(dir.path().join("saves")).expect("saves record");
    let artifacts: Vec<&str> = saves.lines().collect();
    assert_eq!(artifacts.len(), 2);
    assert_ne!(artifacts[0], artifacts[1]);
    for artifact in artifacts {
        assert!(!std::path::Path::new(artifact).exists());
    }
}

#[tokio::test]
async fn get_help_returns_tool_output_verbatim() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = config(stub_editor(&dir, "echo 'Usage: ResourceHacker ...'"));

    let result = ops::get_help(&cfg, HelpParams { topic: None }).await;
    assert!(!result.is_error);
    assert!(result.text.contains("Usage: ResourceHacker"));
}

#[tokio::test]
async fn get_help_with_silent_tool_reports_no_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = config(stub_editor(&dir, "exit 0"));

    let result = ops::get_help(&cfg, HelpParams { topic: None }).await;
    assert!(!result.is_error);
    assert_eq!(result.text, "No help output available");
}

#[tokio::test]
async fn timeout_is_reported_not_hung() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut cfg = config(stub_editor(&dir, "sleep 60"));
    cfg.timeout = Duration::from_millis(200);

    let result = ops::extract_resource(
        &cfg,
        ExtractParams {
            input_file: "a.exe".to_string(),
            output_path: "out.rc".to_string(),
            resource_mask: None,
            log_file: None,
        },
    )
    .await;

    assert!(result.is_error);
    assert!(result.text.contains("timed out"), "text: {}", result.text);
}
