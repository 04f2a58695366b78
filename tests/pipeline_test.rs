//! Integration tests for the compile → execute → diff pipeline

use judge_runner_core::{
    Config, Error, Harness, Invocation, Stage, Toolchain,
    config::{InterpretedConfig, NativeConfig},
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const ADD_PY: &str = "a, b = map(int, input().split())\nprint(a + b)\n";

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn python3_available() -> bool {
    std::process::Command::new("python3")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

#[test]
fn test_add_py_matches_expected() {
    if !python3_available() {
        eprintln!("python3 not found, skipping");
        return;
    }
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let invocation = Invocation::new(
        write(root, "add.py", ADD_PY),
        write(root, "input.txt", "3 4\n"),
        root.join("output.txt"),
        write(root, "expected.txt", "7\n"),
    );

    let mut stages: Vec<Stage> = Vec::new();
    let report = Harness::new().run(&invocation, &mut stages).unwrap();

    assert!(report.is_match());
    assert!(report.diff.is_empty());
    // interpreted sources skip the compile step
    assert_eq!(stages, vec![Stage::Executing, Stage::Comparing]);
    assert_eq!(fs::read_to_string(root.join("output.txt")).unwrap(), "7\n");
}

#[test]
fn test_add_py_reports_difference() {
    if !python3_available() {
        eprintln!("python3 not found, skipping");
        return;
    }
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let invocation = Invocation::new(
        write(root, "add.py", ADD_PY),
        write(root, "input.txt", "3 4\n"),
        root.join("output.txt"),
        write(root, "expected.txt", "8\n"),
    );

    let report = Harness::new()
        .run(&invocation, &mut judge_runner_core::Silent)
        .unwrap();

    assert!(!report.is_match());
    assert_eq!(report.diff.removed().collect::<Vec<_>>(), vec!["8"]);
    assert_eq!(report.diff.added().collect::<Vec<_>>(), vec!["7"]);
}

#[test]
fn test_output_file_is_truncated() {
    if !python3_available() {
        eprintln!("python3 not found, skipping");
        return;
    }
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let output = write(root, "output.txt", "stale content\nfrom a previous run\n");
    let invocation = Invocation::new(
        write(root, "add.py", ADD_PY),
        write(root, "input.txt", "10 20\n"),
        &output,
        write(root, "expected.txt", "30\n"),
    );

    let report = Harness::new()
        .run(&invocation, &mut judge_runner_core::Silent)
        .unwrap();

    assert!(report.is_match());
    assert_eq!(fs::read_to_string(&output).unwrap(), "30\n");
}

#[test]
fn test_unsupported_extension_fails_before_spawning() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let invocation = Invocation::new(
        write(root, "solution.rb", "puts gets.split.map(&:to_i).sum"),
        write(root, "input.txt", "3 4\n"),
        root.join("output.txt"),
        write(root, "expected.txt", "7\n"),
    );

    let mut stages: Vec<Stage> = Vec::new();
    let err = Harness::new().run(&invocation, &mut stages).unwrap_err();

    assert!(matches!(err, Error::UnsupportedLanguage { .. }));
    assert!(stages.is_empty());
    assert!(!root.join("output.txt").exists());
}

#[test]
fn test_config_discovery_selects_interpreter() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let problem_dir = root.join("round_1").join("a");
    fs::create_dir_all(&problem_dir).unwrap();

    let config = serde_json::json!({
        "interpreted": { "interpreter": "pypy3", "flags": ["-u"] },
        "context_lines": 0
    });
    fs::write(
        root.join(".judge-runner.json"),
        serde_json::to_string_pretty(&config).unwrap(),
    )
    .unwrap();
    let source = write(&problem_dir, "sol.py", "print(1)\n");

    let harness = Harness::for_source(&source).unwrap();
    assert_eq!(harness.config().context_lines(), 0);
    assert_eq!(
        harness.select_toolchain(&source).unwrap(),
        Toolchain::Interpreted {
            interpreter: "pypy3".to_string(),
            flags: vec!["-u".to_string()],
        }
    );
}

#[cfg(unix)]
mod native {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    const STUB_COMPILER: &str = "#!/bin/sh\n\
        out=\"$2\"\n\
        src=\"$3\"\n\
        printf '#!/bin/sh\\n' > \"$out\"\n\
        cat \"$src\" >> \"$out\"\n\
        chmod +x \"$out\"\n";

    fn harness_with_stub_compiler(root: &Path) -> Harness {
        let compiler = write(root, "stubcc", STUB_COMPILER);
        fs::set_permissions(&compiler, fs::Permissions::from_mode(0o755)).unwrap();
        Harness::with_config(Config {
            native: Some(NativeConfig {
                compiler: Some(compiler.to_string_lossy().into_owned()),
                ..Default::default()
            }),
            ..Default::default()
        })
    }

    #[test]
    fn test_native_artifact_removed_after_success() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let harness = harness_with_stub_compiler(root);
        let invocation = Invocation::new(
            write(root, "sum.cc", "read a b\necho $((a + b))\n"),
            write(root, "input.txt", "3 4\n"),
            root.join("output.txt"),
            write(root, "expected.txt", "7\n"),
        );

        let mut stages: Vec<Stage> = Vec::new();
        let report = harness.run(&invocation, &mut stages).unwrap();

        assert!(report.is_match());
        assert_eq!(
            stages,
            vec![Stage::Compiling, Stage::Executing, Stage::Comparing]
        );
        assert!(!root.join("sum.out").exists());
    }

    #[test]
    fn test_native_artifact_removed_after_failure() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let harness = harness_with_stub_compiler(root);
        let invocation = Invocation::new(
            write(root, "crash.cpp", "echo partial\nexit 139\n"),
            write(root, "input.txt", ""),
            root.join("output.txt"),
            write(root, "expected.txt", "7\n"),
        );

        let err = harness
            .run(&invocation, &mut judge_runner_core::Silent)
            .unwrap_err();

        assert!(matches!(err, Error::Execution { .. }));
        assert!(!root.join("crash.out").exists());
        assert_eq!(fs::read_to_string(root.join("output.txt")).unwrap(), "partial\n");
    }

    #[test]
    fn test_missing_compiler_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let harness = Harness::with_config(Config {
            native: Some(NativeConfig {
                compiler: Some("no-such-compiler-xyz".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        });
        let invocation = Invocation::new(
            write(root, "a.cpp", "int main() {}"),
            write(root, "input.txt", ""),
            root.join("output.txt"),
            write(root, "expected.txt", ""),
        );

        let err = harness
            .run(&invocation, &mut judge_runner_core::Silent)
            .unwrap_err();

        assert!(matches!(err, Error::Spawn { .. }));
        assert!(err.is_process_failure());
    }

    #[test]
    fn test_interpreter_flags_are_passed() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let harness = Harness::with_config(Config {
            interpreted: Some(InterpretedConfig {
                interpreter: Some("sh".to_string()),
                flags: Some(vec!["-e".to_string()]),
            }),
            ..Default::default()
        });
        // with -e the script stops at `false`
        let invocation = Invocation::new(
            write(root, "script.py", "echo one\nfalse\necho two\n"),
            write(root, "input.txt", ""),
            root.join("output.txt"),
            write(root, "expected.txt", "one\n"),
        );

        let err = harness
            .run(&invocation, &mut judge_runner_core::Silent)
            .unwrap_err();
        assert!(matches!(err, Error::Execution { .. }));
        assert_eq!(fs::read_to_string(root.join("output.txt")).unwrap(), "one\n");
    }
}
