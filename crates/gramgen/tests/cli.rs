// End-to-end tests driving the 'gramgen' binary against fake grammar compilers implemented as
// shell scripts, so no real ANTLR installation is needed.
#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

// The runner passes '-Dlanguage=<lang> <grammar> -o <output-dir>', so "$4" is the output
// directory from a fake tool's point of view.
fn write_fake_tool(dir: &Path, name: &str, script: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn write_grammar(dir: &Path) {
    fs::write(dir.join("Generic.g4"), "grammar Generic;\n").unwrap();
}

fn gramgen(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("gramgen").unwrap();
    cmd.current_dir(dir);
    cmd
}

#[test]
fn populates_output_dir_on_success() {
    let tmp = tempfile::tempdir().unwrap();
    write_grammar(tmp.path());
    let tool = write_fake_tool(
        tmp.path(),
        "fake-antlr4",
        "#!/bin/sh\necho generated > \"$4\"/GenericParser.cpp\nexit 0\n",
    );

    gramgen(tmp.path())
        .arg("--tool")
        .arg(&tool)
        .arg("--fallback-tool")
        .arg("no-such-grammar-compiler")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    assert!(tmp.path().join("parser/GenericParser.cpp").exists());
}

#[test]
fn wipes_stale_output_before_regenerating() {
    let tmp = tempfile::tempdir().unwrap();
    write_grammar(tmp.path());
    let tool = write_fake_tool(
        tmp.path(),
        "fake-antlr4",
        "#!/bin/sh\necho generated > \"$4\"/GenericParser.cpp\nexit 0\n",
    );

    let out = tmp.path().join("parser");
    fs::create_dir(&out).unwrap();
    fs::write(out.join("stale.cpp"), "old").unwrap();

    gramgen(tmp.path()).arg("--tool").arg(&tool).assert().success();

    assert!(!out.join("stale.cpp").exists());
    assert!(out.join("GenericParser.cpp").exists());
}

#[test]
fn falls_back_and_reports_the_primary_failure() {
    let tmp = tempfile::tempdir().unwrap();
    write_grammar(tmp.path());
    let broken = write_fake_tool(tmp.path(), "fake-antlr4", "#!/bin/sh\nexit 3\n");
    let working = write_fake_tool(
        tmp.path(),
        "fake-antlr",
        "#!/bin/sh\necho generated > \"$4\"/GenericParser.cpp\nexit 0\n",
    );

    gramgen(tmp.path())
        .arg("--tool")
        .arg(&broken)
        .arg("--fallback-tool")
        .arg(&working)
        .assert()
        .success()
        .stderr(predicate::str::contains("USED FALLBACK TOOL"))
        .stderr(predicate::str::contains("exited with status 3"));

    assert!(tmp.path().join("parser/GenericParser.cpp").exists());
}

#[test]
fn double_failure_exits_nonzero_and_leaves_the_dir_empty() {
    let tmp = tempfile::tempdir().unwrap();
    write_grammar(tmp.path());
    let broken_a = write_fake_tool(tmp.path(), "fake-antlr4", "#!/bin/sh\nexit 1\n");
    let broken_b = write_fake_tool(tmp.path(), "fake-antlr", "#!/bin/sh\nexit 2\n");

    gramgen(tmp.path())
        .arg("--tool")
        .arg(&broken_a)
        .arg("--fallback-tool")
        .arg(&broken_b)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Every grammar compiler invocation failed",
        ))
        .stderr(predicate::str::contains("exited with status 1"))
        .stderr(predicate::str::contains("exited with status 2"));

    let out = tmp.path().join("parser");
    assert!(out.exists());
    assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
}

#[test]
fn missing_tools_are_reported_with_the_search_log() {
    let tmp = tempfile::tempdir().unwrap();
    write_grammar(tmp.path());

    gramgen(tmp.path())
        .arg("--tool")
        .arg("no-such-grammar-compiler")
        .arg("--fallback-tool")
        .arg("also-no-such-grammar-compiler")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("could not be run"))
        .stderr(predicate::str::contains("no-such-grammar-compiler"));
}

#[test]
fn custom_language_and_grammar_reach_the_tool() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("Tiny.g4"), "grammar Tiny;\n").unwrap();

    // The fake records its argument vector so we can check the invocation shape.
    let tool = write_fake_tool(
        tmp.path(),
        "fake-antlr4",
        "#!/bin/sh\nprintf '%s\\n' \"$@\" > args.txt\nexit 0\n",
    );

    gramgen(tmp.path())
        .arg("Tiny.g4")
        .arg("--language")
        .arg("Java")
        .arg("--output-dir")
        .arg("gen")
        .arg("--tool")
        .arg(&tool)
        .assert()
        .success();

    let args = fs::read_to_string(tmp.path().join("args.txt")).unwrap();
    let args: Vec<&str> = args.lines().collect();
    assert_eq!(args, vec!["-Dlanguage=Java", "Tiny.g4", "-o", "gen"]);
    assert!(tmp.path().join("gen").exists());
}
