//! CLI tests for `actiongen build` and `actiongen check`.
//!
//! Spawns the actiongen binary against a temporary project and verifies exit
//! codes and the generated file.

use std::fs;
use std::process::Command;

use actiongen::exit_codes;
use actiongen::io::artifact::read_stamp;
use actiongen::test_support::TestProject;

fn actiongen(project: &TestProject, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_actiongen"))
        .current_dir(project.path())
        .args(args)
        .output()
        .expect("run actiongen")
}

#[test]
fn check_before_build_exits_with_stale_code() {
    let project = TestProject::new(&["ModuleA", "ModuleB"]).expect("project");
    let output = actiongen(&project, &["check"]);
    assert_eq!(output.status.code(), Some(exit_codes::STALE));
}

#[test]
fn build_then_check_is_up_to_date() {
    let project = TestProject::new(&["ModuleA", "ModuleB"]).expect("project");

    let output = actiongen(&project, &["build"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("methods=4"), "stdout: {stdout}");

    let source = fs::read_to_string(project.output_path()).expect("read generated file");
    assert!(source.contains("trait AcceptanceActions"));
    assert!(source.contains("namespace Tests\\Support\\_generated;"));
    assert!(source.contains("public function canSeeText($text, $selector = null) {"));
    assert!(
        source.contains("     Opens the given URL.\n     * @see \\Modules\\ModuleB::amOnUrl()")
    );

    let output = actiongen(&project, &["check"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
}

#[test]
fn fingerprint_matches_stamp() {
    let project = TestProject::new(&["ModuleA"]).expect("project");
    actiongen(&project, &["build"]);

    let output = actiongen(&project, &["fingerprint"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let printed = String::from_utf8_lossy(&output.stdout).trim().to_string();
    let stored = read_stamp(&project.output_path()).expect("read stamp");
    assert_eq!(stored.as_deref(), Some(printed.as_str()));
}

#[test]
fn unknown_module_exits_with_invalid_code() {
    let project = TestProject::new(&["ModuleA", "Missing"]).expect("project");
    let output = actiongen(&project, &["build"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Missing"), "stderr: {stderr}");
    assert!(!project.output_path().exists());
}

#[test]
fn actions_lists_registry_in_order() {
    let project = TestProject::new(&["ModuleA", "ModuleB", "Shadow"]).expect("project");
    let output = actiongen(&project, &["actions"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "fillField\tModuleA\tAction:fillField",
            "seeText\tModuleA\tConditionalAssertion:canSeeText,Assertion:seeText",
            "amOnUrl\tModuleB\tCondition:amOnUrl",
        ]
    );
}
