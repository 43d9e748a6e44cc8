use super::helpers::{array_list_test_class, ClassFileBuilder, TestProject, ACC_PUBLIC};
use jvm_interface_auditor::InterfaceAuditor;

#[test]
fn test_check_reports_violations_and_fails() {
    let project = TestProject::new();
    project.write_class("com/acme/ArrayListTestClass.class", &array_list_test_class());

    let output = project.run(&["check", "classes", "--format", "json"]);

    // fail_on_violations defaults to true
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("java.util.ArrayList"));
    assert!(stdout.contains("\"total_violations\": 4"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Interface leakage found"));
}

#[test]
fn test_configured_exclusions_silence_violations() {
    let project = TestProject::new();
    project.write_class("com/acme/ArrayListTestClass.class", &array_list_test_class());
    project.write_config(
        r#"
exclusions = ["java.**"]
classes = "classes"
"#,
    );

    let output = project.run(&["check"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No interface leakage"));
}

#[test]
fn test_exit_zero_overrides_failure() {
    let project = TestProject::new();
    project.write_class("com/acme/ArrayListTestClass.class", &array_list_test_class());

    let output = project.run(&["check", "classes", "--exit-zero"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("java.util.ArrayList"));
}

#[test]
fn test_cli_excludes_extend_config() {
    let project = TestProject::new();
    project.write_class("com/acme/ArrayListTestClass.class", &array_list_test_class());

    let output = project.run(&["check", "classes", "--exclude", "java.util.*"]);

    assert!(output.status.success());
}

#[test]
fn test_package_private_class_is_clean() {
    let project = TestProject::new();
    let class = ClassFileBuilder::new("com/acme/Hidden")
        .access_flags(0)
        .field(ACC_PUBLIC, "field", "Ljava/util/ArrayList;")
        .build();
    project.write_class("com/acme/Hidden.class", &class);

    let output = project.run(&["check", "classes"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No interface leakage"));
}

#[test]
fn test_malformed_class_file_fails_check() {
    let project = TestProject::new();
    project.write_class("com/acme/Broken.class", &[0xDE, 0xAD, 0xBE, 0xEF, 0x00]);

    let output = project.run(&["check", "classes"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Broken.class"));
}

#[test]
fn test_init_and_config_validate() {
    let project = TestProject::new();

    let init_output = project.run(&["init", "jdk"]);
    assert!(init_output.status.success());

    let validate_output = project.run(&["config", "--validate"]);
    assert!(validate_output.status.success());
    let stdout = String::from_utf8_lossy(&validate_output.stdout);
    assert!(stdout.contains("Configuration is valid"));

    // the jdk preset excludes java.**, so the fixture passes
    project.write_class("com/acme/ArrayListTestClass.class", &array_list_test_class());
    let check_output = project.run(&["check", "classes"]);
    assert!(check_output.status.success());
}

#[test]
fn test_config_show_outputs_json() {
    let project = TestProject::new();
    project.write_config(r#"exclusions = ["org.internal.**"]"#);

    let output = project.run(&["config", "--show"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("org.internal.**"));
}

#[test]
fn test_output_file_redirection() {
    let project = TestProject::new();
    project.write_class("com/acme/ArrayListTestClass.class", &array_list_test_class());

    let output = project.run(&[
        "check",
        "classes",
        "--format",
        "json",
        "--output",
        "report.json",
        "--exit-zero",
    ]);

    assert!(output.status.success());
    let report = std::fs::read_to_string(project.dir.path().join("report.json")).unwrap();
    assert!(report.contains("java.util.ArrayList"));
}

#[test]
fn test_library_check_matches_fixture() {
    let auditor = InterfaceAuditor::new(Vec::<String>::new());
    let occurrences = auditor.check_bytes(&array_list_test_class()).unwrap();
    assert_eq!(occurrences.len(), 4);
    assert!(occurrences
        .iter()
        .all(|o| o.type_token == "java.util.ArrayList"));

    let excluding = InterfaceAuditor::new(["java.**"]);
    let occurrences = excluding.check_bytes(&array_list_test_class()).unwrap();
    assert!(occurrences.is_empty());
}
