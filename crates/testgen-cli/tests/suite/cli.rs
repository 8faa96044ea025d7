use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

const PROJECT_JSON: &str = r#"{
  "classes": [
    {
      "name": "OrderService",
      "qualified_name": "com.acme.OrderService",
      "modifiers": { "visibility": "public" },
      "fields": [
        {
          "name": "paymentGateway",
          "type": "com.acme.PaymentGateway",
          "modifiers": { "visibility": "private", "final": true }
        },
        { "name": "retryCount", "type": "int", "modifiers": { "visibility": "private" } }
      ],
      "methods": [
        {
          "name": "isEligible",
          "modifiers": { "visibility": "public" },
          "params": [{ "name": "order", "type": "com.acme.Order" }],
          "return_type": "boolean"
        }
      ]
    },
    { "name": "PaymentGateway", "qualified_name": "com.acme.PaymentGateway", "kind": "interface" },
    { "name": "Order", "qualified_name": "com.acme.Order", "modifiers": { "visibility": "public" } }
  ]
}"#;

const TEST_FILE_JSON: &str = r#"{
  "name": "OrderServiceTest.java",
  "package": "com.acme",
  "classes": [{ "name": "OrderServiceTest", "qualified_name": "com.acme.OrderServiceTest" }]
}"#;

fn testgen(dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("testgen"));
    cmd.current_dir(dir.path())
        .env_remove("TESTGEN_CONFIG_PATH")
        .env_remove("RUST_LOG");
    cmd
}

fn workspace() -> TempDir {
    let temp = TempDir::new().expect("tempdir");
    temp.child("project.json").write_str(PROJECT_JSON).unwrap();
    temp.child("OrderServiceTest.json")
        .write_str(TEST_FILE_JSON)
        .unwrap();
    temp
}

#[test]
fn help_mentions_core_commands() {
    let temp = TempDir::new().unwrap();
    testgen(&temp).arg("--help").assert().success().stdout(
        predicate::str::contains("generate")
            .and(predicate::str::contains("render"))
            .and(predicate::str::contains("schema")),
    );
}

#[test]
fn generate_prints_java_scaffolding() {
    let temp = workspace();
    testgen(&temp)
        .args(["generate", "--project", "project.json", "OrderServiceTest.json"])
        .args(["--seed", "5"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("@ExtendWith(MockitoExtension.class)\nclass OrderServiceTest {")
                .and(predicate::str::contains("    @Mock\n    private PaymentGateway paymentGateway;"))
                .and(predicate::str::contains("    private static final int RETRY_COUNT = "))
                .and(predicate::str::contains("    @InjectMocks\n    private OrderService underTest;"))
                .and(predicate::str::contains("    @Nested\n    class WhenCheckingIfIsEligible {"))
                .and(predicate::str::contains("        @BeforeEach\n        void setup() {"))
                .and(predicate::str::contains("import static org.mockito.Mockito.*;")),
        );
}

#[test]
fn generate_json_reports_summary_and_model() {
    let temp = workspace();
    let output = testgen(&temp)
        .args(["generate", "--project", "project.json", "OrderServiceTest.json", "--json"])
        .output()
        .expect("run testgen");
    assert!(output.status.success(), "{output:?}");

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(value["summary"]["imports_added"], 8);
    assert_eq!(value["summary"]["fields_added"], 4);
    assert_eq!(value["summary"]["nested_classes_added"], 1);

    let fields: Vec<&str> = value["file"]["classes"][0]["fields"]
        .as_array()
        .expect("fields")
        .iter()
        .map(|f| f["name"].as_str().expect("field name"))
        .collect();
    assert_eq!(fields, vec!["paymentGateway", "RETRY_COUNT", "underTest"]);
    assert_eq!(
        value["file"]["classes"][0]["inner_classes"][0]["name"],
        "WhenCheckingIfIsEligible"
    );
}

#[test]
fn same_seed_gives_identical_output() {
    let temp = workspace();
    let run = || {
        testgen(&temp)
            .args(["generate", "--project", "project.json", "OrderServiceTest.json"])
            .args(["--seed", "1234"])
            .output()
            .expect("run testgen")
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn seed_can_come_from_config() {
    let temp = workspace();
    temp.child("testgen.toml")
        .write_str("[generation]\nseed = 99\n")
        .unwrap();

    let from_config = testgen(&temp)
        .args(["generate", "--project", "project.json", "OrderServiceTest.json"])
        .output()
        .expect("run testgen");
    let from_flag = testgen(&temp)
        .args(["generate", "--project", "project.json", "OrderServiceTest.json"])
        .args(["--seed", "99"])
        .output()
        .expect("run testgen");
    assert!(from_config.status.success(), "{from_config:?}");
    assert_eq!(from_config.stdout, from_flag.stdout);
}

#[test]
fn output_flag_writes_a_file() {
    let temp = workspace();
    testgen(&temp)
        .args(["generate", "--project", "project.json", "OrderServiceTest.json"])
        .args(["--output", "OrderServiceTest.java"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    temp.child("OrderServiceTest.java")
        .assert(predicate::str::starts_with("package com.acme;\n"));
}

#[test]
fn non_matching_file_name_is_refused_without_force() {
    let temp = workspace();
    temp.child("OrderServiceSpec.json")
        .write_str(&TEST_FILE_JSON.replace("OrderServiceTest.java", "OrderServiceSpec.java"))
        .unwrap();

    testgen(&temp)
        .args(["generate", "--project", "project.json", "OrderServiceSpec.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--force"));

    testgen(&temp)
        .args(["generate", "--project", "project.json", "OrderServiceSpec.json", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("private OrderService underTest;"));
}

#[test]
fn configured_suffix_controls_enablement() {
    let temp = workspace();
    temp.child("ci.toml")
        .write_str("[action]\nfile_suffix = \"IT.java\"\n")
        .unwrap();

    testgen(&temp)
        .args(["--config", "ci.toml"])
        .args(["generate", "--project", "project.json", "OrderServiceTest.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("IT.java"));
}

#[test]
fn invalid_config_exits_with_code_two() {
    let temp = workspace();
    temp.child("testgen.toml")
        .write_str("[generation]\nsed = 1\n")
        .unwrap();

    testgen(&temp)
        .args(["render", "OrderServiceTest.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to load config"));
}

#[test]
fn missing_project_model_exits_with_code_two() {
    let temp = workspace();
    testgen(&temp)
        .args(["generate", "--project", "missing.json", "OrderServiceTest.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to load project model"));
}

#[test]
fn render_prints_the_model_unchanged() {
    let temp = workspace();
    testgen(&temp)
        .args(["render", "OrderServiceTest.json"])
        .assert()
        .success()
        .stdout("package com.acme;\n\nclass OrderServiceTest {\n}\n");
}

#[test]
fn schema_prints_config_schema() {
    let temp = TempDir::new().unwrap();
    let output = testgen(&temp).arg("schema").output().expect("run testgen");
    assert!(output.status.success(), "{output:?}");

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json schema");
    assert_eq!(value["title"], "TestgenConfig");
}
