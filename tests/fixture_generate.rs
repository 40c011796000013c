//! Integration tests for the generate and validate command handlers.

use bin_fixtures::fixtures::generate::write_records;
use bin_fixtures::fixtures::validate::run_validate;
use bin_fixtures::{GenerateArgs, SchemaOpts, ValidateArgs};
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

const SCHEMA_PATH: &str = "tests/fixtures/fixture_schema.yaml";

fn generate_args(schema: impl Into<PathBuf>) -> GenerateArgs {
    GenerateArgs {
        schema_opts: SchemaOpts {
            schema: schema.into(),
        },
        sets: Vec::new(),
        count: 5,
        seed: None,
        start_index: 0,
        output: None,
    }
}

fn generate_lines(args: &GenerateArgs) -> Vec<serde_json::Value> {
    let mut out = Vec::new();
    let written = write_records(args, &mut out).expect("generate should succeed");
    let lines: Vec<serde_json::Value> = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(written, lines.len() as u64);
    lines
}

fn schema_file(yaml: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();
    file
}

#[test]
fn test_generate_all_sets() {
    tracing_subscriber::fmt()
        .with_env_filter("bin_fixtures=debug,record_generator=debug")
        .try_init()
        .ok();

    let lines = generate_lines(&generate_args(SCHEMA_PATH));
    assert_eq!(lines.len(), 10);

    let users: Vec<_> = lines.iter().filter(|l| l["set"] == "users").collect();
    assert_eq!(users.len(), 5);
    for (i, user) in users.iter().enumerate() {
        assert_eq!(user["namespace"], "test");
        assert_eq!(user["key"], format!("user-{i}"));
        assert_eq!(user["ttl"], 3600);
        assert_eq!(user["generation"], 0);

        let bins = &user["bins"];
        assert_eq!(bins["email"], format!("user_{i}@example.com"));
        let age = bins["age"].as_i64().unwrap();
        assert!((18..=80).contains(&age));
        let score = bins["score"].as_f64().unwrap();
        assert!((0.0..=1.0).contains(&score));
        assert!(bins["active"].is_boolean());
        let tags = bins["tags"].as_array().unwrap();
        assert!((1..=3).contains(&tags.len()));
        // 8 bytes as padded base64
        assert_eq!(bins["avatar"].as_str().unwrap().len(), 12);
        assert!(bins["joined_at"].as_i64().unwrap() >= 1_704_067_200_000);
    }

    let settings: Vec<_> = lines.iter().filter(|l| l["set"] == "settings").collect();
    assert_eq!(settings.len(), 5);
    for (i, setting) in settings.iter().enumerate() {
        assert_eq!(setting["key"], i as u64);
        assert_eq!(setting["ttl"], 4_294_967_295u64);
        assert_eq!(setting["bins"], settings[0]["bins"]);
    }
    let bins = &settings[0]["bins"];
    assert_eq!(bins["region"], "eu-west");
    assert_eq!(bins["location"]["type"], "Point");
    assert_eq!(bins["limits"]["requests"], 100);
}

#[test]
fn test_generate_is_deterministic() {
    let args = generate_args(SCHEMA_PATH);
    assert_eq!(generate_lines(&args), generate_lines(&args));
}

#[test]
fn test_seed_flag_overrides_schema_seed() {
    let mut args = generate_args(SCHEMA_PATH);
    args.sets = vec!["users".to_string()];
    args.count = 20;
    let from_schema = generate_lines(&args);

    args.seed = Some(42);
    assert_eq!(generate_lines(&args), from_schema);

    args.seed = Some(43);
    let ages = |lines: &[serde_json::Value]| -> Vec<i64> {
        lines.iter().map(|l| l["bins"]["age"].as_i64().unwrap()).collect()
    };
    assert_ne!(ages(&generate_lines(&args)), ages(&from_schema));
}

#[test]
fn test_generate_selected_set_from_start_index() {
    let mut args = generate_args(SCHEMA_PATH);
    args.sets = vec!["users".to_string()];
    args.count = 2;
    args.start_index = 100;

    let lines = generate_lines(&args);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["key"], "user-100");
    assert_eq!(lines[1]["bins"]["email"], "user_101@example.com");
}

#[test]
fn test_generate_unknown_set_fails() {
    let mut args = generate_args(SCHEMA_PATH);
    args.sets = vec!["orders".to_string()];

    let err = write_records(&args, &mut Vec::new()).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("Set 'orders' not found"), "{message}");
    assert!(message.contains("users, settings"), "{message}");
}

#[test]
fn test_generate_missing_schema_fails() {
    let args = generate_args("tests/fixtures/does_not_exist.yaml");

    let err = write_records(&args, &mut Vec::new()).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to load fixture schema"));
}

#[test]
fn test_generate_reports_invocation_failure() {
    let file = schema_file(
        r#"
sets:
  - name: counters
    namespace: test
    bins:
      - name: n
        generator: { type: sequential, start: 9223372036854775807 }
"#,
    );
    let mut args = generate_args(file.path());
    args.count = 3;

    let mut out = Vec::new();
    let err = write_records(&args, &mut out).unwrap_err();
    assert!(format!("{err:#}").contains("overflowed"));
    // The first record was written before the failure; no partial line follows it.
    assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
}

#[test]
fn test_validate_lists_sets() {
    let args = ValidateArgs {
        schema_opts: SchemaOpts {
            schema: SCHEMA_PATH.into(),
        },
    };

    let mut out = Vec::new();
    run_validate(&args, &mut out).unwrap();
    let summary = String::from_utf8(out).unwrap();

    assert!(summary.contains("users: namespace=test kind=generated ttl=3600"));
    assert!(summary.contains("bins=[email, age, score, active, tags, avatar, joined_at]"));
    assert!(summary.contains("settings: namespace=test kind=constant"));
}

#[test]
fn test_validate_rejects_bad_generator() {
    let file = schema_file(
        r#"
sets:
  - name: broken
    namespace: test
    bins:
      - name: flag
        generator: { type: weighted_bool, true_weight: 2.0 }
"#,
    );
    let args = ValidateArgs {
        schema_opts: SchemaOpts {
            schema: file.path().to_path_buf(),
        },
    };

    let err = run_validate(&args, &mut Vec::new()).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("Invalid generator for 'flag' in set 'broken'"), "{message}");
}

#[test]
fn test_validate_rejects_unbounded_float_range() {
    let file = schema_file(
        r#"
sets:
  - name: readings
    namespace: test
    bins:
      - name: value
        generator: { type: float_range, min: -1.0e308, max: 1.0e308 }
"#,
    );
    let args = ValidateArgs {
        schema_opts: SchemaOpts {
            schema: file.path().to_path_buf(),
        },
    };

    let err = run_validate(&args, &mut Vec::new()).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("is not finite"), "{message}");
}
