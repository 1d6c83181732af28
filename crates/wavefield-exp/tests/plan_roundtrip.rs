use std::fs;

use wavefield_core::WfError;
use wavefield_exp::{
    from_json_slice, from_yaml_slice, load_plan, to_canonical_json_bytes, to_yaml_string, Band,
    ValidationPlan, ValidationReport, Verdict,
};

const PLAN: &str = r#"
harness:
  model:
    correction:
      density_factor: 1.0
  classifier:
    rules:
      - band: PERFECT
        range: { min: 0.99, max: 1.01 }
    fallback: POOR
  verdicts:
    rules:
      - verdict: CONFIRMED
        basis: success
        min_share: 0.5
run:
  concurrency: 2
scenarios:
  - { name: Human-Human, mass_a: 70.0, mass_b: 70.0, separation: 1.0 }
  - { name: Proton-Proton, mass_a: 1.673e-27, mass_b: 1.673e-27, separation: 1.0e-15 }
  - { name: Ghost, mass_a: 0.0, mass_b: 1.0, separation: 1.0 }
"#;

#[test]
fn yaml_plan_loads_and_executes() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let path = dir.path().join("plan.yaml");
    fs::write(&path, PLAN).expect("write plan");

    let plan = load_plan(&path).expect("load plan");
    assert_eq!(plan.run.concurrency, 2);
    assert_eq!(plan.scenarios.len(), 3);
    assert_eq!(plan.harness.model.correction.probe_wavelength, 500e-9);

    let report = plan.execute().expect("execute");
    assert_eq!(report.summary.total, 2);
    assert_eq!(report.summary.skipped, 1);
    assert_eq!(report.summary.count(Band::Perfect), 1);
    assert_eq!(report.summary.count(Band::Poor), 1);
    assert_eq!(report.summary.verdict, Verdict::Confirmed);
}

#[test]
fn empty_document_runs_reference_catalog() {
    let plan: ValidationPlan = from_yaml_slice(b"{}").expect("parse");
    assert_eq!(plan, ValidationPlan::default());
    assert_eq!(plan.scenarios.len(), 30);
}

#[test]
fn missing_plan_file_is_a_serde_error() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let err = load_plan(&dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, WfError::Serde(_)));
    assert_eq!(err.info().code, "plan-read");
}

#[test]
fn invalid_rules_in_plan_are_rejected() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let path = dir.path().join("bad.yaml");
    fs::write(
        &path,
        "harness:\n  verdicts:\n    rules:\n      - { verdict: CONFIRMED, basis: success, min_share: 2.0 }\n",
    )
    .expect("write plan");
    assert!(matches!(load_plan(&path).unwrap_err(), WfError::Config(_)));
}

#[test]
fn report_survives_canonical_json_and_yaml() {
    let report = ValidationPlan::default().execute().expect("execute");
    let bytes = to_canonical_json_bytes(&report).expect("json");
    let back: ValidationReport = from_json_slice(&bytes).expect("decode");
    assert_eq!(back, report);
    assert_eq!(to_canonical_json_bytes(&back).unwrap(), bytes);

    let yaml = to_yaml_string(&report.summary).expect("yaml");
    assert!(yaml.contains("FULLY_VALIDATED"));
}
