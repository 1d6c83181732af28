use wavefield_exp::{
    reference_catalog, run_validation, Band, HarnessConfig, RunOpts, ScenarioRecord, Verdict,
};

#[test]
fn reference_catalog_has_thirty_named_scenarios() {
    let catalog = reference_catalog();
    assert_eq!(catalog.len(), 30);
    assert_eq!(catalog[0].name, "Proton-Proton");
    assert_eq!(catalog[13].name, "Human-Human");
    assert_eq!(catalog[29].name, "Quantum-Macro");
}

#[test]
fn default_harness_fully_validates_reference_catalog() {
    let report = run_validation(
        &reference_catalog(),
        &HarnessConfig::default(),
        &RunOpts::default(),
    )
    .expect("validation pass");
    let summary = &report.summary;
    assert_eq!(summary.total, 30);
    assert_eq!(summary.count(Band::Perfect), 30);
    assert_eq!(summary.success_count, 30);
    assert_eq!(summary.success_rate, 1.0);
    assert_eq!(summary.verdict, Verdict::FullyValidated);
    assert_eq!(summary.skipped, 0);
    assert_eq!(summary.failed, 0);
    for (idx, evaluation) in report.evaluations.iter().enumerate() {
        assert_eq!(evaluation.index, idx + 1);
        assert_eq!(evaluation.ratio, 1.0);
    }
}

#[test]
fn proton_pair_is_finite_with_negligible_correction() {
    let report = run_validation(
        &reference_catalog(),
        &HarnessConfig::default(),
        &RunOpts::default(),
    )
    .unwrap();
    let proton = report.evaluation("Proton-Proton").expect("proton pair");
    let breakdown = &proton.breakdown;
    assert!(breakdown.newton_force.is_finite() && breakdown.newton_force > 0.0);
    assert!(breakdown.correction_force.is_finite());
    assert!(breakdown.correction_force.abs() <= breakdown.newton_force * 1e-10);
    assert!((0.0..=5.0).contains(&proton.ratio));

    let human = report.evaluation("Human-Human").expect("human pair");
    assert!(human.ratio.is_finite());
}

#[test]
fn unit_density_splits_the_catalog() {
    let mut harness = HarnessConfig::default();
    harness.model.correction.density_factor = 1.0;
    let report = run_validation(&reference_catalog(), &harness, &RunOpts::default()).unwrap();
    let summary = &report.summary;
    assert_eq!(summary.total, 30);
    assert_eq!(summary.count(Band::Perfect), 20);
    assert_eq!(summary.count(Band::Poor), 10);
    assert_eq!(summary.verdict, Verdict::Confirmed);
    assert_eq!(
        report.evaluation("Proton-Proton").unwrap().band,
        Band::Poor
    );
    assert_eq!(
        report.evaluation("Human-Human").unwrap().band,
        Band::Perfect
    );
}

#[test]
fn parallel_pass_matches_serial_pass() {
    let mut harness = HarnessConfig::default();
    harness.model.correction.density_factor = 1.0;
    let serial = run_validation(&reference_catalog(), &harness, &RunOpts::default()).unwrap();
    let parallel =
        run_validation(&reference_catalog(), &harness, &RunOpts { concurrency: 4 }).unwrap();
    assert_eq!(serial, parallel);
    assert_eq!(
        serial.report_hash().unwrap(),
        parallel.report_hash().unwrap()
    );
}

#[test]
fn records_use_interchange_columns() {
    let report = run_validation(
        &reference_catalog(),
        &HarnessConfig::default(),
        &RunOpts::default(),
    )
    .unwrap();
    let records = report.records();
    assert_eq!(records.len(), 30);
    assert_eq!(records[0].name, "Proton-Proton");

    let json = serde_json::to_string(&records[0]).unwrap();
    let positions: Vec<usize> = ScenarioRecord::COLUMNS
        .iter()
        .map(|column| json.find(&format!("\"{column}\"")).expect("column present"))
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn provenance_tracks_inputs() {
    let catalog = reference_catalog();
    let base = run_validation(&catalog, &HarnessConfig::default(), &RunOpts::default()).unwrap();
    let mut harness = HarnessConfig::default();
    harness.model.correction.density_factor = 1.0;
    let changed = run_validation(&catalog, &harness, &RunOpts::default()).unwrap();
    assert_eq!(base.provenance.corpus_hash, changed.provenance.corpus_hash);
    assert_ne!(base.provenance.config_hash, changed.provenance.config_hash);
    assert_eq!(base.provenance.rules_hash, changed.provenance.rules_hash);
    assert_eq!(base.provenance.config_hash.len(), 64);
}
