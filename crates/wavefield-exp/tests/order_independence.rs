use wavefield_exp::{
    reference_catalog, run_validation, shuffled, HarnessConfig, RunOpts, Scenario, Verdict,
};

fn mixed_harness() -> HarnessConfig {
    let mut harness = HarnessConfig::default();
    harness.model.correction.density_factor = 1.0;
    harness
}

#[test]
fn shuffling_preserves_aggregate_statistics() {
    let harness = mixed_harness();
    let mut corpus = reference_catalog();
    corpus.push(Scenario::new("Ghost", 0.0, 1.0, 1.0));
    corpus.push(Scenario::new("Touching", 1.0, 1.0, 0.0));
    let baseline = run_validation(&corpus, &harness, &RunOpts::default()).unwrap();

    for seed in [1u64, 7, 42, 9001] {
        let permuted = shuffled(&corpus, seed);
        assert_ne!(
            permuted.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(),
            corpus.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(),
        );
        let report = run_validation(&permuted, &harness, &RunOpts::default()).unwrap();
        assert_eq!(report.summary, baseline.summary);
        for evaluation in &report.evaluations {
            let original = baseline.evaluation(&evaluation.name).unwrap();
            assert_eq!(evaluation.ratio.to_bits(), original.ratio.to_bits());
            assert_eq!(evaluation.band, original.band);
        }
    }
}

#[test]
fn shuffle_is_deterministic_per_seed() {
    let corpus = reference_catalog();
    assert_eq!(shuffled(&corpus, 3), shuffled(&corpus, 3));
}

#[test]
fn all_perfect_corpus_is_fully_validated() {
    // No existing-wavelength contribution: every correction is exactly zero.
    let mut harness = HarnessConfig::default();
    harness.model.correction.density_factor = 0.0;
    let mut corpus = reference_catalog();
    corpus.push(Scenario::new("Extra-Heavy", 1e35, 1e35, 1e12));
    let report = run_validation(&corpus, &harness, &RunOpts::default()).unwrap();
    assert!(report.evaluations.iter().all(|e| e.breakdown.correction_force == 0.0));
    assert_eq!(report.summary.success_rate, 1.0);
    assert_eq!(report.summary.verdict, Verdict::FullyValidated);
}
