use proptest::prelude::*;
use wavefield_core::{ModelConfig, PhysicalConstants};
use wavefield_force::{
    blended_speed, compose_force, gravitational_field, resonance_factor, rest_energy,
    velocity_deficit, wavelength_from_energy, PhysicalObject, Resonance,
};

const C: f64 = wavefield_core::constants::SPEED_OF_LIGHT;

proptest! {
    #[test]
    fn wavelength_is_positive_inverse_of_energy(energy in 1e-20f64..1e40) {
        let constants = PhysicalConstants::default();
        let lambda = wavelength_from_energy(energy, &constants);
        prop_assert!(lambda > 0.0);
        prop_assert_eq!(lambda, constants.planck * constants.speed_of_light / energy);
    }

    #[test]
    fn identical_wavelengths_resonate_strongly(lambda in 1e-30f64..1e10) {
        prop_assert_eq!(resonance_factor(lambda, lambda), 1.0);
    }

    #[test]
    fn zero_material_wavelength_never_resonates(lambda in -1e10f64..1e10) {
        prop_assert_eq!(resonance_factor(lambda, 0.0), 0.0);
    }

    #[test]
    fn no_existing_wavelength_keeps_vacuum_speed(lambda in 1e-20f64..1e5) {
        prop_assert_eq!(blended_speed(lambda, 0.0, C), C);
        prop_assert_eq!(velocity_deficit(blended_speed(lambda, 0.0, C), C), 0.0);
    }

    #[test]
    fn force_decreases_with_separation(
        mass1 in 1e-3f64..1e6,
        mass2 in 1e-3f64..1e6,
        separation in 1e-3f64..1e3,
        stretch in 1.01f64..10.0,
    ) {
        let config = ModelConfig::default();
        let near = compose_force(mass1, mass2, separation, &config).unwrap();
        let far = compose_force(mass1, mass2, separation * stretch, &config).unwrap();
        prop_assert!(near.newton_force > far.newton_force);
        prop_assert!(near.total_force > far.total_force);
        prop_assert!(near.correction_force >= far.correction_force);
    }
}

#[test]
fn vacuum_speed_when_both_wavelengths_vanish() {
    assert_eq!(blended_speed(0.0, 0.0, C), C);
}

#[test]
fn resonance_band_edges_fall_to_lower_band() {
    // ratio 2.5 has deviation exactly 0.5, ratio 1.25 has deviation 0.25.
    assert_eq!(Resonance::between(2.5, 1.0), Resonance::Weak);
    assert_eq!(Resonance::between(1.25, 1.0), Resonance::Moderate);
    assert_eq!(Resonance::between(3.0, 1.0), Resonance::Strong);
    assert_eq!(Resonance::between(1.0, 0.0), Resonance::None);
    assert_eq!(resonance_factor(2.5, 1.0), 0.1);
    assert_eq!(resonance_factor(1.25, 1.0), 0.5);
}

#[test]
fn half_speed_when_wavelengths_match() {
    assert_eq!(blended_speed(1.0, 1.0, C), C / 2.0);
    assert_eq!(velocity_deficit(C / 2.0, C), C / 2.0);
}

#[test]
fn object_from_energy_matches_object_from_mass() {
    let constants = PhysicalConstants::default();
    let mass = 9.109_383_701_5e-31;
    let by_mass = PhysicalObject::from_mass(mass, &constants);
    let by_energy = PhysicalObject::from_energy(rest_energy(mass, &constants), &constants);
    assert!((by_energy.mass - mass).abs() / mass < 1e-12);
    assert_eq!(by_energy.wavelength, by_mass.wavelength);
    let lambda = constants.planck * constants.speed_of_light / by_mass.energy;
    assert_eq!(by_energy.wavelength, lambda);
}

#[test]
fn field_rejects_masses_the_composer_rejects() {
    let config = ModelConfig::default();
    for mass in [0.0, -70.0, f64::NAN, f64::INFINITY] {
        let field = gravitational_field(mass, 1.0, &config).unwrap_err();
        let force = compose_force(mass, 1.0, 1.0, &config).unwrap_err();
        assert_eq!(field.info().code, "non-positive-mass");
        assert_eq!(field.family(), force.family());
    }
}

#[test]
fn proton_pair_breakdown_is_finite_and_reproducible() {
    let config = ModelConfig::default();
    let first = compose_force(1.673e-27, 1.673e-27, 1e-15, &config).unwrap();
    let second = compose_force(1.673e-27, 1.673e-27, 1e-15, &config).unwrap();
    assert_eq!(first, second);
    assert!(first.newton_force.is_finite() && first.newton_force > 0.0);
    assert!(first.correction_force.is_finite());
    assert!(first.correction_force.abs() < first.newton_force * 1e-10);
    let ratio = first.ratio();
    assert!((0.0..=5.0).contains(&ratio));
    assert_eq!(first.total_force, first.newton_force + first.correction_force);
}

#[test]
fn composer_rejects_invalid_inputs() {
    let config = ModelConfig::default();
    let err = compose_force(1.0, 1.0, 0.0, &config).unwrap_err();
    assert_eq!(err.info().code, "non-positive-separation");
    let err = compose_force(0.0, 1.0, 1.0, &config).unwrap_err();
    assert_eq!(err.info().code, "non-positive-mass");
    assert!(compose_force(f64::INFINITY, 1.0, 1.0, &config).is_err());
}

#[test]
fn overflowing_baseline_is_non_finite() {
    let config = ModelConfig::default();
    let err = compose_force(1e300, 1e300, 1e-10, &config).unwrap_err();
    assert!(matches!(err, wavefield_core::WfError::NonFinite(_)));
}
