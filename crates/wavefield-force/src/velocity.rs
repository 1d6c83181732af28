//! Blended propagation speed and its deficit from `c`.

/// Propagation speed `c · λ_new / (λ_new + λ_existing)`.
///
/// When both wavelengths sum to zero the vacuum speed `c` is returned. The
/// wavelength fraction is formed first so that a zero existing wavelength
/// yields exactly `c`.
pub fn blended_speed(lambda_new: f64, lambda_existing: f64, c: f64) -> f64 {
    let lambda_total = lambda_new + lambda_existing;
    if lambda_total == 0.0 {
        c
    } else {
        c * (lambda_new / lambda_total)
    }
}

/// Shortfall of `speed` relative to the nominal speed `c`.
pub fn velocity_deficit(speed: f64, c: f64) -> f64 {
    c - speed
}
