use std::fmt::Write;

use crate::classify::Band;
use crate::report::ValidationReport;

/// Renders a finished report as plain text.
///
/// Scenarios named in `highlight` also get their force breakdown printed.
pub fn render_text(report: &ValidationReport, highlight: &[&str]) -> String {
    let mut out = String::new();
    for evaluation in &report.evaluations {
        let _ = writeln!(
            out,
            "{:2}. {:20}: Ratio = {:.6} - {}",
            evaluation.index,
            evaluation.name,
            evaluation.ratio,
            evaluation.band.label()
        );
        if highlight.contains(&evaluation.name.as_str()) {
            let b = &evaluation.breakdown;
            let _ = writeln!(
                out,
                "    Forces: Newton={:.2e}N, Wavelength={:.2e}N",
                b.newton_force, b.correction_force
            );
            let _ = writeln!(
                out,
                "    EM components: F_em={:.2e}N, F_alpha2={:.2e}N",
                b.em_field_product, b.alpha_suppressed_force
            );
        }
    }
    for entry in &report.skipped {
        let _ = writeln!(out, "{:2}. {:20}: skipped ({:?})", entry.index, entry.name, entry.reason);
    }
    for entry in &report.failed {
        let info = entry.error.info();
        let _ = writeln!(
            out,
            "{:2}. {:20}: failed [{}] {}: {}",
            entry.index,
            entry.name,
            entry.error.family(),
            info.code,
            info.message
        );
    }

    let summary = &report.summary;
    let _ = writeln!(out);
    let _ = writeln!(out, "Total scenarios evaluated: {}", summary.total);
    for band in Band::ALL {
        let _ = writeln!(out, "{}: {}", band.label(), summary.count(band));
    }
    let _ = writeln!(
        out,
        "Success rate: {}/{} = {:.1}%",
        summary.success_count,
        summary.total,
        100.0 * summary.success_rate
    );
    let _ = writeln!(out, "Verdict: {}", summary.verdict.label());
    out
}
