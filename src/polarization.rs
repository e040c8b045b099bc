//! Polarization index: spread between the most rightward and most leftward
//! coverage in a result set, mapped onto `0..=100`.
//!
//! This measures disagreement, not average extremity: a set where every
//! article scores `+0.9` is unanimous and yields `0`.

use crate::model::AnalysisResult;

/// Largest reportable index.
pub const MAX_INDEX: u8 = 100;

/// `round(min(100, (max - min) / 2 * 100))` over the bias scores.
///
/// Empty and single-element inputs yield `0`. NaN scores are ignored, and a
/// set whose extremes coincide (including repeated infinities) has no spread.
pub fn polarization_index(results: &[AnalysisResult]) -> u8 {
    polarization_from_scores(results.iter().map(|r| r.bias_score))
}

/// Same as `polarization_index`, over raw bias scores.
pub fn polarization_from_scores<I>(scores: I) -> u8
where
    I: IntoIterator<Item = f64>,
{
    let mut extremes: Option<(f64, f64)> = None;
    for s in scores.into_iter().filter(|s| !s.is_nan()) {
        extremes = Some(match extremes {
            None => (s, s),
            Some((lo, hi)) => (lo.min(s), hi.max(s)),
        });
    }

    let Some((lo, hi)) = extremes else {
        return 0;
    };

    let gap = hi - lo;
    // inf - inf is NaN; treat it like any other zero spread.
    if !(gap > 0.0) {
        return 0;
    }
    let index = ((gap / 2.0) * 100.0).min(f64::from(MAX_INDEX)).round();
    index.clamp(0.0, f64::from(MAX_INDEX)) as u8
}
