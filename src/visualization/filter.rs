//! Concentration thresholding and density limiting

use super::brush::Brushed;

/// Drop particles below `ratio * max_c`.
///
/// `max_c` is the full-dataset maximum, so the cutoff is relative to the
/// whole field rather than to the brushed subset. A non-positive threshold
/// keeps everything.
pub fn filter_concentration(brushed: Vec<Brushed<'_>>, ratio: f64, max_c: f64) -> Vec<Brushed<'_>> {
    let threshold = ratio * max_c;
    if !(threshold > 0.0) {
        return brushed;
    }

    brushed
        .into_iter()
        .filter(|b| b.particle.concentration >= threshold)
        .collect()
}

/// Order by signed brush distance and keep at most `max_dots`.
///
/// The ordering is by the signed value, not its magnitude, so truncation
/// favours particles on the positive side of `coord - brushed_coord`. The
/// sort is stable, ties keep input order.
pub fn limit_density(mut brushed: Vec<Brushed<'_>>, max_dots: usize) -> Vec<Brushed<'_>> {
    brushed.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    brushed.truncate(max_dots);
    brushed
}
