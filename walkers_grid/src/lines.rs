//! Choosing where the grid lines go.
//!
//! Both axes follow the same scheme. The span of the (padded) viewport divided
//! by the configured tick count gives a raw interval, which [`snap`] rounds to
//! a visually clean degree value. The first line is either aligned to the
//! equator or prime meridian, when the view straddles it, or snapped to a
//! whole degree just outside the viewport edge. The remaining lines follow at
//! uniform spacing.

use crate::bounds::GeoBounds;

/// Snap a raw tick interval to a clean degree value. Granularity follows the
/// magnitude of the whole axis span, not of the interval itself.
pub(crate) fn snap(interval: f64, span: f64) -> f64 {
    let magnitude = span.abs();

    let snapped = if magnitude > 100. {
        (interval / 15.).floor() * 15.
    } else if magnitude > 50. {
        (interval / 5.).floor() * 5.
    } else if magnitude > 10. {
        (interval * 6.).round() / 6.
    } else {
        interval.round()
    };

    if snapped != 0. || interval == 0. {
        return snapped;
    }

    // The interval was too small to survive rounding in its band. Retry at
    // progressively finer decimal granularity so the grid never collapses
    // into a single repeated line.
    let mut div = 1.;
    while (interval * div).round() == 0. && div < 1e12 {
        div *= 10.;
    }
    (interval * div).round() / div
}

/// Latitudes of the horizontal grid lines, north to south. Lines outside the
/// valid latitude range are dropped.
pub(crate) fn latitudes(padded: &GeoBounds, visible: &GeoBounds, ticks: usize) -> Vec<f64> {
    let ticks = ticks.max(1);
    let span = padded.north - padded.south;
    let tick = snap(span / ticks as f64, span);
    if tick == 0. {
        return Vec::new();
    }

    let lines = if visible.crosses_equator() {
        aligned_to_zero(padded.north, tick, ticks)
    } else {
        from_edge(padded.north, tick, ticks)
    };

    lines
        .into_iter()
        .filter(|latitude| latitude.abs() <= 90.)
        .collect()
}

/// Longitudes of the vertical grid lines, west to east. The interval is
/// negative here, as it was derived from the negative west-to-east span.
pub(crate) fn longitudes(padded: &GeoBounds, visible: &GeoBounds, ticks: usize) -> Vec<f64> {
    let ticks = ticks.max(1);
    let span = padded.west - padded.east;
    let tick = snap(span / ticks as f64, span);
    if tick == 0. {
        return Vec::new();
    }

    if visible.crosses_prime_meridian() {
        aligned_to_zero(padded.west, tick, ticks)
    } else {
        from_edge(padded.west, tick, ticks)
    }
}

/// Lines at whole multiples of `tick`, so that one of them hits zero exactly.
fn aligned_to_zero(edge: f64, tick: f64, count: usize) -> Vec<f64> {
    let first = (edge / tick).floor();
    (0..=count).map(|n| (first - n as f64) * tick).collect()
}

/// Lines starting half a tick outside the viewport edge, snapped to a whole
/// degree.
fn from_edge(edge: f64, tick: f64, count: usize) -> Vec<f64> {
    let first = (edge + tick / 2.).round();
    (0..=count).map(|n| first - n as f64 * tick).collect()
}
