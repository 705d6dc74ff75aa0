//! Linear scales and tick generation.
//!
//! Tick selection picks a step of 1, 2 or 5 times a power of ten so that
//! roughly `count` ticks cover the domain.

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Maps a continuous domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Map a domain value to the range. Values outside the domain extrapolate.
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / span * (r1 - r0)
    }

    /// Roughly `count` evenly spaced, human-friendly values inside the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (mut start, mut stop) = self.domain;
        if !start.is_finite() || !stop.is_finite() || count == 0 {
            return Vec::new();
        }
        if start == stop {
            return vec![start];
        }
        let reversed = stop < start;
        if reversed {
            std::mem::swap(&mut start, &mut stop);
        }

        let increment = tick_increment(start, stop, count);
        if increment == 0.0 || !increment.is_finite() {
            return Vec::new();
        }

        let mut ticks: Vec<f64> = if increment > 0.0 {
            let lo = (start / increment).ceil() as i64;
            let hi = (stop / increment).floor() as i64;
            (lo..=hi).map(|i| i as f64 * increment).collect()
        } else {
            let inverse = -increment;
            let lo = (start * inverse).ceil() as i64;
            let hi = (stop * inverse).floor() as i64;
            (lo..=hi).map(|i| i as f64 / inverse).collect()
        };

        if reversed {
            ticks.reverse();
        }
        ticks
    }

    /// Absolute distance between adjacent ticks for `count`.
    pub fn tick_step(&self, count: usize) -> f64 {
        let (d0, d1) = self.domain;
        let (start, stop) = if d0 <= d1 { (d0, d1) } else { (d1, d0) };
        let increment = tick_increment(start, stop, count.max(1));
        if increment < 0.0 {
            1.0 / -increment
        } else {
            increment
        }
    }

    /// Number of decimals needed to tell ticks apart.
    pub fn tick_precision(&self, count: usize) -> usize {
        let step = self.tick_step(count);
        if step <= 0.0 || !step.is_finite() {
            return 0;
        }
        (-step.log10().floor()).max(0.0) as usize
    }

    /// Format a tick value with the precision implied by `count`.
    pub fn format_tick(&self, value: f64, count: usize) -> String {
        let precision = self.tick_precision(count);
        let text = format!("{:.*}", precision, value);
        // "-0" and "-0.0" read as zero
        if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
            text[1..].to_string()
        } else {
            text
        }
    }
}

/// Step between ticks. Negative values encode `1 / step` for sub-unit steps
/// so the tick values can be computed without accumulating float error.
fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -10f64.powf(-power) / factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_scale_maps_and_flips() {
        let y = LinearScale::new((-1.0, 1.0), (480.0, 0.0));
        assert_eq!(y.map(-1.0), 480.0);
        assert_eq!(y.map(1.0), 0.0);
        assert_eq!(y.map(0.0), 240.0);
    }

    #[test]
    fn index_scale_spans_window() {
        let x = LinearScale::new((0.0, 99.0), (0.0, 640.0));
        assert_eq!(x.map(0.0), 0.0);
        assert!((x.map(99.0) - 640.0).abs() < 1e-9);
    }

    #[test]
    fn unit_domain_ticks_by_fifths() {
        let scale = LinearScale::new((-1.0, 1.0), (0.0, 640.0));
        let ticks = scale.ticks(10);
        assert_eq!(ticks.len(), 11);
        assert_eq!(ticks[0], -1.0);
        assert_eq!(ticks[5], 0.0);
        assert_eq!(ticks[10], 1.0);
        assert!((ticks[1] + 0.8).abs() < 1e-12);
        assert_eq!(scale.tick_precision(10), 1);
    }

    #[test]
    fn index_domain_ticks_by_tens() {
        let scale = LinearScale::new((0.0, 99.0), (0.0, 640.0));
        let ticks = scale.ticks(10);
        assert_eq!(ticks, vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0]);
        assert_eq!(scale.tick_precision(10), 0);
    }

    #[test]
    fn reversed_domain_ticks_descend() {
        let scale = LinearScale::new((1.0, -1.0), (0.0, 100.0));
        let ticks = scale.ticks(4);
        assert_eq!(ticks.first(), Some(&1.0));
        assert_eq!(ticks.last(), Some(&-1.0));
    }

    #[test]
    fn degenerate_domains() {
        let flat = LinearScale::new((0.5, 0.5), (0.0, 10.0));
        assert_eq!(flat.ticks(10), vec![0.5]);
        assert_eq!(flat.map(3.0), 5.0);
        assert!(LinearScale::new((0.0, 1.0), (0.0, 1.0)).ticks(0).is_empty());
    }

    #[test]
    fn tick_labels_drop_negative_zero() {
        let scale = LinearScale::new((-1.0, 1.0), (0.0, 640.0));
        assert_eq!(scale.format_tick(-0.0, 10), "0.0");
        assert_eq!(scale.format_tick(-0.8, 10), "-0.8");
        assert_eq!(scale.format_tick(1.0, 10), "1.0");
    }
}
