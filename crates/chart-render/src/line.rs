//! Line path generation.
//!
//! Produces SVG path data (`M x,y L x,y ...`) for a polyline. Time-series
//! charts place the i-th window value at index `i`; the direction chart
//! plots `(x, y)` pairs directly.

use crate::scale::LinearScale;

/// Path data through `points` in order. Empty input yields an empty string.
pub fn line_path<I>(points: I) -> String
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let mut d = String::new();
    for (i, (x, y)) in points.into_iter().enumerate() {
        d.push(if i == 0 { 'M' } else { 'L' });
        d.push_str(&format_coord(x));
        d.push(',');
        d.push_str(&format_coord(y));
    }
    d
}

/// Pixel points for a window of values plotted against their index.
pub fn index_points<'a, I>(
    values: I,
    index_scale: &'a LinearScale,
    value_scale: &'a LinearScale,
) -> impl Iterator<Item = (f64, f64)> + 'a
where
    I: IntoIterator<Item = f64>,
    I::IntoIter: 'a,
{
    values
        .into_iter()
        .enumerate()
        .map(move |(i, v)| (index_scale.map(i as f64), value_scale.map(v)))
}

/// Pixel points for `(x, y)` pairs.
pub fn pair_points<'a, I>(
    pairs: I,
    x_scale: &'a LinearScale,
    y_scale: &'a LinearScale,
) -> impl Iterator<Item = (f64, f64)> + 'a
where
    I: IntoIterator<Item = (f64, f64)>,
    I::IntoIter: 'a,
{
    pairs
        .into_iter()
        .map(move |(x, y)| (x_scale.map(x), y_scale.map(y)))
}

/// Up to three decimals, trailing zeros trimmed.
pub fn format_coord(value: f64) -> String {
    let text = format!("{:.3}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    match text {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_line_has_no_path() {
        assert_eq!(line_path(Vec::new()), "");
    }

    #[test]
    fn single_point_is_a_move() {
        assert_eq!(line_path([(1.0, 2.5)]), "M1,2.5");
    }

    #[test]
    fn polyline_moves_then_lines() {
        let d = line_path([(0.0, 0.0), (10.0, 5.0), (20.0, 7.125)]);
        assert_eq!(d, "M0,0L10,5L20,7.125");
    }

    #[test]
    fn coords_are_trimmed() {
        assert_eq!(format_coord(6.464_646_46), "6.465");
        assert_eq!(format_coord(240.0), "240");
        assert_eq!(format_coord(-0.0001), "0");
        assert_eq!(format_coord(-3.5), "-3.5");
    }

    #[test]
    fn partial_window_is_anchored_at_index_zero() {
        let index = LinearScale::new((0.0, 99.0), (0.0, 640.0));
        let value = LinearScale::new((-1.0, 1.0), (480.0, 0.0));
        let points: Vec<_> = index_points(vec![0.0, 1.0], &index, &value).collect();
        assert_eq!(points[0], (0.0, 240.0));
        assert!((points[1].0 - 640.0 / 99.0).abs() < 1e-9);
        assert_eq!(points[1].1, 0.0);
    }

    #[test]
    fn pairs_map_both_axes() {
        let x = LinearScale::new((-1.0, 1.0), (0.0, 640.0));
        let y = LinearScale::new((-1.0, 1.0), (480.0, 0.0));
        let points: Vec<_> = pair_points(vec![(0.0, 0.0), (1.0, -1.0)], &x, &y).collect();
        assert_eq!(points, vec![(320.0, 240.0), (640.0, 480.0)]);
    }
}
