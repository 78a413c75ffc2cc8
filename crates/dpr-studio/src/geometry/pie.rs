use super::{format_coordinate, Point};
use serde::Serialize;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Twelve o'clock, with 0 pointing right and angles growing clockwise.
pub const START_ANGLE: f64 = -FRAC_PI_2;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SliceError {
    #[error("cannot derive proportions from a non-positive total ({total})")]
    NonPositiveTotal { total: f64 },
    #[error("slice '{label}' has an invalid magnitude ({magnitude})")]
    InvalidMagnitude { label: String, magnitude: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub start_angle: f64,
    pub end_angle: f64,
    pub large_arc: bool,
    /// Fraction of the total, in `[0, 1]`.
    pub share: f64,
}

impl PieSlice {
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    pub fn large_arc_flag(&self) -> u8 {
        u8::from(self.large_arc)
    }

    pub fn start_point(&self, center: Point, radius: f64) -> Point {
        polar(center, radius, self.start_angle)
    }

    pub fn end_point(&self, center: Point, radius: f64) -> Point {
        polar(center, radius, self.end_angle)
    }

    /// Wedge path from the center out to the arc and back.
    pub fn arc_path(&self, center: Point, radius: f64, precision: Option<usize>) -> String {
        let start = self.start_point(center, radius);
        let end = self.end_point(center, radius);
        let fmt = |value: f64| format_coordinate(value, precision);

        format!(
            "M {} {} L {} {} A {} {} 0 {} 1 {} {} Z",
            fmt(center.x),
            fmt(center.y),
            fmt(start.x),
            fmt(start.y),
            fmt(radius),
            fmt(radius),
            self.large_arc_flag(),
            fmt(end.x),
            fmt(end.y),
        )
    }
}

fn polar(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// Splits the full circle into contiguous arcs proportional to each magnitude.
///
/// Slices keep input order. Each one starts exactly where the previous ended
/// and the last one closes the circle at `START_ANGLE + TAU`.
pub fn slice<S>(values: &[(S, f64)]) -> Result<Vec<PieSlice>, SliceError>
where
    S: AsRef<str>,
{
    for (label, magnitude) in values {
        if !magnitude.is_finite() || *magnitude < 0.0 {
            return Err(SliceError::InvalidMagnitude {
                label: label.as_ref().to_string(),
                magnitude: *magnitude,
            });
        }
    }

    let total: f64 = values.iter().map(|(_, magnitude)| magnitude).sum();
    if total <= 0.0 {
        return Err(SliceError::NonPositiveTotal { total });
    }

    let closing_angle = START_ANGLE + TAU;
    let last = values.len() - 1;
    let mut cumulative = START_ANGLE;
    let mut slices = Vec::with_capacity(values.len());

    for (index, (label, magnitude)) in values.iter().enumerate() {
        let span = magnitude / total * TAU;
        let start_angle = cumulative;
        let end_angle = if index == last {
            closing_angle
        } else {
            cumulative + span
        };
        cumulative = end_angle;

        slices.push(PieSlice {
            label: label.as_ref().to_string(),
            start_angle,
            end_angle,
            large_arc: span > PI,
            share: magnitude / total,
        });
    }

    Ok(slices)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn rejects_zero_total() {
        let error = slice(&[("a", 0.0), ("b", 0.0)]).expect_err("zero total rejected");
        assert_eq!(error, SliceError::NonPositiveTotal { total: 0.0 });
    }

    #[test]
    fn rejects_empty_input() {
        let values: [(&str, f64); 0] = [];
        assert!(matches!(
            slice(&values),
            Err(SliceError::NonPositiveTotal { .. })
        ));
    }

    #[test]
    fn rejects_negative_and_nan_magnitudes() {
        assert!(matches!(
            slice(&[("a", 5.0), ("b", -1.0)]),
            Err(SliceError::InvalidMagnitude { ref label, .. }) if label == "b"
        ));
        assert!(matches!(
            slice(&[("a", f64::NAN)]),
            Err(SliceError::InvalidMagnitude { .. })
        ));
    }

    #[test]
    fn single_slice_covers_full_circle() {
        let slices = slice(&[("only", 3.0)]).expect("slices");
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].start_angle, START_ANGLE);
        assert_eq!(slices[0].end_angle, START_ANGLE + TAU);
        assert!(slices[0].large_arc);
        assert_eq!(slices[0].share, 1.0);
    }

    #[test]
    fn quarters_start_at_twelve_o_clock() {
        let slices = slice(&[("a", 1.0), ("b", 1.0), ("c", 1.0), ("d", 1.0)]).expect("slices");
        assert_close(slices[0].start_angle, -FRAC_PI_2);
        assert_close(slices[0].end_angle, 0.0);
        assert_close(slices[1].end_angle, FRAC_PI_2);
        assert_close(slices[2].end_angle, PI);
        assert!(slices.iter().all(|slice| !slice.large_arc));
    }

    #[test]
    fn large_arc_only_past_half_circle() {
        let slices = slice(&[("big", 3.0), ("small", 1.0)]).expect("slices");
        assert!(slices[0].large_arc);
        assert!(!slices[1].large_arc);

        let halves = slice(&[("left", 1.0), ("right", 1.0)]).expect("slices");
        assert!(halves.iter().all(|slice| !slice.large_arc));
    }

    #[test]
    fn zero_magnitude_slices_are_kept_in_place() {
        let slices = slice(&[("a", 2.0), ("none", 0.0), ("b", 2.0)]).expect("slices");
        assert_eq!(slices[1].span(), 0.0);
        assert_eq!(slices[1].start_angle, slices[0].end_angle);
        assert_eq!(slices[2].start_angle, slices[1].end_angle);
    }

    #[test]
    fn arc_path_traces_the_wedge() {
        let slices = slice(&[("a", 1.0), ("b", 3.0)]).expect("slices");
        let center = Point::new(80.0, 80.0);
        assert_eq!(
            slices[0].arc_path(center, 80.0, Some(2)),
            "M 80.00 80.00 L 80.00 0.00 A 80.00 80.00 0 0 1 160.00 80.00 Z"
        );
        assert!(slices[1]
            .arc_path(center, 80.0, Some(2))
            .contains("A 80.00 80.00 0 1 1"));
    }
}
