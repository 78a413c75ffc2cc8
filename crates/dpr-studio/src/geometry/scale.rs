use serde::{Deserialize, Serialize};

/// Linearly maps `value` from the data domain onto the drawing range.
///
/// A collapsed domain (`domain_min == domain_max`) maps every value to the
/// midpoint of the range. The domain endpoints land exactly on the range
/// endpoints, and the range may be inverted (`range_min > range_max`).
pub fn map_linear(
    value: f64,
    domain_min: f64,
    domain_max: f64,
    range_min: f64,
    range_max: f64,
) -> f64 {
    let span = domain_max - domain_min;
    if span == 0.0 {
        return (range_min + range_max) / 2.0;
    }
    if value == domain_max {
        return range_max;
    }

    range_min + (value - domain_min) / span * (range_max - range_min)
}

/// A fixed domain/range pair, for axes that map many values the same way.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn map(&self, value: f64) -> f64 {
        map_linear(
            value,
            self.domain.0,
            self.domain.1,
            self.range.0,
            self.range.1,
        )
    }

    pub fn is_degenerate(&self) -> bool {
        self.domain.0 == self.domain.1
    }
}
