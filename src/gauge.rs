//! Presentation helpers: map a bias score in `[-1, 1]` onto the `0..=100`
//! gauge the front end renders, and bucket it into a lean label.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gauge values above this read as right leaning.
pub const RIGHT_THRESHOLD: u8 = 60;
/// Gauge values below this read as left leaning.
pub const LEFT_THRESHOLD: u8 = 40;

/// `round((bias + 1) * 50)`, clamped into `0..=100`. NaN maps to center.
pub fn gauge_value(bias_score: f64) -> u8 {
    if bias_score.is_nan() {
        return 50;
    }
    ((bias_score + 1.0) * 50.0).round().clamp(0.0, 100.0) as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiasLabel {
    LeftLeaning,
    Center,
    RightLeaning,
}

impl BiasLabel {
    pub fn from_gauge(value: u8) -> Self {
        if value > RIGHT_THRESHOLD {
            BiasLabel::RightLeaning
        } else if value < LEFT_THRESHOLD {
            BiasLabel::LeftLeaning
        } else {
            BiasLabel::Center
        }
    }

    pub fn from_bias(bias_score: f64) -> Self {
        Self::from_gauge(gauge_value(bias_score))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BiasLabel::LeftLeaning => "Left Leaning",
            BiasLabel::Center => "Center",
            BiasLabel::RightLeaning => "Right Leaning",
        }
    }
}

impl fmt::Display for BiasLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
