use palette::FromColor;
use tracing::debug;

use crate::bezier::BezierCurve;
use crate::colors::{lab_to_rgb, quantize, Color, LabColor};

const LIGHTNESS_TOLERANCE: f64 = 1e-2;
const MAX_BISECTIONS: usize = 20;

/// A continuous color scale over a [`BezierCurve`].
///
/// Input values are mapped from the scale's domain onto the curve parameter
/// `t` in `[0, 1]`. With lightness correction enabled, `t` is then replaced by
/// the parameter whose L* lies on the straight line between the lightness of
/// the two curve ends.
#[derive(Debug, Clone)]
pub struct Scale {
    curve: BezierCurve,
    domain: (f64, f64),
    correct_lightness: bool,
}

impl Scale {
    pub fn new(curve: BezierCurve) -> Self {
        Self {
            curve,
            domain: (0.0, 1.0),
            correct_lightness: false,
        }
    }

    pub fn domain(mut self, start: f64, end: f64) -> Self {
        self.domain = (start, end);
        self
    }

    pub fn correct_lightness(mut self, enabled: bool) -> Self {
        self.correct_lightness = enabled;
        self
    }

    pub fn is_lightness_corrected(&self) -> bool {
        self.correct_lightness
    }

    pub fn at(&self, value: f64) -> Color {
        let (start, end) = self.domain;
        // A degenerate domain pins everything to the end of the curve.
        let t = if end != start { (value - start) / (end - start) } else { 1.0 };
        let t = t.clamp(0.0, 1.0);
        let t = if self.correct_lightness { self.lightness_parameter(t) } else { t };
        quantize(lab_to_rgb(self.curve.lab_at(t)))
    }

    /// Samples `num_colors` evenly spaced values across the domain, both ends
    /// included. A single sample is taken at the middle of the domain.
    pub fn colors(&self, num_colors: usize) -> Vec<Color> {
        let (start, end) = self.domain;
        debug!(num_colors, corrected = self.correct_lightness, "sampling scale");
        match num_colors {
            0 => Vec::new(),
            1 => vec![self.at(start + (end - start) * 0.5)],
            n => {
                let last = (n - 1) as f64;
                (0..n).map(|i| self.at(start + (i as f64 / last) * (end - start))).collect()
            }
        }
    }

    // Lightness as seen after gamut clipping, which is what the caller gets.
    fn lightness_at(&self, t: f64) -> f64 {
        LabColor::from_color(lab_to_rgb(self.curve.lab_at(t))).l
    }

    fn lightness_parameter(&self, t: f64) -> f64 {
        let l0 = self.lightness_at(0.0);
        let l1 = self.lightness_at(1.0);
        let descending = l0 > l1;
        let target = l0 + (l1 - l0) * t;

        let (mut lower, mut upper) = (0.0, 1.0);
        let mut t = t;
        let mut error = self.lightness_at(t) - target;
        for _ in 0..MAX_BISECTIONS {
            if error.abs() <= LIGHTNESS_TOLERANCE {
                break;
            }
            if descending {
                error = -error;
            }
            if error < 0.0 {
                lower = t;
                t += (upper - t) * 0.5;
            } else {
                upper = t;
                t += (lower - t) * 0.5;
            }
            error = self.lightness_at(t) - target;
        }
        t
    }
}
