//! Bezier interpolation of colors in CIE L*a*b*.
//!
//! The curve starts at the first anchor and ends at the last one. Interior
//! anchors act as control points: they pull the curve towards them but are
//! generally not passed through, which keeps hue transitions smooth.

use tracing::debug;

use crate::colors::{lab_to_rgb, quantize, to_lab, Color, LabColor};
use crate::error::PaletteError;

#[derive(Debug, Clone)]
pub struct BezierCurve {
    points: Vec<LabColor>,
    weights: Vec<f64>,
}

impl BezierCurve {
    /// Builds a curve of degree `anchors.len() - 1`. A single anchor gives a
    /// constant curve.
    pub fn new(anchors: &[Color]) -> Result<Self, PaletteError> {
        if anchors.is_empty() {
            return Err(PaletteError::NoAnchors);
        }
        let points: Vec<LabColor> = anchors.iter().copied().map(to_lab).collect();
        let weights = binomial_row(points.len() - 1);
        debug!(anchors = points.len(), "built bezier curve");
        Ok(Self { points, weights })
    }

    pub fn anchors(&self) -> usize {
        self.points.len()
    }

    /// Evaluates the Bernstein form of the curve at `t` in `[0, 1]`.
    pub fn lab_at(&self, t: f64) -> LabColor {
        let degree = self.points.len() - 1;
        let u = 1.0 - t;
        let (mut l, mut a, mut b) = (0.0, 0.0, 0.0);
        for (j, (point, weight)) in self.points.iter().zip(&self.weights).enumerate() {
            let basis = weight * u.powi((degree - j) as i32) * t.powi(j as i32);
            l += basis * point.l;
            a += basis * point.a;
            b += basis * point.b;
        }
        LabColor::new(l, a, b)
    }

    pub fn at(&self, t: f64) -> Color {
        quantize(lab_to_rgb(self.lab_at(t)))
    }
}

// Row `n` of Pascal's triangle.
fn binomial_row(n: usize) -> Vec<f64> {
    let mut row = vec![1.0; n + 1];
    for k in 1..n {
        row[k] = row[k - 1] * (n - k + 1) as f64 / k as f64;
    }
    row
}
