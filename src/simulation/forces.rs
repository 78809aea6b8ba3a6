//! Force / acceleration contributors acting on the test particle
//!
//! Defines the `Acceleration` trait and the inverse-square attraction
//! exerted by the fixed poles. Terms are collected in an [`AccelSet`]
//! and their contributions summed into a single acceleration vector

use crate::simulation::states::{Attractor, NVec2};

/// Collection of acceleration terms (gravity, drag, etc.)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector at the evaluation point
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute the total acceleration at `pos` due to `attractors`
    /// - `out` is zeroed, then every term adds its contribution
    pub fn accumulate_accel(&self, attractors: &[Attractor], pos: NVec2, out: &mut NVec2) {
        *out = NVec2::zeros();
        for term in &self.terms {
            term.acceleration(attractors, pos, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for acceleration sources evaluated at a point in the plane
/// Implementations add their contribution into `out`
pub trait Acceleration {
    fn acceleration(&self, attractors: &[Attractor], pos: NVec2, out: &mut NVec2);
}

/// Inverse-square attraction toward each fixed pole
///
/// For a pole of strength k at distance r the contribution is
/// `-k / r^3 * r_vec`, i.e. magnitude k/r^2 directed from the particle
/// toward the pole. A pole closer than `eps` is skipped entirely, so a
/// sample sitting exactly on a pole feels no force from it
pub struct InverseSquareGravity {
    pub eps: f64, // singularity guard distance
}

impl Acceleration for InverseSquareGravity {
    fn acceleration(&self, attractors: &[Attractor], pos: NVec2, out: &mut NVec2) {
        for att in attractors {
            // Displacement from the pole to the particle
            let r_vec = pos - att.x;
            let r = r_vec.norm();
            if r < self.eps {
                continue;
            }

            // 1 / r^3, so that coef * r_vec has magnitude k / r^2
            let inv_r3 = (r * r * r).recip();
            let coef = att.k * inv_r3;

            // Attraction: points from the particle toward the pole
            *out -= coef * r_vec;
        }
    }
}
