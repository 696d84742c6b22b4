//! Aerodynamic drag on cloth triangles.
//!
//! Each triangle sees the mean velocity of its three nodes relative to the
//! ambient air. The drag acts along the (un-normalised) surface normal
//! `c = (p2 - p1) x (p3 - p1)`, whose length is twice the triangle area:
//!
//! ```text
//! F = -1/2 Cd rho * (1/2 (vrel . n) |vrel| / |c|) * c
//! ```
//!
//! One third of `F` is added to each endpoint.

use crate::float::Float;
use crate::node::Node;
use crate::vec::{Vec, Vec3};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ambient air the cloth moves through.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aerodynamics<F: Float> {
    pub air_velocity: Vec3<F>,
    pub density: F,
    pub drag_coefficient: F,
}

impl<F: Float> Aerodynamics<F> {
    pub fn new(air_velocity: Vec3<F>, density: F, drag_coefficient: F) -> Self {
        Aerodynamics { air_velocity, density, drag_coefficient }
    }

    /// Drag share for each endpoint of a triangle with corner positions
    /// `p` and velocities `v`. Returns `None` for a zero-area triangle.
    pub fn triangle_drag(&self, p: [Vec3<F>; 3], v: [Vec3<F>; 3]) -> Option<Vec3<F>> {
        let three = F::three();
        let vrel = (v[0] + v[1] + v[2]).scale(F::one() / three) - self.air_velocity;

        let c = (p[1] - p[0]).cross(p[2] - p[0]);
        let c_len = c.length();
        if c_len.is_near_zero(F::from_f32(1e-12)) {
            return None;
        }
        let normal = c.scale(F::one() / c_len);

        let pressure = F::half() * vrel.dot(normal) * vrel.length() / c_len;
        let force = c.scale(-F::half() * self.drag_coefficient * self.density * pressure);
        Some(force.scale(F::one() / three))
    }
}

impl<F: Float> Default for Aerodynamics<F> {
    fn default() -> Self {
        Aerodynamics {
            air_velocity: Vec3::new(F::one(), F::zero(), F::zero()),
            density: F::one(),
            drag_coefficient: F::half(),
        }
    }
}

/// Three-node surface element used only for drag.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Triangle {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

impl Triangle {
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        debug_assert!(a != b && b != c && a != c, "triangle corners must differ");
        Triangle { a, b, c }
    }

    pub fn indices(&self) -> [usize; 3] {
        [self.a, self.b, self.c]
    }

    /// Adds the drag share to all three corners. Returns `false` without
    /// touching any node when the triangle has no area.
    pub fn apply<F: Float>(&self, nodes: &mut [Node<Vec3<F>>], air: &Aerodynamics<F>) -> bool {
        let [a, b, c] = self.indices();
        let p = [nodes[a].pos, nodes[b].pos, nodes[c].pos];
        let v = [nodes[a].velocity, nodes[b].velocity, nodes[c].velocity];
        let Some(share) = air.triangle_drag(p, v) else {
            return false;
        };
        for i in [a, b, c] {
            nodes[i].add_force(share);
        }
        true
    }
}
