//! Spring-damper force elements and their per-kind parameter table.

use core::fmt;

use crate::float::Float;
use crate::node::Node;
use crate::vec::Vec;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Role of a spring in the cloth lattice.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SpringKind {
    /// Horizontal or vertical neighbour.
    Manhattan,
    /// Down-right diagonal.
    Structural,
    /// Down-left diagonal.
    Shear,
    /// Skip-one horizontal or vertical neighbour.
    Bend,
}

impl SpringKind {
    /// Every kind, in table order.
    pub const ALL: [SpringKind; 4] = [
        SpringKind::Manhattan,
        SpringKind::Structural,
        SpringKind::Shear,
        SpringKind::Bend,
    ];

    /// Slot of this kind in a [`SpringTable`].
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            SpringKind::Manhattan => "manhattan",
            SpringKind::Structural => "structural",
            SpringKind::Shear => "shear",
            SpringKind::Bend => "bend",
        }
    }
}

impl fmt::Display for SpringKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stiffness, damping and rest length shared by all springs of one kind.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpringParams<F: Float> {
    pub stiffness: F,
    pub damping: F,
    pub rest_length: F,
}

impl<F: Float> SpringParams<F> {
    pub fn new(stiffness: F, damping: F, rest_length: F) -> Self {
        SpringParams { stiffness, damping, rest_length }
    }
}

/// Fixed lookup from [`SpringKind`] to its [`SpringParams`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpringTable<F: Float> {
    params: [SpringParams<F>; 4],
}

impl<F: Float> SpringTable<F> {
    pub fn new(
        manhattan: SpringParams<F>,
        structural: SpringParams<F>,
        shear: SpringParams<F>,
        bend: SpringParams<F>,
    ) -> Self {
        SpringTable { params: [manhattan, structural, shear, bend] }
    }

    /// Same parameters for every kind.
    pub fn uniform(params: SpringParams<F>) -> Self {
        SpringTable { params: [params; 4] }
    }

    pub fn get(&self, kind: SpringKind) -> &SpringParams<F> {
        &self.params[kind.index()]
    }

    pub fn set(&mut self, kind: SpringKind, params: SpringParams<F>) {
        self.params[kind.index()] = params;
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, kind: SpringKind, params: SpringParams<F>) -> Self {
        self.set(kind, params);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (SpringKind, &SpringParams<F>)> + '_ {
        SpringKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }
}

impl<F: Float> Default for SpringTable<F> {
    /// Unit lattice spacing: rest lengths 1, sqrt(2), sqrt(2) and 2.
    fn default() -> Self {
        let diagonal = F::two().sqrt();
        SpringTable::new(
            SpringParams::new(F::from_f32(50.0), F::from_f32(1.0), F::one()),
            SpringParams::new(F::from_f32(30.0), F::from_f32(0.5), diagonal),
            SpringParams::new(F::from_f32(30.0), F::from_f32(0.5), diagonal),
            SpringParams::new(F::from_f32(10.0), F::from_f32(0.3), F::two()),
        )
    }
}

/// How the reaction force reaches the second endpoint of a spring.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ReactionMode {
    /// Equal and opposite: `f1 += F*u`, `f2 -= F*u`.
    #[default]
    Symmetric,
    /// Legacy accumulation where the second endpoint's force is replaced by
    /// the first endpoint's updated force minus `F*u`. Kept only to
    /// reproduce scenes tuned against that behaviour; it does not conserve
    /// momentum.
    InheritFirst,
}

/// A spring between two nodes, referenced by index into the node arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Spring {
    pub a: usize,
    pub b: usize,
    pub kind: SpringKind,
}

impl Spring {
    pub fn new(a: usize, b: usize, kind: SpringKind) -> Self {
        debug_assert!(a != b, "spring endpoints must differ");
        Spring { a, b, kind }
    }

    /// Adds this spring's force to both endpoints.
    ///
    /// Returns `false` without touching any node when the endpoints
    /// coincide, since the spring direction is undefined.
    pub fn apply<V: Vec>(
        &self,
        nodes: &mut [Node<V>],
        params: &SpringParams<V::Scalar>,
        mode: ReactionMode,
    ) -> bool {
        let (n1, n2) = (&nodes[self.a], &nodes[self.b]);
        let Some(force) = spring_damper_force(n1.pos, n1.velocity, n2.pos, n2.velocity, params)
        else {
            return false;
        };

        nodes[self.a].add_force(force);
        match mode {
            ReactionMode::Symmetric => nodes[self.b].add_force(-force),
            ReactionMode::InheritFirst => nodes[self.b].force = nodes[self.a].force - force,
        }
        true
    }
}

/// Spring-damper force on the first endpoint; the second receives the
/// negation.
///
/// With `u` the unit vector from `p1` to `p2` and `len` their distance,
/// the scalar force is `-k (L0 - len) - c (u.v1 - u.v2)` applied along `u`.
/// A stretched spring pulls `p1` toward `p2`; a compressed one pushes it
/// away. Returns `None` when `p1 == p2`.
pub fn spring_damper_force<V: Vec>(
    p1: V,
    v1: V,
    p2: V,
    v2: V,
    params: &SpringParams<V::Scalar>,
) -> Option<V> {
    let between = p2 - p1;
    let u = between.try_normalize()?;
    let len = between.length();

    let spring = -params.stiffness * (params.rest_length - len);
    let damper = -params.damping * (u.dot(v1) - u.dot(v2));

    Some(u.scale(spring + damper))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec::Vec3;

    fn params(k: f64, c: f64, rest: f64) -> SpringParams<f64> {
        SpringParams::new(k, c, rest)
    }

    #[test]
    fn table_lookup_by_kind() {
        let table = SpringTable::uniform(params(1.0, 0.0, 1.0))
            .with(SpringKind::Shear, params(7.0, 0.25, 3.0));
        assert_eq!(table.get(SpringKind::Shear).stiffness, 7.0);
        assert_eq!(table.get(SpringKind::Bend).stiffness, 1.0);
        assert_eq!(table.iter().count(), 4);
    }

    #[test]
    fn default_rest_lengths_match_unit_lattice() {
        let table: SpringTable<f64> = SpringTable::default();
        assert_eq!(table.get(SpringKind::Manhattan).rest_length, 1.0);
        assert!((table.get(SpringKind::Structural).rest_length - 2f64.sqrt()).abs() < 1e-12);
        assert_eq!(table.get(SpringKind::Bend).rest_length, 2.0);
    }

    #[test]
    fn stretched_spring_pulls_toward_second() {
        let f = spring_damper_force(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::zero(),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::zero(),
            &params(10.0, 0.0, 1.0),
        )
        .unwrap();
        assert_eq!(f, Vec3::new(10.0, 0.0, 0.0));
    }

    #[test]
    fn compressed_spring_pushes_apart() {
        let f = spring_damper_force(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::zero(),
            Vec3::new(0.5, 0.0, 0.0),
            Vec3::zero(),
            &params(10.0, 0.0, 1.0),
        )
        .unwrap();
        assert_eq!(f, Vec3::new(-5.0, 0.0, 0.0));
    }

    #[test]
    fn damper_opposes_closing_velocity() {
        // At rest length, node1 moving toward node2.
        let f = spring_damper_force(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::zero(),
            &params(10.0, 2.0, 1.0),
        )
        .unwrap();
        assert_eq!(f, Vec3::new(-2.0, 0.0, 0.0));
    }

    #[test]
    fn coincident_endpoints_have_no_direction() {
        let p = Vec3::new(1.0f32, 1.0, 1.0);
        let f = spring_damper_force(p, Vec3::zero(), p, Vec3::zero(), &SpringParams::new(1.0, 1.0, 1.0));
        assert_eq!(f, None);
    }
}
