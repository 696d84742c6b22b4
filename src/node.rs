//! Point masses of the cloth lattice.

use core::fmt;

use crate::float::Float;
use crate::vec::Vec;

/// Integer lattice coordinate of a node.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCoord {
    pub col: usize,
    pub row: usize,
}

impl GridCoord {
    pub fn new(col: usize, row: usize) -> Self {
        GridCoord { col, row }
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// A point mass integrated with semi-implicit Euler.
///
/// `force` is scratch space owned by the step: it is overwritten with the
/// gravity term at the start of every step and summed into by springs and
/// triangles before integration reads it.
#[derive(Clone, Debug)]
pub struct Node<V: Vec> {
    pub coord: GridCoord,
    pub pos: V,
    pub velocity: V,
    pub force: V,
    pub mass: V::Scalar,
    pub anchor: bool,
}

impl<V: Vec> Node<V> {
    pub fn new(coord: GridCoord, pos: V, mass: V::Scalar) -> Self {
        Node {
            coord,
            pos,
            velocity: V::zero(),
            force: V::zero(),
            mass,
            anchor: false,
        }
    }

    /// Overwrites the accumulated force with the weight of this node.
    pub fn reset_force(&mut self, gravity: V) {
        self.force = gravity.scale(self.mass);
    }

    pub fn add_force(&mut self, force: V) {
        self.force = self.force + force;
    }

    /// `true` when the node is held in place under the given anchoring switch.
    pub fn is_fixed(&self, anchoring: bool) -> bool {
        self.anchor && anchoring
    }

    /// Semi-implicit Euler: velocity first, then position from the new
    /// velocity. Fixed nodes keep both untouched.
    pub fn integrate(&mut self, dt: V::Scalar, anchoring: bool) {
        if self.is_fixed(anchoring) {
            return;
        }
        let accel = self.force.scale(V::Scalar::one() / self.mass);
        self.velocity = self.velocity + accel.scale(dt);
        self.pos = self.pos + self.velocity.scale(dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec::Vec3;

    fn node() -> Node<Vec3<f64>> {
        Node::new(GridCoord::new(1, 2), Vec3::new(1.0, 2.0, 0.0), 2.0)
    }

    #[test]
    fn reset_overwrites_previous_force() {
        let mut n = node();
        n.add_force(Vec3::new(100.0, 0.0, 0.0));
        n.reset_force(Vec3::new(0.0, -2.0, 0.0));
        assert_eq!(n.force, Vec3::new(0.0, -4.0, 0.0));
    }

    #[test]
    fn position_uses_updated_velocity() {
        let mut n = node();
        n.force = Vec3::new(4.0, 0.0, 0.0);
        n.integrate(0.5, true);
        // accel = 2, v = 1, x += 0.5
        assert_eq!(n.velocity, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(n.pos, Vec3::new(1.5, 2.0, 0.0));
    }

    #[test]
    fn anchor_ignored_when_anchoring_disabled() {
        let mut n = node();
        n.anchor = true;
        n.force = Vec3::new(0.0, -2.0, 0.0);
        n.integrate(1.0, true);
        assert_eq!(n.pos, Vec3::new(1.0, 2.0, 0.0));
        n.integrate(1.0, false);
        assert_eq!(n.velocity, Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(n.pos, Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn coord_display() {
        use alloc::string::ToString;
        assert_eq!(GridCoord::new(3, 4).to_string(), "(3, 4)");
    }
}
