//! Per-step force accumulation: weight, then springs, then drag.

use crate::aero::{Aerodynamics, Triangle};
use crate::float::Float;
use crate::node::Node;
use crate::observer::StepObserver;
use crate::spring::{ReactionMode, Spring, SpringTable};
use crate::vec::{Vec, Vec3};
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Overwrites every node's force with `gravity * mass`.
///
/// This is the only place forces are cleared; everything after it adds.
#[cfg(not(feature = "rayon"))]
pub fn reset_forces<V: Vec>(nodes: &mut [Node<V>], gravity: V) {
    for node in nodes.iter_mut() {
        node.reset_force(gravity);
    }
}

/// Overwrites every node's force with `gravity * mass`.
///
/// This is the only place forces are cleared; everything after it adds.
#[cfg(feature = "rayon")]
pub fn reset_forces<V: Vec>(nodes: &mut [Node<V>], gravity: V) {
    nodes.par_iter_mut().for_each(|node| node.reset_force(gravity));
}

/// Adds every spring's force to its endpoints, in spring order.
pub fn accumulate_springs<V: Vec, O: StepObserver>(
    nodes: &mut [Node<V>],
    springs: &[Spring],
    table: &SpringTable<V::Scalar>,
    mode: ReactionMode,
    observer: &mut O,
) {
    for (i, spring) in springs.iter().enumerate() {
        if !spring.apply(nodes, table.get(spring.kind), mode) {
            observer.on_degenerate_spring(i);
        }
    }
}

/// Adds every triangle's drag to its corners, in triangle order.
pub fn accumulate_drag<F: Float, O: StepObserver>(
    nodes: &mut [Node<Vec3<F>>],
    triangles: &[Triangle],
    air: &Aerodynamics<F>,
    observer: &mut O,
) {
    for (i, triangle) in triangles.iter().enumerate() {
        if !triangle.apply(nodes, air) {
            observer.on_degenerate_triangle(i);
        }
    }
}
