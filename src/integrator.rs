//! Semi-implicit Euler pass over all nodes.
//!
//! Must run after every force contribution of the step has been summed.
//! Each node is independent once forces are final, so with the `rayon`
//! feature the pass runs in parallel with identical results.

use crate::node::Node;
use crate::vec::Vec;
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Advances velocity then position of every free node by `dt`.
///
/// When `anchoring` is `false` anchor flags are ignored and every node moves.
#[cfg(not(feature = "rayon"))]
pub fn integrate<V: Vec>(nodes: &mut [Node<V>], dt: V::Scalar, anchoring: bool) {
    for node in nodes.iter_mut() {
        node.integrate(dt, anchoring);
    }
}

/// Advances velocity then position of every free node by `dt`.
///
/// When `anchoring` is `false` anchor flags are ignored and every node moves.
#[cfg(feature = "rayon")]
pub fn integrate<V: Vec>(nodes: &mut [Node<V>], dt: V::Scalar, anchoring: bool) {
    nodes.par_iter_mut().for_each(|node| node.integrate(dt, anchoring));
}
