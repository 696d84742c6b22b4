//! Lattice construction: nodes, springs and drag triangles from a
//! `width x height` grid.
//!
//! Node at `(col, row)` has index `row * width + col` and starts at world
//! position `(col, row, 0)`. The four corners are anchors.

use crate::aero::Triangle;
use crate::error::ClothError;
use crate::float::Float;
use crate::node::{GridCoord, Node};
use crate::spring::{Spring, SpringKind};
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// Nodes plus the springs and triangles that reference them by index.
#[derive(Clone, Debug)]
pub struct Topology<F: Float> {
    pub nodes: AllocVec<Node<Vec3<F>>>,
    pub springs: AllocVec<Spring>,
    pub triangles: AllocVec<Triangle>,
}

/// Row-major index of `(col, row)`.
pub fn index(width: usize, col: usize, row: usize) -> usize {
    row * width + col
}

/// `true` for the four lattice corners.
pub fn is_corner(width: usize, height: usize, col: usize, row: usize) -> bool {
    (col == 0 || col == width - 1) && (row == 0 || row == height - 1)
}

/// Number of springs [`build_springs`] emits for a `width x height` grid.
pub fn spring_count(width: usize, height: usize) -> usize {
    if width < 2 || height < 2 {
        return 0;
    }
    let (w, h) = (width, height);
    (w - 1) * h            // horizontal manhattan
        + (w - 2) * h      // horizontal bend
        + w * (h - 1)      // vertical manhattan
        + w * (h - 2)      // vertical bend
        + 2 * (w - 1) * (h - 1) // structural + shear diagonals
}

/// Number of triangles [`build_triangles`] emits: four per quad.
pub fn triangle_count(width: usize, height: usize) -> usize {
    if width < 2 || height < 2 {
        return 0;
    }
    4 * (width - 1) * (height - 1)
}

/// Builds the full lattice. Fails for grids smaller than 2x2.
pub fn build<F: Float>(width: usize, height: usize, mass: F) -> Result<Topology<F>, ClothError> {
    if width < 2 || height < 2 {
        return Err(ClothError::InvalidGridDimensions { width, height });
    }
    Ok(Topology {
        nodes: build_nodes(width, height, mass),
        springs: build_springs(width, height),
        triangles: build_triangles(width, height),
    })
}

/// One node per lattice point, corners anchored.
pub fn build_nodes<F: Float>(width: usize, height: usize, mass: F) -> AllocVec<Node<Vec3<F>>> {
    let mut nodes = AllocVec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            let pos = Vec3::new(F::from_f32(col as f32), F::from_f32(row as f32), F::zero());
            let mut node = Node::new(GridCoord::new(col, row), pos, mass);
            node.anchor = is_corner(width, height, col, row);
            nodes.push(node);
        }
    }
    nodes
}

/// Scans nodes in index order, emitting per node (bounds permitting):
/// manhattan right, bend right, manhattan down, bend down, structural
/// down-right and shear down-left.
pub fn build_springs(width: usize, height: usize) -> AllocVec<Spring> {
    let mut springs = AllocVec::with_capacity(spring_count(width, height));
    for row in 0..height {
        for col in 0..width {
            let i = index(width, col, row);
            let last_col = col + 1 == width;
            let last_row = row + 1 == height;

            if !last_col {
                springs.push(Spring::new(i, i + 1, SpringKind::Manhattan));
            }
            if col + 2 < width {
                springs.push(Spring::new(i, i + 2, SpringKind::Bend));
            }
            if !last_row {
                springs.push(Spring::new(i, i + width, SpringKind::Manhattan));
            }
            if row + 2 < height {
                springs.push(Spring::new(i, i + 2 * width, SpringKind::Bend));
            }
            if !last_col && !last_row {
                springs.push(Spring::new(i, i + width + 1, SpringKind::Structural));
            }
            if col > 0 && !last_row {
                springs.push(Spring::new(i, i + width - 1, SpringKind::Shear));
            }
        }
    }
    springs
}

/// Four overlapping triangles per quad `(i, i+1, i+W, i+W+1)`, one for each
/// way of dropping a corner. The overlap doubles the drag a two-triangle
/// tessellation would produce.
pub fn build_triangles(width: usize, height: usize) -> AllocVec<Triangle> {
    let mut triangles = AllocVec::with_capacity(triangle_count(width, height));
    for row in 0..height.saturating_sub(1) {
        for col in 0..width.saturating_sub(1) {
            let nw = index(width, col, row);
            let ne = nw + 1;
            let sw = nw + width;
            let se = sw + 1;
            triangles.push(Triangle::new(nw, ne, sw));
            triangles.push(Triangle::new(nw, ne, se));
            triangles.push(Triangle::new(ne, sw, se));
            triangles.push(Triangle::new(nw, sw, se));
        }
    }
    triangles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_by_two_counts() {
        assert_eq!(build_springs(2, 2).len(), 6);
        assert_eq!(build_triangles(2, 2).len(), 4);
        assert_eq!(spring_count(2, 2), 6);
    }

    #[test]
    fn closed_form_matches_generated() {
        for w in 2..7 {
            for h in 2..7 {
                assert_eq!(build_springs(w, h).len(), spring_count(w, h), "{}x{}", w, h);
                assert_eq!(build_triangles(w, h).len(), triangle_count(w, h), "{}x{}", w, h);
            }
        }
    }

    #[test]
    fn first_node_emission_order() {
        let springs = build_springs(3, 3);
        let kinds: AllocVec<_> = springs.iter().take(5).map(|s| (s.b, s.kind)).collect();
        assert_eq!(
            kinds,
            [
                (1, SpringKind::Manhattan),
                (2, SpringKind::Bend),
                (3, SpringKind::Manhattan),
                (6, SpringKind::Bend),
                (4, SpringKind::Structural),
            ]
        );
        // Node 1 is the first to get a shear spring, toward node 3.
        assert!(springs
            .iter()
            .any(|s| s.a == 1 && s.b == 3 && s.kind == SpringKind::Shear));
    }

    #[test]
    fn rejects_degenerate_grid() {
        assert_eq!(
            build::<f32>(1, 4, 1.0).unwrap_err(),
            ClothError::InvalidGridDimensions { width: 1, height: 4 }
        );
        assert_eq!(spring_count(1, 4), 0);
        assert_eq!(triangle_count(4, 0), 0);
    }
}
