use float_eq::assert_float_eq;
use windcloth::forces::accumulate_drag;
use windcloth::topology::{build_nodes, build_triangles};
use windcloth::{Aerodynamics, StepObserver, NoOpStepObserver, Triangle, Vec3};
use windcloth::Vec as _;

#[derive(Default)]
struct DegenerateTriangles(Vec<usize>);

impl StepObserver for DegenerateTriangles {
    fn on_degenerate_triangle(&mut self, triangle: usize) {
        self.0.push(triangle);
    }
}

#[test]
fn still_air_and_still_cloth_feel_no_drag() {
    let mut nodes = build_nodes::<f64>(3, 3, 1.0);
    let triangles = build_triangles(3, 3);
    let air = Aerodynamics::new(Vec3::zero(), 1.2, 0.8);
    accumulate_drag(&mut nodes, &triangles, &air, &mut NoOpStepObserver);
    for node in &nodes {
        assert_eq!(node.force.length(), 0.0);
    }
}

#[test]
fn single_quad_drag_magnitude() {
    // Flat unit quad in the z = 0 plane, air along +z at 2 m/s.
    // Each of the four triangles has |c| = 1, so each adds
    // -0.5 * Cd * rho * (0.5 * (-2) * 2) * (+-z) / 3 = +1/3 * Cd * rho along +z
    // to each of its corners.
    let mut nodes = build_nodes::<f64>(2, 2, 1.0);
    let triangles = build_triangles(2, 2);
    let air = Aerodynamics::new(Vec3::new(0.0, 0.0, 2.0), 1.0, 1.0);
    accumulate_drag(&mut nodes, &triangles, &air, &mut NoOpStepObserver);

    // Every corner belongs to three of the four triangles.
    for node in &nodes {
        assert_float_eq!(node.force.z, 1.0, abs <= 1e-12);
        assert_float_eq!(node.force.x, 0.0, abs <= 1e-12);
        assert_float_eq!(node.force.y, 0.0, abs <= 1e-12);
    }
}

#[test]
fn drag_scales_with_density_and_coefficient() {
    let run = |density: f64, cd: f64| {
        let mut nodes = build_nodes::<f64>(2, 2, 1.0);
        let air = Aerodynamics::new(Vec3::new(0.0, 0.0, 3.0), density, cd);
        accumulate_drag(&mut nodes, &build_triangles(2, 2), &air, &mut NoOpStepObserver);
        nodes[0].force.z
    };
    let base = run(1.0, 0.5);
    assert_float_eq!(run(2.0, 0.5), 2.0 * base, rmax <= 1e-12);
    assert_float_eq!(run(1.0, 1.5), 3.0 * base, rmax <= 1e-12);
}

#[test]
fn drag_grows_with_square_of_wind_speed() {
    let run = |speed: f64| {
        let mut nodes = build_nodes::<f64>(2, 2, 1.0);
        let air = Aerodynamics::new(Vec3::new(0.0, 0.0, speed), 1.0, 0.5);
        accumulate_drag(&mut nodes, &build_triangles(2, 2), &air, &mut NoOpStepObserver);
        nodes[3].force.z
    };
    assert_float_eq!(run(4.0), 4.0 * run(2.0), rmax <= 1e-12);
}

#[test]
fn collapsed_triangle_reported_and_skipped() {
    let mut nodes = build_nodes::<f32>(2, 2, 1.0);
    // Fold node 3 onto the line through nodes 0 and 1.
    nodes[3].pos = Vec3::new(2.0, 0.0, 0.0);
    nodes[2].pos = Vec3::new(0.5, 0.0, 0.0);
    let triangles = build_triangles(2, 2);
    let air = Aerodynamics::new(Vec3::new(0.0, 0.0, 1.0), 1.0, 1.0);
    let mut seen = DegenerateTriangles::default();
    accumulate_drag(&mut nodes, &triangles, &air, &mut seen);
    assert_eq!(seen.0, vec![0, 1, 2, 3]);
    for node in &nodes {
        assert!(node.force.is_finite());
        assert_eq!(node.force.length(), 0.0);
    }
}

#[test]
fn triangle_apply_adds_equal_shares() {
    let mut nodes = build_nodes::<f64>(2, 2, 1.0);
    let air = Aerodynamics::new(Vec3::new(0.0, 0.0, -1.0), 1.0, 1.0);
    assert!(Triangle::new(0, 1, 2).apply(&mut nodes, &air));
    assert_eq!(nodes[0].force, nodes[1].force);
    assert_eq!(nodes[1].force, nodes[2].force);
    assert_eq!(nodes[3].force, Vec3::zero());
    assert!(nodes[0].force.z < 0.0);
}
