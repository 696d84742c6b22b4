//! The cloth driver: owns the lattice and runs the fixed-order step.

use crate::aero::{Aerodynamics, Triangle};
use crate::config::{self, ClothConfig};
use crate::error::ClothError;
use crate::float::Float;
use crate::forces;
use crate::integrator;
use crate::node::{GridCoord, Node};
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::spring::{ReactionMode, Spring, SpringKind, SpringParams, SpringTable};
use crate::topology;
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// A mass-spring-damper cloth with aerodynamic drag.
///
/// Nodes live in a single arena; springs and triangles refer to them by
/// index and never change after construction. Only node force, velocity
/// and position are mutated, and only by [`step`](Self::step).
///
/// Parameter setters (wind, gravity, mass, ...) may be called between
/// steps and take effect on the next one.
pub struct Cloth<F: Float> {
    nodes: AllocVec<Node<Vec3<F>>>,
    springs: AllocVec<Spring>,
    triangles: AllocVec<Triangle>,
    width: usize,
    height: usize,
    gravity: Vec3<F>,
    air: Aerodynamics<F>,
    spring_table: SpringTable<F>,
    anchoring: bool,
    reaction: ReactionMode,
}

impl<F: Float> Cloth<F> {
    /// Validates `config` and builds the lattice.
    pub fn new(config: &ClothConfig<F>) -> Result<Self, ClothError> {
        if let Err(err) = config.validate() {
            log::warn!("rejecting cloth configuration: {}", err);
            return Err(err);
        }
        let topo = topology::build(config.width, config.height, config.node_mass)?;

        log::info!(
            "built {}x{} cloth: {} nodes, {} springs, {} triangles",
            config.width,
            config.height,
            topo.nodes.len(),
            topo.springs.len(),
            topo.triangles.len(),
        );
        if config.reaction == ReactionMode::InheritFirst {
            log::warn!("spring reaction mode InheritFirst does not conserve momentum");
        }

        Ok(Cloth {
            nodes: topo.nodes,
            springs: topo.springs,
            triangles: topo.triangles,
            width: config.width,
            height: config.height,
            gravity: config.gravity,
            air: Aerodynamics::new(config.air_velocity, config.density, config.drag_coefficient),
            spring_table: config.springs,
            anchoring: config.anchoring,
            reaction: config.reaction,
        })
    }

    /// Advances the simulation by `dt`.
    pub fn step(&mut self, dt: F) {
        self.step_observed(dt, &mut NoOpStepObserver);
    }

    /// Advances the simulation by `dt`, reporting each pass to `observer`.
    ///
    /// Order: reset forces to weight, springs, drag, integrate.
    pub fn step_observed<O: StepObserver>(&mut self, dt: F, observer: &mut O) {
        forces::reset_forces(&mut self.nodes, self.gravity);
        observer.on_forces_reset();

        forces::accumulate_springs(
            &mut self.nodes,
            &self.springs,
            &self.spring_table,
            self.reaction,
            observer,
        );
        observer.on_springs_applied();

        forces::accumulate_drag(&mut self.nodes, &self.triangles, &self.air, observer);
        observer.on_drag_applied();

        integrator::integrate(&mut self.nodes, dt, self.anchoring);
        observer.on_integrate();

        observer.on_step_complete();
    }

    /// Row-major index of `(col, row)`, or an error outside the lattice.
    pub fn index(&self, col: usize, row: usize) -> Result<usize, ClothError> {
        if col < self.width && row < self.height {
            Ok(topology::index(self.width, col, row))
        } else {
            Err(ClothError::NodeOutOfBounds { col, row, width: self.width, height: self.height })
        }
    }

    pub fn node(&self, col: usize, row: usize) -> Result<&Node<Vec3<F>>, ClothError> {
        let i = self.index(col, row)?;
        Ok(&self.nodes[i])
    }

    pub fn position_at(&self, col: usize, row: usize) -> Result<Vec3<F>, ClothError> {
        self.node(col, row).map(|n| n.pos)
    }

    pub fn velocity_at(&self, col: usize, row: usize) -> Result<Vec3<F>, ClothError> {
        self.node(col, row).map(|n| n.velocity)
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> AllocVec<Vec3<F>> {
        self.nodes.iter().map(|n| n.pos).collect()
    }

    /// All velocities in row-major order.
    pub fn velocities(&self) -> AllocVec<Vec3<F>> {
        self.nodes.iter().map(|n| n.velocity).collect()
    }

    /// Current endpoint positions of every spring, for line renderers.
    pub fn spring_segments(&self) -> AllocVec<[Vec3<F>; 2]> {
        self.springs
            .iter()
            .map(|s| [self.nodes[s.a].pos, self.nodes[s.b].pos])
            .collect()
    }

    /// Current corner positions of every triangle, for line renderers.
    pub fn triangle_vertices(&self) -> AllocVec<[Vec3<F>; 3]> {
        self.triangles
            .iter()
            .map(|t| t.indices().map(|i| self.nodes[i].pos))
            .collect()
    }

    pub fn nodes(&self) -> &[Node<Vec3<F>>] { &self.nodes }
    pub fn springs(&self) -> &[Spring] { &self.springs }
    pub fn triangles(&self) -> &[Triangle] { &self.triangles }
    pub fn width(&self) -> usize { self.width }
    pub fn height(&self) -> usize { self.height }
    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn spring_count(&self) -> usize { self.springs.len() }
    pub fn triangle_count(&self) -> usize { self.triangles.len() }
    pub fn gravity(&self) -> Vec3<F> { self.gravity }
    pub fn aerodynamics(&self) -> &Aerodynamics<F> { &self.air }
    pub fn spring_table(&self) -> &SpringTable<F> { &self.spring_table }
    pub fn anchoring(&self) -> bool { self.anchoring }
    pub fn reaction(&self) -> ReactionMode { self.reaction }

    /// Coordinates of the anchor nodes.
    pub fn anchors(&self) -> impl Iterator<Item = GridCoord> + '_ {
        self.nodes.iter().filter(|n| n.anchor).map(|n| n.coord)
    }

    pub fn set_air_velocity(&mut self, air_velocity: Vec3<F>) -> Result<(), ClothError> {
        config::finite_vec("air_velocity", air_velocity)?;
        log::debug!("air velocity set to {:?}", air_velocity);
        self.air.air_velocity = air_velocity;
        Ok(())
    }

    pub fn set_gravity(&mut self, gravity: Vec3<F>) -> Result<(), ClothError> {
        config::finite_vec("gravity", gravity)?;
        log::debug!("gravity set to {:?}", gravity);
        self.gravity = gravity;
        Ok(())
    }

    pub fn set_density(&mut self, density: F) -> Result<(), ClothError> {
        config::finite("density", density)?;
        self.air.density = density;
        Ok(())
    }

    pub fn set_drag_coefficient(&mut self, drag_coefficient: F) -> Result<(), ClothError> {
        config::finite("drag_coefficient", drag_coefficient)?;
        self.air.drag_coefficient = drag_coefficient;
        Ok(())
    }

    /// Sets the mass of every node.
    pub fn set_mass(&mut self, mass: F) -> Result<(), ClothError> {
        config::validate_mass(mass)?;
        log::debug!("node mass set to {}", mass);
        for node in self.nodes.iter_mut() {
            node.mass = mass;
        }
        Ok(())
    }

    pub fn set_node_mass(&mut self, col: usize, row: usize, mass: F) -> Result<(), ClothError> {
        config::validate_mass(mass)?;
        let i = self.index(col, row)?;
        self.nodes[i].mass = mass;
        Ok(())
    }

    pub fn set_spring_params(
        &mut self,
        kind: SpringKind,
        params: SpringParams<F>,
    ) -> Result<(), ClothError> {
        config::validate_spring(kind, &params)?;
        log::debug!("{} spring parameters set to {:?}", kind, params);
        self.spring_table.set(kind, params);
        Ok(())
    }

    /// Turns corner pinning on or off without touching the anchor flags.
    pub fn set_anchoring(&mut self, anchoring: bool) {
        self.anchoring = anchoring;
    }
}
