//! Construction-time configuration for a [`Cloth`](crate::cloth::Cloth).

use crate::error::ClothError;
use crate::float::Float;
use crate::spring::{ReactionMode, SpringKind, SpringParams, SpringTable};
use crate::vec::{Vec, Vec3};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything needed to build and run a cloth.
///
/// # Builder Pattern
/// ```
/// use windcloth::config::ClothConfig;
/// use windcloth::vec::Vec3;
///
/// let config: ClothConfig<f32> = ClothConfig::new(12, 8)
///     .with_node_mass(0.5)
///     .with_gravity(Vec3::new(0.0, -9.81, 0.0))
///     .with_air_velocity(Vec3::new(0.0, 0.0, 4.0))
///     .with_anchoring(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClothConfig<F: Float> {
    /// Nodes per row. At least 2.
    pub width: usize,
    /// Nodes per column. At least 2.
    pub height: usize,
    /// Mass of every node. Default: 1.
    pub node_mass: F,
    /// Gravity acceleration. Default: (0, -2, 0).
    pub gravity: Vec3<F>,
    /// Ambient wind. Default: (1, 0, 0).
    pub air_velocity: Vec3<F>,
    /// Fluid density. Default: 1.
    pub density: F,
    /// Drag coefficient. Default: 0.5.
    pub drag_coefficient: F,
    /// Hold the four corners in place. Default: true.
    pub anchoring: bool,
    /// Stiffness, damping and rest length per spring kind.
    pub springs: SpringTable<F>,
    /// Reaction accumulation. Default: [`ReactionMode::Symmetric`].
    pub reaction: ReactionMode,
}

impl<F: Float> ClothConfig<F> {
    /// A `width x height` cloth with default physical parameters.
    pub fn new(width: usize, height: usize) -> Self {
        ClothConfig {
            width,
            height,
            node_mass: F::one(),
            gravity: Vec3::new(F::zero(), -F::two(), F::zero()),
            air_velocity: Vec3::new(F::one(), F::zero(), F::zero()),
            density: F::one(),
            drag_coefficient: F::half(),
            anchoring: true,
            springs: SpringTable::default(),
            reaction: ReactionMode::Symmetric,
        }
    }

    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_node_mass(mut self, mass: F) -> Self {
        self.node_mass = mass;
        self
    }

    pub fn with_gravity(mut self, gravity: Vec3<F>) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_air_velocity(mut self, air_velocity: Vec3<F>) -> Self {
        self.air_velocity = air_velocity;
        self
    }

    pub fn with_density(mut self, density: F) -> Self {
        self.density = density;
        self
    }

    pub fn with_drag_coefficient(mut self, drag_coefficient: F) -> Self {
        self.drag_coefficient = drag_coefficient;
        self
    }

    pub fn with_anchoring(mut self, anchoring: bool) -> Self {
        self.anchoring = anchoring;
        self
    }

    /// Replace the whole spring table.
    pub fn with_springs(mut self, springs: SpringTable<F>) -> Self {
        self.springs = springs;
        self
    }

    /// Replace the parameters of one spring kind.
    pub fn with_spring(mut self, kind: SpringKind, params: SpringParams<F>) -> Self {
        self.springs.set(kind, params);
        self
    }

    pub fn with_reaction(mut self, reaction: ReactionMode) -> Self {
        self.reaction = reaction;
        self
    }

    /// Checks every parameter that would otherwise surface as NaN mid-run.
    pub fn validate(&self) -> Result<(), ClothError> {
        if self.width < 2 || self.height < 2 {
            return Err(ClothError::InvalidGridDimensions { width: self.width, height: self.height });
        }
        validate_mass(self.node_mass)?;
        finite_vec("gravity", self.gravity)?;
        finite_vec("air_velocity", self.air_velocity)?;
        finite("density", self.density)?;
        finite("drag_coefficient", self.drag_coefficient)?;
        for (kind, params) in self.springs.iter() {
            validate_spring(kind, params)?;
        }
        Ok(())
    }
}

impl<F: Float> Default for ClothConfig<F> {
    fn default() -> Self {
        Self::new(10, 10)
    }
}

pub(crate) fn validate_mass<F: Float>(mass: F) -> Result<(), ClothError> {
    if mass.is_finite() && mass > F::zero() {
        Ok(())
    } else {
        Err(ClothError::InvalidMass)
    }
}

pub(crate) fn validate_spring<F: Float>(
    kind: SpringKind,
    params: &SpringParams<F>,
) -> Result<(), ClothError> {
    finite("stiffness", params.stiffness)?;
    finite("damping", params.damping)?;
    finite("rest_length", params.rest_length)?;
    if params.rest_length < F::zero() {
        return Err(ClothError::InvalidRestLength { kind });
    }
    Ok(())
}

pub(crate) fn finite<F: Float>(name: &'static str, value: F) -> Result<(), ClothError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ClothError::NonFiniteParameter { name })
    }
}

pub(crate) fn finite_vec<F: Float>(name: &'static str, value: Vec3<F>) -> Result<(), ClothError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ClothError::NonFiniteParameter { name })
    }
}
