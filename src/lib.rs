//! Mass-spring-damper cloth with aerodynamic drag.
//!
//! `windcloth` turns a `width x height` lattice into point masses joined by
//! four kinds of spring-damper (manhattan, structural, shear, bend) and
//! covered by drag triangles, then advances it with semi-implicit Euler.
//! The four corners can be pinned.
//!
//! # Features
//!
//! - **Fixed-order step**: weight, springs, drag, integrate
//! - **Per-kind spring table**: stiffness, damping and rest length per kind
//! - **Aerodynamic drag**: per-triangle drag from relative air velocity
//! - **Live tuning**: wind, gravity and mass can change between steps
//! - **Observable**: monitor each pass via the `StepObserver` trait
//! - **`no_std` compatible**: needs only `alloc`
//!
//! ```
//! use windcloth::{Cloth, ClothConfig, Vec3};
//!
//! let config = ClothConfig::<f32>::new(8, 8).with_air_velocity(Vec3::new(0.0, 0.0, 3.0));
//! let mut cloth = Cloth::new(&config).unwrap();
//! for _ in 0..10 {
//!     cloth.step(0.01);
//! }
//! assert_eq!(cloth.positions().len(), 64);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod node;
pub mod spring;
pub mod aero;
pub mod topology;
pub mod forces;
pub mod integrator;
pub mod cloth;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::{Vec, Vec3};
pub use node::{GridCoord, Node};
pub use spring::{ReactionMode, Spring, SpringKind, SpringParams, SpringTable};
pub use aero::{Aerodynamics, Triangle};
pub use topology::Topology;
pub use cloth::Cloth;
pub use config::ClothConfig;
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::ClothError;
