//! # vecmath3d - Immutable 3D Vectors
//!
//! A small value type for points and directions in 3-space, meant as the
//! foundation for geometry, CSG and graphics code.
//!
//! ## Core Features
//!
//! - **Immutable values**: every operation returns a new [`Vector3`]
//! - **Shared algorithms**: all operations are default methods of [`Vector3d`],
//!   implemented over three accessors
//! - **Transform seam**: external [`Transform`]s receive a mutable scratch copy
//! - **Plain IEEE semantics**: degenerate input yields Infinity/NaN, never an error
//!
//! ## Quick Start
//!
//! ```rust
//! use vecmath3d::prelude::*;
//!
//! let a = factory::xyz(1.0, 0.0, 0.0);
//! let b = factory::y(1.0);
//!
//! assert_eq!(a.crossed(&b), Vector3::Z_ONE);
//! assert!((a.angle(&b) - 90.0).abs() < 1e-9);
//! assert_eq!(a.lerp(&b, 0.5), factory::xy(0.5, 0.5));
//! assert_eq!(factory::xyz(1.0, 2.0, 3.0).to_stl_string(), "1.0 2.0 3.0");
//! ```

pub mod numerics;

pub use numerics::types::factory;
pub use numerics::{MutableVector3, Point3, Tolerance, Transform, Vector3, Vector3d, VectorError};

/// Version information for the vecmath3d crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use super::factory;
    pub use super::{MutableVector3, Point3, Tolerance, Transform, Vector3, Vector3d, VectorError};
}
