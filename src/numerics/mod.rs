// src/numerics/mod.rs
// Top-level numerics module. Exposes a `types` namespace with submodules.

pub mod config;
pub mod error;

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    pub mod factory;
    pub mod mutable;
    pub mod point;
    pub mod traits;
    pub mod transform;
    pub mod vector;
}

pub use config::Tolerance;
pub use error::VectorError;
pub use types::mutable::MutableVector3;
pub use types::point::Point3;
pub use types::traits::Vector3d;
pub use types::transform::Transform;
pub use types::vector::Vector3;
