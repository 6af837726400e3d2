//! Small value types shared by the mesh, projection and rasterizer modules.
//!
//! Model space uses `f32` ([`Vec3`]); screen space is strictly integer
//! ([`Point2`]).

pub mod point;
pub mod vec3;

pub use point::Point2;
pub use vec3::Vec3;
