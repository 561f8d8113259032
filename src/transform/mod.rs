//! Similarity transforms: per-axis scale, then rotation, then translation.
//!
//! These generalize [`Orient2d`](crate::orient::Orient2d) and
//! [`Orient3d`](crate::orient::Orient3d); an orientation converts into a
//! transform with unit scale.

mod transform2d;
mod transform3d;

pub use transform2d::Transform2d;
pub use transform3d::Transform3d;
