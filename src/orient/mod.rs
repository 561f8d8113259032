//! Rigid transforms (rotation followed by translation).

mod orient2d;
mod orient3d;

pub use orient2d::Orient2d;
pub use orient3d::Orient3d;
