//! Intervals and their 2D products, used for remapping and clamping points.

mod domain2d;
mod interval;

pub use domain2d::Domain2d;
pub use interval::Interval;
