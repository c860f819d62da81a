mod calculate;
mod display;
mod geometry;

pub use calculate::*;
pub use display::*;
pub use geometry::*;
