// The shape-kind payload types of the geometry model. One file per kind,
// plus the shared coordinate pair and the array-conversion macro used to
// build geometries concisely in tests.

mod circle;
mod coordinates;
mod linestring;
mod macros;
mod multi_linestring;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;
mod rectangle;
mod ring;

pub use circle::*;
pub use coordinates::*;
pub use linestring::*;
pub use multi_linestring::*;
pub use multi_point::*;
pub use multi_polygon::*;
pub use point::*;
pub use polygon::*;
pub use rectangle::*;
pub use ring::*;
