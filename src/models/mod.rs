pub mod location;
pub mod point_marker;
pub mod display_marker;

pub use location::{LatLng, LocationError};
pub use point_marker::{NewPointMarker, PointMarker};
pub use display_marker::{DisplayMarker, MarkerLabel};
