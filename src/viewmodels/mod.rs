pub mod marker_sync;
pub mod map_viewmodel;

pub use marker_sync::{number_markers, MarkerSync, NumberedMarkers};
pub use map_viewmodel::{MapViewModel, MarkerOverlay};
