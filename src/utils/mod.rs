// Utils compartidos

pub mod google_maps_ffi;
