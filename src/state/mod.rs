// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;
pub mod map_state;
pub mod marker_state;
pub mod app_state;

pub use reactivity::*;
pub use map_state::*;
pub use marker_state::*;
pub use app_state::*;
