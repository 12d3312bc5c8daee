// ============================================================================
// STATE MODULE - Rc<RefCell> state + change notifications
// ============================================================================

pub mod reactivity;
pub mod dashboard_state;
pub mod claim;

pub use reactivity::*;
pub use dashboard_state::*;
pub use claim::*;
