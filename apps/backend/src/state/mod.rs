pub mod app_state;
pub mod match_registry;

pub use app_state::AppState;
pub use match_registry::{MatchRegistry, SharedMatch};
