//! API interface implementations

pub mod invoke_handler;
pub mod metrics_handler;
pub mod router;

pub use invoke_handler::AppState;
pub use metrics_handler::{init_metrics, record_dispatch};
pub use router::build_router;
