//! Call control use case: turn one lifecycle event into the next actions

pub mod context;
pub mod dispatcher;
pub mod handlers;

pub use context::CallContext;
pub use dispatcher::{CallController, Dispatch};
pub use handlers::EventHandler;
