//! Call bounded context - lifecycle events and the phase inferred from them

pub mod entity;
pub mod event;
pub mod phase;

pub use entity::{bridged_legs, other_leg, Participant, ParticipantStatus};
pub use event::{ActionData, ActionType, CallDetails, CallEvent, InvocationEventType};
pub use phase::CallPhase;
