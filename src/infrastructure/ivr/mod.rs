/// DTMF keypad control for established calls
pub mod dtmf;
pub mod menu;

pub use dtmf::DtmfDigit;
pub use menu::{ControlAction, ControlMenu, ControlMenuBuilder, LegTarget};
