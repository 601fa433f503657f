mod mode;
pub mod model;

pub use self::mode::{ForceMode, ModeState};
