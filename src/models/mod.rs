pub mod phase;
pub mod status;

pub use phase::StatusPhase;
pub use status::StatusRecord;
