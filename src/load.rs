//! Full save load: tears down the running session and rebuilds every
//! subsystem from a save document, then lands the player.

mod error;
mod pipelines;
#[cfg(test)]
mod tests;
mod types;

pub use error::LoadError;
pub use pipelines::load_game;
pub use types::{
    EventTrigger, Inconsistency, LoadReport, LoadStage, Location, SubsystemResult, Subsystems,
};

/// Name shown in the welcome message
pub const APPNAME: &str = "nsave";

/// Version shown in the welcome message
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
