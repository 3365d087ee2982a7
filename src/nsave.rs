//! Save index: discovery and header parsing of save files
//!
//! The index is a plain value rebuilt wholesale on every refresh; whoever
//! holds it (the load menu) owns it for as long as it is open.

mod error;
pub mod operations;
mod pipelines;
pub mod pure;
#[cfg(test)]
mod tests;
mod types;

pub use error::SaveError;
pub use operations::remove_save;
pub use pipelines::refresh_index;
pub use types::{SAVE_EXTENSION, SaveIndex, SaveSummary};
