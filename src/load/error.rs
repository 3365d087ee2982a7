use super::LoadStage;
use crate::nsave::SaveError;
use std::error::Error;
use thiserror::Error;

/// Failure of a full load
#[derive(Debug, Error)]
pub enum LoadError {
    /// The save could not be read or parsed. Nothing was torn down.
    #[error(transparent)]
    Save(#[from] SaveError),
    /// A subsystem failed after teardown began. There is no rollback.
    #[error("loading {stage} failed: {source}")]
    Stage {
        stage: LoadStage,
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
}

impl LoadError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::Save(e) if e.is_not_found())
    }

    /// Text for the alert shown to the player
    pub fn user_message(&self) -> String {
        if self.is_not_found() {
            "Savegame file seems to have been deleted.".to_string()
        } else {
            format!("Savegame invalid!\n\n{}", self)
        }
    }
}
