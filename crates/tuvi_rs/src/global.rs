//! Process-wide chart engine.

use std::sync::OnceLock;

use tuvi_chart::{ChartEngine, EngineConfig};

use crate::error::TuviError;

static ENGINE: OnceLock<ChartEngine> = OnceLock::new();

/// Validate `config` and install the global engine. Fails on a second call.
pub fn init(config: EngineConfig) -> Result<(), TuviError> {
    let engine = ChartEngine::new(config)?;
    ENGINE
        .set(engine)
        .map_err(|_| TuviError::AlreadyInitialized)
}

/// Whether [`init`] has succeeded.
pub fn is_initialized() -> bool {
    ENGINE.get().is_some()
}

pub(crate) fn engine() -> Result<&'static ChartEngine, TuviError> {
    ENGINE.get().ok_or(TuviError::NotInitialized)
}
