use rota_core::CoreError;
use rota_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("scheduler configuration error: {0}")]
    Config(#[from] CoreError),

    /// A guarded grid mutation was rejected.  Only reachable through a bug.
    #[error("grid precondition violated: {0}")]
    Grid(#[from] GridError),
}

pub type EngineResult<T> = Result<T, EngineError>;
