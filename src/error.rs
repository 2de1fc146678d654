use thiserror::Error;

use crate::common::State;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The beam emptied before the goal was generated.
    #[error("Path does not exist.")]
    FrontierExhausted,

    /// The exact search could not stitch a gap left by the beam.
    #[error("No connecting path between {from:?} and {to:?}")]
    NoConnectingPath { from: State, to: State },

    #[error("State {state:?} is outside the {size}x{size} terrain")]
    OutOfBounds { state: State, size: usize },
}
