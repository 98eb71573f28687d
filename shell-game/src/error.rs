use thiserror::Error;

/// Things that can go wrong while running the shell game
#[derive(Error, Debug)]
pub enum ShellGameError {
    /// The cup index was outside the board
    #[error("No cup exists at index {index} (the board has {num_cups} cups)")]
    InvalidCupIndex {
        /// The offending index
        index: usize,
        /// How many cups the board actually has
        num_cups: usize,
    },
    /// Catch-all for everything else
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
