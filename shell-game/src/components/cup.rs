/// One of the cups on the board.
///
/// The index is the cup's identity for game logic (which cup was tapped,
/// which cup is winning) and never changes, even though swaps trade the cups'
/// on-screen positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cup {
    /// Position of this cup in the board's cup list
    pub index: usize,
}
