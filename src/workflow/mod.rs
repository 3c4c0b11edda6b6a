pub mod difficulty;
pub mod puzzle;
pub mod puzzle_flow;

pub use difficulty::Difficulty;
pub use puzzle::{CheckOutcome, CheckTicket, PuzzlePhase, PuzzleState};
pub use puzzle_flow::PuzzleFlow;
