/// Reversi domain types and rules.
pub mod reversi;
