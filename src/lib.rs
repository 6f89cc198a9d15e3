//! Fiefdom engine library.
//!
//! Exposes the board representation, placement validation, region
//! traversal, turn orchestration, and self-play modules for use by
//! integration tests and the binary entry point.

pub mod board;
pub mod game;
pub mod movegen;
pub mod selfplay;
pub mod supply;
pub mod traverse;
