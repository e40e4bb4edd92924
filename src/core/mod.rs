//! Core game-balance logic: canonical constants, trivia reward math and
//! hack resolution.

pub mod constants;
pub mod hack;
pub mod rewards;

pub use constants::*;
pub use hack::*;
pub use rewards::*;
