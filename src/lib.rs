//! This is a simple example how moves are combined.
//!
//! ```
//! use cubenotation::prelude::*;
//!
//! let seq = MoveSequence::compose(parse_moves("R U L L'").unwrap());
//! assert_eq!(seq.to_string(), "R U ");
//!
//! let seq = seq.compacted() + Move::half(Face::Up);
//! assert_eq!(seq.to_string(), "R U'");
//! ```
//!
//! Only the last move of a sequence is merged with an appended one,
//! earlier moves are never revisited.

pub mod notation;
pub mod scramble;

pub mod prelude {
	pub use crate::notation::{sequence::*, turn::*, *};
	pub use crate::scramble::{random_sequence, random_sequence_with};
}
