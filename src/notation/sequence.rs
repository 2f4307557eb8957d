use std::ops::Add;

use tracing::trace;

use crate::notation::turn::*;

/// An ordered list of moves, in the order they are performed on the cube.
///
/// Appending a move merges it with the last stored move where possible.
/// Only the last move takes part, so earlier moves are never looked at again.
/// Appending never changes the receiver, it returns a new sequence.
#[derive(Clone, PartialEq, Eq, Hash, Default, Debug)]
pub struct MoveSequence {
	moves: Vec<Move>,
}

impl MoveSequence {
	pub fn new() -> Self {
		Self::default()
	}

	/// Build a sequence by appending the moves one after another
	pub fn compose<I>(moves: I) -> Self
	where
		I: IntoIterator<Item = Move>,
	{
		moves.into_iter().fold(Self::new(), |seq, m| seq.push_reduced(m))
	}

	/// A new sequence with `m` appended.
	///
	/// The last move and `m` are combined. A merge replaces the last move,
	/// even when the result is the neutral move. Otherwise both are kept.
	pub fn append(&self, m: Move) -> Self {
		self.clone().push_reduced(m)
	}

	/// Append all moves of `other`, one at a time
	pub fn append_all(&self, other: &MoveSequence) -> Self {
		other.iter().fold(self.clone(), |seq, m| seq.push_reduced(*m))
	}

	fn push_reduced(mut self, m: Move) -> Self {
		let Some(last) = self.moves.pop() else {
			trace!(%m, "first move of the sequence");
			self.moves.push(m);
			return self;
		};

		match last.combine(m) {
			Combination::Merged(merged) => {
				trace!(%last, %m, %merged, "merged moves");
				self.moves.push(merged);
			}
			Combination::Unmerged(first, second) => {
				trace!(%first, %second, "kept moves apart");
				self.moves.push(first);
				self.moves.push(second);
			}
		}
		self
	}

	/// The same sequence without neutral moves.
	/// Nothing else is merged, moves which become neighbours stay as they are.
	pub fn compacted(&self) -> Self {
		Self {
			moves: self.moves.iter().copied().filter(|m| !m.is_neutral()).collect(),
		}
	}

	/// The sequence undoing this one: reversed, every move negated
	pub fn inverse(&self) -> Self {
		Self::compose(self.moves.iter().rev().map(|m| m.negate()))
	}

	pub fn moves(&self) -> &[Move] {
		&self.moves
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Move> {
		self.moves.iter()
	}

	pub fn last(&self) -> Option<&Move> {
		self.moves.last()
	}

	pub fn len(&self) -> usize {
		self.moves.len()
	}

	pub fn is_empty(&self) -> bool {
		self.moves.is_empty()
	}
}

impl From<Vec<Move>> for MoveSequence {
	/// The moves are stored as given, without merging
	fn from(moves: Vec<Move>) -> Self {
		Self { moves }
	}
}

impl std::fmt::Display for MoveSequence {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		let tokens: Vec<String> = self.moves.iter().map(Move::to_string).collect();
		write!(f, "{}", tokens.join(" "))
	}
}

impl Add<Move> for MoveSequence {
	type Output = MoveSequence;

	fn add(self, m: Move) -> Self::Output {
		self.push_reduced(m)
	}
}

impl Add<Move> for &MoveSequence {
	type Output = MoveSequence;

	fn add(self, m: Move) -> Self::Output {
		self.append(m)
	}
}

impl Add<&MoveSequence> for &MoveSequence {
	type Output = MoveSequence;

	fn add(self, other: &MoveSequence) -> Self::Output {
		self.append_all(other)
	}
}

impl<'a> IntoIterator for &'a MoveSequence {
	type Item = &'a Move;
	type IntoIter = std::slice::Iter<'a, Move>;

	fn into_iter(self) -> Self::IntoIter {
		self.moves.iter()
	}
}

impl IntoIterator for MoveSequence {
	type Item = Move;
	type IntoIter = std::vec::IntoIter<Move>;

	fn into_iter(self) -> Self::IntoIter {
		self.moves.into_iter()
	}
}
