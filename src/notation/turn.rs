use std::{
	ops::{Add, Mul, Neg},
	str::FromStr,
};

use crate::notation::*;

/// You can either turn a face (Counter-)Clockwise or do a half turn.
/// The discriminant is the number of clockwise quarter turns.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[derive(strum::FromRepr)]
#[repr(u8)]
pub enum TurnWise {
	Clockwise = 1,
	Double = 2,
	CounterClockwise = 3,
}

impl std::fmt::Display for TurnWise {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			TurnWise::Clockwise => write!(f, ""),
			TurnWise::CounterClockwise => write!(f, "'"),
			TurnWise::Double => write!(f, "2"),
		}
	}
}

/// A single move: one face turned by some quarter turns, or no move at all.
///
/// Internally the move is a face and the number of clockwise quarter turns
/// modulo 4. A residue of zero is always the neutral move, which has no face,
/// so there is exactly one neutral move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct Move {
	face: Option<Face>,
	rotations: u8,
}

/// The outcome of putting two moves next to each other.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Combination {
	/// Both moves collapsed into a single one (possibly the neutral move)
	Merged(Move),
	/// Nothing could be merged, both moves stay in their order
	Unmerged(Move, Move),
}

impl Combination {
	pub fn is_merged(&self) -> bool {
		matches!(self, Combination::Merged(_))
	}
}

impl Move {
	/// The move which does nothing
	pub const NEUTRAL: Move = Move { face: None, rotations: 0 };

	/// Turn `face` by `rotations` clockwise quarter turns.
	/// Negative values turn counterclockwise, everything is taken modulo 4.
	pub fn new(face: Face, rotations: i32) -> Self {
		match rotations.rem_euclid(MAX_ROTATIONS) {
			0 => Self::NEUTRAL,
			r => Self { face: Some(face), rotations: r as u8 },
		}
	}

	/// Same as [Move::new], but the face is given by its letter
	pub fn from_label(label: char, rotations: i32) -> Result<Self, NotationError> {
		Ok(Self::new(Face::try_from(label)?, rotations))
	}

	pub fn from_turn(face: Face, wise: TurnWise) -> Self {
		Self { face: Some(face), rotations: wise as u8 }
	}

	pub fn quarter(face: Face) -> Self {
		Self::from_turn(face, TurnWise::Clockwise)
	}

	pub fn half(face: Face) -> Self {
		Self::from_turn(face, TurnWise::Double)
	}

	pub fn quarter_inverse(face: Face) -> Self {
		Self::from_turn(face, TurnWise::CounterClockwise)
	}

	/// The turned face, None for the neutral move
	pub fn face(&self) -> Option<Face> {
		self.face
	}

	/// How the face is turned, None for the neutral move
	pub fn wise(&self) -> Option<TurnWise> {
		TurnWise::from_repr(self.rotations)
	}

	pub fn is_neutral(&self) -> bool {
		*self == Self::NEUTRAL
	}

	/// The clockwise quarter turn of the same face.
	/// The neutral move has no face and therefore no base.
	pub fn base(&self) -> Option<Self> {
		self.face.map(Self::quarter)
	}

	/// The inverse move.
	/// In terms of group theory, the element which combines with this one to the neutral move.
	pub fn negate(self) -> Self {
		Self {
			face: self.face,
			rotations: (MAX_ROTATIONS as u8 - self.rotations) % MAX_ROTATIONS as u8,
		}
	}

	/// The move applied twice, according to the notation rules.
	///
	/// Doubling a counterclockwise turn gives the clockwise quarter turn
	/// and not a half turn. [Move::scale] and [Move::combine] rely on this.
	pub fn double(self) -> Self {
		match self.wise() {
			None | Some(TurnWise::Double) => Self::NEUTRAL,
			Some(TurnWise::Clockwise) => Self { face: self.face, rotations: 2 },
			Some(TurnWise::CounterClockwise) => self.negate(),
		}
	}

	/// The move applied `k` times, `k` may be negative
	pub fn scale(self, k: i32) -> Self {
		match k.rem_euclid(MAX_ROTATIONS) {
			0 => Self::NEUTRAL,
			1 => self,
			2 => self.double(),
			_ => self.negate(),
		}
	}

	/// Put `other` right after `self` and try to merge them into one move.
	pub fn combine(self, other: Self) -> Combination {
		if other == self.negate() {
			Combination::Merged(Self::NEUTRAL)
		} else if self.is_neutral() {
			Combination::Merged(other)
		} else if other == self {
			Combination::Merged(self.scale(2))
		} else if other == self.scale(2) {
			Combination::Merged(self.negate())
		} else {
			Combination::Unmerged(self, other)
		}
	}

	/// Whether swapping both moves could change the cube.
	/// Turns of opposite faces commute, and the neutral move commutes with everything.
	pub fn interferes(&self, other: &Self) -> bool {
		match (self.face, other.face) {
			(Some(a), Some(b)) => !a.is_opposite(b),
			_ => false,
		}
	}
}

impl std::fmt::Display for Move {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match (self.face, self.wise()) {
			(Some(face), Some(wise)) => write!(f, "{}{}", face, wise),
			_ => Ok(()),
		}
	}
}

impl FromStr for Move {
	type Err = NotationError;

	/// Parses exactly what [Move]'s Display writes: "R", "R2" or "R'".
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let mut chars = s.chars();
		let face = match chars.next() {
			Some(label) => Face::try_from(label)?,
			None => return Err(NotationError::Empty),
		};

		let wise = match chars.as_str() {
			"" => TurnWise::Clockwise,
			"2" => TurnWise::Double,
			"'" => TurnWise::CounterClockwise,
			_ => return Err(NotationError::InvalidSuffix(s.to_string())),
		};

		Ok(Self::from_turn(face, wise))
	}
}

impl Neg for Move {
	type Output = Move;

	fn neg(self) -> Self::Output {
		self.negate()
	}
}

impl Mul<i32> for Move {
	type Output = Move;

	fn mul(self, k: i32) -> Self::Output {
		self.scale(k)
	}
}

impl Mul<Move> for i32 {
	type Output = Move;

	fn mul(self, m: Move) -> Self::Output {
		m.scale(self)
	}
}

impl Add for Move {
	type Output = Combination;

	fn add(self, other: Move) -> Self::Output {
		self.combine(other)
	}
}

/// Parse a whitespace separated list of moves, e.g. "R U R' U'".
pub fn parse_moves<T>(string: T) -> Result<Vec<Move>, NotationError>
where
	T: AsRef<str>,
{
	string.as_ref().split_whitespace().map(Move::from_str).collect()
}
