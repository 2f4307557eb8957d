pub mod sequence;
pub mod turn;

use strum::EnumCount;

/// Number of faces of the cube
pub const NUM_FACES: usize = Face::COUNT;

/// A face turned four times is back where it started
pub const MAX_ROTATIONS: i32 = 4;

/// The faces of the cube, in "LRUDFB" order.
/// Two consecutive faces always form an opposite pair.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[derive(strum::EnumIter, strum::EnumCount, strum::FromRepr)]
#[repr(u8)]
pub enum Face {
	Left,
	Right,
	Up,
	Down,
	Front,
	Back,
}

/// The three axes a face can be turned around.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Axis {
	LeftRight,
	UpDown,
	FrontBack,
}

impl Face {
	/// The axis the face is turned around
	pub fn axis(self) -> Axis {
		match self {
			Face::Left | Face::Right => Axis::LeftRight,
			Face::Up | Face::Down => Axis::UpDown,
			Face::Front | Face::Back => Axis::FrontBack,
		}
	}

	/// The face on the other side of the same axis
	pub fn opposite(self) -> Self {
		match self {
			Face::Left => Face::Right,
			Face::Right => Face::Left,
			Face::Up => Face::Down,
			Face::Down => Face::Up,
			Face::Front => Face::Back,
			Face::Back => Face::Front,
		}
	}

	/// Whether both faces lie on the same axis but on different sides
	pub fn is_opposite(self, other: Face) -> bool {
		self.opposite() == other
	}

	/// The letter used in the notation
	pub fn label(self) -> char {
		match self {
			Face::Left => 'L',
			Face::Right => 'R',
			Face::Up => 'U',
			Face::Down => 'D',
			Face::Front => 'F',
			Face::Back => 'B',
		}
	}
}

impl std::fmt::Display for Face {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{}", self.label())
	}
}

impl TryFrom<char> for Face {
	type Error = NotationError;

	fn try_from(label: char) -> Result<Self, Self::Error> {
		match label {
			'L' => Ok(Face::Left),
			'R' => Ok(Face::Right),
			'U' => Ok(Face::Up),
			'D' => Ok(Face::Down),
			'F' => Ok(Face::Front),
			'B' => Ok(Face::Back),
			_ => Err(NotationError::InvalidFace(label)),
		}
	}
}

/// Everything that can go wrong when moves are built from text.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum NotationError {
	#[error("'{0}' is not a face, expected one of L, R, U, D, F, B")]
	InvalidFace(char),
	#[error("The move \"{0}\" has an invalid suffix, expected nothing, '2' or '''")]
	InvalidSuffix(String),
	#[error("An empty string does not name a move")]
	Empty,
}
