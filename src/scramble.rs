//! Random move sequences for scrambling a cube.

use rand::{seq::SliceRandom, Rng};
use strum::IntoEnumIterator;
use tracing::debug;

use crate::notation::{sequence::MoveSequence, turn::Move, Face, MAX_ROTATIONS};

/// Whether `face` may follow the given moves.
/// The same face twice in a row would merge, and a face, its opposite and then
/// the face again (R L R) is a disguised merge as well.
fn is_allowed(moves: &[Move], face: Face) -> bool {
	match moves {
		[] => true,
		[last] => last.face() != Some(face),
		[.., prev, last] => {
			last.face() != Some(face)
				&& !(prev.face() == Some(face) && last.face() == Some(face.opposite()))
		}
	}
}

/// Generate a scramble of `len` moves with the given random number generator.
/// None of the moves can be merged with its neighbours.
pub fn random_sequence_with<R>(rng: &mut R, len: usize) -> MoveSequence
where
	R: Rng,
{
	let mut seq = MoveSequence::new();

	while seq.len() < len {
		let candidates: Vec<Face> = Face::iter().filter(|f| is_allowed(seq.moves(), *f)).collect();
		let face = match candidates.choose(rng) {
			Some(face) => *face,
			None => break,
		};
		seq = seq + Move::new(face, rng.gen_range(1..MAX_ROTATIONS));
	}

	debug!(len = seq.len(), scramble = %seq, "generated scramble");
	seq
}

/// Generate a scramble of `len` moves
pub fn random_sequence(len: usize) -> MoveSequence {
	random_sequence_with(&mut rand::thread_rng(), len)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::{rngs::StdRng, SeedableRng};

	#[test]
	/// Scrambles have the requested length and no neutral moves
	fn scramble_length() {
		for len in [0, 1, 2, 25, 100] {
			let seq = random_sequence(len);
			assert_eq!(seq.len(), len);
			assert!(seq.iter().all(|m| !m.is_neutral()));
			assert_eq!(seq.compacted(), seq);
		}
	}

	#[test]
	/// No neighbouring moves share a face, and R L R style patterns never show up
	fn scramble_is_reduced() {
		let seq = random_sequence(500);

		for pair in seq.moves().windows(2) {
			assert_ne!(pair[0].face(), pair[1].face());
			assert!(!pair[0].combine(pair[1]).is_merged());
		}
		for triple in seq.moves().windows(3) {
			let opposite_sandwich = triple[0].face() == triple[2].face()
				&& triple[0].face().map(Face::opposite) == triple[1].face();
			assert!(!opposite_sandwich, "found {} {} {}", triple[0], triple[1], triple[2]);
		}
	}

	#[test]
	/// Composing a scramble again changes nothing
	fn scramble_is_stable_under_composition() {
		let seq = random_sequence(60);
		assert_eq!(MoveSequence::compose(seq.clone()), seq);
	}

	#[test]
	/// The same seed gives the same scramble
	fn seeded_scramble() {
		let a = random_sequence_with(&mut StdRng::seed_from_u64(5805), 30);
		let b = random_sequence_with(&mut StdRng::seed_from_u64(5805), 30);
		assert_eq!(a, b);
		assert_eq!(a.to_string(), b.to_string());
	}

	#[test]
	/// Only the last two moves decide which face may come next
	fn allowed_faces() {
		let r = Move::quarter(Face::Right);
		let l = Move::half(Face::Left);
		assert!(is_allowed(&[], Face::Right));
		assert!(!is_allowed(&[r], Face::Right));
		assert!(is_allowed(&[r], Face::Left));
		assert!(!is_allowed(&[r, l], Face::Right));
		assert!(!is_allowed(&[r, l], Face::Left));
		assert!(is_allowed(&[r, l], Face::Up));
		assert!(is_allowed(&[r, Move::quarter(Face::Up)], Face::Right));
	}
}
