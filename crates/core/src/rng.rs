//! RNG module - uniform random piece generation
//!
//! Each new piece picks one of the seven shapes uniformly at random. A fixed
//! seed gives a reproducible sequence for tests and replays.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::pieces::Piece;
use crate::types::Shape;

/// Source of freshly spawned pieces
#[derive(Debug, Clone)]
pub struct PieceSource {
    rng: StdRng,
}

impl PieceSource {
    /// Deterministic source for the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Source seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn next_shape(&mut self) -> Shape {
        Shape::ALL[self.rng.gen_range(0..Shape::ALL.len())]
    }

    /// A random piece at spawn position
    pub fn next_piece(&mut self) -> Piece {
        Piece::new(self.next_shape())
    }
}

impl Default for PieceSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}
