//! Board module - the game state and its command interpreter
//!
//! The board ties together the settled-cell [`Grid`], the active [`Piece`],
//! the upcoming-piece queue and the score. Every mutation goes through
//! [`Board::apply`]; collision testing is the single source of truth for
//! legality, and an illegal tentative move is simply reverted.

use std::collections::VecDeque;

use crate::error::InvariantViolation;
use crate::grid::Grid;
use crate::pieces::{Piece, PieceCells};
use crate::rng::PieceSource;
use crate::types::{BoardSize, GameAction, Shape, INITIAL_QUEUE_LEN};

/// Result of committing the active piece to the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockOutcome {
    /// The piece settled and the next piece spawned cleanly.
    Locked { lines_cleared: u32 },
    /// The next piece collides with settled cells at spawn.
    GameOver { lines_cleared: u32 },
}

/// What a single [`Board::apply`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The active piece moved or rotated.
    Moved,
    /// The move was illegal and has been reverted.
    Rejected,
    /// The active piece was locked.
    Locked { lines_cleared: u32 },
    /// A different piece became active without locking (stash, debug advance).
    Advanced,
    /// The game has ended; the board no longer accepts commands.
    GameOver,
}

impl ApplyOutcome {
    pub fn is_game_over(&self) -> bool {
        matches!(self, ApplyOutcome::GameOver)
    }
}

impl From<LockOutcome> for ApplyOutcome {
    fn from(outcome: LockOutcome) -> Self {
        match outcome {
            LockOutcome::Locked { lines_cleared } => ApplyOutcome::Locked { lines_cleared },
            LockOutcome::GameOver { .. } => ApplyOutcome::GameOver,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    active: Piece,
    upcoming: VecDeque<Piece>,
    score: u32,
    source: PieceSource,
    game_over: bool,
}

impl Board {
    /// New empty board with an entropy-seeded piece sequence
    pub fn new(size: BoardSize) -> Self {
        Self::with_source(size, PieceSource::from_entropy())
    }

    /// New empty board with a reproducible piece sequence
    pub fn with_seed(size: BoardSize, seed: u64) -> Self {
        Self::with_source(size, PieceSource::new(seed))
    }

    pub fn with_source(size: BoardSize, mut source: PieceSource) -> Self {
        let (width, height) = size.dimensions();
        let active = source.next_piece();
        let upcoming = (0..INITIAL_QUEUE_LEN).map(|_| source.next_piece()).collect();

        Self {
            grid: Grid::new(width, height),
            active,
            upcoming,
            score: 0,
            source,
            game_over: false,
        }
    }

    /// Build a board from explicit parts.
    ///
    /// Used to set up scenarios: the grid may have any dimensions and
    /// `active` may sit anywhere. The queue is topped up with random pieces
    /// from `seed` if `upcoming` is empty.
    pub fn from_parts(
        grid: Grid,
        active: Piece,
        upcoming: impl IntoIterator<Item = Piece>,
        seed: u64,
    ) -> Self {
        let mut source = PieceSource::new(seed);
        let mut upcoming: VecDeque<Piece> = upcoming.into_iter().collect();
        if upcoming.is_empty() {
            upcoming.push_back(source.next_piece());
        }

        Self {
            grid,
            active,
            upcoming,
            score: 0,
            source,
            game_over: false,
        }
    }

    pub fn width(&self) -> u8 {
        self.grid.width()
    }

    pub fn height(&self) -> u8 {
        self.grid.height()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn upcoming(&self) -> &VecDeque<Piece> {
        &self.upcoming
    }

    /// Shape at the head of the upcoming queue
    pub fn next_shape(&self) -> Shape {
        self.upcoming
            .front()
            .map(|p| p.shape)
            .unwrap_or(self.active.shape)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access (for scenario setup and tests)
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// True if `piece` leaves the grid or overlaps a settled cell
    pub fn collides(&self, piece: &Piece) -> bool {
        !self.grid.fits(&piece.locations())
    }

    /// True if the active piece is in an illegal position
    pub fn detect_collision(&self) -> bool {
        self.collides(&self.active)
    }

    /// Fail if the active piece overlaps settled cells or the walls
    pub fn check_active(&self) -> Result<(), InvariantViolation> {
        if self.detect_collision() {
            return Err(InvariantViolation::ActiveOverlap {
                cells: self.active.locations(),
            });
        }
        Ok(())
    }

    /// Apply a command to the active piece
    pub fn apply(&mut self, action: GameAction) -> Result<ApplyOutcome, InvariantViolation> {
        if self.game_over {
            return Ok(ApplyOutcome::GameOver);
        }

        let outcome = match action {
            GameAction::MoveLeft => self.try_shift(-1, 0),
            GameAction::MoveRight => self.try_shift(1, 0),
            GameAction::SoftDrop => {
                if self.try_shift(0, 1) == ApplyOutcome::Moved {
                    ApplyOutcome::Moved
                } else {
                    self.lock_active()?.into()
                }
            }
            GameAction::HardDrop => {
                self.active = self.drop_position();
                self.lock_active()?.into()
            }
            GameAction::Rotate => self.try_rotate(),
            GameAction::Stash => self.stash(),
            GameAction::DebugAdvance => self.advance(),
        };

        Ok(outcome)
    }

    /// Commit the active piece, clear lines and spawn the next piece
    pub fn lock_active(&mut self) -> Result<LockOutcome, InvariantViolation> {
        let cells = self.active.locations();
        if !self.grid.lock_cells(&cells) {
            return Err(InvariantViolation::LockIntoOccupied { cells });
        }

        let lines_cleared = self.clear_lines();

        if self.activate_next() {
            Ok(LockOutcome::Locked { lines_cleared })
        } else {
            Ok(LockOutcome::GameOver { lines_cleared })
        }
    }

    /// Remove full rows and add one point per row
    pub fn clear_lines(&mut self) -> u32 {
        let cleared = self.grid.clear_full_rows();
        self.score += cleared;
        cleared
    }

    /// Cells the active piece would occupy if dropped now
    pub fn ghost_locations(&self) -> PieceCells {
        self.drop_position().locations()
    }

    /// Lowest legal position straight below the active piece
    fn drop_position(&self) -> Piece {
        let mut piece = self.active;
        loop {
            let below = piece.shifted(0, 1);
            if self.collides(&below) {
                return piece;
            }
            piece = below;
        }
    }

    fn try_shift(&mut self, dx: i8, dy: i8) -> ApplyOutcome {
        let moved = self.active.shifted(dx, dy);
        if self.collides(&moved) {
            return ApplyOutcome::Rejected;
        }
        self.active = moved;
        ApplyOutcome::Moved
    }

    /// Quarter turn with a single kick towards the board centre
    fn try_rotate(&mut self) -> ApplyOutcome {
        let rotated = self.active.rotated();
        if !self.collides(&rotated) {
            self.active = rotated;
            return ApplyOutcome::Moved;
        }

        if let Some(dx) = self.kick_direction(&rotated) {
            let kicked = rotated.shifted(dx, 0);
            if !self.collides(&kicked) {
                self.active = kicked;
                return ApplyOutcome::Moved;
            }
        }

        ApplyOutcome::Rejected
    }

    /// +1 left of centre, -1 right of centre, none exactly on it
    fn kick_direction(&self, piece: &Piece) -> Option<i8> {
        let doubled_x = 2 * piece.x as i16;
        let width = self.grid.width() as i16;
        if doubled_x < width {
            Some(1)
        } else if doubled_x > width {
            Some(-1)
        } else {
            None
        }
    }

    fn stash(&mut self) -> ApplyOutcome {
        let mut stashed = self.active;
        stashed.reset();
        let spawned = self.activate_next();
        self.upcoming.push_front(stashed);
        self.spawn_outcome(spawned)
    }

    fn advance(&mut self) -> ApplyOutcome {
        let spawned = self.activate_next();
        self.spawn_outcome(spawned)
    }

    fn spawn_outcome(&self, spawned: bool) -> ApplyOutcome {
        if spawned {
            ApplyOutcome::Advanced
        } else {
            ApplyOutcome::GameOver
        }
    }

    /// Take the head of the queue and top the queue up.
    ///
    /// Returns false (and ends the game) if the new piece collides at spawn.
    fn activate_next(&mut self) -> bool {
        let next = match self.upcoming.pop_front() {
            Some(piece) => piece,
            None => self.source.next_piece(),
        };
        self.upcoming.push_back(self.source.next_piece());
        self.active = next;

        if self.detect_collision() {
            self.game_over = true;
            return false;
        }
        true
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rotation;

    fn empty_board(width: u8, height: u8, active: Piece) -> Board {
        Board::from_parts(Grid::new(width, height), active, [Piece::new(Shape::T)], 1)
    }

    #[test]
    fn test_new_board_state() {
        let board = Board::with_seed(BoardSize::Big, 12345);
        assert_eq!(board.width(), 20);
        assert_eq!(board.height(), 20);
        assert_eq!(board.score(), 0);
        assert_eq!(board.upcoming().len(), INITIAL_QUEUE_LEN);
        assert!(!board.detect_collision());
        assert_eq!(board.grid().occupied_count(), 0);
    }

    #[test]
    fn test_move_reverts_at_wall() {
        let mut board = empty_board(10, 10, Piece::at(Shape::O, 0, 3, Rotation::North));
        assert_eq!(board.apply(GameAction::MoveLeft), Ok(ApplyOutcome::Rejected));
        assert_eq!(board.active().x, 0);
        assert_eq!(board.apply(GameAction::MoveRight), Ok(ApplyOutcome::Moved));
        assert_eq!(board.active().x, 1);
    }

    #[test]
    fn test_soft_drop_locks_on_floor() {
        let mut board = empty_board(10, 10, Piece::at(Shape::O, 0, 8, Rotation::North));
        let outcome = board.apply(GameAction::SoftDrop).unwrap();
        assert_eq!(outcome, ApplyOutcome::Locked { lines_cleared: 0 });
        assert_eq!(board.grid().occupied_count(), 4);
        assert!(board.grid().is_occupied(0, 9));
        assert_eq!(board.active().shape, Shape::T);
    }

    #[test]
    fn test_hard_drop_lands_on_stack() {
        let mut board = empty_board(10, 10, Piece::at(Shape::O, 4, 1, Rotation::North));
        board.grid_mut().set(4, 9, true);
        board.apply(GameAction::HardDrop).unwrap();
        assert!(board.grid().is_occupied(4, 8));
        assert!(board.grid().is_occupied(5, 7));
        assert_eq!(board.grid().occupied_count(), 5);
    }

    #[test]
    fn test_rotate_kicks_right_from_left_wall() {
        let mut board = empty_board(10, 10, Piece::at(Shape::O, 0, 5, Rotation::North));
        assert_eq!(board.apply(GameAction::Rotate), Ok(ApplyOutcome::Moved));
        assert_eq!(board.active().x, 1);
        assert_eq!(board.active().rotation, Rotation::East);
    }

    #[test]
    fn test_rotate_without_kick_room_is_rejected() {
        // West orientation on the floor: rotating to North needs the row below
        let start = Piece::at(Shape::O, 0, 9, Rotation::West);
        let mut board = empty_board(10, 10, start);
        assert!(!board.detect_collision());
        assert_eq!(board.apply(GameAction::Rotate), Ok(ApplyOutcome::Rejected));
        assert_eq!(*board.active(), start);
    }

    #[test]
    fn test_stash_puts_piece_at_queue_front() {
        let active = Piece::at(Shape::I, 2, 4, Rotation::East);
        let mut board = Board::from_parts(
            Grid::new(10, 10),
            active,
            [Piece::new(Shape::O), Piece::new(Shape::Z)],
            3,
        );

        assert_eq!(board.apply(GameAction::Stash), Ok(ApplyOutcome::Advanced));
        assert_eq!(*board.active(), Piece::new(Shape::O));
        assert_eq!(board.upcoming()[0], Piece::new(Shape::I));
        assert_eq!(board.upcoming()[1], Piece::new(Shape::Z));
        // Head consumed, one refill appended, stashed piece prepended
        assert_eq!(board.upcoming().len(), 3);
        assert_eq!(board.grid().occupied_count(), 0);
    }

    #[test]
    fn test_debug_advance_discards_active() {
        let mut board = Board::from_parts(
            Grid::new(10, 10),
            Piece::at(Shape::L, 4, 6, Rotation::North),
            [Piece::new(Shape::J)],
            3,
        );
        assert_eq!(board.apply(GameAction::DebugAdvance), Ok(ApplyOutcome::Advanced));
        assert_eq!(*board.active(), Piece::new(Shape::J));
        assert_eq!(board.upcoming().len(), 1);
        assert_eq!(board.grid().occupied_count(), 0);
    }

    #[test]
    fn test_lock_into_occupied_is_violation() {
        let mut board = empty_board(10, 10, Piece::at(Shape::O, 3, 3, Rotation::North));
        board.grid_mut().set(3, 3, true);
        assert!(matches!(
            board.lock_active(),
            Err(InvariantViolation::LockIntoOccupied { .. })
        ));
        assert!(board.check_active().is_err());
    }

    #[test]
    fn test_game_over_is_sticky() {
        let mut grid = Grid::new(10, 10);
        // Block the spawn area without completing any row
        for y in 0..4 {
            for x in 3..8 {
                grid.set(x, y, true);
            }
        }
        let mut board = Board::from_parts(
            grid,
            Piece::at(Shape::O, 0, 8, Rotation::North),
            [Piece::new(Shape::T)],
            9,
        );
        assert_eq!(board.apply(GameAction::SoftDrop), Ok(ApplyOutcome::GameOver));
        assert!(board.is_game_over());

        let occupied = board.grid().occupied_count();
        assert_eq!(board.apply(GameAction::HardDrop), Ok(ApplyOutcome::GameOver));
        assert_eq!(board.grid().occupied_count(), occupied);
    }

    #[test]
    fn test_kick_direction_by_half() {
        let board = empty_board(10, 10, Piece::new(Shape::T));
        assert_eq!(board.kick_direction(&Piece::at(Shape::T, 4, 1, Rotation::North)), Some(1));
        assert_eq!(board.kick_direction(&Piece::at(Shape::T, 5, 1, Rotation::North)), None);
        assert_eq!(board.kick_direction(&Piece::at(Shape::T, 6, 1, Rotation::North)), Some(-1));
    }
}
