//! Pieces tests - shape catalog and rotation geometry

use termtris::core::Piece;
use termtris::types::{Rotation, Shape, SPAWN_X, SPAWN_Y};

const ROTATIONS: [Rotation; 4] = [
    Rotation::North,
    Rotation::East,
    Rotation::South,
    Rotation::West,
];

#[test]
fn test_every_orientation_has_four_distinct_cells() {
    for shape in Shape::ALL {
        for rotation in ROTATIONS {
            let cells = Piece::at(shape, 5, 5, rotation).locations();
            for i in 0..4 {
                for j in (i + 1)..4 {
                    assert_ne!(cells[i], cells[j], "{:?} {:?} repeats a cell", shape, rotation);
                }
            }
        }
    }
}

#[test]
fn test_four_rotations_return_to_start() {
    for shape in Shape::ALL {
        let start = Piece::at(shape, 4, 6, Rotation::North);
        let mut piece = start;
        for _ in 0..4 {
            piece = piece.rotated();
        }
        assert_eq!(piece, start);
        assert_eq!(piece.locations(), start.locations());
    }
}

#[test]
fn test_i_piece_locations() {
    let north = Piece::at(Shape::I, 5, 5, Rotation::North);
    assert_eq!(north.locations(), [(5, 4), (5, 5), (5, 6), (5, 7)]);

    let east = north.rotated();
    assert_eq!(east.locations(), [(6, 5), (5, 5), (4, 5), (3, 5)]);

    let south = east.rotated();
    assert_eq!(south.locations(), [(5, 6), (5, 5), (5, 4), (5, 3)]);

    let west = south.rotated();
    assert_eq!(west.locations(), [(4, 5), (5, 5), (6, 5), (7, 5)]);
}

#[test]
fn test_reference_cell_is_part_of_every_shape() {
    for shape in Shape::ALL {
        for rotation in ROTATIONS {
            let piece = Piece::at(shape, 3, 3, rotation);
            assert!(piece.locations().contains(&(3, 3)));
        }
    }
}

#[test]
fn test_reset_after_moves() {
    let mut piece = Piece::new(Shape::Z).shifted(-3, 4).rotated().rotated();
    assert_ne!(piece, Piece::new(Shape::Z));

    piece.reset();
    assert_eq!((piece.x, piece.y), (SPAWN_X, SPAWN_Y));
    assert_eq!(piece.rotation, Rotation::North);
    assert_eq!(piece.shape, Shape::Z);
}

#[test]
fn test_locations_may_leave_the_board() {
    // Pieces know nothing about bounds
    let piece = Piece::at(Shape::I, 0, 0, Rotation::North);
    assert!(piece.locations().contains(&(0, -1)));
}
