//! Property-based tests for the plateau, the orientation ring and rover moves.

use plateau_rover::{Error, Orientation, Plateau, Rover};
use proptest::prelude::*;
use std::sync::Arc;

fn orientation() -> impl Strategy<Value = Orientation> {
    prop::sample::select(Orientation::CLOCKWISE.to_vec())
}

// =============================================================================
// Plateau Bounds
// =============================================================================

proptest! {
    /// All four corners are on the plateau; one step past any edge is not.
    #[test]
    fn prop_corners_inside_edges_outside(max_x in 1..1000i32, max_y in 1..1000i32) {
        let p = Plateau::new(max_x, max_y).unwrap();

        prop_assert!(p.is_in_plateau(0, 0));
        prop_assert!(p.is_in_plateau(max_x, 0));
        prop_assert!(p.is_in_plateau(0, max_y));
        prop_assert!(p.is_in_plateau(max_x, max_y));

        prop_assert!(!p.is_in_plateau(-1, 0));
        prop_assert!(!p.is_in_plateau(0, -1));
        prop_assert!(!p.is_in_plateau(max_x + 1, 0));
        prop_assert!(!p.is_in_plateau(0, max_y + 1));
    }

    /// Non-positive dimensions never build a plateau.
    #[test]
    fn prop_degenerate_dimensions_rejected(bad in -1000..=0i32, good in 1..1000i32) {
        prop_assert!(Plateau::new(bad, good).is_err());
        prop_assert!(Plateau::new(good, bad).is_err());
    }
}

// =============================================================================
// Orientation Ring
// =============================================================================

proptest! {
    /// Left and right are inverses.
    #[test]
    fn prop_turns_are_inverse(o in orientation()) {
        prop_assert_eq!(o.turn_right().turn_left(), o);
        prop_assert_eq!(o.turn_left().turn_right(), o);
    }

    /// Four turns in the same direction close the cycle.
    #[test]
    fn prop_cycle_closes(o in orientation()) {
        prop_assert_eq!(o.turn_left().turn_left().turn_left().turn_left(), o);
        prop_assert_eq!(o.turn_right().turn_right().turn_right().turn_right(), o);
    }

    /// Symbols round-trip through the parser.
    #[test]
    fn prop_symbol_round_trip(o in orientation()) {
        prop_assert_eq!(Orientation::try_from(o.symbol()), Ok(o));
    }
}

// =============================================================================
// Rover
// =============================================================================

proptest! {
    /// A freshly spawned rover reports exactly what it was spawned with.
    #[test]
    fn prop_spawn_round_trip(x in 0..=20i32, y in 0..=20i32, o in orientation()) {
        let plateau = Arc::new(Plateau::new(20, 20).unwrap());
        let rover = Rover::new(plateau, x, y, o).unwrap();
        prop_assert_eq!((rover.x(), rover.y(), rover.orientation()), (x, y, o));
    }

    /// A move off the plateau fails and changes nothing.
    #[test]
    fn prop_failed_move_is_idempotent(along in 0..=8i32, o in orientation()) {
        let plateau = Arc::new(Plateau::new(8, 8).unwrap());
        // Put the rover on the edge it is facing.
        let (x, y) = match o {
            Orientation::North => (along, 8),
            Orientation::East => (8, along),
            Orientation::South => (along, 0),
            Orientation::West => (0, along),
        };
        let mut rover = Rover::new(plateau, x, y, o).unwrap();
        let before = rover.snapshot();

        let err = rover.move_forward().map(|_| ()).unwrap_err();
        let delta = o.delta();
        let (nx, ny) = (i64::from(x + delta.x), i64::from(y + delta.y));
        prop_assert_eq!(err, Error::OutOfBounds { x: nx, y: ny });
        prop_assert_eq!(rover.snapshot(), before);
    }
}
