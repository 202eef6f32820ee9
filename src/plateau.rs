//! The bounded grid rovers roam on.

use crate::error::{Axis, Error, Result};
use glam::IVec2;
use serde::Serialize;

/// A rectangular plateau with its lower-left corner fixed at the origin.
///
/// Both bounds are inclusive: a `5 5` plateau has 36 grid points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Plateau {
    max: IVec2,
}

impl Plateau {
    pub const MIN: IVec2 = IVec2::ZERO;

    /// Creates a plateau spanning `(0, 0)..=(max_x, max_y)`.
    ///
    /// Fails with [`Error::InvalidDimension`] when either bound is not
    /// strictly greater than zero.
    pub fn new(max_x: i32, max_y: i32) -> Result<Self> {
        if max_x <= Self::MIN.x {
            return Err(Error::InvalidDimension {
                axis: Axis::X,
                value: max_x,
            });
        }
        if max_y <= Self::MIN.y {
            return Err(Error::InvalidDimension {
                axis: Axis::Y,
                value: max_y,
            });
        }
        Ok(Self {
            max: IVec2::new(max_x, max_y),
        })
    }

    pub fn min_x(&self) -> i32 {
        Self::MIN.x
    }

    pub fn min_y(&self) -> i32 {
        Self::MIN.y
    }

    pub fn max_x(&self) -> i32 {
        self.max.x
    }

    pub fn max_y(&self) -> i32 {
        self.max.y
    }

    /// Upper-right corner.
    pub fn max(&self) -> IVec2 {
        self.max
    }

    pub fn is_in_plateau(&self, x: i32, y: i32) -> bool {
        self.contains(IVec2::new(x, y))
    }

    pub fn contains(&self, point: IVec2) -> bool {
        point.cmpge(Self::MIN).all() && point.cmple(self.max).all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_degenerate_sizes() {
        assert!(Plateau::new(1, 1).is_ok());
        assert_eq!(
            Plateau::new(0, 0),
            Err(Error::InvalidDimension {
                axis: Axis::X,
                value: 0
            })
        );
        assert_eq!(
            Plateau::new(10, -1),
            Err(Error::InvalidDimension {
                axis: Axis::Y,
                value: -1
            })
        );
        assert!(Plateau::new(-1, 10).is_err());
        assert!(Plateau::new(-1, -1).is_err());
    }

    #[test]
    fn bounds_are_inclusive() {
        let plateau = Plateau::new(5, 5).unwrap();

        assert!(plateau.is_in_plateau(3, 3));
        assert!(plateau.is_in_plateau(0, 0));
        assert!(plateau.is_in_plateau(5, 0));
        assert!(plateau.is_in_plateau(0, 5));
        assert!(plateau.is_in_plateau(5, 5));

        assert!(!plateau.is_in_plateau(-1, 0));
        assert!(!plateau.is_in_plateau(0, -1));
        assert!(!plateau.is_in_plateau(0, 6));
        assert!(!plateau.is_in_plateau(6, 0));
        assert!(!plateau.is_in_plateau(6, 6));
        assert!(!plateau.is_in_plateau(-1, 6));
    }
}
