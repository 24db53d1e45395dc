//! Walking cursor for ray and step generation.

use super::offset::Offset;
use super::square::Square;

/// A cursor anchored at a piece's square that walks one offset at a time.
///
/// A step that would leave the board is refused and leaves the cursor where
/// it was. `reset` returns to the origin so each direction starts cleanly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveCandidate {
    origin: Square,
    current: Square,
    distance: u8,
}

impl MoveCandidate {
    #[must_use]
    pub const fn new(origin: Square) -> Self {
        MoveCandidate {
            origin,
            current: origin,
            distance: 0,
        }
    }

    /// Advance by `offset`. Returns false (and does not move) at the board edge.
    pub fn step(&mut self, offset: Offset) -> bool {
        match self.current.offset(offset) {
            Some(next) => {
                self.current = next;
                self.distance += 1;
                true
            }
            None => false,
        }
    }

    pub fn reset(&mut self) {
        self.current = self.origin;
        self.distance = 0;
    }

    #[inline]
    #[must_use]
    pub const fn origin(&self) -> Square {
        self.origin
    }

    #[inline]
    #[must_use]
    pub const fn current(&self) -> Square {
        self.current
    }

    /// Steps taken since construction or the last reset.
    #[inline]
    #[must_use]
    pub const fn distance(&self) -> u8 {
        self.distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_walks_until_edge() {
        let mut cursor = MoveCandidate::new(sq("c3"));
        let mut visited = Vec::new();
        while cursor.step(Offset::NORTH_EAST) {
            visited.push(cursor.current());
        }
        assert_eq!(visited, vec![sq("d4"), sq("e5"), sq("f6"), sq("g7"), sq("h8")]);
        assert_eq!(cursor.current(), sq("h8"));
        assert_eq!(cursor.distance(), 5);
    }

    #[test]
    fn test_refused_step_keeps_position() {
        let mut cursor = MoveCandidate::new(sq("a1"));
        assert!(!cursor.step(Offset::WEST));
        assert_eq!(cursor.current(), sq("a1"));
        assert_eq!(cursor.distance(), 0);
    }

    #[test]
    fn test_reset_returns_to_origin() {
        let mut cursor = MoveCandidate::new(sq("d4"));
        assert!(cursor.step(Offset::KNIGHT[0]));
        assert_eq!(cursor.current(), sq("e6"));
        cursor.reset();
        assert_eq!(cursor.current(), cursor.origin());
        assert_eq!(cursor.distance(), 0);
    }
}
