//! Line segments drawn inside a cell.
//!
//! A cell can show a line on any of its four sides, but only the
//! combinations a path can actually take through one cell are legal:
//! nothing, a single stub, a straight pass, or a corner.
//!
//! ```text
//!  lowerLeft   upperLeft   lowerRight  upperRight  horizontal  vertical
//!    ──┐          ──┘         ┌──         └──          ───         │
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::position::Key;

bitflags::bitflags! {
    /// Set of directions a cell's lines reach toward.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LineSet: u8 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const TOP = 1 << 2;
        const BOTTOM = 1 << 3;

        const LOWER_LEFT = Self::LEFT.bits() | Self::BOTTOM.bits();
        const UPPER_LEFT = Self::LEFT.bits() | Self::TOP.bits();
        const LOWER_RIGHT = Self::RIGHT.bits() | Self::BOTTOM.bits();
        const UPPER_RIGHT = Self::RIGHT.bits() | Self::TOP.bits();
        const HORIZONTAL = Self::LEFT.bits() | Self::RIGHT.bits();
        const VERTICAL = Self::TOP.bits() | Self::BOTTOM.bits();
    }
}

impl LineSet {
    /// Lines connecting two sides of a cell.
    ///
    /// Returns `None` when both sides are the same (a drag that never left
    /// its starting edge draws nothing).
    pub fn between(a: Side, b: Side) -> Option<Self> {
        use Side::*;

        match (a, b) {
            (Left, Left) | (Right, Right) | (Top, Top) | (Bottom, Bottom) => None,
            (Left, Right) | (Right, Left) => Some(Self::HORIZONTAL),
            (Top, Bottom) | (Bottom, Top) => Some(Self::VERTICAL),
            (Left, Bottom) | (Bottom, Left) => Some(Self::LOWER_LEFT),
            (Left, Top) | (Top, Left) => Some(Self::UPPER_LEFT),
            (Right, Bottom) | (Bottom, Right) => Some(Self::LOWER_RIGHT),
            (Right, Top) | (Top, Right) => Some(Self::UPPER_RIGHT),
        }
    }

    /// The line leaving a cell in the direction of travel.
    pub fn toward(key: Key) -> Self {
        match key {
            Key::LeftArrow => Self::LEFT,
            Key::RightArrow => Self::RIGHT,
            Key::UpArrow => Self::TOP,
            Key::DownArrow => Self::BOTTOM,
        }
    }

    /// The line entering a cell from the direction of travel.
    pub fn away_from(key: Key) -> Self {
        match key {
            Key::LeftArrow => Self::RIGHT,
            Key::RightArrow => Self::LEFT,
            Key::UpArrow => Self::BOTTOM,
            Key::DownArrow => Self::TOP,
        }
    }
}

/// One side of a cell, as resolved from pointer coordinates upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

impl Side {
    /// Tie-break order for nearest-edge resolution.
    pub const ALL: [Side; 4] = [Side::Left, Side::Right, Side::Top, Side::Bottom];

    pub fn line(&self) -> LineSet {
        match self {
            Self::Left => LineSet::LEFT,
            Self::Right => LineSet::RIGHT,
            Self::Top => LineSet::TOP,
            Self::Bottom => LineSet::BOTTOM,
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
        }
    }
}

/// Error when a bit pattern is not one of the legal line combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("illegal line combination {0:#06b}")]
pub struct IllegalLineSet(pub u8);

/// A [`LineSet`] that a path can actually draw through one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct LegalLineSet(LineSet);

impl LegalLineSet {
    pub const NONE: Self = Self(LineSet::empty());
    pub const LOWER_LEFT: Self = Self(LineSet::LOWER_LEFT);
    pub const UPPER_LEFT: Self = Self(LineSet::UPPER_LEFT);
    pub const LOWER_RIGHT: Self = Self(LineSet::LOWER_RIGHT);
    pub const UPPER_RIGHT: Self = Self(LineSet::UPPER_RIGHT);
    pub const HORIZONTAL: Self = Self(LineSet::HORIZONTAL);
    pub const VERTICAL: Self = Self(LineSet::VERTICAL);

    /// All eleven legal combinations.
    pub const LEGAL: [LineSet; 11] = [
        LineSet::empty(),
        LineSet::LEFT,
        LineSet::RIGHT,
        LineSet::TOP,
        LineSet::BOTTOM,
        LineSet::HORIZONTAL,
        LineSet::VERTICAL,
        LineSet::LOWER_LEFT,
        LineSet::LOWER_RIGHT,
        LineSet::UPPER_LEFT,
        LineSet::UPPER_RIGHT,
    ];

    /// Validate a line set, rejecting three- and four-sided combinations.
    pub fn new(lines: LineSet) -> Option<Self> {
        Self::is_legal(lines).then_some(Self(lines))
    }

    pub fn is_legal(lines: LineSet) -> bool {
        Self::LEGAL.contains(&lines)
    }

    /// Add `other` to these lines, or `None` if the result is illegal.
    pub fn union(&self, other: LineSet) -> Option<Self> {
        Self::new(self.0.union(other))
    }

    pub fn lines(&self) -> LineSet {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, lines: LineSet) -> bool {
        self.0.contains(lines)
    }
}

impl Default for LegalLineSet {
    fn default() -> Self {
        Self::NONE
    }
}

impl TryFrom<LineSet> for LegalLineSet {
    type Error = IllegalLineSet;

    fn try_from(lines: LineSet) -> Result<Self, Self::Error> {
        Self::new(lines).ok_or(IllegalLineSet(lines.bits()))
    }
}

impl TryFrom<u8> for LegalLineSet {
    type Error = IllegalLineSet;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        let lines = LineSet::from_bits(bits).ok_or(IllegalLineSet(bits))?;
        Self::try_from(lines)
    }
}

impl From<LegalLineSet> for u8 {
    fn from(lines: LegalLineSet) -> Self {
        lines.0.bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_between_covers_all_side_pairs() {
        let mut straight = 0;
        let mut corner = 0;
        for a in Side::ALL {
            for b in Side::ALL {
                match LineSet::between(a, b) {
                    None => assert_eq!(a, b),
                    Some(lines) => {
                        assert_ne!(a, b);
                        assert!(LegalLineSet::is_legal(lines));
                        assert_eq!(lines.bits().count_ones(), 2);
                        assert_eq!(LineSet::between(b, a), Some(lines));
                        if b == a.opposite() {
                            straight += 1;
                        } else {
                            corner += 1;
                        }
                    }
                }
            }
        }
        assert_eq!(straight, 4);
        assert_eq!(corner, 8);
    }

    #[test]
    fn test_between_named_combinations() {
        assert_eq!(
            LineSet::between(Side::Top, Side::Right),
            Some(LineSet::UPPER_RIGHT)
        );
        assert_eq!(
            LineSet::between(Side::Bottom, Side::Left),
            Some(LineSet::LOWER_LEFT)
        );
        assert_eq!(
            LineSet::between(Side::Left, Side::Right),
            Some(LineSet::HORIZONTAL)
        );
    }

    #[test]
    fn test_illegal_combinations_rejected() {
        assert!(LegalLineSet::new(LineSet::LEFT | LineSet::RIGHT | LineSet::TOP).is_none());
        assert!(LegalLineSet::new(LineSet::all()).is_none());
        assert_eq!(
            LegalLineSet::try_from(0b0111u8),
            Err(IllegalLineSet(0b0111))
        );
        assert_eq!(LegalLineSet::try_from(0b1_0000u8), Err(IllegalLineSet(0b1_0000)));
    }

    #[test]
    fn test_union() {
        let left = LegalLineSet::new(LineSet::LEFT).unwrap();
        assert_eq!(left.union(LineSet::RIGHT), Some(LegalLineSet::HORIZONTAL));
        assert_eq!(left.union(LineSet::LEFT), Some(left));
        assert!(LegalLineSet::HORIZONTAL.union(LineSet::TOP).is_none());
    }

    #[test]
    fn test_legal_count() {
        let legal = (0u8..16)
            .filter(|bits| LegalLineSet::try_from(*bits).is_ok())
            .count();
        assert_eq!(legal, 11);
    }

    #[test]
    fn test_toward_and_away_are_opposite() {
        for key in Key::ALL {
            let toward = LineSet::toward(key);
            let away = LineSet::away_from(key);
            assert_ne!(toward, away);
            assert!(LegalLineSet::is_legal(toward | away));
            assert_eq!(toward.bits().count_ones(), 1);
        }
    }

    #[test]
    fn test_serializes_as_bits() {
        let json = serde_json::to_string(&LegalLineSet::UPPER_RIGHT).unwrap();
        assert_eq!(json, "6");
        let lines: LegalLineSet = serde_json::from_str("9").unwrap();
        assert_eq!(lines, LegalLineSet::LOWER_LEFT);
        assert!(serde_json::from_str::<LegalLineSet>("15").is_err());
    }
}
