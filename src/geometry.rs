use crate::consts::CHARACTER_SET_SIZE;
use crate::error::{WbResult, WheelboardError};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// One of the four sectors of the wheel, in clockwise order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Top,
    Right,
    Bottom,
    Left,
}

impl Direction {
    pub fn opposite(self) -> Self {
        Self::from_ordinal(self as usize + 2)
    }

    pub fn clockwise(self) -> Self {
        Self::from_ordinal(self as usize + 1)
    }

    pub fn counter_clockwise(self) -> Self {
        Self::from_ordinal(self as usize + 3)
    }

    fn from_ordinal(ordinal: usize) -> Self {
        match ordinal % 4 {
            0 => Self::Top,
            1 => Self::Right,
            2 => Self::Bottom,
            _ => Self::Left,
        }
    }
}

/// Ordinal of a character within a multi-character stroke.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CharacterPosition {
    First,
    Second,
    Third,
    Fourth,
}

/// Spin of the rotational walk that selects a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

impl Rotation {
    pub fn step(self, direction: Direction) -> Direction {
        match self {
            Self::Clockwise => direction.clockwise(),
            Self::CounterClockwise => direction.counter_clockwise(),
        }
    }
}

/// An octant of the wheel: a sector plus the adjacent sector it leans into.
///
/// Only adjacent direction pairs are valid, giving 8 octants. The pair order
/// matters: RIGHT/BOTTOM and BOTTOM/RIGHT are distinct octants with opposite
/// gesture spins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quadrant {
    sector: Direction,
    part: Direction,
}

impl Quadrant {
    pub fn new(sector: Direction, part: Direction) -> WbResult<Self> {
        if sector == part || sector == part.opposite() {
            return Err(WheelboardError::Validation(format!(
                "Quadrant {}/{} is not an octant: sector and part must be adjacent",
                sector, part
            )));
        }
        Ok(Self { sector, part })
    }

    pub fn sector(&self) -> Direction {
        self.sector
    }

    pub fn part(&self) -> Direction {
        self.part
    }

    /// All 8 octants, in no particular order.
    pub fn all() -> impl Iterator<Item = Quadrant> {
        Direction::iter().flat_map(|sector| {
            [
                Quadrant {
                    sector,
                    part: sector.clockwise(),
                },
                Quadrant {
                    sector,
                    part: sector.counter_clockwise(),
                },
            ]
        })
    }

    /// The spin a stroke takes through this octant: sector first, part second.
    pub fn rotation(&self) -> Rotation {
        if self.part == self.sector.clockwise() {
            Rotation::Clockwise
        } else {
            Rotation::CounterClockwise
        }
    }

    /// Slot of the `position`-th character of this octant in a layer's
    /// 32-slot character table.
    ///
    /// Each 90-degree quadrant group owns 8 consecutive slots; the two
    /// octants of a group interleave on even/odd slots, with the
    /// clockwise-spinning octant on the even ones.
    pub fn character_index_in_string(&self, position: CharacterPosition) -> usize {
        let (lead, spin_offset) = match self.rotation() {
            Rotation::Clockwise => (self.sector, 0),
            Rotation::CounterClockwise => (self.part, 1),
        };
        let group = (lead as usize + 3) % 4;
        group * (CHARACTER_SET_SIZE / 4) + spin_offset + 2 * position as usize
    }

    /// The octant diametrically opposite the `position`-th character slot.
    ///
    /// The slots of one octant sit at increasing rotational depth, so each
    /// successive position advances the opposite by 90 degrees clockwise.
    pub fn opposite(&self, position: CharacterPosition) -> Quadrant {
        match position {
            CharacterPosition::First => Quadrant {
                sector: self.sector,
                part: self.part.opposite(),
            },
            CharacterPosition::Second => Quadrant {
                sector: self.part,
                part: self.sector,
            },
            CharacterPosition::Third => Quadrant {
                sector: self.sector.opposite(),
                part: self.part,
            },
            CharacterPosition::Fourth => Quadrant {
                sector: self.part.opposite(),
                part: self.sector.opposite(),
            },
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.sector, self.part)
    }
}
