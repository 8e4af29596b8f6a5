use crate::consts::{DEFAULT_LAYER, HIDDEN_LAYER};
use crate::geometry::{CharacterPosition, Direction, Quadrant};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// The touch-sampling alphabet. The last four variants are the outer
/// sectors of the wheel; the rest are synthetic markers emitted by the
/// touch pipeline.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum FingerPosition {
    NoTouch,
    LongPress,
    LongPressEnd,
    InsideCircle,
    Top,
    Left,
    Bottom,
    Right,
}

impl From<Direction> for FingerPosition {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Top => Self::Top,
            Direction::Left => Self::Left,
            Direction::Bottom => Self::Bottom,
            Direction::Right => Self::Right,
        }
    }
}

/// A stroke, as the sequence of positions the finger passes through.
pub type MovementSequence = Vec<FingerPosition>;

/// Canonical stroke selecting the `position`-th character of `quadrant`
/// on `layer`.
///
/// The stroke starts and ends inside the circle. Layers above the default
/// are selected by one sector oscillation each before the rotational walk;
/// the walk itself crosses `2 + position ordinal` sector boundaries,
/// starting at the octant's sector and spinning toward its part.
///
/// The hidden layer has no canonical strokes and yields an empty sequence.
pub fn movement_sequence(
    layer: usize,
    quadrant: Quadrant,
    position: CharacterPosition,
) -> MovementSequence {
    if layer == HIDDEN_LAYER {
        return Vec::new();
    }

    let crossings = position as usize + 2;
    let mut sequence = Vec::with_capacity(2 + 2 * (layer - DEFAULT_LAYER) + crossings);

    sequence.push(FingerPosition::InsideCircle);
    for _ in DEFAULT_LAYER..layer {
        sequence.push(quadrant.sector().into());
        sequence.push(FingerPosition::InsideCircle);
    }

    let rotation = quadrant.rotation();
    let mut direction = quadrant.sector();
    for _ in 0..crossings {
        sequence.push(direction.into());
        direction = rotation.step(direction);
    }

    sequence.push(FingerPosition::InsideCircle);
    sequence
}
