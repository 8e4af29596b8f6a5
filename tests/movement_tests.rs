use std::collections::HashSet;
use strum::IntoEnumIterator;
use wheelboard::consts::{DEFAULT_LAYER, HIDDEN_LAYER};
use wheelboard::geometry::{CharacterPosition, Direction, Quadrant};
use wheelboard::movement::{movement_sequence, FingerPosition};

use CharacterPosition::{First, Fourth};
use Direction::{Bottom, Right};
use FingerPosition::InsideCircle;

fn octant(sector: Direction, part: Direction) -> Quadrant {
    Quadrant::new(sector, part).unwrap()
}

#[test]
fn test_default_layer_first_character() {
    let sequence = movement_sequence(DEFAULT_LAYER, octant(Right, Bottom), First);
    assert_eq!(
        sequence,
        vec![
            InsideCircle,
            FingerPosition::Right,
            FingerPosition::Bottom,
            InsideCircle
        ]
    );
}

#[test]
fn test_fourth_character_laps_past_the_start() {
    let sequence = movement_sequence(DEFAULT_LAYER, octant(Right, Bottom), Fourth);
    assert_eq!(
        sequence,
        vec![
            InsideCircle,
            FingerPosition::Right,
            FingerPosition::Bottom,
            FingerPosition::Left,
            FingerPosition::Top,
            FingerPosition::Right,
            InsideCircle
        ]
    );
}

#[test]
fn test_mirrored_octant_spins_the_other_way() {
    let sequence = movement_sequence(DEFAULT_LAYER, octant(Bottom, Right), First);
    assert_eq!(
        sequence,
        vec![
            InsideCircle,
            FingerPosition::Bottom,
            FingerPosition::Right,
            InsideCircle
        ]
    );
}

#[test]
fn test_hidden_layer_has_no_strokes() {
    assert!(movement_sequence(HIDDEN_LAYER, octant(Right, Bottom), First).is_empty());
}

#[test]
fn test_extra_layer_prefix_oscillates_on_the_sector() {
    let sequence = movement_sequence(3, octant(Right, Bottom), First);
    assert_eq!(
        sequence,
        vec![
            InsideCircle,
            FingerPosition::Right,
            InsideCircle,
            FingerPosition::Right,
            InsideCircle,
            FingerPosition::Right,
            FingerPosition::Bottom,
            InsideCircle
        ]
    );
}

#[test]
fn test_sequence_length_grows_with_layer_and_position() {
    let quadrant = octant(Right, Bottom);
    for layer in DEFAULT_LAYER..=3 {
        for position in CharacterPosition::iter() {
            let sequence = movement_sequence(layer, quadrant, position);
            let expected = 2 + 2 * (layer - DEFAULT_LAYER) + position as usize + 2;
            assert_eq!(sequence.len(), expected);
        }
    }
}

#[test]
fn test_default_layer_strokes_are_distinct() {
    // Every character slot needs its own gesture.
    let mut seen = HashSet::new();
    for quadrant in Quadrant::all() {
        for position in CharacterPosition::iter() {
            let sequence = movement_sequence(DEFAULT_LAYER, quadrant, position);
            assert!(
                seen.insert(sequence.clone()),
                "stroke collision at {} {}",
                quadrant,
                position
            );
        }
    }
    assert_eq!(seen.len(), 32);
}
