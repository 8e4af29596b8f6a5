use wheelboard::actions::{ActionType, KeyboardAction};
use wheelboard::consts::{DEFAULT_LAYER, MAX_LAYERS};
use wheelboard::error::WheelboardError;
use wheelboard::keyboard_data::KeyboardData;
use wheelboard::movement::FingerPosition;

fn text_action(layer: usize) -> KeyboardAction {
    KeyboardAction::new(
        ActionType::InputText,
        "a".to_string(),
        "A".to_string(),
        0,
        0,
        layer,
    )
}

#[test]
fn test_empty_data_has_no_layers() {
    let data = KeyboardData::new();
    assert_eq!(data.total_layers(), 0);
    assert_eq!(data.action_count(), 0);
    assert_eq!(data.lower_case_characters(DEFAULT_LAYER), "");
}

#[test]
fn test_action_lookup_by_slice() {
    let mut data = KeyboardData::new();
    let sequence = vec![FingerPosition::InsideCircle, FingerPosition::Top];
    data.add_action(sequence.clone(), text_action(DEFAULT_LAYER));

    assert_eq!(data.action(&sequence).unwrap().lower_case, "a");
    assert!(data.action(&[FingerPosition::InsideCircle]).is_none());
}

#[test]
fn test_duplicate_sequence_overwrites() {
    let mut data = KeyboardData::new();
    let sequence = vec![FingerPosition::InsideCircle, FingerPosition::Top];
    data.add_action(sequence.clone(), text_action(DEFAULT_LAYER));
    data.add_action(sequence.clone(), text_action(2));

    assert_eq!(data.action_count(), 1);
    assert_eq!(data.action(&sequence).unwrap().layer, 2);
}

#[test]
fn test_total_layers_tracks_tables_and_actions() {
    let mut data = KeyboardData::new();
    data.set_lower_case_characters(2, "x".repeat(32)).unwrap();
    assert_eq!(data.total_layers(), 2);

    data.add_action(
        vec![FingerPosition::InsideCircle, FingerPosition::Left],
        text_action(4),
    );
    assert_eq!(data.total_layers(), 4);
}

#[test]
fn test_layer_bounds_are_enforced() {
    let mut data = KeyboardData::new();

    let hidden = data.set_lower_case_characters(0, String::new());
    assert!(matches!(hidden, Err(WheelboardError::Validation(_))));

    let beyond = data.set_upper_case_characters(MAX_LAYERS + 1, String::new());
    assert!(matches!(beyond, Err(WheelboardError::Validation(_))));

    assert!(data
        .set_lower_case_characters(MAX_LAYERS, String::new())
        .is_ok());
}
