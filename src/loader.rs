use crate::actions::{ActionType, KeyboardAction};
use crate::consts::{CHARACTERS_PER_QUADRANT, CHARACTER_SET_SIZE, DEFAULT_LAYER, HIDDEN_LAYER};
use crate::error::WbResult;
use crate::geometry::{CharacterPosition, Direction, Quadrant};
use crate::keyboard_data::KeyboardData;
use crate::movement::{movement_sequence, FingerPosition};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::{info, warn};

/// Selector for the up-to-five layers beyond the default one.
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
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ExtraLayer {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
}

impl ExtraLayer {
    pub fn layer(self) -> usize {
        // Extra layers start right above the default layer.
        self as usize + DEFAULT_LAYER + 1
    }
}

#[derive(Debug, Deserialize)]
struct LayoutDocument {
    layout: LayoutNode,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "snake_case")]
struct LayoutNode {
    hidden: Vec<ActionNode>,
    default: Option<LayerNode>,
    extra_layers: BTreeMap<ExtraLayer, LayerNode>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LayerNode {
    sectors: BTreeMap<Direction, SectorNode>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SectorNode {
    parts: BTreeMap<Direction, Vec<Option<ActionNode>>>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, rename_all = "snake_case")]
struct ActionNode {
    action_type: ActionType,
    lower_case: String,
    upper_case: String,
    key_code: u16,
    flags: u16,
    movement_sequence: Vec<FingerPosition>,
}

impl ActionNode {
    fn is_empty(&self) -> bool {
        self.lower_case.is_empty() && self.upper_case.is_empty() && self.key_code == 0
    }
}

/// Loads a layout file into [`KeyboardData`]. Dispatches on the file
/// extension: `.json` documents go through serde_json, everything else is
/// treated as YAML.
pub fn load_keyboard_data<P: AsRef<Path>>(path: P) -> WbResult<KeyboardData> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let data = if path.extension().and_then(OsStr::to_str) == Some("json") {
        from_json_str(&content)?
    } else {
        from_yaml_str(&content)?
    };

    info!(
        "Loaded layout {:?}: {} layers, {} actions",
        path,
        data.total_layers(),
        data.action_count()
    );
    Ok(data)
}

/// Loads a layout file and reports how many layers it defines. A layout
/// that parses but defines nothing reports 0 layers.
pub fn validate_file<P: AsRef<Path>>(path: P) -> WbResult<usize> {
    Ok(load_keyboard_data(path)?.total_layers())
}

pub fn from_yaml_str(content: &str) -> WbResult<KeyboardData> {
    let document: LayoutDocument = serde_yml::from_str(content)?;
    build(document.layout)
}

pub fn from_json_str(content: &str) -> WbResult<KeyboardData> {
    let document: LayoutDocument = serde_json::from_str(content)?;
    build(document.layout)
}

fn build(layout: LayoutNode) -> WbResult<KeyboardData> {
    let mut data = KeyboardData::new();

    if !layout.hidden.is_empty() {
        add_hidden_actions(&mut data, &layout.hidden);
    }

    // Extra layers are unreachable without a default layer to pass through.
    if !layout.extra_layers.is_empty() && layout.default.is_none() {
        warn!("Layout defines extra layers but no default layer; ignoring them");
        return Ok(data);
    }

    if let Some(default_layer) = &layout.default {
        add_layer(&mut data, DEFAULT_LAYER, default_layer)?;
    }

    for (extra, layer_node) in &layout.extra_layers {
        add_layer(&mut data, extra.layer(), layer_node)?;
    }

    Ok(data)
}

fn add_hidden_actions(data: &mut KeyboardData, actions: &[ActionNode]) {
    for action in actions {
        if action.movement_sequence.is_empty() {
            warn!("Skipping hidden action without a movement sequence");
            continue;
        }

        data.add_action(
            action.movement_sequence.clone(),
            KeyboardAction::new(
                action.action_type,
                action.lower_case.clone(),
                action.upper_case.clone(),
                action.key_code,
                action.flags,
                HIDDEN_LAYER,
            ),
        );
    }
}

fn add_layer(data: &mut KeyboardData, layer: usize, layer_node: &LayerNode) -> WbResult<()> {
    let mut lower_table = CharacterTable::new();
    let mut upper_table = CharacterTable::new();

    for (&sector, sector_node) in &layer_node.sectors {
        for (&part, actions) in &sector_node.parts {
            let quadrant = Quadrant::new(sector, part)?;
            add_quadrant_actions(
                data,
                layer,
                quadrant,
                actions,
                &mut lower_table,
                &mut upper_table,
            );
        }
    }

    data.set_lower_case_characters(layer, lower_table.into_string())?;
    data.set_upper_case_characters(layer, upper_table.into_string())?;
    Ok(())
}

fn add_quadrant_actions(
    data: &mut KeyboardData,
    layer: usize,
    quadrant: Quadrant,
    actions: &[Option<ActionNode>],
    lower_table: &mut CharacterTable,
    upper_table: &mut CharacterTable,
) {
    let positions = CharacterPosition::iter();

    for (slot, position) in actions
        .iter()
        .take(CHARACTERS_PER_QUADRANT)
        .zip(positions)
    {
        let Some(action) = slot else { continue };
        if action.is_empty() {
            continue;
        }

        let mut action = action.clone();
        let sequence = if action.movement_sequence.is_empty() {
            movement_sequence(layer, quadrant, position)
        } else {
            action.movement_sequence.clone()
        };

        let index = quadrant.character_index_in_string(position);

        if let Some(lower) = action.lower_case.chars().next() {
            lower_table.set(index, lower);

            if action.upper_case.is_empty() {
                action.upper_case = action.lower_case.to_uppercase();
            }
        }

        if let Some(upper) = action.upper_case.chars().next() {
            upper_table.set(index, upper);
        }

        data.add_action(
            sequence,
            KeyboardAction::new(
                action.action_type,
                action.lower_case,
                action.upper_case,
                action.key_code,
                action.flags,
                layer,
            ),
        );
    }
}

/// Per-layer 32-slot table, materialized on first write so layers without
/// any characters keep an empty table.
struct CharacterTable {
    slots: Vec<char>,
}

impl CharacterTable {
    fn new() -> Self {
        Self { slots: Vec::new() }
    }

    fn set(&mut self, index: usize, character: char) {
        if self.slots.is_empty() {
            self.slots.resize(CHARACTER_SET_SIZE, '\0');
        }
        self.slots[index] = character;
    }

    fn into_string(self) -> String {
        self.slots.into_iter().collect()
    }
}
