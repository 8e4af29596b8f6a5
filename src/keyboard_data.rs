use crate::actions::KeyboardAction;
use crate::consts::{DEFAULT_LAYER, MAX_LAYERS};
use crate::error::{WbResult, WheelboardError};
use crate::movement::{FingerPosition, MovementSequence};
use std::collections::HashMap;

/// Everything a loaded layout resolves to: stroke lookup plus the per-layer
/// character tables the renderer draws from.
///
/// Layers are numbered 1 (default) through [`MAX_LAYERS`]; layer 0 is the
/// hidden layer, which carries actions but no character tables.
#[derive(Debug, Clone, Default)]
pub struct KeyboardData {
    action_map: HashMap<MovementSequence, KeyboardAction>,
    lower_case_characters: Vec<String>,
    upper_case_characters: Vec<String>,
}

impl KeyboardData {
    pub fn new() -> Self {
        Self {
            action_map: HashMap::new(),
            lower_case_characters: vec![String::new(); MAX_LAYERS + 1],
            upper_case_characters: vec![String::new(); MAX_LAYERS + 1],
        }
    }

    pub fn add_action(&mut self, sequence: MovementSequence, action: KeyboardAction) {
        self.action_map.insert(sequence, action);
    }

    pub fn action(&self, sequence: &[FingerPosition]) -> Option<&KeyboardAction> {
        self.action_map.get(sequence)
    }

    pub fn action_count(&self) -> usize {
        self.action_map.len()
    }

    pub fn set_lower_case_characters(&mut self, layer: usize, characters: String) -> WbResult<()> {
        Self::check_layer(layer)?;
        self.ensure_tables(layer);
        self.lower_case_characters[layer] = characters;
        Ok(())
    }

    pub fn set_upper_case_characters(&mut self, layer: usize, characters: String) -> WbResult<()> {
        Self::check_layer(layer)?;
        self.ensure_tables(layer);
        self.upper_case_characters[layer] = characters;
        Ok(())
    }

    pub fn lower_case_characters(&self, layer: usize) -> &str {
        self.lower_case_characters
            .get(layer)
            .map_or("", String::as_str)
    }

    pub fn upper_case_characters(&self, layer: usize) -> &str {
        self.upper_case_characters
            .get(layer)
            .map_or("", String::as_str)
    }

    /// Highest layer anything was registered on.
    pub fn total_layers(&self) -> usize {
        let from_actions = self
            .action_map
            .values()
            .map(|action| action.layer)
            .max()
            .unwrap_or(0);

        let from_tables = self
            .lower_case_characters
            .iter()
            .zip(&self.upper_case_characters)
            .enumerate()
            .rev()
            .find(|(_, (lower, upper))| !lower.is_empty() || !upper.is_empty())
            .map_or(0, |(layer, _)| layer);

        from_actions.max(from_tables)
    }

    fn check_layer(layer: usize) -> WbResult<()> {
        if !(DEFAULT_LAYER..=MAX_LAYERS).contains(&layer) {
            return Err(WheelboardError::Validation(format!(
                "Layer {} is out of range ({}..={})",
                layer, DEFAULT_LAYER, MAX_LAYERS
            )));
        }
        Ok(())
    }

    fn ensure_tables(&mut self, layer: usize) {
        if self.lower_case_characters.len() <= layer {
            self.lower_case_characters.resize(layer + 1, String::new());
            self.upper_case_characters.resize(layer + 1, String::new());
        }
    }
}
