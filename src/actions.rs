use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// What an action does when its stroke completes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    /// Emit literal text (the common case for character slots).
    #[default]
    InputText,
    /// Emit a key event, e.g. Enter or Backspace.
    InputKey,
}

/// A fully resolved keyboard action, bound to the layer it lives on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardAction {
    pub action_type: ActionType,
    pub lower_case: String,
    pub upper_case: String,
    pub key_code: u16,
    pub flags: u16,
    pub layer: usize,
}

impl KeyboardAction {
    pub fn new(
        action_type: ActionType,
        lower_case: String,
        upper_case: String,
        key_code: u16,
        flags: u16,
        layer: usize,
    ) -> Self {
        Self {
            action_type,
            lower_case,
            upper_case,
            key_code,
            flags,
            layer,
        }
    }
}
