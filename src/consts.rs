/// Slots in a layer's character table: 4 sectors x 2 parts x 4 positions.
pub const CHARACTER_SET_SIZE: usize = 32;

/// Character slots reachable within a single octant.
pub const CHARACTERS_PER_QUADRANT: usize = 4;

/// Layer for actions reachable only through explicit movement sequences.
pub const HIDDEN_LAYER: usize = 0;

/// The base layer every gesture starts on.
pub const DEFAULT_LAYER: usize = 1;

/// Default layer plus up to five extra layers.
pub const MAX_LAYERS: usize = 6;
