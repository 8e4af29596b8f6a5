pub mod actions;
pub mod consts;
pub mod error;
pub mod geometry;
pub mod keyboard_data;
pub mod loader;
pub mod movement;
