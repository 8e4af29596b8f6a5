pub mod show;
pub mod trace;
pub mod validate;
