pub mod core;
pub mod main;
pub mod preview;
pub mod render;
pub mod run_effect;
