pub mod assembly;
pub mod clips;
pub mod config;
pub mod consts;
pub mod design;
pub mod error;
pub mod loader;
pub mod plan;
pub mod plate;
pub mod reducer;
pub mod script;
// cmd and reports belong to the binary (main.rs).
