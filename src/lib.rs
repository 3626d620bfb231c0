// src/lib.rs - Library interface for internal module access

pub mod constants;
pub mod data_input;
pub mod plot_framework;
pub mod plot_functions;
pub mod types;

// Expose the crate version baked in at compile time.
pub fn crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
