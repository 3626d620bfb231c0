// src/data_input/mod.rs

pub mod table;
pub mod variables;

// src/data_input/mod.rs
