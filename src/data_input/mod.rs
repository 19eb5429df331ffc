// src/data_input/mod.rs

pub mod csv_parser;
pub mod sample_data;

// src/data_input/mod.rs
