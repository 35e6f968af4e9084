pub mod build_info;
pub mod config;
pub mod csv;
pub mod diagnostics;
pub mod error;
pub mod field;
pub mod grid;
pub mod image;
pub mod initial_conditions;
pub mod sim_1d_example;
pub mod solver;
pub mod standard_stencils;
pub mod stencil;
