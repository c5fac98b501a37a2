// src/lib.rs

pub mod agents;
pub mod geom;
pub mod grid;
pub mod planner;
pub mod sim;
pub mod utils;
