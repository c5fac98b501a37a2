// src/agents/mod.rs
// Per-step motion policies for the two agents.

pub mod evader;
pub mod pursuer;

pub use evader::Evader;
pub use pursuer::{Pursuer, EDGE_EPSILON};
