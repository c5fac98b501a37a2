// src/utils/mod.rs

pub mod util;

pub use util::clamp;
