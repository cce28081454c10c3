//! Reusable rendering components.

pub mod spinner;
