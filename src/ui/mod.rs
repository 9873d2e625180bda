// src/ui/mod.rs
pub mod analysis;
pub mod help;
pub mod samples;
