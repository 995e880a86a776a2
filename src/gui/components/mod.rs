// src/gui/components/mod.rs
pub mod export_bar;
pub mod filter_bar;
pub mod results;
