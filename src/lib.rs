// src/lib.rs

pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod file;
pub mod filters;
pub mod html;
pub mod logging;
pub mod query;
pub mod render;
pub mod scrape;
pub mod source;

pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;
