//! Command-line front end for the stylist outfit recommendation engine.
//!
//! Loads a wardrobe export, resolves engine limits from flags, environment
//! and `~/.stylist/config.toml`, and prints ranked outfits as text or JSON.

#![deny(unsafe_code)]

mod app;
pub mod cli;
pub mod config;
pub mod output;
pub mod wardrobe_file;

pub use app::{execute, run};
