//! Command-line interface for the `stylist` application.
//!
//! This crate serves as the main entry point for the executable, delegating
//! its functionality to the `stylist` library.

fn main() -> anyhow::Result<()> {
    stylist::run()
}
