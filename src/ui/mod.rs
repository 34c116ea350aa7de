//! UI panel rendering for the starter shell.

pub mod header;
pub mod panel_manager;
pub mod status_bar;
