//! Color constants for the horror palette.
//!
//! Deep blacks and blood reds.

#![allow(dead_code)]

// === VOID (Backgrounds) ===
pub const VOID_BLACK: &str = "#000000";

// === BLOOD (Titles, Controls) ===
pub const CRIMSON: &str = "#dc143c";
pub const DARK_RED: &str = "#8b0000";
pub const WARNING_RED: &str = "#ff4444";
