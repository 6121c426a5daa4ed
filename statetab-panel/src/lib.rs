//! Push-button / LED controller on the statetab engine
//!
//! The reference application for `statetab-core`: a board with one
//! button and one LED, both reached through `embedded-hal` digital pins.
//!
//! - `Init`: drive the LED to a known (off) level
//! - `Inactive`: LED off, wait for the button
//! - `Active`: LED on while the button is held
//!
//! Firmware owns the superloop; [`run`] steps the machine and calls back
//! before every tick so the caller can wait on its timer.

#![no_std]
#![deny(unsafe_code)]

pub mod panel;

pub use panel::{run, Panel, PanelConfig, PanelState, PANEL_STATES};
