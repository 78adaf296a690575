//! Navigation logic.
//!
//! This module contains the [`panel::Panel`] state machine, navigation
//! [`history::History`], and the visible-entry [`filter`] projection.

pub mod filter;
pub mod history;
pub mod panel;
