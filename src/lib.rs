//! packetdeck - interactive terminal packet-sniffer dashboard
//!
//! This library provides the core functionality for the packetdeck
//! application: the modal overlay stack, input routing, the capture
//! boundary, and the Ratatui views.

pub mod app;
pub mod capture;
pub mod config;
pub mod input;
pub mod logging;
pub mod menus;
pub mod overlay;
pub mod tui;
