//! Interactive UI module for the koora_teletext application
//!
//! This module is organized into focused submodules:
//! - `sequencer`: request tickets that discard stale responses
//! - `state_manager`: screen state and result application
//! - `input_handler`: keyboard mapping
//! - `terminal_manager`: raw mode and alternate screen handling
//! - `core`: main interactive UI loop and orchestration

mod core;
mod input_handler;
pub mod sequencer;
pub mod state_manager;
mod terminal_manager;

pub use core::{InteractiveOptions, run_interactive_ui};
pub use sequencer::{RequestSequencer, RequestSlot, Ticket};
pub use state_manager::{FetchRequest, InteractiveState, View};
