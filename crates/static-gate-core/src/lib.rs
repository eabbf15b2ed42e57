//! Static Gate Core Library
//!
//! UI-agnostic state machine behind the static gate page: a warning screen,
//! a burst of TV static, the gated video, and another burst of static before
//! the window closes.
//!
//! ## Overview
//!
//! The page feeds three events into a [`GateController`]:
//!
//! - **ENTER** ([`GateController::on_enter`]): static for the enter delay,
//!   then playback is requested from the [`MediaHost`]
//! - **Media end** ([`GateController::on_video_end`]): static for the exit
//!   delay, then the host is asked to close the window
//! - **Position reports** ([`GateController::on_position`]): the warning
//!   screen stays up until the media reports a non-zero position
//!
//! Every change is published as a [`GateState`] snapshot.
//!
//! ## Quick Start
//!
//! ```ignore
//! use static_gate_core::{GateConfig, GateController, MediaHost};
//!
//! let gate = GateController::new(GateConfig::default(), my_host);
//! let mut changes = gate.subscribe();
//!
//! gate.on_enter();
//! changes.changed().await?;
//! assert!(changes.borrow().show_static);
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod host;
pub mod state;

// Re-exports
pub use config::{ConfigOverrides, GateConfig};
pub use controller::GateController;
pub use error::{GateError, GateResult};
pub use host::MediaHost;
pub use state::{GateState, Phase};
