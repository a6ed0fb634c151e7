//! Structured logging built on `tracing`.
//!
//! Every state transition runs inside a span (`handle_event`, `recompute`,
//! `filter_entries`, catalog loading), so a debug-level log shows which event
//! triggered which recomputation.
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` in [`Config`](crate::Config)
//! 3. Default: `"info"`
//!
//! Output goes to stderr, or to `trace_file` when configured, keeping stdout
//! free for the command shell's JSON output.
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup

mod init;

pub use init::init_tracing;
