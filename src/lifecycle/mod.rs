//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Shutdown (shutdown.rs):
//!     trigger() → broadcast to every subscribed server
//!
//! Signals (signals.rs):
//!     Ctrl+C or broadcast → graceful shutdown of the HTTP server
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
