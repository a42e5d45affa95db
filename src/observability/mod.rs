//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing (registration events), server (start/stop)
//!     → tracing macros with structured fields
//!     → logging.rs subscriber (fmt layer + EnvFilter)
//!     → stdout
//!
//! Per-request spans come from tower-http's TraceLayer in http/server.rs.
//! ```
//!
//! # Design Decisions
//! - The routing core never logs per-request failures; they become responses
//! - `RUST_LOG` overrides the configured level

pub mod logging;

pub use logging::init_logging;
