//! Logging infrastructure for console diagnostics.
//!
//! The library only emits [`tracing`] events; the binary decides where they
//! go by calling [`init_subscriber`] once at startup.

mod subscriber;

pub use subscriber::init_subscriber;
