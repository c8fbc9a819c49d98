//! Logger abstractions
//!
//! Resolution is called from hot paths, so the resolver never writes to
//! stdout/stderr directly; everything goes through the [`Logger`] seam:
//! - `ConsoleLogger`: prefixed stdout/stderr output
//! - `NoOpLogger`: silent, for tests

mod traits;
mod console;
mod noop;

pub use traits::{Logger, SharedLogger};
pub use console::ConsoleLogger;
pub use noop::NoOpLogger;
