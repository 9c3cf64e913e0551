//! Command implementations for the jsmeta CLI.
//!
//! - [`analyze`] - one source file to one document
//! - [`batch`] - every matching source file under a directory
//!
//! Each command exposes an `execute` function taking its parsed arguments and
//! the optional `--config` path.

pub mod analyze;
pub mod batch;
pub(crate) mod utils;

pub use analyze::execute as analyze_execute;
pub use batch::execute as batch_execute;
