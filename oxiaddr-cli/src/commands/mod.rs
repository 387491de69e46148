//! Command implementations for OxiAddr CLI.

pub mod batch;
pub mod convert;
pub mod info;
pub mod registry;

pub use batch::cmd_batch;
pub use convert::{ConvertArgs, cmd_convert};
pub use info::cmd_info;
pub use registry::cmd_registry;
