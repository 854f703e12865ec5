pub mod config;
pub mod logging;
pub mod preview;
pub mod remap;
pub mod session;

pub use config::Config;
pub use remap::{convert, parse, remap, resolve_columns, serialize};
pub use session::Session;
