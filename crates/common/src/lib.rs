//! Cross-crate helpers shared by the workshop binaries and server crate.

pub mod utils;
