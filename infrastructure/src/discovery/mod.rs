//! Schema and prompt discovery adapters

mod local;

pub use local::{LocalCaseSource, list_files};
