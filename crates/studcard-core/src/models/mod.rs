//! Data models shared by the decoder, the extractor, and the CLI.

pub mod config;
pub mod metadata;
pub mod student;
