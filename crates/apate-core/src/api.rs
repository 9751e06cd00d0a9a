//! Builder style API, similar to [`crate::commands`] but with a gate
//! between finding the files and restoring them.

pub mod reveal;
