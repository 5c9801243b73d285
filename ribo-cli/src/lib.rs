//! Library side of the `ribo` command-line tool.

pub mod cli;
pub mod commands;
pub mod input;
pub mod logging;
pub mod render;
