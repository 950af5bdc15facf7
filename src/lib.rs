#![forbid(unsafe_code)]
//! Treeline — render a directory hierarchy as a box-drawing tree diagram.

pub mod cli;
pub mod error;
pub mod logging;
pub mod render;
pub mod run;
pub mod tree;
