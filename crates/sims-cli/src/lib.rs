//! Library components of the `sims` command-line tool.

pub mod logging;
pub mod pipeline;
