//! Contribution-style commit calendar for one author across local git repositories.
//!
//! `scan` discovers repositories and keeps a flat list of them; `stats` counts
//! commits per day over the last six months and draws them as a week grid.

pub mod cli;
pub mod error;
pub mod git;
pub mod logging;
pub mod model;
pub mod scan;
pub mod stats;
