// mapscrub/src/lib.rs
//! # mapscrub CLI
//!
//! This crate provides the command-line front end for the `mapscrub-core`
//! rewrite engine: argument parsing, logging setup, the read/backup/rewrite/
//! write pipeline, and the console report.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
