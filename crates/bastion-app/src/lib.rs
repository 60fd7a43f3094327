//! BASTION headless runner.
//!
//! This crate wires the simulation crates into a command-line host: it loads
//! an encounter config, drives the engine to an outcome and reports it.

pub mod game_loop;
pub mod logging;

pub use bastion_core as core;
