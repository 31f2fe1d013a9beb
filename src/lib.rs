// src/lib.rs

#[macro_use]
pub mod macros;

pub mod log;

pub mod config;
pub mod core;
pub mod data;
pub mod engine;
pub mod specs;

pub mod delimited;
pub mod fetch;
pub mod file;
pub mod intent;
pub mod output;
pub mod present;
pub mod schedule;
pub mod session;

pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;
