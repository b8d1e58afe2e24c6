//! Command-line interface for generating random networks and comparing them
//! with a reference edge list.
//!
//! `generate ws` and `generate ba` emit a single seeded model graph;
//! `compare` loads a reference network and tabulates it against both models.

mod commands;

pub use commands::{
    BarabasiAlbertArgs, Cli, CliError, Command, CompareArgs, ExecutionSummary, GenerateCommand,
    GeneratedGraph, InputFormat, WattsStrogatzArgs, render_summary, run_cli,
};
