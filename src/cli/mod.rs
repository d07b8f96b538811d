//! CLI module for the User Registry
//!
//! Provides subcommands for running the service:
//! - `serve`: HTTP API server

pub mod serve;

use clap::{Parser, Subcommand};

/// User Registry - in-memory CRUD service for user records
#[derive(Parser)]
#[command(name = "user-registry")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve(serve::ServeArgs),
}
