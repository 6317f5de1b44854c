//! CLI module for Bearer Auth
//!
//! Provides subcommands:
//! - `serve`: HTTP server with the bearer token gate
//! - `issue`: print a signed token
//! - `verify`: decode and verify a token

pub mod serve;
pub mod token;

use clap::{Parser, Subcommand};

/// Bearer Auth - HMAC-SHA256 signed bearer tokens
#[derive(Parser)]
#[command(name = "bearer-auth")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve(serve::ServeArgs),

    /// Issue a token for a principal
    Issue(token::IssueArgs),

    /// Verify a token and print its header and payload
    Verify(token::VerifyArgs),
}
