// Passfile — CLI Module
//
// Command-line interface using clap derive macros.
// Subcommands: init, register, login, list, reset.

mod commands;
mod validate;

use clap::{Parser, Subcommand};

pub use commands::execute;

/// Passfile — a fixed-capacity, file-backed local credential store.
#[derive(Parser, Debug)]
#[command(name = "passfile")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize Passfile: create the data directory and an empty store.
    Init,

    /// Register a new user.
    Register {
        /// Username: 1-10 alphanumeric characters, unique in the store.
        #[arg(long)]
        username: String,

        /// Password: 1-8 alphanumeric characters.
        /// For production use, prefer interactive entry to avoid shell history exposure.
        #[arg(long)]
        password: String,
    },

    /// Verify a username/password pair against the store.
    Login {
        /// Username to log in as.
        #[arg(long)]
        username: String,

        /// Password to check.
        #[arg(long)]
        password: String,
    },

    /// List registered users (slot ids and usernames only, never digests).
    List,

    /// Overwrite the store with a fresh empty table.
    Reset,
}
