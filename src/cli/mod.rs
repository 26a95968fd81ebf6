//! CLI module - Command-line interface for BookStream
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;
pub mod render;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// BookStream - AI-generated book trailers, authors and discussions
#[derive(Parser)]
#[command(name = "bookstream")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file to use instead of the default search path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Load catalogs from this JSON file instead of the generation service
    #[arg(long, global = true)]
    pub fixture: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse interactively (default)
    #[command(alias = "b")]
    Browse,

    /// Generate a catalog and print a single view
    #[command(alias = "s")]
    Show {
        /// Show the detail page of this book
        #[arg(long, conflicts_with = "author")]
        book: Option<String>,
        /// Show the profile of this author
        #[arg(long)]
        author: Option<String>,
    },

    /// Create default config file
    #[command(alias = "init")]
    InitConfig,
}

pub use commands::*;
