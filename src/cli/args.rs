//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// upcheck - Update notifications for locally installed tools.
#[derive(Debug, Parser)]
#[command(name = "upcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding settings.json and modules.json (overrides ~/.upcheck)
    #[arg(long, global = true, env = "UPCHECK_CONFIG_ROOT")]
    pub config_root: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Never attempt the desktop dialog
    #[arg(long, global = true)]
    pub no_dialog: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Register a module to be checked for updates
    Register(RegisterArgs),

    /// Check all registered modules for updates now
    Check(CheckArgs),

    /// List registered modules and their last results
    List,

    /// Show or change persisted settings
    Settings(SettingsArgs),
}

/// Arguments for the `register` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RegisterArgs {
    /// Module name (must match the installed command for version probing)
    pub name: String,

    /// Endpoint returning release metadata with a tag_name field
    #[arg(long)]
    pub api_url: String,

    /// Human-facing download page
    #[arg(long)]
    pub release_url: String,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Check only this module
    #[arg(long)]
    pub name: Option<String>,

    /// Use this installed version instead of probing the command
    #[arg(long, requires = "name")]
    pub module_version: Option<String>,
}

/// Arguments for the `settings` command.
#[derive(Debug, Clone, clap::Args)]
pub struct SettingsArgs {
    /// Enable or disable the automatic check cycle
    #[arg(long)]
    pub auto_check: Option<bool>,

    /// Enable or disable desktop dialog notifications
    #[arg(long)]
    pub dialogs: Option<bool>,
}
