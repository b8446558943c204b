//! upcheck - update-notification utility for locally installed tools.
//!
//! upcheck keeps a small persisted registry of software modules, checks
//! their release endpoints at most once per day, compares semantic
//! versions, and reports available updates on the console and optionally
//! via a desktop dialog.
//!
//! # Modules
//!
//! - [`checker`] - Update-check orchestration
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Config root and persisted settings
//! - [`error`] - Error types and result alias
//! - [`installed`] - Installed-version lookup
//! - [`notify`] - Console and desktop-dialog notification
//! - [`persist`] - Durable JSON writes
//! - [`registry`] - Persisted module registry
//! - [`release`] - Latest-release fetching
//! - [`throttle`] - Once-per-day check throttling
//! - [`version`] - Semantic version comparison
//!
//! # Example
//!
//! ```no_run
//! // Called on every startup of a host program; registers the module on
//! // first use and checks all registered modules when enough time has
//! // elapsed.
//! upcheck::run(
//!     "demo-tool",
//!     "https://api.example.com/repos/demo/releases/latest",
//!     "https://example.com/demo/releases",
//! ).unwrap();
//! ```

pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod installed;
pub mod notify;
pub mod persist;
pub mod registry;
pub mod release;
pub mod throttle;
pub mod version;

pub use checker::UpdateChecker;
pub use config::{ConfigRoot, Settings};
pub use error::{Result, UpcheckError};
pub use registry::{ModuleRecord, Registry};

/// Startup entry point with default capabilities.
///
/// Builds an [`UpdateChecker`] over the home config root, command-probed
/// installed versions, and a zenity-backed dialog, then runs the check
/// cycle for `name`. Side effects only; safe to call on every startup.
pub fn run(name: &str, api_url: &str, release_url: &str) -> Result<()> {
    UpdateChecker::with_defaults(ConfigRoot::from_home())?.run(name, api_url, release_url)
}
