//! Update-check orchestration.
//!
//! One invocation walks the registered modules sequentially: throttle
//! gate, installed-version lookup, release fetch, semver comparison,
//! notification, and a single durable registry write at the end. No
//! module's failure affects another.

use tracing::{debug, warn};

use crate::config::{ConfigRoot, Settings};
use crate::error::{Result, UpcheckError};
use crate::installed::{CommandVersionSource, VersionSource};
use crate::notify::{Notifier, Theme, ZenityDialog};
use crate::registry::{ModuleRecord, Registry};
use crate::release::ReleaseFetcher;
use crate::throttle;
use crate::version;

/// Orchestrates the check cycle over the persisted registry.
pub struct UpdateChecker {
    root: ConfigRoot,
    fetcher: ReleaseFetcher,
    versions: Box<dyn VersionSource>,
    notifier: Notifier,
}

impl UpdateChecker {
    /// Create a checker with explicit capabilities.
    pub fn new(
        root: ConfigRoot,
        fetcher: ReleaseFetcher,
        versions: Box<dyn VersionSource>,
        notifier: Notifier,
    ) -> Self {
        Self {
            root,
            fetcher,
            versions,
            notifier,
        }
    }

    /// Create a checker with the default capabilities: command probing
    /// for installed versions and a zenity-backed dialog.
    pub fn with_defaults(root: ConfigRoot) -> Result<Self> {
        Ok(Self::new(
            root,
            ReleaseFetcher::new()?,
            Box::new(CommandVersionSource::new()),
            Notifier::new(Theme::default(), Box::new(ZenityDialog::new())),
        ))
    }

    /// The config root this checker operates on.
    pub fn root(&self) -> &ConfigRoot {
        &self.root
    }

    /// Startup entry point for host programs.
    ///
    /// Initializes the stores, registers the module if it is not already
    /// known, and runs the full check cycle when automatic checking is
    /// enabled. Safe to call on every startup.
    pub fn run(&self, name: &str, api_url: &str, release_url: &str) -> Result<()> {
        debug!("Checking existence of {}", self.root.dir().display());
        Settings::init(&self.root)?;
        Registry::init(&self.root)?;

        Registry::register(&self.root, name, api_url, release_url)?;

        let settings = Settings::load(&self.root)?;
        if !settings.automatic_check_active {
            debug!("automatic checks disabled, skipping cycle");
            return Ok(());
        }

        self.check_all(&settings)
    }

    /// Run the check cycle for every registered module.
    pub fn check_all(&self, settings: &Settings) -> Result<()> {
        self.run_cycle(settings, None)
    }

    /// Run the check cycle for a single registered module.
    pub fn check_named(&self, settings: &Settings, name: &str) -> Result<()> {
        self.run_cycle(settings, Some(name))
    }

    fn run_cycle(&self, settings: &Settings, filter: Option<&str>) -> Result<()> {
        println!("Checking for updates..");
        let mut registry = Registry::load(&self.root)?;

        for name in registry.names() {
            if filter.is_some_and(|f| f != name) {
                continue;
            }

            println!("{}", self.notifier.theme().format_module(&name));

            // Mutate a copy so a failed check leaves the record untouched:
            // its last_checked never advances and it is retried next run.
            let mut record = match registry.get(&name) {
                Some(record) => record.clone(),
                None => continue,
            };

            match self.check_module(&name, &mut record, settings) {
                Ok(()) => {
                    if let Some(slot) = registry.get_mut(&name) {
                        *slot = record;
                    }
                }
                // A broken dialog aborts the run; a missing one was
                // already handled inside the notifier.
                Err(e @ UpcheckError::Dialog { .. }) => return Err(e),
                Err(e) => {
                    warn!(module = %name, error = %e, "module check failed");
                    println!("{}", self.notifier.theme().format_failure(&e.to_string()));
                }
            }
        }

        registry.save(&self.root)
    }

    /// The per-module pipeline: throttle, resolve, fetch, compare, stamp.
    fn check_module(
        &self,
        name: &str,
        record: &mut ModuleRecord,
        settings: &Settings,
    ) -> Result<()> {
        if !throttle::should_check_now(record.last_checked.as_deref())? {
            println!(
                "{}",
                self.notifier.theme().format_dim("skipped due to recent check.")
            );
            if !record.last_result.is_empty() {
                println!(
                    "{}",
                    self.notifier
                        .theme()
                        .format_dim(&format!("Last result: {}", record.last_result))
                );
            }
            return Ok(());
        }

        let installed = self.versions.installed_version(name)?;
        let latest = self.fetcher.latest_version(&record.api_url)?;

        if version::is_newer(&latest, &installed)? {
            self.notifier.notify(
                &installed,
                &latest,
                &record.release_url,
                settings.enable_interactive_notifications,
            )?;
            record.last_result = format!(
                "A newer version was found! Installed: {} Latest: {} Releases: {}",
                installed, latest, record.release_url
            );
        } else {
            record.last_result = "Up to date.".to_string();
            println!("{}", self.notifier.theme().format_dim("Up to date."));
        }

        record.last_checked = Some(throttle::today_stamp());

        Ok(())
    }
}
