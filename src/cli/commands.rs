//! Command implementations and dispatch.

use crate::checker::UpdateChecker;
use crate::cli::args::{CheckArgs, Cli, Commands, RegisterArgs, SettingsArgs};
use crate::config::{ConfigRoot, Settings};
use crate::error::Result;
use crate::installed::{CommandVersionSource, FixedVersionSource, VersionSource};
use crate::notify::{DialogPresenter, NoDialog, Notifier, Theme, ZenityDialog};
use crate::registry::Registry;
use crate::release::ReleaseFetcher;

/// Route a parsed CLI invocation to its command.
pub fn dispatch(cli: &Cli) -> Result<()> {
    let root = cli
        .config_root
        .as_ref()
        .map(ConfigRoot::new)
        .unwrap_or_else(ConfigRoot::from_home);

    let theme = if cli.no_color {
        Theme::plain()
    } else {
        Theme::default()
    };

    match &cli.command {
        Commands::Register(args) => register(&root, args),
        Commands::Check(args) => check(&root, theme, cli.no_dialog, args),
        Commands::List => list(&root, &theme),
        Commands::Settings(args) => settings(&root, args),
    }
}

fn register(root: &ConfigRoot, args: &RegisterArgs) -> Result<()> {
    Settings::init(root)?;
    Registry::init(root)?;
    Registry::register(root, &args.name, &args.api_url, &args.release_url)?;
    println!("Registered '{}'.", args.name);
    Ok(())
}

fn check(root: &ConfigRoot, theme: Theme, no_dialog: bool, args: &CheckArgs) -> Result<()> {
    Settings::init(root)?;
    Registry::init(root)?;

    let versions: Box<dyn VersionSource> = match (&args.name, &args.module_version) {
        (Some(name), Some(version)) => {
            Box::new(FixedVersionSource::new().with_version(name, version))
        }
        _ => Box::new(CommandVersionSource::new()),
    };

    let dialog: Box<dyn DialogPresenter> = if no_dialog {
        Box::new(NoDialog::new())
    } else {
        Box::new(ZenityDialog::new())
    };

    let checker = UpdateChecker::new(
        root.clone(),
        ReleaseFetcher::new()?,
        versions,
        Notifier::new(theme, dialog),
    );

    // An explicit `check` runs regardless of the automatic_check_active
    // flag; the flag gates only the startup entry point.
    let settings = Settings::load(root)?;
    match &args.name {
        Some(name) => checker.check_named(&settings, name),
        None => checker.check_all(&settings),
    }
}

fn list(root: &ConfigRoot, theme: &Theme) -> Result<()> {
    Settings::init(root)?;
    Registry::init(root)?;

    let registry = Registry::load(root)?;
    if registry.is_empty() {
        println!("No modules registered.");
        return Ok(());
    }

    for (name, record) in registry.iter() {
        println!("{}", theme.format_module(name));
        println!("{}", theme.format_dim(&format!("api:          {}", record.api_url)));
        println!("{}", theme.format_dim(&format!("releases:     {}", record.release_url)));
        println!(
            "{}",
            theme.format_dim(&format!(
                "last checked: {}",
                record.last_checked.as_deref().unwrap_or("never")
            ))
        );
        if !record.last_result.is_empty() {
            println!("{}", theme.format_dim(&format!("last result:  {}", record.last_result)));
        }
    }

    Ok(())
}

fn settings(root: &ConfigRoot, args: &SettingsArgs) -> Result<()> {
    Settings::init(root)?;
    let mut settings = Settings::load(root)?;

    if args.auto_check.is_none() && args.dialogs.is_none() {
        println!("automatic_check_active:           {}", settings.automatic_check_active);
        println!(
            "enable_interactive_notifications: {}",
            settings.enable_interactive_notifications
        );
        return Ok(());
    }

    if let Some(auto) = args.auto_check {
        settings.automatic_check_active = auto;
    }
    if let Some(dialogs) = args.dialogs {
        settings.enable_interactive_notifications = dialogs;
    }
    settings.save(root)?;

    println!(
        "Settings updated: auto-check {}, dialogs {}.",
        settings.automatic_check_active, settings.enable_interactive_notifications
    );

    Ok(())
}
