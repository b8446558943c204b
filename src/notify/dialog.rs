//! Desktop dialog capability.
//!
//! The notifier never probes for dialog availability itself: it holds a
//! [`DialogPresenter`] chosen at startup. A missing capability surfaces
//! as [`UpcheckError::DialogUnavailable`], which the notifier treats as
//! recoverable; every other dialog failure is fatal.

use std::io::ErrorKind;
use std::process::Command;

use crate::error::{Result, UpcheckError};

/// Presents an update notification as a desktop dialog.
pub trait DialogPresenter {
    /// Show a dialog with the given title and body text.
    ///
    /// Returns [`UpcheckError::DialogUnavailable`] when the capability is
    /// missing in this environment, [`UpcheckError::Dialog`] for any other
    /// failure.
    fn present(&self, title: &str, text: &str) -> Result<()>;
}

/// Dialog presenter backed by the `zenity` command.
#[derive(Debug, Default)]
pub struct ZenityDialog;

impl ZenityDialog {
    pub fn new() -> Self {
        Self
    }
}

impl DialogPresenter for ZenityDialog {
    fn present(&self, title: &str, text: &str) -> Result<()> {
        let status = Command::new("zenity")
            .args(["--info", "--title", title, "--text", text])
            .status()
            .map_err(|e| {
                if e.kind() == ErrorKind::NotFound {
                    UpcheckError::DialogUnavailable {
                        message: "zenity not found on PATH".to_string(),
                    }
                } else {
                    UpcheckError::Dialog {
                        message: e.to_string(),
                    }
                }
            })?;

        if !status.success() {
            return Err(UpcheckError::Dialog {
                message: format!("zenity exited with {:?}", status.code()),
            });
        }

        Ok(())
    }
}

/// Presenter for environments without a desktop dialog.
///
/// Selected when dialogs are disabled at startup (`--no-dialog`) or no
/// display is expected; always reports the capability as unavailable.
#[derive(Debug, Default)]
pub struct NoDialog;

impl NoDialog {
    pub fn new() -> Self {
        Self
    }
}

impl DialogPresenter for NoDialog {
    fn present(&self, _title: &str, _text: &str) -> Result<()> {
        Err(UpcheckError::DialogUnavailable {
            message: "dialogs disabled".to_string(),
        })
    }
}
