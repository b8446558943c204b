//! Update notification.
//!
//! Results are always reported on the console; a desktop dialog is an
//! optional extra channel behind the [`DialogPresenter`] capability.

pub mod dialog;
pub mod theme;

pub use dialog::{DialogPresenter, NoDialog, ZenityDialog};
pub use theme::Theme;

use crate::error::{Result, UpcheckError};

/// Dialog window title.
const DIALOG_TITLE: &str = "upcheck - Update notifier";

/// Presents update-found notifications to the user.
pub struct Notifier {
    theme: Theme,
    dialog: Box<dyn DialogPresenter>,
}

impl Notifier {
    /// Create a notifier with the given theme and dialog capability.
    pub fn new(theme: Theme, dialog: Box<dyn DialogPresenter>) -> Self {
        Self { theme, dialog }
    }

    /// The theme used for console output.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Notify the user that a newer version was found.
    ///
    /// The console message is always emitted. When `interactive` is true
    /// the desktop dialog is attempted first; a missing capability falls
    /// back to console-only output, any other dialog failure propagates.
    pub fn notify(
        &self,
        installed: &str,
        latest: &str,
        release_url: &str,
        interactive: bool,
    ) -> Result<()> {
        if interactive {
            match self.dialog.present(DIALOG_TITLE, &dialog_text(installed, latest, release_url)) {
                Ok(()) => {}
                Err(UpcheckError::DialogUnavailable { message }) => {
                    tracing::debug!("dialog unavailable, console only: {}", message);
                    println!(
                        "{}",
                        self.theme
                            .format_dim(&format!("{} -> falling back to console output", message))
                    );
                }
                Err(e) => return Err(e),
            }
        }

        let update = &self.theme.update;
        println!("\t{}", update.apply_to("A newer version was found!"));
        println!("\t{}", update.apply_to(format!("Installed: {}", installed)));
        println!("\t{}", update.apply_to(format!("Latest:    {}", latest)));
        println!(
            "\t{}{}{}",
            update.apply_to("Visit "),
            self.theme.url.apply_to(release_url),
            update.apply_to(" to download the latest version.")
        );

        Ok(())
    }
}

/// Body text for the desktop dialog.
fn dialog_text(installed: &str, latest: &str, release_url: &str) -> String {
    format!(
        "A newer version was found!\n\
         \tInstalled: {}\n\
         \tLatest:    {}\n\
         \tVisit {} to download the latest version.",
        installed, latest, release_url
    )
}
