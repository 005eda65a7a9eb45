//! Terminal implementations of the dialog and navigation ports.

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};

use mentorly_core::domain::Route;
use mentorly_core::ports::{Alert, Confirm, Dialog, Icon, Navigator};

fn icon_prefix(icon: Option<Icon>) -> &'static str {
    match icon {
        Some(Icon::Success) => "✔ ",
        Some(Icon::Error) => "✖ ",
        Some(Icon::Warning) => "⚠ ",
        Some(Icon::Info) => "ℹ ",
        None => "",
    }
}

/// Prints alerts to stdout and reads confirmations from stdin.
pub struct TerminalDialog {
    /// Answer every confirmation with yes without asking.
    assume_yes: bool,
}

impl TerminalDialog {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }

    async fn read_answer() -> bool {
        let mut line = String::new();
        let mut stdin = BufReader::new(tokio::io::stdin());
        match stdin.read_line(&mut line).await {
            Ok(_) => matches!(line.trim().to_lowercase().as_str(), "y" | "yes" | "네"),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read answer, assuming no");
                false
            }
        }
    }
}

#[async_trait]
impl Dialog for TerminalDialog {
    async fn alert(&self, alert: Alert) {
        println!("{}{}", icon_prefix(alert.icon), alert.body.text());
        // Auto-closing alerts stay up for their timer, like the browser modal.
        if let Some(timer) = alert.timer {
            tokio::time::sleep(timer).await;
        }
    }

    async fn confirm(&self, confirm: Confirm) -> bool {
        let (first, second) = if confirm.reverse_buttons {
            (&confirm.cancel_label, &confirm.confirm_label)
        } else {
            (&confirm.confirm_label, &confirm.cancel_label)
        };
        println!("{}{}", icon_prefix(confirm.icon), confirm.body.text());
        println!("  [{first}] / [{second}]  (y = {})", confirm.confirm_label);

        if self.assume_yes {
            return true;
        }
        Self::read_answer().await
    }
}

/// Logs where the browser would have gone.
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&self, route: Route) {
        tracing::info!(route = %route, "Navigate");
        println!("→ {route}");
    }
}
