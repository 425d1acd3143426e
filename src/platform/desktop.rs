use std::io::IsTerminal;
use std::time::Duration;

use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::PlatformError;
use crate::formatter::TickFormatter;

/// Spins for precise frame pacing while focused, yields the thread otherwise.
pub fn sleep(duration: Duration, focused: bool) {
    if focused {
        spin_sleep::sleep(duration);
    } else {
        std::thread::sleep(duration);
    }
}

/// Installs the global tracing subscriber writing to stdout.
///
/// `force_console` keeps ANSI colors on even when stdout is not a terminal.
pub fn init_console(force_console: bool) -> Result<(), PlatformError> {
    let ansi = force_console || std::io::stdout().is_terminal();

    let subscriber = tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(ansi).event_format(TickFormatter))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| PlatformError::ConsoleInit(format!("Failed to set tracing subscriber: {e}")))
}
