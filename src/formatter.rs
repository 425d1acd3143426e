//! Log line format with a wall-clock timestamp and the game's frame counter.
//!
//! Lines look like `12:04:33.51234 0x01A2 DEBUG dragonlair::game: Map changed map=darkForest`.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, FormattedFields};
use tracing_subscriber::registry::LookupSpan;

/// Frames rendered since startup.
static FRAME_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Only the low 16 bits are printed.
const FRAME_DISPLAY_MASK: u64 = 0xFFFF;

#[cfg(target_os = "emscripten")]
const TIMESTAMP_FORMAT: &[FormatItem<'static>] = format_description!("[hour]:[minute]:[second].[subsecond digits:3]");

#[cfg(not(target_os = "emscripten"))]
const TIMESTAMP_FORMAT: &[FormatItem<'static>] = format_description!("[hour]:[minute]:[second].[subsecond digits:5]");

/// ANSI styles used by the formatter.
#[derive(Clone, Copy)]
enum Style {
    Dim,
    Bold,
    Level(Level),
}

impl Style {
    fn code(self) -> &'static str {
        match self {
            Style::Dim => "\x1b[2m",
            Style::Bold => "\x1b[1m",
            Style::Level(level) => match level {
                Level::TRACE => "\x1b[35m",
                Level::DEBUG => "\x1b[34m",
                Level::INFO => "\x1b[32m",
                Level::WARN => "\x1b[33m",
                Level::ERROR => "\x1b[31m",
            },
        }
    }
}

/// Writes `value` in `style` when the writer supports ANSI escapes, plainly otherwise.
fn styled(writer: &mut Writer<'_>, style: Style, value: impl fmt::Display) -> fmt::Result {
    if writer.has_ansi_escapes() {
        write!(writer, "{}{}\x1b[0m", style.code(), value)
    } else {
        write!(writer, "{value}")
    }
}

/// Event formatter printing timestamp, frame counter, level, span chain, target and fields.
pub struct TickFormatter;

impl<S, N> FormatEvent<S, N> for TickFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(&self, ctx: &FmtContext<'_, S, N>, mut writer: Writer<'_>, event: &Event<'_>) -> fmt::Result {
        let meta = event.metadata();

        let timestamp = OffsetDateTime::now_utc().format(&TIMESTAMP_FORMAT).map_err(|_| fmt::Error)?;
        styled(&mut writer, Style::Dim, timestamp)?;
        writer.write_char(' ')?;

        styled(&mut writer, Style::Dim, format_args!("0x{:04X}", frame_count() & FRAME_DISPLAY_MASK))?;
        writer.write_char(' ')?;

        styled(&mut writer, Style::Level(*meta.level()), format_args!("{:>5}", meta.level().as_str()))?;
        writer.write_char(' ')?;

        if let Some(scope) = ctx.event_scope() {
            for span in scope.from_root() {
                styled(&mut writer, Style::Bold, span.metadata().name())?;
                if let Some(fields) = span.extensions().get::<FormattedFields<N>>() {
                    if !fields.is_empty() {
                        write!(writer, "{{{fields}}}")?;
                    }
                }
                styled(&mut writer, Style::Dim, ':')?;
            }
            writer.write_char(' ')?;
        }

        styled(&mut writer, Style::Dim, format_args!("{}:", meta.target()))?;
        writer.write_char(' ')?;

        ctx.format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Counts one rendered frame. Called once per frame by the game loop.
pub fn increment_tick() {
    FRAME_COUNTER.fetch_add(1, Ordering::Relaxed);
}

pub fn frame_count() -> u64 {
    FRAME_COUNTER.load(Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_counter_increments() {
        let before = frame_count();
        increment_tick();
        increment_tick();
        assert!(frame_count() >= before + 2);
    }
}
