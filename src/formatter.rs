//! A compact tracing formatter that stamps every line with the wall clock and the current game tick.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use time::macros::format_description;
use time::{format_description::FormatItem, OffsetDateTime};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Number of updates run so far, across every [`Game`](crate::game::Game) in the process.
static TICK_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Ticks are shown as four hex digits, wrapping every 65536 updates.
const TICK_DISPLAY_MASK: u64 = 0xFFFF;

const TIMESTAMP_FORMAT: &[FormatItem<'static>] = format_description!("[hour]:[minute]:[second].[subsecond digits:4]");

/// Formats events as `HH:MM:SS.ssss 0xTICK LEVEL target: fields`, dimming the bookkeeping columns
/// when ANSI output is enabled.
pub struct CustomFormatter;

impl<S, N> FormatEvent<S, N> for CustomFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(&self, ctx: &FmtContext<'_, S, N>, mut writer: Writer<'_>, event: &Event<'_>) -> fmt::Result {
        let meta = event.metadata();
        let ansi = writer.has_ansi_escapes();

        let timestamp = OffsetDateTime::now_utc().format(&TIMESTAMP_FORMAT).map_err(|_| fmt::Error)?;
        let tick = get_tick_count() & TICK_DISPLAY_MASK;
        if ansi {
            write!(writer, "\x1b[2m{timestamp} 0x{tick:04X}\x1b[0m ")?;
        } else {
            write!(writer, "{timestamp} 0x{tick:04X} ")?;
        }

        let (color, label) = level_style(meta.level());
        if ansi {
            write!(writer, "{color}{label:>5}\x1b[0m ")?;
        } else {
            write!(writer, "{label:>5} ")?;
        }

        if let Some(scope) = ctx.event_scope() {
            for span in scope.from_root() {
                write!(writer, "{}:", span.metadata().name())?;
            }
            writer.write_char(' ')?;
        }

        if ansi {
            write!(writer, "\x1b[2m{}:\x1b[0m ", meta.target())?;
        } else {
            write!(writer, "{}: ", meta.target())?;
        }

        ctx.format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn level_style(level: &Level) -> (&'static str, &'static str) {
    match *level {
        Level::TRACE => ("\x1b[35m", "TRACE"),
        Level::DEBUG => ("\x1b[34m", "DEBUG"),
        Level::INFO => ("\x1b[32m", "INFO"),
        Level::WARN => ("\x1b[33m", "WARN"),
        Level::ERROR => ("\x1b[31m", "ERROR"),
    }
}

/// Advances the tick shown in log lines. Called once per game update.
pub fn increment_tick() {
    TICK_COUNTER.fetch_add(1, Ordering::Relaxed);
}

pub fn get_tick_count() -> u64 {
    TICK_COUNTER.load(Ordering::Relaxed)
}
