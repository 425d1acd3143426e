use std::ffi::{c_void, CString};
use std::io::{self, Write};
use std::os::raw::c_int;
use std::time::Duration;

use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::PlatformError;
use crate::formatter::TickFormatter;

pub type EmMainLoopCallback = unsafe extern "C" fn(*mut c_void);

extern "C" {
    fn emscripten_sleep(ms: u32);
    fn printf(format: *const u8, ...) -> i32;

    /// Runs `func` once per animation frame when `fps` is 0.
    pub fn emscripten_set_main_loop_arg(func: EmMainLoopCallback, arg: *mut c_void, fps: c_int, simulate_infinite_loop: c_int);

    pub fn emscripten_cancel_main_loop();
}

pub fn sleep(duration: Duration, _focused: bool) {
    unsafe {
        emscripten_sleep(duration.as_millis() as u32);
    }
}

pub fn init_console(_force_console: bool) -> Result<(), PlatformError> {
    let subscriber = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(|| ConsoleWriter)
                .with_ansi(false)
                .event_format(TickFormatter),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| PlatformError::ConsoleInit(format!("Failed to set tracing subscriber: {e}")))
}

/// Forwards log lines to the browser console through `printf`.
struct ConsoleWriter;

impl Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let line = String::from_utf8_lossy(buf);
        if let Ok(cstr) = CString::new(line.trim_end_matches('\n')) {
            unsafe {
                printf(c"%s\n".as_ptr().cast(), cstr.as_ptr());
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
