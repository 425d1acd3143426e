#![cfg_attr(all(not(debug_assertions), target_os = "windows"), windows_subsystem = "windows")]

use std::env;

use dragonlair::app::App;
use dragonlair::constants::LOOP_TIME;
use dragonlair::platform;
use tracing::info;

// emscripten_set_main_loop_arg calls back into a plain function, so the app lives in a static
#[cfg(target_os = "emscripten")]
static mut APP: Option<App> = None;

#[cfg(target_os = "emscripten")]
unsafe extern "C" fn main_loop_callback(_arg: *mut std::ffi::c_void) {
    if let Some(app) = (*std::ptr::addr_of_mut!(APP)).as_mut() {
        if !app.run() {
            platform::emscripten_cancel_main_loop();
        }
    }
}

pub fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    let force_console = args.iter().any(|arg| arg == "--console" || arg == "-c");
    let debug_mode = args.iter().any(|arg| arg == "--debug" || arg == "-d");

    platform::init_console(force_console)?;

    let app = App::new(debug_mode)?;

    info!(loop_time = ?LOOP_TIME, "Starting game loop");

    #[cfg(target_os = "emscripten")]
    unsafe {
        *std::ptr::addr_of_mut!(APP) = Some(app);
        // fps=0 hands pacing to requestAnimationFrame
        platform::emscripten_set_main_loop_arg(main_loop_callback, std::ptr::null_mut(), 0, 1);
    }

    #[cfg(not(target_os = "emscripten"))]
    {
        let mut app = app;
        while app.run() {}
    }

    Ok(())
}
