//! Display smoke application
//!
//! Opens one window with an OpenGL core-profile context, clears it every
//! frame and exits when the window is closed.
//!
//! ```text
//! display_app [CONFIG] [--frames N]
//! ```
//!
//! `CONFIG` is a `.toml` or `.ron` file. Without it `display.toml` in the
//! working directory is used when present, otherwise defaults apply.
//! `--frames N` closes the window after N frames.

#![allow(unsafe_code)]

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use gl_display::foundation::logging;
use gl_display::prelude::*;

const DEFAULT_CONFIG: &str = "display.toml";

#[derive(Parser, Debug)]
#[command(name = "display_app", about = "Open an OpenGL window and clear it every frame")]
struct Args {
    /// Configuration file (.toml or .ron)
    config: Option<PathBuf>,

    /// Close the window after this many frames
    #[arg(long, value_name = "N")]
    frames: Option<u64>,
}

fn load_config(path: Option<&Path>) -> Result<ApplicationConfig, DisplayError> {
    let config = match path {
        Some(path) => ApplicationConfig::load_from_file(path)?,
        None if Path::new(DEFAULT_CONFIG).exists() => ApplicationConfig::load_from_file(DEFAULT_CONFIG)?,
        None => ApplicationConfig::default(),
    };

    config.validate().map_err(DisplayError::InvalidConfig)?;
    Ok(config)
}

fn run(config: &ApplicationConfig, max_frames: Option<u64>) -> Result<(), DisplayError> {
    let mut bootstrap = Bootstrap::new();
    let mut display = Display::with_config(&mut bootstrap, &config.display)?;
    display.load_gl()?;

    let (width, height) = display.framebuffer_size();
    set_viewport(width, height);

    let mut clock = FrameClock::new();

    while !display.should_close() {
        // SAFETY: functions loaded above, context is current on this thread
        unsafe {
            gl::ClearColor(0.1, 0.2, 0.3, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }

        display.swap_buffers();
        clock.tick();

        for event in display.drain_events() {
            match event {
                DisplayEvent::FramebufferResized { width, height } => set_viewport(width, height),
                DisplayEvent::CloseRequested => log::info!("Close requested"),
                other => log::trace!("{other:?}"),
            }
        }

        if max_frames.is_some_and(|limit| clock.frame_count() >= limit) {
            display.set_should_close(true);
        }
    }

    log::info!(
        "Rendered {} frames in {:.2}s ({:.1} fps)",
        clock.frame_count(),
        clock.elapsed(),
        clock.average_fps()
    );

    display.terminate();
    bootstrap.shutdown()
}

fn set_viewport(width: u32, height: u32) {
    let width = i32::try_from(width).unwrap_or(i32::MAX);
    let height = i32::try_from(height).unwrap_or(i32::MAX);

    // SAFETY: only called with loaded functions and a current context
    unsafe { gl::Viewport(0, 0, width, height) };
}

fn exit_code(result: Result<(), DisplayError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Display application failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => return exit_code(Err(e)),
    };

    if let Err(e) = logging::init(&config.logging) {
        eprintln!("Logger already initialized: {e}");
    }

    log::info!("Starting display application");
    exit_code(run(&config, args.frames))
}
