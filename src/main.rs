// Hide console window on Windows release builds
#![cfg_attr(
    all(target_os = "windows", not(debug_assertions)),
    windows_subsystem = "windows"
)]

//! Virtual Keyboard - Entry Point
//!
//! Loads configuration and the stored language, then runs the keyboard
//! window on the winit event loop.

use anyhow::Result;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use virtual_keyboard::{
    core::{config::Config, settings::FileStore},
    keyboard::Keyboard,
    window::KeyboardWindowState,
};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::WindowId,
};

/// Main application handler for winit event loop
struct App {
    /// Keyboard window state
    keyboard_window: KeyboardWindowState<FileStore>,
}

impl App {
    fn new(keyboard_window: KeyboardWindowState<FileStore>) -> Self {
        Self { keyboard_window }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);

        if let Err(e) = self.keyboard_window.create_window(event_loop) {
            error!("Failed to create keyboard window: {:#}", e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if !self.keyboard_window.is_our_window(window_id) {
            return;
        }

        match &event {
            WindowEvent::CloseRequested => {
                info!("Keyboard window closed");
                event_loop.exit();
                return;
            }
            WindowEvent::Resized(size) => {
                self.keyboard_window.handle_resize(size.width, size.height);
            }
            WindowEvent::RedrawRequested => {
                self.keyboard_window.render();
                return;
            }
            _ => {}
        }
        self.keyboard_window.handle_window_event(&event);
    }
}

/// Open the preference store, starting empty if the file is unreadable
fn open_store(config: &Config) -> Result<FileStore> {
    let path = match config.storage.preferences_path() {
        Some(path) => path,
        None => FileStore::default_path()?,
    };

    match FileStore::open(&path) {
        Ok(store) => Ok(store),
        Err(e) => {
            warn!("{:#}; starting with empty preferences", e);
            Ok(FileStore::new(path))
        }
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting virtual keyboard");

    // Load configuration
    let config = Config::load()?;
    info!("Configuration loaded");

    let store = open_store(&config)?;
    info!("Preferences at {:?}", store.path());

    // A broken layout table is fatal
    let keyboard = Keyboard::standard(store, config.keyboard.shift_mode)?;

    // Create event loop
    let event_loop = EventLoop::new()?;

    // Create application
    let mut app = App::new(KeyboardWindowState::new(keyboard, config));

    // Run event loop
    event_loop.run_app(&mut app)?;

    Ok(())
}
