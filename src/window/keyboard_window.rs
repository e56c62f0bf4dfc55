//! Keyboard window using egui on a glutin/winit surface
//!
//! Physical key events are consumed here and never reach egui, so the only
//! thing that edits the text area is the keyboard controller.

use super::keymap::physical_event;
use super::render::{render_hint, render_keyboard, render_text_area};
use crate::core::config::Config;
use crate::core::events::KeyState;
use crate::core::settings::PreferenceStore;
use crate::keyboard::{Keyboard, TextArea};
use anyhow::{anyhow, Context, Result};
use egui_glow::EguiGlow;
use glutin::config::ConfigTemplateBuilder;
use glutin::context::{ContextAttributesBuilder, PossiblyCurrentContext};
use glutin::display::GetGlDisplay;
use glutin::prelude::*;
use glutin::surface::{Surface, SurfaceAttributesBuilder, WindowSurface};
use glutin_winit::DisplayBuilder;
use raw_window_handle::HasWindowHandle;
use std::num::NonZeroU32;
use std::sync::Arc;
use tracing::{debug, error, info};
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes, WindowId};

fn non_zero(value: u32) -> NonZeroU32 {
    NonZeroU32::new(value).unwrap_or(NonZeroU32::MIN)
}

/// Keyboard window state managed within the main app
pub struct KeyboardWindowState<S: PreferenceStore> {
    /// Window handle
    pub window: Option<Arc<Window>>,
    /// OpenGL context
    gl_context: Option<PossiblyCurrentContext>,
    /// OpenGL surface
    gl_surface: Option<Surface<WindowSurface>>,
    /// Glow context
    glow_context: Option<Arc<glow::Context>>,
    /// Egui integration
    egui_glow: Option<EguiGlow>,
    /// Window ID (when created)
    window_id: Option<WindowId>,
    /// Keyboard controller
    keyboard: Keyboard<S>,
    /// Text typed so far
    text: TextArea,
    /// Key currently held with the pointer
    pointer_key: Option<&'static str>,
    config: Config,
}

impl<S: PreferenceStore> KeyboardWindowState<S> {
    pub fn new(keyboard: Keyboard<S>, config: Config) -> Self {
        Self {
            window: None,
            gl_context: None,
            gl_surface: None,
            glow_context: None,
            egui_glow: None,
            window_id: None,
            keyboard,
            text: TextArea::new(),
            pointer_key: None,
            config,
        }
    }

    pub fn is_our_window(&self, id: WindowId) -> bool {
        self.window_id == Some(id)
    }

    fn request_redraw(&self) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }

    /// Create the window (call from resumed handler)
    pub fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        if self.window.is_some() {
            return Ok(());
        }

        info!("Creating keyboard window");

        let window_attrs = WindowAttributes::default()
            .with_title(self.config.window.title.clone())
            .with_inner_size(LogicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ));

        let template = ConfigTemplateBuilder::new()
            .with_alpha_size(8)
            .with_transparency(false);

        let display_builder = DisplayBuilder::new().with_window_attributes(Some(window_attrs));

        let (window, gl_config) = match display_builder.build(event_loop, template, |configs| {
            configs
                .reduce(|accum, config| {
                    if config.num_samples() > accum.num_samples() {
                        config
                    } else {
                        accum
                    }
                })
                .expect("glutin offered no GL configs")
        }) {
            Ok((Some(window), config)) => (window, config),
            Ok((None, _)) => return Err(anyhow!("Failed to create window")),
            Err(e) => return Err(anyhow!("Failed to create window: {}", e)),
        };

        let window = Arc::new(window);
        self.window_id = Some(window.id());

        let raw_handle = window
            .window_handle()
            .context("Window has no native handle")?
            .as_raw();

        let context_attrs = ContextAttributesBuilder::new().build(Some(raw_handle));

        let gl_display = gl_config.display();

        let gl_context = unsafe { gl_display.create_context(&gl_config, &context_attrs) }
            .context("Failed to create OpenGL context")?;

        let size = window.inner_size();
        let surface_attrs = SurfaceAttributesBuilder::<WindowSurface>::new().build(
            raw_handle,
            non_zero(size.width),
            non_zero(size.height),
        );

        let gl_surface = unsafe { gl_display.create_window_surface(&gl_config, &surface_attrs) }
            .context("Failed to create OpenGL surface")?;

        let gl_context = gl_context
            .make_current(&gl_surface)
            .context("Failed to make context current")?;

        let glow_context = unsafe {
            glow::Context::from_loader_function_cstr(|s| gl_display.get_proc_address(s) as *const _)
        };
        let glow_context = Arc::new(glow_context);

        let egui_glow = EguiGlow::new(event_loop, glow_context.clone(), None, None, false);
        egui_glow.egui_ctx.set_visuals(egui::Visuals::dark());

        debug!("Window scale factor {}", window.scale_factor());

        self.window = Some(window);
        self.gl_context = Some(gl_context);
        self.gl_surface = Some(gl_surface);
        self.glow_context = Some(glow_context);
        self.egui_glow = Some(egui_glow);

        info!("Keyboard window created");
        self.request_redraw();

        Ok(())
    }

    /// Handle window event - returns true if event was consumed
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput {
                event,
                is_synthetic,
                ..
            } => {
                // Held keys are released on Focused(false) instead
                if !*is_synthetic {
                    let physical = physical_event(event);
                    debug!("Physical key {:?}", physical);
                    self.keyboard.handle_physical(&physical, &mut self.text);
                    self.request_redraw();
                }
                return true;
            }
            WindowEvent::Ime(_) => return true,
            WindowEvent::Focused(false) => {
                self.keyboard.release_all();
                self.request_redraw();
            }
            _ => {}
        }

        if let (Some(egui_glow), Some(window)) = (&mut self.egui_glow, &self.window) {
            let response = egui_glow.on_window_event(window, event);
            if response.repaint {
                window.request_redraw();
            }
            return response.consumed;
        }

        false
    }

    pub fn handle_resize(&mut self, physical_width: u32, physical_height: u32) {
        if let (Some(ref gl_context), Some(ref gl_surface)) = (&self.gl_context, &self.gl_surface) {
            gl_surface.resize(gl_context, non_zero(physical_width), non_zero(physical_height));
        }
        debug!("Window resize: {}x{}", physical_width, physical_height);
        self.request_redraw();
    }

    /// Render the window
    pub fn render(&mut self) {
        let Some(ref window) = self.window else {
            return;
        };
        let Some(ref gl_context) = self.gl_context else {
            return;
        };
        let Some(ref gl_surface) = self.gl_surface else {
            return;
        };
        let Some(ref glow_context) = self.glow_context else {
            return;
        };
        let Some(ref mut egui_glow) = self.egui_glow else {
            return;
        };

        let font_size = self.config.window.font_size;
        let show_hint = self.config.keyboard.show_hint;
        let keyboard = &mut self.keyboard;
        let text = &mut self.text;
        let pointer_key = &mut self.pointer_key;
        let mut changed = false;

        egui_glow.run(window, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                render_text_area(ui, text, egui::Id::new("keyboard_text_area"), font_size);
                ui.add_space(12.0);

                let actions = render_keyboard(ui, keyboard.views(), font_size, pointer_key);
                for (code, state) in actions {
                    match state {
                        KeyState::Pressed => keyboard.press(code, text),
                        KeyState::Released => keyboard.release(code),
                    };
                    changed = true;
                }

                if show_hint {
                    render_hint(ui);
                }
            });
        });

        {
            use glow::HasContext as _;
            unsafe {
                glow_context.clear_color(0.1, 0.1, 0.1, 1.0);
                glow_context.clear(glow::COLOR_BUFFER_BIT);
            }
        }

        egui_glow.paint(window);
        if let Err(e) = gl_surface.swap_buffers(gl_context) {
            error!("Failed to swap buffers: {}", e);
        }

        // Labels changed after this frame was laid out
        if changed {
            window.request_redraw();
        }
    }
}
