use std::sync::Arc;

use anyhow::Context;
use pixels::{wgpu::TextureFormat, Pixels, PixelsBuilder, SurfaceTexture};
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::ActiveEventLoop,
    window::{Window, WindowAttributes, WindowId},
};

use super::{frame::RenderFrame, sleeper::Sleeper};

pub(super) struct RendererWindow {
    config: RendererWindowConfig,
    resumed_window: Option<ResumedWindow>,
    sleeper: Sleeper,
    error: Option<anyhow::Error>,
}

impl RendererWindow {
    pub fn new(config: RendererWindowConfig) -> Self {
        let sleeper = Sleeper::from_fps(config.target_fps);

        Self {
            config,
            resumed_window: None,
            sleeper,
            error: None,
        }
    }

    /// The error that stopped the event loop, if any.
    pub fn take_error(&mut self) -> Option<anyhow::Error> {
        self.error.take()
    }

    fn create_window(&self, event_loop: &ActiveEventLoop) -> anyhow::Result<ResumedWindow> {
        let window = Arc::new(
            event_loop
                .create_window(
                    WindowAttributes::default()
                        .with_title(self.config.title.clone())
                        .with_inner_size(PhysicalSize::new(self.config.width, self.config.height))
                        .with_resizable(false),
                )
                .context("Creating window")?,
        );

        // The buffer keeps the board's pixel size, pixels scales it onto whatever the surface is.
        let pixels = {
            let window_size = window.inner_size();

            let surface_texture =
                SurfaceTexture::new(window_size.width, window_size.height, window.clone());

            PixelsBuilder::new(self.config.width, self.config.height, surface_texture)
                .texture_format(TextureFormat::Rgba8UnormSrgb)
                .build()
                .context("Creating pixels buffer")?
        };

        window.request_redraw();

        Ok(ResumedWindow { window, pixels })
    }

    fn redraw(&mut self) -> anyhow::Result<()> {
        let Some(ResumedWindow { window, pixels }) = self.resumed_window.as_mut() else {
            return Ok(());
        };

        let next_frame = RenderFrame {
            width: self.config.width,
            height: self.config.height,
            buffer: pixels.frame_mut(),
        };

        (self.config.draw_callback)(next_frame)?;

        pixels.render().context("Rendering with pixels")?;

        // Holds up the event loop until the frame is due, the board only advances on redraw.
        self.sleeper.sleep();
        window.request_redraw();

        Ok(())
    }

    fn resize(&mut self, PhysicalSize { width, height }: PhysicalSize<u32>) -> anyhow::Result<()> {
        let Some(ResumedWindow { window, pixels }) = self.resumed_window.as_mut() else {
            return Ok(());
        };

        // Minimized.
        if width == 0 || height == 0 {
            return Ok(());
        }

        pixels
            .resize_surface(width, height)
            .context("Resizing pixels surface")?;
        window.request_redraw();

        Ok(())
    }
}

pub struct RendererWindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub target_fps: u64,
    pub draw_callback: Box<dyn FnMut(RenderFrame) -> anyhow::Result<()>>,
}

struct ResumedWindow {
    window: Arc<Window>,
    pixels: Pixels<'static>,
}

impl ApplicationHandler for RendererWindow {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.resumed_window.is_some() {
            return;
        }

        match self.create_window(event_loop) {
            Ok(resumed_window) => self.resumed_window = Some(resumed_window),
            Err(error) => {
                self.error = Some(error);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        let result = match event {
            WindowEvent::RedrawRequested => self.redraw(),
            WindowEvent::Resized(size) => self.resize(size),
            WindowEvent::CloseRequested => {
                event_loop.exit();
                Ok(())
            }
            _ => Ok(()),
        };

        if let Err(error) = result {
            self.error = Some(error);
            event_loop.exit();
        }
    }
}
