use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use tracing::{debug, info};
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::window::{Window as WinitWindow, WindowAttributes};

use crate::config::FrameConfig;
use crate::engine::{Module, ProcessTime};

pub mod viewing_volume;
pub mod viewport;

pub use viewing_volume::ViewingVolume;
pub use viewport::Viewport;

pub type SharedFrame = Rc<RefCell<Frame>>;

/// The display surface. Describes the window the platform should open and
/// keeps hold of it once it exists.
pub struct Frame {
    winit_window: Option<Arc<WinitWindow>>,
    title: String,
    is_focused: bool,
    width: u32,
    height: u32,
    depth: u32,
}

impl Frame {
    pub fn new(width: u32, height: u32, depth: u32) -> Self {
        Frame {
            winit_window: None,
            title: String::new(),
            is_focused: false,
            width,
            height,
            depth,
        }
    }

    pub fn from_config(config: &FrameConfig) -> Self {
        let mut frame = Frame::new(config.width, config.height, config.depth);
        frame.title = config.title.clone();
        frame
    }

    pub fn window_attributes(&self) -> WindowAttributes {
        WinitWindow::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(PhysicalSize::new(self.width, self.height))
    }

    pub fn set_window(&mut self, winit_window: Arc<WinitWindow>) {
        let size = winit_window.inner_size();
        info!(
            "Frame attached to window {:?} ({}x{}, {}bpp requested)",
            winit_window.id(),
            size.width,
            size.height,
            self.depth
        );
        self.width = size.width;
        self.height = size.height;
        self.winit_window = Some(winit_window);
    }

    pub fn get_winit_window(&self) -> Option<Arc<WinitWindow>> {
        self.winit_window.clone()
    }

    pub fn request_redraw(&self) {
        if let Some(window) = &self.winit_window {
            window.request_redraw();
        }
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.is_focused = focused;
    }

    pub fn is_focused(&self) -> bool {
        self.is_focused
    }

    pub fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn get_width(&self) -> u32 {
        self.width
    }

    pub fn get_height(&self) -> u32 {
        self.height
    }

    pub fn get_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn get_depth(&self) -> u32 {
        self.depth
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_owned();
        if let Some(window) = &self.winit_window {
            window.set_title(title);
        }
    }

    pub fn get_title(&self) -> &str {
        &self.title
    }
}

impl Module for Frame {
    fn name(&self) -> &str {
        "frame"
    }

    fn initialize(&mut self) {
        debug!(
            "Frame ready at {}x{}x{} (window attached: {})",
            self.width,
            self.height,
            self.depth,
            self.winit_window.is_some()
        );
    }

    fn process(&mut self, _time: &ProcessTime) {}

    fn deinitialize(&mut self) {
        self.winit_window = None;
    }

    fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::Focused(is_focused) => self.set_focused(*is_focused),
            WindowEvent::Resized(new_size) => self.set_size(new_size.width, new_size.height),
            _ => (),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_keeps_dimensions_and_depth() {
        let frame = Frame::from_config(&FrameConfig::default());
        assert_eq!(frame.get_size(), (800, 600));
        assert_eq!(frame.get_depth(), 32);
        assert!(frame.get_winit_window().is_none());
    }

    #[test]
    fn tracks_resize_and_focus_events() {
        let mut frame = Frame::new(800, 600, 32);
        frame.handle_window_event(&WindowEvent::Resized(PhysicalSize::new(1024, 768)));
        frame.handle_window_event(&WindowEvent::Focused(true));
        assert_eq!(frame.get_size(), (1024, 768));
        assert!(frame.is_focused());
    }

    #[test]
    fn title_can_change_before_the_window_exists() {
        let mut frame = Frame::new(800, 600, 32);
        frame.set_title("renamed");
        assert_eq!(frame.get_title(), "renamed");
    }
}
