use glam::Mat4;

use crate::display::{SharedFrame, ViewingVolume};

/// A region of the frame plus the camera used to render into it. Covers the
/// whole frame and follows it when it is resized.
pub struct Viewport {
    frame: SharedFrame,
    viewing_volume: Option<ViewingVolume>,
}

impl Viewport {
    pub fn new(frame: SharedFrame) -> Self {
        Viewport {
            frame,
            viewing_volume: None,
        }
    }

    pub fn set_viewing_volume(&mut self, viewing_volume: ViewingVolume) {
        self.viewing_volume = Some(viewing_volume);
    }

    pub fn viewing_volume(&self) -> Option<&ViewingVolume> {
        self.viewing_volume.as_ref()
    }

    pub fn viewing_volume_mut(&mut self) -> Option<&mut ViewingVolume> {
        self.viewing_volume.as_mut()
    }

    pub fn frame(&self) -> &SharedFrame {
        &self.frame
    }

    /// `[left, top, width, height]` in pixels.
    pub fn dimensions(&self) -> [u32; 4] {
        let (width, height) = self.frame.borrow().get_size();
        [0, 0, width, height]
    }

    pub fn aspect_ratio(&self) -> f32 {
        let [_, _, width, height] = self.dimensions();
        if width == 0 || height == 0 {
            return 1.0;
        }
        width as f32 / height as f32
    }

    /// Combined projection * view matrix, if a camera is bound.
    pub fn view_projection(&self) -> Option<Mat4> {
        self.viewing_volume
            .as_ref()
            .map(|volume| volume.projection_matrix(self.aspect_ratio()) * volume.view_matrix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::Frame;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn follows_frame_size() {
        let frame = Rc::new(RefCell::new(Frame::new(800, 600, 32)));
        let viewport = Viewport::new(Rc::clone(&frame));
        assert_eq!(viewport.dimensions(), [0, 0, 800, 600]);

        frame.borrow_mut().set_size(400, 400);
        assert_eq!(viewport.dimensions(), [0, 0, 400, 400]);
        assert_eq!(viewport.aspect_ratio(), 1.0);
    }

    #[test]
    fn zero_height_frame_does_not_divide_by_zero() {
        let frame = Rc::new(RefCell::new(Frame::new(800, 0, 32)));
        assert_eq!(Viewport::new(frame).aspect_ratio(), 1.0);
    }

    #[test]
    fn zero_width_frame_keeps_the_projection_finite() {
        let frame = Rc::new(RefCell::new(Frame::new(0, 600, 32)));
        let mut viewport = Viewport::new(frame);
        assert_eq!(viewport.aspect_ratio(), 1.0);

        viewport.set_viewing_volume(ViewingVolume::new());
        let view_projection = viewport.view_projection().expect("camera bound");
        assert!(view_projection.is_finite());
    }

    #[test]
    fn view_projection_requires_a_camera() {
        let frame = Rc::new(RefCell::new(Frame::new(800, 600, 32)));
        let mut viewport = Viewport::new(frame);
        assert!(viewport.view_projection().is_none());

        viewport.set_viewing_volume(ViewingVolume::new());
        assert!(viewport.view_projection().is_some());
    }
}
