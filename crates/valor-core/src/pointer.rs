use glam::DVec2;

/// Last known pointer position relative to the drawing surface.
///
/// Both fields are last-write-wins; input handlers write them and the frame
/// callback copies the whole value once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub position: DVec2,
    pub inside: bool,
}

impl PointerState {
    pub fn moved_to(&mut self, x: f64, y: f64) {
        self.position = DVec2::new(x, y);
    }

    pub fn entered(&mut self) {
        self.inside = true;
    }

    pub fn left(&mut self) {
        self.inside = false;
    }

    /// Position to attract towards, or `None` when the pointer is off the surface.
    #[inline]
    pub fn attractor(&self) -> Option<DVec2> {
        self.inside.then_some(self.position)
    }
}
