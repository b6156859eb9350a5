//! Drag hover tracking for the drop zone.
//!
//! `dragenter`/`dragleave` fire for every child element the pointer crosses,
//! so a single leave does not mean the drag has left the zone. Counting
//! enters against leaves gives a stable "drag is over the zone" flag.

/// Nesting depth of an in-progress drag over the drop zone
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragDepth {
    depth: u32,
}

impl DragDepth {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer entered the zone or one of its children
    pub fn enter(&mut self) {
        self.depth = self.depth.saturating_add(1);
    }

    /// Pointer left the zone or one of its children
    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Drop or cancel: the drag is over, whatever the count says
    pub fn reset(&mut self) {
        self.depth = 0;
    }

    pub fn is_active(&self) -> bool {
        self.depth > 0
    }
}
