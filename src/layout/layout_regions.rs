use ratatui::layout::Rect;

use crate::dom::NodeId;

/// Where each clickable node was drawn during the last frame
///
/// Later entries are drawn on top of earlier ones.
#[derive(Debug, Clone, Default)]
pub struct LayoutRegions {
    regions: Vec<(Rect, NodeId)>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous frame
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, area: Rect, node: NodeId) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, node));
        }
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn area_of(&self, node: NodeId) -> Option<Rect> {
        self.regions
            .iter()
            .rev()
            .find(|(_, n)| *n == node)
            .map(|(area, _)| *area)
    }

    pub(super) fn iter_topmost_first(&self) -> impl Iterator<Item = &(Rect, NodeId)> {
        self.regions.iter().rev()
    }
}
