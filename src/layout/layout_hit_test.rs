use ratatui::layout::Position;

use super::LayoutRegions;
use crate::dom::NodeId;

/// The topmost node drawn at (`column`, `row`)
pub fn region_at(regions: &LayoutRegions, column: u16, row: u16) -> Option<NodeId> {
    let position = Position::new(column, row);
    regions
        .iter_topmost_first()
        .find(|(area, _)| area.contains(position))
        .map(|(_, node)| *node)
}
