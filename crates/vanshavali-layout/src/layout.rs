use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use vanshavali_data::Point;

use crate::index::GraphIndex;
use crate::lineage::Lineage;
use crate::{DesktopStyle, LayoutConfig, MobileStyle};

pub type PositionMap = HashMap<String, Point>;

/// Places a resolved lineage. Every id on the path and every child gets a
/// position; nothing else does.
pub trait LineageLayout {
    fn place(&self, lineage: &Lineage, index: &GraphIndex) -> PositionMap;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    Desktop,
    Mobile,
}

impl LayoutMode {
    pub const MOBILE_BREAKPOINT: f32 = 768.0;

    pub fn for_viewport_width(width: f32) -> Self {
        if width < Self::MOBILE_BREAKPOINT {
            LayoutMode::Mobile
        } else {
            LayoutMode::Desktop
        }
    }
}

pub fn layout_for(mode: LayoutMode, config: &LayoutConfig) -> Box<dyn LineageLayout> {
    match mode {
        LayoutMode::Desktop => Box::new(DesktopLayout::new(config.desktop.clone())),
        LayoutMode::Mobile => Box::new(MobileLayout::new(config.mobile.clone())),
    }
}

/// Free-zoom staircase: each generation steps down, and sideways in the
/// direction it sat relative to its parent in the reference layout.
#[derive(Debug, Clone, Default)]
pub struct DesktopLayout {
    style: DesktopStyle,
}

impl DesktopLayout {
    pub fn new(style: DesktopStyle) -> Self {
        Self { style }
    }

    fn step_offset(&self, parent_x: Option<f32>, current_x: Option<f32>) -> f32 {
        let (Some(parent_x), Some(current_x)) = (parent_x, current_x) else {
            return 0.0;
        };
        if current_x < parent_x - self.style.straight_tolerance {
            -self.style.horizontal_step
        } else if current_x > parent_x + self.style.straight_tolerance {
            self.style.horizontal_step
        } else {
            0.0
        }
    }
}

impl LineageLayout for DesktopLayout {
    fn place(&self, lineage: &Lineage, index: &GraphIndex) -> PositionMap {
        let style = &self.style;
        let mut positions = PositionMap::new();

        let mut previous: Option<(&str, Point)> = None;
        for id in lineage.path() {
            let placed = match previous {
                None => Point::new(style.anchor_x, style.start_y),
                Some((parent, at)) => {
                    let dx = self.step_offset(original_x(index, parent), original_x(index, id));
                    Point::new(at.x + dx, at.y + style.vertical_gap)
                }
            };
            positions.insert(id.to_string(), placed);
            previous = Some((id, placed));
        }

        let target = previous.map_or(Point::new(style.anchor_x, style.start_y), |(_, at)| at);
        place_child_row(
            &mut positions,
            &sorted_children(lineage, index),
            target.x,
            target.y + style.vertical_gap,
            style.child_gap,
        );
        positions
    }
}

/// Step navigation: a breadcrumb that swings left and right by path index,
/// with the children of the current node in a row underneath.
#[derive(Debug, Clone, Default)]
pub struct MobileLayout {
    style: MobileStyle,
}

impl MobileLayout {
    pub fn new(style: MobileStyle) -> Self {
        Self { style }
    }

    fn swing_x(&self, path_index: usize) -> f32 {
        if path_index == 0 {
            0.0
        } else if path_index % 2 == 1 {
            -self.style.swing
        } else {
            self.style.swing
        }
    }
}

impl LineageLayout for MobileLayout {
    fn place(&self, lineage: &Lineage, index: &GraphIndex) -> PositionMap {
        let style = &self.style;
        let mut positions = PositionMap::new();

        for (path_index, id) in lineage.path().enumerate() {
            positions.insert(
                id.to_string(),
                Point::new(self.swing_x(path_index), path_index as f32 * style.row_gap),
            );
        }

        let path_len = lineage.path_len();
        place_child_row(
            &mut positions,
            &sorted_children(lineage, index),
            self.swing_x(path_len - 1),
            path_len as f32 * style.row_gap + style.child_drop,
            style.node_width + style.node_gap,
        );
        positions
    }
}

fn original_x(index: &GraphIndex, id: &str) -> Option<f32> {
    index.person(id).map(|person| person.position.x)
}

/// Children ordered left to right by reference x. Equal x keeps the order
/// of the people list.
pub fn sorted_children<'a>(lineage: &'a Lineage, index: &GraphIndex) -> Vec<&'a str> {
    let mut scored: Vec<(&str, f32, usize)> = lineage
        .children
        .iter()
        .map(|child| {
            (
                child.as_str(),
                original_x(index, child).unwrap_or(0.0),
                index.order_of(child).unwrap_or(usize::MAX),
            )
        })
        .collect();
    scored.sort_by(|a, b| {
        a.1.partial_cmp(&b.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.2.cmp(&b.2))
    });
    scored.into_iter().map(|(id, _, _)| id).collect()
}

fn place_child_row(
    positions: &mut PositionMap,
    children: &[&str],
    center_x: f32,
    y: f32,
    pitch: f32,
) {
    let row_width = children.len() as f32 * pitch;
    let first_x = center_x - row_width / 2.0 + pitch / 2.0;
    for (slot, child) in children.iter().enumerate() {
        positions.insert(
            child.to_string(),
            Point::new(first_x + slot as f32 * pitch, y),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_row_is_centered_on_parent() {
        let mut positions = PositionMap::new();
        place_child_row(&mut positions, &["a", "b", "c"], 100.0, 50.0, 10.0);
        assert_eq!(positions["a"], Point::new(90.0, 50.0));
        assert_eq!(positions["b"], Point::new(100.0, 50.0));
        assert_eq!(positions["c"], Point::new(110.0, 50.0));
    }

    #[test]
    fn single_child_sits_under_parent() {
        let mut positions = PositionMap::new();
        place_child_row(&mut positions, &["only"], -600.0, 0.0, 1400.0);
        assert_eq!(positions["only"].x, -600.0);
    }

    #[test]
    fn straight_tolerance_absorbs_small_shifts() {
        let layout = DesktopLayout::default();
        assert_eq!(layout.step_offset(Some(100.0), Some(109.0)), 0.0);
        assert_eq!(layout.step_offset(Some(100.0), Some(111.0)), 600.0);
        assert_eq!(layout.step_offset(Some(100.0), Some(89.0)), -600.0);
        assert_eq!(layout.step_offset(None, Some(89.0)), 0.0);
    }

    #[test]
    fn mobile_swing_alternates_after_root() {
        let layout = MobileLayout::default();
        let swings: Vec<f32> = (0..5).map(|i| layout.swing_x(i)).collect();
        assert_eq!(swings, vec![0.0, -120.0, 120.0, -120.0, 120.0]);
    }

    #[test]
    fn breakpoint_selects_mobile_below_768() {
        assert_eq!(LayoutMode::for_viewport_width(767.0), LayoutMode::Mobile);
        assert_eq!(LayoutMode::for_viewport_width(768.0), LayoutMode::Desktop);
    }
}
