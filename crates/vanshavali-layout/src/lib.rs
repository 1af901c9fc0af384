mod baseline;
mod index;
mod layout;
mod lineage;

pub use baseline::baseline_positions;
pub use index::GraphIndex;
pub use layout::{
    layout_for, sorted_children, DesktopLayout, LayoutMode, LineageLayout, MobileLayout,
    PositionMap,
};
pub use lineage::{resolve_ancestors, resolve_children, resolve_lineage, Lineage};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use vanshavali_data::{DataError, Point};

#[derive(Debug, Error)]
pub enum IndexError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error("`{child}` has more than one parent (`{first}` and `{second}`)")]
    MultipleParents {
        child: String,
        first: String,
        second: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineageError {
    #[error("`{0}` cannot be focused")]
    InvalidTarget(String),

    #[error("parent chain of `{start}` loops back through `{repeated}`")]
    Cycle { start: String, repeated: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopStyle {
    pub anchor_x: f32,
    pub start_y: f32,
    pub vertical_gap: f32,
    pub horizontal_step: f32,
    pub child_gap: f32,
    pub straight_tolerance: f32,
}

impl Default for DesktopStyle {
    fn default() -> Self {
        Self {
            anchor_x: 0.0,
            start_y: 200.0,
            vertical_gap: 800.0,
            horizontal_step: 600.0,
            child_gap: 1400.0,
            straight_tolerance: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MobileStyle {
    pub swing: f32,
    pub row_gap: f32,
    pub child_drop: f32,
    pub node_width: f32,
    pub node_gap: f32,
}

impl Default for MobileStyle {
    fn default() -> Self {
        Self {
            swing: 120.0,
            row_gap: 180.0,
            child_drop: 50.0,
            node_width: 180.0,
            node_gap: 50.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaselineStyle {
    pub root_id: String,
    /// Used as the reference origin when `root_id` is not in the dataset.
    pub fallback_root: Point,
    pub origin: Point,
    pub x_scale: f32,
    pub y_scale: f32,
}

impl BaselineStyle {
    /// Banner height plus the gap above the first generation.
    pub const DESKTOP_TREE_TOP: f32 = 15_200.0 + 500.0;

    pub fn desktop() -> Self {
        Self {
            root_id: "1".to_string(),
            fallback_root: Point::new(500.0, 0.0),
            origin: Point::new(0.0, Self::DESKTOP_TREE_TOP),
            x_scale: 12.0,
            y_scale: 5.0,
        }
    }

    pub fn mobile() -> Self {
        Self {
            fallback_root: Point::new(200.0, 0.0),
            origin: Point::new(0.0, 0.0),
            x_scale: 8.0,
            ..Self::desktop()
        }
    }
}

impl Default for BaselineStyle {
    fn default() -> Self {
        Self::desktop()
    }
}

/// Every tunable of the layout engine. Deserializes from a partial JSON
/// object; missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub desktop: DesktopStyle,
    pub mobile: MobileStyle,
    pub desktop_baseline: BaselineStyle,
    /// A partial object here is completed from the desktop baseline, not the
    /// mobile one.
    pub mobile_baseline: BaselineStyle,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            desktop: DesktopStyle::default(),
            mobile: MobileStyle::default(),
            desktop_baseline: BaselineStyle::desktop(),
            mobile_baseline: BaselineStyle::mobile(),
        }
    }
}

impl LayoutConfig {
    pub fn baseline(&self, mode: LayoutMode) -> &BaselineStyle {
        match mode {
            LayoutMode::Desktop => &self.desktop_baseline,
            LayoutMode::Mobile => &self.mobile_baseline,
        }
    }
}
