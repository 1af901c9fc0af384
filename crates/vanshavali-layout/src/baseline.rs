use vanshavali_data::Point;

use crate::index::GraphIndex;
use crate::layout::PositionMap;
use crate::BaselineStyle;

/// Overview positions: the reference layout re-centred on the root person
/// and stretched. The decoration keeps the position it was authored with.
pub fn baseline_positions(index: &GraphIndex, style: &BaselineStyle) -> PositionMap {
    let dataset = index.dataset();
    let root = dataset
        .person(&style.root_id)
        .map_or(style.fallback_root, |person| person.position);

    let mut positions: PositionMap = dataset
        .people
        .iter()
        .map(|person| {
            let x = style.origin.x + (person.position.x - root.x) * style.x_scale;
            let y = style.origin.y + (person.position.y - root.y) * style.y_scale;
            (person.id.clone(), Point::new(x, y))
        })
        .collect();

    if let Some(decoration) = &dataset.decoration {
        positions.insert(decoration.id.clone(), decoration.position);
    }
    positions
}
