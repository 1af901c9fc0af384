use vanshavali_view::{Frame, NodeView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeLabel {
    #[default]
    Id,
    Name,
}

#[derive(Debug, Clone)]
pub struct AsciiRenderOptions {
    pub max_width: usize,
    pub max_height: usize,
    pub label: NodeLabel,
}

impl Default for AsciiRenderOptions {
    fn default() -> Self {
        Self {
            max_width: 120,
            max_height: 40,
            label: NodeLabel::Id,
        }
    }
}

/// Draws the visible part of a frame. The selected node gets `*` corners.
pub fn render_ascii(frame: &Frame, options: &AsciiRenderOptions) -> String {
    let nodes: Vec<&NodeView> = frame.visible_nodes().collect();
    if nodes.is_empty() {
        return String::new();
    }

    let min_x = nodes.iter().map(|n| n.position.x).fold(f32::INFINITY, f32::min);
    let min_y = nodes.iter().map(|n| n.position.y).fold(f32::INFINITY, f32::min);
    let max_x = nodes.iter().map(|n| n.position.x).fold(f32::NEG_INFINITY, f32::max);
    let max_y = nodes.iter().map(|n| n.position.y).fold(f32::NEG_INFINITY, f32::max);

    let width = (max_x - min_x).max(1.0);
    let height = (max_y - min_y).max(1.0);
    let scale_x = (width / options.max_width.max(1) as f32).max(1.0);
    let scale_y = (height / options.max_height.max(1) as f32).max(1.0);
    let projection = Projection {
        origin: (min_x, min_y),
        scale: scale_x.max(scale_y),
        // Room for half a box on every side.
        margin: 8,
    };

    let grid_width =
        ((width / projection.scale).ceil() as usize).max(1) + 2 * projection.margin as usize;
    let grid_height = ((height / projection.scale).ceil() as usize).max(1) + 4;

    let mut grid = vec![vec![' '; grid_width]; grid_height];

    // Edges first so nodes appear on top.
    for edge in frame.visible_edges() {
        let (Some(parent), Some(child)) = (frame.node(&edge.parent), frame.node(&edge.child))
        else {
            continue;
        };
        let (x1, y1) = projection.map(parent);
        let (x2, y2) = projection.map(child);
        let mid_y = (y1 + y2) / 2;
        draw_line(&mut grid, x1, y1, x1, mid_y);
        draw_line(&mut grid, x1, mid_y, x2, mid_y);
        draw_line(&mut grid, x2, mid_y, x2, y2);
    }

    for node in &nodes {
        draw_node(&mut grid, node, &projection, options.label);
    }

    grid.into_iter()
        .map(|row| row.into_iter().collect::<String>().trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
        .trim_end()
        .to_string()
}

struct Projection {
    origin: (f32, f32),
    scale: f32,
    margin: i32,
}

impl Projection {
    fn map(&self, node: &NodeView) -> (i32, i32) {
        let x = ((node.position.x - self.origin.0) / self.scale).round() as i32 + self.margin;
        let y = ((node.position.y - self.origin.1) / self.scale).round() as i32 + 2;
        (x, y)
    }
}

fn draw_node(grid: &mut [Vec<char>], node: &NodeView, projection: &Projection, label: NodeLabel) {
    let (cx, cy) = projection.map(node);
    let label = match label {
        NodeLabel::Id => node.id.as_str(),
        NodeLabel::Name => node.name.as_str(),
    };
    let min_width = 3usize;
    let box_width = (label.chars().count() + 2).max(min_width) as i32;
    let box_height = 3i32;

    let left = cx - box_width / 2;
    let right = left + box_width - 1;
    let top = cy - box_height / 2;
    let bottom = top + box_height - 1;

    for x in left..=right {
        put_cell(grid, x, top, '-');
        put_cell(grid, x, bottom, '-');
    }
    for y in top..=bottom {
        put_cell(grid, left, y, '|');
        put_cell(grid, right, y, '|');
    }

    let corner = if node.roles.selected { '*' } else { '+' };
    put_cell(grid, left, top, corner);
    put_cell(grid, right, top, corner);
    put_cell(grid, left, bottom, corner);
    put_cell(grid, right, bottom, corner);

    for x in (left + 1)..right {
        put_cell(grid, x, cy, ' ');
    }
    for (idx, ch) in label.chars().take((right - left - 1).max(0) as usize).enumerate() {
        put_cell(grid, left + 1 + idx as i32, cy, ch);
    }
}

fn draw_line(grid: &mut [Vec<char>], x1: i32, y1: i32, x2: i32, y2: i32) {
    if x1 == x2 {
        let (start, end) = if y1 <= y2 { (y1, y2) } else { (y2, y1) };
        for y in start..=end {
            set_cell(grid, x1, y, '|');
        }
        return;
    }

    if y1 == y2 {
        let (start, end) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        for x in start..=end {
            set_cell(grid, x, y1, '-');
        }
    }
}

/// Unconditional write, used for node boxes.
fn put_cell(grid: &mut [Vec<char>], x: i32, y: i32, ch: char) {
    if let Some(cell) = cell_mut(grid, x, y) {
        *cell = ch;
    }
}

fn set_cell(grid: &mut [Vec<char>], x: i32, y: i32, ch: char) {
    if let Some(cell) = cell_mut(grid, x, y) {
        let existing = *cell;
        if existing == ' ' || existing == ch || existing == '-' || existing == '|' || existing == '+' {
            *cell = merge_char(existing, ch);
        }
    }
}

fn cell_mut(grid: &mut [Vec<char>], x: i32, y: i32) -> Option<&mut char> {
    if y < 0 || x < 0 {
        return None;
    }
    grid.get_mut(y as usize)?.get_mut(x as usize)
}

fn merge_char(existing: char, incoming: char) -> char {
    if existing == ' ' {
        return incoming;
    }
    if existing == incoming {
        return existing;
    }
    match (existing, incoming) {
        ('-', '|') | ('|', '-') => '+',
        ('+', _) | (_, '+') => '+',
        _ => incoming,
    }
}
