use clap::ValueEnum;
use vanshavali_ascii_render::{render_ascii, AsciiRenderOptions, NodeLabel};
use vanshavali_layout::Lineage;
use vanshavali_view::Frame;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Ascii,
    Json,
}

#[derive(Debug, Clone, Copy)]
pub struct Printer {
    pub format: Format,
    pub names: bool,
    pub width: usize,
}

impl Printer {
    pub fn frame(&self, frame: &Frame) -> Result<String> {
        match self.format {
            Format::Json => Ok(serde_json::to_string_pretty(frame)?),
            Format::Ascii => {
                let options = AsciiRenderOptions {
                    max_width: self.width,
                    label: if self.names { NodeLabel::Name } else { NodeLabel::Id },
                    ..AsciiRenderOptions::default()
                };
                let mut text = render_ascii(frame, &options);
                if let Some(selection) = &frame.selection {
                    text.push_str(&format!("\n\nselected: {} ({})", selection.name, selection.id));
                }
                Ok(text)
            }
        }
    }

    pub fn lineage(&self, lineage: &Lineage) -> Result<String> {
        match self.format {
            Format::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "ancestors": lineage.ancestors,
                "target": lineage.target,
                "children": lineage.children,
            }))?),
            Format::Ascii => {
                let path: Vec<&str> = lineage.path().collect();
                let mut text = path.join(" > ");
                if !lineage.children.is_empty() {
                    text.push_str(&format!("\nchildren: {}", lineage.children.join(", ")));
                }
                Ok(text)
            }
        }
    }
}
