//! LikeC4 模型
//!
//! 输出 `specification` / `model` / `views` 三个块，外部系统带 `#external` 标签。

use crate::diagram::{Diagram, ElementKind};
use crate::format::{DiagramFormat, DiagramRenderer};
use crate::printer::{Printer, Quoting};

const QUOTING: Quoting = Quoting::LikeC4;

pub const EXTERNAL_TAG: &str = "external";

/// LikeC4 生成器
pub struct LikeC4Renderer {
    view: String,
}

impl LikeC4Renderer {
    pub fn new() -> Self {
        Self {
            view: "index".to_string(),
        }
    }

    pub fn with_view(mut self, name: &str) -> Self {
        self.view = Diagram::node_id(name);
        self
    }
}

impl Default for LikeC4Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagramRenderer for LikeC4Renderer {
    fn format(&self) -> DiagramFormat {
        DiagramFormat::LikeC4
    }

    fn render(&self, diagram: &Diagram) -> String {
        let mut p = Printer::new("  ");

        p.open("specification");
        p.line("element person");
        p.line("element system");
        p.line(format!("tag {}", EXTERNAL_TAG));
        p.close();
        p.blank();

        p.open("model");
        for element in diagram.elements() {
            let kind = match element.kind {
                ElementKind::Person => "person",
                ElementKind::System | ElementKind::ExternalSystem => "system",
            };
            p.open(format!("{} = {}", element.id, kind));
            // 标签必须在块的开头
            if element.kind == ElementKind::ExternalSystem {
                p.line(format!("#{}", EXTERNAL_TAG));
            }
            p.line(format!("title {}", QUOTING.quote(&element.label)));
            if !element.description.is_empty() {
                p.line(format!("description {}", QUOTING.quote(&element.description)));
            }
            p.close();
        }
        if diagram.has_elements() && diagram.has_edges() {
            p.blank();
        }
        for edge in diagram.edges() {
            p.line(format!(
                "{} -> {} {}",
                edge.from,
                edge.to,
                QUOTING.quote(&edge.label)
            ));
        }
        p.close();
        p.blank();

        p.open("views");
        p.open(format!("view {}", self.view));
        p.line("include *");
        p.close();
        p.close();

        p.finish()
    }
}
