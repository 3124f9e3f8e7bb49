//! C4-PlantUML 上下文图

use crate::diagram::{Diagram, Element, ElementKind};
use crate::format::{DiagramFormat, DiagramRenderer};
use crate::printer::{Printer, Quoting};

pub const C4_CONTEXT_INCLUDE: &str =
    "https://raw.githubusercontent.com/plantuml-stdlib/C4-PlantUML/master/C4_Context.puml";

const QUOTING: Quoting = Quoting::PlantUml;

/// PlantUML 生成器
pub struct PlantUmlRenderer {
    title: String,
}

impl PlantUmlRenderer {
    pub fn new() -> Self {
        Self {
            title: "Architecture".to_string(),
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    fn declaration(element: &Element) -> String {
        let keyword = match element.kind {
            ElementKind::Person => "Person",
            ElementKind::System => "System",
            ElementKind::ExternalSystem => "System_Ext",
        };
        if element.description.is_empty() {
            format!("{}({}, {})", keyword, element.id, QUOTING.quote(&element.label))
        } else {
            format!(
                "{}({}, {}, {})",
                keyword,
                element.id,
                QUOTING.quote(&element.label),
                QUOTING.quote(&element.description)
            )
        }
    }
}

impl Default for PlantUmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagramRenderer for PlantUmlRenderer {
    fn format(&self) -> DiagramFormat {
        DiagramFormat::PlantUml
    }

    fn render(&self, diagram: &Diagram) -> String {
        let mut p = Printer::new("  ");
        p.line("@startuml");
        p.line(format!("!include {}", C4_CONTEXT_INCLUDE));
        p.line(format!("title {}", QUOTING.escape(&self.title)));

        for element in diagram.elements() {
            p.line(Self::declaration(element));
        }

        if diagram.has_edges() {
            p.blank();
            for edge in diagram.edges() {
                p.line(format!(
                    "Rel({}, {}, {})",
                    edge.from,
                    edge.to,
                    QUOTING.quote(&edge.label)
                ));
            }
        }

        p.line("@enduml");
        p.finish()
    }
}
