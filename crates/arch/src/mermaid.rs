use crate::diagram::{Diagram, ElementKind};
use crate::format::{DiagramFormat, DiagramRenderer};
use crate::printer::{Printer, Quoting};

const QUOTING: Quoting = Quoting::Mermaid;

/// Mermaid C4Context 图生成器
pub struct MermaidRenderer {
    indent: &'static str,
}

impl MermaidRenderer {
    pub fn new() -> Self {
        Self { indent: "  " }
    }
}

impl Default for MermaidRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagramRenderer for MermaidRenderer {
    fn format(&self) -> DiagramFormat {
        DiagramFormat::Mermaid
    }

    fn render(&self, diagram: &Diagram) -> String {
        let mut p = Printer::new(self.indent);
        p.line("C4Context");
        p.indent();

        // 生成节点
        for element in diagram.elements() {
            let keyword = match element.kind {
                ElementKind::Person => "Person",
                ElementKind::System => "System",
                ElementKind::ExternalSystem => "System_Ext",
            };
            let mut args = vec![element.id.clone(), QUOTING.quote(&element.label)];
            if !element.description.is_empty() {
                args.push(QUOTING.quote(&element.description));
            }
            p.line(format!("{}({})", keyword, args.join(", ")));
        }

        // 生成边
        for edge in diagram.edges() {
            p.line(format!(
                "Rel({}, {}, {})",
                edge.from,
                edge.to,
                QUOTING.quote(&edge.label)
            ));
        }

        p.dedent();
        p.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use memory::{Graph, Person, Relationship, System};

    fn render(graph: &Graph) -> String {
        MermaidRenderer::new().render(&Diagram::from_graph(graph))
    }

    #[test]
    fn test_empty_graph_root_only() {
        assert_eq!(render(&Graph::new()), "C4Context");
    }

    #[test]
    fn test_body_is_indented() {
        let mut graph = Graph::new();
        graph.upsert_person(
            "ops",
            Person {
                label: "Operator".to_string(),
                description: "On call".to_string(),
            },
        );
        graph.upsert_system(
            "db",
            System {
                label: "Database".to_string(),
                description: String::new(),
                external: false,
            },
        );
        graph.upsert_relationship(Relationship::new("ops", "db", "Backs up"));

        let out = render(&graph);
        assert_eq!(
            out,
            "C4Context\n  Person(ops, \"Operator\", \"On call\")\n  System(db, \"Database\")\n  Rel(ops, db, \"Backs up\")"
        );
    }

    #[test]
    fn test_external_uses_system_ext() {
        let mut graph = Graph::new();
        graph.upsert_system(
            "stripe",
            System {
                label: "Stripe".to_string(),
                description: "Payments".to_string(),
                external: true,
            },
        );
        let out = render(&graph);
        assert!(out.contains("  System_Ext(stripe, \"Stripe\", \"Payments\")"));
    }

    #[test]
    fn test_only_relationships() {
        let mut graph = Graph::new();
        graph.upsert_relationship(Relationship::new("a", "b", "calls"));
        let out = render(&graph);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines, vec!["C4Context", "  Rel(a, b, \"calls\")"]);
    }

    #[test]
    fn test_generator_default() {
        let renderer = MermaidRenderer::default();
        assert_eq!(renderer.indent, "  ");
    }
}
