//! 注入 prompt 用的文本摘要

use crate::types::Graph;

impl Graph {
    /// 生成多行摘要；三类数据都为空时返回 `None`
    ///
    /// 顺序固定为 Systems / People / Relationships，空的段落整行省略。
    pub fn summary_text(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }

        let mut lines = Vec::new();

        if !self.systems.is_empty() {
            let entries: Vec<String> = self
                .systems
                .values()
                .map(|s| {
                    let kind = if s.external { "external" } else { "internal" };
                    format!("{} ({}) — {}", s.label, kind, s.description)
                })
                .collect();
            lines.push(format!("Systems: {}", entries.join(" | ")));
        }

        if !self.people.is_empty() {
            let entries: Vec<String> = self
                .people
                .values()
                .map(|p| {
                    if p.description.is_empty() {
                        p.label.clone()
                    } else {
                        format!("{} — {}", p.label, p.description)
                    }
                })
                .collect();
            lines.push(format!("People: {}", entries.join(" | ")));
        }

        if !self.relationships.is_empty() {
            let entries: Vec<String> = self
                .relationships
                .iter()
                .map(|r| format!("{} → {} \"{}\"", r.from, r.to, r.label))
                .collect();
            lines.push(format!("Relationships: {}", entries.join(" | ")));
        }

        Some(lines.join("\n"))
    }
}
