//! 行缓冲 + 缩进 + 各 DSL 的字符串字面量转义

/// 各 DSL 的字符串字面量规则
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quoting {
    /// `"` -> `&#34;`，换行 -> `\n`
    PlantUml,
    /// `"` -> `#quot;`，换行 -> `<br/>`
    Mermaid,
    /// 反斜杠转义 `\` 与 `"`，换行 -> `\n`
    LikeC4,
}

impl Quoting {
    /// 转义后加双引号
    pub fn quote(self, text: &str) -> String {
        format!("\"{}\"", self.escape(text))
    }

    pub fn escape(self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '"' => out.push_str(match self {
                    Self::PlantUml => "&#34;",
                    Self::Mermaid => "#quot;",
                    Self::LikeC4 => "\\\"",
                }),
                '\\' if self == Self::LikeC4 => out.push_str("\\\\"),
                '\r' | '\n' => {
                    // \r\n 视为一个换行
                    if c == '\r' && chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    out.push_str(match self {
                        Self::PlantUml | Self::LikeC4 => "\\n",
                        Self::Mermaid => "<br/>",
                    });
                }
                c => out.push(c),
            }
        }
        out
    }
}

/// 按行输出，管理缩进层级
pub struct Printer {
    lines: Vec<String>,
    depth: usize,
    indent: &'static str,
}

impl Printer {
    pub fn new(indent: &'static str) -> Self {
        Self {
            lines: Vec::new(),
            depth: 0,
            indent,
        }
    }

    /// 按当前缩进输出一行
    pub fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        self.lines
            .push(format!("{}{}", self.indent.repeat(self.depth), text));
    }

    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    pub fn indent(&mut self) {
        self.depth += 1;
    }

    pub fn dedent(&mut self) {
        debug_assert!(self.depth > 0, "dedent below zero");
        self.depth = self.depth.saturating_sub(1);
    }

    /// 输出 `header {` 并进入下一层
    pub fn open(&mut self, header: impl AsRef<str>) {
        self.line(format!("{} {{", header.as_ref()));
        self.indent();
    }

    /// 回到上一层并输出 `}`
    pub fn close(&mut self) {
        self.dedent();
        self.line("}");
    }

    pub fn finish(self) -> String {
        debug_assert_eq!(self.depth, 0, "unbalanced blocks");
        self.lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_plain_text_unchanged() {
        for quoting in [Quoting::PlantUml, Quoting::Mermaid, Quoting::LikeC4] {
            assert_eq!(quoting.quote("Routes traffic"), "\"Routes traffic\"");
        }
    }

    #[test]
    fn test_quote_embedded_double_quote() {
        let text = r#"The "core" API"#;
        assert_eq!(Quoting::PlantUml.quote(text), "\"The &#34;core&#34; API\"");
        assert_eq!(Quoting::Mermaid.quote(text), "\"The #quot;core#quot; API\"");
        assert_eq!(Quoting::LikeC4.quote(text), r#""The \"core\" API""#);
    }

    #[test]
    fn test_likec4_escapes_backslash() {
        assert_eq!(Quoting::LikeC4.escape(r"C:\data"), r"C:\\data");
        // 其他格式中反斜杠不是转义符
        assert_eq!(Quoting::PlantUml.escape(r"C:\data"), r"C:\data");
    }

    #[test]
    fn test_newlines_stay_on_one_line() {
        assert_eq!(Quoting::PlantUml.escape("a\nb"), "a\\nb");
        assert_eq!(Quoting::Mermaid.escape("a\r\nb"), "a<br/>b");
        assert_eq!(Quoting::LikeC4.escape("a\rb"), "a\\nb");
    }

    #[test]
    fn test_printer_indentation() {
        let mut p = Printer::new("  ");
        p.open("model");
        p.open("api = system");
        p.line("title \"API\"");
        p.close();
        p.blank();
        p.close();
        assert_eq!(p.depth, 0);
        assert_eq!(
            p.finish(),
            "model {\n  api = system {\n    title \"API\"\n  }\n\n}"
        );
    }

    #[test]
    fn test_printer_indent_without_braces() {
        let mut p = Printer::new("    ");
        p.line("C4Context");
        p.indent();
        p.line("Person(a, \"A\")");
        p.dedent();
        assert_eq!(p.finish(), "C4Context\n    Person(a, \"A\")");
    }
}
