use memory::Graph;

use crate::diagram::Diagram;
use crate::likec4::LikeC4Renderer;
use crate::mermaid::MermaidRenderer;
use crate::plantuml::PlantUmlRenderer;

/// 图渲染器
pub trait DiagramRenderer {
    fn format(&self) -> DiagramFormat;

    fn render(&self, diagram: &Diagram) -> String;
}

/// 支持的 DSL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiagramFormat {
    #[default]
    PlantUml,
    Mermaid,
    LikeC4,
}

impl DiagramFormat {
    pub const ALL: [DiagramFormat; 3] = [Self::PlantUml, Self::Mermaid, Self::LikeC4];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PlantUml => "plantuml",
            Self::Mermaid => "mermaid",
            Self::LikeC4 => "likec4",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plantuml" => Some(Self::PlantUml),
            "mermaid" => Some(Self::Mermaid),
            "likec4" => Some(Self::LikeC4),
            _ => None,
        }
    }

    /// 无法识别或未指定时回退到 PlantUML
    pub fn resolve(name: Option<&str>) -> Self {
        name.and_then(Self::from_str).unwrap_or_default()
    }

    pub fn renderer(&self) -> Box<dyn DiagramRenderer> {
        self.renderer_with(&RenderOptions::default())
    }

    /// 不适用于该格式的选项被忽略
    pub fn renderer_with(&self, options: &RenderOptions) -> Box<dyn DiagramRenderer> {
        match self {
            Self::PlantUml => {
                let mut renderer = PlantUmlRenderer::new();
                if let Some(title) = &options.title {
                    renderer = renderer.with_title(title);
                }
                Box::new(renderer)
            }
            Self::Mermaid => Box::new(MermaidRenderer::new()),
            Self::LikeC4 => {
                let mut renderer = LikeC4Renderer::new();
                if let Some(view) = &options.view {
                    renderer = renderer.with_view(view);
                }
                Box::new(renderer)
            }
        }
    }
}

/// 渲染选项，未设置时使用渲染器默认值
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// PlantUML 标题
    pub title: Option<String>,
    /// LikeC4 视图名
    pub view: Option<String>,
}

/// 以默认选项渲染
pub fn render(format: DiagramFormat, graph: &Graph) -> String {
    render_with(format, graph, &RenderOptions::default())
}

pub fn render_with(format: DiagramFormat, graph: &Graph, options: &RenderOptions) -> String {
    format.renderer_with(options).render(&Diagram::from_graph(graph))
}

/// 按格式名渲染，格式名规则同 [`DiagramFormat::resolve`]
pub fn render_named(format: Option<&str>, graph: &Graph) -> String {
    render(DiagramFormat::resolve(format), graph)
}
