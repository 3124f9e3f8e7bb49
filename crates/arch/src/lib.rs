//! arch - 架构图生成
//!
//! 把架构记忆渲染为 PlantUML / Mermaid / LikeC4，并提供宿主 agent 的 tool 层

mod diagram;
mod format;
mod likec4;
mod mermaid;
mod plantuml;
mod printer;
pub mod tool;

pub use diagram::{Diagram, Edge, Element, ElementKind, Statement};
pub use format::{render, render_named, render_with, DiagramFormat, DiagramRenderer, RenderOptions};
pub use likec4::LikeC4Renderer;
pub use mermaid::MermaidRenderer;
pub use plantuml::{PlantUmlRenderer, C4_CONTEXT_INCLUDE};
pub use printer::{Printer, Quoting};
