//! 宿主 agent 调用的 tool 层
//!
//! 每个 tool 返回一个字符串；任何失败都转换为给用户看的文本，不向外传播。

mod types;

pub use types::*;

use memory::{MemoryConfig, Persistence, Store};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::io::{Read, Write};

use crate::format::{render_named, DiagramFormat};

pub const REMEMBER_SYSTEM: &str = "remember_system";
pub const REMEMBER_PERSON: &str = "remember_person";
pub const REMEMBER_RELATIONSHIP: &str = "remember_relationship";
pub const GENERATE_DIAGRAM: &str = "generate_diagram";
pub const ARCHITECTURE_SUMMARY: &str = "architecture_summary";

/// 修改成功后的回复
pub const NOTED: &str = "Noted.";
/// 空存储时的摘要回复
pub const EMPTY_SUMMARY: &str = "No architecture recorded yet.";

/// 所有 tool 的描述
pub fn descriptors() -> Vec<ToolDescriptor> {
    let formats: Vec<&str> = DiagramFormat::ALL.iter().map(|f| f.as_str()).collect();

    vec![
        ToolDescriptor {
            name: REMEMBER_SYSTEM,
            description: "Remember a software system, service or external platform in the architecture memory.",
            risk: RiskLevel::Moderate,
            parameters: json!({
                "type": "object",
                "properties": {
                    "key": { "type": "string", "description": "Unique identifier, e.g. \"api\"" },
                    "label": { "type": "string", "description": "Display name" },
                    "description": { "type": "string", "description": "What the system does" },
                    "external": { "type": "boolean", "description": "Third-party system not owned by the team", "default": false }
                },
                "required": ["key", "label", "description"]
            }),
        },
        ToolDescriptor {
            name: REMEMBER_PERSON,
            description: "Remember a person, actor or role that interacts with the systems.",
            risk: RiskLevel::Moderate,
            parameters: json!({
                "type": "object",
                "properties": {
                    "key": { "type": "string", "description": "Unique identifier, e.g. \"end-user\"" },
                    "label": { "type": "string", "description": "Name or role" },
                    "description": { "type": "string", "description": "Optional details", "default": "" }
                },
                "required": ["key", "label"]
            }),
        },
        ToolDescriptor {
            name: REMEMBER_RELATIONSHIP,
            description: "Remember a directed relationship between two systems or people. Replaces an existing relationship between the same pair.",
            risk: RiskLevel::Moderate,
            parameters: json!({
                "type": "object",
                "properties": {
                    "from": { "type": "string", "description": "Source key" },
                    "to": { "type": "string", "description": "Target key" },
                    "label": { "type": "string", "description": "Verb phrase, e.g. \"Sends charges to\"" }
                },
                "required": ["from", "to", "label"]
            }),
        },
        ToolDescriptor {
            name: GENERATE_DIAGRAM,
            description: "Render the remembered architecture as a C4 context diagram.",
            risk: RiskLevel::Safe,
            parameters: json!({
                "type": "object",
                "properties": {
                    "format": { "type": "string", "enum": formats, "default": DiagramFormat::default().as_str() }
                },
                "required": []
            }),
        },
        ToolDescriptor {
            name: ARCHITECTURE_SUMMARY,
            description: "Summarize the remembered systems, people and relationships.",
            risk: RiskLevel::Safe,
            parameters: json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        },
    ]
}

/// 持有 Store 的 tool 集合
pub struct ArchitectureTools {
    store: Store,
}

impl ArchitectureTools {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn from_config(config: &MemoryConfig) -> Self {
        Self::new(Store::from_config(config))
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// 注入上下文用的摘要
    pub fn context(&self) -> Option<String> {
        self.store.summary_text()
    }

    /// 调用 tool，错误也以字符串返回
    pub fn invoke(&mut self, name: &str, args: Value) -> String {
        match self.try_invoke(name, args) {
            Ok(output) => output,
            Err(e) => {
                tracing::debug!("Tool {} failed: {}", name, e);
                e.to_string()
            }
        }
    }

    fn try_invoke(&mut self, name: &str, args: Value) -> Result<String> {
        match name {
            REMEMBER_SYSTEM => {
                let a: AddSystemArgs = parse_args(name, args)?;
                let result = self
                    .store
                    .add_system(&a.key, &a.label, &a.description, a.external);
                Ok(noted(result))
            }
            REMEMBER_PERSON => {
                let a: AddPersonArgs = parse_args(name, args)?;
                let result = self.store.add_person(&a.key, &a.label, &a.description);
                Ok(noted(result))
            }
            REMEMBER_RELATIONSHIP => {
                let a: AddRelationshipArgs = parse_args(name, args)?;
                let result = self.store.add_relationship(&a.from, &a.to, &a.label);
                Ok(noted(result))
            }
            GENERATE_DIAGRAM => {
                let a: DiagramArgs = parse_args(name, args)?;
                Ok(render_named(a.format.as_deref(), &self.store.snapshot()))
            }
            ARCHITECTURE_SUMMARY => Ok(self
                .store
                .summary_text()
                .unwrap_or_else(|| EMPTY_SUMMARY.to_string())),
            _ => Err(ToolError::UnknownTool(name.to_string())),
        }
    }
}

/// null 视为空对象，可选参数全部取默认值
fn parse_args<T: DeserializeOwned>(tool: &str, args: Value) -> Result<T> {
    let args = if args.is_null() { json!({}) } else { args };
    serde_json::from_value(args).map_err(|source| ToolError::InvalidArguments {
        tool: tool.to_string(),
        source,
    })
}

// 持久化失败不影响回复，内存中的数据仍然有效
fn noted(result: Persistence) -> String {
    if let Persistence::Stale(e) = result {
        tracing::warn!("Architecture memory not saved: {}", e);
    }
    NOTED.to_string()
}

/// Hook 主入口：stdin 读取一个请求，stdout 输出结果
pub fn run_hook() -> Result<()> {
    let config = MemoryConfig::from_env();
    run_hook_with(std::io::stdin().lock(), std::io::stdout().lock(), &config)
}

/// 从 `input` 读取请求，向 `output` 写一行 JSON
///
/// 输入为空时输出所有 tool 的描述。
pub fn run_hook_with(mut input: impl Read, mut output: impl Write, config: &MemoryConfig) -> Result<()> {
    let mut data = String::new();
    input.read_to_string(&mut data)?;

    if data.trim().is_empty() {
        serde_json::to_writer(&mut output, &json!({ "tools": descriptors() }))?;
        writeln!(output)?;
        return Ok(());
    }

    let request: ToolRequest = serde_json::from_str(&data)?;

    let mut tools = ArchitectureTools::from_config(config);
    let reply = tools.invoke(&request.tool, request.args);

    serde_json::to_writer(&mut output, &ToolResponse { output: reply })?;
    writeln!(output)?;

    Ok(())
}
