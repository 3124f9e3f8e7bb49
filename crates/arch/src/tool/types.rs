//! Tool 类型定义

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
    #[error("Invalid arguments for {tool}: {source}")]
    InvalidArguments {
        tool: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ToolError>;

/// 风险等级，由宿主的审批流程使用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Safe,
    Moderate,
    Dangerous,
}

/// 暴露给宿主的 tool 描述
#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub risk: RiskLevel,
    /// JSON Schema (object)
    pub parameters: Value,
}

/// 宿主请求
#[derive(Debug, Deserialize)]
pub struct ToolRequest {
    pub tool: String,
    #[serde(default)]
    pub args: Value,
}

/// 返回给宿主的结果
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolResponse {
    pub output: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddSystemArgs {
    pub key: String,
    pub label: String,
    pub description: String,
    #[serde(default)]
    pub external: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddPersonArgs {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddRelationshipArgs {
    pub from: String,
    pub to: String,
    pub label: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DiagramArgs {
    #[serde(default)]
    pub format: Option<String>,
}
