//! Tool 层测试

use arch::tool::{
    descriptors, run_hook_with, ArchitectureTools, ToolResponse, ARCHITECTURE_SUMMARY,
    EMPTY_SUMMARY, GENERATE_DIAGRAM, NOTED, REMEMBER_PERSON, REMEMBER_RELATIONSHIP,
    REMEMBER_SYSTEM,
};
use arch::{render, DiagramFormat};
use memory::{MemoryConfig, Store};
use serde_json::json;
use std::fs;
use tempfile::tempdir;

fn tools() -> ArchitectureTools {
    ArchitectureTools::new(Store::in_memory())
}

#[test]
fn test_remember_tools_reply_noted() {
    let mut tools = tools();

    let reply = tools.invoke(
        REMEMBER_SYSTEM,
        json!({"key": "api", "label": "API Gateway", "description": "Routes traffic"}),
    );
    assert_eq!(reply, NOTED);

    let reply = tools.invoke(REMEMBER_PERSON, json!({"key": "end-user", "label": "End User"}));
    assert_eq!(reply, NOTED);

    let reply = tools.invoke(
        REMEMBER_RELATIONSHIP,
        json!({"from": "end-user", "to": "api", "label": "Calls"}),
    );
    assert_eq!(reply, NOTED);

    let snapshot = tools.store().snapshot();
    assert!(!snapshot.systems.get("api").unwrap().external);
    assert_eq!(snapshot.people.get("end-user").unwrap().description, "");
    assert_eq!(snapshot.relationships.len(), 1);
}

#[test]
fn test_summary_tool() {
    let mut tools = tools();
    assert_eq!(tools.invoke(ARCHITECTURE_SUMMARY, json!({})), EMPTY_SUMMARY);
    assert_eq!(tools.context(), None);

    tools.invoke(
        REMEMBER_SYSTEM,
        json!({"key": "stripe", "label": "Stripe", "description": "Payments", "external": true}),
    );
    let summary = tools.invoke(ARCHITECTURE_SUMMARY, serde_json::Value::Null);
    assert_eq!(summary, "Systems: Stripe (external) — Payments");
    assert_eq!(tools.context().as_deref(), Some(summary.as_str()));
}

#[test]
fn test_diagram_tool_formats() {
    let mut tools = tools();
    tools.invoke(
        REMEMBER_SYSTEM,
        json!({"key": "api", "label": "API", "description": "Routes traffic"}),
    );
    let graph = tools.store().snapshot();

    let mermaid = tools.invoke(GENERATE_DIAGRAM, json!({"format": "mermaid"}));
    assert_eq!(mermaid, render(DiagramFormat::Mermaid, &graph));

    let likec4 = tools.invoke(GENERATE_DIAGRAM, json!({"format": "likec4"}));
    assert_eq!(likec4, render(DiagramFormat::LikeC4, &graph));

    let plantuml = render(DiagramFormat::PlantUml, &graph);
    assert_eq!(tools.invoke(GENERATE_DIAGRAM, json!({})), plantuml);
    assert_eq!(tools.invoke(GENERATE_DIAGRAM, json!({"format": "svg"})), plantuml);
}

#[test]
fn test_failures_become_strings() {
    let mut tools = tools();

    assert_eq!(tools.invoke("delete_everything", json!({})), "Unknown tool: delete_everything");

    let reply = tools.invoke(REMEMBER_RELATIONSHIP, json!({"from": "a"}));
    assert!(reply.starts_with("Invalid arguments for remember_relationship: "), "{}", reply);

    let reply = tools.invoke(REMEMBER_SYSTEM, json!({"key": 42, "label": "x", "description": ""}));
    assert!(reply.starts_with("Invalid arguments for remember_system: "), "{}", reply);

    let reply = tools.invoke(GENERATE_DIAGRAM, json!("mermaid"));
    assert!(reply.starts_with("Invalid arguments for generate_diagram: "), "{}", reply);

    // 失败的调用不改变存储
    assert!(tools.store().snapshot().is_empty());
}

#[test]
fn test_persist_failure_still_noted() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "x").unwrap();

    let config = MemoryConfig::default().with_path(blocker.join("memory.json"));
    let mut tools = ArchitectureTools::from_config(&config);
    let reply = tools.invoke(REMEMBER_PERSON, json!({"key": "ops", "label": "Operator"}));

    assert_eq!(reply, NOTED);
    assert_eq!(tools.store().snapshot().people.len(), 1);
}

#[test]
fn test_tools_persist_to_config_path() {
    let dir = tempdir().unwrap();
    let config = MemoryConfig::default().with_path(dir.path().join("data/memory.json"));

    {
        let mut tools = ArchitectureTools::from_config(&config);
        tools.invoke(
            REMEMBER_SYSTEM,
            json!({"key": "svc", "label": "Service", "description": "Desc"}),
        );
    }

    let tools = ArchitectureTools::from_config(&config);
    let snapshot = tools.store().snapshot();
    assert!(!snapshot.systems.get("svc").unwrap().external);
}

#[test]
fn test_descriptors_serialize_for_host() {
    let value = serde_json::to_value(descriptors()).unwrap();
    let tools = value.as_array().unwrap();
    assert_eq!(tools.len(), 5);

    let system = tools
        .iter()
        .find(|t| t["name"] == REMEMBER_SYSTEM)
        .unwrap();
    assert_eq!(system["risk"], "moderate");
    assert_eq!(system["parameters"]["required"], json!(["key", "label", "description"]));
}

fn hook(input: &str, config: &MemoryConfig) -> String {
    let mut output = Vec::new();
    run_hook_with(input.as_bytes(), &mut output, config).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_hook_empty_input_lists_tools() {
    let dir = tempdir().unwrap();
    let config = MemoryConfig::default().with_path(dir.path().join("memory.json"));

    let out = hook("  \n", &config);
    assert!(out.ends_with('\n'));
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    let names: Vec<_> = value["tools"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        names,
        vec![
            REMEMBER_SYSTEM,
            REMEMBER_PERSON,
            REMEMBER_RELATIONSHIP,
            GENERATE_DIAGRAM,
            ARCHITECTURE_SUMMARY
        ]
    );

    // 列出描述不创建存储文件
    assert!(!config.path.exists());
}

#[test]
fn test_hook_request_returns_output() {
    let dir = tempdir().unwrap();
    let config = MemoryConfig::default().with_path(dir.path().join("memory.json"));

    let out = hook(
        r#"{"tool": "remember_system", "args": {"key": "api", "label": "API", "description": "Routes traffic"}}"#,
        &config,
    );
    let response: ToolResponse = serde_json::from_str(&out).unwrap();
    assert_eq!(response.output, NOTED);
    assert!(config.path.exists());

    // 每次请求重新打开存储
    let out = hook(r#"{"tool": "architecture_summary"}"#, &config);
    let response: ToolResponse = serde_json::from_str(&out).unwrap();
    assert_eq!(response.output, "Systems: API (internal) — Routes traffic");

    let out = hook(r#"{"tool": "nope", "args": {}}"#, &config);
    let response: ToolResponse = serde_json::from_str(&out).unwrap();
    assert_eq!(response.output, "Unknown tool: nope");
}

#[test]
fn test_hook_rejects_malformed_request() {
    let dir = tempdir().unwrap();
    let config = MemoryConfig::default().with_path(dir.path().join("memory.json"));

    let mut output = Vec::new();
    let result = run_hook_with("not json".as_bytes(), &mut output, &config);
    assert!(result.is_err());
    assert!(output.is_empty());
}
