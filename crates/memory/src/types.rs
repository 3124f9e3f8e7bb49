//! 架构记忆的数据类型

use serde::{Deserialize, Serialize};

use crate::keyed::Keyed;

/// 软件系统 / 服务 / 外部平台
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct System {
    pub label: String,
    #[serde(default)]
    pub description: String,
    /// 第三方系统 (非自有)
    #[serde(default)]
    pub external: bool,
}

/// 参与者 / 角色
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub label: String,
    #[serde(default)]
    pub description: String,
}

/// 有向关系，`from` / `to` 不校验是否存在
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    pub from: String,
    pub to: String,
    pub label: String,
}

impl Relationship {
    pub fn new(from: &str, to: &str, label: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            label: label.to_string(),
        }
    }

    /// 是否为同一有向边 (忽略 label)
    pub fn same_edge(&self, from: &str, to: &str) -> bool {
        self.from == from && self.to == to
    }
}

/// 完整的架构图，也是持久化文件的格式
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Graph {
    pub systems: Keyed<System>,
    pub people: Keyed<Person>,
    pub relationships: Vec<Relationship>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty() && self.people.is_empty() && self.relationships.is_empty()
    }

    /// 插入或整体覆盖 System
    pub fn upsert_system(&mut self, key: &str, system: System) {
        self.systems.insert(key, system);
    }

    /// 插入或整体覆盖 Person
    pub fn upsert_person(&mut self, key: &str, person: Person) {
        self.people.insert(key, person);
    }

    /// 同一 (from, to) 只保留一条，更新后的边移到末尾
    pub fn upsert_relationship(&mut self, relationship: Relationship) {
        self.relationships
            .retain(|r| !r.same_edge(&relationship.from, &relationship.to));
        self.relationships.push(relationship);
    }
}
