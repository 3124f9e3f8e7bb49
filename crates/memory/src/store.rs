//! 存储层 - 内存中的架构图 + JSON 文件持久化
//!
//! 读写都以内存为准；每次修改后同步写回整个文件。
//! 加载 / 写入失败不会抛给调用方，只体现在 [`LoadStatus`] 与 [`Persistence`] 上。

use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::MemoryConfig;
use crate::types::{Graph, Person, Relationship, System};

/// 存储层错误
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// 打开时的加载结果
#[derive(Debug)]
pub enum LoadStatus {
    /// 从文件加载成功
    Loaded,
    /// 文件不存在，视为空图
    Missing,
    /// 文件无法读取或解析，视为空图
    Corrupt(StoreError),
    /// 未绑定文件
    InMemory,
}

/// 一次修改的持久化结果
#[derive(Debug)]
pub enum Persistence {
    /// 已写入文件
    Saved,
    /// 未绑定文件，只改了内存
    InMemory,
    /// 写入失败，文件内容落后于内存
    Stale(StoreError),
}

impl Persistence {
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved)
    }
}

/// 架构记忆存储
pub struct Store {
    graph: Graph,
    path: Option<PathBuf>,
    load_status: LoadStatus,
}

impl Store {
    /// 打开存储；文件缺失或损坏时从空图开始
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let (graph, load_status) = match load(&path) {
            Ok(Some(graph)) => {
                tracing::debug!(
                    "Loaded architecture memory from {}: {} systems, {} people, {} relationships",
                    path.display(),
                    graph.systems.len(),
                    graph.people.len(),
                    graph.relationships.len()
                );
                (graph, LoadStatus::Loaded)
            }
            Ok(None) => (Graph::new(), LoadStatus::Missing),
            Err(e) => {
                tracing::warn!(
                    "Failed to load architecture memory from {}: {}, starting empty",
                    path.display(),
                    e
                );
                (Graph::new(), LoadStatus::Corrupt(e))
            }
        };

        Self {
            graph,
            path: Some(path),
            load_status,
        }
    }

    pub fn from_config(config: &MemoryConfig) -> Self {
        Self::open(&config.path)
    }

    /// 不落盘的存储 (用于测试)
    pub fn in_memory() -> Self {
        Self {
            graph: Graph::new(),
            path: None,
            load_status: LoadStatus::InMemory,
        }
    }

    /// 插入或覆盖 System
    pub fn add_system(
        &mut self,
        key: &str,
        label: &str,
        description: &str,
        external: bool,
    ) -> Persistence {
        self.graph.upsert_system(
            key,
            System {
                label: label.to_string(),
                description: description.to_string(),
                external,
            },
        );
        self.persist()
    }

    /// 插入或覆盖 Person
    pub fn add_person(&mut self, key: &str, label: &str, description: &str) -> Persistence {
        self.graph.upsert_person(
            key,
            Person {
                label: label.to_string(),
                description: description.to_string(),
            },
        );
        self.persist()
    }

    /// 添加关系，同一 (from, to) 的旧关系被替换并移到末尾
    pub fn add_relationship(&mut self, from: &str, to: &str, label: &str) -> Persistence {
        self.graph
            .upsert_relationship(Relationship::new(from, to, label));
        self.persist()
    }

    /// 当前架构图的独立副本
    pub fn snapshot(&self) -> Graph {
        self.graph.clone()
    }

    /// 文本摘要，空图返回 `None`
    pub fn summary_text(&self) -> Option<String> {
        self.graph.summary_text()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn load_status(&self) -> &LoadStatus {
        &self.load_status
    }

    fn persist(&self) -> Persistence {
        let path = match &self.path {
            Some(p) => p,
            None => return Persistence::InMemory,
        };

        match save(path, &self.graph) {
            Ok(()) => {
                tracing::debug!("Saved architecture memory to {}", path.display());
                Persistence::Saved
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to save architecture memory to {}: {}",
                    path.display(),
                    e
                );
                Persistence::Stale(e)
            }
        }
    }
}

/// 读取文件；不存在时返回 `Ok(None)`
fn load(path: &Path) -> Result<Option<Graph>> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    Ok(Some(serde_json::from_str(&content)?))
}

fn save(path: &Path, graph: &Graph) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let data = serde_json::to_vec_pretty(graph)?;
    write_atomic(path, &data)?;
    Ok(())
}

/// 同目录临时文件：完整文件名后追加 `.tmp`，不会与目标重名
fn temp_path(target: &Path) -> PathBuf {
    let mut name = target.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    target.with_file_name(name)
}

/// 先写同目录临时文件，再 rename 覆盖目标
fn write_atomic(target: &Path, data: &[u8]) -> std::io::Result<()> {
    let temp_path = temp_path(target);

    let mut file = fs::File::create(&temp_path)?;
    file.write_all(data)?;
    file.sync_all()?;
    drop(file);

    if let Err(e) = fs::rename(&temp_path, target) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }
    Ok(())
}
