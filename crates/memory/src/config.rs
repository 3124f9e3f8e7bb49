//! 存储配置

use std::path::PathBuf;

/// 默认存储位置 (相对当前工作目录)
pub const DEFAULT_PATH: &str = "data/architecture-memory.json";

/// 覆盖存储位置的环境变量
pub const PATH_ENV: &str = "ARCH_MEMORY_PATH";

/// 架构记忆配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryConfig {
    pub path: PathBuf,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PATH),
        }
    }
}

impl MemoryConfig {
    /// 从环境变量加载配置
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var(PATH_ENV) {
            if !v.trim().is_empty() {
                config.path = PathBuf::from(v);
            }
        }

        config
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_config_default() {
        let config = MemoryConfig::default();
        assert_eq!(config.path, PathBuf::from("data/architecture-memory.json"));
    }

    #[test]
    fn test_memory_config_with_path() {
        let config = MemoryConfig::default().with_path("/tmp/arch.json");
        assert_eq!(config.path, PathBuf::from("/tmp/arch.json"));
    }
}
