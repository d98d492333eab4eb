//! 统一错误处理模块
//!
//! 定义数据生成与打包流程共享的错误类型，使用 thiserror 提供良好的错误信息。

use std::path::PathBuf;

use thiserror::Error;

/// 系统错误类型
#[derive(Debug, Error)]
pub enum PulseError {
    // ==================== 文件错误 ====================
    #[error("读取文件失败: {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("写入文件失败: {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON 解析失败: {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("文档缺少字段: {} key={key}", .path.display())]
    MissingKey { path: PathBuf, key: String },

    #[error("序列化失败: {0}")]
    Serialize(#[from] serde_json::Error),

    // ==================== 数据目录错误 ====================
    #[error("账户不存在: employee={employee} account={account}")]
    UnknownAccount { employee: String, account: String },

    #[error("员工总数 {population} 小于种子员工数量 {seeds}")]
    PopulationTooSmall { population: usize, seeds: usize },

    #[error("种子目录无效: {0}")]
    Catalog(String),

    // ==================== 配置错误 ====================
    #[error("配置错误: {0}")]
    Config(#[from] config::ConfigError),
}

/// 错误结果类型别名
pub type Result<T> = std::result::Result<T, PulseError>;

impl PulseError {
    /// 获取错误码
    pub fn code(&self) -> &'static str {
        match self {
            Self::Read { .. } => "READ_FAILED",
            Self::Write { .. } => "WRITE_FAILED",
            Self::Parse { .. } => "PARSE_FAILED",
            Self::MissingKey { .. } => "MISSING_KEY",
            Self::Serialize(_) => "SERIALIZE_FAILED",
            Self::UnknownAccount { .. } => "UNKNOWN_ACCOUNT",
            Self::PopulationTooSmall { .. } => "POPULATION_TOO_SMALL",
            Self::Catalog(_) => "CATALOG_INVALID",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }

    /// 是否为文件不存在错误
    ///
    /// 打包阶段以此区分"尚未运行生成器"与其他 I/O 故障
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Read { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }

    /// 构造读取错误
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// 构造写入错误
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
