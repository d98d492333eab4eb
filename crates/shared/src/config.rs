//! 配置管理模块
//!
//! 支持配置文件加载、环境变量覆盖，以及类型安全的配置访问。
//! 所有配置项都有内置默认值，不提供任何配置时行为与零参数运行一致。

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// 数据生成配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// 员工总数（包含种子员工）
    pub population: usize,
    /// 随机种子，为空时使用系统熵源
    pub seed: Option<u64>,
    /// 自定义种子目录文件（JSON/YAML），为空时使用内置目录
    pub catalog: Option<PathBuf>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            population: 350,
            seed: None,
            catalog: None,
        }
    }
}

/// 输出路径配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// 中间文件目录
    pub tmp_dir: PathBuf,
    /// 最终打包产物路径
    pub bundle_path: PathBuf,
    /// 打包产物中的全局常量名
    pub global_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            tmp_dir: PathBuf::from(".tmp"),
            bundle_path: PathBuf::from("data.js"),
            global_name: "RAW_DATA".to_string(),
        }
    }
}

/// 可观测性配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    pub log_level: String,
    /// 是否输出 JSON 格式日志
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub generator: GenerationConfig,
    pub output: OutputConfig,
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// 从配置文件和环境变量加载配置
    ///
    /// 加载顺序（后加载的会覆盖先加载的同名配置项）：
    /// 1. 内置默认值
    /// 2. 指定的配置文件（必须存在），未指定时读取 {TALENT_CONFIG_DIR:-config}/default.toml（可选）
    /// 3. 环境变量（TALENT__ 前缀，如 TALENT__GENERATOR__SEED -> generator.seed）
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let file_source = match config_file {
            Some(path) => File::from(path).required(true),
            None => {
                let config_dir =
                    std::env::var("TALENT_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());
                File::from(Path::new(&config_dir).join("default.toml")).required(false)
            }
        };

        let builder = Config::builder().add_source(file_source).add_source(
            Environment::with_prefix("TALENT")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }
}
