//! 可观测性模块
//!
//! 命令行工具只需要结构化日志，所有入口通过 `init` 统一配置。

pub mod tracing;

use ::tracing::debug;
use anyhow::Result;

pub use crate::config::ObservabilityConfig;

/// 统一初始化可观测性
///
/// # Example
///
/// ```ignore
/// use pulse_shared::config::AppConfig;
/// use pulse_shared::observability;
///
/// fn main() -> anyhow::Result<()> {
///     let config = AppConfig::load(None)?;
///     observability::init(&config.observability)?;
///
///     // 应用逻辑...
///
///     Ok(())
/// }
/// ```
pub fn init(config: &ObservabilityConfig) -> Result<()> {
    tracing::init(config)?;

    debug!(
        log_level = %config.log_level,
        json_logs = config.json_logs,
        "Observability initialized"
    );

    Ok(())
}
