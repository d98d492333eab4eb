//! 共享库
//!
//! 包含生成器与打包器共用的配置、错误处理、日志初始化等基础设施代码。

pub mod config;
pub mod error;
pub mod observability;
