//! CLI 模块
//!
//! 提供命令行接口，支持以下功能：
//!
//! - `generate` - 生成中间 JSON 文档
//! - `bundle` - 打包为前端脚本文件
//! - `all` - 生成并打包
//! - `trends` - 生成离职趋势 CSV
//! - `export` - 导出员工与账户 CSV
//!
//! # 使用示例
//!
//! ```bash
//! # 生成并打包（默认写入 .tmp/ 与 data.js）
//! talent-data all
//!
//! # 固定随机种子，输出可复现
//! talent-data generate --seed 42
//!
//! # 打包到自定义位置
//! talent-data bundle -o public/data.js
//! ```

pub mod commands;
pub mod runner;

pub use commands::{Cli, Commands};
pub use runner::CommandRunner;
