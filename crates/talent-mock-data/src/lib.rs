//! Talent Mock Data
//!
//! 人才风险看板的模拟数据生成与打包工具。
//!
//! # 主要模块
//!
//! - `catalog`: 种子数据目录（账户、关键人员、枚举）
//! - `models`: 员工、账户汇总、健康度快照等数据模型
//! - `generators`: 名册生成、聚合计算、离职趋势
//! - `store`: 中间 JSON 文档的读写
//! - `bundler`: 打包为前端可加载的脚本文件
//! - `export`: CSV 导出
//!
//! # 使用示例
//!
//! ```rust
//! use talent_mock_data::catalog::SeedCatalog;
//! use talent_mock_data::generators::{DataGenerator, GeneratorConfig, seeded_rng};
//!
//! let catalog = SeedCatalog::default();
//! let mut generator =
//!     DataGenerator::new(&catalog, GeneratorConfig::default(), seeded_rng(Some(42))).unwrap();
//! let dataset = generator.generate().unwrap();
//!
//! assert_eq!(dataset.employees.len(), 350);
//! assert_eq!(dataset.accounts.len(), 6);
//! ```

pub mod bundler;
pub mod catalog;
pub mod cli;
pub mod export;
pub mod generators;
pub mod models;
pub mod store;
