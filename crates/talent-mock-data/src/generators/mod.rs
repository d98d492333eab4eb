//! 生成器模块
//!
//! 提供员工名册、账户汇总、健康度快照和离职趋势的生成功能。

pub mod aggregate;
pub mod attrition;
pub mod data_generator;

pub use aggregate::{health_snapshot, summarize_accounts, truncated_mean};
pub use attrition::generate_attrition_trends;
pub use data_generator::{
    DataGenerator, FILL_ID_PREFIX, GeneratedDataset, GenerationStats, GeneratorConfig,
    SEED_ID_PREFIX, seeded_rng,
};
