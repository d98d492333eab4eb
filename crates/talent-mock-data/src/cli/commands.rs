//! CLI 命令定义
//!
//! 使用 clap derive 宏定义命令行接口结构。
//! 各子命令均可零参数运行，全局选项只用于覆盖配置。

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pulse_shared::config::AppConfig;

/// 人才风险模拟数据命令行工具
///
/// 生成员工名册、账户汇总与健康度快照，并打包为前端可直接加载的脚本文件。
/// 使用 `--help` 查看各子命令的详细说明。
#[derive(Parser, Debug)]
#[command(name = "talent-data")]
#[command(version, about = "人才风险看板模拟数据工具")]
#[command(propagate_version = true)]
pub struct Cli {
    /// 配置文件路径
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// 日志级别 (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// 随机种子，指定后输出可复现
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// 员工总数（包含种子员工）
    #[arg(long, global = true)]
    pub population: Option<usize>,

    /// 自定义种子目录文件（JSON/YAML）
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// 中间文件目录
    #[arg(long, global = true)]
    pub tmp_dir: Option<PathBuf>,

    /// 打包产物路径
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// 子命令枚举
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// 生成员工、账户、健康度三个中间 JSON 文档
    Generate,

    /// 将中间文档打包为单个脚本文件
    ///
    /// 依赖 generate 已经运行，中间文件缺失时直接失败。
    Bundle,

    /// 依次执行 generate 与 bundle
    All,

    /// 生成两个财年的月度离职趋势 CSV
    Trends,

    /// 将中间文档导出为员工与账户 CSV
    Export,
}

impl Cli {
    /// 用命令行参数覆盖配置
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(ref level) = self.log_level {
            config.observability.log_level = level.clone();
        }
        if let Some(seed) = self.seed {
            config.generator.seed = Some(seed);
        }
        if let Some(population) = self.population {
            config.generator.population = population;
        }
        if let Some(ref catalog) = self.catalog {
            config.generator.catalog = Some(catalog.clone());
        }
        if let Some(ref dir) = self.tmp_dir {
            config.output.tmp_dir = dir.clone();
        }
        if let Some(ref output) = self.output {
            config.output.bundle_path = output.clone();
        }
    }
}

// ============================================================================
// 单元测试
// ============================================================================
