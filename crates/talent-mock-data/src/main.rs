//! Talent Mock Data CLI
//!
//! 模拟数据工具的命令行入口点。
//! 提供数据生成、打包、离职趋势与 CSV 导出功能。

use anyhow::Context;
use clap::Parser;
use pulse_shared::config::AppConfig;
use pulse_shared::observability;
use talent_mock_data::cli::{Cli, CommandRunner, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 配置优先级：命令行参数 > 环境变量 > 配置文件 > 内置默认值
    let mut config = AppConfig::load(cli.config.as_deref()).context("加载配置失败")?;
    cli.apply_overrides(&mut config);

    observability::init(&config.observability)?;

    let runner = CommandRunner::new(config);

    match cli.command {
        Commands::Generate => {
            runner.run_generate()?;
        }
        Commands::Bundle => {
            runner.run_bundle()?;
        }
        Commands::All => {
            runner.run_all()?;
        }
        Commands::Trends => {
            runner.run_trends()?;
        }
        Commands::Export => {
            runner.run_export()?;
        }
    }

    Ok(())
}
