//! 命令执行器
//!
//! 负责执行各 CLI 子命令的具体逻辑。
//! 将配置转化为实际的数据生成、打包与导出操作。

use anyhow::{Context, Result};
use pulse_shared::config::AppConfig;
use tracing::info;

use crate::bundler::{BundleStats, Bundler};
use crate::catalog::SeedCatalog;
use crate::export::{self, ExportStats, TRENDS_CSV, trends_csv};
use crate::generators::{
    DataGenerator, GenerationStats, GeneratorConfig, generate_attrition_trends, seeded_rng,
};
use crate::store::IntermediateStore;

/// 命令执行器
///
/// 持有合并后的应用配置，作为 CLI 与业务逻辑之间的桥梁。
pub struct CommandRunner {
    config: AppConfig,
}

impl CommandRunner {
    /// 创建命令执行器
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// 执行 generate 命令
    ///
    /// 生成名册并写入中间目录，重复运行会整体覆盖上一次的结果。
    pub fn run_generate(&self) -> Result<GenerationStats> {
        let generator_config = &self.config.generator;
        info!(
            population = generator_config.population,
            seed = ?generator_config.seed,
            tmp_dir = %self.config.output.tmp_dir.display(),
            "生成模拟数据"
        );

        let catalog = self.load_catalog()?;
        let mut generator = DataGenerator::new(
            &catalog,
            GeneratorConfig {
                population: generator_config.population,
            },
            seeded_rng(generator_config.seed),
        )
        .context("创建数据生成器失败")?;

        let dataset = generator.generate().context("生成数据失败")?;
        self.store()
            .write_dataset(&dataset)
            .context("写入中间文件失败")?;

        let stats = GenerationStats::from_dataset(&dataset);

        // 打印统计
        println!("\n数据生成完成:");
        println!("{}", "-".repeat(30));
        println!("员工数量: {}", stats.employees_count);
        println!("账户数量: {}", stats.accounts_count);
        println!("收入风险总额: {}", stats.total_revenue_at_risk);
        println!(
            "输出目录: {} (talent.json, accounts.json, health.json)",
            self.config.output.tmp_dir.display()
        );
        println!("{}", "-".repeat(30));

        Ok(stats)
    }

    /// 执行 bundle 命令
    ///
    /// 中间文件缺失或无法解析时直接失败，不写出任何产物。
    pub fn run_bundle(&self) -> Result<BundleStats> {
        let output = &self.config.output.bundle_path;
        info!(
            tmp_dir = %self.config.output.tmp_dir.display(),
            output = %output.display(),
            "打包数据"
        );

        let bundler = Bundler::new(self.store(), self.config.output.global_name.clone());
        let stats = bundler.bundle_to(output).map_err(|e| {
            // 只有中间文件缺失时才提示先运行 generate
            let hint = if e.is_not_found() {
                format!(
                    "打包失败，请先运行 generate 生成 {} 下的中间文件",
                    self.config.output.tmp_dir.display()
                )
            } else {
                format!("打包失败: {}", output.display())
            };
            anyhow::Error::new(e).context(hint)
        })?;

        println!("数据已打包到 {}", output.display());
        Ok(stats)
    }

    /// 执行 all 命令
    pub fn run_all(&self) -> Result<()> {
        self.run_generate()?;
        self.run_bundle()?;
        Ok(())
    }

    /// 执行 trends 命令
    ///
    /// 趋势数据与名册无关，不依赖 generate。
    pub fn run_trends(&self) -> Result<usize> {
        let mut rng = seeded_rng(self.config.generator.seed);
        let trends = generate_attrition_trends(&mut rng);

        let store = self.store();
        store.ensure_dir().context("创建中间目录失败")?;
        store
            .write_text(TRENDS_CSV, &trends_csv(&trends))
            .context("写入离职趋势失败")?;

        println!(
            "离职趋势已写入 {} ({} 行)",
            store.path(TRENDS_CSV).display(),
            trends.len()
        );
        Ok(trends.len())
    }

    /// 执行 export 命令
    pub fn run_export(&self) -> Result<ExportStats> {
        let store = self.store();
        let stats = export::export_tables(&store).context("导出 CSV 失败")?;

        println!("\nCSV 导出完成:");
        println!("{}", "-".repeat(30));
        println!(
            "{}: {} 行",
            store.path(export::EMPLOYEES_CSV).display(),
            stats.employees
        );
        println!(
            "{}: {} 行",
            store.path(export::ACCOUNTS_CSV).display(),
            stats.accounts
        );
        println!("{}", "-".repeat(30));

        Ok(stats)
    }

    // ========================================================================
    // 辅助方法
    // ========================================================================

    fn store(&self) -> IntermediateStore {
        IntermediateStore::new(&self.config.output.tmp_dir)
    }

    /// 加载种子目录：配置了文件则从文件读取，否则使用内置目录
    fn load_catalog(&self) -> Result<SeedCatalog> {
        match self.config.generator.catalog {
            Some(ref path) => SeedCatalog::load(path)
                .with_context(|| format!("加载种子目录失败: {}", path.display())),
            None => Ok(SeedCatalog::default()),
        }
    }
}

// ============================================================================
// 单元测试
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn runner_in(dir: &Path, seed: u64) -> CommandRunner {
        let mut config = AppConfig::default();
        config.generator.seed = Some(seed);
        config.output.tmp_dir = dir.join(".tmp");
        config.output.bundle_path = dir.join("data.js");
        CommandRunner::new(config)
    }

    #[test]
    fn test_run_generate_and_bundle() {
        let tmp = tempfile::tempdir().unwrap();
        let runner = runner_in(tmp.path(), 42);

        let stats = runner.run_generate().unwrap();
        assert_eq!(stats.employees_count, 350);
        assert_eq!(stats.accounts_count, 6);

        let bundle = runner.run_bundle().unwrap();
        assert_eq!(bundle.employees, 350);
        assert_eq!(bundle.accounts, 6);
        assert!(tmp.path().join("data.js").exists());
    }

    #[test]
    fn test_run_bundle_without_generate() {
        let tmp = tempfile::tempdir().unwrap();
        let runner = runner_in(tmp.path(), 1);

        assert!(runner.run_bundle().is_err());
        assert!(!tmp.path().join("data.js").exists());
    }

    #[test]
    fn test_run_bundle_hint_only_when_missing() {
        let tmp = tempfile::tempdir().unwrap();
        let mut runner = runner_in(tmp.path(), 2);

        let err = runner.run_bundle().unwrap_err();
        assert!(err.to_string().contains("generate"));

        // 中间文件齐全但输出目录不存在，属于写出失败
        runner.run_generate().unwrap();
        runner.config.output.bundle_path = tmp.path().join("missing").join("data.js");
        let err = runner.run_bundle().unwrap_err();
        assert!(!err.to_string().contains("generate"));
        assert!(err.to_string().contains("data.js"));
    }

    #[test]
    fn test_run_trends() {
        let tmp = tempfile::tempdir().unwrap();
        let runner = runner_in(tmp.path(), 3);

        assert_eq!(runner.run_trends().unwrap(), 23);
        let csv = std::fs::read_to_string(tmp.path().join(".tmp").join(TRENDS_CSV)).unwrap();
        assert!(csv.starts_with("fiscal_year,month,month_date"));
    }

    #[test]
    fn test_run_export() {
        let tmp = tempfile::tempdir().unwrap();
        let runner = runner_in(tmp.path(), 5);

        assert!(runner.run_export().is_err());

        runner.run_generate().unwrap();
        let stats = runner.run_export().unwrap();
        assert_eq!(stats.employees, 350);
        assert_eq!(stats.accounts, 6);
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let mut runner = runner_in(tmp.path(), 5);
        runner.config.generator.catalog = Some(tmp.path().join("missing.yaml"));

        assert!(runner.run_generate().is_err());
        assert!(!tmp.path().join(".tmp").exists());
    }
}
