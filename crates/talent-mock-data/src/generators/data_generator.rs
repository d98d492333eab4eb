//! 数据生成器
//!
//! 根据种子目录生成员工名册，再聚合出账户汇总与健康度快照。
//! 随机源通过泛型注入，固定种子即可得到完全可复现的结果。

use pulse_shared::error::{PulseError, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use super::aggregate::{health_snapshot, summarize_accounts};
use crate::catalog::{SeedCatalog, SeedEmployee};
use crate::models::{
    Account, AccountSummary, Employee, GradeMappingStatus, HealthSnapshot, Origin, Signal,
};

/// 种子员工 ID 前缀
pub const SEED_ID_PREFIX: &str = "emp-star-";
/// 填充员工 ID 前缀
pub const FILL_ID_PREFIX: &str = "emp-";

/// 种子员工的风险影响收入比例
const SEED_REVENUE_SHARE: f64 = 0.15;
/// 风险分超过该值的种子员工同时带有经理关注信号
const SEED_MANAGER_FLAG_THRESHOLD: u32 = 80;
/// 基础风险分超过该值的填充员工触发经理关注信号
const FILL_MANAGER_FLAG_THRESHOLD: u32 = 70;
const MANAGER_FLAG_BOOST: u32 = 10;
const COMP_GAP_BOOST: u32 = 5;
const COMP_GAP_PROBABILITY: f64 = 0.2;
const LV_ORIGIN_PROBABILITY: f64 = 0.75;
const MAPPED_PROBABILITY: f64 = 0.2;
const MAX_RISK_SCORE: u32 = 100;

/// 数据生成器配置
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// 员工总数（包含种子员工）
    pub population: usize,
}

impl Default for GeneratorConfig {
    /// 默认配置：350 名员工
    fn default() -> Self {
        Self { population: 350 }
    }
}

/// 一次生成的完整数据集
#[derive(Debug, Clone)]
pub struct GeneratedDataset {
    pub employees: Vec<Employee>,
    pub accounts: Vec<AccountSummary>,
    pub health: HealthSnapshot,
}

/// 员工名册生成器
pub struct DataGenerator<'a, R: Rng> {
    catalog: &'a SeedCatalog,
    config: GeneratorConfig,
    rng: R,
}

/// 创建随机源
///
/// 指定种子时结果可复现，否则从线程随机源取种子
pub fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_rng(&mut rand::rng()),
    }
}

impl<'a, R: Rng> DataGenerator<'a, R> {
    /// 创建数据生成器
    ///
    /// 目录不完整或员工总数小于种子员工数时返回错误
    pub fn new(catalog: &'a SeedCatalog, config: GeneratorConfig, rng: R) -> Result<Self> {
        catalog.validate()?;

        if config.population < catalog.seeds.len() {
            return Err(PulseError::PopulationTooSmall {
                population: config.population,
                seeds: catalog.seeds.len(),
            });
        }

        Ok(Self {
            catalog,
            config,
            rng,
        })
    }

    /// 生成完整数据集
    pub fn generate(&mut self) -> Result<GeneratedDataset> {
        let employees = self.generate_employees()?;
        let accounts = summarize_accounts(&self.catalog.accounts, &employees);
        let health = health_snapshot(&employees, &accounts);

        info!(
            employees = employees.len(),
            accounts = accounts.len(),
            talent = health.talent,
            total_revenue_at_risk = health.total_revenue_at_risk,
            "数据集生成完成"
        );

        Ok(GeneratedDataset {
            employees,
            accounts,
            health,
        })
    }

    /// 生成员工名册
    ///
    /// 种子员工排在最前面，随后用填充员工补足到目标总数
    pub fn generate_employees(&mut self) -> Result<Vec<Employee>> {
        let catalog = self.catalog;
        let mut employees = Vec::with_capacity(self.config.population);

        for (index, seed) in catalog.seeds.iter().enumerate() {
            let account = catalog.account(&seed.account).ok_or_else(|| {
                PulseError::UnknownAccount {
                    employee: seed.name.clone(),
                    account: seed.account.clone(),
                }
            })?;
            employees.push(self.seed_employee(index, seed, account));
        }

        debug!(seeds = employees.len(), "种子员工生成完成");

        for index in employees.len()..self.config.population {
            let employee = self.fill_employee(index);
            employees.push(employee);
        }

        Ok(employees)
    }

    /// 生成种子员工
    ///
    /// 风险分与影响力都落在高位区间，收入风险按账户收入的固定比例计算
    fn seed_employee(&mut self, index: usize, seed: &SeedEmployee, account: &Account) -> Employee {
        let risk_score = seed.origin.seed_risk_base() + self.rng.random_range(0..=10);
        let business_impact = 90 + self.rng.random_range(0..=5);
        let tenure = round_tenure(self.rng.random_range(2.0..=6.0));

        let signals = if risk_score > SEED_MANAGER_FLAG_THRESHOLD {
            vec![Signal::ManagerFlag, Signal::CompGap]
        } else {
            vec![Signal::CompGap]
        };

        Employee {
            id: format!("{SEED_ID_PREFIX}{index:03}"),
            name: seed.name.clone(),
            role: seed.role.clone(),
            origin: seed.origin,
            function: seed.function,
            geography: seed.geography,
            tenure,
            risk_score,
            business_impact,
            signals,
            account: seed.account.clone(),
            grade_mapping_status: None,
            revenue_at_risk: (SEED_REVENUE_SHARE * account.revenue as f64) as i64,
        }
    }

    /// 生成填充员工
    ///
    /// 信号会抬高风险分；收入风险使用抬高后、截断到 100 之前的风险分
    fn fill_employee(&mut self, index: usize) -> Employee {
        let origin = if self.rng.random_bool(LV_ORIGIN_PROBABILITY) {
            Origin::Lv
        } else {
            Origin::Dp
        };
        let account = pick(&mut self.rng, &self.catalog.accounts);
        let mut risk = self.rng.random_range(origin.fill_risk_range());
        let business_impact = self.rng.random_range(30..=95);

        let mut signals = Vec::new();
        if risk > FILL_MANAGER_FLAG_THRESHOLD {
            signals.push(Signal::ManagerFlag);
            risk += MANAGER_FLAG_BOOST;
        }
        if self.rng.random_bool(COMP_GAP_PROBABILITY) {
            signals.push(Signal::CompGap);
            risk += COMP_GAP_BOOST;
        }

        let role = pick(&mut self.rng, &self.catalog.roles).clone();
        let function = *pick(&mut self.rng, &self.catalog.functions);
        let geography = *pick(&mut self.rng, &self.catalog.geographies);
        let tenure = round_tenure(self.rng.random_range(0.5..=8.0));

        let grade_mapping_status = if self.rng.random_bool(MAPPED_PROBABILITY) {
            GradeMappingStatus::Mapped
        } else {
            GradeMappingStatus::Pending
        };

        Employee {
            id: format!("{FILL_ID_PREFIX}{index:03}"),
            name: format!("Employee {index}"),
            role,
            origin,
            function,
            geography,
            tenure,
            risk_score: risk.min(MAX_RISK_SCORE),
            business_impact,
            signals,
            account: account.name.clone(),
            grade_mapping_status: Some(grade_mapping_status),
            revenue_at_risk: (account.revenue as f64 * (f64::from(risk) / 1000.0)) as i64,
        }
    }
}

/// 从非空列表中均匀抽取一个元素
///
/// 调用方保证列表非空（由 `SeedCatalog::validate` 校验）
fn pick<'s, T, R: Rng>(rng: &mut R, items: &'s [T]) -> &'s T {
    &items[rng.random_range(0..items.len())]
}

/// 司龄保留一位小数
fn round_tenure(years: f64) -> f64 {
    (years * 10.0).round() / 10.0
}

/// 统计数据生成结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationStats {
    pub employees_count: usize,
    pub accounts_count: usize,
    pub total_revenue_at_risk: i64,
}

impl GenerationStats {
    /// 从数据集中收集统计信息
    pub fn from_dataset(dataset: &GeneratedDataset) -> Self {
        Self {
            employees_count: dataset.employees.len(),
            accounts_count: dataset.accounts.len(),
            total_revenue_at_risk: dataset.health.total_revenue_at_risk,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(seed: u64, population: usize) -> GeneratedDataset {
        let catalog = SeedCatalog::default();
        let mut generator =
            DataGenerator::new(&catalog, GeneratorConfig { population }, seeded_rng(Some(seed)))
                .unwrap();
        generator.generate().unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.population, 350);
    }

    #[test]
    fn test_population_and_ids() {
        let dataset = generate(7, 350);
        let employees = &dataset.employees;

        assert_eq!(employees.len(), 350);
        for (i, employee) in employees.iter().enumerate().take(5) {
            assert_eq!(employee.id, format!("emp-star-{i:03}"));
        }
        for (i, employee) in employees.iter().enumerate().skip(5) {
            assert_eq!(employee.id, format!("emp-{i:03}"));
            assert_eq!(employee.name, format!("Employee {i}"));
        }
    }

    #[test]
    fn test_seed_employees() {
        let catalog = SeedCatalog::default();
        let dataset = generate(11, 350);

        for (seed, employee) in catalog.seeds.iter().zip(&dataset.employees) {
            assert_eq!(employee.name, seed.name);
            assert_eq!(employee.account, seed.account);
            assert!(employee.grade_mapping_status.is_none());

            let base = seed.origin.seed_risk_base();
            assert!((base..=base + 10).contains(&employee.risk_score));
            assert!((90..=95).contains(&employee.business_impact));
            assert!((2.0..=6.0).contains(&employee.tenure));

            if employee.risk_score > 80 {
                assert_eq!(employee.signals, vec![Signal::ManagerFlag, Signal::CompGap]);
            } else {
                assert_eq!(employee.signals, vec![Signal::CompGap]);
            }

            let account = catalog.account(&seed.account).unwrap();
            assert_eq!(
                employee.revenue_at_risk,
                (0.15 * account.revenue as f64) as i64
            );
        }
    }

    #[test]
    fn test_fill_employees() {
        let catalog = SeedCatalog::default();
        let dataset = generate(3, 350);

        for employee in dataset.employees.iter().skip(5) {
            assert!(employee.risk_score <= 100);
            assert!((30..=95).contains(&employee.business_impact));
            assert!((0.5..=8.0).contains(&employee.tenure));
            assert!(employee.grade_mapping_status.is_some());
            assert!(catalog.account(&employee.account).is_some());
            assert!(catalog.roles.contains(&employee.role));

            // 经理关注信号只会由高基础风险分触发，且风险分至少被抬高到 81
            if employee.has_signal(Signal::ManagerFlag) {
                assert!(employee.risk_score >= 81);
            }

            let boost = if employee.has_signal(Signal::ManagerFlag) { 10 } else { 0 }
                + if employee.has_signal(Signal::CompGap) { 5 } else { 0 };
            if employee.risk_score < 100 {
                let base = employee.risk_score - boost;
                assert!(employee.origin.fill_risk_range().contains(&base));
                assert_eq!(base > 70, employee.has_signal(Signal::ManagerFlag));
            }
        }
    }

    #[test]
    fn test_fill_revenue_uses_unclamped_risk() {
        let catalog = SeedCatalog::default();
        let dataset = generate(5, 2_000);

        for employee in dataset.employees.iter().skip(5) {
            let revenue = catalog.account(&employee.account).unwrap().revenue;
            if employee.risk_score < 100 {
                let expected =
                    (revenue as f64 * (f64::from(employee.risk_score) / 1000.0)) as i64;
                assert_eq!(employee.revenue_at_risk, expected);
            } else {
                // 截断前风险分可能超过 100，收入风险不小于按 100 计算的值
                let floor = (revenue as f64 * 0.1) as i64;
                assert!(employee.revenue_at_risk >= floor);
            }
        }
    }

    #[test]
    fn test_same_seed_is_deterministic() {
        let a = generate(42, 350);
        let b = generate(42, 350);
        assert_eq!(a.employees, b.employees);
        assert_eq!(a.accounts, b.accounts);
        assert_eq!(a.health, b.health);
    }

    #[test]
    fn test_population_too_small() {
        let catalog = SeedCatalog::default();
        let result =
            DataGenerator::new(&catalog, GeneratorConfig { population: 3 }, seeded_rng(Some(1)));
        assert!(matches!(
            result,
            Err(PulseError::PopulationTooSmall {
                population: 3,
                seeds: 5
            })
        ));
    }

    #[test]
    fn test_population_equal_to_seeds() {
        let dataset = generate(9, 5);
        assert_eq!(dataset.employees.len(), 5);
        assert!(dataset.employees.iter().all(|e| e.id.starts_with(SEED_ID_PREFIX)));
    }

    #[test]
    fn test_generation_stats() {
        let dataset = generate(1, 120);
        let stats = GenerationStats::from_dataset(&dataset);
        assert_eq!(stats.employees_count, 120);
        assert_eq!(stats.accounts_count, 6);
        assert_eq!(stats.total_revenue_at_risk, dataset.health.total_revenue_at_risk);
    }

    #[test]
    fn test_round_tenure() {
        assert_eq!(round_tenure(2.04), 2.0);
        assert_eq!(round_tenure(5.96), 6.0);
        assert_eq!(round_tenure(3.46), 3.5);
    }
}
