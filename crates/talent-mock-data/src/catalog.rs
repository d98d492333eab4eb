//! 种子数据目录
//!
//! 生成器的全部输入：账户目录、种子员工、职能/地区枚举、填充员工的职位列表。
//! 目录作为不可变值显式传入生成器，默认值即内置的演示数据集。

use std::path::Path;

use chrono::NaiveDate;
use pulse_shared::error::{PulseError, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::{Account, Function, Geography, Origin};

/// 种子员工
///
/// 预先指定身份与归属的关键人员，生成时排在名册最前面
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedEmployee {
    pub name: String,
    pub role: String,
    pub account: String,
    pub origin: Origin,
    pub function: Function,
    pub geography: Geography,
}

/// 种子数据目录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedCatalog {
    pub accounts: Vec<Account>,
    pub seeds: Vec<SeedEmployee>,
    #[serde(default = "default_functions")]
    pub functions: Vec<Function>,
    #[serde(default = "default_geographies")]
    pub geographies: Vec<Geography>,
    #[serde(default = "default_roles")]
    pub roles: Vec<String>,
}

const fn renewal(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid renewal date"),
    }
}

/// 内置账户目录：名称、收入、续约日期、基础团队规模
const ACCOUNTS: [(&str, i64, NaiveDate, u32); 6] = [
    ("PepsiCo", 2_800_000, renewal(2025, 3, 15), 18),
    ("Kellanova", 1_900_000, renewal(2025, 6, 20), 14),
    ("Unilever", 2_200_000, renewal(2025, 9, 10), 16),
    ("Coca-Cola", 1_800_000, renewal(2025, 12, 5), 12),
    ("Coke Bottlers", 1_400_000, renewal(2025, 8, 22), 10),
    ("Bimbo", 900_000, renewal(2025, 11, 30), 8),
];

/// 内置种子员工：姓名、职位、账户、来源、职能、地区
const SEEDS: [(&str, &str, &str, Origin, Function, Geography); 5] = [
    (
        "Priya S.",
        "Engagement Lead",
        "PepsiCo",
        Origin::Dp,
        Function::Delivery,
        Geography::India,
    ),
    (
        "Rahul M.",
        "RGM Director",
        "Kellanova",
        Origin::Dp,
        Function::Rgm,
        Geography::Us,
    ),
    (
        "Chen W.",
        "Sr Consultant",
        "Unilever",
        Origin::Dp,
        Function::Delivery,
        Geography::Europe,
    ),
    (
        "Maria L.",
        "Data Engineer",
        "Bimbo",
        Origin::Dp,
        Function::Technology,
        Geography::LatAm,
    ),
    (
        "James T.",
        "PM Lead",
        "Coca-Cola",
        Origin::Lv,
        Function::Product,
        Geography::Us,
    ),
];

const ROLES: [&str; 5] = [
    "Associate",
    "Consultant",
    "Sr Consultant",
    "Manager",
    "Director",
];

fn default_functions() -> Vec<Function> {
    Function::ALL.to_vec()
}

fn default_geographies() -> Vec<Geography> {
    Geography::ALL.to_vec()
}

fn default_roles() -> Vec<String> {
    ROLES.iter().map(|r| r.to_string()).collect()
}

impl Default for SeedCatalog {
    fn default() -> Self {
        let accounts = ACCOUNTS
            .iter()
            .map(|(name, revenue, renewal, base_team)| Account {
                name: name.to_string(),
                revenue: *revenue,
                renewal: *renewal,
                base_team: *base_team,
            })
            .collect();

        let seeds = SEEDS
            .iter()
            .map(
                |(name, role, account, origin, function, geography)| SeedEmployee {
                    name: name.to_string(),
                    role: role.to_string(),
                    account: account.to_string(),
                    origin: *origin,
                    function: *function,
                    geography: *geography,
                },
            )
            .collect();

        Self {
            accounts,
            seeds,
            functions: default_functions(),
            geographies: default_geographies(),
            roles: default_roles(),
        }
    }
}

impl SeedCatalog {
    /// 从 JSON 字符串解析目录
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// 从 YAML 字符串解析目录
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// 从文件加载目录并校验
    ///
    /// 根据文件扩展名选择解析方式：.yaml/.yml 按 YAML，其余按 JSON
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PulseError::read(path, e))?;

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == "yaml" || ext == "yml");

        let catalog = if is_yaml {
            Self::from_yaml(&content)
                .map_err(|e| PulseError::Catalog(format!("{}: {}", path.display(), e)))?
        } else {
            Self::from_json(&content).map_err(|e| PulseError::Parse {
                path: path.to_path_buf(),
                source: e,
            })?
        };

        catalog.validate()?;

        info!(
            path = %path.display(),
            accounts = catalog.accounts.len(),
            seeds = catalog.seeds.len(),
            "从文件加载种子目录"
        );
        Ok(catalog)
    }

    /// 按名称查找账户
    pub fn account(&self, name: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.name == name)
    }

    /// 校验目录能够支撑生成流程
    ///
    /// 随机抽样的候选列表不能为空，种子员工引用的账户必须存在
    pub fn validate(&self) -> Result<()> {
        if self.accounts.is_empty() {
            return Err(PulseError::Catalog("账户目录为空".to_string()));
        }
        if self.functions.is_empty() || self.geographies.is_empty() || self.roles.is_empty() {
            return Err(PulseError::Catalog("职能、地区或职位列表为空".to_string()));
        }

        for seed in &self.seeds {
            if self.account(&seed.account).is_none() {
                return Err(PulseError::UnknownAccount {
                    employee: seed.name.clone(),
                    account: seed.account.clone(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_default_catalog() {
        let catalog = SeedCatalog::default();

        assert_eq!(catalog.accounts.len(), 6);
        assert_eq!(catalog.seeds.len(), 5);
        assert_eq!(catalog.roles.len(), 5);
        assert!(catalog.validate().is_ok());

        let pepsico = catalog.account("PepsiCo").unwrap();
        assert_eq!(pepsico.revenue, 2_800_000);
        assert_eq!(pepsico.renewal, NaiveDate::from_ymd_opt(2025, 3, 15).unwrap());

        // 唯一的 LV 种子员工
        let lv: Vec<_> = catalog
            .seeds
            .iter()
            .filter(|s| s.origin == Origin::Lv)
            .collect();
        assert_eq!(lv.len(), 1);
        assert_eq!(lv[0].name, "James T.");
    }

    #[test]
    fn test_validate_unknown_account() {
        let mut catalog = SeedCatalog::default();
        catalog.seeds[0].account = "Acme".to_string();

        let err = catalog.validate().unwrap_err();
        assert_eq!(err.code(), "UNKNOWN_ACCOUNT");
    }

    #[test]
    fn test_validate_empty_accounts() {
        let catalog = SeedCatalog {
            accounts: vec![],
            seeds: vec![],
            ..SeedCatalog::default()
        };
        assert_eq!(catalog.validate().unwrap_err().code(), "CATALOG_INVALID");
    }

    #[test]
    fn test_load_yaml_uses_default_enumerations() {
        let yaml = r#"
accounts:
  - name: Acme
    revenue: 1000000
    renewal: 2026-01-31
    base_team: 4
seeds:
  - name: Ada L.
    role: Principal
    account: Acme
    origin: DP
    function: RGM
    geography: US
"#;
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let catalog = SeedCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.accounts[0].name, "Acme");
        assert_eq!(catalog.seeds[0].function, Function::Rgm);
        assert_eq!(catalog.functions, Function::ALL.to_vec());
        assert_eq!(catalog.roles.len(), 5);
    }

    #[test]
    fn test_json_round_trip() {
        let catalog = SeedCatalog::default();
        let json = serde_json::to_string(&catalog).unwrap();
        assert_eq!(SeedCatalog::from_json(&json).unwrap(), catalog);
    }
}
