//! 中间文件存储
//!
//! 生成器与打包器之间唯一的交接方式：同一目录下的三个 JSON 文档。
//! 每次写入都整体覆盖旧文件，不做合并。

use std::fs;
use std::path::{Path, PathBuf};

use pulse_shared::error::{PulseError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::generators::GeneratedDataset;
use crate::models::{AccountSummary, Employee, HealthSnapshot};

pub const TALENT_FILE: &str = "talent.json";
pub const ACCOUNTS_FILE: &str = "accounts.json";
pub const HEALTH_FILE: &str = "health.json";

/// 员工名册文档：`{"employees": [...]}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TalentDocument {
    pub employees: Vec<Employee>,
}

/// 账户汇总文档：`{"accounts": [...]}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountsDocument {
    pub accounts: Vec<AccountSummary>,
}

/// 中间文件目录
#[derive(Debug, Clone)]
pub struct IntermediateStore {
    dir: PathBuf,
}

impl IntermediateStore {
    /// 创建存储实例，不会立即创建目录
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// 目录下指定文件的完整路径
    pub fn path(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }

    /// 确保目录存在
    pub fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| PulseError::write(&self.dir, e))
    }

    /// 写入生成结果的三个文档
    pub fn write_dataset(&self, dataset: &GeneratedDataset) -> Result<()> {
        self.ensure_dir()?;

        self.write_json(
            TALENT_FILE,
            &TalentDocument {
                employees: dataset.employees.clone(),
            },
        )?;
        self.write_json(
            ACCOUNTS_FILE,
            &AccountsDocument {
                accounts: dataset.accounts.clone(),
            },
        )?;
        self.write_json(HEALTH_FILE, &dataset.health)?;

        info!(dir = %self.dir.display(), "中间文件已写入");
        Ok(())
    }

    /// 读取员工名册文档
    pub fn read_talent(&self) -> Result<TalentDocument> {
        self.read_json(TALENT_FILE)
    }

    /// 读取账户汇总文档
    pub fn read_accounts(&self) -> Result<AccountsDocument> {
        self.read_json(ACCOUNTS_FILE)
    }

    /// 读取健康度快照
    pub fn read_health(&self) -> Result<HealthSnapshot> {
        self.read_json(HEALTH_FILE)
    }

    /// 以两空格缩进写入 JSON 文档
    pub fn write_json<T: Serialize + ?Sized>(&self, file_name: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.write_text(file_name, &json)
    }

    /// 读取并解析 JSON 文档
    pub fn read_json<T: DeserializeOwned>(&self, file_name: &str) -> Result<T> {
        let path = self.path(file_name);
        let content = fs::read_to_string(&path).map_err(|e| PulseError::read(&path, e))?;
        serde_json::from_str(&content).map_err(|e| PulseError::Parse { path, source: e })
    }

    /// 写入文本文件，覆盖已有内容
    pub fn write_text(&self, file_name: &str, content: &str) -> Result<()> {
        let path = self.path(file_name);
        fs::write(&path, content).map_err(|e| PulseError::write(&path, e))?;
        debug!(path = %path.display(), bytes = content.len(), "文件已写入");
        Ok(())
    }
}
