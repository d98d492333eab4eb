//! 导出模块
//!
//! 把已生成的中间文档导出为电子表格友好的 CSV 文件。

pub mod csv;

use pulse_shared::error::Result;
use tracing::info;

use crate::store::IntermediateStore;

pub use self::csv::{accounts_csv, employees_csv, escape_field, trends_csv};

pub const EMPLOYEES_CSV: &str = "employees.csv";
pub const ACCOUNTS_CSV: &str = "accounts.csv";
pub const TRENDS_CSV: &str = "attrition_trends.csv";

/// 导出结果统计
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportStats {
    pub employees: usize,
    pub accounts: usize,
}

/// 读取中间文档并写出名册与账户 CSV
///
/// 依赖生成器已经运行，缺少中间文件时直接返回错误
pub fn export_tables(store: &IntermediateStore) -> Result<ExportStats> {
    let talent = store.read_talent()?;
    let accounts = store.read_accounts()?;

    store.write_text(EMPLOYEES_CSV, &employees_csv(&talent.employees))?;
    store.write_text(ACCOUNTS_CSV, &accounts_csv(&accounts.accounts))?;

    let stats = ExportStats {
        employees: talent.employees.len(),
        accounts: accounts.accounts.len(),
    };
    info!(
        dir = %store.dir().display(),
        employees = stats.employees,
        accounts = stats.accounts,
        "CSV 导出完成"
    );
    Ok(stats)
}
