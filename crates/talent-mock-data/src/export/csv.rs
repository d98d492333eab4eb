//! CSV 导出
//!
//! 把名册、账户汇总和离职趋势转换成可直接粘贴到电子表格的 CSV 文本，
//! 列名使用 snake_case。

use crate::models::{AccountSummary, AttritionTrend, Employee, Signal};

pub const EMPLOYEE_HEADERS: [&str; 14] = [
    "employee_id",
    "employee_name",
    "role",
    "origin",
    "function",
    "geography",
    "tenure_years",
    "account_name",
    "grade_mapping_status",
    "risk_score",
    "business_impact",
    "signal_manager_flag",
    "signal_comp_gap",
    "revenue_at_risk",
];

pub const ACCOUNT_HEADERS: [&str; 6] = [
    "account_name",
    "total_revenue",
    "renewal_date",
    "team_size",
    "people_risk_score",
    "revenue_at_risk",
];

pub const TREND_HEADERS: [&str; 6] = [
    "fiscal_year",
    "month",
    "month_date",
    "attrition_count",
    "headcount",
    "attrition_rate",
];

/// 转义单个字段
///
/// 含逗号、引号或换行的字段用双引号包裹，内部引号加倍
pub fn escape_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn flag(value: bool) -> String {
    let text = if value { "TRUE" } else { "FALSE" };
    text.to_string()
}

fn to_csv<I>(headers: &[&str], rows: I) -> String
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut lines = vec![headers.join(",")];
    lines.extend(rows.into_iter().map(|row| {
        row.iter()
            .map(|field| escape_field(field))
            .collect::<Vec<_>>()
            .join(",")
    }));
    lines.join("\n")
}

/// 员工名册 CSV
pub fn employees_csv(employees: &[Employee]) -> String {
    to_csv(
        &EMPLOYEE_HEADERS,
        employees.iter().map(|e| {
            vec![
                e.id.clone(),
                e.name.clone(),
                e.role.clone(),
                e.origin.to_string(),
                e.function.to_string(),
                e.geography.to_string(),
                e.tenure.to_string(),
                e.account.clone(),
                e.grade_mapping_status
                    .map(|s| s.name().to_string())
                    .unwrap_or_default(),
                e.risk_score.to_string(),
                e.business_impact.to_string(),
                flag(e.has_signal(Signal::ManagerFlag)),
                flag(e.has_signal(Signal::CompGap)),
                e.revenue_at_risk.to_string(),
            ]
        }),
    )
}

/// 账户汇总 CSV
pub fn accounts_csv(accounts: &[AccountSummary]) -> String {
    to_csv(
        &ACCOUNT_HEADERS,
        accounts.iter().map(|a| {
            vec![
                a.name.clone(),
                a.total_revenue.to_string(),
                a.renewal_date.to_string(),
                a.team_size.to_string(),
                a.people_risk_score.to_string(),
                a.revenue_at_risk.to_string(),
            ]
        }),
    )
}

/// 离职趋势 CSV
pub fn trends_csv(trends: &[AttritionTrend]) -> String {
    to_csv(
        &TREND_HEADERS,
        trends.iter().map(|t| {
            vec![
                t.fiscal_year.clone(),
                t.month.clone(),
                t.month_date.clone(),
                t.attrition_count.to_string(),
                t.headcount.to_string(),
                t.attrition_rate.clone(),
            ]
        }),
    )
}
