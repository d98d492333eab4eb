//! 账户模型
//!
//! 账户目录条目以及按账户汇总的团队风险视图。

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 客户账户
///
/// 账户目录中的一条记录，运行期间不可变。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// 账户名称，目录内唯一
    pub name: String,
    /// 年度收入基线
    pub revenue: i64,
    /// 续约日期
    pub renewal: NaiveDate,
    /// 基础团队规模，仅供参考，不参与汇总
    pub base_team: u32,
}

/// 账户汇总
///
/// 由员工名册按账户聚合得出
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub name: String,
    pub total_revenue: i64,
    /// ISO 日期字符串（YYYY-MM-DD）
    pub renewal_date: NaiveDate,
    pub team_size: usize,
    /// 成员风险分均值（截断取整），无成员时为 0
    pub people_risk_score: u32,
    pub revenue_at_risk: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_serialization() {
        let summary = AccountSummary {
            name: "PepsiCo".to_string(),
            total_revenue: 2_800_000,
            renewal_date: NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
            team_size: 61,
            people_risk_score: 47,
            revenue_at_risk: 8_232_000,
        };

        let json = serde_json::to_string(&summary).unwrap();
        assert_eq!(
            json,
            r#"{"name":"PepsiCo","totalRevenue":2800000,"renewalDate":"2025-03-15","teamSize":61,"peopleRiskScore":47,"revenueAtRisk":8232000}"#
        );
    }
}
