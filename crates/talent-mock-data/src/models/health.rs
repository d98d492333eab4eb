//! 组织健康度快照

use serde::{Deserialize, Serialize};

/// 总分（固定值，不由子分数推导）
pub const OVERALL_SCORE: u32 = 72;
/// 文化子分
pub const CULTURE_SCORE: u32 = 71;
/// 运营子分
pub const OPERATIONS_SCORE: u32 = 78;
/// 成本子分
pub const COST_SCORE: u32 = 74;

/// 健康度快照
///
/// 只有 `talent`、`total_employees`、`total_revenue_at_risk` 来自员工数据，
/// 其余分数均为固定常量。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthSnapshot {
    pub overall_score: u32,
    /// 全体员工风险分均值（截断取整）
    pub talent: u32,
    pub culture: u32,
    pub operations: u32,
    pub cost: u32,
    pub total_employees: usize,
    pub total_revenue_at_risk: i64,
}

impl HealthSnapshot {
    /// 使用固定子分数构建快照
    pub fn new(talent: u32, total_employees: usize, total_revenue_at_risk: i64) -> Self {
        Self {
            overall_score: OVERALL_SCORE,
            talent,
            culture: CULTURE_SCORE,
            operations: OPERATIONS_SCORE,
            cost: COST_SCORE,
            total_employees,
            total_revenue_at_risk,
        }
    }
}
