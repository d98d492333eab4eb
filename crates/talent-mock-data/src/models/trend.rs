//! 离职趋势模型

use serde::{Deserialize, Serialize};

/// 单月离职趋势
///
/// 财年从 4 月开始，到次年 3 月结束
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttritionTrend {
    /// 财年标识，如 "2024-2025"
    pub fiscal_year: String,
    /// 月份缩写（Apr-Mar）
    pub month: String,
    /// 月初日期（YYYY-MM-01）
    pub month_date: String,
    pub attrition_count: u32,
    pub headcount: i32,
    /// 离职率百分比，保留两位小数
    pub attrition_rate: String,
}

impl AttritionTrend {
    /// 计算离职率字符串
    pub fn rate(attrition_count: u32, headcount: i32) -> String {
        if headcount <= 0 {
            return "0.00".to_string();
        }
        let rate = f64::from(attrition_count) / f64::from(headcount) * 100.0;
        // 恰好落在中点时进位，`{:.2}` 会向偶数舍入
        format!("{:.2}", (rate * 100.0).round() / 100.0)
    }
}
