//! 离职趋势生成器
//!
//! 生成最近两个财年（4 月至次年 3 月）的月度离职数据。
//! 离职人数是固定序列，在岗人数在基线上随机漂移。

use rand::Rng;

use crate::models::AttritionTrend;

const MONTHS: [&str; 12] = [
    "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec", "Jan", "Feb", "Mar",
];

/// 上一财年每月离职人数
const PREVIOUS_YEAR_COUNTS: [u32; 12] = [2, 3, 2, 4, 3, 5, 4, 6, 5, 7, 6, 8];
/// 当前财年每月离职人数（截至最近一个完整月）
const CURRENT_YEAR_COUNTS: [u32; 11] = [3, 4, 3, 5, 4, 6, 5, 7, 6, 8, 7];

const PREVIOUS_YEAR_START: i32 = 2024;
const CURRENT_YEAR_START: i32 = 2025;
const PREVIOUS_YEAR_HEADCOUNT: i32 = 320;
const CURRENT_YEAR_HEADCOUNT: i32 = 340;

/// 生成两个财年的月度离职趋势
pub fn generate_attrition_trends<R: Rng>(rng: &mut R) -> Vec<AttritionTrend> {
    let mut trends = Vec::with_capacity(PREVIOUS_YEAR_COUNTS.len() + CURRENT_YEAR_COUNTS.len());

    // 上一财年：在岗人数小幅波动
    fiscal_year(
        &mut trends,
        PREVIOUS_YEAR_START,
        PREVIOUS_YEAR_HEADCOUNT,
        &PREVIOUS_YEAR_COUNTS,
        || rng.random_range(-1..=1),
    );

    // 当前财年：在岗人数持续增长
    fiscal_year(
        &mut trends,
        CURRENT_YEAR_START,
        CURRENT_YEAR_HEADCOUNT,
        &CURRENT_YEAR_COUNTS,
        || rng.random_range(0..=3),
    );

    trends
}

fn fiscal_year(
    trends: &mut Vec<AttritionTrend>,
    start_year: i32,
    mut headcount: i32,
    counts: &[u32],
    mut drift: impl FnMut() -> i32,
) {
    let label = format!("{}-{}", start_year, start_year + 1);

    for (index, &count) in counts.iter().enumerate() {
        trends.push(AttritionTrend {
            fiscal_year: label.clone(),
            month: MONTHS[index].to_string(),
            month_date: month_date(start_year, index),
            attrition_count: count,
            headcount,
            attrition_rate: AttritionTrend::rate(count, headcount),
        });

        headcount += drift();
    }
}

/// 财年内第 index 个月的月初日期
///
/// 4-12 月属于起始年，1-3 月属于次年
fn month_date(start_year: i32, index: usize) -> String {
    if index < 9 {
        format!("{}-{:02}-01", start_year, index + 4)
    } else {
        format!("{}-{:02}-01", start_year + 1, index - 8)
    }
}
