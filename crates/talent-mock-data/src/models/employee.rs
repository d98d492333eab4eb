//! 员工模型
//!
//! 员工名册中的单条记录，以及描述员工属性的枚举类型。

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// 员工记录
///
/// 序列化字段名与前端看板约定一致（camelCase），
/// `grade_mapping_status` 只出现在随机填充的员工上，种子员工不输出该字段。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub role: String,
    pub origin: Origin,
    pub function: Function,
    pub geography: Geography,
    /// 司龄（年），保留一位小数
    pub tenure: f64,
    /// 流失风险分，范围 0-100
    pub risk_score: u32,
    pub business_impact: u32,
    pub signals: Vec<Signal>,
    /// 所属账户名称，必须存在于账户目录中
    pub account: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade_mapping_status: Option<GradeMappingStatus>,
    pub revenue_at_risk: i64,
}

impl Employee {
    /// 是否带有指定风险信号
    pub fn has_signal(&self, signal: Signal) -> bool {
        self.signals.contains(&signal)
    }
}

/// 员工来源层级
///
/// 两类招聘渠道：LV 为低风险的存量渠道，DP 为高风险渠道，
/// 层级决定风险分的基线区间。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Origin {
    #[serde(rename = "LV")]
    Lv,
    #[serde(rename = "DP")]
    Dp,
}

impl Origin {
    /// 获取层级代码
    pub fn code(&self) -> &'static str {
        match self {
            Self::Lv => "LV",
            Self::Dp => "DP",
        }
    }

    /// 种子员工的风险分基线
    ///
    /// 实际风险分 = 基线 + [0, 10] 随机值
    pub fn seed_risk_base(&self) -> u32 {
        match self {
            Self::Lv => 65,
            Self::Dp => 85,
        }
    }

    /// 填充员工的基础风险分区间
    pub fn fill_risk_range(&self) -> RangeInclusive<u32> {
        match self {
            Self::Lv => 20..=60,
            Self::Dp => 40..=85,
        }
    }
}

/// 业务职能
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Function {
    Delivery,
    Technology,
    #[serde(rename = "RGM")]
    Rgm,
    Product,
}

impl Function {
    pub const ALL: [Self; 4] = [Self::Delivery, Self::Technology, Self::Rgm, Self::Product];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Delivery => "Delivery",
            Self::Technology => "Technology",
            Self::Rgm => "RGM",
            Self::Product => "Product",
        }
    }
}

/// 所在地区
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Geography {
    India,
    #[serde(rename = "US")]
    Us,
    LatAm,
    Europe,
}

impl Geography {
    pub const ALL: [Self; 4] = [Self::India, Self::Us, Self::LatAm, Self::Europe];

    pub fn name(&self) -> &'static str {
        match self {
            Self::India => "India",
            Self::Us => "US",
            Self::LatAm => "LatAm",
            Self::Europe => "Europe",
        }
    }
}

/// 风险信号
///
/// 每个信号都会在生成时抬高员工的风险分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    /// 经理上报的关注
    ManagerFlag,
    /// 薪酬差距
    CompGap,
}

impl Signal {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ManagerFlag => "manager_flag",
            Self::CompGap => "comp_gap",
        }
    }
}

/// 职级映射状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GradeMappingStatus {
    Mapped,
    Pending,
}

impl GradeMappingStatus {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mapped => "Mapped",
            Self::Pending => "Pending",
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Geography {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
