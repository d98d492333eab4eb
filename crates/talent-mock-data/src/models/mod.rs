//! 数据模型
//!
//! 包含账户、员工、健康度快照、离职趋势等数据结构，
//! 字段序列化格式与前端看板读取的 JSON 文档保持一致。

pub mod account;
pub mod employee;
pub mod health;
pub mod trend;

pub use account::{Account, AccountSummary};
pub use employee::{Employee, Function, Geography, GradeMappingStatus, Origin, Signal};
pub use health::HealthSnapshot;
pub use trend::AttritionTrend;
