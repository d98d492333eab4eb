//! 存储模块
//!
//! 生成器输出与打包器输入共用的中间文件目录。

pub mod json_store;

pub use json_store::{
    ACCOUNTS_FILE, AccountsDocument, HEALTH_FILE, IntermediateStore, TALENT_FILE, TalentDocument,
};
