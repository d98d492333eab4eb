//! 数据打包器
//!
//! 把三个中间 JSON 文档合并成一个可被前端以脚本方式加载的文件：
//! `const RAW_DATA = { "health": ..., "accounts": [...], "talent": [...] };`
//!
//! 所有输入读取并解析成功后才会写出产物，任何一步失败都不会留下半成品。

use std::fs;
use std::path::Path;

use pulse_shared::error::{PulseError, Result};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, instrument};

use crate::store::{ACCOUNTS_FILE, HEALTH_FILE, IntermediateStore, TALENT_FILE};

/// 打包内容
///
/// 字段顺序即输出中的键顺序
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BundlePayload {
    pub health: Value,
    pub accounts: Value,
    pub talent: Value,
}

/// 打包结果统计
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleStats {
    pub accounts: usize,
    pub employees: usize,
    pub bytes: usize,
}

/// 数据打包器
pub struct Bundler {
    store: IntermediateStore,
    global_name: String,
}

impl Bundler {
    /// 创建打包器
    pub fn new(store: IntermediateStore, global_name: impl Into<String>) -> Self {
        Self {
            store,
            global_name: global_name.into(),
        }
    }

    /// 读取三个中间文档并组装打包内容
    ///
    /// 健康度文档整体保留，账户与员工文档只取内部列表
    pub fn collect(&self) -> Result<BundlePayload> {
        let health: Value = self.store.read_json(HEALTH_FILE)?;
        let accounts = self.extract(ACCOUNTS_FILE, "accounts")?;
        let talent = self.extract(TALENT_FILE, "employees")?;

        Ok(BundlePayload {
            health,
            accounts,
            talent,
        })
    }

    /// 渲染为全局常量赋值语句
    pub fn render(&self, payload: &BundlePayload) -> Result<String> {
        let json = serde_json::to_string_pretty(payload)?;
        Ok(format!("const {} = {};", self.global_name, json))
    }

    /// 执行打包并写出产物
    #[instrument(skip(self), fields(global = %self.global_name))]
    pub fn bundle_to(&self, output: &Path) -> Result<BundleStats> {
        let payload = self.collect()?;
        let script = self.render(&payload)?;

        fs::write(output, &script).map_err(|e| PulseError::write(output, e))?;

        let stats = BundleStats {
            accounts: payload.accounts.as_array().map_or(0, Vec::len),
            employees: payload.talent.as_array().map_or(0, Vec::len),
            bytes: script.len(),
        };

        info!(
            path = %output.display(),
            accounts = stats.accounts,
            employees = stats.employees,
            bytes = stats.bytes,
            "数据打包完成"
        );
        Ok(stats)
    }

    fn extract(&self, file_name: &str, key: &str) -> Result<Value> {
        let mut document: Value = self.store.read_json(file_name)?;
        document
            .get_mut(key)
            .map(Value::take)
            .ok_or_else(|| PulseError::MissingKey {
                path: self.store.path(file_name),
                key: key.to_string(),
            })
    }
}

/// 从打包产物中取出 JSON 文本
///
/// 产物格式不符合 `const <name> = <json>;` 时返回 None
pub fn parse_script<'s>(script: &'s str, global_name: &str) -> Option<&'s str> {
    script
        .strip_prefix("const ")?
        .strip_prefix(global_name)?
        .strip_prefix(" = ")?
        .strip_suffix(';')
}
