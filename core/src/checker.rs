// Checker - 漏洞检查器
// 每个类别一个检查器实例，共用同一套逐行扫描逻辑

use crate::model::{Finding, Location};
use crate::registry::CategoryRules;
use async_trait::async_trait;
use std::sync::Arc;

/// 检查器 trait - 每个漏洞类别实现此接口
///
/// 返回 None 表示该类别在这段代码中无发现（包括语言不支持的情况），
/// 不是错误。检查器不得让任何内部故障越过自身边界。
#[async_trait]
pub trait Checker: Send + Sync {
    /// 类别的稳定标识（如 "sql-injection"）
    fn id(&self) -> &str;

    /// 对整段代码做一次纯函数式扫描
    async fn check(&self, code: &str, language: &str) -> Option<Finding>;
}

/// 基于模式注册表的通用检查器，覆盖全部内置类别
pub struct RegexChecker {
    rules: Arc<CategoryRules>,
}

impl RegexChecker {
    pub fn new(rules: Arc<CategoryRules>) -> Self {
        Self { rules }
    }
}

#[async_trait]
impl Checker for RegexChecker {
    fn id(&self) -> &str {
        self.rules.id
    }

    async fn check(&self, code: &str, language: &str) -> Option<Finding> {
        let language = language.trim().to_lowercase();
        let patterns = self.rules.patterns_for(&language)?;

        let mut locations = Vec::new();
        for (idx, line) in code.split('\n').enumerate() {
            // 同一行内首个命中的模式生效，避免同类模式重复上报
            for entry in patterns {
                if let Some(m) = entry.pattern.find(line) {
                    locations.push(Location {
                        line: idx + 1,
                        column: m.start() + 1,
                        length: m.as_str().len(),
                        snippet: line.trim().to_string(),
                    });
                    break;
                }
            }
        }

        if locations.is_empty() {
            return None;
        }

        Some(Finding {
            id: self.rules.id.to_string(),
            name: self.rules.name.to_string(),
            description: self.rules.description.to_string(),
            severity: self.rules.severity,
            category: self.rules.category.to_string(),
            locations,
            recommendation: self.rules.recommendation.to_string(),
            cwe_id: self.rules.cwe_id.map(str::to_string),
            owasp_category: self.rules.owasp_category.map(str::to_string),
        })
    }
}
