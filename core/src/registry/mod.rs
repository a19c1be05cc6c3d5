// Pattern registry - 模式注册表
// 按漏洞类别、按语言维护编译好的检测模式，进程启动时构建一次，此后只读

mod access_control;
mod broken_auth;
mod csrf;
mod dependencies;
mod deserialization;
mod logging;
mod misconfig;
mod sensitive_data;
mod sql_injection;
mod xss;

use crate::model::Severity;
use regex::Regex;
use std::collections::HashMap;
use std::sync::Arc;

/// 单条检测模式：编译好的正则 + 可读描述
#[derive(Debug)]
pub struct PatternEntry {
    pub pattern: Regex,
    pub description: &'static str,
}

/// 语言键（小写）到模式列表的映射
pub type LanguagePatterns = HashMap<&'static str, Vec<PatternEntry>>;

fn entry(pattern: &str, description: &'static str) -> PatternEntry {
    PatternEntry {
        pattern: Regex::new(pattern).unwrap(),
        description,
    }
}

/// 一个漏洞类别的完整规则集：固定元数据 + 按语言的模式表
#[derive(Debug)]
pub struct CategoryRules {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub severity: Severity,
    pub category: &'static str,
    pub recommendation: &'static str,
    pub cwe_id: Option<&'static str>,
    pub owasp_category: Option<&'static str>,
    patterns: LanguagePatterns,
}

impl CategoryRules {
    /// 语言未注册时返回 None（该类别不支持此语言，不是错误）
    pub fn patterns_for(&self, language: &str) -> Option<&[PatternEntry]> {
        self.patterns.get(language).map(|v| v.as_slice())
    }

    pub fn supported_languages(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.patterns.keys().copied()
    }
}

/// 全部类别的注册表，注册顺序固定（决定结果排序）
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    categories: Vec<Arc<CategoryRules>>,
}

impl PatternRegistry {
    /// 构建内置规则集，注册顺序即扫描结果中的类别顺序
    pub fn builtin() -> Self {
        let categories = vec![
            sql_injection::rules(),
            xss::rules(),
            csrf::rules(),
            deserialization::rules(),
            broken_auth::rules(),
            sensitive_data::rules(),
            access_control::rules(),
            misconfig::rules(),
            dependencies::rules(),
            logging::rules(),
        ];
        Self {
            categories: categories.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn categories(&self) -> &[Arc<CategoryRules>] {
        &self.categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_has_ten_categories_in_fixed_order() {
        let registry = PatternRegistry::builtin();
        let ids: Vec<&str> = registry.categories().iter().map(|c| c.id).collect();
        assert_eq!(
            ids,
            vec![
                "sql-injection",
                "xss",
                "csrf",
                "insecure-deserialization",
                "broken-authentication",
                "sensitive-data-exposure",
                "missing-access-control",
                "security-misconfiguration",
                "insecure-dependencies",
                "insufficient-logging",
            ]
        );
    }

    #[test]
    fn unknown_language_has_no_patterns() {
        let registry = PatternRegistry::builtin();
        for rules in registry.categories() {
            assert!(rules.patterns_for("cobol").is_none());
        }
    }

    #[test]
    fn language_keys_are_lowercase() {
        let registry = PatternRegistry::builtin();
        for rules in registry.categories() {
            for lang in rules.supported_languages() {
                assert_eq!(lang, lang.to_lowercase());
                assert!(!rules.patterns_for(lang).unwrap().is_empty());
            }
        }
    }
}
