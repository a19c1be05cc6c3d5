use serde::{Deserialize, Serialize};

/// 严重程度，按风险从高到低排序
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 单个文本命中位置，行列均为 1 起始
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub column: usize,
    pub length: usize,
    pub snippet: String,
}

/// 单类漏洞的检查结果，聚合该类在整段代码中的所有命中位置
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Finding {
    pub id: String,
    pub name: String,
    pub description: String,
    pub severity: Severity,
    pub category: String,
    pub locations: Vec<Location>,
    pub recommendation: String,
    #[serde(rename = "cweId", default, skip_serializing_if = "Option::is_none")]
    pub cwe_id: Option<String>,
    #[serde(rename = "owaspCategory", default, skip_serializing_if = "Option::is_none")]
    pub owasp_category: Option<String>,
}

/// 按严重程度统计的汇总计数
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_issues: usize,
    pub critical_issues: usize,
    pub high_issues: usize,
    pub medium_issues: usize,
    pub low_issues: usize,
}

impl Summary {
    /// 由检查结果集合计算汇总，保证 total 与各档计数一致
    pub fn tally(vulnerabilities: &[Finding]) -> Self {
        let count = |s: Severity| vulnerabilities.iter().filter(|v| v.severity == s).count();
        Summary {
            total_issues: vulnerabilities.len(),
            critical_issues: count(Severity::Critical),
            high_issues: count(Severity::High),
            medium_issues: count(Severity::Medium),
            low_issues: count(Severity::Low),
        }
    }
}

/// 一次扫描请求的完整结果
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AnalysisResult {
    pub vulnerabilities: Vec<Finding>,
    pub summary: Summary,
}
