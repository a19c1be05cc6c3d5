// Analyzer - 扫描编排器
// 对同一输入并发执行全部检查器，按注册顺序汇合结果

use crate::checker::{Checker, RegexChecker};
use crate::model::{AnalysisResult, Summary};
use crate::registry::PatternRegistry;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

/// 单个检查器的时间预算，防止病态输入上的正则回溯拖死整次扫描
const CHECK_BUDGET: Duration = Duration::from_secs(5);

pub struct Analyzer {
    checkers: Vec<Arc<dyn Checker>>,
}

impl Analyzer {
    /// 使用内置模式注册表构建
    pub fn new() -> Self {
        Self::with_registry(&PatternRegistry::builtin())
    }

    /// 从显式传入的注册表构建，检查器顺序即注册表类别顺序
    pub fn with_registry(registry: &PatternRegistry) -> Self {
        let checkers = registry
            .categories()
            .iter()
            .map(|rules| Arc::new(RegexChecker::new(rules.clone())) as Arc<dyn Checker>)
            .collect();
        Self { checkers }
    }

    /// 直接给定检查器列表，供测试与自定义类别扩展使用
    pub fn with_checkers(checkers: Vec<Arc<dyn Checker>>) -> Self {
        Self { checkers }
    }

    /// 扫描一段代码，输入相同则输出相同
    ///
    /// 扇出：每个检查器一个任务，共享只读输入。
    /// 汇合：按注册顺序逐个 join，结果顺序与完成先后无关。
    /// 单个检查器超时或 panic 只记日志并按"无发现"处理，不影响其余类别。
    pub async fn analyze(&self, code: &str, language: &str) -> AnalysisResult {
        let code: Arc<str> = Arc::from(code);
        let language: Arc<str> = Arc::from(language);

        let mut handles = Vec::with_capacity(self.checkers.len());
        for checker in &self.checkers {
            let checker = Arc::clone(checker);
            let code = Arc::clone(&code);
            let language = Arc::clone(&language);
            handles.push(tokio::spawn(async move {
                match timeout(CHECK_BUDGET, checker.check(&code, &language)).await {
                    Ok(result) => result,
                    Err(_) => {
                        tracing::warn!(category = checker.id(), "checker exceeded time budget");
                        None
                    }
                }
            }));
        }

        let mut vulnerabilities = Vec::new();
        for (handle, checker) in handles.into_iter().zip(&self.checkers) {
            match handle.await {
                Ok(Some(finding)) => vulnerabilities.push(finding),
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(category = checker.id(), error = %e, "checker task failed");
                }
            }
        }

        let summary = Summary::tally(&vulnerabilities);
        AnalysisResult {
            vulnerabilities,
            summary,
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Finding, Location, Severity};
    use async_trait::async_trait;

    #[tokio::test]
    async fn identical_input_produces_identical_output() {
        let analyzer = Analyzer::new();
        let code = "const q = \"SELECT * FROM users WHERE id = \" + userId;\nel.innerHTML = q;";
        let first = analyzer.analyze(code, "javascript").await;
        let second = analyzer.analyze(code, "javascript").await;
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[tokio::test]
    async fn summary_matches_findings() {
        let analyzer = Analyzer::new();
        let code = "password = \"hunter2\"\nimport md5\nexcept Exception: pass";
        let result = analyzer.analyze(code, "python").await;
        let s = &result.summary;
        assert_eq!(s.total_issues, result.vulnerabilities.len());
        let by = |sev: Severity| {
            result
                .vulnerabilities
                .iter()
                .filter(|v| v.severity == sev)
                .count()
        };
        assert_eq!(s.critical_issues, by(Severity::Critical));
        assert_eq!(s.high_issues, by(Severity::High));
        assert_eq!(s.medium_issues, by(Severity::Medium));
        assert_eq!(s.low_issues, by(Severity::Low));
    }

    #[tokio::test]
    async fn unknown_language_yields_empty_result() {
        let analyzer = Analyzer::new();
        let code = "IDENTIFICATION DIVISION.";
        let result = analyzer.analyze(code, "cobol").await;
        assert!(result.vulnerabilities.is_empty());
        assert_eq!(result.summary.total_issues, 0);
    }

    #[tokio::test]
    async fn safe_baseline_has_no_findings() {
        let analyzer = Analyzer::new();
        let code = r#"const query = "SELECT * FROM users WHERE id = ?";"#;
        let result = analyzer.analyze(code, "javascript").await;
        assert_eq!(result.summary.total_issues, 0);
    }

    #[tokio::test]
    async fn multi_category_findings_are_independent() {
        let analyzer = Analyzer::new();
        let code = "const query = \"SELECT * FROM users WHERE id = \" + userId;\nelement.innerHTML = userContent;";
        let result = analyzer.analyze(code, "javascript").await;

        assert_eq!(result.summary.total_issues, 2);
        assert_eq!(result.vulnerabilities[0].id, "sql-injection");
        assert_eq!(result.vulnerabilities[1].id, "xss");

        let sql_lines: Vec<usize> = result.vulnerabilities[0]
            .locations
            .iter()
            .map(|l| l.line)
            .collect();
        let xss_lines: Vec<usize> = result.vulnerabilities[1]
            .locations
            .iter()
            .map(|l| l.line)
            .collect();
        assert_eq!(sql_lines, vec![1]);
        assert_eq!(xss_lines, vec![2]);
    }

    /// 固定延迟的假检查器，用于验证结果顺序与完成先后无关
    struct JitterChecker {
        id: &'static str,
        delay: Duration,
    }

    #[async_trait]
    impl Checker for JitterChecker {
        fn id(&self) -> &str {
            self.id
        }

        async fn check(&self, _code: &str, _language: &str) -> Option<Finding> {
            tokio::time::sleep(self.delay).await;
            Some(Finding {
                id: self.id.to_string(),
                name: self.id.to_string(),
                description: String::new(),
                severity: Severity::Low,
                category: "test".to_string(),
                locations: vec![Location {
                    line: 1,
                    column: 1,
                    length: 0,
                    snippet: String::new(),
                }],
                recommendation: String::new(),
                cwe_id: None,
                owasp_category: None,
            })
        }
    }

    #[tokio::test]
    async fn result_order_follows_registration_not_completion() {
        // 注册顺序 slow -> medium -> fast，完成顺序正相反
        let checkers: Vec<Arc<dyn Checker>> = vec![
            Arc::new(JitterChecker {
                id: "slow",
                delay: Duration::from_millis(120),
            }),
            Arc::new(JitterChecker {
                id: "medium",
                delay: Duration::from_millis(60),
            }),
            Arc::new(JitterChecker {
                id: "fast",
                delay: Duration::from_millis(0),
            }),
        ];
        let analyzer = Analyzer::with_checkers(checkers);
        let result = analyzer.analyze("code", "javascript").await;
        let ids: Vec<&str> = result
            .vulnerabilities
            .iter()
            .map(|v| v.id.as_str())
            .collect();
        assert_eq!(ids, vec!["slow", "medium", "fast"]);
    }

    /// 永不返回的检查器，验证超时降级为"无发现"
    struct StallChecker;

    #[async_trait]
    impl Checker for StallChecker {
        fn id(&self) -> &str {
            "stall"
        }

        async fn check(&self, _code: &str, _language: &str) -> Option<Finding> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            None
        }
    }

    #[tokio::test(start_paused = true)]
    async fn stalled_checker_degrades_to_absent() {
        let checkers: Vec<Arc<dyn Checker>> = vec![
            Arc::new(StallChecker),
            Arc::new(JitterChecker {
                id: "fast",
                delay: Duration::from_millis(1),
            }),
        ];
        let analyzer = Analyzer::with_checkers(checkers);
        let result = analyzer.analyze("code", "javascript").await;
        let ids: Vec<&str> = result
            .vulnerabilities
            .iter()
            .map(|v| v.id.as_str())
            .collect();
        assert_eq!(ids, vec!["fast"]);
    }

    /// panic 的检查器，验证故障被隔离在类别边界内
    struct PanicChecker;

    #[async_trait]
    impl Checker for PanicChecker {
        fn id(&self) -> &str {
            "panic"
        }

        async fn check(&self, _code: &str, _language: &str) -> Option<Finding> {
            panic!("boom");
        }
    }

    #[tokio::test]
    async fn panicking_checker_does_not_abort_the_scan() {
        let checkers: Vec<Arc<dyn Checker>> = vec![
            Arc::new(PanicChecker),
            Arc::new(JitterChecker {
                id: "fast",
                delay: Duration::from_millis(0),
            }),
        ];
        let analyzer = Analyzer::with_checkers(checkers);
        let result = analyzer.analyze("code", "javascript").await;
        assert_eq!(result.summary.total_issues, 1);
        assert_eq!(result.vulnerabilities[0].id, "fast");
    }
}
