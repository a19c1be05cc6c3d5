// 日志与监控不足检测规则：吞掉的异常、被关闭的错误上报

use super::{entry, CategoryRules, LanguagePatterns};
use crate::model::Severity;

pub(super) fn rules() -> CategoryRules {
    let mut patterns = LanguagePatterns::new();

    patterns.insert(
        "javascript",
        vec![
            entry(r#"catch\s*\([^)]*\)\s*\{\s*\}"#, "Empty catch block"),
            entry(
                r#"\.catch\(\s*\(\s*\)\s*=>\s*\{\s*\}\s*\)"#,
                "Promise rejection swallowed",
            ),
        ],
    );

    patterns.insert(
        "python",
        vec![
            entry(
                r#"except(\s+\w+(\s+as\s+\w+)?)?\s*:\s*pass\b"#,
                "Exception swallowed with pass",
            ),
            entry(r#"logging\.disable\s*\("#, "Logging disabled"),
        ],
    );

    patterns.insert(
        "java",
        vec![
            entry(r#"catch\s*\([^)]*\)\s*\{\s*\}"#, "Empty catch block"),
            entry(
                r#"\.printStackTrace\(\)"#,
                "Exception printed to stdout instead of logged",
            ),
        ],
    );

    patterns.insert(
        "php",
        vec![
            entry(r#"error_reporting\(\s*0\s*\)"#, "Error reporting disabled"),
            entry(
                r#"(?i)ini_set\(\s*['"]log_errors['"]\s*,\s*['"]?(0|off|false)"#,
                "Error logging disabled",
            ),
        ],
    );

    CategoryRules {
        id: "insufficient-logging",
        name: "Insufficient Logging & Monitoring",
        description: "The code silently discards errors or turns off error reporting. \
                      Security-relevant failures will leave no trace, delaying detection \
                      of attacks and faults.",
        severity: Severity::Low,
        category: "Logging & Monitoring",
        recommendation: "Log caught exceptions with enough context to investigate, keep error \
                         reporting enabled, and route security events to a monitored sink.",
        cwe_id: Some("CWE-778"),
        owasp_category: Some("A09:2021 - Security Logging and Monitoring Failures"),
        patterns,
    }
}
