// SQL 注入检测规则
// 模式顺序即匹配优先级：更具体的模板/插值模式在前，通用拼接模式在后

use super::{entry, CategoryRules, LanguagePatterns};
use crate::model::Severity;

pub(super) fn rules() -> CategoryRules {
    let mut patterns = LanguagePatterns::new();

    patterns.insert(
        "javascript",
        vec![
            entry(
                r#"(?i)`[^`]*(SELECT|INSERT|UPDATE|DELETE)[^`]*\$\{[^}]+\}[^`]*`"#,
                "Template literal in SQL query with SQL keyword",
            ),
            entry(
                r#"["'`][^"'`]*["'`]\s*\+\s*\w+"#,
                "String concatenation in SQL query",
            ),
            entry(
                r#"(?i)(SELECT|INSERT|UPDATE|DELETE)[^;]*\+\s*\w+"#,
                "SQL keyword with string concatenation",
            ),
        ],
    );

    patterns.insert(
        "python",
        vec![
            entry(
                r#"(?i)f["'][^"']*(SELECT|INSERT|UPDATE|DELETE)[^"']*\{[^}]+\}[^"']*["']"#,
                "f-string with variable interpolation and SQL keyword",
            ),
            entry(
                r#"["'][^"']*["']\s*\+\s*\w+"#,
                "String concatenation in SQL query",
            ),
            entry(
                r#"(?i)(SELECT|INSERT|UPDATE|DELETE)[^;]*\+\s*\w+"#,
                "SQL keyword with string concatenation",
            ),
        ],
    );

    patterns.insert(
        "java",
        vec![
            entry(
                r#"["'][^"']*["']\s*\+\s*\w+"#,
                "String concatenation in SQL query",
            ),
            entry(
                r#"(?i)(SELECT|INSERT|UPDATE|DELETE)[^;]*\+\s*\w+"#,
                "SQL keyword with string concatenation",
            ),
        ],
    );

    patterns.insert(
        "php",
        vec![
            entry(
                r#"["'][^"']*["']\s*\.\s*\$\w+"#,
                "String concatenation in SQL query",
            ),
            entry(
                r#"(?i)(SELECT|INSERT|UPDATE|DELETE)[^;]*\.\s*\$\w+"#,
                "SQL keyword with string concatenation",
            ),
        ],
    );

    CategoryRules {
        id: "sql-injection",
        name: "SQL Injection Vulnerability",
        description: "Potential SQL injection vulnerability detected. The code appears to be \
                      constructing SQL queries using string concatenation or executing dynamic \
                      SQL, which could allow attackers to manipulate the query.",
        severity: Severity::Critical,
        category: "Injection",
        recommendation: "Use parameterized queries or prepared statements instead of string concatenation. For example:\n\
                         - JavaScript: Use ? placeholders with mysql2 or pg\n\
                         - Python: Use parameterized queries with SQLAlchemy or psycopg2\n\
                         - Java: Use PreparedStatement with ? placeholders\n\
                         - PHP: Use PDO prepared statements with ? or :named placeholders",
        cwe_id: Some("CWE-89"),
        owasp_category: Some("A03:2021 - Injection"),
        patterns,
    }
}
