// 访问控制缺失检测规则：客户端身份直用、全放行配置、动态包含

use super::{entry, CategoryRules, LanguagePatterns};
use crate::model::Severity;

pub(super) fn rules() -> CategoryRules {
    let mut patterns = LanguagePatterns::new();

    patterns.insert(
        "javascript",
        vec![
            entry(
                r#"(?i)req\.(query|params|body)\.(user_?id|role|is_?admin)"#,
                "Client-supplied identity or role used directly",
            ),
            entry(
                r#"(?i)is_?admin\s*=\s*(true|req\.)"#,
                "Admin flag set from request or constant",
            ),
        ],
    );

    patterns.insert(
        "python",
        vec![
            entry(
                r#"permission_classes\s*=\s*\[\s*\]"#,
                "Empty DRF permission_classes",
            ),
            entry(
                r#"(?i)request\.(GET|POST)\.get\(\s*['"](role|user_?id|is_?admin)"#,
                "Client-supplied identity or role used directly",
            ),
        ],
    );

    patterns.insert(
        "java",
        vec![
            entry(
                r#"(?i)antMatchers\([^)]*\)\.permitAll\(\)"#,
                "Route matcher configured with permitAll",
            ),
            entry(
                r#"(?i)@PreAuthorize\(\s*"permitAll"#,
                "Method secured with permitAll",
            ),
        ],
    );

    patterns.insert(
        "php",
        vec![
            entry(
                r#"(?i)\$_(GET|POST|REQUEST)\[\s*['"](role|user_?id|is_?admin)"#,
                "Client-supplied identity or role used directly",
            ),
            entry(
                r#"(?i)include(_once)?\s*\(\s*\$_(GET|POST|REQUEST)"#,
                "File inclusion driven by request data",
            ),
        ],
    );

    CategoryRules {
        id: "missing-access-control",
        name: "Missing Access Control",
        description: "The code trusts client-supplied identity or role values, or configures \
                      endpoints to permit all callers. Requests can act on resources the \
                      caller should not be able to reach.",
        severity: Severity::High,
        category: "Broken Access Control",
        recommendation: "Derive identity and role from the authenticated session on the \
                         server, enforce authorization checks on every protected route, and \
                         never branch on role flags taken from request parameters.",
        cwe_id: Some("CWE-862"),
        owasp_category: Some("A01:2021 - Broken Access Control"),
        patterns,
    }
}
