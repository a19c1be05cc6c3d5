// 跨站脚本（XSS）检测规则
// DOM sink 列表参考常见浏览器端注入点：innerHTML、document.write、eval 等

use super::{entry, CategoryRules, LanguagePatterns};
use crate::model::Severity;

pub(super) fn rules() -> CategoryRules {
    let mut patterns = LanguagePatterns::new();

    patterns.insert(
        "javascript",
        vec![
            entry(r#"\.innerHTML\s*="#, "Assignment to innerHTML"),
            entry(r#"\.outerHTML\s*="#, "Assignment to outerHTML"),
            entry(r#"document\.write(ln)?\s*\("#, "document.write call"),
            entry(
                r#"dangerouslySetInnerHTML"#,
                "React dangerouslySetInnerHTML usage",
            ),
            entry(
                r#"\.insertAdjacentHTML\s*\("#,
                "insertAdjacentHTML with dynamic markup",
            ),
            entry(r#"\beval\s*\("#, "eval() on string data"),
            entry(
                r#"\.html\s*\(\s*[A-Za-z_$][\w$.]*\s*\)"#,
                "jQuery .html() with a variable",
            ),
        ],
    );

    patterns.insert(
        "python",
        vec![
            entry(
                r#"render_template_string\s*\("#,
                "Flask render_template_string with dynamic template",
            ),
            entry(r#"\bMarkup\s*\("#, "Markup() bypasses autoescaping"),
            entry(r#"\bmark_safe\s*\("#, "Django mark_safe bypasses autoescaping"),
            entry(r#"\|\s*safe\b"#, "Template |safe filter disables escaping"),
        ],
    );

    patterns.insert(
        "java",
        vec![
            entry(
                r#"(?i)response\.getWriter\(\)\.(print|println|write)\s*\([^)]*\+"#,
                "Response writer printing concatenated data",
            ),
            entry(
                r#"(?i)out\.print(ln)?\s*\([^)]*request\.getParameter"#,
                "Request parameter echoed to response",
            ),
        ],
    );

    patterns.insert(
        "php",
        vec![
            entry(
                r#"(?i)echo\s+\$_(GET|POST|REQUEST|COOKIE)"#,
                "echo of raw request data",
            ),
            entry(
                r#"(?i)print\s+\$_(GET|POST|REQUEST|COOKIE)"#,
                "print of raw request data",
            ),
            entry(
                r#"(?i)<\?=\s*\$_(GET|POST|REQUEST)"#,
                "Short echo tag with raw request data",
            ),
        ],
    );

    CategoryRules {
        id: "xss",
        name: "Cross-Site Scripting (XSS) Vulnerability",
        description: "Potential cross-site scripting vulnerability detected. The code writes \
                      data into HTML output or evaluates strings without apparent escaping, \
                      which could allow attackers to inject scripts into pages served to other \
                      users.",
        severity: Severity::High,
        category: "Injection",
        recommendation: "Escape or sanitize all data before inserting it into HTML. Prefer safe \
                         DOM APIs (textContent, setAttribute) over innerHTML/document.write, use \
                         your framework's autoescaping templates, and avoid eval on any \
                         user-reachable string.",
        cwe_id: Some("CWE-79"),
        owasp_category: Some("A03:2021 - Injection"),
        patterns,
    }
}
