// CSRF 检测规则：只做词法层面的"防护被显式关闭"检查

use super::{entry, CategoryRules, LanguagePatterns};
use crate::model::Severity;

pub(super) fn rules() -> CategoryRules {
    let mut patterns = LanguagePatterns::new();

    patterns.insert(
        "javascript",
        vec![
            entry(r#"(?i)csrf\s*:\s*false"#, "CSRF protection explicitly disabled"),
            entry(
                r#"(?i)csrfProtection\s*=\s*false"#,
                "CSRF protection flag turned off",
            ),
        ],
    );

    patterns.insert(
        "python",
        vec![
            entry(r#"@csrf_exempt"#, "Django csrf_exempt decorator"),
            entry(
                r#"(?i)WTF_CSRF_ENABLED\s*=\s*False"#,
                "Flask-WTF CSRF protection disabled",
            ),
            entry(
                r#"(?i)csrf\.exempt\s*\("#,
                "Flask view exempted from CSRF protection",
            ),
        ],
    );

    patterns.insert(
        "java",
        vec![
            entry(
                r#"(?i)\.csrf\(\)\.disable\(\)"#,
                "Spring Security CSRF protection disabled",
            ),
            entry(
                r#"(?i)csrf\(\s*AbstractHttpConfigurer::disable\s*\)"#,
                "Spring Security CSRF protection disabled",
            ),
        ],
    );

    patterns.insert(
        "php",
        vec![entry(
            r#"(?i)['"]csrf['"]\s*=>\s*false"#,
            "Framework CSRF option set to false",
        )],
    );

    CategoryRules {
        id: "csrf",
        name: "Cross-Site Request Forgery (CSRF) Vulnerability",
        description: "The code explicitly disables or bypasses CSRF protection. State-changing \
                      endpoints without CSRF tokens can be triggered by requests forged from \
                      other origins on behalf of an authenticated user.",
        severity: Severity::Medium,
        category: "Broken Access Control",
        recommendation: "Keep framework CSRF protection enabled for all state-changing routes. \
                         If an endpoint must be exempt (e.g. a signed webhook), verify the \
                         request by another means such as an HMAC signature.",
        cwe_id: Some("CWE-352"),
        owasp_category: Some("A01:2021 - Broken Access Control"),
        patterns,
    }
}
