// 安全配置错误检测规则：调试开关、TLS 校验关闭、全开放 CORS

use super::{entry, CategoryRules, LanguagePatterns};
use crate::model::Severity;

pub(super) fn rules() -> CategoryRules {
    let mut patterns = LanguagePatterns::new();

    patterns.insert(
        "javascript",
        vec![
            entry(
                r#"(?i)rejectUnauthorized\s*:\s*false"#,
                "TLS certificate validation disabled",
            ),
            entry(
                r#"NODE_TLS_REJECT_UNAUTHORIZED"#,
                "Process-wide TLS validation override",
            ),
            entry(
                r#"(?i)Access-Control-Allow-Origin['"]?\s*[,:]\s*['"]\*"#,
                "CORS wildcard origin",
            ),
            entry(
                r#"app\.use\(\s*cors\(\s*\)\s*\)"#,
                "CORS enabled with default permissive settings",
            ),
        ],
    );

    patterns.insert(
        "python",
        vec![
            entry(r#"(?i)debug\s*=\s*True"#, "Debug mode enabled"),
            entry(r#"(?i)verify\s*=\s*False"#, "TLS certificate validation disabled"),
            entry(
                r#"ALLOWED_HOSTS\s*=\s*\[\s*['"]\*['"]"#,
                "Wildcard ALLOWED_HOSTS",
            ),
        ],
    );

    patterns.insert(
        "java",
        vec![
            entry(
                r#"(?i)ALLOW_ALL_HOSTNAME_VERIFIER"#,
                "Hostname verification disabled",
            ),
            entry(r#"(?i)trustAllCerts"#, "Trust-all certificate manager"),
        ],
    );

    patterns.insert(
        "php",
        vec![
            entry(
                r#"(?i)ini_set\(\s*['"]display_errors['"]\s*,\s*['"]?(1|on|true)"#,
                "Error display enabled in production code",
            ),
            entry(
                r#"(?i)CURLOPT_SSL_VERIFYPEER\s*,\s*(false|0)"#,
                "TLS certificate validation disabled",
            ),
        ],
    );

    CategoryRules {
        id: "security-misconfiguration",
        name: "Security Misconfiguration",
        description: "The code enables debug behavior, disables TLS certificate validation, \
                      or opens CORS to every origin. These settings weaken the deployed \
                      service regardless of application logic.",
        severity: Severity::Medium,
        category: "Security Misconfiguration",
        recommendation: "Disable debug modes outside development, keep certificate and \
                         hostname verification on, and restrict CORS to the origins that \
                         actually need access.",
        cwe_id: Some("CWE-16"),
        owasp_category: Some("A05:2021 - Security Misconfiguration"),
        patterns,
    }
}
