// 敏感数据暴露检测规则：硬编码密钥、明文传输、日志泄露

use super::{entry, CategoryRules, LanguagePatterns};
use crate::model::Severity;

pub(super) fn rules() -> CategoryRules {
    let mut patterns = LanguagePatterns::new();

    patterns.insert(
        "javascript",
        vec![
            entry(
                r#"(?i)api_?key\s*[:=]\s*['"][^'"]+['"]"#,
                "Hardcoded API key",
            ),
            entry(
                r#"(?i)(secret|access_?token)\s*[:=]\s*['"][A-Za-z0-9_\-]{8,}['"]"#,
                "Hardcoded secret or token",
            ),
            entry(r#"BEGIN (RSA |EC |DSA )?PRIVATE KEY"#, "Embedded private key"),
            entry(
                r#"(?i)console\.log\s*\([^)]*(password|secret|token)"#,
                "Credential written to console log",
            ),
            entry(r#"http://"#, "Insecure HTTP URL"),
        ],
    );

    patterns.insert(
        "python",
        vec![
            entry(
                r#"(?i)api_?key\s*=\s*['"][^'"]+['"]"#,
                "Hardcoded API key",
            ),
            entry(
                r#"(?i)(secret|access_?token)\s*=\s*['"][A-Za-z0-9_\-]{8,}['"]"#,
                "Hardcoded secret or token",
            ),
            entry(r#"BEGIN (RSA |EC |DSA )?PRIVATE KEY"#, "Embedded private key"),
            entry(
                r#"(?i)print\s*\([^)]*(password|secret|token)"#,
                "Credential written to stdout",
            ),
            entry(r#"http://"#, "Insecure HTTP URL"),
        ],
    );

    patterns.insert(
        "java",
        vec![
            entry(
                r#"(?i)api_?key\s*=\s*"[^"]+""#,
                "Hardcoded API key",
            ),
            entry(
                r#"(?i)System\.out\.print(ln)?\s*\([^)]*(password|secret|token)"#,
                "Credential written to stdout",
            ),
            entry(r#"http://"#, "Insecure HTTP URL"),
        ],
    );

    patterns.insert(
        "php",
        vec![
            entry(
                r#"(?i)\$api_?key\s*=\s*['"][^'"]+['"]"#,
                "Hardcoded API key",
            ),
            entry(r#"BEGIN (RSA |EC |DSA )?PRIVATE KEY"#, "Embedded private key"),
            entry(r#"http://"#, "Insecure HTTP URL"),
        ],
    );

    CategoryRules {
        id: "sensitive-data-exposure",
        name: "Sensitive Data Exposure",
        description: "The code embeds secrets (API keys, tokens, private keys) in source, \
                      writes credentials to logs, or references cleartext HTTP endpoints. \
                      Such data is exposed to anyone with access to the code, the logs or \
                      the network path.",
        severity: Severity::Medium,
        category: "Cryptographic Failures",
        recommendation: "Move secrets to environment configuration or a secret manager, scrub \
                         credentials from log statements, and use HTTPS for every external \
                         endpoint.",
        cwe_id: Some("CWE-312"),
        owasp_category: Some("A02:2021 - Cryptographic Failures"),
        patterns,
    }
}
