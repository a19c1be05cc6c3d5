// 不安全依赖检测规则：已废弃/已知脆弱的库与不可信的分发渠道

use super::{entry, CategoryRules, LanguagePatterns};
use crate::model::Severity;

pub(super) fn rules() -> CategoryRules {
    let mut patterns = LanguagePatterns::new();

    patterns.insert(
        "javascript",
        vec![
            entry(
                r#"require\(\s*['"]request['"]\s*\)"#,
                "Deprecated 'request' package",
            ),
            entry(
                r#"require\(\s*['"]node-uuid['"]\s*\)"#,
                "Deprecated 'node-uuid' package",
            ),
            entry(
                r#"(?i)<script[^>]+src\s*=\s*['"]http://"#,
                "Script loaded over insecure HTTP",
            ),
        ],
    );

    patterns.insert(
        "python",
        vec![
            entry(r#"--trusted-host"#, "pip install bypassing TLS verification"),
            entry(r#"(?i)\bimport\s+md5\b"#, "Removed stdlib md5 module"),
            entry(r#"(?i)from\s+Crypto\b"#, "Unmaintained PyCrypto package"),
        ],
    );

    patterns.insert(
        "java",
        vec![
            entry(r#"org\.apache\.log4j"#, "Log4j 1.x import"),
            entry(
                r#"org\.apache\.commons\.collections\b"#,
                "Commons Collections 3.x (known gadget chains)",
            ),
        ],
    );

    patterns.insert(
        "php",
        vec![
            entry(
                r#"(?i)\bmysql_(query|connect)\s*\("#,
                "Removed mysql_* API",
            ),
            entry(r#"(?i)\beregi?(_replace)?\s*\("#, "Removed ereg functions"),
        ],
    );

    CategoryRules {
        id: "insecure-dependencies",
        name: "Insecure Dependencies",
        description: "The code pulls in deprecated or known-vulnerable components, or fetches \
                      code over channels without integrity protection. Vulnerabilities in \
                      these components are inherited by the application.",
        severity: Severity::Low,
        category: "Vulnerable Components",
        recommendation: "Replace deprecated packages with maintained successors, pin and audit \
                         dependency versions, and load third-party scripts only over HTTPS \
                         with subresource integrity.",
        cwe_id: Some("CWE-1104"),
        owasp_category: Some("A06:2021 - Vulnerable and Outdated Components"),
        patterns,
    }
}
