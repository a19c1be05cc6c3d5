// 失效认证检测规则：硬编码口令、弱口令散列、关闭的签名校验

use super::{entry, CategoryRules, LanguagePatterns};
use crate::model::Severity;

pub(super) fn rules() -> CategoryRules {
    let mut patterns = LanguagePatterns::new();

    patterns.insert(
        "javascript",
        vec![
            entry(
                r#"(?i)password\s*[:=]\s*['"][^'"]+['"]"#,
                "Hardcoded password",
            ),
            entry(
                r#"(?i)algorithms?\s*:\s*\[?\s*['"]none['"]"#,
                "JWT accepted with algorithm 'none'",
            ),
            entry(
                r#"(?i)md5\s*\([^)]*password"#,
                "Password hashed with MD5",
            ),
        ],
    );

    patterns.insert(
        "python",
        vec![
            entry(
                r#"(?i)password\s*=\s*['"][^'"]+['"]"#,
                "Hardcoded password",
            ),
            entry(
                r#"(?i)hashlib\.(md5|sha1)\s*\([^)]*password"#,
                "Password hashed with a broken digest",
            ),
        ],
    );

    patterns.insert(
        "java",
        vec![
            entry(
                r#"(?i)password\s*=\s*"[^"]+""#,
                "Hardcoded password",
            ),
            entry(
                r#"(?i)MessageDigest\.getInstance\(\s*"(MD5|SHA-?1)"\s*\)"#,
                "Broken digest algorithm for credentials",
            ),
        ],
    );

    patterns.insert(
        "php",
        vec![
            entry(
                r#"(?i)\$password\s*=\s*['"][^'"]+['"]"#,
                "Hardcoded password",
            ),
            entry(r#"(?i)\bmd5\s*\(\s*\$"#, "Password hashed with MD5"),
        ],
    );

    CategoryRules {
        id: "broken-authentication",
        name: "Broken Authentication",
        description: "The code contains hardcoded credentials or protects credentials with \
                      broken mechanisms (MD5/SHA-1 password hashing, unsigned JWTs). Attackers \
                      who read the source or intercept the artifacts can authenticate as \
                      legitimate users.",
        severity: Severity::High,
        category: "Authentication",
        recommendation: "Load credentials from a secret store or environment configuration, \
                         hash passwords with a slow KDF (bcrypt, scrypt, Argon2), and reject \
                         unsigned or 'none'-algorithm tokens.",
        cwe_id: Some("CWE-287"),
        owasp_category: Some("A07:2021 - Identification and Authentication Failures"),
        patterns,
    }
}
