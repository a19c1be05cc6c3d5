// 不安全反序列化检测规则

use super::{entry, CategoryRules, LanguagePatterns};
use crate::model::Severity;

pub(super) fn rules() -> CategoryRules {
    let mut patterns = LanguagePatterns::new();

    patterns.insert(
        "javascript",
        vec![
            entry(
                r#"require\(\s*['"]node-serialize['"]\s*\)"#,
                "node-serialize can execute code during unserialize",
            ),
            entry(r#"\bunserialize\s*\("#, "unserialize of untrusted data"),
        ],
    );

    patterns.insert(
        "python",
        vec![
            entry(r#"pickle\.loads?\s*\("#, "pickle load of untrusted data"),
            entry(r#"cPickle\.loads?\s*\("#, "cPickle load of untrusted data"),
            entry(
                r#"yaml\.load\s*\("#,
                "yaml.load without SafeLoader",
            ),
            entry(r#"marshal\.loads?\s*\("#, "marshal load of untrusted data"),
            entry(r#"\beval\s*\("#, "eval() on serialized string data"),
        ],
    );

    patterns.insert(
        "java",
        vec![
            entry(r#"new\s+ObjectInputStream"#, "Java native deserialization stream"),
            entry(r#"\.readObject\s*\("#, "readObject on untrusted stream"),
            entry(r#"XMLDecoder"#, "XMLDecoder deserialization"),
        ],
    );

    patterns.insert(
        "php",
        vec![
            entry(
                r#"\bunserialize\s*\(\s*\$"#,
                "unserialize of a variable (possible object injection)",
            ),
            entry(r#"\beval\s*\(\s*\$"#, "eval() on a variable"),
        ],
    );

    CategoryRules {
        id: "insecure-deserialization",
        name: "Insecure Deserialization",
        description: "The code deserializes data with an API that can instantiate arbitrary \
                      objects or execute code. If the input is attacker-controlled this leads \
                      to remote code execution or object injection.",
        severity: Severity::High,
        category: "Software and Data Integrity",
        recommendation: "Deserialize only plain data formats (JSON) from untrusted sources. \
                         Use yaml.safe_load / SafeLoader in Python, avoid pickle, marshal and \
                         Java native serialization for external input, and never eval or \
                         unserialize request data.",
        cwe_id: Some("CWE-502"),
        owasp_category: Some("A08:2021 - Software and Data Integrity Failures"),
        patterns,
    }
}
