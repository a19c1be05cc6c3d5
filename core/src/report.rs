// Report renderer - 报告渲染
// 将 AnalysisResult 渲染为可打印的分页纯文本文档

use crate::model::AnalysisResult;
use std::io::Write;
use thiserror::Error;

const PAGE_WIDTH: usize = 80;
const PAGE_LINES: usize = 58;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("report write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// 渲染完整报告字节流
///
/// 渲染期间的写入错误原样上抛：残缺的报告不能当作完整报告交付。
pub fn render_report(result: &AnalysisResult) -> Result<Vec<u8>, ReportError> {
    let mut buf = Vec::new();
    render_into(&mut buf, result)?;
    Ok(buf)
}

/// 渲染到任意输出流，按固定行数分页，页间以换页符分隔
pub fn render_into<W: Write>(out: &mut W, result: &AnalysisResult) -> Result<(), ReportError> {
    let lines = layout(result);
    let total_pages = lines.len().div_ceil(PAGE_LINES).max(1);

    for (page, chunk) in lines.chunks(PAGE_LINES).enumerate() {
        if page > 0 {
            out.write_all(b"\x0c")?;
        }
        for line in chunk {
            writeln!(out, "{line}")?;
        }
        for _ in chunk.len()..PAGE_LINES {
            writeln!(out)?;
        }
        let footer = format!("- {} / {} -", page + 1, total_pages);
        writeln!(out, "{footer:^PAGE_WIDTH$}")?;
    }
    Ok(())
}

/// 报告的逻辑行序列：标题、汇总、逐条发现、生成日期
fn layout(result: &AnalysisResult) -> Vec<String> {
    let mut lines = Vec::new();
    let title = "Security Code Review Report";
    lines.push(format!("{title:^PAGE_WIDTH$}"));
    lines.push(String::new());

    lines.push("Summary".to_string());
    lines.push("-------".to_string());
    let s = &result.summary;
    lines.push(format!("Total Issues: {}", s.total_issues));
    lines.push(format!("Critical Issues: {}", s.critical_issues));
    lines.push(format!("High Issues: {}", s.high_issues));
    lines.push(format!("Medium Issues: {}", s.medium_issues));
    lines.push(format!("Low Issues: {}", s.low_issues));
    lines.push(String::new());

    lines.push("Detailed Findings".to_string());
    lines.push("-----------------".to_string());
    lines.push(String::new());

    for (index, vuln) in result.vulnerabilities.iter().enumerate() {
        lines.push(format!(
            "{}. {} ({})",
            index + 1,
            vuln.name,
            vuln.severity.as_str().to_uppercase()
        ));
        lines.push(format!("Category: {}", vuln.category));
        if let Some(owasp) = &vuln.owasp_category {
            lines.push(format!("OWASP Category: {owasp}"));
        }
        if let Some(cwe) = &vuln.cwe_id {
            lines.push(format!("CWE ID: {cwe}"));
        }
        lines.push(String::new());
        lines.push("Description:".to_string());
        lines.extend(wrap(&vuln.description, PAGE_WIDTH));
        lines.push(String::new());
        lines.push("Recommendation:".to_string());
        lines.extend(wrap(&vuln.recommendation, PAGE_WIDTH));
        lines.push(String::new());

        if !vuln.locations.is_empty() {
            lines.push("Vulnerable Locations:".to_string());
            for (loc_index, loc) in vuln.locations.iter().enumerate() {
                lines.push(format!("Location {}:", loc_index + 1));
                lines.push(format!("Line: {}, Column: {}", loc.line, loc.column));
                lines.push("Code Snippet:".to_string());
                lines.push(format!("    {}", clip(&loc.snippet, PAGE_WIDTH - 4)));
                lines.push(String::new());
            }
        }
        lines.push(String::new());
    }

    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    let footer = format!("Generated on: {date}");
    lines.push(format!("{footer:^PAGE_WIDTH$}"));
    lines
}

/// 按词折行；单段内已有的换行符保留为硬换行
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    for paragraph in text.split('\n') {
        if paragraph.trim().is_empty() {
            out.push(String::new());
            continue;
        }
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if !current.is_empty() && current.len() + 1 + word.len() > width {
                out.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        if !current.is_empty() {
            out.push(current);
        }
    }
    out
}

/// 截断超宽代码片段，避免破坏页面版式
fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(width.saturating_sub(3)).collect();
    clipped.push_str("...");
    clipped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::Analyzer;
    use crate::model::Summary;

    #[tokio::test]
    async fn summary_section_matches_result() {
        let analyzer = Analyzer::new();
        let code = "const q = \"SELECT * FROM users WHERE id = \" + userId;\nel.innerHTML = q;";
        let result = analyzer.analyze(code, "javascript").await;
        assert!(result.summary.total_issues > 0);

        let bytes = render_report(&result).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("Security Code Review Report"));
        assert!(text.contains(&format!("Total Issues: {}", result.summary.total_issues)));
        assert!(text.contains(&format!("Critical Issues: {}", result.summary.critical_issues)));
        assert!(text.contains(&format!("High Issues: {}", result.summary.high_issues)));
        assert!(text.contains("1. SQL Injection Vulnerability (CRITICAL)"));
        assert!(text.contains("CWE ID: CWE-89"));
        assert!(text.contains("Line: 1, Column:"));
    }

    #[test]
    fn empty_result_renders_valid_document() {
        let result = AnalysisResult {
            vulnerabilities: vec![],
            summary: Summary::tally(&[]),
        };
        let bytes = render_report(&result).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("Security Code Review Report"));
        assert!(text.contains("Total Issues: 0"));
        assert!(!text.contains("Location 1:"));
    }

    #[test]
    fn long_reports_are_paginated() {
        let analyzer_code = "el.innerHTML = x;\n".repeat(120);
        let result = analyze_blocking(analyzer_code);
        let bytes = render_report(&result).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains('\x0c'));
        assert!(text.contains("- 1 /"));
    }

    fn analyze_blocking(code: String) -> AnalysisResult {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
            .block_on(async { Analyzer::new().analyze(&code, "javascript").await })
    }

    #[test]
    fn wrap_respects_hard_newlines() {
        let wrapped = wrap("first line\nsecond line", 80);
        assert_eq!(wrapped, vec!["first line".to_string(), "second line".to_string()]);
    }

    #[test]
    fn clip_truncates_wide_snippets() {
        let clipped = clip(&"x".repeat(200), 40);
        assert_eq!(clipped.chars().count(), 40);
        assert!(clipped.ends_with("..."));
    }
}
