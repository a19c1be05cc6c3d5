// SecReview Core Library
// 核心功能库，包含模式注册表、漏洞检查器、扫描编排与报告渲染

mod analyzer;
mod checker;
mod model;
mod registry;
mod report;

// 重新导出常用类型
pub use analyzer::Analyzer;
pub use checker::{Checker, RegexChecker};
pub use model::{AnalysisResult, Finding, Location, Severity, Summary};
pub use registry::{CategoryRules, LanguagePatterns, PatternEntry, PatternRegistry};
pub use report::{render_into, render_report, ReportError};
