use secreview_core::Analyzer;
use std::sync::Arc;

/// 进程级共享状态：分析引擎启动时构建一次（编译全部内置模式），此后只读复用
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            analyzer: Arc::new(Analyzer::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
