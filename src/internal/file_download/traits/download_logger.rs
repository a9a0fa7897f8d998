//! 可替换的日志接口；默认实现转发到 `tracing`。

/// 下载日志接口，可接入任意日志后端。
pub trait DownloadLogger: Send + Sync {
    fn debug(&self, message: &str);
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// 默认日志：转发到 `tracing`，target 为 `file_download`。未安装订阅者时等同于空操作。
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl DownloadLogger for TracingLogger {
    fn debug(&self, message: &str) {
        tracing::debug!(target: "file_download", "{}", message);
    }

    fn info(&self, message: &str) {
        tracing::info!(target: "file_download", "{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: "file_download", "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "file_download", "{}", message);
    }
}
