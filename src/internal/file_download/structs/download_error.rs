//! 下载相关错误类型。

use thiserror::Error;

/// 下载错误。枚举本身即「基类」：调用方可以整体处理，也可以按变体区分。
///
/// 实现 `Clone`，因为同一个错误既要通过事件广播给多个订阅者，
/// 也要落定到被多个 `wait_for_download` 共享的结果中。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DownloadError {
    /// 调用方取消，或宿主报告下载被取消。
    #[error("下载被取消")]
    Cancelled,

    /// 宿主报告下载中断。
    #[error("下载被中断")]
    Interrupted,

    /// 宿主报告了无法识别的终态。
    #[error("未知的下载错误: {0}")]
    Unknown(String),

    #[error("URL 格式错误: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("缺少依赖: {0}")]
    MissingDependency(&'static str),
}

impl DownloadError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, DownloadError::Cancelled)
    }

    pub fn is_interrupted(&self) -> bool {
        matches!(self, DownloadError::Interrupted)
    }
}
