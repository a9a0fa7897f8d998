use std::path::PathBuf;

use super::download_error::DownloadError;
use super::progress_snapshot::ProgressSnapshot;

/// 控制器发出的事件（多播：所有订阅者都会收到）
#[derive(Debug, Clone, PartialEq)]
pub enum DownloadEvent {
    Progress(ProgressSnapshot),
    /// 下载完成，携带最终保存路径
    Completed(PathBuf),
    Cancelled,
    Paused,
    Resumed,
    /// 传输过程中的错误（目前只有中断）
    Error(DownloadError),
}

/// 事件种类，用于按种类订阅
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Progress,
    Completed,
    Cancelled,
    Paused,
    Resumed,
    Error,
}

impl DownloadEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            DownloadEvent::Progress(_) => EventKind::Progress,
            DownloadEvent::Completed(_) => EventKind::Completed,
            DownloadEvent::Cancelled => EventKind::Cancelled,
            DownloadEvent::Paused => EventKind::Paused,
            DownloadEvent::Resumed => EventKind::Resumed,
            DownloadEvent::Error(_) => EventKind::Error,
        }
    }
}
