use serde::{Deserialize, Serialize};

/// 下载生命周期状态（由控制器根据宿主通知维护，外部只读监听）
///
/// `Pending → Started → {Progressing ⇄ Paused} → {Completed | Cancelled | Interrupted}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadStatus {
    /// 尚未收到宿主的「下载开始」通知
    Pending,
    /// 已拿到宿主句柄、设置保存路径并挂上监听
    Started,
    Progressing,
    Paused,
    Completed,
    Cancelled,
    Interrupted,
}

impl DownloadStatus {
    /// 终态不会再迁移到任何其他状态。
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            DownloadStatus::Completed | DownloadStatus::Cancelled | DownloadStatus::Interrupted
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DownloadStatus::Pending => "pending",
            DownloadStatus::Started => "started",
            DownloadStatus::Progressing => "progressing",
            DownloadStatus::Paused => "paused",
            DownloadStatus::Completed => "completed",
            DownloadStatus::Cancelled => "cancelled",
            DownloadStatus::Interrupted => "interrupted",
        }
    }
}
