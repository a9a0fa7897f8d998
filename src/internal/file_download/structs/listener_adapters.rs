//! 单事件监听适配器：将闭包包装成 [`DownloadListener`]，供 `on_xx` / `subscribe` 使用。

use std::path::Path;

use crate::internal::file_download::traits::DownloadListener;

use super::download_error::DownloadError;
use super::download_event::{DownloadEvent, EventKind};
use super::progress_snapshot::ProgressSnapshot;

/// 按事件种类过滤的适配器：只把 `kind` 种类的事件交给闭包。
pub(crate) struct EventKindAdapter<F> {
    pub(crate) kind: EventKind,
    pub(crate) handler: F,
}

impl<F> DownloadListener for EventKindAdapter<F>
where
    F: FnMut(&DownloadEvent) + Send + Sync + 'static,
{
    fn on_event(&mut self, event: &DownloadEvent) {
        if event.kind() == self.kind {
            (self.handler)(event);
        }
    }
}

/// 仅实现「进度」的适配器。
pub(crate) struct OnProgressAdapter<F>(pub(crate) F);

impl<F> DownloadListener for OnProgressAdapter<F>
where
    F: FnMut(&ProgressSnapshot) + Send + Sync + 'static,
{
    fn on_progress(&mut self, progress: &ProgressSnapshot) {
        (self.0)(progress);
    }
}

/// 仅实现「完成」的适配器。
pub(crate) struct OnCompletedAdapter<F>(pub(crate) F);

impl<F> DownloadListener for OnCompletedAdapter<F>
where
    F: FnMut(&Path) + Send + Sync + 'static,
{
    fn on_completed(&mut self, path: &Path) {
        (self.0)(path);
    }
}

/// 仅实现「取消」的适配器。
pub(crate) struct OnCancelledAdapter<F>(pub(crate) F);

impl<F> DownloadListener for OnCancelledAdapter<F>
where
    F: FnMut() + Send + Sync + 'static,
{
    fn on_cancelled(&mut self) {
        (self.0)();
    }
}

/// 仅实现「暂停」的适配器。
pub(crate) struct OnPausedAdapter<F>(pub(crate) F);

impl<F> DownloadListener for OnPausedAdapter<F>
where
    F: FnMut() + Send + Sync + 'static,
{
    fn on_paused(&mut self) {
        (self.0)();
    }
}

/// 仅实现「恢复」的适配器。
pub(crate) struct OnResumedAdapter<F>(pub(crate) F);

impl<F> DownloadListener for OnResumedAdapter<F>
where
    F: FnMut() + Send + Sync + 'static,
{
    fn on_resumed(&mut self) {
        (self.0)();
    }
}

/// 仅实现「错误」的适配器。
pub(crate) struct OnErrorAdapter<F>(pub(crate) F);

impl<F> DownloadListener for OnErrorAdapter<F>
where
    F: FnMut(&DownloadError) + Send + Sync + 'static,
{
    fn on_error(&mut self, error: &DownloadError) {
        (self.0)(error);
    }
}
