//! 下载事件监听接口：控制器把规范化后的事件分发给所有已注册的监听器。

use std::path::Path;

use crate::internal::file_download::structs::{DownloadError, DownloadEvent, ProgressSnapshot};

/// 下载事件监听器：在「进度 / 完成 / 取消 / 暂停 / 恢复 / 错误」时插入自定义逻辑。
///
/// 使用方式二选一（可混用）：
/// - **单事件**：用 `on_progress` / `on_completed` / `subscribe(kind, ..)` 等传入闭包；
/// - **完整监听器**：实现本 trait，通过 `add_listener` 注册。
///
/// 回调在宿主通知的调用栈上同步执行。回调里可以直接操作宿主下载对象
/// （例如 `cancel`，宿主可能同步报告终态），由此产生的事件排在当前事件之后送达；
/// 但不要在回调中再向同一个下载注册监听器。
pub trait DownloadListener: Send + Sync {
    /// 收到任意事件时调用；默认按种类分发到下面的具体方法。
    fn on_event(&mut self, event: &DownloadEvent) {
        match event {
            DownloadEvent::Progress(progress) => self.on_progress(progress),
            DownloadEvent::Completed(path) => self.on_completed(path),
            DownloadEvent::Cancelled => self.on_cancelled(),
            DownloadEvent::Paused => self.on_paused(),
            DownloadEvent::Resumed => self.on_resumed(),
            DownloadEvent::Error(error) => self.on_error(error),
        }
    }

    fn on_progress(&mut self, _progress: &ProgressSnapshot) {}

    /// 下载完成，`path` 为最终保存路径。
    fn on_completed(&mut self, _path: &Path) {}

    fn on_cancelled(&mut self) {}

    fn on_paused(&mut self) {}

    fn on_resumed(&mut self) {}

    fn on_error(&mut self, _error: &DownloadError) {}
}
