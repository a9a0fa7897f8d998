use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crate::internal::file_download::traits::{HostDownloadItem, HostSession};
use crate::internal::states::deferred::Deferred;
use crate::internal::states::unlock_reactive::UnlockReactiveProperty;

use super::download_error::DownloadError;
use super::download_status::DownloadStatus;

/// 控制器的状态，只属于一次下载
#[derive(Debug)]
pub(crate) struct FileDownloadReactiveState {
    /// 生命周期状态（只读）：内部根据宿主通知更新，外部通过 watch 监听
    pub(crate) status: UnlockReactiveProperty<DownloadStatus>,
    /// 宿主就绪后解析出的会话
    pub(crate) session: Deferred<Arc<dyn HostSession>, DownloadError>,
    /// 宿主「下载已开始」时交来的下载对象
    pub(crate) download_item: Deferred<Arc<dyn HostDownloadItem>, DownloadError>,
    /// 最终结果：完成时为保存路径，否则为对应错误；第一次落定生效
    pub(crate) outcome: Deferred<PathBuf, DownloadError>,
    pub(crate) paused: AtomicBool,
    /// 终态已决定（完成、取消或中断之一）；只能经由 compare-exchange 从 false 变为 true
    pub(crate) terminal: AtomicBool,
    /// 宿主已报告 done；单调
    pub(crate) done: AtomicBool,
}

impl FileDownloadReactiveState {
    pub(crate) fn new() -> Self {
        Self {
            status: UnlockReactiveProperty::new(DownloadStatus::Pending),
            session: Deferred::new(),
            download_item: Deferred::new(),
            outcome: Deferred::new(),
            paused: AtomicBool::new(false),
            terminal: AtomicBool::new(false),
            done: AtomicBool::new(false),
        }
    }
}
