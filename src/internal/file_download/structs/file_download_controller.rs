use std::path::{Path, PathBuf};
use std::sync::atomic::Ordering;
use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;

use crate::internal::file_download::functions::compute_progress::{compute_progress, now_ms};
use crate::internal::file_download::traits::{
    DoneState, DownloadLogger, HostApp, HostDownloadItem, HostSession, PathJoin, UpdatedState,
};

use super::download_error::DownloadError;
use super::download_event::DownloadEvent;
use super::download_status::DownloadStatus;
use super::event_dispatcher::EventDispatcher;
use super::reactive_state::FileDownloadReactiveState;

/// 一次下载的生命周期控制器：监听宿主通知，维护状态，发出规范化事件。
///
/// 宿主回调里只持有控制器和下载对象的弱引用；控制器在启动时持有自身，
/// 终态后释放，所以调用方丢掉句柄不会中断下载。
pub(crate) struct FileDownloadController {
    /// 调用方传入的原始地址，原样交给宿主
    pub(crate) url: String,
    pub(crate) destination_dir: PathBuf,
    /// 宿主报告文件名之前为空，设置后不再改变
    pub(crate) destination_path: OnceLock<PathBuf>,
    path: Arc<dyn PathJoin>,
    logger: Arc<dyn DownloadLogger>,
    pub(crate) reactive_state: FileDownloadReactiveState,
    pub(crate) events: EventDispatcher,
    /// 启动到终态之间的自持引用
    keep_alive: Mutex<Option<Arc<FileDownloadController>>>,
}

/// 内部实现
impl FileDownloadController {
    pub(crate) fn new(
        url: String,
        destination_dir: PathBuf,
        path: Arc<dyn PathJoin>,
        logger: Arc<dyn DownloadLogger>,
        event_capacity: usize,
    ) -> Self {
        Self {
            url,
            destination_dir,
            destination_path: OnceLock::new(),
            path,
            logger,
            reactive_state: FileDownloadReactiveState::new(),
            events: EventDispatcher::new(event_capacity),
            keep_alive: Mutex::new(None),
        }
    }

    /// 迁移生命周期状态；终态不再迁移。返回是否发生了迁移。
    fn transition(&self, next: DownloadStatus) -> bool {
        let moved = self
            .reactive_state
            .status
            .update_if(next, |current| !current.is_terminal() && *current != next);
        if moved {
            self.logger
                .debug(&format!("{} is now {}", self.url, next.as_str()));
        }
        moved
    }

    /// 争夺唯一的终态：只有第一个调用者返回 `true`，由它落定结果并发出终态事件。
    fn claim_terminal(&self) -> bool {
        self.reactive_state
            .terminal
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    fn release(&self) {
        self.keep_alive.lock().take();
    }
}

/// 启动流程：等宿主就绪、解析会话、挂上「下载已开始」监听后发起请求
impl FileDownloadController {
    pub(crate) async fn start(
        self: Arc<Self>,
        app: Arc<dyn HostApp>,
        session: Option<Arc<dyn HostSession>>,
        session_partition: String,
    ) {
        *self.keep_alive.lock() = Some(Arc::clone(&self));

        app.when_ready().await;
        let session = session.unwrap_or_else(|| app.session_from_partition(&session_partition));
        self.reactive_state.session.resolve(Arc::clone(&session));

        let controller = Arc::downgrade(&self);
        session.once_will_download(Box::new(move |item| {
            if let Some(controller) = controller.upgrade() {
                controller.handle_will_download(item);
            }
        }));

        self.logger.debug(&format!("requesting {}", self.url));
        session.download_url(&self.url);
    }

    fn handle_will_download(self: &Arc<Self>, item: Arc<dyn HostDownloadItem>) {
        if self.reactive_state.download_item.is_settled() {
            self.logger
                .warn(&format!("{} already has a download item, ignoring another", self.url));
            return;
        }

        let joined = self.path.join(&self.destination_dir, &item.filename());
        let destination_path = self.destination_path.get_or_init(|| joined).clone();
        item.set_save_path(&destination_path);
        self.logger.debug(&format!(
            "saving {} to {}",
            self.url,
            destination_path.display()
        ));

        let controller = Arc::downgrade(self);
        let weak_item = Arc::downgrade(&item);
        item.on_updated(Box::new(move |state| {
            if let (Some(controller), Some(item)) = (controller.upgrade(), weak_item.upgrade()) {
                controller.handle_updated(item.as_ref(), state);
            }
        }));

        let controller = Arc::downgrade(self);
        let weak_item = Arc::downgrade(&item);
        item.on_done(Box::new(move |state| {
            if let (Some(controller), Some(item)) = (controller.upgrade(), weak_item.upgrade()) {
                controller.handle_done(item.as_ref(), state);
            }
        }));

        self.transition(DownloadStatus::Started);
        self.reactive_state.download_item.resolve(item);
    }

    fn handle_updated(&self, item: &dyn HostDownloadItem, state: UpdatedState) {
        let rs = &self.reactive_state;
        // 终态之后不再发出进度、暂停、恢复或中断
        if rs.done.load(Ordering::SeqCst) || rs.terminal.load(Ordering::SeqCst) {
            return;
        }

        match state {
            UpdatedState::Interrupted => {
                self.logger.warn(&format!("{} was interrupted", self.url));
                self.events.emit(DownloadEvent::Error(DownloadError::Interrupted));
            }
            UpdatedState::Progressing if item.is_paused() => {
                // 只在进入暂停的那一刻发出
                if !rs.paused.swap(true, Ordering::SeqCst) {
                    self.transition(DownloadStatus::Paused);
                    self.events.emit(DownloadEvent::Paused);
                }
            }
            UpdatedState::Progressing => {
                if rs.paused.swap(false, Ordering::SeqCst) {
                    self.transition(DownloadStatus::Progressing);
                    self.events.emit(DownloadEvent::Resumed);
                } else {
                    self.transition(DownloadStatus::Progressing);
                }

                let progress = compute_progress(
                    item.received_bytes(),
                    item.total_bytes(),
                    item.start_time() * 1000.0,
                    now_ms(),
                );
                self.events.emit(DownloadEvent::Progress(progress));
            }
        }
    }

    fn handle_done(&self, item: &dyn HostDownloadItem, state: DoneState) {
        let rs = &self.reactive_state;
        if rs.done.swap(true, Ordering::SeqCst) {
            self.logger
                .warn(&format!("{} reported done more than once", self.url));
            return;
        }

        match state {
            DoneState::Completed => self.finish_completed(&item.save_path()),
            DoneState::Cancelled => self.finish_unsuccessful(DownloadError::Cancelled),
            DoneState::Interrupted => self.finish_unsuccessful(DownloadError::Interrupted),
            DoneState::Unknown(tag) => self.finish_unsuccessful(DownloadError::Unknown(tag)),
        }
        self.release();
    }

    fn finish_completed(&self, save_path: &Path) {
        if !self.claim_terminal() {
            self.logger.debug(&format!(
                "{} completed after being cancelled, keeping cancelled",
                self.url
            ));
            return;
        }

        self.reactive_state.outcome.resolve(save_path.to_path_buf());
        self.transition(DownloadStatus::Completed);
        self.logger.info(&format!(
            "{} downloaded to {}",
            self.url,
            save_path.display()
        ));
        self.events.emit(DownloadEvent::Completed(save_path.to_path_buf()));
    }

    /// 非「完成」的终态：结果落定为对应错误，事件一律以 `Cancelled` 发出。
    fn finish_unsuccessful(&self, error: DownloadError) {
        if !self.claim_terminal() {
            self.logger
                .debug(&format!("{} already ended, ignoring {}", self.url, error));
            return;
        }
        self.logger
            .info(&format!("{} ended without completing: {}", self.url, error));

        let status = if error.is_cancelled() {
            DownloadStatus::Cancelled
        } else {
            DownloadStatus::Interrupted
        };
        self.reactive_state.outcome.reject(error);
        self.transition(status);
        self.events.emit(DownloadEvent::Cancelled);
    }
}

/// 外部接口：命令只转交给宿主下载对象，状态变化以随后的宿主通知为准
impl FileDownloadController {
    pub(crate) async fn download_item(&self) -> Result<Arc<dyn HostDownloadItem>, DownloadError> {
        self.reactive_state.download_item.wait().await
    }

    pub(crate) async fn when_ready(&self) -> Result<(), DownloadError> {
        self.reactive_state.session.wait().await.map(|_| ())
    }

    pub(crate) async fn wait_for_download(&self) -> Result<PathBuf, DownloadError> {
        self.download_item().await?;
        self.reactive_state.outcome.wait().await
    }

    pub(crate) async fn pause(&self) -> Result<(), DownloadError> {
        self.download_item().await?.pause();
        Ok(())
    }

    pub(crate) async fn resume(&self) -> Result<(), DownloadError> {
        self.download_item().await?.resume();
        Ok(())
    }

    /// 乐观取消：请求宿主取消后立刻标记并发出 `Cancelled`，不等宿主确认。
    pub(crate) async fn cancel(&self) -> Result<(), DownloadError> {
        self.download_item().await?.cancel();

        if !self.claim_terminal() {
            self.logger
                .debug(&format!("{} already finished, cancel has no effect", self.url));
            return Ok(());
        }
        self.reactive_state.outcome.reject(DownloadError::Cancelled);
        self.transition(DownloadStatus::Cancelled);
        self.logger.info(&format!("{} cancelled", self.url));
        self.events.emit(DownloadEvent::Cancelled);
        self.release();
        Ok(())
    }
}

impl std::fmt::Debug for FileDownloadController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileDownloadController")
            .field("url", &self.url)
            .field("destination_dir", &self.destination_dir)
            .field("destination_path", &self.destination_path.get())
            .field("reactive_state", &self.reactive_state)
            .field("events", &self.events)
            .finish()
    }
}
