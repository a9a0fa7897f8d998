use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures_util::stream::BoxStream;
use url::Url;

use crate::internal::file_download::traits::{DownloadListener, HostDownloadItem};
use crate::internal::states::unlock_reactive::PropertyWatcher;

use super::download_error::DownloadError;
use super::download_event::{DownloadEvent, EventKind};
use super::download_status::DownloadStatus;
use super::file_download_config::FileDownloadConfig;
use super::file_download_controller::FileDownloadController;
use super::file_download_dependencies::FileDownloadDependencies;
use super::listener_adapters::{
    EventKindAdapter, OnCancelledAdapter, OnCompletedAdapter, OnErrorAdapter, OnPausedAdapter,
    OnProgressAdapter, OnResumedAdapter,
};
use super::progress_snapshot::ProgressSnapshot;

/// 单文件下载：构造即开始，通过事件观察进度，通过 `wait_for_download` 等待结果。
///
/// `Clone` 得到的是同一次下载的另一个句柄。
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use file_download::file_download::{FileDownload, FileDownloadDependencies};
/// # use file_download::host::HostApp;
///
/// # async fn example(app: Arc<dyn HostApp>) -> Result<(), file_download::DownloadError> {
/// let download = FileDownload::new(
///     "https://example.com/a.zip",
///     Some("/tmp".into()),
///     FileDownloadDependencies::new(app),
/// )?;
///
/// download.on_progress(|p| println!("已下载 {:.1}%", p.pct()));
/// let saved = download.wait_for_download().await?;
/// println!("已保存到 {}", saved.display());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct FileDownload {
    controller: Arc<FileDownloadController>,
}

impl FileDownload {
    /// 创建下载并立即在后台开始；不需要另外调用「开始」。
    ///
    /// `destination_dir` 为空时使用宿主临时目录下的 `DL_TEMP`。
    /// 必须在 tokio 运行时内调用。
    pub fn new(
        url: &str,
        destination_dir: Option<PathBuf>,
        dependencies: FileDownloadDependencies,
    ) -> Result<Self, DownloadError> {
        Self::with_config(url, destination_dir, dependencies, FileDownloadConfig::default())
    }

    pub fn with_config(
        url: &str,
        destination_dir: Option<PathBuf>,
        dependencies: FileDownloadDependencies,
        config: FileDownloadConfig,
    ) -> Result<Self, DownloadError> {
        // 只做校验；交给宿主的是原始字符串，避免规范化改写（如补上结尾的 `/`）
        Url::parse(url)?;
        let url = url.to_string();
        let dependencies = dependencies.resolve()?;
        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|_| DownloadError::MissingDependency("tokio runtime"))?;

        let destination_dir = destination_dir
            .unwrap_or_else(|| dependencies.app.temp_dir().join(&config.temp_subdir));
        dependencies.logger.debug(&format!(
            "downloading {} to {}",
            url,
            destination_dir.display()
        ));

        let controller = Arc::new(FileDownloadController::new(
            url,
            destination_dir,
            dependencies.path,
            dependencies.logger,
            config.event_capacity,
        ));

        runtime.spawn(Arc::clone(&controller).start(
            dependencies.app,
            dependencies.session,
            config.session_partition,
        ));

        Ok(Self { controller })
    }
}

/// 基本信息
impl FileDownload {
    /// 构造时传入的原始地址
    pub fn url(&self) -> &str {
        &self.controller.url
    }

    pub fn destination_dir(&self) -> &Path {
        &self.controller.destination_dir
    }

    /// 保存路径（目标目录 + 宿主报告的文件名）；宿主报告前为 `None`。
    pub fn destination_path(&self) -> Option<&Path> {
        self.controller.destination_path.get().map(PathBuf::as_path)
    }

    /// 当前生命周期状态
    pub fn status(&self) -> DownloadStatus {
        self.controller
            .reactive_state
            .status
            .get_current()
            .unwrap_or(DownloadStatus::Pending)
    }

    /// 监听生命周期状态变化
    pub fn watch_status(&self) -> PropertyWatcher<DownloadStatus> {
        self.controller.reactive_state.status.watch()
    }
}

/// 等待
impl FileDownload {
    /// 宿主就绪且会话已解析后返回。主要用于测试同步；没有超时。
    pub async fn when_ready(&self) -> Result<(), DownloadError> {
        self.controller.when_ready().await
    }

    /// 宿主交来的下载对象；宿主报告「下载已开始」之前一直挂起。
    pub async fn download_item(&self) -> Result<Arc<dyn HostDownloadItem>, DownloadError> {
        self.controller.download_item().await
    }

    /// 等待下载结束：完成时返回最终保存路径；取消返回 [`DownloadError::Cancelled`]，
    /// 中断返回 [`DownloadError::Interrupted`]，无法识别的终态返回 [`DownloadError::Unknown`]。
    pub async fn wait_for_download(&self) -> Result<PathBuf, DownloadError> {
        self.controller.wait_for_download().await
    }
}

/// 控制命令：等宿主下载对象就绪后转交，返回时命令已发出但宿主未必已确认
impl FileDownload {
    /// 暂停。`Paused` 事件由随后的宿主通知触发。
    pub async fn pause(&self) -> Result<(), DownloadError> {
        self.controller.pause().await
    }

    /// 恢复。`Resumed` 事件由随后的宿主通知触发。
    pub async fn resume(&self) -> Result<(), DownloadError> {
        self.controller.resume().await
    }

    /// 取消。立即标记为已取消并发出 `Cancelled`，不等待宿主确认。
    pub async fn cancel(&self) -> Result<(), DownloadError> {
        self.controller.cancel().await
    }
}

/// 事件订阅
impl FileDownload {
    /// 订阅某一种事件。
    pub fn subscribe<F>(&self, kind: EventKind, handler: F) -> &Self
    where
        F: FnMut(&DownloadEvent) + Send + Sync + 'static,
    {
        self.controller.events.add(EventKindAdapter { kind, handler });
        self
    }

    /// 添加完整监听器；可多次调用，按注册顺序执行。
    pub fn add_listener(&self, listener: impl DownloadListener + 'static) -> &Self {
        self.controller.events.add(listener);
        self
    }

    pub fn on_progress<F>(&self, f: F) -> &Self
    where
        F: FnMut(&ProgressSnapshot) + Send + Sync + 'static,
    {
        self.controller.events.add(OnProgressAdapter(f));
        self
    }

    /// 完成回调，参数为最终保存路径。
    pub fn on_completed<F>(&self, f: F) -> &Self
    where
        F: FnMut(&Path) + Send + Sync + 'static,
    {
        self.controller.events.add(OnCompletedAdapter(f));
        self
    }

    pub fn on_cancelled<F>(&self, f: F) -> &Self
    where
        F: FnMut() + Send + Sync + 'static,
    {
        self.controller.events.add(OnCancelledAdapter(f));
        self
    }

    pub fn on_paused<F>(&self, f: F) -> &Self
    where
        F: FnMut() + Send + Sync + 'static,
    {
        self.controller.events.add(OnPausedAdapter(f));
        self
    }

    pub fn on_resumed<F>(&self, f: F) -> &Self
    where
        F: FnMut() + Send + Sync + 'static,
    {
        self.controller.events.add(OnResumedAdapter(f));
        self
    }

    pub fn on_error<F>(&self, f: F) -> &Self
    where
        F: FnMut(&DownloadError) + Send + Sync + 'static,
    {
        self.controller.events.add(OnErrorAdapter(f));
        self
    }

    /// 订阅之后发出的所有事件（异步流）。处理过慢时被挤掉的事件会被跳过。
    pub fn events(&self) -> BoxStream<'static, DownloadEvent> {
        self.controller.events.stream()
    }
}

impl std::fmt::Debug for FileDownload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileDownload")
            .field("controller", &self.controller)
            .finish()
    }
}
