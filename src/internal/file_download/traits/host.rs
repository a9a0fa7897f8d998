//! 宿主下载引擎的接口边界：真正执行传输、重定向与写盘的是宿主，这里只描述控制器消费的能力。
//!
//! 宿主通知以同步回调的形式按发出顺序投递；控制器不重排、不缓冲。

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;

/// 「下载已开始」监听器：宿主为一次 `download_url` 创建下载对象后调用一次。
pub type WillDownloadListener = Box<dyn FnOnce(Arc<dyn HostDownloadItem>) + Send>;

/// 字节/状态更新监听器。
pub type UpdatedListener = Box<dyn Fn(UpdatedState) + Send + Sync>;

/// 终态监听器。
pub type DoneListener = Box<dyn Fn(DoneState) + Send + Sync>;

/// `updated` 通知携带的状态标签
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdatedState {
    Progressing,
    Interrupted,
}

/// `done` 通知携带的终态标签
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DoneState {
    Completed,
    Cancelled,
    Interrupted,
    /// 宿主报告了其他无法识别的终态，保留原始标签
    Unknown(String),
}

/// 宿主应用：就绪等待、临时目录、按分区获取会话。
#[async_trait]
pub trait HostApp: Send + Sync {
    /// 等待宿主启动完成。没有超时，宿主不就绪则一直挂起。
    async fn when_ready(&self);

    /// 宿主的临时目录，默认下载目录由此派生。
    fn temp_dir(&self) -> PathBuf;

    /// 获取（或创建）指定分区的会话。
    fn session_from_partition(&self, partition: &str) -> Arc<dyn HostSession>;
}

/// 宿主会话：可在多个下载之间共享，控制器不对其加锁。
pub trait HostSession: Send + Sync {
    /// 注册一次性的「下载已开始」监听器。
    ///
    /// 同一会话上并发发起多个下载时，宿主必须把「开始」通知与请求一一对应；
    /// 控制器信任这一点，只接收它看到的第一个通知。
    fn once_will_download(&self, listener: WillDownloadListener);

    /// 发起下载。即发即忘：结果只通过监听器观察，没有返回值。
    ///
    /// `url` 是调用方传入的原始字符串（已校验可解析）。
    fn download_url(&self, url: &str);
}

/// 宿主下载对象：控制器包装但不拥有它，字节计数与终态以它为准。
pub trait HostDownloadItem: Send + Sync {
    /// 宿主选定的文件名
    fn filename(&self) -> String;

    fn received_bytes(&self) -> u64;

    /// 总字节数，未知时为 0
    fn total_bytes(&self) -> u64;

    /// 开始时间，自 epoch 起的秒数
    fn start_time(&self) -> f64;

    fn is_paused(&self) -> bool;

    /// 最终保存路径（宿主可能与设置的不同）
    fn save_path(&self) -> PathBuf;

    fn set_save_path(&self, path: &Path);

    fn pause(&self);

    fn resume(&self);

    fn cancel(&self);

    fn on_updated(&self, listener: UpdatedListener);

    fn on_done(&self, listener: DoneListener);
}
