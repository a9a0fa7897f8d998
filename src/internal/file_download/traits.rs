//! 下载相关 trait：宿主接口、事件监听、日志与路径拼接，均可在测试中替换。

pub mod download_listener;
pub mod download_logger;
pub mod host;
pub mod path_join;

pub use download_listener::DownloadListener;
pub use download_logger::{DownloadLogger, TracingLogger};
pub use host::{
    DoneListener, DoneState, HostApp, HostDownloadItem, HostSession, UpdatedListener,
    UpdatedState, WillDownloadListener,
};
pub use path_join::{NativePathJoin, PathJoin};
