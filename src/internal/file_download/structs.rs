pub mod download_error;
pub mod download_event;
pub mod download_status;
pub mod event_dispatcher;
pub mod file_download;
pub mod file_download_config;
pub mod file_download_controller;
pub mod file_download_dependencies;
pub(crate) mod listener_adapters;
pub mod progress_snapshot;
pub(crate) mod reactive_state;

// 重导出公共类型
pub use download_error::DownloadError;
pub use download_event::{DownloadEvent, EventKind};
pub use download_status::DownloadStatus;
pub use event_dispatcher::EventDispatcher;
pub use file_download::FileDownload;
pub use file_download_config::FileDownloadConfig;
pub use file_download_dependencies::FileDownloadDependencies;
pub use progress_snapshot::ProgressSnapshot;
