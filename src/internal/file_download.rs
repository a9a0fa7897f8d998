//! 单文件下载领域模块：包装宿主下载引擎，提供进度、暂停/恢复与取消。
//!
//! 使用方式：`FileDownload::new(url, dir, deps)?` 后订阅事件并 `wait_for_download().await`。
//! 对外导出以 [`crate::file_download`] 为准，此处仅做模块划分，不重复 pub use。

pub mod functions;
pub mod structs;
pub mod traits;
