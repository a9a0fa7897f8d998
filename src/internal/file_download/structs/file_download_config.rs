/// 默认会话分区：未注入会话时从宿主应用取这个分区的会话
pub const DEFAULT_SESSION_PARTITION: &str = "file-download";

/// 默认下载目录：宿主临时目录下的子目录名
pub const DEFAULT_TEMP_SUBDIR: &str = "DL_TEMP";

/// 默认事件广播缓冲区大小
pub const DEFAULT_EVENT_CAPACITY: usize = 64;

#[derive(Debug, Clone)]
pub struct FileDownloadConfig {
    /// 未注入会话时使用的分区名
    pub session_partition: String,
    /// 未指定目标目录时，在宿主临时目录下使用的子目录
    pub temp_subdir: String,
    /// `events()` 广播通道的缓冲区大小
    pub event_capacity: usize,
}

impl Default for FileDownloadConfig {
    fn default() -> Self {
        Self {
            session_partition: DEFAULT_SESSION_PARTITION.to_string(),
            temp_subdir: DEFAULT_TEMP_SUBDIR.to_string(),
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}
