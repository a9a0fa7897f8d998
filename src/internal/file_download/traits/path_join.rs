use std::path::{Path, PathBuf};

/// 路径拼接：由目标目录与宿主报告的文件名得到保存路径。
pub trait PathJoin: Send + Sync {
    fn join(&self, dir: &Path, file_name: &str) -> PathBuf;
}

/// 平台原生拼接（`Path::join`）。
#[derive(Debug, Clone, Copy, Default)]
pub struct NativePathJoin;

impl PathJoin for NativePathJoin {
    fn join(&self, dir: &Path, file_name: &str) -> PathBuf {
        dir.join(file_name)
    }
}
