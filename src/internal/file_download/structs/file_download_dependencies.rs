//! 可替换的协作者：宿主应用、宿主会话、路径拼接、日志。测试时注入替身。

use std::sync::Arc;

use crate::internal::file_download::traits::{
    DownloadLogger, HostApp, HostSession, NativePathJoin, PathJoin, TracingLogger,
};

use super::download_error::DownloadError;

/// 下载的依赖集合；所有字段可选，未提供的在构造时补默认值。
///
/// - `app`：宿主应用，必填（没有可用的全局宿主）；
/// - `session`：宿主会话，默认取 `app` 的 `file-download` 分区；
/// - `path`：路径拼接，默认 [`NativePathJoin`]；
/// - `logger`：日志，默认 [`TracingLogger`]。
#[derive(Clone, Default)]
pub struct FileDownloadDependencies {
    pub app: Option<Arc<dyn HostApp>>,
    pub session: Option<Arc<dyn HostSession>>,
    pub path: Option<Arc<dyn PathJoin>>,
    pub logger: Option<Arc<dyn DownloadLogger>>,
}

impl FileDownloadDependencies {
    pub fn new(app: Arc<dyn HostApp>) -> Self {
        Self {
            app: Some(app),
            ..Default::default()
        }
    }

    pub fn with_session(mut self, session: Arc<dyn HostSession>) -> Self {
        self.session = Some(session);
        self
    }

    pub fn with_path(mut self, path: Arc<dyn PathJoin>) -> Self {
        self.path = Some(path);
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn DownloadLogger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// 用 `overrides` 中已提供的字段覆盖当前字段，未提供的保持不变。
    pub fn merge(self, overrides: FileDownloadDependencies) -> Self {
        Self {
            app: overrides.app.or(self.app),
            session: overrides.session.or(self.session),
            path: overrides.path.or(self.path),
            logger: overrides.logger.or(self.logger),
        }
    }

    /// 校验并补齐默认值。会话留到宿主就绪后再解析。
    pub(crate) fn resolve(self) -> Result<ResolvedDependencies, DownloadError> {
        let app = self.app.ok_or(DownloadError::MissingDependency("app"))?;
        Ok(ResolvedDependencies {
            app,
            session: self.session,
            path: self.path.unwrap_or_else(|| Arc::new(NativePathJoin)),
            logger: self.logger.unwrap_or_else(|| Arc::new(TracingLogger)),
        })
    }
}

impl std::fmt::Debug for FileDownloadDependencies {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileDownloadDependencies")
            .field("app", &self.app.is_some())
            .field("session", &self.session.is_some())
            .field("path", &self.path.is_some())
            .field("logger", &self.logger.is_some())
            .finish()
    }
}

/// 校验后的依赖。
pub(crate) struct ResolvedDependencies {
    pub(crate) app: Arc<dyn HostApp>,
    pub(crate) session: Option<Arc<dyn HostSession>>,
    pub(crate) path: Arc<dyn PathJoin>,
    pub(crate) logger: Arc<dyn DownloadLogger>,
}
