/// 内部导出的模块
mod internal;


/// 导出核心类型
pub use internal::file_download::structs::{DownloadError, FileDownload};

/// 单文件下载：下载句柄、事件、进度、配置与依赖
pub mod file_download {
    use crate::internal;
    pub use internal::file_download::functions::*;
    pub use internal::file_download::structs::*;
    pub use internal::file_download::traits::{
        DownloadListener, DownloadLogger, NativePathJoin, PathJoin, TracingLogger,
    };
}

/// 宿主下载引擎接口，接入方为自己的平台实现这些 trait
pub mod host {
    use crate::internal;
    pub use internal::file_download::traits::host::*;
}

pub mod states {
    pub mod unlock_reactive {
        use crate::internal;
        pub use internal::states::unlock_reactive::*;
    }

    pub mod deferred {
        use crate::internal;
        pub use internal::states::deferred::*;
    }
}
