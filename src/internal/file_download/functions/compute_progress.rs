//! 进度计算：纯函数，由原始字节计数与时间戳推导进度快照。

use crate::internal::file_download::structs::ProgressSnapshot;

/// 根据已下载字节、总字节、开始时间与当前时间（均为毫秒）计算进度快照。
///
/// - 速度为瞬时估计 `bytes_downloaded / elapsed_time`，不做平滑；
/// - 总大小为 0 视为未知：`indeterminate = true`，`percent = 0`，剩余字节按 0 计；
/// - 剩余字节为 0 时预计剩余时间为 0；没有可用速度（已用时间为 0 或尚未收到字节）时为 `f64::INFINITY`；
/// - 时钟回拨导致 `now < start_time` 时已用时间按 0 计。
pub fn compute_progress(
    bytes_downloaded: u64,
    total_bytes: u64,
    start_time: f64,
    now: f64,
) -> ProgressSnapshot {
    let elapsed_time = (now - start_time).max(0.0);
    let known_total = total_bytes > 0;

    let bytes_remaining = if known_total {
        total_bytes.saturating_sub(bytes_downloaded)
    } else {
        0
    };

    let bytes_per_ms = if elapsed_time > 0.0 {
        bytes_downloaded as f64 / elapsed_time
    } else {
        0.0
    };

    let estimated_ms_remaining = if bytes_remaining == 0 {
        0.0
    } else if bytes_per_ms > 0.0 {
        bytes_remaining as f64 / bytes_per_ms
    } else {
        f64::INFINITY
    };

    let percent = if known_total {
        bytes_downloaded as f64 / total_bytes as f64
    } else {
        0.0
    };

    ProgressSnapshot {
        percent,
        indeterminate: !known_total,
        bytes_downloaded,
        total_bytes,
        start_time,
        elapsed_time,
        estimated_ms_remaining,
    }
}

/// 当前时间，自 epoch 起的毫秒数。
pub(crate) fn now_ms() -> f64 {
    chrono::Utc::now().timestamp_millis() as f64
}
