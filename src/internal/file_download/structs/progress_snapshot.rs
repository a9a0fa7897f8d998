use serde::{Deserialize, Deserializer, Serialize};

/// 下载进度快照：每次宿主报告字节推进时计算一次，只发出、不保存。
///
/// 序列化字段名为 camelCase（`bytesDownloaded`、`estimatedMsRemaining` 等），便于直接交给前端。
/// JSON 没有无穷大，`estimatedMsRemaining` 为无穷时写成 `null`，读回时还原为 `f64::INFINITY`。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSnapshot {
    /// 进度比例，0～1；总大小未知时为 0
    pub percent: f64,
    /// 总大小未知（为 0）时为 `true`
    pub indeterminate: bool,
    /// 已下载字节数
    pub bytes_downloaded: u64,
    /// 总字节数，未知时为 0
    pub total_bytes: u64,
    /// 开始时间，自 epoch 起的毫秒数
    pub start_time: f64,
    /// 已用时间（毫秒）
    pub elapsed_time: f64,
    /// 预计剩余时间（毫秒）；尚无可用速度时为 `f64::INFINITY`
    #[serde(deserialize_with = "null_as_infinity")]
    pub estimated_ms_remaining: f64,
}

impl ProgressSnapshot {
    /// 进度百分比（0～100）。
    pub fn pct(&self) -> f64 {
        self.percent * 100.0
    }

    /// 瞬时速度（字节/毫秒）；已用时间为 0 时返回 `None`。
    pub fn bytes_per_ms(&self) -> Option<f64> {
        (self.elapsed_time > 0.0).then(|| self.bytes_downloaded as f64 / self.elapsed_time)
    }
}

fn null_as_infinity<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
}
