//! # Deferred
//!
//! 一次性结果容器：创建时尚未确定，之后由某个回调调用 `resolve` / `reject` 落定，
//! 任意数量的等待者通过 `wait().await` 拿到同一份结果。
//!
//! ## 并发保证
//!
//! 值由 `parking_lot::Mutex` 保护，`tokio::sync::Notify` 负责唤醒，保证：
//! - ✅ 只有第一次落定生效，之后的 `resolve` / `reject` 被忽略并返回 `false`
//! - ✅ `wait` 先注册通知再检查值，不会错过落定时刻
//! - ✅ 落定可以在同步回调中进行（不需要 `.await`）
//!
//! ## 使用示例
//! ```rust,no_run
//! use file_download::states::deferred::Deferred;
//!
//! # async fn example() {
//! let deferred: Deferred<u32, String> = Deferred::new();
//!
//! let d = deferred.clone();
//! tokio::spawn(async move {
//!     d.resolve(42);
//! });
//!
//! assert_eq!(deferred.wait().await, Ok(42));
//! # }
//! ```

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::Notify;

struct Inner<T, E> {
    value: Mutex<Option<Result<T, E>>>,
    notify: Notify,
}

/// 一次性结果容器；`Clone` 得到的是同一个结果的另一个句柄。
pub struct Deferred<T, E> {
    inner: Arc<Inner<T, E>>,
}

impl<T, E> Clone for Deferred<T, E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T, E> Default for Deferred<T, E>
where
    T: Clone,
    E: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> fmt::Debug for Deferred<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred")
            .field("settled", &self.inner.value.lock().is_some())
            .finish()
    }
}

impl<T, E> Deferred<T, E>
where
    T: Clone,
    E: Clone,
{
    /// 创建一个尚未落定的结果。
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                value: Mutex::new(None),
                notify: Notify::new(),
            }),
        }
    }

    /// 以成功值落定。已落定时返回 `false` 且不改变结果。
    pub fn resolve(&self, value: T) -> bool {
        self.settle(Ok(value))
    }

    /// 以错误落定。已落定时返回 `false` 且不改变结果。
    pub fn reject(&self, error: E) -> bool {
        self.settle(Err(error))
    }

    fn settle(&self, result: Result<T, E>) -> bool {
        let mut guard = self.inner.value.lock();
        if guard.is_some() {
            return false;
        }
        *guard = Some(result);
        drop(guard);
        self.inner.notify.notify_waiters();
        true
    }

    /// 是否已经落定。
    pub fn is_settled(&self) -> bool {
        self.inner.value.lock().is_some()
    }

    /// 非阻塞地读取结果；未落定时返回 `None`。
    pub fn peek(&self) -> Option<Result<T, E>> {
        self.inner.value.lock().clone()
    }

    /// 挂起直到落定，返回结果的克隆。没有超时：若永不落定则永远挂起。
    pub async fn wait(&self) -> Result<T, E> {
        loop {
            // 先注册通知监听器，再检查值
            let notified = self.inner.notify.notified();

            if let Some(result) = self.peek() {
                return result;
            }

            notified.await;
        }
    }
}
