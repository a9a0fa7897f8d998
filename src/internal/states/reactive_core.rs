//! # ReactiveProperty — 响应式属性内核
//!
//! 下载生命周期状态等「可监听的单值」的公共基础设施。
//! [`UnlockReactiveProperty`](super::unlock_reactive::UnlockReactiveProperty) 直接复用本模块。

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;
use tokio::sync::watch;
use tokio::sync::watch::error::RecvError;

// ──────────────────────────── Error ────────────────────────────

/// 响应式属性统一错误类型
#[derive(Debug, Error)]
pub enum ReactivePropertyError {
    /// 监听器已被销毁
    #[error("监听器已被销毁")]
    WatcherClosed,

    /// watch 通道接收失败
    #[error("接收失败: {0}")]
    RecvError(#[from] RecvError),
}

// ──────────────────────────── Inner ────────────────────────────

/// 内部共享状态，包含值发送器和销毁标志。
#[derive(Debug)]
pub(crate) struct Inner<T> {
    pub(crate) sender: watch::Sender<Option<T>>,
    pub(crate) is_dropped: AtomicBool,
}

impl<T> Drop for Inner<T> {
    fn drop(&mut self) {
        self.is_dropped.store(true, Ordering::Relaxed);
        let _ = self.sender.send(None);
    }
}

// ──────────────────────────── ReactiveProperty ────────────────────────────

/// 响应式属性内核：提供 new / update / update_if / get_current / watch 等基础能力。
#[derive(Clone, Debug)]
pub struct ReactiveProperty<T: Clone + Send + Sync> {
    pub(crate) inner: Arc<Inner<T>>,
}

impl<T> ReactiveProperty<T>
where
    T: Clone + Send + Sync,
{
    /// 创建一个新的响应式属性。
    pub fn new(value: T) -> Self {
        let (sender, _) = watch::channel(Some(value));
        Self {
            inner: Arc::new(Inner {
                sender,
                is_dropped: AtomicBool::new(false),
            }),
        }
    }

    /// 更新属性的值，所有监听者都会收到通知。
    pub fn update(&self, new_value: T) {
        if self.inner.is_dropped.load(Ordering::Relaxed) {
            return;
        }
        self.inner.sender.send_replace(Some(new_value));
    }

    /// 仅当 `accept` 对当前值返回 `true` 时才写入新值；返回是否真的写入。
    ///
    /// 判断与写入在同一次 `send_if_modified` 内完成，不会与其他写者交错。
    pub fn update_if<F>(&self, new_value: T, accept: F) -> bool
    where
        F: FnOnce(&T) -> bool,
    {
        if self.inner.is_dropped.load(Ordering::Relaxed) {
            return false;
        }
        self.inner.sender.send_if_modified(|slot| match slot {
            Some(current) if accept(current) => {
                *current = new_value;
                true
            }
            _ => false,
        })
    }

    /// 获取当前属性值的快照（会 clone）。
    pub fn get_current(&self) -> Option<T> {
        self.inner.sender.borrow().as_ref().cloned()
    }

    /// 创建一个监听器，用于异步监听属性值的变化。
    pub fn watch(&self) -> PropertyWatcher<T> {
        PropertyWatcher {
            receiver: self.inner.sender.subscribe(),
            inner: Arc::clone(&self.inner),
        }
    }
}

// ──────────────────────────── PropertyWatcher ────────────────────────────

/// 属性监听器，用于异步接收属性值的变化。
pub struct PropertyWatcher<T> {
    receiver: watch::Receiver<Option<T>>,
    #[allow(dead_code)]
    inner: Arc<Inner<T>>,
}

impl<T> PropertyWatcher<T>
where
    T: Clone + Send + Sync,
{
    /// 异步等待属性值的变化，返回新值。
    pub async fn changed(&mut self) -> Result<T, ReactivePropertyError> {
        self.receiver.changed().await?;
        match self.receiver.borrow_and_update().as_ref() {
            None => Err(ReactivePropertyError::WatcherClosed),
            Some(value) => Ok(value.clone()),
        }
    }

    /// 挂起直到当前值满足 `predicate`，返回满足条件的值。
    pub async fn wait_for<F>(&mut self, mut predicate: F) -> Result<T, ReactivePropertyError>
    where
        F: FnMut(&T) -> bool,
    {
        let value = self
            .receiver
            .wait_for(|v| v.as_ref().is_none_or(|v| predicate(v)))
            .await?;
        value.as_ref().cloned().ok_or(ReactivePropertyError::WatcherClosed)
    }

    /// 同步获取当前值的克隆。
    pub fn borrow(&self) -> Option<T> {
        self.receiver.borrow().clone()
    }
}
