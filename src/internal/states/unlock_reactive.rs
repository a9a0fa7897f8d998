//! # UnlockReactiveProperty
//!
//! 一个轻量级的响应式属性容器，基于 [`tokio::sync::watch`] 实现，
//! 支持同步更新与异步监听，更新方不会被阻塞（宿主回调里可以直接写）。
//!
//! 内部直接复用 [`super::reactive_core::ReactiveProperty`]。
//!
//! ## 使用示例
//! ```rust,no_run
//! use file_download::states::unlock_reactive::UnlockReactiveProperty;
//!
//! let prop = UnlockReactiveProperty::new(0);
//! prop.update(1);
//! prop.update(2);
//! ```

pub use super::reactive_core::{PropertyWatcher, ReactivePropertyError as UnlockReactivePropertyError};

/// 轻量级响应式属性容器（无锁写入）。
///
/// 纯通知机制，读写不阻塞，适合由宿主通知驱动的状态（如下载生命周期）。
/// 一次性结果请使用 [`Deferred`](super::deferred::Deferred)。
pub type UnlockReactiveProperty<T> = super::reactive_core::ReactiveProperty<T>;
