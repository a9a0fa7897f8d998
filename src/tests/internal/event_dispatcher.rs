//! 事件分发器测试：注册顺序、按种类分发、异步流。

use std::sync::{Arc, Weak};

use futures_util::StreamExt;
use parking_lot::Mutex;

use crate::file_download::{DownloadError, DownloadEvent, DownloadListener, EventDispatcher};

/// 只关心取消与错误的监听器
struct Failures(Arc<Mutex<Vec<String>>>);

impl DownloadListener for Failures {
    fn on_cancelled(&mut self) {
        self.0.lock().push("cancelled".to_string());
    }

    fn on_error(&mut self, error: &DownloadError) {
        self.0.lock().push(error.to_string());
    }
}

/// 记录自己的编号，用于验证执行顺序
struct Tagged(u8, Arc<Mutex<Vec<u8>>>);

impl DownloadListener for Tagged {
    fn on_event(&mut self, _event: &DownloadEvent) {
        self.1.lock().push(self.0);
    }
}

#[test]
fn listeners_run_in_registration_order() {
    let dispatcher = EventDispatcher::new(8);
    let order = Arc::new(Mutex::new(Vec::new()));
    for tag in [1, 2, 3] {
        dispatcher.add(Tagged(tag, order.clone()));
    }

    dispatcher.emit(DownloadEvent::Paused);
    dispatcher.emit(DownloadEvent::Resumed);

    assert_eq!(dispatcher.listener_count(), 3);
    assert_eq!(*order.lock(), vec![1, 2, 3, 1, 2, 3]);
}

#[test]
fn default_on_event_routes_by_kind() {
    let dispatcher = EventDispatcher::new(8);
    let seen = Arc::new(Mutex::new(Vec::new()));
    dispatcher.add(Failures(seen.clone()));

    dispatcher.emit(DownloadEvent::Paused);
    dispatcher.emit(DownloadEvent::Error(DownloadError::Interrupted));
    dispatcher.emit(DownloadEvent::Cancelled);

    assert_eq!(
        *seen.lock(),
        vec![DownloadError::Interrupted.to_string(), "cancelled".to_string()]
    );
}

#[tokio::test]
async fn stream_receives_events_after_subscribing() {
    let dispatcher = EventDispatcher::new(8);
    dispatcher.emit(DownloadEvent::Paused);

    let mut stream = dispatcher.stream();
    dispatcher.emit(DownloadEvent::Resumed);
    dispatcher.emit(DownloadEvent::Cancelled);
    drop(dispatcher);

    let events: Vec<_> = stream.by_ref().collect().await;
    assert_eq!(events, vec![DownloadEvent::Resumed, DownloadEvent::Cancelled]);
}

#[tokio::test]
async fn lagging_stream_skips_overwritten_events() {
    let dispatcher = EventDispatcher::new(2);
    let stream = dispatcher.stream();

    for _ in 0..5 {
        dispatcher.emit(DownloadEvent::Paused);
    }
    dispatcher.emit(DownloadEvent::Cancelled);
    drop(dispatcher);

    let events: Vec<_> = stream.collect().await;
    assert_eq!(events.last(), Some(&DownloadEvent::Cancelled));
    assert!(events.len() <= 2);
}

/// 收到暂停时立刻再发出一个恢复
struct Echo(Weak<EventDispatcher>, Arc<Mutex<Vec<DownloadEvent>>>);

impl DownloadListener for Echo {
    fn on_event(&mut self, event: &DownloadEvent) {
        self.1.lock().push(event.clone());
        if *event == DownloadEvent::Paused {
            if let Some(dispatcher) = self.0.upgrade() {
                dispatcher.emit(DownloadEvent::Resumed);
            }
        }
    }
}

#[tokio::test]
async fn emit_from_listener_is_queued_after_current_event() {
    let dispatcher = Arc::new(EventDispatcher::new(8));
    let first = Arc::new(Mutex::new(Vec::new()));
    let second = Arc::new(Mutex::new(Vec::new()));
    dispatcher.add(Echo(Arc::downgrade(&dispatcher), first.clone()));
    dispatcher.add(Echo(Weak::new(), second.clone()));
    let stream = dispatcher.stream();

    dispatcher.emit(DownloadEvent::Paused);

    let expected = vec![DownloadEvent::Paused, DownloadEvent::Resumed];
    assert_eq!(*first.lock(), expected);
    assert_eq!(*second.lock(), expected);

    drop(dispatcher);
    let streamed: Vec<_> = stream.collect().await;
    assert_eq!(streamed, expected);
}
