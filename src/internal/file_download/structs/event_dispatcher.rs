use std::collections::VecDeque;

use futures_util::StreamExt;
use futures_util::stream::{self, BoxStream};
use parking_lot::Mutex;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;

use crate::internal::file_download::traits::DownloadListener;

use super::download_event::DownloadEvent;

/// 事件分发器：已注册的监听器 + 广播通道。
///
/// 监听器按注册顺序同步执行；广播通道供 `stream()` 的异步订阅者使用，
/// 订阅者处理过慢被挤掉的事件会被跳过。
///
/// 事件先进入发件箱，由当前正在分发的调用者依次取出。监听器执行期间
/// 再次触发的事件（例如监听器里取消下载、宿主同步报告终态）排在后面，
/// 等当前事件分发完再送达，不会重入监听器锁。
pub struct EventDispatcher {
    listeners: Mutex<Vec<Box<dyn DownloadListener>>>,
    outbox: Mutex<Outbox>,
    sender: broadcast::Sender<DownloadEvent>,
}

#[derive(Default)]
struct Outbox {
    queue: VecDeque<DownloadEvent>,
    draining: bool,
}

impl EventDispatcher {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self {
            listeners: Mutex::new(Vec::new()),
            outbox: Mutex::new(Outbox::default()),
            sender,
        }
    }

    /// 添加一个监听器；支持多次调用以注册多个监听器，按添加顺序依次执行。
    pub fn add(&self, listener: impl DownloadListener + 'static) {
        self.listeners.lock().push(Box::new(listener));
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.lock().len()
    }

    /// 把事件交给所有监听器，再广播给异步订阅者。
    ///
    /// 已有调用者在分发时只入队并立即返回，事件由那个调用者按顺序送达。
    pub fn emit(&self, event: DownloadEvent) {
        {
            let mut outbox = self.outbox.lock();
            outbox.queue.push_back(event);
            if outbox.draining {
                return;
            }
            outbox.draining = true;
        }

        loop {
            let next = {
                let mut outbox = self.outbox.lock();
                let next = outbox.queue.pop_front();
                if next.is_none() {
                    outbox.draining = false;
                }
                next
            };
            let Some(event) = next else { break };

            for listener in self.listeners.lock().iter_mut() {
                listener.on_event(&event);
            }
            // 没有异步订阅者时发送失败，忽略即可
            let _ = self.sender.send(event);
        }
    }

    /// 订阅之后发出的事件流。分发器被释放后流结束。
    pub fn stream(&self) -> BoxStream<'static, DownloadEvent> {
        stream::unfold(self.sender.subscribe(), |mut receiver| async move {
            loop {
                match receiver.recv().await {
                    Ok(event) => return Some((event, receiver)),
                    Err(RecvError::Lagged(_)) => continue,
                    Err(RecvError::Closed) => return None,
                }
            }
        })
        .boxed()
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("listeners", &self.listener_count())
            .field("receivers", &self.sender.receiver_count())
            .finish()
    }
}
