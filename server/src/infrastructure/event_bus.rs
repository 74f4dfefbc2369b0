use tokio::sync::broadcast;

/// 插件事件
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PluginEvent {
    CommandRegistered {
        trigger: String,
    },
    DataReset {
        requested_by: String,
        deleted_surveys: usize,
        deleted_sessions: usize,
    },
}

/// 进程内事件总线
///
/// 没有订阅者时发布的事件会被丢弃
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<PluginEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn publish(&self, event: PluginEvent) {
        tracing::debug!("[EventBus] Publishing event: {:?}", event);
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PluginEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
