use std::collections::HashMap;
use tokio::task::JoinHandle;

/// Background fetches the app can have in flight. Re-spawning a slot
/// aborts the task already occupying it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskSlot {
    Bootstrap,
    QuoteRefresh,
}

#[derive(Default)]
pub struct TaskManager {
    tasks: HashMap<TaskSlot, JoinHandle<()>>,
}

impl TaskManager {
    pub fn new() -> Self {
        Self {
            tasks: HashMap::new(),
        }
    }

    pub fn spawn(&mut self, slot: TaskSlot, task: JoinHandle<()>) {
        if let Some(handle) = self.tasks.insert(slot, task) {
            handle.abort();
        }
    }

    pub fn abort_all(&mut self) {
        for handle in self.tasks.values() {
            handle.abort();
        }
        self.tasks.clear();
    }
}
