// Copyright (c) 2021 Dropbox, Inc.

//! Executors for code that touches state shared across threads.
//!
//! A transport can be given a [`DelegateQueue`] through its configuration. Anything it runs on
//! behalf of the caller, such as response handlers, is submitted to that queue.

use threadpool::ThreadPool;

/// A unit of work submitted to a [`DelegateQueue`].
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Something that runs submitted tasks.
pub trait DelegateQueue: Send + Sync {
    /// Submit a task. It may run on another thread, at some later time.
    fn dispatch(&self, task: Task);
}

/// A queue that runs tasks one at a time, in submission order, on a worker thread with the
/// queue's name.
///
/// A task that panics does not stop the queue: the worker is replaced and later tasks still run.
/// Dropping the queue waits for every task still pending.
pub struct SerialQueue {
    name: String,
    pool: ThreadPool,
}

impl SerialQueue {
    /// Start a queue whose worker thread has the given name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let pool = ThreadPool::with_name(name.clone(), 1);
        debug!("started delegate queue {name:?}");
        Self { name, pool }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// How many tasks on this queue have panicked so far.
    pub fn panic_count(&self) -> usize {
        self.pool.panic_count()
    }
}

impl DelegateQueue for SerialQueue {
    fn dispatch(&self, task: Task) {
        self.pool.execute(task);
    }
}

impl Drop for SerialQueue {
    fn drop(&mut self) {
        self.pool.join();
        let panics = self.pool.panic_count();
        if panics != 0 {
            warn!("{panics} task(s) on delegate queue {:?} panicked", self.name);
        }
        debug!("stopped delegate queue {:?}", self.name);
    }
}

impl std::fmt::Debug for SerialQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerialQueue")
            .field("name", &self.name)
            .field("queued", &self.pool.queued_count())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::sync::Arc;
    use std::sync::mpsc::channel;
    use std::time::Duration;

    #[test]
    fn test_tasks_run_in_order() {
        let (tx, rx) = channel();
        {
            let queue = SerialQueue::new("test-order");
            for i in 0 .. 100 {
                let tx = tx.clone();
                queue.dispatch(Box::new(move || tx.send(i).unwrap()));
            }
            // drop waits for the pending tasks
        }
        drop(tx);
        let seen = rx.iter().collect::<Vec<u32>>();
        assert_eq!((0 .. 100).collect::<Vec<u32>>(), seen);
    }

    #[test]
    fn test_runs_on_named_thread() {
        let (tx, rx) = channel();
        let queue = Arc::new(SerialQueue::new("dbx-delegate"));
        queue.dispatch(Box::new(move || {
            tx.send(std::thread::current().name().map(str::to_owned)).unwrap();
        }));
        assert_eq!(Some("dbx-delegate".to_owned()), rx.recv().unwrap());
        assert_eq!("dbx-delegate", queue.name());
    }

    #[test]
    fn test_queue_survives_panicking_task() {
        let (tx, rx) = channel();
        let queue = SerialQueue::new("test-panic");
        queue.dispatch(Box::new(|| panic!("handler failure")));
        std::thread::sleep(Duration::from_millis(100));

        let tx2 = tx.clone();
        queue.dispatch(Box::new(move || tx2.send(1).unwrap()));
        assert_eq!(Ok(1), rx.recv_timeout(Duration::from_secs(5)));

        // Still on a worker with the queue's name.
        queue.dispatch(Box::new(move || {
            tx.send(if std::thread::current().name() == Some("test-panic") { 2 } else { 0 })
                .unwrap();
        }));
        assert_eq!(Ok(2), rx.recv_timeout(Duration::from_secs(5)));
        assert_eq!(1, queue.panic_count());
    }
}
