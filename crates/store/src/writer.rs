//! Fire-and-forget high score writer.
//!
//! The tick loop must never wait on storage. [`ScoreWriter::background`] owns a
//! small tokio runtime whose single worker task receives scores over an
//! unbounded channel and performs each write on the blocking pool. Failures are
//! logged and dropped; there is no retry.
//!
//! [`ScoreWriter::inline`] writes synchronously on the caller's thread, for
//! tests and tools without a render loop.

use std::sync::Arc;

use log::{debug, error, warn};
use tokio::runtime::Runtime;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::error::Result;
use crate::high_score::write_high_score;
use crate::kv::KeyValueStore;

pub enum ScoreWriter {
    Inline(Arc<dyn KeyValueStore>),
    Background(BackgroundWriter),
}

impl ScoreWriter {
    pub fn inline(store: Arc<dyn KeyValueStore>) -> Self {
        Self::Inline(store)
    }

    pub fn background(store: Arc<dyn KeyValueStore>) -> Result<Self> {
        Ok(Self::Background(BackgroundWriter::start(store)?))
    }

    /// Persist `score`. Never blocks on the background variant and never fails.
    pub fn submit(&self, score: u32) {
        match self {
            Self::Inline(store) => persist(store.as_ref(), score),
            Self::Background(writer) => writer.submit(score),
        }
    }

    /// Wait for queued writes to finish. Later submits still work on `Inline`
    /// but are dropped on `Background`.
    pub fn flush(&mut self) {
        if let Self::Background(writer) = self {
            writer.close();
        }
    }
}

fn persist(store: &dyn KeyValueStore, score: u32) {
    match write_high_score(store, score) {
        Ok(()) => debug!("persisted high score {score}"),
        Err(e) => warn!("failed to save high score {score}: {e}"),
    }
}

/// Running writer instance.
pub struct BackgroundWriter {
    rt: Runtime,
    tx: Option<mpsc::UnboundedSender<u32>>,
    worker: Option<JoinHandle<()>>,
}

impl BackgroundWriter {
    pub fn start(store: Arc<dyn KeyValueStore>) -> Result<Self> {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("score-writer")
            .enable_all()
            .build()?;

        let (tx, mut rx) = mpsc::unbounded_channel::<u32>();
        let worker = rt.spawn(async move {
            while let Some(score) = rx.recv().await {
                let store = Arc::clone(&store);
                let res = tokio::task::spawn_blocking(move || persist(store.as_ref(), score)).await;
                if let Err(e) = res {
                    error!("high score write task failed: {e}");
                }
            }
        });

        Ok(Self {
            rt,
            tx: Some(tx),
            worker: Some(worker),
        })
    }

    pub fn submit(&self, score: u32) {
        let Some(tx) = &self.tx else {
            warn!("high score {score} dropped: writer closed");
            return;
        };
        if tx.send(score).is_err() {
            warn!("high score {score} dropped: writer task gone");
        }
    }

    /// Close the queue and wait until every queued write has completed.
    pub fn close(&mut self) {
        self.tx.take();
        if let Some(worker) = self.worker.take() {
            if let Err(e) = self.rt.block_on(worker) {
                error!("high score writer stopped abnormally: {e}");
            }
        }
    }
}

impl Drop for BackgroundWriter {
    fn drop(&mut self) {
        self.close();
    }
}
