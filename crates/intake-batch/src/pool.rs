use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::{mpsc, Semaphore};
use tokio::task::JoinSet;

use crate::corpus::document_id;
use crate::error::DocumentFailure;
use crate::source::BoxFuture;

/// One document's result, labeled with its identity.
pub struct DocumentOutcome<T> {
    pub document_id: String,
    pub result: Result<T, DocumentFailure>,
}

/// The per-document job a batch tool runs on the pool.
pub type DocumentWork<T> =
    Arc<dyn Fn(PathBuf) -> BoxFuture<'static, Result<T, DocumentFailure>> + Send + Sync>;

/// Dispatch per-document work onto a bounded worker pool.
///
/// At most `concurrency` documents are in flight; outcomes flow
/// through the returned channel to the caller's aggregator loop, the
/// single owner of mutable accumulation and artifact writes.
pub fn dispatch<T: Send + 'static>(
    documents: Vec<PathBuf>,
    concurrency: usize,
    work: DocumentWork<T>,
) -> mpsc::Receiver<DocumentOutcome<T>> {
    let permits = concurrency.max(1);
    let (tx, rx) = mpsc::channel(permits * 2);
    let semaphore = Arc::new(Semaphore::new(permits));

    tokio::spawn(async move {
        let mut workers = JoinSet::new();
        for path in documents {
            let Ok(permit) = semaphore.clone().acquire_owned().await else {
                break;
            };
            let tx = tx.clone();
            let work = work.clone();
            workers.spawn(async move {
                let id = document_id(&path);
                let result = work(path).await;
                let _ = tx.send(DocumentOutcome {
                    document_id: id,
                    result,
                })
                .await;
                drop(permit);
            });
        }
        drop(tx);
        while workers.join_next().await.is_some() {}
    });

    rx
}
