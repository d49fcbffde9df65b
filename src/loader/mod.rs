use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::error::LoadError;
use crate::record::{self, PersonRecord};

pub type LoadResult = Result<Vec<PersonRecord>, LoadError>;

/// Where the initial batch of records comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Http {
        url: String,
        timeout: Option<Duration>,
    },
    File(PathBuf),
}

impl Source {
    /// Fetch and decode the batch. Blocks the calling thread.
    pub fn fetch(&self) -> LoadResult {
        match self {
            Source::Http { url, timeout } => fetch_http(url, *timeout),
            Source::File(path) => fetch_file(path),
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Http { url, .. } => write!(f, "{url}"),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn fetch_http(url: &str, timeout: Option<Duration>) -> LoadResult {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    let client = builder.build()?;

    debug!("GET {url}");
    let response = client.get(url).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status(status));
    }
    let body = response.bytes()?;
    Ok(record::decode_batch(&body)?)
}

fn fetch_file(path: &std::path::Path) -> LoadResult {
    let bytes = std::fs::read(path).map_err(|e| LoadError::FileRead {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(record::decode_batch(&bytes)?)
}

/// A load running on a background thread. Yields its result once.
pub struct PendingLoad {
    rx: Receiver<LoadResult>,
}

impl PendingLoad {
    /// Non-blocking check. `None` while the fetch is still in flight.
    pub fn poll(&self) -> Option<LoadResult> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(LoadError::Worker)),
        }
    }

    /// Block until the result arrives.
    #[cfg(test)]
    pub fn wait(self) -> LoadResult {
        self.rx.recv().unwrap_or(Err(LoadError::Worker))
    }
}

/// Start the one-shot fetch on its own thread.
pub fn spawn(source: Source) -> PendingLoad {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        info!("loading records from {source}");
        let result = source.fetch();
        // The receiver is gone only if the app already quit.
        let _ = tx.send(result);
    });
    PendingLoad { rx }
}
