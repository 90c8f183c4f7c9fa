use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use explorer_logging::explorer_info;

use crate::{ApiSettings, EngineEvent, Fetcher, Generation, MovieRequest, ReqwestFetcher};

enum EngineCommand {
    Fetch {
        generation: Generation,
        request: MovieRequest,
    },
}

/// Runs fetches on a background tokio runtime and reports completions over a channel.
///
/// Every enqueued request runs to completion; superseded requests are not
/// aborted, the receiver decides which completions still matter.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: ApiSettings) -> std::io::Result<Self> {
        let fetcher = ReqwestFetcher::new(settings)
            .map_err(|err| std::io::Error::other(err.to_string()))?;
        Self::with_fetcher(Arc::new(fetcher))
    }

    pub fn with_fetcher(fetcher: Arc<dyn Fetcher>) -> std::io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx).await;
                });
            }
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn enqueue(&self, generation: Generation, request: MovieRequest) {
        explorer_info!(
            "Fetch generation={} listing={} page={}",
            generation,
            request.listing.path(),
            request.page
        );
        let _ = self.cmd_tx.send(EngineCommand::Fetch {
            generation,
            request,
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    fetcher: &dyn Fetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Fetch {
            generation,
            request,
        } => {
            let result = fetcher.fetch(&request).await;
            let _ = event_tx.send(EngineEvent::FetchCompleted { generation, result });
        }
    }
}
