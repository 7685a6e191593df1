//! Collection orchestrator
//!
//! Spawns one worker thread per configured server, waits on the join
//! barrier, and aggregates per-server outcomes afterwards.

use std::io::{self, Write};
use std::sync::Arc;
use std::thread;

use parking_lot::Mutex;
use tracing::{debug, error};

use super::fetcher::Fetcher;
use crate::config::CollectorConfig;
use crate::metrics::format_line;
use crate::utils::{CollectorError, FetchError, Result};

/// Outcome of one collection pass across the fleet
#[derive(Debug, Default)]
pub struct GatherReport {
    /// Lines written across all servers
    pub lines: usize,
    /// Servers that produced no output, with the reason
    pub failures: Vec<(String, FetchError)>,
}

impl GatherReport {
    /// Whether every server produced output
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Per-worker result, merged after the join barrier
enum WorkerOutcome {
    Complete(usize),
    FetchFailed(FetchError),
    WriteFailed(io::Error),
}

/// Fans fetch-and-format work out across the configured fleet
pub struct Collector {
    config: Arc<CollectorConfig>,
    fetcher: Fetcher,
}

impl Collector {
    pub fn new(config: CollectorConfig) -> Self {
        Self {
            config: Arc::new(config),
            fetcher: Fetcher::new(),
        }
    }

    /// Poll every server concurrently, writing one line per entity
    ///
    /// Each worker owns its fetched document; the only shared state is the
    /// read-only configuration and the output writer, locked once per line
    /// so concurrent workers never interleave partial records. A failing
    /// server contributes zero lines and one report entry without
    /// disturbing its siblings.
    pub fn run<W>(&self, out: W) -> Result<GatherReport>
    where
        W: Write + Send + 'static,
    {
        let out = Arc::new(Mutex::new(out));
        let mut handles = Vec::with_capacity(self.config.servers.len());

        for server in &self.config.servers {
            let server = server.clone();
            let config = Arc::clone(&self.config);
            let fetcher = self.fetcher.clone();
            let out = Arc::clone(&out);

            handles.push(thread::spawn(move || {
                gather_server(&fetcher, &server, &config, &out)
            }));
        }

        // Join barrier: every worker finishes before outcomes are merged,
        // so a failure seen here can no longer affect a sibling.
        let mut report = GatherReport::default();
        let mut write_error = None;
        let mut panicked = None;

        for (handle, server) in handles.into_iter().zip(&self.config.servers) {
            match handle.join() {
                Ok(WorkerOutcome::Complete(lines)) => report.lines += lines,
                Ok(WorkerOutcome::FetchFailed(err)) => {
                    error!("Failed to collect from {}: {}", server, err);
                    report.failures.push((server.clone(), err));
                }
                Ok(WorkerOutcome::WriteFailed(err)) => {
                    write_error.get_or_insert(err);
                }
                Err(_) => {
                    panicked.get_or_insert_with(|| server.clone());
                }
            }
        }

        if let Some(err) = write_error {
            return Err(CollectorError::Io(err));
        }
        if let Some(server) = panicked {
            return Err(CollectorError::WorkerPanic(server));
        }

        Ok(report)
    }
}

/// Fetch one server and write a line per entity, counting lines written
fn gather_server<W: Write>(
    fetcher: &Fetcher,
    server: &str,
    config: &CollectorConfig,
    out: &Mutex<W>,
) -> WorkerOutcome {
    let document = match fetcher.fetch(server) {
        Ok(document) => document,
        Err(err) => return WorkerOutcome::FetchFailed(err),
    };
    debug!("{}: {} entities", server, document.len());

    let mut lines = 0;
    for (entity_type, entity_name, fields) in document.entities() {
        let line = format_line(&config.name, entity_type, entity_name, fields, &config.filters);
        if let Err(err) = writeln!(out.lock(), "{}", line) {
            return WorkerOutcome::WriteFailed(err);
        }
        lines += 1;
    }

    WorkerOutcome::Complete(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::testutil::{serve_once, unreachable_url};
    use crate::metrics::FieldFilters;

    /// Cloneable writer backed by a shared buffer, so tests can read what
    /// the workers wrote after `run` consumes their handle to it.
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().clone()).unwrap()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn config(servers: Vec<String>) -> CollectorConfig {
        CollectorConfig {
            name: "agents_metrics".to_string(),
            servers,
            filters: FieldFilters::default(),
        }
    }

    #[test]
    fn test_collects_from_every_server() {
        let first = serve_once("200 OK", r#"{"SOURCE.src1": {"EventPutSuccessCount": "42"}}"#);
        let second = serve_once("200 OK", r#"{"CHANNEL.ch1": {"ChannelSize": "7"}}"#);

        let out = SharedBuf::default();
        let collector = Collector::new(config(vec![first, second]));
        let report = collector.run(out.clone()).unwrap();

        assert!(report.all_succeeded());
        assert_eq!(report.lines, 2);

        let written = out.contents();
        assert!(written.contains("flume_agents_metrics,type=SOURCE,name=src1 EventPutSuccessCount=42\n"));
        assert!(written.contains("flume_agents_metrics,type=CHANNEL,name=ch1 ChannelSize=7\n"));
    }

    #[test]
    fn test_unreachable_server_does_not_disturb_siblings() {
        let good = serve_once("200 OK", r#"{"SOURCE.src1": {"EventPutSuccessCount": "42"}}"#);
        let bad = unreachable_url();

        let out = SharedBuf::default();
        let collector = Collector::new(config(vec![good, bad.clone()]));
        let report = collector.run(out.clone()).unwrap();

        assert_eq!(report.lines, 1);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].0, bad);
        assert!(matches!(report.failures[0].1, FetchError::Transport { .. }));

        assert!(out
            .contents()
            .contains("flume_agents_metrics,type=SOURCE,name=src1 EventPutSuccessCount=42\n"));
    }

    #[test]
    fn test_every_failure_is_reported_not_just_the_first() {
        let bad_status = serve_once("503 Service Unavailable", "");
        let bad_body = serve_once("200 OK", "not json");

        let out = SharedBuf::default();
        let collector = Collector::new(config(vec![bad_status, bad_body]));
        let report = collector.run(out.clone()).unwrap();

        assert_eq!(report.lines, 0);
        assert_eq!(report.failures.len(), 2);
        assert_eq!(out.contents(), "");
    }

    #[test]
    fn test_each_entity_becomes_one_line() {
        let url = serve_once(
            "200 OK",
            r#"{
                "SOURCE.src1": {"EventPutSuccessCount": "42", "Status": "OK"},
                "SINK.k1": {"BatchCompleteCount": "9"}
            }"#,
        );

        let out = SharedBuf::default();
        let collector = Collector::new(config(vec![url]));
        let report = collector.run(out.clone()).unwrap();

        assert_eq!(report.lines, 2);
        let written = out.contents();
        assert_eq!(written.lines().count(), 2);
        assert!(written.lines().all(|l| l.starts_with("flume_agents_metrics,")));
    }
}
