use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::loader::Source;

pub const DEFAULT_URL: &str = "https://randomuser.me/api/";

#[derive(Debug, Parser)]
#[command(name = "roster", about = "Browse and edit a list of sample users")]
pub struct Config {
    /// Endpoint returning `{ "results": [...] }`
    #[arg(long, env = "ROSTER_URL", default_value = DEFAULT_URL)]
    pub url: String,

    /// Page to request
    #[arg(long, env = "ROSTER_PAGE", default_value_t = 1)]
    pub page: u32,

    /// Number of records to request
    #[arg(long, env = "ROSTER_RESULTS", default_value_t = 10)]
    pub results: u32,

    /// Give up on the request after this many seconds (no limit by default)
    #[arg(long, env = "ROSTER_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Load records from a JSON file instead of the network
    #[arg(long, env = "ROSTER_FILE")]
    pub file: Option<PathBuf>,

    /// Where to write the log
    #[arg(long, env = "ROSTER_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn source(&self) -> Source {
        match &self.file {
            Some(path) => Source::File(path.clone()),
            None => Source::Http {
                url: self.request_url(),
                timeout: self.timeout_secs.map(Duration::from_secs),
            },
        }
    }

    /// `url` with `page` and `results` appended as query parameters.
    pub fn request_url(&self) -> String {
        let sep = if self.url.contains('?') { '&' } else { '?' };
        format!(
            "{}{sep}page={}&results={}",
            self.url, self.page, self.results
        )
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("roster")
                .join("roster.log")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        Config::try_parse_from(std::iter::once("roster").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn default_url_requests_first_page_of_ten() {
        let cfg = parse(&["--url", DEFAULT_URL]);
        assert_eq!(
            cfg.request_url(),
            "https://randomuser.me/api/?page=1&results=10"
        );
    }

    #[test]
    fn existing_query_is_extended() {
        let cfg = parse(&["--url", "http://localhost/api?seed=x", "--results", "3"]);
        assert_eq!(
            cfg.request_url(),
            "http://localhost/api?seed=x&page=1&results=3"
        );
    }

    #[test]
    fn file_overrides_url() {
        let cfg = parse(&["--file", "people.json"]);
        assert_eq!(cfg.source(), Source::File(PathBuf::from("people.json")));
    }

    #[test]
    fn no_timeout_by_default() {
        let cfg = parse(&["--url", DEFAULT_URL]);
        match cfg.source() {
            Source::Http { timeout, .. } => assert_eq!(timeout, None),
            other => panic!("unexpected source {other:?}"),
        }
    }

    #[test]
    fn timeout_flag_is_seconds() {
        let cfg = parse(&["--url", DEFAULT_URL, "--timeout-secs", "7"]);
        match cfg.source() {
            Source::Http { timeout, .. } => assert_eq!(timeout, Some(Duration::from_secs(7))),
            other => panic!("unexpected source {other:?}"),
        }
    }

    #[test]
    fn explicit_log_file_wins() {
        let cfg = parse(&["--log-file", "/tmp/roster-test.log"]);
        assert_eq!(cfg.log_path(), PathBuf::from("/tmp/roster-test.log"));
    }
}
