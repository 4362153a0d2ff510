use crate::config::FinderConfig;
use crate::error::FinderError;
use crate::fetchers::{PageSource, RequestFetcher};
use crate::model::ScrapeOutcome;
use crate::pipelines::recipe::scrape_recipe;
use crate::storage::{IngestStatus, Repository};
use async_trait::async_trait;
use log::{debug, error, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

/// Courtesy pause between requests to the recipe site
#[async_trait]
pub trait Throttle: Send + Sync {
    async fn pause(&self);
}

/// Sleeps for the same duration every time
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay {
    delay: Duration,
}

impl FixedDelay {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl Throttle for FixedDelay {
    async fn pause(&self) {
        if !self.delay.is_zero() {
            debug!("Waiting {:?} before next item", self.delay);
            sleep(self.delay).await;
        }
    }
}

/// Drives a list of food names through scrape and ingest, one at a time
pub struct BatchRunner {
    source: Box<dyn PageSource>,
    repository: Repository,
    throttle: Arc<dyn Throttle>,
    failures_path: Option<PathBuf>,
}

impl BatchRunner {
    pub fn new(
        source: Box<dyn PageSource>,
        repository: Repository,
        throttle: Arc<dyn Throttle>,
    ) -> Self {
        Self {
            source,
            repository,
            throttle,
            failures_path: None,
        }
    }

    /// Write failed names to `path` at the end of a run that had failures
    pub fn with_failures_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.failures_path = Some(path.into());
        self
    }

    pub fn from_config(config: &FinderConfig) -> Result<Self, FinderError> {
        let fetcher = RequestFetcher::from_config(config)?;
        let repository = Repository::from_config(config)?;
        let throttle = Arc::new(FixedDelay::new(config.request_delay()));

        Ok(Self::new(Box::new(fetcher), repository, throttle)
            .with_failures_path(&config.failures_path))
    }

    /// Ingest every name in order and return the names that failed.
    ///
    /// A failing item never stops the batch. The throttle pauses once after
    /// every item, successful or not.
    pub async fn run(&self, names: &[String]) -> Result<Vec<String>, FinderError> {
        let mut failures = Vec::new();

        for (index, name) in names.iter().enumerate() {
            info!("[{}/{}] {}", index + 1, names.len(), name);
            if !self.process(name).await {
                failures.push(name.clone());
            }
            self.throttle.pause().await;
        }

        if failures.is_empty() {
            info!("All {} items ingested", names.len());
        } else {
            warn!("{} of {} items failed", failures.len(), names.len());
            if let Some(path) = &self.failures_path {
                write_failures(path, &failures)?;
                info!("Failed names written to {}", path.display());
            }
        }

        Ok(failures)
    }

    /// Scrape and store one name; `false` when it should be retried later
    async fn process(&self, name: &str) -> bool {
        let record = match scrape_recipe(self.source.as_ref(), name).await {
            ScrapeOutcome::Found(record) => record,
            ScrapeOutcome::FetchFailed { .. }
            | ScrapeOutcome::NotFound
            | ScrapeOutcome::ExtractionFailed(_) => return false,
        };

        match self.repository.ingest(&record) {
            Ok(IngestStatus::Stored { .. }) | Ok(IngestStatus::AlreadyPresent) => true,
            Err(e) => {
                error!("[{}] storage failed, transaction rolled back: {}", name, e);
                false
            }
        }
    }
}

/// Read food names, one per line, skipping blank lines
pub fn load_menu(path: &Path) -> Result<Vec<String>, FinderError> {
    let content = fs::read_to_string(path)?;
    Ok(parse_menu(&content))
}

pub fn parse_menu(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Newline-delimited list of names for a later retry
pub fn write_failures(path: &Path, failures: &[String]) -> Result<(), FinderError> {
    let content: String = failures.iter().map(|name| format!("{name}\n")).collect();
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_menu_skips_blank_lines() {
        let menu = "김치찌개\n\n  된장찌개  \n\t\n비빔밥";
        assert_eq!(parse_menu(menu), vec!["김치찌개", "된장찌개", "비빔밥"]);
    }

    #[test]
    fn test_load_menu_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menu.txt");
        fs::write(&path, "잡채\r\n\r\n불고기\r\n").unwrap();

        assert_eq!(load_menu(&path).unwrap(), vec!["잡채", "불고기"]);
    }

    #[test]
    fn test_load_menu_missing_file() {
        let result = load_menu(Path::new("/nonexistent/menu.txt"));
        assert!(matches!(result, Err(FinderError::Io(_))));
    }

    #[test]
    fn test_write_failures_one_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("failures.txt");
        write_failures(&path, &["갈비찜".to_string(), "떡볶이".to_string()]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "갈비찜\n떡볶이\n");
    }

    #[tokio::test(start_paused = true)]
    async fn test_fixed_delay_sleeps() {
        let start = tokio::time::Instant::now();
        FixedDelay::new(Duration::from_secs(1)).pause().await;
        assert!(start.elapsed() >= Duration::from_secs(1));
    }
}
