use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use qari_dl::dispatch::{CancelSignal, Dispatcher};
use qari_dl::resolve::{AudioSourceResolver, LabelLookup, PathResolver, QuranStructure};
use qari_dl::utils::parse_url;
use qari_dl::{DownloadStarter, DownloadStarterBuilder, Error, JobDescriptor, Reciter, ReciterId, Result, Url};
use tracing_subscriber::EnvFilter;

// Common test constants
pub const TEST_BASE_DIR: &str = "/storage/audio";
pub const TEST_AUDIO_HOST: &str = "https://audio.example.org";
pub const TEST_DATABASE_HOST: &str = "https://databases.example.org";

/// Verse counts of the first five suras.
pub const TEST_SURA_LENGTHS: [u16; 5] = [7, 286, 200, 176, 120];

/// Installs a test subscriber honoring `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// === Reciter Helpers ===

/// Gapless reciter with id 7 stored under `/saad`.
pub fn gapless_reciter() -> Reciter {
    Reciter::new(7, "qari_saad", "/saad", true)
}

/// Non-gapless reciter with id 12 stored under `/husary`.
pub fn gapped_reciter() -> Reciter {
    Reciter::new(12, "qari_husary", "/husary", false)
}

/// A reciter none of the stub collaborators know about.
pub fn unknown_reciter() -> Reciter {
    Reciter::new(999, "qari_unknown", "/unknown", true)
}

pub fn database_url_for(id: u32) -> String {
    format!("{}/{}.zip", TEST_DATABASE_HOST, id)
}

// === Collaborator Stubs ===

/// Path resolver with a fixed base and per-reciter databases.
#[derive(Debug, Clone)]
pub struct StubPaths {
    pub base: PathBuf,
    pub databases: HashMap<ReciterId, String>,
}

impl Default for StubPaths {
    fn default() -> Self {
        let mut databases = HashMap::new();
        databases.insert(ReciterId(7), database_url_for(7));
        Self {
            base: PathBuf::from(TEST_BASE_DIR),
            databases,
        }
    }
}

impl PathResolver for StubPaths {
    fn base_audio_directory(&self) -> Result<PathBuf> {
        Ok(self.base.clone())
    }

    fn database_url(&self, reciter: &Reciter) -> Result<Url> {
        if reciter.id == unknown_reciter().id {
            return Err(Error::UnknownReciter(reciter.id));
        }
        match self.databases.get(&reciter.id) {
            Some(url) => parse_url(url),
            None => Err(Error::NoDatabaseAvailable(reciter.id)),
        }
    }
}

/// Source resolver serving every reciter except [`unknown_reciter`].
#[derive(Debug, Clone, Default)]
pub struct StubSources;

impl AudioSourceResolver for StubSources {
    fn source_url(&self, reciter: &Reciter) -> Result<Url> {
        if reciter.id == unknown_reciter().id {
            return Err(Error::UnknownReciter(reciter.id));
        }
        parse_url(&format!("{}{}/", TEST_AUDIO_HOST, reciter.relative_path))
    }
}

/// Source resolver returning a malformed URL.
#[derive(Debug, Clone, Default)]
pub struct BrokenSources;

impl AudioSourceResolver for BrokenSources {
    fn source_url(&self, reciter: &Reciter) -> Result<Url> {
        parse_url(&reciter.relative_path)
    }
}

/// Quran structure that only knows the first five suras.
#[derive(Debug, Clone, Default)]
pub struct StubStructure;

impl QuranStructure for StubStructure {
    fn unit_length(&self, sura: u16) -> Option<u16> {
        let index = usize::from(sura).checked_sub(1)?;
        TEST_SURA_LENGTHS.get(index).copied()
    }
}

/// Labels prefixed so tests can tell them apart from raw keys.
#[derive(Debug, Clone, Default)]
pub struct PrefixLabels;

impl LabelLookup for PrefixLabels {
    fn display_name(&self, name_key: &str) -> String {
        format!("Name of {}", name_key)
    }
}

/// Dispatcher recording what it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingDispatcher {
    jobs: Arc<Mutex<Vec<JobDescriptor>>>,
    cancels: Arc<AtomicUsize>,
}

impl RecordingDispatcher {
    pub fn jobs(&self) -> Vec<JobDescriptor> {
        self.jobs.lock().expect("jobs lock poisoned").clone()
    }

    pub fn cancels(&self) -> usize {
        self.cancels.load(Ordering::SeqCst)
    }
}

impl Dispatcher for RecordingDispatcher {
    fn submit(&self, job: JobDescriptor) {
        self.jobs.lock().expect("jobs lock poisoned").push(job);
    }

    fn cancel_all(&self, _signal: CancelSignal) {
        self.cancels.fetch_add(1, Ordering::SeqCst);
    }
}

// === Starter Helpers ===

/// Creates a builder with every stub collaborator wired in.
pub fn create_test_builder(dispatcher: RecordingDispatcher) -> DownloadStarterBuilder {
    DownloadStarterBuilder::new()
        .paths(StubPaths::default())
        .sources(StubSources)
        .structure(StubStructure)
        .dispatcher(dispatcher)
}

/// Creates a starter and the dispatcher it submits to.
pub fn create_test_starter() -> (DownloadStarter, RecordingDispatcher) {
    init_tracing();
    let dispatcher = RecordingDispatcher::default();
    let starter = create_test_builder(dispatcher.clone())
        .build()
        .expect("Failed to build test starter");
    (starter, dispatcher)
}

// === Assertion Helpers ===

/// Asserts that a result failed with `InvalidSelection`.
pub fn assert_invalid_selection<T: std::fmt::Debug>(result: Result<T>) {
    match result {
        Err(Error::InvalidSelection(_)) => {}
        other => panic!("Expected InvalidSelection, got {:?}", other),
    }
}
