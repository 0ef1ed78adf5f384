//! Tests for the DownloadStarterBuilder and its configuration.

use qari_dl::starter::{StarterConfig, DEFAULT_DATABASE_LABEL};
use qari_dl::{DownloadStarterBuilder, Error, JobKeyGenerator, ReciterId};
use std::sync::Arc;

mod common;
use common::helpers::*;

#[test]
fn test_builder_defaults() {
    let (starter, _) = create_test_starter();

    assert_eq!(starter.key_namespace(), "AudioDownload.DownloadKey.");
    assert_eq!(starter.database_label(), DEFAULT_DATABASE_LABEL);
}

#[test]
fn test_builder_configuration() {
    let starter = create_test_builder(RecordingDispatcher::default())
        .key_namespace("Test.Key.")
        .database_label("Timing database")
        .labels(PrefixLabels)
        .build()
        .unwrap();

    assert_eq!(starter.key_namespace(), "Test.Key.");
    assert_eq!(starter.database_label(), "Timing database");

    let job = starter.build_batch_job(&gapless_reciter(), &[9], false).unwrap();
    assert_eq!(
        job.job_key(),
        &JobKeyGenerator::new("Test.Key.").derive(ReciterId(7), 9)
    );
    assert_eq!(job.display_label(), "Name of qari_saad");

    let db = starter.build_database_job(&gapless_reciter()).unwrap();
    assert_eq!(db.display_label(), "Timing database");
}

#[test]
fn test_builder_missing_collaborators() {
    let result = DownloadStarterBuilder::new()
        .paths(StubPaths::default())
        .structure(StubStructure)
        .build();

    match result {
        Err(Error::Internal(msg)) => {
            assert!(msg.contains("sources"));
            assert!(msg.contains("dispatcher"));
            assert!(!msg.contains("paths"));
        }
        other => panic!("Expected Internal error, got {:?}", other),
    }
}

#[test]
fn test_shared_dispatcher() {
    let dispatcher = RecordingDispatcher::default();
    let shared: Arc<dyn qari_dl::Dispatcher> = Arc::new(dispatcher.clone());

    let starter = DownloadStarterBuilder::new()
        .paths(StubPaths::default())
        .sources(StubSources)
        .structure(StubStructure)
        .shared_dispatcher(shared)
        .build()
        .unwrap();

    starter.cancel_all_downloads();
    assert_eq!(dispatcher.cancels(), 1);
}

#[test]
fn test_config_debug() {
    let config = StarterConfig::default();
    let debug_str = format!("{:?}", config);

    assert!(debug_str.contains("StarterConfig"));
    assert!(debug_str.contains("key_namespace"));

    let (starter, _) = create_test_starter();
    assert!(format!("{:?}", starter).contains("DownloadStarter"));
}
