// tests/batch_driver_test.rs

#![cfg(unix)]

mod common;

use common::*;
use std::{sync::atomic::AtomicBool, time::Duration};
use vidbatch::{
    downloader::{BilibiliJob, run_batch},
    models::FailureKind,
};

#[tokio::test]
async fn test_server_error_on_one_page_does_not_stop_the_batch() {
    let mut server = mockito::Server::new_async().await;
    let dir = tempfile::tempdir().unwrap();
    let ffmpeg = fake_ffmpeg_ok(dir.path());

    let mut mocks = Vec::new();
    for (path, title) in [("/video/BV1a", "第一个"), ("/video/BV1c", "第三个")] {
        let stem = path.trim_start_matches("/video/");
        let video_url = format!("{}/{}/v.m4s", server.url(), stem);
        let audio_url = format!("{}/{}/a.m4s", server.url(), stem);
        mocks.push(
            server
                .mock("GET", path)
                .with_body(video_page(Some(title), &video_url, &audio_url))
                .expect(1)
                .create_async()
                .await,
        );
        mocks.push(
            server
                .mock("GET", format!("/{}/v.m4s", stem).as_str())
                .with_body("v")
                .expect(1)
                .create_async()
                .await,
        );
        mocks.push(
            server
                .mock("GET", format!("/{}/a.m4s", stem).as_str())
                .with_body("a")
                .expect(1)
                .create_async()
                .await,
        );
    }
    mocks.push(
        server
            .mock("GET", "/video/BV1b")
            .with_status(500)
            .expect(1)
            .create_async()
            .await,
    );

    let job = BilibiliJob::new(test_settings(dir.path(), &ffmpeg)).unwrap();
    let targets = vec![
        target("a", format!("{}/video/BV1a", server.url())),
        target("b", format!("{}/video/BV1b", server.url())),
        target("c", format!("{}/video/BV1c", server.url())),
    ];
    let stats = run_batch(&job, &targets, Duration::ZERO, &AtomicBool::new(false)).await;

    for m in &mocks {
        m.assert_async().await;
    }
    assert_eq!(stats.total, 3);
    assert_eq!((stats.succeeded, stats.failed, stats.skipped), (2, 1, 0));
    assert!(!stats.interrupted);
    assert_eq!(stats.failures.len(), 1);
    assert_eq!(stats.failures[0].index, 2);
    assert_eq!(stats.failures[0].kind, FailureKind::Network);
    assert!(stats.failures[0].url.ends_with("/video/BV1b"));

    let outputs = files_in(&dir.path().join("out"));
    assert_eq!(outputs.len(), 2);
    assert!(outputs.iter().any(|p| p.ends_with("第一个.mp4")));
    assert!(outputs.iter().any(|p| p.ends_with("第三个.mp4")));
}
