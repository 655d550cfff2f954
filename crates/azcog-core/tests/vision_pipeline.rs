//! Integration test: vision folder run against a local mock of the analyze endpoint.

mod common;

use azcog_core::credentials::EndpointKey;
use azcog_core::http::HttpClient;
use azcog_core::vision::{self, VisionClient};
use common::mock_server::{MockServer, Route};
use std::fs;
use tempfile::tempdir;

const CAT_ANALYSIS: &str = r#"{
    "categories": [{"name": "animal_cat", "score": 0.99}],
    "tags": [{"name": "cat", "confidence": 0.99}, {"name": "indoor", "confidence": 0.9}],
    "description": {"tags": ["cat"], "captions": [{"text": "a cat sitting on a windowsill", "confidence": 0.71}]},
    "objects": [
        {"rectangle": {"x": 10, "y": 20, "w": 100, "h": 80}, "object": "cat", "confidence": 0.93},
        {"rectangle": {"x": 0, "y": 0, "w": 50, "h": 50}, "object": "window", "confidence": 0.61}
    ],
    "color": {"dominantColors": ["White"], "accentColor": "A2752C", "isBwImg": false, "isBWImg": false},
    "requestId": "00000000-0000-0000-0000-000000000000",
    "modelVersion": "2021-05-01"
}"#;

fn client(server: &MockServer) -> VisionClient {
    VisionClient::new(
        EndpointKey {
            key: "test-key".to_string(),
            endpoint: server.base_url.clone(),
        },
        HttpClient::default(),
    )
}

#[test]
fn images_are_renamed_with_collision_suffixes() {
    let server = MockServer::start(vec![Route::new("POST", "/vision/v3.2/analyze", 200, CAT_ANALYSIS)]);
    let images = tempdir().unwrap();
    fs::write(images.path().join("IMG_0001.jpg"), b"first image bytes").unwrap();
    fs::write(images.path().join("IMG_0002.jpg"), b"second image bytes").unwrap();

    let mut echoed = Vec::new();
    let run = vision::run_folder(&client(&server), images.path(), &mut |l: &str| {
        echoed.push(l.to_string())
    })
    .expect("run_folder");

    let saved: Vec<&str> = run.saved.iter().map(|(_, s)| s.as_str()).collect();
    assert_eq!(saved, vec!["cat.jpg", "cat_1.jpg"]);
    assert!(run.skipped.is_empty());

    let out = images.path().join("analysis").join("updated_images");
    assert_eq!(fs::read(out.join("cat.jpg")).unwrap(), b"first image bytes");
    assert_eq!(fs::read(out.join("cat_1.jpg")).unwrap(), b"second image bytes");
    // Sources are copied, not moved.
    assert!(images.path().join("IMG_0001.jpg").exists());

    let report = fs::read_to_string(images.path().join("analysis").join("analysis_results.txt")).unwrap();
    assert!(report.contains("Processing image: IMG_0001.jpg\n"));
    assert!(report.contains("  - Object: cat, Confidence: 0.93, Rectangle: x=10, y=20, w=100, h=80\n"));
    assert!(report.contains(" Image saved as: cat_1.jpg\n"));
    assert_eq!(echoed.first().map(String::as_str), Some("Processing image: IMG_0001.jpg"));

    let requests = server.requests();
    assert_eq!(requests.len(), 2);
    let first = &requests[0];
    assert_eq!(first.method, "POST");
    assert!(first.path.contains("visualFeatures="));
    assert_eq!(first.header("Ocp-Apim-Subscription-Key"), Some("test-key"));
    assert_eq!(first.header("Content-Type"), Some("application/octet-stream"));
    assert_eq!(first.body, b"first image bytes");
}

#[test]
fn rejected_image_is_skipped() {
    let server = MockServer::start(vec![Route::new(
        "POST",
        "/vision/v3.2/analyze",
        400,
        r#"{"error":{"code":"InvalidImageFormat","message":"Input data is not a valid image."}}"#,
    )]);
    let images = tempdir().unwrap();
    fs::write(images.path().join("notes.txt"), b"plain text").unwrap();

    let run = vision::run_folder(&client(&server), images.path(), &mut |_: &str| {}).expect("run_folder");
    assert_eq!(run.skipped, vec!["notes.txt".to_string()]);
    assert!(run.saved.is_empty());

    let report = fs::read_to_string(&run.report_path).unwrap();
    assert_eq!(
        report,
        "Processing image: notes.txt\n  Skipped: Invalid image or unsupported format. (Input data is not a valid image.)\n\n"
    );
    let out_entries = fs::read_dir(&run.output_dir).unwrap().count();
    assert_eq!(out_entries, 0);
}
