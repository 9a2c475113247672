//! Integration test: curl-backed client against a local API server, full
//! collector run, then the written dataset through the viewer session.

mod common;

use std::collections::HashMap;
use std::time::Duration;

use common::api_server::{self, Route};
use ymmcat_core::collect::{collect_to_file, CollectOptions};
use ymmcat_core::github::{lookup_latest_release, search_topic, CatalogApi, GitHubClient, ReleaseLookup, SearchLimits};
use ymmcat_core::viewer::{load_dataset, DatasetSource, Session, SortOrder};

fn search_target(topic: &str, page: u32, per_page: u32) -> String {
    format!("/search/repositories?q=topic%3A{topic}&per_page={per_page}&sort=updated&page={page}")
}

fn repo_json(owner: &str, name: &str, topics: &[&str], description: &str, updated: &str) -> String {
    let topics: Vec<String> = topics.iter().map(|t| format!("\"{t}\"")).collect();
    format!(
        r#"{{"full_name":"{owner}/{name}","name":"{name}","description":"{description}","topics":[{}],"stargazers_count":5,"updated_at":"{updated}","pushed_at":null,"license":{{"spdx_id":"MIT"}},"html_url":"https://github.com/{owner}/{name}"}}"#,
        topics.join(",")
    )
}

fn page_json(total: usize, items: &[String]) -> String {
    format!(r#"{{"total_count":{total},"items":[{}]}}"#, items.join(","))
}

fn options(topics: &[&str], per_page: u32) -> CollectOptions {
    CollectOptions {
        topics: topics.iter().map(|s| s.to_string()).collect(),
        limits: SearchLimits {
            per_page,
            max_results: 1000,
            page_delay: Duration::ZERO,
        },
        topic_delay: Duration::ZERO,
        release_delay: Duration::ZERO,
        web_base_url: "https://github.com".to_string(),
    }
}

#[test]
fn client_sends_identity_and_token() {
    let server = api_server::start(HashMap::from([(
        search_target("ymm4-plugin", 1, 100),
        Route::json(page_json(0, &[])),
    )]));
    let client = GitHubClient::new(&server.base_url, "YMM4-Plugin-Collector", Some("secret".to_string()));
    let page = client.search_page("ymm4-plugin", 1, 100).unwrap();
    assert_eq!(page.total_count, 0);

    let head = server.requests().pop().unwrap().to_lowercase();
    assert!(head.contains("user-agent: ymm4-plugin-collector"));
    assert!(head.contains("accept: application/vnd.github.v3+json"));
    assert!(head.contains("authorization: token secret"));
}

#[test]
fn release_lookup_distinguishes_absent_and_failed() {
    let server = api_server::start(HashMap::from([
        (
            "/repos/a/has/releases/latest".to_string(),
            Route::json(r#"{"tag_name":"v3.1","html_url":"https://github.com/a/has/releases/tag/v3.1"}"#),
        ),
        (
            "/repos/a/broken/releases/latest".to_string(),
            Route::status(500, "boom"),
        ),
    ]));
    let client = GitHubClient::new(&server.base_url, "ua", None);

    match lookup_latest_release(&client, "a", "has") {
        ReleaseLookup::Found(r) => assert_eq!(r.version, "v3.1"),
        other => panic!("expected Found, got {other:?}"),
    }
    assert!(matches!(lookup_latest_release(&client, "a", "none"), ReleaseLookup::Absent));
    assert!(matches!(lookup_latest_release(&client, "a", "broken"), ReleaseLookup::Failed(_)));
}

#[test]
fn pagination_over_http_keeps_partial_results_on_error() {
    let page1: Vec<String> = (0..2)
        .map(|i| repo_json("o", &format!("r{i}"), &[], "", "2024-01-01T00:00:00Z"))
        .collect();
    let server = api_server::start(HashMap::from([
        (search_target("t", 1, 2), Route::json(page_json(6, &page1))),
        (search_target("t", 2, 2), Route::status(403, "API rate limit exceeded")),
    ]));
    let client = GitHubClient::new(&server.base_url, "ua", None);
    let outcome = search_topic(
        &client,
        "t",
        SearchLimits {
            per_page: 2,
            max_results: 1000,
            page_delay: Duration::ZERO,
        },
    );
    assert_eq!(outcome.repos.len(), 2);
    let failure = outcome.failure.expect("page 2 should fail").to_string();
    assert!(failure.contains("403"));
    assert!(failure.contains("rate limit"));
}

#[test]
fn full_run_writes_dataset_the_viewer_can_load() {
    let t1 = vec![
        repo_json("alice", "Blur", &["ymm4-plugin", "effect"], "ぼかし効果", "2024-03-01T00:00:00Z"),
        repo_json("bob", "Talk", &["ymm4-plugin"], "TTS bridge", "2024-05-01T00:00:00Z"),
    ];
    let t2 = vec![
        repo_json("alice", "Blur", &["ymm-plugin"], "dup", "2024-03-01T00:00:00Z"),
        repo_json("spam", "Junk", &["ymm-plugin"], "", "2024-04-01T00:00:00Z"),
    ];
    let server = api_server::start(HashMap::from([
        (search_target("ymm4-plugin", 1, 100), Route::json(page_json(2, &t1))),
        (search_target("ymm-plugin", 1, 100), Route::json(page_json(2, &t2))),
        (
            "/repos/alice/Blur/releases/latest".to_string(),
            Route::json(r#"{"tag_name":"1.0.0","html_url":"https://github.com/alice/Blur/releases/tag/1.0.0"}"#),
        ),
    ]));

    let dir = tempfile::tempdir().unwrap();
    let manual = dir.path().join("plugins-manual.json");
    std::fs::write(
        &manual,
        r#"{
            "plugins": [
                {"id": "bob-talk", "name": "Should not replace"},
                {"id": "carol-subs", "name": "Subs", "author": "carol", "category": "text", "tags": ["テキスト"]}
            ],
            "categoryOverrides": {"bob-talk": "utility"},
            "excludeRepos": ["SPAM/junk"]
        }"#,
    )
    .unwrap();
    let output = dir.path().join("data").join("plugins.json");

    let client = GitHubClient::new(&server.base_url, "ua", None);
    let count = collect_to_file(&client, &options(&["ymm4-plugin", "ymm-plugin"], 100), &manual, &output).unwrap();
    assert_eq!(count, 3);

    // one release lookup per unique repository
    let release_calls = server
        .targets()
        .iter()
        .filter(|t| t.ends_with("/releases/latest"))
        .count();
    assert_eq!(release_calls, 3);

    let dataset = load_dataset(&DatasetSource::File(output), "ua").unwrap();
    let ids: Vec<&str> = dataset.plugins.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["alice-blur", "bob-talk", "carol-subs"]);
    let blur = &dataset.plugins[0];
    assert_eq!(blur.category, "video-effect");
    assert_eq!(blur.latest_version, "1.0.0");
    assert_eq!(blur.description, "ぼかし効果");
    let talk = &dataset.plugins[1];
    assert_eq!(talk.name, "Talk");
    assert_eq!(talk.category, "utility");
    assert_eq!(talk.download_url, "https://github.com/bob/Talk/releases");

    let mut session = Session::ready(dataset, Duration::ZERO);
    let visible: Vec<String> = session.visible().iter().map(|p| p.id.clone()).collect();
    assert_eq!(visible, vec!["bob-talk", "alice-blur", "carol-subs"]);
    session.set_sort(SortOrder::NameAsc);
    session.set_category("text");
    let visible: Vec<String> = session.visible().iter().map(|p| p.id.clone()).collect();
    assert_eq!(visible, vec!["carol-subs"]);
}

#[test]
fn viewer_loads_dataset_over_http() {
    let server = api_server::start(HashMap::from([(
        "/data/plugins.json".to_string(),
        Route::json(r#"{"lastUpdated":"2024-06-01T00:00:00.000Z","plugins":[{"id":"x-y","name":"Y","author":"x","category":"shape"}]}"#),
    )]));
    let source = DatasetSource::parse(&format!("{}/data/plugins.json", server.base_url));
    let dataset = load_dataset(&source, "ua").unwrap();
    assert_eq!(dataset.plugins.len(), 1);

    let missing = DatasetSource::parse(&format!("{}/nope.json", server.base_url));
    assert!(load_dataset(&missing, "ua").is_err());
}
