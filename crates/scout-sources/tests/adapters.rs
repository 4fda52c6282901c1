//! Integration tests for the `YouTube` and Reddit adapters using wiremock.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{bearer_token, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use scout_sources::{build_http_client, RedditClient, SourceError, SourceOutcome, YouTubeClient};

fn youtube(server: &MockServer) -> YouTubeClient {
    let client = build_http_client(5, "scout-test/0.1").expect("http client");
    YouTubeClient::new(client, "yt-key", &server.uri()).expect("youtube client")
}

fn reddit(server: &MockServer) -> RedditClient {
    let client = build_http_client(5, "scout-test/0.1").expect("http client");
    RedditClient::new(client, &server.uri()).expect("reddit client")
}

fn titles(outcome: SourceOutcome) -> Vec<String> {
    outcome.into_titles().into_iter().map(|t| t.title).collect()
}

fn video_items(titles: &[&str]) -> serde_json::Value {
    let items: Vec<_> = titles
        .iter()
        .enumerate()
        .map(|(i, title)| {
            json!({
                "kind": "youtube#searchResult",
                "id": { "kind": "youtube#video", "videoId": format!("v{i}") },
                "snippet": { "title": title }
            })
        })
        .collect();
    json!({ "kind": "youtube#searchListResponse", "items": items })
}

// ---------------------------------------------------------------------------
// YouTube trend search
// ---------------------------------------------------------------------------

#[tokio::test]
async fn trending_titles_sends_video_search_and_extracts_titles() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/youtube/v3/search"))
        .and(query_param("q", "new parents grow subscribers"))
        .and(query_param("type", "video"))
        .and(query_param("maxResults", "3"))
        .and(query_param("part", "snippet"))
        .and(header("x-goog-api-key", "yt-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(video_items(&[
            "Newborn hacks",
            "Sleep training 101",
            "Dad vlog",
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = youtube(&server)
        .trending_titles("new parents grow subscribers", 3)
        .await;

    assert_eq!(
        titles(outcome),
        vec!["Newborn hacks", "Sleep training 101", "Dad vlog"]
    );
}

#[tokio::test]
async fn trending_titles_degrades_to_empty_on_quota_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/youtube/v3/search"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": { "code": 403, "message": "quotaExceeded" }
        })))
        .mount(&server)
        .await;

    let outcome = youtube(&server).trending_titles("anything", 3).await;

    assert!(
        matches!(
            outcome,
            SourceOutcome::Unavailable(SourceError::UnexpectedStatus { status: 403, .. })
        ),
        "got: {outcome:?}"
    );
    assert!(outcome.into_titles().is_empty());
}

#[tokio::test]
async fn trending_titles_degrades_to_empty_on_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/youtube/v3/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let outcome = youtube(&server).trending_titles("anything", 3).await;

    assert!(
        matches!(
            outcome,
            SourceOutcome::Unavailable(SourceError::Deserialize { .. })
        ),
        "got: {outcome:?}"
    );
}

#[tokio::test]
async fn trending_titles_timeout_error_does_not_expose_api_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/youtube/v3/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(video_items(&["late"]))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;
    let client = build_http_client(1, "scout-test/0.1").expect("http client");
    let youtube = YouTubeClient::new(client, "yt-key", &server.uri()).expect("youtube client");

    let outcome = youtube.trending_titles("anything", 3).await;

    let SourceOutcome::Unavailable(err) = outcome else {
        panic!("expected timeout, got: {outcome:?}");
    };
    assert!(matches!(err, SourceError::Http(_)), "got: {err:?}");
    let rendered = format!("{err} {err:?}");
    assert!(!rendered.contains("yt-key"), "key leaked: {rendered}");
}

// ---------------------------------------------------------------------------
// YouTube channel listing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn channel_titles_resolves_first_match_then_lists_newest_uploads() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/youtube/v3/search"))
        .and(query_param("type", "channel"))
        .and(query_param("q", "ChannelA"))
        .and(query_param("maxResults", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {
                    "id": { "kind": "youtube#channel", "channelId": "UC-first" },
                    "snippet": { "title": "ChannelA", "channelId": "UC-first" }
                },
                {
                    "id": { "kind": "youtube#channel", "channelId": "UC-second" },
                    "snippet": { "title": "ChannelA Clips", "channelId": "UC-second" }
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/youtube/v3/search"))
        .and(query_param("channelId", "UC-first"))
        .and(query_param("order", "date"))
        .and(query_param("type", "video"))
        .and(query_param("maxResults", "3"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(video_items(&["Latest", "Older"])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let outcome = youtube(&server).channel_titles("ChannelA", 3).await;

    assert_eq!(titles(outcome), vec!["Latest", "Older"]);
}

#[tokio::test]
async fn channel_titles_without_match_skips_listing_call() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/youtube/v3/search"))
        .and(query_param("type", "channel"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/youtube/v3/search"))
        .and(query_param("type", "video"))
        .respond_with(ResponseTemplate::new(200).set_body_json(video_items(&["never"])))
        .expect(0)
        .mount(&server)
        .await;

    let outcome = youtube(&server).channel_titles("NoSuchChannel", 3).await;

    assert!(!outcome.is_unavailable());
    assert!(outcome.into_titles().is_empty());
}

#[tokio::test]
async fn channel_titles_listing_failure_degrades_to_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/youtube/v3/search"))
        .and(query_param("type", "channel"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{ "id": { "channelId": "UC-1" }, "snippet": { "title": "C" } }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/youtube/v3/search"))
        .and(query_param("channelId", "UC-1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let outcome = youtube(&server).channel_titles("C", 3).await;

    assert!(outcome.is_unavailable());
    assert!(outcome.into_titles().is_empty());
}

// ---------------------------------------------------------------------------
// Reddit hot listing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn hot_titles_uses_bearer_token_and_limit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/r/parenting/hot"))
        .and(bearer_token("tok-1"))
        .and(query_param("limit", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "Listing",
            "data": {
                "after": "t3_x",
                "children": [
                    { "kind": "t3", "data": { "title": "Toddler won't sleep" } },
                    { "kind": "t3", "data": { "title": "Best stroller?" } }
                ]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = reddit(&server).hot_titles("parenting", "tok-1", 3).await;

    assert_eq!(titles(outcome), vec!["Toddler won't sleep", "Best stroller?"]);
}

#[tokio::test]
async fn hot_titles_degrades_to_empty_for_banned_community() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/r/gone/hot"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "reason": "banned" })))
        .mount(&server)
        .await;

    let outcome = reddit(&server).hot_titles("gone", "tok-1", 3).await;

    assert!(
        matches!(
            outcome,
            SourceOutcome::Unavailable(SourceError::UnexpectedStatus { status: 404, .. })
        ),
        "got: {outcome:?}"
    );
}
