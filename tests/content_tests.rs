//! Integration tests for the headless content client.

use pitchdeck::config::ContentConfig;
use pitchdeck::content::{ContentClient, PostQuery};

fn disabled_config() -> ContentConfig {
    ContentConfig {
        // Unroutable on purpose: a request here fails immediately, so a
        // regression that performs network I/O shows up as a test failure
        // rather than a hang.
        api_url: "http://127.0.0.1:1/wp-json/wp/v2".to_string(),
        enabled: false,
    }
}

#[test]
fn test_disabled_client_returns_none_for_posts() {
    let client = ContentClient::new(disabled_config()).unwrap();
    assert_eq!(client.fetch_posts(&PostQuery::default()), None);
}

#[test]
fn test_disabled_client_returns_none_for_pages_and_media() {
    let client = ContentClient::new(disabled_config()).unwrap();
    assert_eq!(client.fetch_page("pricing"), None);
    assert_eq!(client.fetch_media(42), None);
}

#[test]
fn test_unreachable_api_fails_soft() {
    let client = ContentClient::new(ContentConfig {
        api_url: "http://127.0.0.1:1/wp-json/wp/v2".to_string(),
        enabled: true,
    })
    .unwrap();
    // Enabled but unreachable: logged and swallowed, never propagated.
    assert_eq!(client.fetch_page("pricing"), None);
}

#[test]
fn test_post_query_renders_all_params() {
    let query = PostQuery {
        per_page: Some(10),
        page: Some(3),
        categories: vec![1, 2, 3],
    };
    let params = query.to_params();
    assert_eq!(params.len(), 3);
    assert!(params.contains(&("categories".to_string(), "1,2,3".to_string())));
}
