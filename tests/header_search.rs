use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;

use navsearch::{
	CatalogClient, Collection, CollectionHits, CollectionSource, Generation, HeaderSearch,
	PanelState, RemoteError, RemoteOptions, SearchScope, SearchTuning,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> CatalogClient {
	CatalogClient::new(&RemoteOptions {
		base_url: format!("{}/api", server.uri()),
		..RemoteOptions::default()
	})
	.unwrap()
}

fn envelope(data: serde_json::Value) -> ResponseTemplate {
	ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": data }))
}

fn fast_tuning(scope: SearchScope) -> SearchTuning {
	SearchTuning {
		debounce: Duration::from_millis(20),
		scope,
		..SearchTuning::default()
	}
}

/// Current time on the tokio clock, so paused tests see virtual time.
fn now() -> Instant {
	tokio::time::Instant::now().into_std()
}

/// Wait out the debounce window and issue whatever is pending.
async fn fire_pending(search: &mut HeaderSearch) {
	while let Some(deadline) = search.next_deadline() {
		tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await;
		search.poll(now());
	}
}

#[tokio::test]
async fn client_sends_query_limit_and_first_page() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/api/items"))
		.and(query_param("q", "desk lamp"))
		.and(query_param("limit", "8"))
		.and(query_param("page", "1"))
		.respond_with(envelope(json!([
			{ "_id": 7, "name": "Desk lamp", "price": 24.0, "stock": 3 }
		])))
		.expect(1)
		.mount(&server)
		.await;

	let hits = client_for(&server)
		.fetch(Collection::Items, "desk lamp", 8)
		.await
		.unwrap();

	let CollectionHits::Items(items) = hits else {
		panic!("expected item hits");
	};
	assert_eq!(items.len(), 1);
	assert_eq!(items[0].id, "7");
	assert_eq!(items[0].price, Some(24.0));
	assert_eq!(items[0].extra["stock"], json!(3));
}

#[tokio::test]
async fn unsuccessful_envelope_is_rejected() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/api/sellers"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({
			"success": false,
			"message": "search unavailable",
		})))
		.mount(&server)
		.await;

	let err = client_for(&server)
		.fetch(Collection::Sellers, "acme", 8)
		.await
		.unwrap_err();

	assert!(matches!(
		err,
		RemoteError::Rejected {
			collection: Collection::Sellers,
			..
		}
	));
	assert!(err.to_string().contains("search unavailable"));
}

#[tokio::test]
async fn server_error_and_garbage_body_are_distinguished() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/api/items"))
		.respond_with(ResponseTemplate::new(503))
		.mount(&server)
		.await;
	Mock::given(method("GET"))
		.and(path("/api/sellers"))
		.respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
		.mount(&server)
		.await;
	let client = client_for(&server);

	let status = client.fetch(Collection::Items, "x", 8).await.unwrap_err();
	assert!(matches!(status, RemoteError::Status { .. }));

	let decode = client.fetch(Collection::Sellers, "x", 8).await.unwrap_err();
	assert!(matches!(decode, RemoteError::Decode { .. }));
}

#[tokio::test]
async fn failing_collection_does_not_blank_the_other() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/api/items"))
		.respond_with(envelope(json!([{ "id": "i1", "name": "Armchair" }])))
		.mount(&server)
		.await;
	Mock::given(method("GET"))
		.and(path("/api/sellers"))
		.respond_with(ResponseTemplate::new(500))
		.mount(&server)
		.await;

	let source: Arc<dyn CollectionSource> = Arc::new(client_for(&server));
	let mut search = HeaderSearch::new(source, fast_tuning(SearchScope::All)).unwrap();
	search.on_input_changed("armchair", now());
	fire_pending(&mut search).await;
	search.settle().await;

	let results = search.results().unwrap();
	assert!(!results.loading);
	assert_eq!(results.item_count(), 1);
	assert_eq!(results.sellers, Some(Vec::new()));
	assert_eq!(search.panel(), PanelState::Open);
}

#[tokio::test]
async fn scoped_search_only_queries_its_collection() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/api/sellers"))
		.respond_with(envelope(json!([{ "_id": "s1", "shopName": "Acme" }])))
		.expect(1)
		.mount(&server)
		.await;
	Mock::given(method("GET"))
		.and(path("/api/items"))
		.respond_with(envelope(json!([])))
		.expect(0)
		.mount(&server)
		.await;

	let source: Arc<dyn CollectionSource> = Arc::new(client_for(&server));
	let mut search = HeaderSearch::new(source, fast_tuning(SearchScope::Sellers)).unwrap();
	search.on_input_changed("acme", now());
	fire_pending(&mut search).await;
	search.settle().await;

	let results = search.results().unwrap();
	assert_eq!(results.items, None);
	let sellers = results.sellers.as_ref().unwrap();
	assert_eq!(sellers[0].name.as_deref(), Some("Acme"));
}

/// Answers every collection after a per-query delay on the tokio clock.
struct DelayedSource {
	delays: Vec<(&'static str, Duration)>,
}

#[async_trait]
impl CollectionSource for DelayedSource {
	async fn fetch(
		&self,
		collection: Collection,
		text: &str,
		_limit: usize,
	) -> Result<CollectionHits, RemoteError> {
		let delay = self
			.delays
			.iter()
			.find(|(query, _)| *query == text)
			.map(|(_, delay)| *delay)
			.unwrap_or_default();
		tokio::time::sleep(delay).await;
		Ok(match collection {
			Collection::Items => {
				CollectionHits::Items(vec![serde_json::from_value(json!({ "id": text })).unwrap()])
			}
			Collection::Sellers => CollectionHits::Sellers(Vec::new()),
		})
	}
}

#[tokio::test(start_paused = true)]
async fn slow_superseded_response_never_replaces_newer_results() {
	let source = Arc::new(DelayedSource {
		delays: vec![("pho", Duration::from_secs(5))],
	});
	let mut search = HeaderSearch::new(source, SearchTuning::default()).unwrap();
	let started = tokio::time::Instant::now();

	search.on_input_changed("pho", now());
	fire_pending(&mut search).await;
	search.on_input_changed("phone", now());
	fire_pending(&mut search).await;
	search.settle().await;
	assert!(started.elapsed() < Duration::from_secs(5));

	// The "pho" answers land while the clock jumps past their delay.
	tokio::time::sleep(Duration::from_secs(10)).await;
	assert!(!search.pump_results());

	let results = search.results().unwrap();
	assert_eq!(results.generation, Generation(2));
	let ids: Vec<&str> = results
		.items
		.iter()
		.flatten()
		.map(|item| item.id.as_str())
		.collect();
	assert_eq!(ids, vec!["phone"]);
}
