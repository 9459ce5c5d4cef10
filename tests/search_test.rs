//! Search orchestration: cache-first lookups, append semantics, the
//! single-flight guard, image-search delegation, and detail views with
//! best-effort translation. Providers are mocked at the port traits.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;
use mockall::Sequence;

use sagasu::modules::cache::{MemoryStore, TtlCache};
use sagasu::modules::lists::MemoryCookieJar;
use sagasu::modules::provider::{
    ImageLookup, ImageUpload, MetadataProvider, SearchPage, Translator,
};
use sagasu::modules::search::{SearchOrchestrator, SearchOutcome, SearchService, SearchSession};
use sagasu::{AnimeDetails, AnimeSummary, AppConfig, AppError, AppResult};

mock! {
    Provider {}

    #[async_trait]
    impl MetadataProvider for Provider {
        async fn search(&self, page: &SearchPage) -> AppResult<Vec<AnimeSummary>>;
        async fn full_details(&self, id: i64) -> AppResult<AnimeDetails>;
    }
}

mock! {
    Lookup {}

    #[async_trait]
    impl ImageLookup for Lookup {
        async fn identify(&self, upload: ImageUpload) -> AppResult<Option<i64>>;
    }
}

mock! {
    Trans {}

    #[async_trait]
    impl Translator for Trans {
        async fn translate(&self, text: &str) -> AppResult<String>;
    }
}

fn summary(id: i64, title: &str) -> AnimeSummary {
    AnimeSummary {
        id,
        title: title.to_string(),
        synopsis: Some("synopsis".to_string()),
        episodes: Some(12),
        status: Some("Finished Airing".to_string()),
        score: Some(7.5),
        image_url: "https://img.example/cover.jpg".to_string(),
    }
}

fn details(id: i64, synopsis: &str) -> AnimeDetails {
    AnimeDetails {
        id,
        title: "Title".to_string(),
        synopsis: Some(synopsis.to_string()),
        episodes: Some(12),
        status: Some("Finished Airing".to_string()),
        score: Some(7.5),
        image_url: String::new(),
        genres: vec!["Action".to_string()],
        characters: vec!["A".to_string()],
        trailer_youtube_id: None,
    }
}

fn no_lookup() -> MockLookup {
    MockLookup::new()
}

fn passthrough_translator() -> MockTrans {
    let mut translator = MockTrans::new();
    translator
        .expect_translate()
        .returning(|text| Ok(text.to_string()));
    translator
}

fn orchestrator(
    provider: MockProvider,
    lookup: MockLookup,
    translator: MockTrans,
) -> SearchOrchestrator<MemoryStore> {
    let config = AppConfig::default();
    SearchOrchestrator::new(
        Arc::new(provider),
        Arc::new(lookup),
        Arc::new(translator),
        TtlCache::new(MemoryStore::new(), config.cache_ttl),
        &config,
    )
}

#[tokio::test]
async fn cache_hit_skips_the_network() {
    let mut provider = MockProvider::new();
    provider
        .expect_search()
        .times(1)
        .returning(|_| Ok(vec![summary(1, "Cowboy Bebop")]));

    let orchestrator = orchestrator(provider, no_lookup(), passthrough_translator());

    let mut first = SearchSession::new();
    let outcome = orchestrator
        .search_by_text(&mut first, "bebop", Vec::new())
        .await
        .unwrap();
    assert!(matches!(outcome, SearchOutcome::Replaced(_)));

    // Same query, page and (empty) genre set: served from cache, the
    // mock's times(1) proves no second call went out.
    let mut second = SearchSession::new();
    let outcome = orchestrator
        .search_by_text(&mut second, "bebop", Vec::new())
        .await
        .unwrap();
    match outcome {
        SearchOutcome::Replaced(items) => assert_eq!(items[0].title, "Cowboy Bebop"),
        other => panic!("expected replaced results, got {:?}", other),
    }
}

#[tokio::test]
async fn append_requests_the_following_page() {
    let mut provider = MockProvider::new();
    provider
        .expect_search()
        .withf(|page| page.page == 1)
        .times(1)
        .returning(|_| Ok(vec![summary(1, "first")]));
    provider
        .expect_search()
        .withf(|page| page.page == 2)
        .times(1)
        .returning(|_| Ok(vec![summary(2, "second")]));

    let orchestrator = orchestrator(provider, no_lookup(), passthrough_translator());
    let mut session = SearchSession::new();

    let outcome = orchestrator
        .search_by_text(&mut session, "naruto", vec![2, 1])
        .await
        .unwrap();
    assert!(matches!(outcome, SearchOutcome::Replaced(_)));

    let outcome = orchestrator.load_next_page(&mut session).await.unwrap();
    match outcome {
        SearchOutcome::Appended(items) => assert_eq!(items[0].title, "second"),
        other => panic!("expected appended results, got {:?}", other),
    }
    assert_eq!(session.page(), 2);
}

#[tokio::test]
async fn fresh_empty_and_exhausted_append_are_distinct() {
    let mut provider = MockProvider::new();
    let mut seq = Sequence::new();
    provider
        .expect_search()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(Vec::new()));
    provider
        .expect_search()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(vec![summary(1, "hit")]));
    provider
        .expect_search()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(Vec::new()));

    let orchestrator = orchestrator(provider, no_lookup(), passthrough_translator());
    let mut session = SearchSession::new();

    // No results on a fresh query: the explicit no-results state.
    let outcome = orchestrator
        .search_by_text(&mut session, "zz-nothing", Vec::new())
        .await
        .unwrap();
    assert_eq!(outcome, SearchOutcome::Empty);

    // A populated query whose second page is empty: silent exhaustion.
    orchestrator
        .search_by_text(&mut session, "something", Vec::new())
        .await
        .unwrap();
    let outcome = orchestrator.load_next_page(&mut session).await.unwrap();
    assert_eq!(outcome, SearchOutcome::Exhausted);
}

#[tokio::test]
async fn failed_fetch_releases_the_inflight_flag() {
    let mut provider = MockProvider::new();
    let mut seq = Sequence::new();
    provider
        .expect_search()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Err(AppError::ExternalServiceError("down".to_string())));
    provider
        .expect_search()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(vec![summary(1, "recovered")]));

    let orchestrator = orchestrator(provider, no_lookup(), passthrough_translator());
    let mut session = SearchSession::new();

    let result = orchestrator
        .search_by_text(&mut session, "naruto", Vec::new())
        .await;
    assert!(result.is_err());
    // The guaranteed-release guard cleared the flag despite the failure.
    assert!(!session.is_loading());

    let outcome = orchestrator
        .search_by_text(&mut session, "naruto", Vec::new())
        .await
        .unwrap();
    assert!(matches!(outcome, SearchOutcome::Replaced(_)));
}

#[tokio::test]
async fn failed_append_leaves_the_page_counter_alone() {
    let mut provider = MockProvider::new();
    let mut seq = Sequence::new();
    provider
        .expect_search()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(vec![summary(1, "first")]));
    provider
        .expect_search()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Err(AppError::ExternalServiceError("down".to_string())));
    provider
        .expect_search()
        .withf(|page| page.page == 2)
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(vec![summary(2, "second")]));

    let orchestrator = orchestrator(provider, no_lookup(), passthrough_translator());
    let mut session = SearchSession::new();

    orchestrator
        .search_by_text(&mut session, "naruto", Vec::new())
        .await
        .unwrap();
    assert!(orchestrator.load_next_page(&mut session).await.is_err());
    assert_eq!(session.page(), 1);

    // The retried append asks for page 2 again, not page 3.
    let outcome = orchestrator.load_next_page(&mut session).await.unwrap();
    assert!(matches!(outcome, SearchOutcome::Appended(_)));
}

#[tokio::test]
async fn image_search_without_match_reports_empty() {
    let mut lookup = MockLookup::new();
    lookup.expect_identify().times(1).returning(|_| Ok(None));

    let orchestrator = orchestrator(MockProvider::new(), lookup, passthrough_translator());
    let mut session = SearchSession::new();

    let outcome = orchestrator
        .search_by_image(
            &mut session,
            ImageUpload {
                file_name: "frame.png".to_string(),
                bytes: vec![0x89, 0x50],
            },
        )
        .await
        .unwrap();
    assert_eq!(outcome, SearchOutcome::Empty);
}

#[tokio::test]
async fn image_match_delegates_to_text_search() {
    let mut lookup = MockLookup::new();
    lookup
        .expect_identify()
        .times(1)
        .returning(|_| Ok(Some(20)));

    let mut provider = MockProvider::new();
    provider
        .expect_search()
        .withf(|page| page.query == "20" && page.page == 1 && page.genre_ids.is_empty())
        .times(1)
        .returning(|_| Ok(vec![summary(20, "Naruto")]));

    let orchestrator = orchestrator(provider, lookup, passthrough_translator());
    let mut session = SearchSession::new();

    let outcome = orchestrator
        .search_by_image(
            &mut session,
            ImageUpload {
                file_name: "frame.png".to_string(),
                bytes: vec![1, 2, 3],
            },
        )
        .await
        .unwrap();
    assert!(matches!(outcome, SearchOutcome::Replaced(_)));
    assert_eq!(session.query(), "20");
}

#[tokio::test]
async fn translation_failure_keeps_the_original_synopsis() {
    let mut provider = MockProvider::new();
    provider
        .expect_full_details()
        .times(1)
        .returning(|id| Ok(details(id, "untranslated text")));

    let mut translator = MockTrans::new();
    translator
        .expect_translate()
        .times(1)
        .returning(|_| Err(AppError::ExternalServiceError("offline".to_string())));

    let orchestrator = orchestrator(provider, no_lookup(), translator);

    let view = orchestrator.view_details(7).await.unwrap();
    assert_eq!(view.synopsis.as_deref(), Some("untranslated text"));
}

#[tokio::test]
async fn details_cache_the_canonical_text_and_retranslate_per_view() {
    let mut provider = MockProvider::new();
    provider
        .expect_full_details()
        .times(1)
        .returning(|id| Ok(details(id, "canonical")));

    let mut translator = MockTrans::new();
    let mut seq = Sequence::new();
    translator
        .expect_translate()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Err(AppError::ExternalServiceError("offline".to_string())));
    translator
        .expect_translate()
        .withf(|text| text == "canonical")
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok("translated".to_string()));

    let orchestrator = orchestrator(provider, no_lookup(), translator);

    // First view: fetched, cached, translation fails -> canonical text.
    let first = orchestrator.view_details(7).await.unwrap();
    assert_eq!(first.synopsis.as_deref(), Some("canonical"));

    // Second view: detail cache hit (times(1) above), and the translator
    // receives the canonical text again, not a translated copy.
    let second = orchestrator.view_details(7).await.unwrap();
    assert_eq!(second.synopsis.as_deref(), Some("translated"));
}

#[tokio::test]
async fn failed_detail_fetch_caches_nothing() {
    let mut provider = MockProvider::new();
    provider
        .expect_full_details()
        .times(2)
        .returning(|_| Err(AppError::NotFound("gone".to_string())));

    let orchestrator = orchestrator(provider, no_lookup(), passthrough_translator());

    assert!(orchestrator.view_details(404).await.is_err());
    // Still an error: nothing was cached by the failed attempt.
    assert!(orchestrator.view_details(404).await.is_err());
}

#[tokio::test]
async fn service_records_history_for_successful_searches() {
    let mut provider = MockProvider::new();
    provider
        .expect_search()
        .returning(|_| Ok(vec![summary(1, "hit")]));

    let orchestrator = orchestrator(provider, no_lookup(), passthrough_translator());
    let mut service = SearchService::new(orchestrator, Arc::new(MemoryCookieJar::new()));

    service.search("naruto", Vec::new()).await.unwrap();
    service.search("bleach", Vec::new()).await.unwrap();
    service.search("naruto", Vec::new()).await.unwrap();

    assert_eq!(service.history(), ["naruto", "bleach"]);
}

#[tokio::test]
async fn genre_only_search_records_the_filter_marker() {
    let mut provider = MockProvider::new();
    provider
        .expect_search()
        .withf(|page| page.query.is_empty() && page.genre_ids == [1, 4])
        .times(1)
        .returning(|_| Ok(vec![summary(1, "hit")]));

    let orchestrator = orchestrator(provider, no_lookup(), passthrough_translator());
    let mut service = SearchService::new(orchestrator, Arc::new(MemoryCookieJar::new()));

    service.search("", vec![1, 4]).await.unwrap();
    assert_eq!(service.history(), ["[Genre Filter]"]);
}

#[tokio::test]
async fn rejected_empty_search_touches_neither_network_nor_history() {
    let orchestrator = orchestrator(MockProvider::new(), no_lookup(), passthrough_translator());
    let mut service = SearchService::new(orchestrator, Arc::new(MemoryCookieJar::new()));

    assert!(service.search("   ", Vec::new()).await.is_err());
    assert!(service.history().is_empty());
}

#[tokio::test]
async fn image_search_records_its_marker() {
    let mut lookup = MockLookup::new();
    lookup.expect_identify().returning(|_| Ok(None));

    let orchestrator = orchestrator(MockProvider::new(), lookup, passthrough_translator());
    let mut service = SearchService::new(orchestrator, Arc::new(MemoryCookieJar::new()));

    service
        .search_by_image(ImageUpload {
            file_name: "f.png".to_string(),
            bytes: vec![1],
        })
        .await
        .unwrap();

    assert_eq!(service.history(), ["[Image Search]"]);
}

#[tokio::test]
async fn service_favorites_deduplicate_by_id() {
    let orchestrator = orchestrator(MockProvider::new(), no_lookup(), passthrough_translator());
    let mut service = SearchService::new(orchestrator, Arc::new(MemoryCookieJar::new()));

    assert!(service.add_favorite(&summary(1, "A")));
    assert!(!service.add_favorite(&summary(1, "B")));

    assert_eq!(service.favorites().len(), 1);
    assert_eq!(service.favorites()[0].title, "A");
}
