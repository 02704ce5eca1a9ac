/*!
 * Tests for ordered provider fallback
 */

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use bibscan::errors::ProviderError;
use bibscan::providers::Provider;
use bibscan::providers::mock::MockProvider;
use bibscan::providers::mymemory::MyMemory;
use bibscan::translation::ProviderChain;
use crate::common;

/// Answers every request by parsing a fixed MyMemory response body
#[derive(Debug)]
struct MyMemoryBody {
    body: &'static str,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl Provider for MyMemoryBody {
    fn name(&self) -> &str {
        "MyMemory"
    }

    async fn translate(&self, _text: &str, _source_language: &str, _target_language: &str) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        MyMemory::parse_response(self.body)
    }
}

#[tokio::test]
async fn test_translate_withSentinelFromFirstProvider_shouldWaitAndUseSecond() {
    common::init_logger();
    let first = MockProvider::rate_limited().named("first");
    let second = MockProvider::fixed("Um arcabouço para análise de imagens").named("second");
    let first_calls = first.counter();
    let second_calls = second.counter();

    let providers: Vec<Arc<dyn Provider>> = vec![Arc::new(first), Arc::new(second)];
    let chain = ProviderChain::new(providers, "en", "pt", Duration::from_millis(50));

    let start = Instant::now();
    let result = chain.translate_with_fallback("A Framework for Image Analysis").await;

    assert_eq!(result.as_deref(), Some("Um arcabouço para análise de imagens"));
    assert!(start.elapsed() >= Duration::from_millis(50));
    assert_eq!(first_calls.load(Ordering::SeqCst), 1);
    assert_eq!(second_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_translate_withSentinelBodyFromMyMemory_shouldWaitAndFallBack() {
    let sentinel_calls = Arc::new(AtomicUsize::new(0));
    let sentinel = MyMemoryBody {
        body: r#"{"responseData":{"translatedText":"PLEASE SELECT TWO DISTINCT LANGUAGES"},"responseStatus":"403"}"#,
        calls: Arc::clone(&sentinel_calls),
    };
    let fallback = MockProvider::fixed("Um arcabouço para análise de imagens").named("Google");
    let fallback_calls = fallback.counter();

    let providers: Vec<Arc<dyn Provider>> = vec![Arc::new(sentinel), Arc::new(fallback)];
    let chain = ProviderChain::new(providers, "en", "pt", Duration::from_millis(50));

    let start = Instant::now();
    let result = chain.translate_with_fallback("A Framework for Image Analysis").await;

    assert_eq!(result.as_deref(), Some("Um arcabouço para análise de imagens"));
    assert!(start.elapsed() >= Duration::from_millis(50));
    assert_eq!(sentinel_calls.load(Ordering::SeqCst), 1);
    assert_eq!(fallback_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_translate_withSentinelBodyOnly_shouldReturnNone() {
    let sentinel = MyMemoryBody {
        body: r#"{"responseData":{"translatedText":"PLEASE SELECT TWO DISTINCT LANGUAGES"}}"#,
        calls: Arc::new(AtomicUsize::new(0)),
    };
    let chain = common::mock_chain(vec![Arc::new(sentinel)]);

    assert!(chain.translate_with_fallback("A Framework for Image Analysis").await.is_none());
}

#[tokio::test]
async fn test_translate_withFirstSuccess_shouldNotWait() {
    let second = MockProvider::working();
    let second_calls = second.counter();

    let providers: Vec<Arc<dyn Provider>> = vec![Arc::new(MockProvider::fixed("Olá mundo")), Arc::new(second)];
    let chain = ProviderChain::new(providers, "en", "pt", Duration::from_secs(5));

    let start = Instant::now();
    let result = chain.translate_with_fallback("Hello world").await;

    assert_eq!(result.as_deref(), Some("Olá mundo"));
    assert!(start.elapsed() < Duration::from_secs(5));
    assert_eq!(second_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_translate_withEmptyAndIdentityResults_shouldFallThrough() {
    let chain = common::mock_chain(vec![
        Arc::new(MockProvider::fixed("   ")),
        Arc::new(MockProvider::echo()),
        Arc::new(MockProvider::working()),
    ]);

    let result = chain.translate_with_fallback("Deep Learning").await;
    assert_eq!(result.as_deref(), Some("[pt] Deep Learning"));
}

#[tokio::test]
async fn test_translate_withAllProvidersFailing_shouldReturnNone() {
    let failing = MockProvider::failing();
    let calls = failing.counter();
    let chain = common::mock_chain(vec![Arc::new(failing.clone()), Arc::new(failing)]);

    assert!(chain.translate_with_fallback("Deep Learning").await.is_none());
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_translate_withBlankText_shouldNotCallProviders() {
    let provider = MockProvider::working();
    let calls = provider.counter();
    let chain = common::mock_chain(vec![Arc::new(provider)]);

    assert!(chain.translate_with_fallback("   ").await.is_none());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_translate_withEmptyChain_shouldReturnNone() {
    let chain = common::mock_chain(Vec::new());
    assert!(chain.is_empty());
    assert!(chain.translate_with_fallback("Deep Learning").await.is_none());
}
