use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use lexiscan::application::ports::LlmClientError;
use lexiscan::infrastructure::llm::{retry_rate_limited, RetryPolicy, Sleep};

/// Records requested delays instead of waiting them out.
#[derive(Default)]
struct RecordingSleep {
    delays: Mutex<Vec<Duration>>,
}

#[async_trait::async_trait]
impl Sleep for RecordingSleep {
    async fn sleep(&self, duration: Duration) {
        self.delays.lock().unwrap().push(duration);
    }
}

#[tokio::test]
async fn given_two_rate_limits_then_success_when_retrying_then_waits_5_then_10_seconds() {
    let sleep = RecordingSleep::default();
    let attempts = AtomicUsize::new(0);

    let result = retry_rate_limited(RetryPolicy::default(), &sleep, || {
        let attempt = attempts.fetch_add(1, Ordering::SeqCst);
        async move {
            if attempt < 2 {
                Err(LlmClientError::RateLimited("slow down".to_string()))
            } else {
                Ok("analysis text".to_string())
            }
        }
    })
    .await;

    assert_eq!(result.unwrap(), "analysis text");
    assert_eq!(attempts.load(Ordering::SeqCst), 3);
    assert_eq!(
        *sleep.delays.lock().unwrap(),
        vec![Duration::from_secs(5), Duration::from_secs(10)]
    );
}

#[tokio::test]
async fn given_persistent_rate_limits_when_retrying_then_overloaded_after_three_attempts() {
    let sleep = RecordingSleep::default();
    let attempts = AtomicUsize::new(0);

    let result: Result<String, _> = retry_rate_limited(RetryPolicy::default(), &sleep, || {
        attempts.fetch_add(1, Ordering::SeqCst);
        async { Err(LlmClientError::RateLimited("429 quota exceeded".to_string())) }
    })
    .await;

    // The raw provider error never leaks out of an exhausted retry loop.
    assert!(matches!(result, Err(LlmClientError::Overloaded)));
    assert_eq!(attempts.load(Ordering::SeqCst), 3);
    assert_eq!(
        *sleep.delays.lock().unwrap(),
        vec![Duration::from_secs(5), Duration::from_secs(10)]
    );
}

#[tokio::test]
async fn given_non_rate_limit_error_when_retrying_then_aborts_after_single_attempt() {
    let sleep = RecordingSleep::default();
    let attempts = AtomicUsize::new(0);

    let result: Result<String, _> = retry_rate_limited(RetryPolicy::default(), &sleep, || {
        attempts.fetch_add(1, Ordering::SeqCst);
        async {
            Err(LlmClientError::ApiRequestFailed(
                "400: API key not valid".to_string(),
            ))
        }
    })
    .await;

    match result {
        Err(LlmClientError::ApiRequestFailed(detail)) => {
            assert!(detail.contains("API key not valid"));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(attempts.load(Ordering::SeqCst), 1);
    assert!(sleep.delays.lock().unwrap().is_empty());
}

#[tokio::test]
async fn given_immediate_success_when_retrying_then_no_backoff_happens() {
    let sleep = RecordingSleep::default();

    let result = retry_rate_limited(RetryPolicy::default(), &sleep, || async {
        Ok::<_, LlmClientError>("first try".to_string())
    })
    .await;

    assert_eq!(result.unwrap(), "first try");
    assert!(sleep.delays.lock().unwrap().is_empty());
}
