//! Async forms of the chaining and boundary combinators.
//!
//! Each awaits exactly one upstream producer and then applies the synchronous
//! combinator. There is no fan-out, cancellation or timeout handling here;
//! those belong to the producer.

use std::future::Future;

use crate::error::Result;
use crate::outcome::Outcome;

/// Await `upstream`, then chain `next` on its payload with
/// [`Outcome::on_success`].
pub async fn on_success_async<T, U, Fut, F>(upstream: Fut, next: F) -> Outcome<U>
where
    Fut: Future<Output = Outcome<T>>,
    F: FnOnce(T) -> Outcome<U>,
{
    upstream.await.on_success(next)
}

/// Await `upstream`, then [`Outcome::value_or_raise`].
pub async fn value_or_raise_async<T, Fut>(upstream: Fut) -> Result<T>
where
    Fut: Future<Output = Outcome<T>>,
{
    upstream.await.value_or_raise()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Status;
    use futures::future;
    use std::sync::atomic::{AtomicUsize, Ordering};

    async fn load_user(id: u32) -> Outcome<String> {
        tokio::task::yield_now().await;
        match id {
            1 => Outcome::success("ada".to_string()),
            2 => Outcome::not_found(format!("user {id}")).unwrap(),
            _ => Outcome::fail("directory offline").unwrap(),
        }
    }

    #[tokio::test]
    async fn test_on_success_async_chains_after_await() {
        let calls = AtomicUsize::new(0);
        let greeting = on_success_async(load_user(1), |name| {
            calls.fetch_add(1, Ordering::SeqCst);
            Outcome::success(format!("hello {name}"))
        })
        .await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(greeting.value().map(String::as_str), Some("hello ada"));
    }

    #[tokio::test]
    async fn test_on_success_async_short_circuits() {
        let calls = AtomicUsize::new(0);
        let next = |name: String| {
            calls.fetch_add(1, Ordering::SeqCst);
            Outcome::success(name.len())
        };

        let missing = on_success_async(load_user(2), next).await;
        assert!(missing.is_not_found());
        assert_eq!(missing.error(), "user 2");

        let failed = on_success_async(load_user(3), next).await;
        assert_eq!(failed.status(), Status::Failure);
        assert_eq!(failed.error(), "directory offline");

        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_value_or_raise_async() {
        let name = value_or_raise_async(load_user(1)).await.unwrap();
        assert_eq!(name, "ada");

        let err = value_or_raise_async(load_user(3)).await.unwrap_err();
        assert_eq!(err.to_string(), "directory offline");
    }

    #[test]
    fn test_ready_futures_block_on() {
        let upstream = future::ready(Outcome::success(4));
        let doubled = tokio_test::block_on(on_success_async(upstream, |x| Outcome::success(x * 2)));
        assert_eq!(doubled.value(), Some(&8));
    }
}
