use std::future::Future;

use futures::future::join_all;

use crate::ProviderError;

/// Awaits a set of secondary lookups together and substitutes the default
/// value for any that fail. A failed secondary lookup is logged and degrades
/// that one slot; it never fails the view that issued the fan-out.
pub async fn join_defaulting<T, F>(futures: Vec<F>, context: &str) -> Vec<T>
where
    T: Default,
    F: Future<Output = Result<T, ProviderError>>,
{
    join_all(futures)
        .await
        .into_iter()
        .map(|result| match result {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(%err, context, "secondary lookup failed, using default");
                T::default()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_default_without_dropping_successes() {
        let futures: Vec<_> = (0..5)
            .map(|i| async move {
                if i == 1 || i == 3 {
                    Err(ProviderError::upstream("boom"))
                } else {
                    Ok((i + 1) * 10)
                }
            })
            .collect();

        let settled = futures::executor::block_on(join_defaulting(futures, "test"));
        // All five slots are present, with the two failures defaulted.
        assert_eq!(settled, vec![10, 0, 30, 0, 50]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let futures: Vec<std::future::Ready<Result<u32, ProviderError>>> = vec![];
        let settled = futures::executor::block_on(join_defaulting(futures, "test"));
        assert!(settled.is_empty());
    }
}
