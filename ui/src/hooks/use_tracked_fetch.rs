use std::future::Future;

use providers::ProviderError;
use providers::generation::GenerationCounter;
use yew::prelude::*;

/// Tri-state for one fetch concern. `Idle` with data present means the last
/// fetch succeeded; `Error` carries the upstream message verbatim.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Error(String),
}

impl FetchStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

pub struct TrackedFetch<T> {
    pub data: Option<T>,
    pub status: FetchStatus,
}

/// Fetch hook driven by committed navigation state.
///
/// Refetches whenever `deps` change and clears the previous result first, so
/// a result for one query never flashes under another. Each invocation
/// captures a generation number; a resolution whose generation has been
/// superseded is discarded instead of applied, which keeps overlapping
/// fetches from rapid successive navigations from committing out of order.
///
/// With `enabled` false the hook holds `Idle` with no data and issues no
/// request (used while a page waits on a prerequisite, or has nothing to
/// search yet).
#[hook]
pub fn use_tracked_fetch<T, D, F, Fut>(deps: D, enabled: bool, fetch_fn: F) -> TrackedFetch<T>
where
    T: Clone + 'static,
    D: PartialEq + Clone + 'static,
    F: Fn(D) -> Fut + 'static,
    Fut: Future<Output = Result<T, ProviderError>> + 'static,
{
    let data = use_state(|| None::<T>);
    let status = use_state(FetchStatus::default);
    let generation = use_mut_ref(GenerationCounter::default);

    {
        let data = data.clone();
        let status = status.clone();
        let generation = generation.clone();

        use_effect_with((deps, enabled), move |(deps, enabled)| {
            // Supersede anything in flight, even when disabling.
            let this_generation = generation.borrow_mut().begin();

            if !*enabled {
                data.set(None);
                status.set(FetchStatus::Idle);
                return;
            }

            data.set(None);
            status.set(FetchStatus::Loading);

            let deps = deps.clone();
            yew::platform::spawn_local(async move {
                let result = fetch_fn(deps).await;
                if !generation.borrow().is_current(this_generation) {
                    tracing::debug!(
                        generation = this_generation,
                        "discarding superseded fetch result"
                    );
                    return;
                }
                match result {
                    Ok(value) => {
                        data.set(Some(value));
                        status.set(FetchStatus::Idle);
                    }
                    Err(err) => {
                        data.set(None);
                        status.set(FetchStatus::Error(err.to_string()));
                    }
                }
            });
        });
    }

    TrackedFetch { data: (*data).clone(), status: (*status).clone() }
}
