use std::rc::Rc;

use providers::codeforces::{CodeforcesClient, ProblemMap};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::state::{ProblemsetCache, State};

thread_local! {
    // Stable identity for the degraded-mode catalog so hook deps comparing
    // by pointer don't churn.
    static EMPTY_CATALOG: Rc<ProblemMap> = Rc::new(ProblemMap::new());
}

pub struct ProblemsetHandle {
    /// `None` until the catalog fetch settles one way or the other.
    pub catalog: Option<Rc<ProblemMap>>,
    /// True once a failed fetch poisoned the cache; the catalog is then the
    /// shared empty map and rating/tag charts come back empty.
    pub degraded: bool,
}

/// Access to the once-per-app problemset catalog. The first consumer
/// triggers the fetch; everyone after reads the cached value synchronously.
/// A failed fetch poisons the cache (no retry) rather than blocking the
/// rest of the page.
#[hook]
pub fn use_problemset() -> ProblemsetHandle {
    let (state, dispatch) = use_store::<State>();

    {
        let dispatch = dispatch.clone();
        use_effect_with((), move |_| {
            let mut started = false;
            dispatch.reduce_mut(|state| started = state.problemset.begin_fetch());
            if !started {
                return;
            }
            yew::platform::spawn_local(async move {
                let result = CodeforcesClient::new().problemset().await;
                if let Err(err) = &result {
                    tracing::warn!(%err, "problemset fetch failed, poisoning cache");
                }
                dispatch.reduce_mut(|state| state.problemset.settle(result));
            });
        });
    }

    match &state.problemset {
        ProblemsetCache::Empty | ProblemsetCache::Loading => {
            ProblemsetHandle { catalog: None, degraded: false }
        }
        ProblemsetCache::Ready(catalog) => {
            ProblemsetHandle { catalog: Some(catalog.clone()), degraded: false }
        }
        ProblemsetCache::Poisoned => ProblemsetHandle {
            catalog: Some(EMPTY_CATALOG.with(Rc::clone)),
            degraded: true,
        },
    }
}
