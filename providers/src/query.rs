/// The committed search parameters for a page, derived from the navigable
/// location. The URL is the single source of truth for these; the text
/// currently sitting in a search box never feeds fetches directly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryState {
    /// Committed search term. `None` means the parameter was absent from the
    /// URL; pages decide whether that means "use a default sample term" or
    /// "nothing to search yet".
    pub q: Option<String>,
    /// 1-based page number. Absent, unparseable, or non-positive values all
    /// coerce to 1.
    pub page: u32,
    /// Optional record id that switches a page from list to detail view.
    pub id: Option<String>,
}

impl QueryState {
    /// Parses a location search string (with or without the leading `?`).
    /// The search term is read from `q`.
    pub fn from_search(search: &str) -> Self {
        Self::from_search_keyed(search, "q")
    }

    /// Parses a location search string, reading the search term from
    /// `term_param` (the profile pages use `username`/`handle` instead of
    /// `q`).
    pub fn from_search_keyed(search: &str, term_param: &str) -> Self {
        let raw = search.strip_prefix('?').unwrap_or(search);
        let mut state = Self { q: None, page: 1, id: None };
        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            if key == term_param {
                state.q = Some(value.into_owned());
            } else if key == "page" {
                state.page = match value.parse::<u32>() {
                    Ok(page) if page >= 1 => page,
                    _ => 1,
                };
            } else if key == "id" {
                state.id = Some(value.into_owned());
            }
        }
        state
    }

    /// The term driving fetches on pages that substitute a sample term when
    /// the URL carries none. Returns the term plus whether it is the
    /// fallback (so results can be labeled as sample results).
    pub fn term_or_default<'a>(&'a self, default: &'a str) -> (&'a str, bool) {
        match self.q.as_deref() {
            Some(q) if !q.is_empty() => (q, false),
            _ => (default, true),
        }
    }
}

/// What an empty trimmed submission does on a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmptySubmit {
    /// Refuse the submit entirely (profile pages).
    Ignore,
    /// Commit "no query", navigating back to the page's default view
    /// (sample results or headlines).
    ResetToDefault,
}

/// Decides what a search-box submission commits. `None` is a no-op (no
/// navigation, no fetch); `Some(commit)` is emitted, where an inner `None`
/// clears the committed term back to the page's default view.
pub fn submit_commit(
    buffer: &str,
    committed: Option<&str>,
    empty_submit: EmptySubmit,
) -> Option<Option<String>> {
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return match empty_submit {
            EmptySubmit::Ignore => None,
            // Only worth a navigation if we aren't already on the default.
            EmptySubmit::ResetToDefault => committed.is_some().then_some(None),
        };
    }
    if Some(trimmed) == committed {
        return None;
    }
    Some(Some(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_params_resolve_to_defaults() {
        let state = QueryState::from_search("");
        assert_eq!(state, QueryState { q: None, page: 1, id: None });
    }

    #[test]
    fn full_search_string_round_trips() {
        let state = QueryState::from_search("?q=dune%20part%20two&page=3&id=tt1160419");
        assert_eq!(state.q.as_deref(), Some("dune part two"));
        assert_eq!(state.page, 3);
        assert_eq!(state.id.as_deref(), Some("tt1160419"));
    }

    #[test]
    fn invalid_page_coerces_to_one() {
        assert_eq!(QueryState::from_search("?q=a&page=abc").page, 1);
        assert_eq!(QueryState::from_search("?q=a&page=0").page, 1);
        assert_eq!(QueryState::from_search("?q=a&page=-2").page, 1);
    }

    #[test]
    fn keyed_term_param_is_respected() {
        let state = QueryState::from_search_keyed("?handle=tourist", "handle");
        assert_eq!(state.q.as_deref(), Some("tourist"));
        // `q` is not the term param here, so it is ignored.
        let state = QueryState::from_search_keyed("?q=tourist", "handle");
        assert_eq!(state.q, None);
    }

    #[test]
    fn parsing_is_deterministic_for_unchanged_input() {
        // Hooks compare the parsed state to decide whether to refetch; equal
        // inputs must produce equal states.
        let a = QueryState::from_search("?q=rust&page=2");
        let b = QueryState::from_search("?q=rust&page=2");
        assert_eq!(a, b);
    }

    #[test]
    fn empty_submit_is_a_no_op_under_ignore() {
        assert_eq!(submit_commit("", None, EmptySubmit::Ignore), None);
        assert_eq!(submit_commit("   ", Some("tourist"), EmptySubmit::Ignore), None);
    }

    #[test]
    fn empty_submit_resets_only_when_a_term_is_committed() {
        assert_eq!(submit_commit("", Some("dune"), EmptySubmit::ResetToDefault), Some(None));
        // Already on the default view; nothing to navigate to.
        assert_eq!(submit_commit("  ", None, EmptySubmit::ResetToDefault), None);
    }

    #[test]
    fn resubmitting_the_committed_term_is_a_no_op() {
        assert_eq!(submit_commit(" dune ", Some("dune"), EmptySubmit::ResetToDefault), None);
    }

    #[test]
    fn a_new_term_commits_trimmed() {
        assert_eq!(
            submit_commit("  dune part two ", Some("dune"), EmptySubmit::Ignore),
            Some(Some("dune part two".to_string()))
        );
    }

    #[test]
    fn empty_term_falls_back_to_default() {
        let state = QueryState::from_search("?q=");
        let (term, is_default) = state.term_or_default("Minecraft");
        assert_eq!(term, "Minecraft");
        assert!(is_default);

        let state = QueryState::from_search("?q=Oppenheimer");
        let (term, is_default) = state.term_or_default("Minecraft");
        assert_eq!(term, "Oppenheimer");
        assert!(!is_default);
    }
}
