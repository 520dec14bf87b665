#![forbid(unsafe_code)]

//! Per-keystroke candidate matching.
//!
//! The [`Matcher`] owns the candidate pool and the pattern templates. Each
//! call to [`Matcher::complete`] rebuilds the result list from scratch:
//!
//! 1. An empty query is inactive; nothing is matched.
//! 2. Templates are instantiated and compiled in order.
//! 3. Candidates are scanned in pool order and kept when the pattern
//!    matches at byte 0, the candidate is not already in the results, and
//!    either `show_selected` is set or the candidate is not selected.
//! 4. The `max_results` cap is global: once reached, scanning stops and no
//!    further templates are tried.
//!
//! # Failure Modes
//!
//! | Failure | Behavior |
//! |---------|----------|
//! | Template fails to compile | Stop; return results gathered so far |
//! | Query contains pattern metacharacters | Interpreted as pattern syntax under [`QueryEscaping::Raw`](crate::QueryEscaping::Raw) |
//!
//! # Example
//!
//! ```
//! use ftui_completion::{CompletionConfig, Limit, Matcher, SelectionSet};
//!
//! let matcher = Matcher::new(["apple", "apricot", "banana"]);
//! let selection = SelectionSet::default();
//! let config = CompletionConfig::default();
//!
//! let results = matcher.complete("ap", &config, &selection).into_results().unwrap();
//! assert_eq!(results.as_slice(), ["apple", "apricot"]);
//!
//! let capped = config.with_max_results(Limit::AtMost(1));
//! let results = matcher.complete("ap", &capped, &selection).into_results().unwrap();
//! assert_eq!(results.as_slice(), ["apple"]);
//! ```

use std::ops::Deref;
use std::sync::Arc;

use ahash::AHashSet;
use regex::{Regex, RegexBuilder};

use crate::config::CompletionConfig;
use crate::pattern::PatternSet;
use crate::selection::SelectionSet;

/// Immutable, ordered list of candidate strings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CandidatePool {
    items: Arc<[String]>,
}

impl CandidatePool {
    #[must_use]
    pub fn new<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.items
    }
}

impl Deref for CandidatePool {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.items
    }
}

impl<T: Into<String>> FromIterator<T> for CandidatePool {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Why a query stopped producing results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Every template was scanned against every candidate.
    Exhausted,
    /// The `max_results` cap was reached.
    CapReached,
    /// The template at `template_index` did not compile; later templates
    /// were skipped.
    MalformedPattern { template_index: usize },
}

/// Ordered, duplicate-free matches for one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultList {
    entries: Vec<String>,
    termination: Termination,
}

impl Default for ResultList {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            termination: Termination::Exhausted,
        }
    }
}

impl ResultList {
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn termination(&self) -> Termination {
        self.termination
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a ResultList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Result of a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The query was empty; the list should be hidden.
    Inactive,
    /// The query was matched.
    Results(ResultList),
}

impl MatchOutcome {
    #[must_use]
    pub fn is_inactive(&self) -> bool {
        matches!(self, Self::Inactive)
    }

    #[must_use]
    pub fn results(&self) -> Option<&ResultList> {
        match self {
            Self::Inactive => None,
            Self::Results(list) => Some(list),
        }
    }

    #[must_use]
    pub fn into_results(self) -> Option<ResultList> {
        match self {
            Self::Inactive => None,
            Self::Results(list) => Some(list),
        }
    }
}

/// Matches queries against a fixed candidate pool.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    candidates: CandidatePool,
    patterns: PatternSet,
}

impl Matcher {
    /// Matcher with the default prefix template.
    #[must_use]
    pub fn new<I, T>(candidates: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            candidates: CandidatePool::new(candidates),
            patterns: PatternSet::default(),
        }
    }

    #[must_use]
    pub fn from_parts(candidates: CandidatePool, patterns: PatternSet) -> Self {
        Self {
            candidates,
            patterns,
        }
    }

    /// Replace the template list.
    #[must_use]
    pub fn with_patterns(mut self, patterns: PatternSet) -> Self {
        self.patterns = patterns;
        self
    }

    #[must_use]
    pub fn candidates(&self) -> &CandidatePool {
        &self.candidates
    }

    #[must_use]
    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    /// Templates may be appended before the first query.
    pub fn patterns_mut(&mut self) -> &mut PatternSet {
        &mut self.patterns
    }

    /// Match `query` against the pool.
    #[must_use]
    pub fn complete(
        &self,
        query: &str,
        config: &CompletionConfig,
        selection: &SelectionSet,
    ) -> MatchOutcome {
        if query.is_empty() {
            return MatchOutcome::Inactive;
        }

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "completion_query",
            query_len = query.len(),
            templates = self.patterns.len(),
            candidates = self.candidates.len()
        )
        .entered();

        let results = self.scan(query, config, selection);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            results = results.len(),
            termination = ?results.termination,
            "completion query finished"
        );

        MatchOutcome::Results(results)
    }

    fn scan(&self, query: &str, config: &CompletionConfig, selection: &SelectionSet) -> ResultList {
        let query = config.escaping.apply(query);
        let mut entries: Vec<String> = Vec::new();
        let mut seen: AHashSet<&str> = AHashSet::new();

        for (template_index, template) in self.patterns.iter().enumerate() {
            let pattern = crate::pattern::substitute(template, &query);
            let regex = match compile(&pattern, config.case_insensitive) {
                Ok(regex) => regex,
                Err(_err) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(
                        template_index,
                        pattern = %pattern,
                        error = %_err,
                        "completion template failed to compile; stopping query"
                    );
                    return ResultList {
                        entries,
                        termination: Termination::MalformedPattern { template_index },
                    };
                }
            };

            for candidate in self.candidates.iter() {
                if config.max_results.is_reached(entries.len()) {
                    return ResultList {
                        entries,
                        termination: Termination::CapReached,
                    };
                }
                if seen.contains(candidate.as_str()) {
                    continue;
                }
                if !config.show_selected && selection.is_selected(candidate) {
                    continue;
                }
                if matches_at_start(&regex, candidate) {
                    seen.insert(candidate.as_str());
                    entries.push(candidate.clone());
                }
            }
        }

        let termination = if config.max_results.is_reached(entries.len()) {
            Termination::CapReached
        } else {
            Termination::Exhausted
        };
        ResultList {
            entries,
            termination,
        }
    }
}

fn compile(pattern: &str, case_insensitive: bool) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern)
        .case_insensitive(case_insensitive)
        .build()
}

/// Anchored match: some match must begin at byte 0; trailing text is ignored.
///
/// The pattern is not wrapped in `\A(?:...)`, since wrapping can turn a
/// malformed template into a valid one.
fn matches_at_start(regex: &Regex, candidate: &str) -> bool {
    // Leftmost search: if any match starts at 0, the first one found does.
    regex.find(candidate).is_some_and(|m| m.start() == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limit::Limit;
    use crate::pattern::QueryEscaping;

    fn fruit() -> Matcher {
        Matcher::new(["apple", "apricot", "banana"])
    }

    fn run(matcher: &Matcher, query: &str, config: &CompletionConfig) -> ResultList {
        matcher
            .complete(query, config, &SelectionSet::new(Limit::Unbounded))
            .into_results()
            .expect("non-empty query is active")
    }

    #[test]
    fn empty_query_is_inactive() {
        let outcome = fruit().complete("", &CompletionConfig::default(), &SelectionSet::default());
        assert!(outcome.is_inactive());
        assert!(outcome.results().is_none());
    }

    #[test]
    fn prefix_match_in_pool_order() {
        let results = run(&fruit(), "ap", &CompletionConfig::default());
        assert_eq!(results.as_slice(), ["apple", "apricot"]);
        assert_eq!(results.termination(), Termination::Exhausted);
    }

    #[test]
    fn max_results_caps() {
        let config = CompletionConfig::default().with_max_results(Limit::AtMost(1));
        let results = run(&fruit(), "ap", &config);
        assert_eq!(results.as_slice(), ["apple"]);
        assert_eq!(results.termination(), Termination::CapReached);
    }

    #[test]
    fn zero_cap_yields_nothing() {
        let config = CompletionConfig::default().with_max_results(Limit::AtMost(0));
        let results = run(&fruit(), "a", &config);
        assert!(results.is_empty());
        assert_eq!(results.termination(), Termination::CapReached);
    }

    #[test]
    fn no_match_is_empty_results_not_inactive() {
        let outcome = fruit().complete("zz", &CompletionConfig::default(), &SelectionSet::default());
        let results = outcome.into_results().unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn anchored_not_full_string() {
        // "an" occurs inside "banana" but not at the start.
        let results = run(&fruit(), "an", &CompletionConfig::default());
        assert!(results.is_empty());
        let results = run(&fruit(), "ban", &CompletionConfig::default());
        assert_eq!(results.as_slice(), ["banana"]);
    }

    #[test]
    fn unanchored_template_still_requires_start_match() {
        let matcher = fruit().with_patterns(PatternSet::from_templates(["#@"]));
        let results = run(&matcher, "an", &CompletionConfig::default());
        assert!(results.is_empty());
    }

    #[test]
    fn case_insensitive_by_default() {
        let results = run(&fruit(), "AP", &CompletionConfig::default());
        assert_eq!(results.as_slice(), ["apple", "apricot"]);
    }

    #[test]
    fn case_sensitive_when_disabled() {
        let config = CompletionConfig::default().with_case_insensitive(false);
        let results = run(&fruit(), "AP", &config);
        assert!(results.is_empty());
    }

    #[test]
    fn later_templates_append_without_duplicates() {
        let matcher = Matcher::new(["green apple", "apple pie", "pineapple"])
            .with_patterns(PatternSet::default().with_template("^.*\\b#@"));
        let results = run(&matcher, "apple", &CompletionConfig::default());
        assert_eq!(results.as_slice(), ["apple pie", "green apple"]);
    }

    #[test]
    fn cap_is_global_across_templates() {
        let matcher = Matcher::new(["apple", "green apple", "red apple"])
            .with_patterns(PatternSet::default().with_template("^.* #@"));
        let config = CompletionConfig::default().with_max_results(Limit::AtMost(2));
        let results = run(&matcher, "apple", &config);
        assert_eq!(results.as_slice(), ["apple", "green apple"]);
        assert_eq!(results.termination(), Termination::CapReached);
    }

    #[test]
    fn duplicate_candidates_appear_once() {
        let matcher = Matcher::new(["apple", "apple", "apricot"]);
        let results = run(&matcher, "ap", &CompletionConfig::default());
        assert_eq!(results.as_slice(), ["apple", "apricot"]);
    }

    #[test]
    fn selected_excluded_by_default() {
        let mut selection = SelectionSet::new(Limit::Unbounded);
        selection.select("apple");
        let results = fruit()
            .complete("ap", &CompletionConfig::default(), &selection)
            .into_results()
            .unwrap();
        assert_eq!(results.as_slice(), ["apricot"]);
    }

    #[test]
    fn selected_kept_when_show_selected() {
        let mut selection = SelectionSet::new(Limit::Unbounded);
        selection.select("apple");
        let config = CompletionConfig::default().with_show_selected(true);
        let results = fruit().complete("ap", &config, &selection).into_results().unwrap();
        assert_eq!(results.as_slice(), ["apple", "apricot"]);
    }

    #[test]
    fn malformed_template_returns_partial_results() {
        let matcher = fruit().with_patterns(
            PatternSet::default()
                .with_template("^#@(")
                .with_template("^b"),
        );
        let results = run(&matcher, "ap", &CompletionConfig::default());
        assert_eq!(results.as_slice(), ["apple", "apricot"]);
        assert_eq!(
            results.termination(),
            Termination::MalformedPattern { template_index: 1 }
        );
    }

    #[test]
    fn malformed_query_aborts_softly() {
        let results = run(&fruit(), "ap(", &CompletionConfig::default());
        assert!(results.is_empty());
        assert_eq!(
            results.termination(),
            Termination::MalformedPattern { template_index: 0 }
        );
    }

    #[test]
    fn raw_query_metacharacters_are_live() {
        let results = run(&fruit(), "a.r", &CompletionConfig::default());
        assert_eq!(results.as_slice(), ["apricot"]);
    }

    #[test]
    fn literal_escaping_matches_text_only() {
        let matcher = Matcher::new(["a.rt", "apricot", "c++", "c#"]);
        let config = CompletionConfig::default().with_escaping(QueryEscaping::Literal);
        assert_eq!(run(&matcher, "a.r", &config).as_slice(), ["a.rt"]);
        assert_eq!(run(&matcher, "c+", &config).as_slice(), ["c++"]);
    }

    #[test]
    fn empty_pattern_set_yields_empty_results() {
        let matcher = fruit().with_patterns(PatternSet::empty());
        let results = run(&matcher, "ap", &CompletionConfig::default());
        assert!(results.is_empty());
        assert_eq!(results.termination(), Termination::Exhausted);
    }

    #[test]
    fn patterns_mut_appends() {
        let mut matcher = fruit();
        matcher.patterns_mut().push("^.*#@");
        assert_eq!(matcher.patterns().len(), 2);
        let results = run(&matcher, "nan", &CompletionConfig::default());
        assert_eq!(results.as_slice(), ["banana"]);
    }

    #[test]
    fn unicode_candidates() {
        let matcher = Matcher::new(["Émile", "émail", "email"]);
        let results = run(&matcher, "é", &CompletionConfig::default());
        assert_eq!(results.as_slice(), ["Émile", "émail"]);
    }

    #[test]
    fn pool_collects_from_iter() {
        let pool: CandidatePool = ["a", "b"].into_iter().collect();
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.as_slice()[1], "b");
    }
}
