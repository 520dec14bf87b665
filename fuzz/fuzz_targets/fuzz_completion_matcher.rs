#![no_main]

use arbitrary::Arbitrary;
use ftui_completion::{
    CompletionConfig, Limit, Matcher, PatternSet, QueryEscaping, SelectionSet, Termination,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    candidates: Vec<String>,
    templates: Vec<String>,
    query: String,
    max_results: Option<u8>,
    selected: Vec<String>,
    show_selected: bool,
    literal: bool,
}

fuzz_target!(|input: Input| {
    if input.candidates.len() > 64 || input.templates.len() > 4 {
        return;
    }
    if input.templates.iter().any(|t| t.len() > 64) || input.query.len() > 32 {
        return;
    }

    let max_results = Limit::from(input.max_results.map(usize::from));
    let config = CompletionConfig::default()
        .with_max_results(max_results)
        .with_show_selected(input.show_selected)
        .with_escaping(if input.literal {
            QueryEscaping::Literal
        } else {
            QueryEscaping::Raw
        });

    let mut selection = SelectionSet::new(Limit::Unbounded);
    for s in &input.selected {
        selection.select(s);
    }

    let matcher = Matcher::new(input.candidates.clone())
        .with_patterns(PatternSet::from_templates(input.templates));
    let outcome = matcher.complete(&input.query, &config, &selection);

    let Some(results) = outcome.into_results() else {
        assert!(input.query.is_empty());
        return;
    };

    if let Some(n) = max_results.get() {
        assert!(results.len() <= n);
    }
    if let Termination::MalformedPattern { template_index } = results.termination() {
        assert!(template_index < matcher.patterns().len());
    }
    for (i, entry) in results.iter().enumerate() {
        assert!(input.candidates.iter().any(|c| c == entry));
        assert!(!results.iter().skip(i + 1).any(|other| other == entry));
        if !input.show_selected {
            assert!(!selection.is_selected(entry));
        }
    }
});
