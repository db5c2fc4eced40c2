//! Rewrite rules for orphaned controller code
//!
//! Each rule is a regular expression plus a replacement string. Rules are
//! purely lexical: they match the textual shape of the dead code, not its
//! syntax tree, so every formatting assumption lives in the rule's pattern
//! and is pinned down by that rule's fixtures.
//!
//! The standard set runs in a fixed order:
//! 1. [`feature_flags::REDIRECT_BLOCK`] (rule A)
//! 2. [`feature_flags::NOT_IMPLEMENTED_BLOCK`] (rule B)
//! 3. [`helper_method::REDIRECT_HELPER`] (rule C)
//!
//! Each rule sees the output of the one before it.

pub mod feature_flags;
pub mod helper_method;

pub use feature_flags::{remove_not_implemented_blocks, remove_redirect_blocks};
pub use helper_method::remove_redirect_helper;

use crate::errors::Result;
use regex::Regex;
use std::borrow::Cow;

/// A named pattern-to-replacement rewrite
#[derive(Debug, Clone)]
pub struct RewriteRule {
    name: String,
    pattern: Regex,
    replacement: String,
}

impl RewriteRule {
    /// Build a rule from a pattern source. Fails if the pattern does not compile.
    pub fn new(name: &str, pattern: &str, replacement: &str) -> Result<Self> {
        Ok(Self {
            name: name.to_string(),
            pattern: Regex::new(pattern)?,
            replacement: replacement.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace every non-overlapping match. Borrows the input when nothing matches.
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.pattern.replace_all(text, self.replacement.as_str())
    }

    /// Like [`apply`](Self::apply), but also reports how many spans were replaced
    pub fn apply_counted<'t>(&self, text: &'t str) -> (Cow<'t, str>, usize) {
        let spans = self.pattern.find_iter(text).count();
        if spans == 0 {
            return (Cow::Borrowed(text), 0);
        }
        (self.apply(text), spans)
    }
}

/// Number of spans a single rule removed from one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub rule: String,
    pub spans: usize,
}

/// Ordered sequence of rewrite rules
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<RewriteRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<RewriteRule>) -> Self {
        Self { rules }
    }

    /// Rules A, B and C in their required order
    pub fn standard() -> Self {
        Self::new(vec![
            feature_flags::REDIRECT_BLOCK.clone(),
            feature_flags::NOT_IMPLEMENTED_BLOCK.clone(),
            helper_method::REDIRECT_HELPER.clone(),
        ])
    }

    pub fn rules(&self) -> &[RewriteRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply the rules until a pass removes nothing, returning the final text
    pub fn apply(&self, text: &str) -> String {
        self.apply_with_outcomes(text).0
    }

    /// Apply the rules in order, repeating the whole pass until nothing more
    /// matches. Span counts are summed across passes.
    ///
    /// A deletion can join the text around it into a new match for an
    /// earlier rule, so one pass is not enough for the result to be clean.
    /// Passes stop once the text no longer shrinks.
    pub fn apply_with_outcomes(&self, text: &str) -> (String, Vec<RuleOutcome>) {
        let mut current = text.to_string();
        let mut outcomes: Vec<RuleOutcome> = self
            .rules
            .iter()
            .map(|rule| RuleOutcome {
                rule: rule.name().to_string(),
                spans: 0,
            })
            .collect();

        loop {
            let before = current.len();
            let mut removed = 0;

            for (rule, outcome) in self.rules.iter().zip(outcomes.iter_mut()) {
                let (rewritten, spans) = rule.apply_counted(&current);
                if let Cow::Owned(next) = rewritten {
                    current = next;
                }
                log::debug!("rule '{}' removed {} span(s)", rule.name(), spans);
                outcome.spans += spans;
                removed += spans;
            }

            if removed == 0 {
                break;
            }
            if current.len() >= before {
                log::warn!("rewrite pass did not shrink the document, stopping");
                break;
            }
        }

        (current, outcomes)
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const END_TO_END: &str = "// Check feature flag
{
    return await CreateRedirectResponse(request, \"old\");
}
private async Task<HttpResponseData> CreateRedirectResponse(Req request, string tag)
{
    return Redirect(tag);
}
";

    #[test]
    fn test_standard_order() {
        let rule_set = RuleSet::standard();
        let names: Vec<&str> = rule_set
            .rules()
            .iter()
            .map(|r| r.name())
            .collect();
        assert_eq!(names, vec!["redirect-block", "not-implemented-block", "redirect-helper"]);
    }

    #[test]
    fn test_end_to_end_leaves_only_whitespace() {
        let cleaned = RuleSet::standard().apply(END_TO_END);
        assert!(cleaned.trim().is_empty(), "got {:?}", cleaned);
    }

    #[test]
    fn test_outcomes_report_each_rule() {
        let (_, outcomes) = RuleSet::standard().apply_with_outcomes(END_TO_END);
        let spans: Vec<usize> = outcomes.iter().map(|o| o.spans).collect();
        assert_eq!(spans, vec![1, 0, 1]);
    }

    #[test]
    fn test_clean_twice_is_noop() {
        let rules = RuleSet::standard();
        let once = rules.apply(END_TO_END);
        let twice = rules.apply(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_block_exposed_by_later_rule_is_removed() {
        // Removing the "for new" block joins the first comment line to the
        // redirect block below it.
        let source = "// Check feature flag X // Check feature flag for new\n{\n f();\n return 1;\n}\n{\n    return await CreateRedirectResponse(a);\n}\n";
        let rules = RuleSet::standard();

        let (once, outcomes) = rules.apply_with_outcomes(source);
        assert_eq!(once, "\n");
        let spans: Vec<usize> = outcomes.iter().map(|o| o.spans).collect();
        assert_eq!(spans, vec![1, 1, 0]);

        assert_eq!(rules.apply(&once), once);
    }

    #[test]
    fn test_growing_custom_rule_terminates() {
        let rules = RuleSet::new(vec![RewriteRule::new("grow", "a", "aa").unwrap()]);
        assert_eq!(rules.apply("a"), "aa");
    }

    #[test]
    fn test_unmatched_text_is_untouched() {
        let source = "public class Plain\n{\n    // Check the flag later\n    public int Value => 42;\n}\n";
        assert_eq!(RuleSet::standard().apply(source), source);
    }

    #[test]
    fn test_custom_rule_rejects_bad_pattern() {
        let err = RewriteRule::new("broken", r"(unclosed", "").unwrap_err();
        assert!(err.to_string().contains("invalid rewrite pattern"));
    }

    #[test]
    fn test_custom_rule_applies() {
        let rule = RewriteRule::new("todo", r"// TODO[^\n]*\n", "").unwrap();
        let (out, spans) = rule.apply_counted("a\n// TODO drop\nb\n");
        assert_eq!(out, "a\nb\n");
        assert_eq!(spans, 1);
    }

    #[test]
    fn test_apply_counted_borrows_on_miss() {
        let rule = RewriteRule::new("never", "zzz", "").unwrap();
        let (out, spans) = rule.apply_counted("abc");
        assert!(matches!(out, Cow::Borrowed("abc")));
        assert_eq!(spans, 0);
    }

    #[test]
    fn test_empty_rule_set_is_identity() {
        let rules = RuleSet::new(Vec::new());
        assert!(rules.is_empty());
        assert_eq!(rules.apply(END_TO_END), END_TO_END);
    }
}
