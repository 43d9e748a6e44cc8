use regex::Regex;
use std::collections::HashSet;

/// One exclusion glob compiled to an anchored regular expression.
///
/// Glob syntax:
/// - `*` matches any run of characters within a single package segment
///   (no dots)
/// - `**` matches any run of characters across segments (dots included)
/// - everything else matches literally
///
/// Examples:
/// - `java.util.Collection` matches only `java.util.Collection`
/// - `java.util.*` matches `java.util.List` but not `java.util.concurrent.Future`
/// - `java.util.**` matches both
#[derive(Debug, Clone)]
pub struct ExclusionRule {
    source: String,
    regex: Regex,
}

impl ExclusionRule {
    pub fn new(glob: &str) -> Self {
        let pattern = glob_to_regex(glob);
        // glob_to_regex escapes every metacharacter it passes through, so
        // the translated pattern is always valid
        let regex = Regex::new(&pattern)
            .expect("translated glob pattern is always a valid regex");
        Self {
            source: glob.to_string(),
            regex,
        }
    }

    /// The glob string this rule was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether this rule matches the fully-qualified type name in its
    /// entirety (anchored, never a substring match).
    pub fn matches(&self, token: &str) -> bool {
        self.regex.is_match(token)
    }
}

/// A compiled, deduplicated set of exclusion rules.
///
/// Immutable once compiled; safe to share read-only across parallel scans.
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    rules: Vec<ExclusionRule>,
}

impl ExclusionSet {
    /// Compile a collection of glob strings. Duplicate glob strings collapse
    /// to a single rule; ordering carries no significance.
    pub fn compile<I, S>(globs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut rules = Vec::new();
        for glob in globs {
            let glob = glob.as_ref();
            if seen.insert(glob.to_string()) {
                rules.push(ExclusionRule::new(glob));
            }
        }
        Self { rules }
    }

    /// Whether at least one rule matches the token. Short-circuits on the
    /// first match; rule order never changes the result.
    pub fn is_excluded(&self, token: &str) -> bool {
        self.rules.iter().any(|rule| rule.matches(token))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Translate a glob to an anchored regex pattern.
///
/// The translation is total: every input string, however unusual, produces a
/// valid pattern that matches candidates in their entirety. Backslashes, dots
/// and all other regex metacharacters are escaped to literal matches.
fn glob_to_regex(glob: &str) -> String {
    let mut pattern = String::with_capacity(glob.len() + 8);
    pattern.push('^');
    let mut chars = glob.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => pattern.push_str(r"\\"),
            '.' => pattern.push_str(r"\."),
            '*' => {
                if chars.peek() == Some(&'*') {
                    chars.next();
                    pattern.push_str(".*");
                } else {
                    pattern.push_str("[^.]*");
                }
            }
            '^' | '$' | '+' | '?' | '(' | ')' | '[' | ']' | '{' | '}' | '|' => {
                pattern.push('\\');
                pattern.push(ch);
            }
            _ => pattern.push(ch),
        }
    }
    pattern.push('$');
    pattern
}
