use std::collections::HashMap;

use tracing::trace;

use crate::{
    decimal::core::Decimal,
    error::{EvalResult, SyntaxError},
    interpreter::core::Interpreter,
};

/// Values substituted for `$name` and `$(index)` placeholders.
///
/// Built per call and consumed by the substitution pass; nothing is retained
/// by the interpreter.
///
/// # Example
/// ```
/// use numtext::interpreter::{bindings::Bindings, core::Interpreter};
///
/// let bindings = Bindings::new().with("x", 41).with_positional([10, 20]);
/// let interpreter = Interpreter::default();
///
/// assert_eq!(interpreter.evaluate_with("$x+1", &bindings).unwrap(), 42.into());
/// assert_eq!(interpreter.evaluate_with("$(0)+$(1)", &bindings).unwrap(), 30.into());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    named:      HashMap<String, Decimal>,
    positional: Vec<Decimal>,
}

impl Bindings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named value.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Decimal>) -> Self {
        self.insert(name, value);
        self
    }

    /// Appends positional values.
    #[must_use]
    pub fn with_positional<I>(mut self, values: I) -> Self
        where I: IntoIterator,
              I::Item: Into<Decimal>
    {
        self.positional.extend(values.into_iter().map(Into::into));
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Decimal>) {
        self.named.insert(name.into(), value.into());
    }

    pub fn push(&mut self, value: impl Into<Decimal>) {
        self.positional.push(value.into());
    }

    #[must_use]
    pub const fn named(&self) -> &HashMap<String, Decimal> {
        &self.named
    }

    #[must_use]
    pub fn positional(&self) -> &[Decimal] {
        &self.positional
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.named.is_empty() && self.positional.is_empty()
    }
}

/// Rewrites every placeholder of `text` into the plain string of its value.
///
/// Each `$(expr)` is evaluated to a positional index and rewritten to the
/// canonical `$(N)`, which is then bound to `positional[N]`. Named
/// placeholders are replaced longest name first so that `$xy` is never
/// clobbered by `$x`. Placeholders without a binding are left in place for
/// the parser to reject.
///
/// # Errors
/// - `UnmatchedParenthesis` for a `$(` without its `)`.
/// - `UnresolvedPlaceholder` for a `$` inside an index expression.
/// - `InvalidPlaceholderIndex` when an index is not a whole number below the
///   positional count.
pub(crate) fn substitute(text: &str,
                         bindings: &Bindings,
                         interpreter: &Interpreter)
                         -> EvalResult<String> {
    if !text.contains('$') {
        return Ok(text.to_string());
    }

    let mut replacements = bindings.named
                                   .iter()
                                   .map(|(name, value)| (name.clone(), value.to_string()))
                                   .collect::<HashMap<_, _>>();

    let mut rewritten = rewrite_positional(text, bindings, interpreter, &mut replacements)?;

    let mut names = replacements.keys().cloned().collect::<Vec<_>>();
    names.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    for name in names {
        let placeholder = format!("${name}");
        if rewritten.contains(&placeholder) {
            let value = &replacements[&name];
            trace!(%placeholder, %value, "substituting placeholder");
            rewritten = rewritten.replace(&placeholder, value);
        }
    }

    Ok(rewritten)
}

/// Canonicalizes every `$(expr)` and records the value it stands for.
fn rewrite_positional(text: &str,
                      bindings: &Bindings,
                      interpreter: &Interpreter,
                      replacements: &mut HashMap<String, String>)
                      -> EvalResult<String> {
    let chars = text.chars().collect::<Vec<_>>();
    let mut rewritten = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != '$' || chars.get(i + 1) != Some(&'(') {
            rewritten.push(chars[i]);
            i += 1;
            continue;
        }

        let close = matching_parenthesis(&chars, i + 1)
            .ok_or(SyntaxError::UnmatchedParenthesis { position: i + 1 })?;
        let inner = &chars[i + 2..close];
        if let Some(offset) = inner.iter().position(|&c| c == '$') {
            return Err(SyntaxError::UnresolvedPlaceholder { position: i + 2 + offset }.into());
        }

        let expression = inner.iter().collect::<String>();
        let index = interpreter.evaluate_concrete(&expression)?;
        let available = bindings.positional.len();
        let slot = index.to_i64()
                        .and_then(|n| usize::try_from(n).ok())
                        .filter(|&n| n < available)
                        .ok_or_else(|| SyntaxError::InvalidPlaceholderIndex { expression:
                                                                                  expression.clone(),
                                                                              available,
                                                                              position: i })?;

        let key = format!("({slot})");
        trace!(%expression, canonical = %key, "rewrote positional placeholder");
        replacements.entry(key.clone())
                    .or_insert_with(|| bindings.positional[slot].to_string());
        rewritten.push('$');
        rewritten.push_str(&key);
        i = close + 1;
    }

    Ok(rewritten)
}

/// Index of the `)` closing the `(` at `open`.
fn matching_parenthesis(chars: &[char], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (index, &c) in chars.iter().enumerate().skip(open) {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(index);
                }
            },
            _ => {},
        }
    }
    None
}
