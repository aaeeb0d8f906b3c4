use crate::ast::Step;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A parsed path: the ordered steps from the root anchor to the last selector.
///
/// Built only by [`crate::Parser`], so the first step is always
/// [`Step::Root`] and every `Dot` or `RecursiveDescent` is followed by an
/// `Identifier` or `Wildcard`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct JsonPath {
    steps: Vec<Step>,
}

impl JsonPath {
    pub(crate) fn from_steps(steps: Vec<Step>) -> Self {
        JsonPath { steps }
    }

    /// Parses a query string.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonpath_ast::JsonPath;
    ///
    /// let path = JsonPath::parse("$..book[0]").unwrap();
    /// assert_eq!(
    ///     path.to_string(),
    ///     "Root($) -> RecursiveDescent(..) -> Identifier(book) -> ArrayIndex(0)"
    /// );
    /// ```
    pub fn parse(query: &str) -> Result<Self, crate::ParseError> {
        crate::parse(query)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// Number of steps, the root included.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step following the one at `index`, if any.
    pub fn successor(&self, index: usize) -> Option<&Step> {
        self.steps.get(index + 1)
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{}", step)?;
        }
        Ok(())
    }
}

impl FromStr for JsonPath {
    type Err = crate::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s)
    }
}

impl<'a> IntoIterator for &'a JsonPath {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl IntoIterator for JsonPath {
    type Item = Step;
    type IntoIter = std::vec::IntoIter<Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}
