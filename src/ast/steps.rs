use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;

/// Discriminant of a [`Step`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum StepKind {
    Root,
    Identifier,
    Dot,
    RecursiveDescent,
    Wildcard,
    ArrayIndex,
    ArrayWildcard,
}

impl StepKind {
    pub fn name(&self) -> &'static str {
        match self {
            StepKind::Root => "Root",
            StepKind::Identifier => "Identifier",
            StepKind::Dot => "Dot",
            StepKind::RecursiveDescent => "RecursiveDescent",
            StepKind::Wildcard => "Wildcard",
            StepKind::ArrayIndex => "ArrayIndex",
            StepKind::ArrayWildcard => "ArrayWildcard",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One step of a parsed path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Step {
    /// Root anchor
    ///
    /// # Example
    /// ```text
    /// $
    /// ```
    Root,

    /// Member name
    ///
    /// # Example
    /// ```text
    /// $.store
    /// ```
    Identifier(String),

    /// Member access separator
    ///
    /// Always followed by an [`Step::Identifier`] or [`Step::Wildcard`].
    Dot,

    /// Member lookup at any depth
    ///
    /// Always followed by an [`Step::Identifier`] or [`Step::Wildcard`].
    ///
    /// # Example
    /// ```text
    /// $..author
    /// ```
    RecursiveDescent,

    /// Every member
    ///
    /// # Example
    /// ```text
    /// $.store.*
    /// ```
    Wildcard,

    /// Array element by position. Holds the digits as written.
    ///
    /// # Example
    /// ```text
    /// $.book[2]
    /// ```
    ArrayIndex(String),

    /// Every array element
    ///
    /// # Example
    /// ```text
    /// $.book[*]
    /// ```
    ArrayWildcard,
}

impl Step {
    pub fn kind(&self) -> StepKind {
        match self {
            Step::Root => StepKind::Root,
            Step::Identifier(_) => StepKind::Identifier,
            Step::Dot => StepKind::Dot,
            Step::RecursiveDescent => StepKind::RecursiveDescent,
            Step::Wildcard => StepKind::Wildcard,
            Step::ArrayIndex(_) => StepKind::ArrayIndex,
            Step::ArrayWildcard => StepKind::ArrayWildcard,
        }
    }

    /// Literal text of the step as it appears in rendered output.
    pub fn value(&self) -> &str {
        match self {
            Step::Root => "$",
            Step::Identifier(name) => name,
            Step::Dot => ".",
            Step::RecursiveDescent => "..",
            Step::Wildcard => "*",
            Step::ArrayIndex(digits) => digits,
            Step::ArrayWildcard => "[*]",
        }
    }

    /// Parses the index digits. `None` when the value overflows `usize`.
    pub fn index(&self) -> Option<usize> {
        match self {
            Step::ArrayIndex(digits) => digits.parse().ok(),
            _ => None,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind(), self.value())
    }
}

impl Serialize for Step {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Step", 2)?;
        state.serialize_field("kind", &self.kind())?;
        state.serialize_field("value", self.value())?;
        state.end()
    }
}
