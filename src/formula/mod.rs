use std::fmt;

use itertools::Itertools;
use serde::Serialize;
use thiserror::Error;

pub mod charge;
pub mod normalize;
pub mod parser;
pub mod scanner;

/// The two markup regions understood by the formula dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Sub,
    Sup,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("input text is empty")]
    EmptyInput,
    #[error("subscript without normal text")]
    SubscriptWithoutElement,
    #[error("unclosed {0} tag")]
    UnclosedTag(Tag),
    #[error("closing {0} tag without opening tag")]
    UnmatchedClosingTag(Tag),
    #[error("\"{0}\" not a valid element")]
    UnknownElement(String),
}

/// One element of a formula together with its subscript, kept as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormulaPair {
    pub element: String,
    pub count: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Formula {
    pub pairs: Vec<FormulaPair>,
    pub charge: i64,
}

impl Tag {
    pub fn open(self) -> &'static str {
        match self {
            Tag::Sub => "<sub>",
            Tag::Sup => "<sup>",
        }
    }

    pub fn close(self) -> &'static str {
        match self {
            Tag::Sub => "</sub>",
            Tag::Sup => "</sup>",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Sub => write!(f, "subscript"),
            Tag::Sup => write!(f, "superscript"),
        }
    }
}

impl FormulaPair {
    pub fn new(element: impl Into<String>, count: impl Into<String>) -> Self {
        Self {
            element: element.into(),
            count: count.into(),
        }
    }
}

impl fmt::Display for FormulaPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.element, self.count)
    }
}

impl Formula {
    /// Brace-delimited pair list, e.g. `{H,2,O,1}`.
    pub fn pairs_text(&self) -> String {
        format!("{{{}}}", self.pairs.iter().join(","))
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{},{}}}", self.pairs_text(), self.charge)
    }
}
