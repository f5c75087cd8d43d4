use serde::Serialize;
use std::fmt;

///
/// ErrorTree
///
/// Collects validation issues by route so the caller sees every problem
/// in one pass rather than the first failure.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ErrorTree {
    issues: Vec<Issue>,
}

impl ErrorTree {
    #[must_use]
    pub const fn new() -> Self {
        Self { issues: Vec::new() }
    }

    pub fn add(&mut self, route: impl Into<String>, message: impl Into<String>) {
        self.issues.push(Issue {
            route: route.into(),
            message: message.into(),
        });
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter()
    }

    /// Ok when no issues were collected, otherwise the tree itself.
    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for issue in &self.issues {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", issue.route, issue.message)?;
            first = false;
        }

        Ok(())
    }
}

///
/// Issue
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Issue {
    pub route: String,
    pub message: String,
}

/// Append a formatted issue to an [`ErrorTree`] under a route.
#[macro_export]
macro_rules! err {
    ($errs:expr, $route:expr, $($arg:tt)*) => {
        $errs.add($route, format!($($arg)*))
    };
}
