//! Non-fatal findings collected while building the model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a non-fatal finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// First parameter of a method is neither the class pointer nor the context handle
    ImplausibleReceiver,
    /// Constructor does not return its owning class
    MismatchedConstructor,
    /// Class-pointer return without ownership annotation
    UnspecifiedReturnOwnership,
}

impl DiagnosticKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticKind::ImplausibleReceiver => "implausible_receiver",
            DiagnosticKind::MismatchedConstructor => "mismatched_constructor",
            DiagnosticKind::UnspecifiedReturnOwnership => "unspecified_return_ownership",
        }
    }
}

/// A single warning tied to a function of a class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub class: String,
    pub function: String,
    pub message: String,
}

impl Diagnostic {
    pub fn new(
        kind: DiagnosticKind,
        class: impl Into<String>,
        function: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            class: class.into(),
            function: function.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "warning[{}] {}::{}: {}",
            self.kind.as_str(),
            self.class,
            self.function,
            self.message
        )
    }
}

/// Warnings in the order they were produced
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning and log it
    pub fn push(&mut self, diagnostic: Diagnostic) {
        tracing::warn!("{}", diagnostic);
        self.items.push(diagnostic);
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.items.extend(other.items);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    pub fn of_kind(&self, kind: DiagnosticKind) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter().filter(move |d| d.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
