// SPDX-FileCopyrightText: 2026 Tessera Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Classified errors carrying an explicit recoverability flag.
//!
//! Every failure flowing through the engine lifecycle is an [`EngineError`]:
//! a message, a `recoverable` flag telling callers whether the operation that
//! produced it may reasonably be retried, and an optional wrapped cause that
//! stays inspectable through the standard `source()` chain.

use std::error::Error as StdError;
use std::io;

use thiserror::Error;

/// A failure with an explicit recoverable/non-recoverable classification.
///
/// Recoverability is advisory metadata for callers; this type performs no
/// retries itself. Wrapping never swallows the underlying cause -- it stays
/// reachable via [`EngineError::chain`] and [`EngineError::find_cause`].
#[derive(Debug, Error)]
#[error("{message}")]
pub struct EngineError {
    message: String,
    recoverable: bool,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl EngineError {
    /// Create a new error with an explicit recoverability flag.
    ///
    /// Every call yields a distinct value, even for identical messages.
    pub fn new(message: impl Into<String>, recoverable: bool) -> Self {
        Self {
            message: message.into(),
            recoverable,
            source: None,
        }
    }

    /// Create a new error wrapping `source` as its cause.
    ///
    /// The cause remains discoverable through [`EngineError::chain`] and
    /// downcasting, so callers can still match on the original failure.
    pub fn with_source(
        message: impl Into<String>,
        recoverable: bool,
        source: impl Into<Box<dyn StdError + Send + Sync>>,
    ) -> Self {
        Self {
            message: message.into(),
            recoverable,
            source: Some(source.into()),
        }
    }

    /// Classify an arbitrary failure, deciding recoverability from its cause
    /// chain.
    ///
    /// The rule set is fixed: timeout-like I/O failures (`TimedOut`,
    /// `WouldBlock`, `Interrupted`) and elapsed deadlines
    /// ([`tokio::time::error::Elapsed`]) are recoverable; an already
    /// classified [`EngineError`] anywhere in the chain keeps its own flag;
    /// everything else is non-recoverable. The original failure is preserved
    /// as the wrapped cause.
    pub fn classify(err: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        let source: Box<dyn StdError + Send + Sync> = err.into();
        let cause: &(dyn StdError + 'static) = source.as_ref();
        let recoverable = recoverable_cause(cause);
        Self {
            message: source.to_string(),
            recoverable,
            source: Some(source),
        }
    }

    /// Whether the operation that produced this error may be retried.
    pub fn recoverable(&self) -> bool {
        self.recoverable
    }

    /// Iterate the wrap chain, starting with this error itself.
    pub fn chain(&self) -> Chain<'_> {
        Chain {
            next: Some(self as &(dyn StdError + 'static)),
        }
    }

    /// The innermost cause in the wrap chain.
    pub fn root_cause(&self) -> &(dyn StdError + 'static) {
        self.chain().last().unwrap_or(self)
    }

    /// Recover a concrete error value of type `E` from the wrap chain, if any.
    pub fn find_cause<E: StdError + 'static>(&self) -> Option<&E> {
        self.chain().find_map(|cause| cause.downcast_ref::<E>())
    }
}

/// Iterator over an error's cause chain, outermost first.
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current.source();
        Some(current)
    }
}

/// Walk a cause chain and decide recoverability.
fn recoverable_cause(err: &(dyn StdError + 'static)) -> bool {
    let mut cursor = Some(err);
    while let Some(cause) = cursor {
        if let Some(io_err) = cause.downcast_ref::<io::Error>() {
            if matches!(
                io_err.kind(),
                io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted
            ) {
                return true;
            }
        }
        if cause.downcast_ref::<tokio::time::error::Elapsed>().is_some() {
            return true;
        }
        if let Some(classified) = cause.downcast_ref::<EngineError>() {
            return classified.recoverable;
        }
        cursor = cause.source();
    }
    false
}
