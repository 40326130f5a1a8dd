// SPDX-FileCopyrightText: 2026 Tessera Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-engine metric namespaces.
//!
//! Every engine that records metrics does so through a [`MetricScope`],
//! which prefixes metric names deterministically: the global `tessera_`
//! prefix, then the lowercased engine name with internal whitespace runs
//! collapsed to underscores. Two engines registering the same metric name
//! therefore land in disjoint namespaces.

use metrics::{Counter, Gauge, Histogram};

/// Global prefix applied to every Tessera metric.
pub const METRICS_PREFIX: &str = "tessera_";

/// An isolated, name-prefixed namespace for one engine's metrics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricScope {
    prefix: String,
}

impl MetricScope {
    /// Derive the scope for an engine name.
    pub fn for_engine(engine_name: &str) -> Self {
        let collapsed = engine_name
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_")
            .to_lowercase();
        Self {
            prefix: format!("{METRICS_PREFIX}{collapsed}_"),
        }
    }

    /// The full prefix, including the global one.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The fully-qualified name for a metric in this scope.
    pub fn scoped(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }

    /// A counter registered in this scope.
    pub fn counter(&self, name: &str) -> Counter {
        metrics::counter!(self.scoped(name))
    }

    /// A gauge registered in this scope.
    pub fn gauge(&self, name: &str) -> Gauge {
        metrics::gauge!(self.scoped(name))
    }

    /// A histogram registered in this scope.
    pub fn histogram(&self, name: &str) -> Histogram {
        metrics::histogram!(self.scoped(name))
    }
}
