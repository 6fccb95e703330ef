//! Feature-gated tracing for rule registration and query evaluation.
//!
//! All events are conditionally compiled behind the `tracing` feature and
//! collapse to no-op inline functions when it is disabled, so release builds
//! without the feature pay nothing.

/// Target name for tracing events emitted by this crate.
#[cfg(feature = "tracing")]
const RULES_TARGET: &str = "ignored_paths::rules";

/// Traces an ignore rule being added to a set during construction.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_rule_added(pattern: &str, negated: bool, anchored: bool) {
    tracing::debug!(
        target: RULES_TARGET,
        pattern = %pattern,
        negated = negated,
        anchored = anchored,
        "ignore_rule_added"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_rule_added(_pattern: &str, _negated: bool, _anchored: bool) {}

/// Traces one query verdict, including the normalized candidate path.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_query(path: &str, candidate: &str, excluded: bool) {
    tracing::trace!(
        target: RULES_TARGET,
        path = %path,
        candidate = %candidate,
        excluded = excluded,
        "ignore_query"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_query(_path: &str, _candidate: &str, _excluded: bool) {}
