//! Parameter constraint table for the random.org API
//!
//! random.org documents a validity domain for every method parameter
//! (https://api.random.org/json-rpc/4/basic). This module declares those
//! domains as data - a static table of [`Check`] values keyed by method and
//! parameter name - so a request can be rejected locally before it consumes
//! quota, and so the table itself can be inspected and tested without
//! executing arbitrary predicates.
//!
//! Validation is advisory data collection plus a verdict: [`ConstraintSet::validate`]
//! returns a per-parameter map of results alongside the overall verdict.
//! Only parameters that have a registered check are examined; anything else
//! in the params object is treated as automatically valid. Enforcement (the
//! refusal to transmit) happens at the transport call boundary in
//! [`crate::api::RandomApi`], never here.

use crate::method::Method;
use serde_json::Value;
use std::collections::BTreeMap;

/// A single named validity check over a JSON parameter value
///
/// A value of the wrong JSON type for its check evaluates false rather than
/// erroring; a request carrying, say, a string where a number belongs is
/// exactly the kind of request that must not reach the provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Check {
    /// Numeric value within an inclusive range
    Range { min: f64, max: f64 },
    /// Integer value drawn from a fixed set
    OneOf(&'static [i64]),
    /// String value drawn from a fixed set
    TextOneOf(&'static [&'static str]),
    /// String whose character count lies within an inclusive range
    TextLength { min: usize, max: usize },
    /// Integer bit count within an inclusive range and divisible by `factor`
    BitSize { min: i64, max: i64, factor: i64 },
}

impl Check {
    /// Evaluate this check against a JSON value
    pub fn evaluate(&self, value: &Value) -> bool {
        match self {
            Check::Range { min, max } => match value.as_f64() {
                Some(v) => v >= *min && v <= *max,
                None => false,
            },
            Check::OneOf(allowed) => match value.as_i64() {
                Some(v) => allowed.contains(&v),
                None => false,
            },
            Check::TextOneOf(allowed) => match value.as_str() {
                Some(v) => allowed.contains(&v),
                None => false,
            },
            Check::TextLength { min, max } => match value.as_str() {
                Some(v) => {
                    let len = v.chars().count();
                    len >= *min && len <= *max
                }
                None => false,
            },
            Check::BitSize { min, max, factor } => match value.as_i64() {
                Some(v) => v >= *min && v <= *max && v % factor == 0,
                None => false,
            },
        }
    }
}

/// Per-method checks, as documented by the provider
///
/// `verify` and `usage` have no checked parameters and are always valid.
const CONSTRAINTS: &[(Method, &[(&str, Check)])] = &[
    (
        Method::Integers,
        &[
            ("n", Check::Range { min: 1.0, max: 1e4 }),
            ("min", Check::Range { min: -1e9, max: 1e9 }),
            ("max", Check::Range { min: -1e9, max: 1e9 }),
            ("base", Check::OneOf(&[2, 8, 10, 12])),
        ],
    ),
    (
        Method::Decimals,
        &[
            ("n", Check::Range { min: 1.0, max: 1e4 }),
            ("decimalPlaces", Check::Range { min: 1.0, max: 20.0 }),
        ],
    ),
    (
        Method::Gaussians,
        &[
            ("n", Check::Range { min: 1.0, max: 1e4 }),
            ("mean", Check::Range { min: -1e6, max: 1e6 }),
            ("standardDeviation", Check::Range { min: -1e6, max: 1e6 }),
            ("significantDigits", Check::Range { min: 2.0, max: 20.0 }),
        ],
    ),
    (
        Method::Strings,
        &[
            ("n", Check::Range { min: 1.0, max: 1e4 }),
            ("length", Check::Range { min: 1.0, max: 20.0 }),
            ("characters", Check::TextLength { min: 1, max: 80 }),
        ],
    ),
    (
        Method::Uuids,
        &[("n", Check::Range { min: 1.0, max: 1e3 })],
    ),
    (
        Method::Blobs,
        &[
            ("n", Check::Range { min: 1.0, max: 100.0 }),
            (
                "size",
                Check::BitSize {
                    min: 1,
                    max: 1_048_576,
                    factor: 8,
                },
            ),
            ("format", Check::TextOneOf(&["base64", "hex"])),
        ],
    ),
    (Method::Verify, &[]),
    (Method::Usage, &[]),
];

/// Immutable table of parameter domains, injected where validation happens
///
/// A zero-cost handle over the static table rather than module-level
/// globals, so the transport client owns its validation source explicitly.
#[derive(Debug, Clone, Copy)]
pub struct ConstraintSet {
    table: &'static [(Method, &'static [(&'static str, Check)])],
}

impl ConstraintSet {
    /// The documented random.org parameter domains
    pub fn api_defaults() -> Self {
        Self { table: CONSTRAINTS }
    }

    /// Checks registered for a logical method
    pub fn checks_for(&self, method: Method) -> &'static [(&'static str, Check)] {
        self.table
            .iter()
            .find(|(m, _)| *m == method)
            .map(|(_, checks)| *checks)
            .unwrap_or(&[])
    }

    /// Validate a params object against the registered checks for `method`
    ///
    /// Returns the per-parameter verdicts and the overall verdict. Only
    /// parameters present in `params` *and* registered here are examined;
    /// the overall verdict is true exactly when every examined parameter
    /// passed (vacuously true when nothing is examined).
    pub fn validate(
        &self,
        method: Method,
        params: &serde_json::Map<String, Value>,
    ) -> (BTreeMap<String, bool>, bool) {
        let checks = self.checks_for(method);
        let mut results = BTreeMap::new();
        for (name, value) in params {
            if let Some((_, check)) = checks.iter().find(|(n, _)| n == name) {
                results.insert(name.clone(), check.evaluate(value));
            }
        }
        let all_valid = results.values().all(|v| *v);
        (results, all_valid)
    }
}

impl Default for ConstraintSet {
    fn default() -> Self {
        Self::api_defaults()
    }
}
