//! Method catalog for the random.org API
//!
//! random.org exposes each generator under two wire names, a plain one and
//! a "Signed" one whose response carries a cryptographic signature. Instead
//! of keeping two parallel tables, this module models a single [`Method`]
//! enum and applies the signed/unsigned choice as a boolean modifier at
//! wire-name lookup time.
//!
//! Each method also declares, in order, the named parameters it sends and
//! the JSON type each must be coerced to. The request builder walks this
//! spec; the constraint table in [`crate::constraints`] is keyed by the same
//! logical methods.

use std::fmt;

/// Logical method of the random.org API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Uniform random integers (`generateIntegers`)
    Integers,
    /// Decimal fractions in [0, 1) (`generateDecimalFractions`)
    Decimals,
    /// Normally distributed numbers (`generateGaussians`)
    Gaussians,
    /// Random strings from a chosen alphabet (`generateStrings`)
    Strings,
    /// Version-4 UUIDs (`generateUUIDs`)
    Uuids,
    /// Binary blobs (`generateBlobs`)
    Blobs,
    /// Signature verification round-trip (`verifySignature`)
    Verify,
    /// API-key usage statistics (`getUsage`)
    Usage,
}

/// Target JSON type a parameter is coerced to before hitting the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Integer number
    Int,
    /// Floating point number
    Float,
    /// Boolean
    Bool,
    /// String
    Text,
    /// Opaque structure passed through unchanged (the echoed `random`
    /// object in a verify request)
    Raw,
}

impl Method {
    /// All logical methods, in catalog order
    pub const ALL: [Method; 8] = [
        Method::Integers,
        Method::Decimals,
        Method::Gaussians,
        Method::Strings,
        Method::Uuids,
        Method::Blobs,
        Method::Verify,
        Method::Usage,
    ];

    /// Logical name, as used for configuration sections and diagnostics
    pub fn name(self) -> &'static str {
        match self {
            Method::Integers => "integers",
            Method::Decimals => "decimals",
            Method::Gaussians => "gaussians",
            Method::Strings => "strings",
            Method::Uuids => "uuids",
            Method::Blobs => "blobs",
            Method::Verify => "verify",
            Method::Usage => "usage",
        }
    }

    /// Provider RPC method string
    ///
    /// The `signed` flag selects the signed variant for generation methods;
    /// `verifySignature` and `getUsage` have no signed variant and ignore it.
    pub fn wire_name(self, signed: bool) -> &'static str {
        match (self, signed) {
            (Method::Integers, false) => "generateIntegers",
            (Method::Integers, true) => "generateSignedIntegers",
            (Method::Decimals, false) => "generateDecimalFractions",
            (Method::Decimals, true) => "generateSignedDecimalFractions",
            (Method::Gaussians, false) => "generateGaussians",
            (Method::Gaussians, true) => "generateSignedGaussians",
            (Method::Strings, false) => "generateStrings",
            (Method::Strings, true) => "generateSignedStrings",
            (Method::Uuids, false) => "generateUUIDs",
            (Method::Uuids, true) => "generateSignedUUIDs",
            (Method::Blobs, false) => "generateBlobs",
            (Method::Blobs, true) => "generateSignedBlobs",
            (Method::Verify, _) => "verifySignature",
            (Method::Usage, _) => "getUsage",
        }
    }

    /// Map a wire method string back to its logical method
    ///
    /// Signed and unsigned variants collapse onto the same logical method;
    /// this is how the transport client finds the constraint set for an
    /// outgoing request.
    pub fn from_wire_name(name: &str) -> Option<Method> {
        let method = match name {
            "generateIntegers" | "generateSignedIntegers" => Method::Integers,
            "generateDecimalFractions" | "generateSignedDecimalFractions" => Method::Decimals,
            "generateGaussians" | "generateSignedGaussians" => Method::Gaussians,
            "generateStrings" | "generateSignedStrings" => Method::Strings,
            "generateUUIDs" | "generateSignedUUIDs" => Method::Uuids,
            "generateBlobs" | "generateSignedBlobs" => Method::Blobs,
            "verifySignature" => Method::Verify,
            "getUsage" => Method::Usage,
            _ => return None,
        };
        Some(method)
    }

    /// Ordered (parameter name, target type) pairs the builder coerces
    ///
    /// `apiKey` and `n` are not listed; the builder injects them separately
    /// for the methods that take them.
    pub fn param_spec(self) -> &'static [(&'static str, ParamKind)] {
        match self {
            Method::Integers => &[
                ("min", ParamKind::Int),
                ("max", ParamKind::Int),
                ("replacement", ParamKind::Bool),
                ("base", ParamKind::Int),
            ],
            Method::Decimals => &[
                ("decimalPlaces", ParamKind::Int),
                ("replacement", ParamKind::Bool),
            ],
            Method::Gaussians => &[
                ("mean", ParamKind::Float),
                ("standardDeviation", ParamKind::Float),
                ("significantDigits", ParamKind::Int),
            ],
            Method::Strings => &[
                ("length", ParamKind::Int),
                ("characters", ParamKind::Text),
                ("replacement", ParamKind::Bool),
            ],
            Method::Uuids => &[],
            Method::Blobs => &[
                ("size", ParamKind::Int),
                ("format", ParamKind::Text),
            ],
            Method::Verify => &[
                ("random", ParamKind::Raw),
                ("signature", ParamKind::Text),
            ],
            Method::Usage => &[],
        }
    }

    /// Whether requests for this method carry the API key
    pub fn takes_api_key(self) -> bool {
        !matches!(self, Method::Verify)
    }

    /// Whether requests for this method carry a count `n`
    pub fn takes_count(self) -> bool {
        !matches!(self, Method::Verify | Method::Usage)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
