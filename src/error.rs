//! Error types for address classification and subnet planning.
//!
//! Both calculators return structured errors instead of panicking, so the
//! caller can turn them into a validation message next to the input field.

use thiserror::Error;

/// Why a dotted-decimal string was rejected.
///
/// Positions are 1-based, matching how octets are named in the lectures
/// ("first octet", "second octet", ...).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressFault {
    /// The input did not split into exactly four dot-separated tokens.
    #[error("expected 4 octets, found {0}")]
    WrongOctetCount(usize),

    /// A token was empty or contained something other than ASCII digits.
    #[error("octet {position} '{token}' is not a non-negative integer")]
    NotAnInteger { position: usize, token: String },

    /// A token was an integer but greater than 255.
    #[error("octet {position} '{token}' is out of range 0-255")]
    OutOfRange { position: usize, token: String },
}

/// Errors returned by [`crate::classify`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClassificationError {
    #[error("malformed IPv4 address '{input}': {fault}")]
    MalformedAddress { input: String, fault: AddressFault },
}

/// Errors returned by [`crate::plan`] and [`crate::parse_subnet_count`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlanningError {
    /// The base network is not a valid dotted-decimal address.
    #[error("malformed base network '{input}': {fault}")]
    MalformedAddress { input: String, fault: AddressFault },

    /// Zero, negative or non-integer subnet count.
    #[error("invalid subnet count '{input}': expected a whole number of at least 1")]
    InvalidSubnetCount { input: String },

    /// More subnets than the last octet of a /24 can hold.
    #[error("cannot carve {requested} subnets from a /24, at most {max} fit in the last octet")]
    TooManySubnets { requested: i64, max: u32 },
}

impl From<ClassificationError> for PlanningError {
    fn from(err: ClassificationError) -> Self {
        match err {
            ClassificationError::MalformedAddress { input, fault } => {
                PlanningError::MalformedAddress { input, fault }
            }
        }
    }
}
