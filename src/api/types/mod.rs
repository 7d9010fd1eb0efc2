//! Request enums and response records for the E*TRADE REST API.
//!
//! Every enum here is a closed set of API tokens. `as_str()` returns the
//! literal sent on the wire, and `FromStr` accepts the same literal in any case.

use thiserror::Error;

/// Error returned when a string names no variant of a wire enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} value '{value}' (expected one of: {expected})")]
pub struct ParseWireValueError {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

/// Declare a wire enum with `as_str`, `ALL`, `Display`, `FromStr` and serde renames.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $wire)] $variant, )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $wire, )+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::api::types::ParseWireValueError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(s))
                    .ok_or_else(|| $crate::api::types::ParseWireValueError {
                        kind: stringify!($name),
                        value: s.to_string(),
                        expected: Self::ALL
                            .iter()
                            .map(|v| v.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    })
            }
        }
    };
}

pub mod account;
pub mod alert;
pub mod common;
pub mod market;
pub mod order;

pub use account::*;
pub use alert::*;
pub use common::*;
pub use market::*;
pub use order::*;
