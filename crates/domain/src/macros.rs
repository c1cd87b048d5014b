//! Macro for implementing wire-string conversions on closed enumerations
//!
//! Every enumeration the services exchange (HTTP methods, roles, token types,
//! holder types) has a fixed lower-case wire form. This macro provides
//! `as_str`, `ALL`, `Display`, and a validating `FromStr` so that raw strings
//! are converted exactly once, at the call boundary.
//!
//! # Example
//!
//! ```rust
//! use bugout_domain::impl_wire_enum_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Visibility {
//!     Public,
//!     Private,
//! }
//!
//! impl_wire_enum_conversions!(Visibility {
//!     Public => "public",
//!     Private => "private",
//! });
//!
//! assert_eq!("public".parse::<Visibility>().unwrap(), Visibility::Public);
//! assert!("PUBLIC".parse::<Visibility>().is_err());
//! ```

/// Implements `as_str`, `ALL`, `Display` and `FromStr` for a wire enum
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their wire strings
///
/// Parsing is exact: anything outside the listed strings is rejected with
/// [`BugoutError::Validation`](crate::BugoutError::Validation).
#[macro_export]
macro_rules! impl_wire_enum_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl $enum_name {
            /// Every member of the closed set, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Wire representation.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = $crate::BugoutError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($str => Ok(Self::$variant),)+
                    _ => Err($crate::BugoutError::Validation(format!(
                        "invalid {}: {:?}",
                        stringify!($enum_name),
                        s
                    ))),
                }
            }
        }
    };
}
