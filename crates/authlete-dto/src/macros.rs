//! Declaration macro for closed wire enumerations.

/// Declares a closed enumeration whose variants travel as fixed strings.
///
/// Each variant names its wire string, optionally followed by legacy spellings
/// that are accepted on input but never produced:
///
/// ```ignore
/// wire_enum! {
///     /// Outcome of the token update API.
///     pub enum TokenUpdateAction {
///         /// Update succeeded.
///         Ok = "OK",
///         /// Not allowed.
///         Forbidden = "FORBIDDEN" | "FORBIDEN",
///     }
/// }
/// ```
///
/// The generated type derives serde, `Display`, `FromStr` and
/// [`WireEnum`](crate::wire::WireEnum). Ordinals follow declaration order.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $wire:literal $(| $alias:literal)*
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire $(, alias = $alias)*)]
                $variant,
            )+
        }

        impl $crate::wire::WireEnum for $name {
            const NAME: &'static str = stringify!($name);
            const VARIANTS: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }

            fn ordinal(&self) -> u32 {
                *self as u32
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::wire::WireEnum::as_str(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::DtoError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire $(| $alias)* => Ok(Self::$variant),)+
                    _ => Err($crate::error::DtoError::UnknownVariant {
                        enumeration: stringify!($name),
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}
