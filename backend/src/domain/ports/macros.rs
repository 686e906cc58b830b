//! `define_port_error!`: error enums shared by the driven ports.
//!
//! Port errors come in two shapes. A unit variant names a condition with no
//! further detail (`Duplicate`); a message variant carries the adapter's
//! description (`Query { message: String }`). Each variant gets a snake_case
//! constructor, and message constructors take anything `Into<String>` so
//! adapters can pass `err.to_string()` or a literal.

macro_rules! define_port_error {
    (@constructor $variant:ident) => {
        ::paste::paste! {
            #[must_use]
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@constructor $variant:ident message) => {
        ::paste::paste! {
            #[must_use]
            pub fn [<$variant:snake>](message: impl Into<String>) -> Self {
                Self::$variant { message: message.into() }
            }
        }
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $message:ident : String } )? => $display:literal
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($display)]
                $variant $( { $message: String } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@constructor $variant $($message)?);
            )*
        }
    };
}

pub(crate) use define_port_error;
