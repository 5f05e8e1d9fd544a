//! Helper macro for declaring port error enums.
//!
//! Each variant gets a `thiserror` message and a snake-case constructor whose
//! parameters accept anything convertible into the field type, so adapters
//! can write `UserPersistenceError::query(err.to_string())` or
//! `UserPersistenceError::not_found(7)`.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            #[doc = concat!("Construct [`Self::", stringify!($variant), "`].")]
            #[must_use]
            pub const fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            #[doc = concat!("Construct [`Self::", stringify!($variant), "`].")]
            #[must_use]
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( {
                    $( $(#[$field_meta:meta])* $field:ident : $ty:ty ),* $(,)?
                } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $( $(#[$field_meta])* $field : $ty ),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    use crate::domain::UserId;

    define_port_error! {
        pub enum SamplePortError {
            Unavailable => "storage unavailable",
            Missing { id: UserId } => "row {id} missing",
            Failed { message: String, attempts: u32 } => "failed: {message} after {attempts}",
        }
    }

    #[test]
    fn unit_variants_get_plain_constructors() {
        assert_eq!(SamplePortError::unavailable().to_string(), "storage unavailable");
    }

    #[test]
    fn constructors_convert_into_field_types() {
        let err = SamplePortError::missing(7);
        assert_eq!(err, SamplePortError::Missing { id: UserId::new(7) });
        assert_eq!(err.to_string(), "row 7 missing");
    }

    #[test]
    fn constructors_support_mixed_fields() {
        let err = SamplePortError::failed("timeout", 3_u32);
        assert_eq!(err.to_string(), "failed: timeout after 3");
    }
}
