//! Macros for defining kind enums.

/// Macro for defining a kind enum.
///
/// Variants are displayed and parsed in `lowercase`, and are listed in the
/// declaration order in the generated `ALL` constant. Any extra attributes
/// (like `serde` derives) are passed through to the generated enum.
///
/// # Example
///
/// ```rust
/// # use common::define_kind;
///
/// define_kind! {
///     #[doc = "Shape kind."]
///     enum Kind {
///         #[doc = "A cube"]
///         Cube = 1,
///
///         #[doc = "A sphere"]
///         Sphere = 2,
///     }
/// }
///
/// assert_eq!(Kind::ALL, [Kind::Cube, Kind::Sphere]);
/// assert_eq!(Kind::Sphere.to_string(), "sphere");
/// ```
#[expect(clippy::module_name_repetitions, reason = "more readable")]
#[macro_export]
macro_rules! define_kind {
    (
        #[doc = $doc:literal]
        $(#[$attr:meta])*
        enum $name:ident {
            $(
                #[doc = $variant_doc:literal]
                $variant:ident = $value:expr
            ),* $(,)?
        }
    ) => {
        #[derive(
            Clone,
            Copy,
            Debug,
            $crate::private::strum::Display,
            $crate::private::strum::EnumString,
            Eq,
            Hash,
            Ord,
            PartialEq,
            PartialOrd,
        )]
        #[doc = $doc]
        $(#[$attr])*
        #[repr(u8)]
        #[strum(serialize_all = "lowercase")]
        pub enum $name {
            $(
                 #[doc = $variant_doc]
                 $variant = $value,
            )*
        }

        impl $name {
            /// All the variants in their declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];
        }
    };
}
