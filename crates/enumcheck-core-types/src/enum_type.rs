//! Static enumeration tables
//!
//! An enumeration is described by an explicit, ordered table of
//! `(name, value)` pairs. The table is the only metadata the comparison and
//! randomisation facilities look at.

/// A closed, named set of `(name, value)` pairs.
///
/// Most enumerations are declared with [`enum_type!`](crate::enum_type),
/// which generates the table from the variant list. Hand-written impls are
/// useful for aliases (several names sharing one value) and for empty
/// enumerations, which the macro cannot express.
///
/// # Example
///
/// ```
/// use enumcheck_core_types::EnumType;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Colour {
///     Red,
///     Blue,
/// }
///
/// impl EnumType for Colour {
///     const FULL_NAME: &'static str = "Palette.Colour";
///     const MEMBERS: &'static [(&'static str, Self)] = &[
///         ("Red", Colour::Red),
///         ("Crimson", Colour::Red),
///         ("Blue", Colour::Blue),
///     ];
///
///     fn underlying(self) -> i64 {
///         self as i64
///     }
/// }
///
/// assert_eq!(Colour::member_names(), vec!["Red", "Crimson", "Blue"]);
/// assert_eq!(Colour::values().len(), 3);
/// ```
pub trait EnumType: Copy + 'static {
    /// Fully-qualified type name, used to qualify difference records
    const FULL_NAME: &'static str;

    /// Declared members, in declaration order
    const MEMBERS: &'static [(&'static str, Self)];

    /// Underlying numeric value of `self`
    fn underlying(self) -> i64;

    /// Member names in declaration order
    fn member_names() -> Vec<&'static str> {
        Self::MEMBERS.iter().map(|(name, _)| *name).collect()
    }

    /// Declared values in declaration order, aliases included
    fn values() -> Vec<Self> {
        Self::MEMBERS.iter().map(|(_, value)| *value).collect()
    }
}

/// Declare a fieldless enum together with its [`EnumType`] table.
///
/// The generated enum is `#[repr(i64)]`; the caller supplies any derives
/// (at least `Clone` and `Copy`). The full name defaults to the Rust path
/// of the type and can be overridden with `as "Full.Name"`.
///
/// ```
/// use enumcheck_core_types::{enum_type, EnumType};
///
/// enum_type! {
///     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
///     pub enum Status as "Orders.Status" {
///         Pending = 1,
///         Shipped = 2,
///     }
/// }
///
/// assert_eq!(Status::FULL_NAME, "Orders.Status");
/// assert_eq!(Status::member_names(), vec!["Pending", "Shipped"]);
/// assert_eq!(Status::Shipped.underlying(), 2);
/// ```
#[macro_export]
macro_rules! enum_type {
    (@table $name:ident, $full:expr; $($variant:ident),+) => {
        impl $crate::EnumType for $name {
            const FULL_NAME: &'static str = $full;
            const MEMBERS: &'static [(&'static str, Self)] =
                &[$((stringify!($variant), $name::$variant)),+];

            fn underlying(self) -> i64 {
                self as i64
            }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident as $full:literal {
            $($(#[$vmeta:meta])* $variant:ident $(= $disc:expr)?),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(i64)]
        $vis enum $name {
            $($(#[$vmeta])* $variant $(= $disc)?),+
        }

        $crate::enum_type!(@table $name, $full; $($variant),+);
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident $(= $disc:expr)?),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(i64)]
        $vis enum $name {
            $($(#[$vmeta])* $variant $(= $disc)?),+
        }

        $crate::enum_type!(
            @table $name, concat!(module_path!(), "::", stringify!($name)); $($variant),+
        );
    };
}
