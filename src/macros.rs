/// Declares a closed enumeration and implements [`FlagEnum`] for it.
///
/// The integer after the enum name becomes its `#[repr]` and selects the
/// storage width: `u8`/`i8` store into `u8`, `u16`/`i16` into `u16` and so on
/// up to 64 bits. Every member value is a bit index. The macro derives `Clone`,
/// `Copy`, `PartialEq`, `Eq` and `Hash`; further attributes are passed
/// through to the enum.
///
/// Optional trailing clauses, in this order:
/// - `const ALL = <u64 pattern>;` the explicit mask of legal bits, needed when
///   the member values are not `0..count`.
/// - `const NONE = <u64 pattern>;` the explicit pattern of an empty set.
/// - `impl ops;` enables `|`, `&`, `^` and `!` directly on members. Without
///   it members have to be wrapped into a [`FlagSet`] before combining.
///
/// # Examples
/// ```
/// use light_flagset::{FlagSet, flag_enum};
///
/// flag_enum! {
///     #[derive(Debug)]
///     pub enum Sparse: u8 {
///         Zero = 0,
///         Two = 2,
///         Four = 4,
///     }
///     const ALL = 0b10101;
///     impl ops;
/// }
///
/// let flags = Sparse::Two | Sparse::Four;
/// assert_eq!(flags.raw_value(), 0b10100);
/// assert_eq!((!flags).raw_value(), 0b00001);
/// assert_eq!(FlagSet::<Sparse>::all().len(), 3);
/// ```
///
/// An enumeration without members is accepted. It carries no `#[repr]`,
/// since rustc rejects one on an empty enum, and its [`FlagSet`] is always
/// empty.
///
/// # Compiler Errors
/// Prevents compilation if a member is named `All` or `None`, if the storage
/// is wider than 64 bits, if an explicit `ALL` does not have one bit per
/// member or does not fit the storage, if `NONE` sets bits outside of the
/// flag domain, or if a member value exceeds the storage width or lies
/// outside of the flag domain. Contract violations surface as `evaluation of
/// constant value failed` together with the violated rule, e.g. `Flag member
/// value lies outside of the flag domain.` Without `impl ops;`, combining
/// two bare members does not compile either.
///
/// [`FlagEnum`]: crate::FlagEnum
/// [`FlagSet`]: crate::FlagSet
#[macro_export]
macro_rules! flag_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident: $repr:ident {}
        $(const ALL = $all:expr;)?
        $(const NONE = $none:expr;)?
        $(impl $ops:ident;)?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {}

        impl $crate::FlagEnum for $name {
            type Bits = $crate::__flag_bits!($repr);

            const COUNT: usize = 0;
            $(const ALL: ::core::option::Option<u64> = ::core::option::Option::Some($all);)?
            $(const NONE: ::core::option::Option<u64> = ::core::option::Option::Some($none);)?

            fn bit_index(self) -> u32 {
                match self {}
            }

            fn from_bit_index(_: u32) -> ::core::option::Option<Self> {
                ::core::option::Option::None
            }
        }

        const _: () = {
            let bits = <<$name as $crate::FlagEnum>::Bits as $crate::FlagBits>::BITS;
            let all = <$name as $crate::FlagEnum>::ALL;
            $crate::contract::assert_contract(0, bits, all, <$name as $crate::FlagEnum>::NONE);
        };

        $( $crate::__flag_ops!($ops, $name); )?
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident: $repr:ident {
            $( $(#[$vmeta:meta])* $variant:ident $(= $value:expr)? ),* $(,)?
        }
        $(const ALL = $all:expr;)?
        $(const NONE = $none:expr;)?
        $(impl $ops:ident;)?
    ) => {
        #[repr($repr)]
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant $(= $value)? ),*
        }

        $( $crate::__flag_member_name!($variant); )*

        impl $crate::FlagEnum for $name {
            type Bits = $crate::__flag_bits!($repr);

            const COUNT: usize = <[&str]>::len(&[$(::core::stringify!($variant)),*]);
            $(const ALL: ::core::option::Option<u64> = ::core::option::Option::Some($all);)?
            $(const NONE: ::core::option::Option<u64> = ::core::option::Option::Some($none);)?

            #[inline]
            fn bit_index(self) -> u32 {
                self as u32
            }

            fn from_bit_index(index: u32) -> ::core::option::Option<Self> {
                $(
                    if index == $name::$variant as u32 {
                        return ::core::option::Option::Some($name::$variant);
                    }
                )*
                ::core::option::Option::None
            }
        }

        const _: () = {
            let bits = <<$name as $crate::FlagEnum>::Bits as $crate::FlagBits>::BITS;
            let count = <$name as $crate::FlagEnum>::COUNT;
            let all = <$name as $crate::FlagEnum>::ALL;
            $crate::contract::assert_contract(count, bits, all, <$name as $crate::FlagEnum>::NONE);
            let mask = $crate::domain_mask(count, all);
            $( $crate::contract::assert_member($name::$variant as i128, bits, mask); )*
        };

        $( $crate::__flag_ops!($ops, $name); )?
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __flag_member_name {
    (All) => {
        ::core::compile_error!("flag_enum! members must not be named `All`, use `const ALL = ..;` instead.");
    };
    (None) => {
        ::core::compile_error!("flag_enum! members must not be named `None`, use `const NONE = ..;` instead.");
    };
    ($variant:ident) => {};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __flag_bits {
    (u8) => { u8 };
    (i8) => { u8 };
    (u16) => { u16 };
    (i16) => { u16 };
    (u32) => { u32 };
    (i32) => { u32 };
    (u64) => { u64 };
    (i64) => { u64 };
    ($other:ident) => {
        ::core::compile_error!(::core::concat!(
            "flag_enum! storage must be an integer of at most 64 bits, found `",
            ::core::stringify!($other),
            "`."
        ))
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __flag_ops {
    (ops, $name:ident) => {
        $crate::__flag_binop!($name, BitOr, bitor);
        $crate::__flag_binop!($name, BitAnd, bitand);
        $crate::__flag_binop!($name, BitXor, bitxor);

        impl ::core::ops::Not for $name {
            type Output = $crate::FlagSet<$name>;

            fn not(self) -> Self::Output {
                $crate::FlagSet::new(self).complement()
            }
        }
    };
    ($other:ident, $name:ident) => {
        ::core::compile_error!(::core::concat!(
            "unknown flag_enum! clause `impl ",
            ::core::stringify!($other),
            ";`, expected `impl ops;`."
        ));
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __flag_binop {
    ($name:ident, $op:ident, $method:ident) => {
        impl ::core::ops::$op for $name {
            type Output = $crate::FlagSet<$name>;

            fn $method(self, rhs: Self) -> Self::Output {
                ::core::ops::$op::$method($crate::FlagSet::new(self), rhs)
            }
        }

        impl ::core::ops::$op<$crate::FlagSet<$name>> for $name {
            type Output = $crate::FlagSet<$name>;

            fn $method(self, rhs: $crate::FlagSet<$name>) -> Self::Output {
                ::core::ops::$op::$method($crate::FlagSet::new(self), rhs)
            }
        }
    };
}
