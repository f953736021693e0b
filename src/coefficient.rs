use core::ops::{Add, Mul, Sub};
use std::fmt::Display;

/// Trait for the coefficient type of a univariate polynomial.
///
/// Only a commutative ring structure is assumed: no ordering or division,
/// so prime field elements qualify alongside signed integers and floats.
/// Unsigned integers qualify too; they negate modulo 2^bits, so `c - P` and
/// the tail of `P - Q` wrap around instead of overflowing.
pub trait Coefficient:
    Clone + Display + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if self is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if self is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Returns true if self and other are the same value.
    fn equals(&self, other: &Self) -> bool;

    /// Return -self. Defaults to zero - self.
    fn negate(&self) -> Self {
        Self::zero() - self.clone()
    }
}

// Primitive types, and anything else with num-traits identities and
// equality. Each invocation also gives the scalar-on-the-left operators.
// Unsigned integers negate with wraparound, since zero - self would
// overflow for every non-zero value.
macro_rules! impl_num_coefficient {
    (@impl $t:ty; $($negate:tt)*) => {
        impl Coefficient for $t {
            #[inline(always)]
            fn zero() -> Self {
                <$t as num_traits::Zero>::zero()
            }

            #[inline(always)]
            fn one() -> Self {
                <$t as num_traits::One>::one()
            }

            #[inline(always)]
            fn is_zero(&self) -> bool {
                num_traits::Zero::is_zero(self)
            }

            #[inline(always)]
            fn is_one(&self) -> bool {
                *self == <$t as num_traits::One>::one()
            }

            #[inline(always)]
            fn equals(&self, other: &Self) -> bool {
                self == other
            }

            $($negate)*
        }

        $crate::impl_scalar_lhs_ops!($t);
    };
    (unsigned: $($t:ty),* $(,)?) => {
        $(
            impl_num_coefficient!(@impl $t;
                #[inline(always)]
                fn negate(&self) -> Self {
                    num_traits::WrappingNeg::wrapping_neg(self)
                }
            );
        )*
    };
    ($($t:ty),* $(,)?) => {
        $(
            impl_num_coefficient!(@impl $t;);
        )*
    };
}

impl_num_coefficient!(i8, i16, i32, i64, i128, isize, f32, f64);
impl_num_coefficient!(unsigned: u8, u16, u32, u64, u128, usize);

#[cfg(feature = "bigint")]
impl_num_coefficient!(num_bigint::BigInt);

/// Implement `Coefficient` and the scalar-on-the-left operators for a
/// finite field type produced by the `fp2` macros (`define_fp_core!`,
/// `define_fp2_from_modulus!`, ...).
///
/// The field type must be declared in the invoking crate. Its `Fp` methods
/// take the receiver by value, which relies on field elements being `Copy`.
#[cfg(feature = "fields")]
#[macro_export]
macro_rules! impl_fp_coefficient {
    ($typename:ty) => {
        impl $crate::Coefficient for $typename {
            #[inline(always)]
            fn zero() -> Self {
                <$typename as $crate::fp2::traits::Fp>::ZERO
            }

            #[inline(always)]
            fn one() -> Self {
                <$typename as $crate::fp2::traits::Fp>::ONE
            }

            #[inline(always)]
            fn is_zero(&self) -> bool {
                <$typename as $crate::fp2::traits::Fp>::is_zero(*self) == u32::MAX
            }

            #[inline(always)]
            fn is_one(&self) -> bool {
                <$typename as $crate::fp2::traits::Fp>::equals(
                    *self,
                    &<$typename as $crate::fp2::traits::Fp>::ONE,
                ) == u32::MAX
            }

            #[inline(always)]
            fn equals(&self, other: &Self) -> bool {
                <$typename as $crate::fp2::traits::Fp>::equals(*self, other) == u32::MAX
            }
        }

        $crate::impl_scalar_lhs_ops!($typename);
    };
}
