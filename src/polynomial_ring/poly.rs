use crate::coefficient::Coefficient;
use crate::error::{PolyError, Result};

use core::ops::{Add, Index, Mul, Neg, Sub};
use log::trace;
use num_traits::Pow;
use rand::Rng;
use rand::distr::uniform::{SampleRange, SampleUniform};
use std::fmt::Display;

/// A univariate polynomial with coefficients in C.
///
/// `coeffs[i]` is the coefficient of x^i and there is always at least one
/// coefficient. Addition and subtraction keep trailing zero coefficients,
/// multiplication removes them, so the degree is simply the number of stored
/// coefficients minus one.
#[derive(Clone, Debug)]
pub struct Polynomial<C: Coefficient> {
    coeffs: Vec<C>,
}

impl<C: Coefficient> Polynomial<C> {
    /// Create a polynomial from its coefficients, lowest degree first.
    pub fn new(coeffs: Vec<C>) -> Result<Self> {
        if coeffs.is_empty() {
            return Err(PolyError::EmptyCoefficients);
        }
        Ok(Self { coeffs })
    }

    /// Create a polynomial from a slice of coefficients, lowest degree first.
    pub fn from_slice(a: &[C]) -> Result<Self> {
        Self::new(a.to_vec())
    }

    /// Create the constant polynomial c.
    pub fn constant(c: C) -> Self {
        Self { coeffs: vec![c] }
    }

    /// The zero polynomial, stored as a single zero coefficient.
    pub fn zero() -> Self {
        Self::constant(C::zero())
    }

    /// The constant polynomial 1.
    pub fn one() -> Self {
        Self::constant(C::one())
    }

    /// The polynomial x.
    pub fn x() -> Self {
        Self {
            coeffs: vec![C::zero(), C::one()],
        }
    }

    /// The monomial c * x^n.
    pub fn monomial(c: C, n: usize) -> Self {
        let mut coeffs = vec![C::zero(); n + 1];
        coeffs[n] = c;
        Self { coeffs }
    }

    /// Return a new random polynomial with `len` coefficients sampled from `range`.
    ///
    /// Panics if `range` is empty.
    pub fn rand<R, B>(rng: &mut R, len: usize, range: B) -> Result<Self>
    where
        R: Rng,
        C: SampleUniform,
        B: SampleRange<C> + Clone,
    {
        let coeffs = (0..len).map(|_| rng.random_range(range.clone())).collect();
        Self::new(coeffs)
    }

    /// The number of stored coefficients.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Return the degree of the polynomial: the number of stored coefficients
    /// minus one, whether or not the top coefficient is zero.
    pub fn degree(&self) -> usize {
        self.len() - 1
    }

    pub fn coefficients(&self) -> &[C] {
        &self.coeffs
    }

    pub fn into_coefficients(self) -> Vec<C> {
        self.coeffs
    }

    /// Return the constant coefficient of the polynomial
    pub fn constant_coefficient(&self) -> &C {
        &self.coeffs[0]
    }

    /// Return the highest stored coefficient, which may be zero.
    pub fn leading_coefficient(&self) -> &C {
        &self.coeffs[self.len() - 1]
    }

    /// Return true if every coefficient is zero.
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|c| c.is_zero())
    }

    /// Return true if self and other agree once trailing zeros are ignored.
    /// Unlike `==`, this treats 1 + 0x and 1 as the same polynomial.
    pub fn equivalent(&self, other: &Self) -> bool {
        let n = Self::trimmed_len(&self.coeffs);
        let m = Self::trimmed_len(&other.coeffs);
        n == m
            && self.coeffs[..n]
                .iter()
                .zip(&other.coeffs[..m])
                .all(|(a, b)| a.equals(b))
    }

    /// Length of f once trailing zeros are dropped, never below one.
    fn trimmed_len(f: &[C]) -> usize {
        let mut i = f.len();
        while i > 1 && f[i - 1].is_zero() {
            i -= 1;
        }
        i
    }

    /// Truncate the zero coefficients above the true degree, keeping at least
    /// one coefficient.
    fn truncate_trailing_zeros(&mut self) {
        let n = Self::trimmed_len(&self.coeffs);
        if n < self.len() {
            trace!("dropping {} trailing zero coefficients", self.len() - n);
            self.coeffs.truncate(n);
        }
    }

    /// Compute f + g over the common range, followed by the tail of the
    /// longer input.
    fn add_coeffs(f: &[C], g: &[C]) -> Vec<C> {
        let common = f.len().min(g.len());
        let mut r: Vec<C> = f
            .iter()
            .zip(g)
            .map(|(a, b)| a.clone() + b.clone())
            .collect();
        r.extend_from_slice(&f[common..]);
        r.extend_from_slice(&g[common..]);
        r
    }

    /// Compute f - g over the common range. The tail of f is kept as is and
    /// the tail of g is negated.
    fn sub_coeffs(f: &[C], g: &[C]) -> Vec<C> {
        let common = f.len().min(g.len());
        let mut r: Vec<C> = f
            .iter()
            .zip(g)
            .map(|(a, b)| a.clone() - b.clone())
            .collect();
        r.extend_from_slice(&f[common..]);
        r.extend(g[common..].iter().map(|b| b.negate()));
        r
    }

    /// Compute f * g with O(len(f) * len(g)) multiplications using
    /// schoolbook multiplication. Assumes that fg has enough space for
    /// the result (len(f) + len(g) - 1) and is zeroed.
    fn schoolbook_multiplication(fg: &mut [C], f: &[C], g: &[C]) {
        debug_assert!(fg.len() >= f.len() + g.len() - 1);

        for (i, a) in f.iter().enumerate() {
            for (j, b) in g.iter().enumerate() {
                fg[i + j] = fg[i + j].clone() + a.clone() * b.clone();
            }
        }
    }

    /// Return self + other. Coefficients cancelling to zero are kept.
    pub fn add_poly(&self, other: &Self) -> Self {
        Self {
            coeffs: Self::add_coeffs(&self.coeffs, &other.coeffs),
        }
    }

    /// Return self - other. Coefficients cancelling to zero are kept.
    pub fn sub_poly(&self, other: &Self) -> Self {
        Self {
            coeffs: Self::sub_coeffs(&self.coeffs, &other.coeffs),
        }
    }

    /// Return self * other with trailing zeros removed.
    pub fn mul_poly(&self, other: &Self) -> Self {
        let mut coeffs = vec![C::zero(); self.len() + other.len() - 1];
        Self::schoolbook_multiplication(&mut coeffs, &self.coeffs, &other.coeffs);
        let mut r = Self { coeffs };
        r.truncate_trailing_zeros();
        r
    }

    /// Return self + c, touching only the constant term.
    pub fn add_scalar(&self, c: &C) -> Self {
        let mut r = self.clone();
        r.coeffs[0] = r.coeffs[0].clone() + c.clone();
        r
    }

    /// Return self - c, touching only the constant term.
    pub fn sub_scalar(&self, c: &C) -> Self {
        let mut r = self.clone();
        r.coeffs[0] = r.coeffs[0].clone() - c.clone();
        r
    }

    /// Return c - self.
    pub fn rsub_scalar(&self, c: &C) -> Self {
        let mut coeffs = Vec::with_capacity(self.len());
        coeffs.push(c.clone() - self.coeffs[0].clone());
        coeffs.extend(self.coeffs[1..].iter().map(|x| x.negate()));
        Self { coeffs }
    }

    /// Return c * self for some c in the coefficient ring. The degree is
    /// unchanged even when c is zero.
    pub fn scale(&self, c: &C) -> Self {
        Self {
            coeffs: self.coeffs.iter().map(|x| x.clone() * c.clone()).collect(),
        }
    }

    /// Return self^n by repeated multiplication, starting from self.
    ///
    /// `pow(1)` returns an exact copy of self, trailing zeros included, and
    /// `pow(0)` returns the constant polynomial 1.
    pub fn pow(&self, n: u32) -> Self {
        if n == 0 {
            return Self::one();
        }
        let mut r = self.clone();
        for i in 1..n {
            r = r.mul_poly(self);
            trace!("power {} has degree {}", i + 1, r.degree());
        }
        r
    }

    /// Computes the product of a slice of polynomials with a balanced
    /// product tree. The empty product is 1.
    pub fn product(v: &[Self]) -> Self {
        match v.len() {
            0 => Self::one(),
            1 => v[0].clone(),
            n => {
                let half = n >> 1;
                Self::product(&v[..half]).mul_poly(&Self::product(&v[half..]))
            }
        }
    }

    /// Evaluate the polynomial at `a`, summing c_i * a^i. The constant term is
    /// taken as is so that a = 0 never forms 0^0.
    pub fn evaluate(&self, a: &C) -> C {
        self.evaluate_in(a)
    }

    /// Evaluate the polynomial at a point of another ring X that the
    /// coefficients convert into, e.g. an i32 polynomial at an f64 point.
    pub fn evaluate_in<X>(&self, a: &X) -> X
    where
        X: Coefficient,
        C: Into<X>,
    {
        let mut terms = self.coeffs[1..].iter();
        let mut r: X = self.coeffs[0].clone().into();

        // Only form the next power of a when there is a term that needs it.
        let mut ai = a.clone();
        if let Some(c) = terms.next() {
            r = r + c.clone().into() * ai.clone();
        }
        for c in terms {
            ai = ai * a.clone();
            r = r + c.clone().into() * ai.clone();
        }
        r
    }

    /// Borrow the polynomial as a function of one point.
    pub fn as_fn(&self) -> impl Fn(&C) -> C + '_ {
        move |a| self.evaluate(a)
    }
}

impl<C: Coefficient> TryFrom<Vec<C>> for Polynomial<C> {
    type Error = PolyError;

    fn try_from(coeffs: Vec<C>) -> Result<Self> {
        Self::new(coeffs)
    }
}

impl<C: Coefficient> Index<usize> for Polynomial<C> {
    type Output = C;

    fn index(&self, index: usize) -> &Self::Output {
        &self.coeffs[index]
    }
}

impl<C: Coefficient> PartialEq for Polynomial<C> {
    /// Strict equality: same number of coefficients and equal coefficients,
    /// so 1 + 0x != 1. See `equivalent` for the trimmed comparison.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .coeffs
                .iter()
                .zip(&other.coeffs)
                .all(|(a, b)| a.equals(b))
    }
}

impl<C: Coefficient> Neg for &Polynomial<C> {
    type Output = Polynomial<C>;

    #[inline(always)]
    fn neg(self) -> Polynomial<C> {
        Polynomial {
            coeffs: self.coeffs.iter().map(|c| c.negate()).collect(),
        }
    }
}

impl<C: Coefficient> Neg for Polynomial<C> {
    type Output = Polynomial<C>;

    #[inline(always)]
    fn neg(self) -> Polynomial<C> {
        -&self
    }
}

// Polynomial (op) polynomial and polynomial (op) scalar for every mix of
// owned and borrowed operands, all forwarding to the named methods.
macro_rules! forward_binop {
    ($imp:ident, $method:ident, $poly_fn:ident, $scalar_fn:ident) => {
        impl<C: Coefficient> $imp<&Polynomial<C>> for &Polynomial<C> {
            type Output = Polynomial<C>;

            #[inline(always)]
            fn $method(self, other: &Polynomial<C>) -> Polynomial<C> {
                self.$poly_fn(other)
            }
        }

        impl<C: Coefficient> $imp<Polynomial<C>> for &Polynomial<C> {
            type Output = Polynomial<C>;

            #[inline(always)]
            fn $method(self, other: Polynomial<C>) -> Polynomial<C> {
                self.$poly_fn(&other)
            }
        }

        impl<C: Coefficient> $imp<&Polynomial<C>> for Polynomial<C> {
            type Output = Polynomial<C>;

            #[inline(always)]
            fn $method(self, other: &Polynomial<C>) -> Polynomial<C> {
                self.$poly_fn(other)
            }
        }

        impl<C: Coefficient> $imp<Polynomial<C>> for Polynomial<C> {
            type Output = Polynomial<C>;

            #[inline(always)]
            fn $method(self, other: Polynomial<C>) -> Polynomial<C> {
                self.$poly_fn(&other)
            }
        }

        impl<C: Coefficient> $imp<C> for &Polynomial<C> {
            type Output = Polynomial<C>;

            #[inline(always)]
            fn $method(self, other: C) -> Polynomial<C> {
                self.$scalar_fn(&other)
            }
        }

        impl<C: Coefficient> $imp<C> for Polynomial<C> {
            type Output = Polynomial<C>;

            #[inline(always)]
            fn $method(self, other: C) -> Polynomial<C> {
                self.$scalar_fn(&other)
            }
        }
    };
}

forward_binop!(Add, add, add_poly, add_scalar);
forward_binop!(Sub, sub, sub_poly, sub_scalar);
forward_binop!(Mul, mul, mul_poly, scale);

// Only implemented for references: an owned impl would take precedence over
// the inherent `pow(&self)` in method calls and consume the receiver.
impl<C: Coefficient> Pow<u32> for &Polynomial<C> {
    type Output = Polynomial<C>;

    #[inline(always)]
    fn pow(self, n: u32) -> Polynomial<C> {
        Polynomial::pow(self, n)
    }
}

/// Implement `scalar + poly`, `scalar - poly` and `scalar * poly` for a
/// concrete coefficient type. Used by the `Coefficient` impls of this crate
/// and by `impl_fp_coefficient!`.
#[doc(hidden)]
#[macro_export]
macro_rules! impl_scalar_lhs_ops {
    ($t:ty) => {
        impl ::core::ops::Add<$crate::Polynomial<$t>> for $t {
            type Output = $crate::Polynomial<$t>;

            #[inline(always)]
            fn add(self, other: $crate::Polynomial<$t>) -> $crate::Polynomial<$t> {
                other.add_scalar(&self)
            }
        }

        impl ::core::ops::Add<&$crate::Polynomial<$t>> for $t {
            type Output = $crate::Polynomial<$t>;

            #[inline(always)]
            fn add(self, other: &$crate::Polynomial<$t>) -> $crate::Polynomial<$t> {
                other.add_scalar(&self)
            }
        }

        impl ::core::ops::Sub<$crate::Polynomial<$t>> for $t {
            type Output = $crate::Polynomial<$t>;

            #[inline(always)]
            fn sub(self, other: $crate::Polynomial<$t>) -> $crate::Polynomial<$t> {
                other.rsub_scalar(&self)
            }
        }

        impl ::core::ops::Sub<&$crate::Polynomial<$t>> for $t {
            type Output = $crate::Polynomial<$t>;

            #[inline(always)]
            fn sub(self, other: &$crate::Polynomial<$t>) -> $crate::Polynomial<$t> {
                other.rsub_scalar(&self)
            }
        }

        impl ::core::ops::Mul<$crate::Polynomial<$t>> for $t {
            type Output = $crate::Polynomial<$t>;

            #[inline(always)]
            fn mul(self, other: $crate::Polynomial<$t>) -> $crate::Polynomial<$t> {
                other.scale(&self)
            }
        }

        impl ::core::ops::Mul<&$crate::Polynomial<$t>> for $t {
            type Output = $crate::Polynomial<$t>;

            #[inline(always)]
            fn mul(self, other: &$crate::Polynomial<$t>) -> $crate::Polynomial<$t> {
                other.scale(&self)
            }
        }
    };
}

impl<C: Coefficient> Display for Polynomial<C> {
    /// Sum of the non-zero terms, highest degree first, e.g. "x^2 + 2x + 3".
    /// Unit coefficients are omitted from x and x^d; the zero polynomial
    /// prints as "0".
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut first = true;
        for (i, c) in self.coeffs.iter().enumerate().rev() {
            if c.is_zero() {
                continue;
            }
            if !first {
                write!(f, " + ")?;
            }
            first = false;
            match i {
                0 => write!(f, "{}", c)?,
                1 if c.is_one() => write!(f, "x")?,
                1 => write!(f, "{}x", c)?,
                _ if c.is_one() => write!(f, "x^{}", i)?,
                _ => write!(f, "{}x^{}", c, i)?,
            }
        }
        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}
