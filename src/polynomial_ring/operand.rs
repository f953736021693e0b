use crate::coefficient::Coefficient;
use crate::error::{PolyError, Result};
use crate::polynomial_ring::poly::Polynomial;

use log::debug;
use std::any::{Any, type_name};

/// The right hand side of an arithmetic operator whose type is only known at
/// run time: either another polynomial or a bare coefficient.
#[derive(Debug)]
pub enum Operand<'a, C: Coefficient> {
    Polynomial(&'a Polynomial<C>),
    Scalar(&'a C),
}

impl<'a, C: Coefficient + 'static> Operand<'a, C> {
    /// Classify `value` as an operand of `op`. Anything other than a
    /// `Polynomial<C>` or a `C` is rejected, never converted.
    pub fn classify<T: Any>(value: &'a T, op: &'static str) -> Result<Self> {
        let any: &'a dyn Any = value;
        if let Some(f) = any.downcast_ref::<Polynomial<C>>() {
            return Ok(Operand::Polynomial(f));
        }
        if let Some(c) = any.downcast_ref::<C>() {
            return Ok(Operand::Scalar(c));
        }

        let operand = type_name::<T>();
        debug!("rejecting operand of type {} for '{}'", operand, op);
        Err(PolyError::UnsupportedOperand { op, operand })
    }
}

impl<C: Coefficient + 'static> Polynomial<C> {
    /// Return self + rhs, where rhs is a polynomial or a coefficient.
    pub fn try_add<T: Any>(&self, rhs: &T) -> Result<Self> {
        Ok(match Operand::<C>::classify(rhs, "+")? {
            Operand::Polynomial(g) => self.add_poly(g),
            Operand::Scalar(c) => self.add_scalar(c),
        })
    }

    /// Return self - rhs, where rhs is a polynomial or a coefficient.
    pub fn try_sub<T: Any>(&self, rhs: &T) -> Result<Self> {
        Ok(match Operand::<C>::classify(rhs, "-")? {
            Operand::Polynomial(g) => self.sub_poly(g),
            Operand::Scalar(c) => self.sub_scalar(c),
        })
    }

    /// Return lhs - self, where lhs is a polynomial or a coefficient.
    pub fn try_rsub<T: Any>(&self, lhs: &T) -> Result<Self> {
        Ok(match Operand::<C>::classify(lhs, "-")? {
            Operand::Polynomial(g) => g.sub_poly(self),
            Operand::Scalar(c) => self.rsub_scalar(c),
        })
    }

    /// Return self * rhs, where rhs is a polynomial or a coefficient.
    pub fn try_mul<T: Any>(&self, rhs: &T) -> Result<Self> {
        Ok(match Operand::<C>::classify(rhs, "*")? {
            Operand::Polynomial(g) => self.mul_poly(g),
            Operand::Scalar(c) => self.scale(c),
        })
    }
}
