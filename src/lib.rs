//! Univariate polynomials over a generic coefficient ring.
//!
//! ```
//! use polynomials::Polynomial;
//!
//! let f = Polynomial::from_slice(&[1i64, 1]).unwrap();
//! assert_eq!((&f * &f).to_string(), "x^2 + 2x + 1");
//! assert_eq!(f.pow(3).evaluate(&2), 27);
//! ```

pub mod coefficient;
pub mod error;
pub mod polynomial_ring;

pub use coefficient::Coefficient;
pub use error::{PolyError, Result};
pub use polynomial_ring::{operand::Operand, poly::Polynomial};

// Used by `impl_fp_coefficient!`.
#[cfg(feature = "fields")]
pub use fp2;
