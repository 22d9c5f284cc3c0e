//! The shipped two-operand formulas.
//!
//! Every function rejects inputs whose result is not a finite real number instead of returning
//! `NaN` or an infinity.

use crate::error::MathError;

/// `a^b / (a*b)`.
pub fn bodma(a: f64, b: f64) -> Result<f64, MathError> {
    let product = a * b;
    if product == 0.0 {
        return Err(MathError::DivisionByZero("a*b cannot be 0".to_string()));
    }
    finite(pow(a, b)? / product)
}

/// `a*b / a^b`, the reciprocal of [`bodma`] wherever both are defined.
pub fn codma(a: f64, b: f64) -> Result<f64, MathError> {
    let power = pow(a, b)?;
    if power == 0.0 {
        return Err(MathError::DivisionByZero("a^b cannot be 0".to_string()));
    }
    finite(a * b / power)
}

/// `a^b * b^a`.
pub fn prodma(a: f64, b: f64) -> Result<f64, MathError> {
    finite(pow(a, b)? * pow(b, a)?)
}

fn pow(base: f64, exp: f64) -> Result<f64, MathError> {
    if base == 0.0 && exp < 0.0 {
        return Err(MathError::Domain(format!(
            "0 cannot be raised to a negative power ({exp})"
        )));
    }
    let value = base.powf(exp);
    if value.is_nan() {
        return Err(MathError::Domain(format!(
            "{base}^{exp} is not a real number"
        )));
    }
    finite(value)
}

fn finite(value: f64) -> Result<f64, MathError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(MathError::Domain("result out of range".to_string()))
    }
}
