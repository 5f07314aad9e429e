use serde_json::Value;

use crate::error::MaterialError;

/// Anything that can be coerced to a Radiance real argument.
pub trait AsNumber {
    fn as_number(&self) -> Option<f64>;
}

macro_rules! impl_as_number {
    ($($t:ty),*) => {
        $(
            impl AsNumber for $t {
                fn as_number(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }
        )*
    };
}

impl_as_number!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl AsNumber for str {
    fn as_number(&self) -> Option<f64> {
        self.trim().parse().ok()
    }
}

impl AsNumber for String {
    fn as_number(&self) -> Option<f64> {
        self.as_str().as_number()
    }
}

impl AsNumber for Value {
    fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.as_number(),
            _ => None,
        }
    }
}

impl<T: AsNumber + ?Sized> AsNumber for &T {
    fn as_number(&self) -> Option<f64> {
        (**self).as_number()
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct NumberConfig {
    /// Label used in error messages
    pub name: &'static str,
    /// Reject values below zero
    pub check_positive: bool,
}

impl NumberConfig {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            check_positive: false,
        }
    }

    pub const fn positive(name: &'static str) -> Self {
        Self {
            name,
            check_positive: true,
        }
    }

    pub fn check(&self, value: impl AsNumber) -> Result<f64, MaterialError> {
        let value = value
            .as_number()
            .ok_or_else(|| MaterialError::invalid(self.name, "not a number"))?;

        if !value.is_finite() {
            return Err(MaterialError::invalid(
                self.name,
                format!("{value} is not a finite number"),
            ));
        }

        if self.check_positive && value < 0.0 {
            return Err(MaterialError::invalid(
                self.name,
                format!("expected a positive number, got {value}"),
            ));
        }

        Ok(value)
    }
}

///
/// Numeric material attribute, validated against its config on every assignment
///
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RadianceNumber {
    config: NumberConfig,
    value: f64,
}

impl RadianceNumber {
    pub fn new(config: NumberConfig, value: impl AsNumber) -> Result<Self, MaterialError> {
        let value = config.check(value)?;

        Ok(Self { config, value })
    }

    pub fn set(&mut self, value: impl AsNumber) -> Result<(), MaterialError> {
        self.value = self.config.check(value)?;
        log::trace!("{} set to {}", self.config.name, self.value);

        Ok(())
    }

    pub fn get(&self) -> f64 {
        self.value
    }

    pub fn config(&self) -> NumberConfig {
        self.config
    }
}
