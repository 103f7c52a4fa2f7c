//! History-tracking calculator.
//!
//! Every completed operation appends one human-readable entry such as
//! `"3 + 4 = 7"` to the calculator's log, in call order. The log belongs to
//! the calculator; callers only ever receive copies of it.

use std::fmt::Display;

use tracing::debug;

use crate::error::ArithmeticError;

/// Values the calculator can operate on.
///
/// Integer operands report overflow as `None`. Float operands follow IEEE
/// semantics and always produce a value, saturating to infinity.
pub trait Operand: Copy + Display {
    /// Returns `self + rhs`, or `None` if the sum is not representable.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// Returns `self * rhs`, or `None` if the product is not representable.
    fn checked_mul(self, rhs: Self) -> Option<Self>;
}

macro_rules! integer_operand {
    ($($ty:ty),* $(,)?) => {$(
        impl Operand for $ty {
            fn checked_add(self, rhs: Self) -> Option<Self> {
                <$ty>::checked_add(self, rhs)
            }

            fn checked_mul(self, rhs: Self) -> Option<Self> {
                <$ty>::checked_mul(self, rhs)
            }
        }
    )*};
}

macro_rules! float_operand {
    ($($ty:ty),* $(,)?) => {$(
        impl Operand for $ty {
            fn checked_add(self, rhs: Self) -> Option<Self> {
                Some(self + rhs)
            }

            fn checked_mul(self, rhs: Self) -> Option<Self> {
                Some(self * rhs)
            }
        }
    )*};
}

integer_operand!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
float_operand!(f32, f64);

/// Binary operations recorded in the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Addition, rendered as `+`.
    Add,
    /// Multiplication, rendered as `*`.
    Multiply,
}

impl Operator {
    /// Returns the symbol used in history entries.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Multiply => '*',
        }
    }

    /// Parses a symbol back into an operator.
    ///
    /// Only the history symbols `+` and `*` are recognised.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "*" => Some(Self::Multiply),
            _ => None,
        }
    }

    fn apply<T: Operand>(self, a: T, b: T) -> Option<T> {
        match self {
            Self::Add => a.checked_add(b),
            Self::Multiply => a.checked_mul(b),
        }
    }
}

/// Calculator that records each operation it performs.
///
/// # Examples
///
/// ```
/// use sample_kit::Calculator;
///
/// let mut calculator = Calculator::new();
/// assert_eq!(calculator.add(3, 4), Ok(7));
/// assert_eq!(calculator.multiply(7, 2), Ok(14));
/// assert_eq!(calculator.history(), ["3 + 4 = 7", "7 * 2 = 14"]);
///
/// calculator.clear_history();
/// assert!(calculator.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculator<T = f64> {
    history: Vec<String>,
    _operand: std::marker::PhantomData<T>,
}

impl<T: Operand> Default for Calculator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Operand> Calculator<T> {
    /// Creates a calculator with an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            history: Vec::new(),
            _operand: std::marker::PhantomData,
        }
    }

    /// Returns `a + b` and records `"{a} + {b} = {result}"`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::CalculationOverflow`] when the sum does not
    /// fit in `T`; nothing is recorded in that case.
    pub fn add(&mut self, a: T, b: T) -> Result<T, ArithmeticError> {
        self.apply(Operator::Add, a, b)
    }

    /// Returns `a * b` and records `"{a} * {b} = {result}"`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::CalculationOverflow`] when the product does
    /// not fit in `T`; nothing is recorded in that case.
    pub fn multiply(&mut self, a: T, b: T) -> Result<T, ArithmeticError> {
        self.apply(Operator::Multiply, a, b)
    }

    /// Applies `operator` to the operands and records the entry.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::CalculationOverflow`] when the result does
    /// not fit in `T`. The history is left unchanged.
    pub fn apply(&mut self, operator: Operator, a: T, b: T) -> Result<T, ArithmeticError> {
        let symbol = operator.symbol();
        let result = operator
            .apply(a, b)
            .ok_or_else(|| ArithmeticError::CalculationOverflow {
                expression: format!("{a} {symbol} {b}"),
            })?;
        let entry = format!("{a} {symbol} {b} = {result}");
        debug!(%entry, "calculator operation recorded");
        self.history.push(entry);
        Ok(result)
    }

    /// Returns a copy of the history in call order.
    ///
    /// Changes to the returned vector do not affect the calculator.
    #[must_use]
    pub fn history(&self) -> Vec<String> {
        self.history.clone()
    }

    /// Discards every recorded entry. Clearing an empty history is a no-op.
    pub fn clear_history(&mut self) {
        debug!(cleared = self.history.len(), "calculator history cleared");
        self.history.clear();
    }

    /// Number of operations recorded since the last clear.
    #[must_use]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Returns `true` when no operations have been recorded since the last
    /// clear.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}
