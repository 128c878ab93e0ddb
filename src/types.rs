use crate::{Error, ErrorContext, Result, Value};
use rust_decimal::Decimal;
use std::{
    fmt::{self, Debug, Formatter},
    mem,
    str::FromStr,
};

/// Type code the driver reports for character columns.
///
/// Integer columns sometimes come back with this code and a textual value.
pub const TEXT_TYPE_CODE: i32 = 30;

/// Display scale used for decimals when neither a return scale nor a scale is configured.
pub const DEFAULT_DECIMAL_RETURN_SCALE: u8 = 10;

/// Converts a raw driver value into the value handed to the application.
pub type ResultProcessor = Box<dyn Fn(Value) -> Result<Value> + Send + Sync>;

/// Configuration of a numeric column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Numeric {
    pub precision: Option<u8>,
    pub scale: Option<u8>,
    /// Return decimals rather than floating point numbers.
    pub as_decimal: bool,
    /// Number of digits kept when converting floating point results.
    pub decimal_return_scale: Option<u8>,
}

impl Numeric {
    pub const fn new(precision: Option<u8>, scale: Option<u8>) -> Self {
        Self {
            precision,
            scale,
            as_decimal: true,
            decimal_return_scale: None,
        }
    }

    /// Floating point flavor, results are not turned into decimals.
    pub const fn float() -> Self {
        Self {
            precision: None,
            scale: None,
            as_decimal: false,
            decimal_return_scale: None,
        }
    }

    pub const fn as_decimal(mut self, as_decimal: bool) -> Self {
        self.as_decimal = as_decimal;
        self
    }

    pub const fn decimal_return_scale(mut self, scale: u8) -> Self {
        self.decimal_return_scale = Some(scale);
        self
    }

    pub fn effective_decimal_return_scale(&self) -> u8 {
        self.decimal_return_scale
            .or(self.scale)
            .unwrap_or(DEFAULT_DECIMAL_RETURN_SCALE)
    }
}

impl Default for Numeric {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Generic column types of the host toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlType {
    Boolean,
    SmallInteger,
    Integer,
    BigInteger,
    Numeric(Numeric),
    Float(Numeric),
    Char(Option<u32>),
    Varchar(Option<u32>),
    Date,
    Timestamp,
}

/// Decimal result handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExaDecimal {
    pub numeric: Numeric,
}

impl ExaDecimal {
    pub const fn new(numeric: Numeric) -> Self {
        Self { numeric }
    }

    /// `None` when the type returns floating point numbers, those are left as they are.
    pub fn result_processor(&self) -> Option<ResultProcessor> {
        if !self.numeric.as_decimal {
            return None;
        }
        let precision = self.numeric.precision.unwrap_or(0);
        let scale = self.numeric.effective_decimal_return_scale();
        Some(Box::new(move |value: Value| {
            to_decimal(value, precision, scale)
        }))
    }
}

fn to_decimal(value: Value, precision: u8, scale: u8) -> Result<Value> {
    if value.is_null() {
        return Ok(value);
    }
    let decimal = match value {
        Value::Decimal(..) => return Ok(value),
        // Formatted at the display scale first, 1.1 must not become 1.100000000000000088
        Value::Float64(Some(v)) => {
            let formatted = format!("{:.*}", scale as usize, v);
            Decimal::from_str(&formatted)
                .with_context(|| format!("Cannot convert the float {} into a decimal", v))?
        }
        Value::Int64(Some(v)) => Decimal::from(v),
        Value::Int128(Some(v)) => Decimal::try_from_i128_with_scale(v, 0)
            .with_context(|| format!("Cannot convert the integer {} into a decimal", v))?,
        Value::Boolean(Some(v)) => Decimal::from(v as i64),
        Value::Varchar(Some(ref v)) => {
            let v = v.trim();
            Decimal::from_str(v)
                .or_else(|_| Decimal::from_scientific(v))
                .with_context(|| format!("Cannot convert `{}` into a decimal", v))?
        }
        _ => {
            return Err(Error::msg(format!(
                "Cannot convert {:?} into a decimal",
                value
            )));
        }
    };
    let scale = decimal.scale() as u8;
    Ok(Value::Decimal(Some(decimal), precision, scale))
}

/// Integer result handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExaInteger;

impl ExaInteger {
    /// Values of columns reported as [`TEXT_TYPE_CODE`] are parsed, everything else passes
    /// through.
    pub fn result_processor(&self, type_code: i32) -> Option<ResultProcessor> {
        Some(Box::new(move |value: Value| {
            if type_code == TEXT_TYPE_CODE {
                to_integer(value)
            } else {
                Ok(value)
            }
        }))
    }
}

fn to_integer(value: Value) -> Result<Value> {
    if value.is_null() {
        return Ok(value);
    }
    match value {
        Value::Int64(..) | Value::Int128(..) => Ok(value),
        Value::Varchar(Some(ref v)) => {
            let v = v.trim();
            if let Ok(v) = v.parse::<i64>() {
                return Ok(Value::Int64(Some(v)));
            }
            // DECIMAL(36,0) columns exceed i64
            v.parse::<i128>()
                .map(|v| Value::Int128(Some(v)))
                .with_context(|| format!("Cannot convert `{}` into an integer", v))
        }
        _ => Err(Error::msg(format!(
            "Cannot convert {:?} into an integer",
            value
        ))),
    }
}

/// Dialect specific implementation of a generic column type, only the result processing changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnTypeAdapter {
    Decimal(ExaDecimal),
    Integer(ExaInteger),
}

impl ColumnTypeAdapter {
    /// `None` for the types that are used as they are.
    pub fn adapt(sql_type: &SqlType) -> Option<Self> {
        match sql_type {
            SqlType::Numeric(numeric) | SqlType::Float(numeric) => {
                Some(Self::Decimal(ExaDecimal::new(*numeric)))
            }
            SqlType::SmallInteger | SqlType::Integer | SqlType::BigInteger => {
                Some(Self::Integer(ExaInteger))
            }
            _ => None,
        }
    }

    pub fn result_processor(&self, type_code: i32) -> Option<ResultProcessor> {
        match self {
            Self::Decimal(v) => v.result_processor(),
            Self::Integer(v) => v.result_processor(type_code),
        }
    }
}

/// A result set column as described by the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescription {
    pub name: String,
    pub sql_type: SqlType,
    pub type_code: i32,
}

impl ColumnDescription {
    pub fn new(name: impl Into<String>, sql_type: SqlType, type_code: i32) -> Self {
        Self {
            name: name.into(),
            sql_type,
            type_code,
        }
    }
}

/// Applies the result processors of every column to the fetched rows.
pub struct RowProcessor {
    columns: Box<[(String, Option<ResultProcessor>)]>,
}

impl RowProcessor {
    pub fn new(columns: &[ColumnDescription]) -> Self {
        Self {
            columns: columns
                .iter()
                .map(|c| {
                    let processor = ColumnTypeAdapter::adapt(&c.sql_type)
                        .and_then(|v| v.result_processor(c.type_code));
                    (c.name.clone(), processor)
                })
                .collect(),
        }
    }

    pub fn process(&self, row: &mut [Value]) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(Error::msg(format!(
                "The row has {} values but {} columns are described",
                row.len(),
                self.columns.len()
            )));
        }
        for (value, (name, processor)) in row.iter_mut().zip(self.columns.iter()) {
            let Some(processor) = processor else {
                continue;
            };
            *value = processor(mem::take(value))
                .with_context(|| format!("While processing the column `{}`", name))?;
        }
        Ok(())
    }
}

impl Debug for RowProcessor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.columns.iter().map(|(name, p)| (name, p.is_some())))
            .finish()
    }
}
