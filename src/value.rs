use rust_decimal::Decimal;
use std::fmt::{self, Display, Formatter};

/// A raw value as handed over by the ODBC driver binding, before result processing.
#[derive(Default, Debug, Clone)]
pub enum Value {
    #[default]
    Null,
    Boolean(Option<bool>),
    Int64(Option<i64>),
    Int128(Option<i128>),
    Float64(Option<f64>),
    Decimal(Option<Decimal>, /* prec: */ u8, /* scale: */ u8),
    Varchar(Option<String>),
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Boolean(l), Self::Boolean(r)) => l == r,
            (Self::Int64(l), Self::Int64(r)) => l == r,
            (Self::Int128(l), Self::Int128(r)) => l == r,
            (Self::Float64(l), Self::Float64(r)) => l == r,
            (Self::Decimal(l, l_prec, l_scale), Self::Decimal(r, r_prec, r_scale)) => {
                l == r && l_prec == r_prec && l_scale == r_scale
            }
            (Self::Varchar(l), Self::Varchar(r)) => l == r,
            _ => core::mem::discriminant(self) == core::mem::discriminant(other),
        }
    }
}

impl Value {
    pub fn is_null(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Boolean(v) => v.is_none(),
            Value::Int64(v) => v.is_none(),
            Value::Int128(v) => v.is_none(),
            Value::Float64(v) => v.is_none(),
            Value::Decimal(v, ..) => v.is_none(),
            Value::Varchar(v) => v.is_none(),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Boolean(Some(v)) => write!(f, "{}", v),
            Value::Int64(Some(v)) => write!(f, "{}", v),
            Value::Int128(Some(v)) => write!(f, "{}", v),
            Value::Float64(Some(v)) => write!(f, "{}", v),
            Value::Decimal(Some(v), ..) => write!(f, "{}", v),
            Value::Varchar(Some(v)) => write!(f, "'{}'", v),
            _ => f.write_str("NULL"),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(Some(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int64(Some(value))
    }
}

impl From<i128> for Value {
    fn from(value: i128) -> Self {
        Value::Int128(Some(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float64(Some(value))
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        let scale = value.scale() as u8;
        Value::Decimal(Some(value), 0, scale)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Varchar(Some(value.into()))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Varchar(Some(value))
    }
}
