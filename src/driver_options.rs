use crate::{Error, Result};
use std::fmt::{self, Display, Formatter};

/// Connection parameters consumed by the dialect and routed into [`DriverOptions`] instead of
/// the connection string.
pub const TRANSLATED_PARAMS: [&str; 8] = [
    "autocommit",
    "large_decimals_as_64_bit_types",
    "limit_varchar_results_to_max",
    "parameter_sets_to_buffer",
    "prefer_unicode",
    "read_buffer_size",
    "use_async_io",
    "varchar_max_character_limit",
];

/// Translated parameters coerced to `bool`.
pub const BOOLEAN_PARAMS: [&str; 5] = [
    "autocommit",
    "large_decimals_as_64_bit_types",
    "limit_varchar_results_to_max",
    "prefer_unicode",
    "use_async_io",
];

/// Size of the buffer used to fetch result sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferSize {
    Megabytes(u64),
    Rows(u64),
}

impl Display for BufferSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            BufferSize::Megabytes(v) => write!(f, "{} MB", v),
            BufferSize::Rows(v) => write!(f, "{} rows", v),
        }
    }
}

/// A translated parameter after coercion, ready to be fed into [`make_options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverParam {
    Boolean(bool),
    Integer(u64),
    Size(BufferSize),
}

/// Driver native options, the object the ODBC binding is opened with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverOptions {
    pub read_buffer_size: BufferSize,
    pub parameter_sets_to_buffer: u64,
    pub varchar_max_character_limit: u64,
    pub use_async_io: bool,
    pub prefer_unicode: bool,
    pub autocommit: bool,
    pub large_decimals_as_64_bit_types: bool,
    pub limit_varchar_results_to_max: bool,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            read_buffer_size: BufferSize::Megabytes(20),
            parameter_sets_to_buffer: 1000,
            varchar_max_character_limit: 65535,
            use_async_io: false,
            prefer_unicode: false,
            autocommit: false,
            large_decimals_as_64_bit_types: false,
            limit_varchar_results_to_max: false,
        }
    }
}

/// Builds the driver options from keyword parameters, starting from the binding defaults.
///
/// Unknown keywords and values of the wrong kind are rejected.
pub fn make_options<'a>(
    params: impl IntoIterator<Item = (&'a str, DriverParam)>,
) -> Result<DriverOptions> {
    let mut options = DriverOptions::default();
    for (key, param) in params {
        let mismatch = || {
            Error::msg(format!(
                "Driver option `{}` does not accept the value {:?}",
                key, param
            ))
        };
        match (key, param) {
            ("read_buffer_size", DriverParam::Size(v)) => options.read_buffer_size = v,
            ("parameter_sets_to_buffer", DriverParam::Integer(v)) => {
                options.parameter_sets_to_buffer = v
            }
            ("varchar_max_character_limit", DriverParam::Integer(v)) => {
                options.varchar_max_character_limit = v
            }
            ("use_async_io", DriverParam::Boolean(v)) => options.use_async_io = v,
            ("prefer_unicode", DriverParam::Boolean(v)) => options.prefer_unicode = v,
            ("autocommit", DriverParam::Boolean(v)) => options.autocommit = v,
            ("large_decimals_as_64_bit_types", DriverParam::Boolean(v)) => {
                options.large_decimals_as_64_bit_types = v
            }
            ("limit_varchar_results_to_max", DriverParam::Boolean(v)) => {
                options.limit_varchar_results_to_max = v
            }
            (key, _) if TRANSLATED_PARAMS.contains(&key) => return Err(mismatch()),
            (key, _) => {
                return Err(Error::msg(format!("Unknown driver option `{}`", key)));
            }
        }
    }
    Ok(options)
}

/// Coerces a textual flag: `true yes on y t 1` and `false no off n f 0`, ignoring case.
pub fn as_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "y" | "t" | "1" => Ok(true),
        "false" | "no" | "off" | "n" | "f" | "0" => Ok(false),
        _ => Err(Error::msg(format!("Invalid boolean value `{}`", value))),
    }
}

pub fn as_int(value: &str) -> Result<u64> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|e| Error::new(e).context(format!("Invalid integer value `{}`", value)))
}

/// Coerces the raw text of a translated parameter according to its key.
pub fn coerce_param(key: &str, raw: &str) -> Result<DriverParam> {
    let param = if BOOLEAN_PARAMS.contains(&key) {
        DriverParam::Boolean(as_bool(raw)?)
    } else if key == "read_buffer_size" {
        DriverParam::Size(BufferSize::Megabytes(as_int(raw)?))
    } else {
        DriverParam::Integer(as_int(raw)?)
    };
    Ok(param)
}
