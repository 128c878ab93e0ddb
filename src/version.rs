use crate::{Error, Result};
use std::{
    cmp::Ordering,
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// A single piece of a [`DriverVersion`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionPart {
    Number(u64),
    Text(String),
}

impl Ord for VersionPart {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (VersionPart::Number(l), VersionPart::Number(r)) => l.cmp(r),
            (VersionPart::Text(l), VersionPart::Text(r)) => l.cmp(r),
            // Textual parts mark interim builds (`dev`, `rc`) and sort before releases
            (VersionPart::Text(..), VersionPart::Number(..)) => Ordering::Less,
            (VersionPart::Number(..), VersionPart::Text(..)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for VersionPart {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Version reported by the ODBC driver, loosely parsed.
///
/// Any string is accepted: runs of digits become numbers, other runs become text and dots
/// separate them, so interim versions like `4.2.7dev1` or `5.0.rc4` still compare sensibly.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct DriverVersion {
    parts: Vec<VersionPart>,
}

impl DriverVersion {
    /// Assumed when the driver does not report its version.
    pub const FALLBACK: &'static str = "2.0.0";
    /// First driver release reporting a usable server version through `SQL_DBMS_VER`.
    pub const DBMS_VERSION_SINCE: &'static str = "4.2.1";

    pub fn parse(value: &str) -> Self {
        let mut parts = Vec::new();
        let mut current = String::new();
        let mut flush = |current: &mut String| {
            if current.is_empty() {
                return;
            }
            let part = match current.parse::<u64>() {
                Ok(v) => VersionPart::Number(v),
                Err(..) => VersionPart::Text(current.clone()),
            };
            parts.push(part);
            current.clear();
        };
        for c in value.trim().chars() {
            if c == '.' {
                flush(&mut current);
                continue;
            }
            if !current.is_empty()
                && current.chars().all(|v| v.is_ascii_digit()) != c.is_ascii_digit()
            {
                flush(&mut current);
            }
            current.push(c);
        }
        flush(&mut current);
        Self { parts }
    }

    pub fn parts(&self) -> &[VersionPart] {
        &self.parts
    }

    /// Whether the server version can be asked to the driver instead of the metadata tables.
    pub fn reports_dbms_version(&self) -> bool {
        *self >= Self::parse(Self::DBMS_VERSION_SINCE)
    }
}

impl Default for DriverVersion {
    fn default() -> Self {
        Self::parse(Self::FALLBACK)
    }
}

impl FromStr for DriverVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self::parse(s))
    }
}

impl Display for DriverVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            match part {
                VersionPart::Number(v) => write!(f, "{}", v)?,
                VersionPart::Text(v) => f.write_str(v)?,
            }
        }
        Ok(())
    }
}

/// Version of the Exasol server as `major.minor.patch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServerVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl ServerVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parses `major.minor.patch[suffix]`.
    ///
    /// The patch level is cut at its first non digit (`12-S` is `12`), parts after the third
    /// are ignored.
    pub fn parse(value: &str) -> Result<Self> {
        let error = || Error::msg(format!("Invalid server version `{}`", value));
        let mut parts = value.trim().split('.');
        let number = |digits: &str| -> Result<u32> {
            digits.parse::<u32>().map_err(|e| Error::new(e).context(error()))
        };
        let major = number(parts.next().ok_or_else(error)?)?;
        let minor = number(parts.next().ok_or_else(error)?)?;
        let patch = parts.next().ok_or_else(error)?;
        let end = patch
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(patch.len());
        let patch = number(&patch[..end])?;
        Ok(Self::new(major, minor, patch))
    }

    pub fn as_tuple(&self) -> (u32, u32, u32) {
        (self.major, self.minor, self.patch)
    }
}

impl FromStr for ServerVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<(u32, u32, u32)> for ServerVersion {
    fn from((major, minor, patch): (u32, u32, u32)) -> Self {
        Self::new(major, minor, patch)
    }
}

impl Display for ServerVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
