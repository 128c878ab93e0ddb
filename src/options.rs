use crate::{
    DriverOptions, DriverParam, Error, ErrorContext, Result, TRANSLATED_PARAMS, coerce_param,
    make_options,
};
use std::{
    collections::BTreeMap,
    fmt::{self, Debug, Formatter},
};
use url::Url;
use urlencoding::decode;

/// Always on connection parameters.
///
/// `inttypesinresultsifpossible` makes the Exasol driver report integer columns with native
/// integer types instead of decimals.
pub const DEFAULT_CONNECTION_PARAMS: [(&str, &str); 1] = [("inttypesinresultsifpossible", "y")];

/// Defaults for the translated driver parameters.
pub const DEFAULT_DRIVER_PARAMS: [(&str, &str); 1] = [("read_buffer_size", "50")];

/// Key the driver native options are exposed under.
pub const DRIVER_OPTIONS_KEY: &str = "turbodbc_options";

/// The URL scheme accepted by this dialect.
pub const URL_SCHEME: &str = "exa+turbodbc";

/// Connection parameters keyed by lower case name, together with the driver native options.
///
/// A `None` value is a parameter explicitly set to no value (written as `None` in the url).
#[derive(Clone, Default, PartialEq)]
pub struct ConnectionOptions {
    params: BTreeMap<String, Option<String>>,
    driver_options: DriverOptions,
}

impl ConnectionOptions {
    pub fn new() -> Self {
        Default::default()
    }

    /// Builds the options from a `exa+turbodbc://` url, applying the defaults and translating the
    /// driver parameters.
    pub fn from_url(url: &str) -> Result<Self> {
        let user_options = UrlParams::parse(url)?.into_user_options();
        let mut options = Self::with_defaults(user_options);
        options.translate_none();
        options.translate_driver_params()?;
        Ok(options)
    }

    /// Layers the built in defaults, the driver defaults and finally the user options.
    pub fn with_defaults(user_options: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut options = Self::new();
        for (key, value) in DEFAULT_CONNECTION_PARAMS
            .into_iter()
            .chain(DEFAULT_DRIVER_PARAMS)
        {
            options.insert(key, Some(value.to_string()));
        }
        for (key, value) in user_options {
            options.insert(&key, Some(value));
        }
        options
    }

    pub fn get(&self, key: &str) -> Option<&Option<String>> {
        self.params.get(&key.to_lowercase())
    }

    /// The non null text of a parameter.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|v| v.as_deref())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.params.contains_key(&key.to_lowercase())
    }

    /// Sets a parameter, the key is lower cased.
    pub fn insert(&mut self, key: &str, value: Option<String>) -> Option<Option<String>> {
        self.params.insert(key.to_lowercase(), value)
    }

    pub fn remove(&mut self, key: &str) -> Option<Option<String>> {
        self.params.remove(&key.to_lowercase())
    }

    /// Parameters in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn driver_options(&self) -> &DriverOptions {
        &self.driver_options
    }

    /// Replaces the literal text `None` with no value.
    pub fn translate_none(&mut self) {
        for value in self.params.values_mut() {
            if value.as_deref() == Some("None") {
                *value = None;
            }
        }
    }

    /// Removes the translated parameters and turns them into the driver native options.
    pub fn translate_driver_params(&mut self) -> Result<()> {
        if self.remove(DRIVER_OPTIONS_KEY).is_some() {
            log::warn!(
                "`{}` cannot be set directly, it is built from the translated parameters",
                DRIVER_OPTIONS_KEY
            );
        }
        let mut params: Vec<(&str, DriverParam)> = Vec::new();
        for key in TRANSLATED_PARAMS {
            let Some(raw) = self.remove(key) else {
                continue;
            };
            let Some(raw) = raw else {
                log::trace!("`{}` has no value, keeping the driver default", key);
                continue;
            };
            let param = coerce_param(key, &raw)
                .with_context(|| format!("While translating the connection parameter `{}`", key))?;
            params.push((key, param));
        }
        self.driver_options = make_options(params)?;
        Ok(())
    }
}

impl Debug for ConnectionOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (key, value) in self.iter() {
            if key == "pwd" {
                map.entry(&key, &"<redacted>");
            } else {
                map.entry(&key, &value);
            }
        }
        map.entry(&DRIVER_OPTIONS_KEY, &self.driver_options);
        map.finish()
    }
}

/// The url with its password replaced, to be shown in messages and logs.
pub fn redact_url(url: &str) -> String {
    if let Ok(mut parsed) = Url::parse(url) {
        if parsed.password().is_some() {
            let _ = parsed.set_password(Some("redacted"));
        }
        return parsed.to_string();
    }
    let Some(start) = url.find("://").map(|v| v + 3) else {
        return url.to_string();
    };
    let authority = &url[start..];
    let end = authority.find(['/', '?', '#']).unwrap_or(authority.len());
    let Some(at) = authority[..end].rfind('@') else {
        return url.to_string();
    };
    let user = authority[..at].split(':').next().unwrap_or_default();
    format!(
        "{}{}:redacted@{}",
        &url[..start],
        user,
        &authority[at + 1..]
    )
}

/// The pieces of a connection url, already percent decoded.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UrlParams {
    pub username: Option<String>,
    pub password: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database: Option<String>,
    pub query: Vec<(String, String)>,
}

impl UrlParams {
    pub fn parse(url: &str) -> Result<Self> {
        let context = || {
            let url = redact_url(url);
            format!("While parsing the connection url `{}`", truncate_long!(url))
        };
        let prefix = format!("{}://", URL_SCHEME);
        if !url.starts_with(&prefix) {
            return Err(Error::msg(format!(
                "Exasol connection url must start with `{}`",
                prefix
            ))
            .context(context()));
        }
        let url = Url::parse(url).with_context(context)?;
        let decoded = |v: &str| -> Result<Option<String>> {
            if v.is_empty() {
                return Ok(None);
            }
            Ok(Some(decode(v).with_context(context)?.into_owned()))
        };
        let mut query: Vec<(String, String)> = Vec::new();
        for (key, value) in url.query_pairs() {
            query.retain(|(k, _)| *k != *key);
            query.push((key.into_owned(), value.into_owned()));
        }
        Ok(Self {
            username: decoded(url.username())?,
            password: url.password().map(&decoded).transpose()?.flatten(),
            host: url.host_str().map(&decoded).transpose()?.flatten(),
            port: url.port(),
            database: decoded(url.path().trim_start_matches('/'))?,
            query,
        })
    }

    /// Renames the url fields to the driver parameter names (`uid`, `pwd`, `exaschema`,
    /// `destination`) and appends the query parameters.
    pub fn into_user_options(self) -> Vec<(String, String)> {
        let mut result: Vec<(String, String)> = [
            ("uid", self.username),
            ("pwd", self.password),
            ("exaschema", self.database),
            ("destination", self.host),
            ("port", self.port.map(|v| v.to_string())),
        ]
        .into_iter()
        .filter_map(|(k, v)| v.map(|v| (k.to_string(), v)))
        .collect();
        result.extend(self.query);
        result
    }
}

/// Arguments the binding opens the physical connection with: the positional data source name
/// (if the connection is not addressed by host) and the keyword options.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectArgs {
    pub dsn: Option<String>,
    pub options: ConnectionOptions,
}

impl ConnectArgs {
    pub fn into_parts(self) -> (Vec<Option<String>>, ConnectionOptions) {
        (vec![self.dsn], self.options)
    }

    /// ODBC connection string (`key=value;...`), the data source first and parameters without a
    /// value left out.
    pub fn connection_string(&self) -> String {
        let mut out = String::new();
        let dsn = self.dsn.as_deref().map(|v| ("dsn", v));
        let options = self.options.iter().filter_map(|(k, v)| v.map(|v| (k, v)));
        crate::util::separated_by(
            &mut out,
            dsn.into_iter().chain(options),
            |out, (key, value)| {
                out.push_str(key);
                out.push('=');
                write_attribute_value(out, value);
            },
            ";",
        );
        out
    }
}

fn write_attribute_value(out: &mut String, value: &str) {
    if value.contains([';', '{', '}']) || value.starts_with(' ') || value.ends_with(' ') {
        out.push('{');
        out.push_str(&value.replace('}', "}}"));
        out.push('}');
    } else {
        out.push_str(value);
    }
}
