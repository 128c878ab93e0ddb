use crate::{
    ColumnDescription, ColumnTypeAdapter, ConnectArgs, ConnectionOptions, DriverVersion, Error,
    ExasolSqlWriter, InfoType, OdbcBinding, OdbcConnection, Result, ResultProcessor, RowProcessor,
    ServerVersion, SqlType, URL_SCHEME, Value, interpret_destination, redact_url,
};
use tokio::sync::OnceCell;

/// Exasol dialect for the turbodbc flavored ODBC binding.
///
/// The driver and server versions are detected on first use and cached for the lifetime of the
/// instance.
#[derive(Debug, Default)]
pub struct ExasolDriver {
    driver_version: OnceCell<DriverVersion>,
    server_version_info: OnceCell<ServerVersion>,
}

impl ExasolDriver {
    pub const NAME: &'static str = URL_SCHEME;
    pub const DIALECT: &'static str = "exasol";
    pub const DRIVER: &'static str = "turbodbc";
    pub const SUPPORTS_NATIVE_DECIMAL: bool = false;
    pub const SUPPORTS_SANE_MULTI_ROWCOUNT: bool = false;
    pub const SERVER_VERSION_QUERY: &'static str = "select PARAM_VALUE from SYS.EXA_METADATA where PARAM_NAME = 'databaseProductVersion'";

    pub fn new() -> Self {
        Self::default()
    }

    /// Negotiates the arguments the binding connects with.
    pub fn create_connect_args(&self, url: &str) -> Result<ConnectArgs> {
        match Self::negotiate(url) {
            Ok(args) => {
                log::debug!("Connection arguments: {:?}", args);
                Ok(args)
            }
            Err(e) => {
                let url = redact_url(url);
                let e = e.context(format!(
                    "While creating the connection arguments for `{}`",
                    truncate_long!(url)
                ));
                log::error!("{:#}", e);
                Err(e)
            }
        }
    }

    fn negotiate(url: &str) -> Result<ConnectArgs> {
        let mut options = ConnectionOptions::from_url(url)?;
        interpret_destination(&mut options)?;
        let dsn = options.remove("dsn").flatten();
        Ok(ConnectArgs { dsn, options })
    }

    /// Opens a physical connection through the binding.
    pub async fn connect<B: OdbcBinding>(&self, binding: &B, url: &str) -> Result<B::Connection> {
        let args = self.create_connect_args(url)?;
        binding.connect(args).await.map_err(|e| {
            let url = redact_url(url);
            let e = e.context(format!("While trying to connect to `{}`", truncate_long!(url)));
            log::error!("{:#}", e);
            e
        })
    }

    /// Version of the ODBC driver, `2.0.0` when it does not report one.
    pub async fn driver_version<C: OdbcConnection>(
        &self,
        connection: &mut C,
    ) -> Result<&DriverVersion> {
        self.driver_version
            .get_or_try_init(move || async move {
                let version = match connection.get_info(InfoType::DriverVersion).await? {
                    Some(v) if !v.trim().is_empty() => DriverVersion::parse(&v),
                    _ => {
                        log::trace!(
                            "The driver did not report its version, assuming {}",
                            DriverVersion::FALLBACK
                        );
                        DriverVersion::default()
                    }
                };
                log::debug!("ODBC driver version {}", version);
                Ok::<_, Error>(version)
            })
            .await
            .map_err(|e: Error| {
                let e = e.context("While reading the driver version");
                log::error!("{:#}", e);
                e
            })
    }

    /// Version of the server, asked to the driver when it is recent enough, read from the
    /// metadata tables otherwise.
    pub async fn server_version_info<C: OdbcConnection>(
        &self,
        connection: &mut C,
    ) -> Result<ServerVersion> {
        self.server_version_info
            .get_or_try_init(move || async move {
                let driver_version = self.driver_version(connection).await?;
                let version = if driver_version.reports_dbms_version() {
                    log::trace!("Reading the server version from `SQL_DBMS_VER`");
                    connection
                        .get_info(InfoType::DbmsVersion)
                        .await?
                        .ok_or_else(|| {
                            Error::msg("The driver did not report the server version")
                        })?
                } else {
                    log::trace!("Reading the server version from `SYS.EXA_METADATA`");
                    match connection.query_scalar(Self::SERVER_VERSION_QUERY).await? {
                        Some(Value::Varchar(Some(v))) => v,
                        Some(v) => {
                            return Err(Error::msg(format!(
                                "Unexpected server version value {:?}",
                                v
                            )));
                        }
                        None => {
                            return Err(Error::msg("The server version query returned no rows"));
                        }
                    }
                };
                let version = ServerVersion::parse(&version)?;
                log::debug!("Exasol server version {}", version);
                Ok::<_, Error>(version)
            })
            .await
            .copied()
            .map_err(|e: Error| {
                let e = e.context("While detecting the server version");
                log::error!("{:#}", e);
                e
            })
    }

    /// The server version, if it was already detected.
    pub fn cached_server_version_info(&self) -> Option<ServerVersion> {
        self.server_version_info.get().copied()
    }

    /// The driver version, if it was already detected.
    pub fn cached_driver_version(&self) -> Option<&DriverVersion> {
        self.driver_version.get()
    }

    /// Dialect implementation of a generic column type, `None` when it is used as it is.
    pub fn colspec(&self, sql_type: &SqlType) -> Option<ColumnTypeAdapter> {
        ColumnTypeAdapter::adapt(sql_type)
    }

    pub fn result_processor(&self, sql_type: &SqlType, type_code: i32) -> Option<ResultProcessor> {
        self.colspec(sql_type)
            .and_then(|v| v.result_processor(type_code))
    }

    pub fn row_processor(&self, columns: &[ColumnDescription]) -> RowProcessor {
        RowProcessor::new(columns)
    }

    pub fn sql_writer(&self) -> ExasolSqlWriter {
        ExasolSqlWriter::default()
    }
}
