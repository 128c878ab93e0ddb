use crate::{ConnectArgs, Result, Value};

/// `SQLGetInfo` information types queried by the dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum InfoType {
    /// `SQL_DRIVER_VER`
    DriverVersion = 7,
    /// `SQL_DBMS_VER`
    DbmsVersion = 18,
}

impl InfoType {
    pub const fn code(self) -> u16 {
        self as u16
    }
}

/// A physical connection opened by the ODBC binding.
pub trait OdbcConnection: Send {
    /// Driver information, `None` when the driver reports nothing.
    fn get_info(&mut self, info: InfoType) -> impl Future<Output = Result<Option<String>>> + Send;

    /// Runs the query and returns the first column of the first row, if any.
    fn query_scalar(&mut self, sql: &str) -> impl Future<Output = Result<Option<Value>>> + Send;
}

/// The ODBC binding, opens physical connections from the negotiated arguments.
pub trait OdbcBinding: Send + Sync {
    type Connection: OdbcConnection;

    fn connect(&self, args: ConnectArgs) -> impl Future<Output = Result<Self::Connection>> + Send;
}
