#[macro_use]
mod util;

mod connection;
mod destination;
mod driver;
mod driver_options;
mod import_into;
mod options;
mod sql_writer;
mod types;
mod value;
mod version;

pub use ::anyhow::Context as ErrorContext;
pub use connection::*;
pub use destination::*;
pub use driver::*;
pub use driver_options::*;
pub use import_into::*;
pub use options::*;
pub use sql_writer::*;
pub use types::*;
pub use value::*;
pub use version::*;

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;
