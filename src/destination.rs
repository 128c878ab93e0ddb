use crate::{ConnectionOptions, Error, Result};

/// Replaces the generic `destination` parameter with the way the driver is addressed.
///
/// When a `port` or a `database` parameter is present the connection goes straight to the host:
/// `destination` and `port` are combined into `exahost` (`host:port`). Otherwise `destination`
/// names a configured data source and is moved to `dsn`.
///
/// A `database` without a `port` is an error, the host address cannot be built without it.
pub fn interpret_destination(options: &mut ConnectionOptions) -> Result<()> {
    if options.contains("port") || options.contains("database") {
        let Some(port) = options.get("port").cloned() else {
            return Err(Error::msg(
                "Missing `port`, it is required to address the host directly",
            ));
        };
        let destination = match options.get("destination") {
            Some(Some(destination)) => destination.clone(),
            Some(None) => {
                return Err(Error::msg(
                    "The `destination` host has no value, it is required together with `port`",
                ));
            }
            None => {
                return Err(Error::msg(
                    "Missing `destination`, it is required together with `port`",
                ));
            }
        };
        let Some(port) = port else {
            return Err(Error::msg("The `port` has no value"));
        };
        options.remove("destination");
        options.remove("port");
        log::trace!("Connecting directly to `{}:{}`", destination, port);
        options.insert("exahost", Some(format!("{}:{}", destination, port)));
    } else {
        let Some(destination) = options.remove("destination") else {
            return Err(Error::msg(
                "Missing `destination`, it is required to name the data source",
            ));
        };
        log::trace!("Connecting through the data source {:?}", destination);
        options.insert("dsn", destination);
    }
    Ok(())
}
