#[cfg(test)]
mod tests {
    use exasol_dialect::{ConnectionOptions, interpret_destination};

    fn options(params: &[(&str, Option<&str>)]) -> ConnectionOptions {
        let mut options = ConnectionOptions::new();
        for (key, value) in params {
            options.insert(key, value.map(Into::into));
        }
        options
    }

    #[test]
    fn destination_with_port() {
        let mut options = options(&[
            ("destination", Some("192.168.1.2..8")),
            ("port", Some("8563")),
            ("uid", Some("sys")),
        ]);
        interpret_destination(&mut options).expect("Could not interpret the destination");
        assert_eq!(options.get_str("exahost"), Some("192.168.1.2..8:8563"));
        assert!(!options.contains("destination"));
        assert!(!options.contains("port"));
        assert!(!options.contains("dsn"));
        assert_eq!(options.get_str("uid"), Some("sys"));
    }

    #[test]
    fn destination_with_port_and_database() {
        let mut options = options(&[
            ("destination", Some("myhost")),
            ("port", Some("8888")),
            ("database", Some("DB")),
        ]);
        interpret_destination(&mut options).expect("Could not interpret the destination");
        assert_eq!(options.get_str("exahost"), Some("myhost:8888"));
        assert_eq!(options.get_str("database"), Some("DB"));
    }

    #[test]
    fn destination_database_without_port() {
        let mut options = options(&[("destination", Some("myhost")), ("database", Some("DB"))]);
        let error = interpret_destination(&mut options).expect_err("Port should be required");
        assert!(format!("{:#}", error).contains("Missing `port`"));
    }

    #[test]
    fn destination_port_without_host() {
        let mut options = options(&[("port", Some("8888"))]);
        let error = interpret_destination(&mut options).expect_err("Host should be required");
        assert!(format!("{:#}", error).contains("Missing `destination`"));

        let mut options = options_with_null_destination();
        options.insert("port", Some("8888".into()));
        assert!(interpret_destination(&mut options).is_err());
    }

    #[test]
    fn destination_port_without_value() {
        let mut options = options(&[("destination", Some("myhost")), ("port", None)]);
        assert!(interpret_destination(&mut options).is_err());
    }

    fn options_with_null_destination() -> ConnectionOptions {
        options(&[("destination", None)])
    }

    #[test]
    fn destination_as_dsn() {
        let mut options = options(&[("destination", Some("EXA_DSN")), ("uid", Some("sys"))]);
        interpret_destination(&mut options).expect("Could not interpret the destination");
        assert_eq!(options.get_str("dsn"), Some("EXA_DSN"));
        assert!(!options.contains("destination"));
        assert!(!options.contains("exahost"));

        let mut options = options_with_null_destination();
        interpret_destination(&mut options).expect("Could not interpret the destination");
        assert_eq!(options.get("dsn"), Some(&None));
    }

    #[test]
    fn destination_missing() {
        let mut options = options(&[("uid", Some("sys"))]);
        let error =
            interpret_destination(&mut options).expect_err("Destination should be required");
        assert!(format!("{:#}", error).contains("Missing `destination`"));
        assert_eq!(options.get_str("uid"), Some("sys"));
    }
}
