#[cfg(test)]
mod tests {
    use exasol_dialect::{
        BufferSize, DriverOptions, DriverParam, as_bool, as_int, coerce_param, make_options,
    };

    #[test]
    fn coerce_booleans() {
        for v in ["true", "YES", "on", "y", "T", "1", " True "] {
            assert!(as_bool(v).expect("Should be a boolean"), "{}", v);
        }
        for v in ["false", "No", "OFF", "n", "f", "0"] {
            assert!(!as_bool(v).expect("Should be a boolean"), "{}", v);
        }
        for v in ["", "2", "maybe", "truee"] {
            assert!(as_bool(v).is_err(), "{}", v);
        }
    }

    #[test]
    fn coerce_integers() {
        assert_eq!(as_int("42").unwrap(), 42);
        assert_eq!(as_int(" 7 ").unwrap(), 7);
        assert!(as_int("-1").is_err());
        assert!(as_int("1.5").is_err());
        assert!(as_int("").is_err());
    }

    #[test]
    fn coerce_by_key() {
        assert_eq!(
            coerce_param("read_buffer_size", "50").unwrap(),
            DriverParam::Size(BufferSize::Megabytes(50))
        );
        assert_eq!(
            coerce_param("parameter_sets_to_buffer", "100").unwrap(),
            DriverParam::Integer(100)
        );
        assert_eq!(
            coerce_param("use_async_io", "yes").unwrap(),
            DriverParam::Boolean(true)
        );
        assert!(coerce_param("autocommit", "50").is_err());
    }

    #[test]
    fn make_options_defaults() {
        let options = make_options([]).unwrap();
        assert_eq!(options, DriverOptions::default());
        assert_eq!(options.read_buffer_size, BufferSize::Megabytes(20));
        assert_eq!(options.varchar_max_character_limit, 65535);
    }

    #[test]
    fn make_options_values() {
        let options = make_options([
            ("read_buffer_size", DriverParam::Size(BufferSize::Rows(300))),
            ("autocommit", DriverParam::Boolean(true)),
            ("varchar_max_character_limit", DriverParam::Integer(100)),
        ])
        .unwrap();
        assert_eq!(options.read_buffer_size, BufferSize::Rows(300));
        assert!(options.autocommit);
        assert_eq!(options.varchar_max_character_limit, 100);
        assert_eq!(options.read_buffer_size.to_string(), "300 rows");
    }

    #[test]
    fn make_options_rejects() {
        let error = make_options([("fetch_wide", DriverParam::Boolean(true))]).unwrap_err();
        assert!(error.to_string().contains("Unknown driver option `fetch_wide`"));
        let error = make_options([("autocommit", DriverParam::Integer(1))]).unwrap_err();
        assert!(error.to_string().contains("does not accept"));
    }
}
