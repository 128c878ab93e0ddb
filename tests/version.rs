#[cfg(test)]
mod tests {
    use exasol_dialect::{DriverVersion, ServerVersion, VersionPart};

    #[test]
    fn driver_version_parse() {
        let version = DriverVersion::parse("4.2.7dev1");
        assert_eq!(
            version.parts(),
            [
                VersionPart::Number(4),
                VersionPart::Number(2),
                VersionPart::Number(7),
                VersionPart::Text("dev".into()),
                VersionPart::Number(1),
            ]
        );
        assert_eq!(
            DriverVersion::parse("05.00.0011"),
            "5.0.11".parse::<DriverVersion>().unwrap()
        );
        assert_eq!(DriverVersion::default().to_string(), "2.0.0");
    }

    #[test]
    fn driver_version_compare() {
        assert!(DriverVersion::parse("4.2.1") > DriverVersion::parse("4.2.0"));
        assert!(DriverVersion::parse("4.10.0") > DriverVersion::parse("4.9.9"));
        assert!(DriverVersion::parse("4.2") < DriverVersion::parse("4.2.0"));
        assert!(DriverVersion::parse("5.0.rc1") < DriverVersion::parse("5.0.0"));
    }

    #[test]
    fn driver_version_dbms_threshold() {
        assert!(DriverVersion::parse("4.2.1").reports_dbms_version());
        assert!(DriverVersion::parse("04.02.0001").reports_dbms_version());
        assert!(DriverVersion::parse("6.0.0").reports_dbms_version());
        assert!(DriverVersion::parse("4.2.7dev1").reports_dbms_version());
        assert!(!DriverVersion::parse("4.2.0").reports_dbms_version());
        assert!(!DriverVersion::parse("4.1.99").reports_dbms_version());
        assert!(!DriverVersion::default().reports_dbms_version());
    }

    #[test]
    fn server_version_parse() {
        assert_eq!(
            ServerVersion::parse("6.0.12").unwrap(),
            ServerVersion::new(6, 0, 12)
        );
        assert_eq!(
            ServerVersion::parse("7.1.3-S1").unwrap().as_tuple(),
            (7, 1, 3)
        );
        assert_eq!(
            " 6.2.0.1 ".parse::<ServerVersion>().unwrap(),
            ServerVersion::from((6, 2, 0))
        );
        assert_eq!(ServerVersion::new(6, 0, 12).to_string(), "6.0.12");
    }

    #[test]
    fn server_version_invalid() {
        for v in ["6.0", "six.0.1", "", "6..1", "6.0.x"] {
            let error = ServerVersion::parse(v).expect_err("Should not parse");
            assert!(
                format!("{:#}", error).contains(&format!("Invalid server version `{}`", v)),
                "{:#}",
                error
            );
        }
    }

    #[test]
    fn server_version_order() {
        assert!(ServerVersion::new(6, 0, 12) < ServerVersion::new(6, 1, 0));
        assert!(ServerVersion::new(7, 0, 0) > ServerVersion::new(6, 99, 99));
    }
}
