#[cfg(test)]
mod tests {
    use exasol_dialect::{
        ExasolSqlWriter, FileFormat, ImportInto, Numeric, SqlType, TableRef, Value, import_into,
    };
    use indoc::indoc;
    use rust_decimal::Decimal;

    const WRITER: ExasolSqlWriter = ExasolSqlWriter {};

    #[test]
    fn import_into_table() {
        let mut out = String::new();
        WRITER
            .write_import_into(
                &mut out,
                &ImportInto::table(TableRef::new("SALES").with_schema("RETAIL"))
                    .only(["ID", "AMOUNT"])
                    .file("sales.csv"),
            )
            .unwrap();
        assert_eq!(
            out,
            indoc! {r#"
                IMPORT INTO "RETAIL"."SALES" ("ID", "AMOUNT")
                FROM LOCAL CSV
                FILE 'sales.csv';
            "#}
            .trim()
        );
    }

    #[test]
    fn import_into_columns() {
        let mut out = String::new();
        WRITER
            .write_import_into(
                &mut out,
                &import_into([
                    ("ID", SqlType::Numeric(Numeric::new(Some(18), Some(0)))),
                    ("NAME", SqlType::Varchar(Some(100))),
                    ("PRICE", SqlType::Float(Numeric::float())),
                ])
                .at("ftp://files.example.com/exports")
                .identified_by("bob", "it's")
                .file("a.csv")
                .file("b.csv")
                .encoding("UTF-8")
                .skip(1)
                .row_separator("CRLF")
                .column_separator(",")
                .column_delimiter("\""),
            )
            .unwrap();
        assert_eq!(
            out,
            indoc! {r#"
                IMPORT INTO ("ID" DECIMAL(18,0), "NAME" VARCHAR(100), "PRICE" DOUBLE PRECISION)
                FROM CSV AT 'ftp://files.example.com/exports' USER 'bob' IDENTIFIED BY 'it''s'
                FILE 'a.csv'
                FILE 'b.csv'
                ENCODING = 'UTF-8' SKIP = 1 ROW SEPARATOR = 'CRLF' COLUMN SEPARATOR = ',' COLUMN DELIMITER = '"';
            "#}
            .trim()
        );
    }

    #[test]
    fn import_into_connection() {
        let mut out = String::new();
        WRITER
            .write_import_into(
                &mut out,
                &ImportInto::table("my\"table")
                    .connection("MY_CONN")
                    .format(FileFormat::Fbv)
                    .file("data.fbv"),
            )
            .unwrap();
        assert_eq!(
            out,
            indoc! {r#"
                IMPORT INTO "my""table"
                FROM FBV AT "MY_CONN"
                FILE 'data.fbv';
            "#}
            .trim()
        );
    }

    #[test]
    fn import_into_invalid() {
        let cases = [
            ImportInto::table("T"),
            ImportInto::table("").file("a.csv"),
            ImportInto::table(""),
            import_into(Vec::<(&str, SqlType)>::new()).file("a.csv"),
            import_into([("A", SqlType::Integer)]),
        ];
        for import in cases {
            let mut out = String::new();
            assert!(WRITER.write_import_into(&mut out, &import).is_err());
            assert_eq!(out, "", "{:?}", import);
        }
    }

    #[test]
    fn import_into_builder() {
        let import = ImportInto::table("T")
            .at("http://host")
            .local()
            .identified_by("user", "pwd")
            .file("x.csv");
        assert_eq!(import.source, Default::default());
        let import = import_into([("A", SqlType::Integer)]).only(["A"]);
        assert!(import.files.is_empty());
    }

    #[test]
    fn column_types() {
        let cases = [
            (SqlType::Boolean, "BOOLEAN"),
            (SqlType::SmallInteger, "SMALLINT"),
            (SqlType::Integer, "INTEGER"),
            (SqlType::BigInteger, "BIGINT"),
            (SqlType::Numeric(Numeric::default()), "DECIMAL"),
            (SqlType::Numeric(Numeric::new(Some(9), None)), "DECIMAL(9)"),
            (SqlType::Numeric(Numeric::new(Some(36), Some(4))), "DECIMAL(36,4)"),
            (SqlType::Float(Numeric::float()), "DOUBLE PRECISION"),
            (SqlType::Char(None), "CHAR(1)"),
            (SqlType::Char(Some(3)), "CHAR(3)"),
            (SqlType::Varchar(None), "VARCHAR(2000000)"),
            (SqlType::Date, "DATE"),
            (SqlType::Timestamp, "TIMESTAMP"),
        ];
        for (sql_type, expected) in cases {
            let mut out = String::new();
            WRITER.write_column_type(&mut out, &sql_type);
            assert_eq!(out, expected);
        }
    }

    #[test]
    fn values() {
        let cases = [
            (Value::Null, "NULL"),
            (Value::Int64(None), "NULL"),
            (Value::Boolean(Some(true)), "TRUE"),
            (Value::Int64(Some(-3)), "-3"),
            (Value::Int128(Some(i128::MAX)), "170141183460469231731687303715884105727"),
            (Value::Float64(Some(1.0)), "1.0"),
            (Value::Decimal(Some(Decimal::new(1250, 2)), 4, 2), "12.50"),
            (Value::Varchar(Some("O'Hara".into())), "'O''Hara'"),
        ];
        for (value, expected) in cases {
            let mut out = String::new();
            WRITER.write_value(&mut out, &value);
            assert_eq!(out, expected);
        }
    }
}
