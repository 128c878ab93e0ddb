use crate::{
    Error, FileFormat, FileSource, ImportInto, ImportTarget, Numeric, Result, SqlType, TableRef,
    Value, util::separated_by,
};
use std::fmt::Write;

/// Renders the Exasol specific statements.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExasolSqlWriter {}

impl ExasolSqlWriter {
    /// Escape occurrences of `search` char with `replace` while copying into buffer.
    pub fn write_escaped(&self, out: &mut String, value: &str, search: char, replace: &str) {
        let mut position = 0;
        for (i, c) in value.char_indices() {
            if c == search {
                out.push_str(&value[position..i]);
                out.push_str(replace);
                position = i + c.len_utf8();
            }
        }
        out.push_str(&value[position..]);
    }

    /// Quote identifiers ("name") doubling inner quotes.
    pub fn write_identifier_quoted(&self, out: &mut String, value: &str) {
        out.push('"');
        self.write_escaped(out, value, '"', "\"\"");
        out.push('"');
    }

    pub fn write_table_ref(&self, out: &mut String, value: &TableRef) {
        if !value.schema.is_empty() {
            self.write_identifier_quoted(out, &value.schema);
            out.push('.');
        }
        self.write_identifier_quoted(out, &value.name);
    }

    pub fn write_value_string(&self, out: &mut String, value: &str) {
        out.push('\'');
        self.write_escaped(out, value, '\'', "''");
        out.push('\'');
    }

    pub fn write_value(&self, out: &mut String, value: &Value) {
        match value {
            Value::Boolean(Some(v)) => out.push_str(if *v { "TRUE" } else { "FALSE" }),
            Value::Int64(Some(v)) => {
                let _ = write!(out, "{}", v);
            }
            Value::Int128(Some(v)) => {
                let _ = write!(out, "{}", v);
            }
            Value::Float64(Some(v)) => {
                let _ = write!(out, "{:?}", v);
            }
            Value::Decimal(Some(v), ..) => {
                let _ = write!(out, "{}", v);
            }
            Value::Varchar(Some(v)) => self.write_value_string(out, v),
            _ => out.push_str("NULL"),
        }
    }

    pub fn write_column_type(&self, out: &mut String, value: &SqlType) {
        match value {
            SqlType::Boolean => out.push_str("BOOLEAN"),
            SqlType::SmallInteger => out.push_str("SMALLINT"),
            SqlType::Integer => out.push_str("INTEGER"),
            SqlType::BigInteger => out.push_str("BIGINT"),
            SqlType::Numeric(Numeric {
                precision, scale, ..
            }) => {
                out.push_str("DECIMAL");
                match (precision, scale) {
                    (Some(precision), Some(scale)) => {
                        let _ = write!(out, "({},{})", precision, scale);
                    }
                    (Some(precision), None) => {
                        let _ = write!(out, "({})", precision);
                    }
                    _ => {}
                }
            }
            SqlType::Float(..) => out.push_str("DOUBLE PRECISION"),
            SqlType::Char(len) => {
                let _ = write!(out, "CHAR({})", len.unwrap_or(1));
            }
            SqlType::Varchar(len) => {
                let _ = write!(out, "VARCHAR({})", len.unwrap_or(2000000));
            }
            SqlType::Date => out.push_str("DATE"),
            SqlType::Timestamp => out.push_str("TIMESTAMP"),
        }
    }

    /// Renders an `IMPORT INTO` statement, it must name at least one file.
    pub fn write_import_into(&self, out: &mut String, value: &ImportInto) -> Result<()> {
        match &value.target {
            ImportTarget::Table { table, .. } if table.name.is_empty() => {
                return Err(Error::msg("IMPORT INTO requires a table name"));
            }
            ImportTarget::Columns(columns) if columns.is_empty() => {
                return Err(Error::msg(
                    "IMPORT INTO requires at least one column definition",
                ));
            }
            _ => {}
        }
        if value.files.is_empty() {
            return Err(Error::msg("IMPORT INTO requires at least one file"));
        }
        out.push_str("IMPORT INTO ");
        match &value.target {
            ImportTarget::Table { table, columns } => {
                self.write_table_ref(out, table);
                if !columns.is_empty() {
                    out.push_str(" (");
                    separated_by(
                        out,
                        columns,
                        |out, v| self.write_identifier_quoted(out, v),
                        ", ",
                    );
                    out.push(')');
                }
            }
            ImportTarget::Columns(columns) => {
                out.push('(');
                separated_by(
                    out,
                    columns,
                    |out, (name, sql_type)| {
                        self.write_identifier_quoted(out, name);
                        out.push(' ');
                        self.write_column_type(out, sql_type);
                    },
                    ", ",
                );
                out.push(')');
            }
        }
        out.push_str("\nFROM ");
        if value.source == FileSource::Local {
            out.push_str("LOCAL ");
        }
        out.push_str(match value.format {
            FileFormat::Csv => "CSV",
            FileFormat::Fbv => "FBV",
        });
        match &value.source {
            FileSource::Local => {}
            FileSource::At {
                address,
                user,
                password,
            } => {
                out.push_str(" AT ");
                self.write_value_string(out, address);
                if let Some(user) = user {
                    out.push_str(" USER ");
                    self.write_value_string(out, user);
                    out.push_str(" IDENTIFIED BY ");
                    self.write_value_string(out, password.as_deref().unwrap_or_default());
                }
            }
            FileSource::Connection(name) => {
                out.push_str(" AT ");
                self.write_identifier_quoted(out, name);
            }
        }
        for file in &value.files {
            out.push_str("\nFILE ");
            self.write_value_string(out, file);
        }
        let skip = value.skip.map(|v| v.to_string());
        let options = [
            ("ENCODING", value.encoding.as_deref(), true),
            ("SKIP", skip.as_deref(), false),
            ("ROW SEPARATOR", value.row_separator.as_deref(), true),
            ("COLUMN SEPARATOR", value.column_separator.as_deref(), true),
            ("COLUMN DELIMITER", value.column_delimiter.as_deref(), true),
        ];
        let mut options = options
            .into_iter()
            .filter_map(|(k, v, quoted)| v.map(|v| (k, v, quoted)))
            .peekable();
        if options.peek().is_some() {
            out.push('\n');
            separated_by(
                out,
                options,
                |out, (key, v, quoted)| {
                    out.push_str(key);
                    out.push_str(" = ");
                    if quoted {
                        self.write_value_string(out, v);
                    } else {
                        out.push_str(v);
                    }
                },
                " ",
            );
        }
        out.push(';');
        Ok(())
    }
}
