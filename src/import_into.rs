use crate::SqlType;

/// A possibly schema qualified table name.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TableRef {
    pub name: String,
    pub schema: String,
}

impl TableRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: String::new(),
        }
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = schema.into();
        self
    }
}

impl From<&str> for TableRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Where the imported rows go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportTarget {
    /// An existing table, optionally restricted to some of its columns.
    Table { table: TableRef, columns: Vec<String> },
    /// No table, the rows are returned with these column definitions.
    Columns(Vec<(String, SqlType)>),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    #[default]
    Csv,
    Fbv,
}

/// Where the files are read from.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum FileSource {
    /// Files on the client machine.
    #[default]
    Local,
    /// A remote location (`ftp://`, `http://`, ...), with optional credentials.
    At {
        address: String,
        user: Option<String>,
        password: Option<String>,
    },
    /// A connection object created on the server.
    Connection(String),
}

/// `IMPORT INTO` statement, bulk loads CSV or FBV files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportInto {
    pub target: ImportTarget,
    pub format: FileFormat,
    pub source: FileSource,
    pub files: Vec<String>,
    pub encoding: Option<String>,
    pub skip: Option<u64>,
    pub row_separator: Option<String>,
    pub column_separator: Option<String>,
    pub column_delimiter: Option<String>,
}

impl ImportInto {
    fn new(target: ImportTarget) -> Self {
        Self {
            target,
            format: Default::default(),
            source: Default::default(),
            files: Vec::new(),
            encoding: None,
            skip: None,
            row_separator: None,
            column_separator: None,
            column_delimiter: None,
        }
    }

    pub fn table(table: impl Into<TableRef>) -> Self {
        Self::new(ImportTarget::Table {
            table: table.into(),
            columns: Vec::new(),
        })
    }

    pub fn columns<N: Into<String>>(columns: impl IntoIterator<Item = (N, SqlType)>) -> Self {
        Self::new(ImportTarget::Columns(
            columns.into_iter().map(|(n, t)| (n.into(), t)).collect(),
        ))
    }

    /// Restricts a table import to the given columns, ignored when importing into column
    /// definitions.
    pub fn only<N: Into<String>>(mut self, names: impl IntoIterator<Item = N>) -> Self {
        if let ImportTarget::Table { columns, .. } = &mut self.target {
            columns.extend(names.into_iter().map(Into::into));
        } else {
            log::warn!("`only` has no effect on an import into column definitions");
        }
        self
    }

    pub fn format(mut self, format: FileFormat) -> Self {
        self.format = format;
        self
    }

    pub fn local(mut self) -> Self {
        self.source = FileSource::Local;
        self
    }

    pub fn at(mut self, address: impl Into<String>) -> Self {
        self.source = FileSource::At {
            address: address.into(),
            user: None,
            password: None,
        };
        self
    }

    /// Credentials for the `at` location.
    pub fn identified_by(mut self, user: impl Into<String>, password: impl Into<String>) -> Self {
        if let FileSource::At {
            user: u,
            password: p,
            ..
        } = &mut self.source
        {
            *u = Some(user.into());
            *p = Some(password.into());
        } else {
            log::warn!("Credentials are only used by an import from a remote location");
        }
        self
    }

    pub fn connection(mut self, name: impl Into<String>) -> Self {
        self.source = FileSource::Connection(name.into());
        self
    }

    pub fn file(mut self, name: impl Into<String>) -> Self {
        self.files.push(name.into());
        self
    }

    pub fn encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = Some(encoding.into());
        self
    }

    pub fn skip(mut self, rows: u64) -> Self {
        self.skip = Some(rows);
        self
    }

    pub fn row_separator(mut self, separator: impl Into<String>) -> Self {
        self.row_separator = Some(separator.into());
        self
    }

    pub fn column_separator(mut self, separator: impl Into<String>) -> Self {
        self.column_separator = Some(separator.into());
        self
    }

    pub fn column_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.column_delimiter = Some(delimiter.into());
        self
    }
}

/// `IMPORT INTO (name type, ...)` returning the imported rows with the given column types.
pub fn import_into<N: Into<String>>(
    target_columns: impl IntoIterator<Item = (N, SqlType)>,
) -> ImportInto {
    ImportInto::columns(target_columns)
}
