//! Declarative schema definitions compiled to SQLite DDL.

/// Schema definition for the SQLite database
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Schema {
    pub tables: Vec<TableDefinition>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn add_table(mut self, table: TableDefinition) -> Self {
        self.tables.push(table);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableDefinition {
    pub name: String,
    pub columns: Vec<ColumnDefinition>,
    pub foreign_keys: Vec<ForeignKey>,
}

impl TableDefinition {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            columns: Vec::new(),
            foreign_keys: Vec::new(),
        }
    }

    pub fn add_column(mut self, column: ColumnDefinition) -> Self {
        self.columns.push(column);
        self
    }

    pub fn add_foreign_key(mut self, fk: ForeignKey) -> Self {
        self.foreign_keys.push(fk);
        self
    }

    /// Compile this definition to a single CREATE TABLE statement.
    pub fn to_sql(&self) -> String {
        let mut clauses: Vec<String> = self.columns.iter().map(ColumnDefinition::to_sql).collect();
        for fk in &self.foreign_keys {
            clauses.push(format!(
                "FOREIGN KEY({}) REFERENCES {}({})",
                fk.column, fk.foreign_table, fk.foreign_column
            ));
        }
        format!("CREATE TABLE {} ({})", self.name, clauses.join(", "))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDefinition {
    pub name: String,
    pub data_type: DataType,
    pub constraints: Vec<ColumnConstraint>,
    pub default_value: Option<DefaultValue>,
}

impl ColumnDefinition {
    pub fn new(name: &str, data_type: DataType) -> Self {
        Self {
            name: name.to_string(),
            data_type,
            constraints: Vec::new(),
            default_value: None,
        }
    }

    pub fn with_constraint(mut self, constraint: ColumnConstraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn with_default(mut self, default: DefaultValue) -> Self {
        self.default_value = Some(default);
        self
    }

    fn to_sql(&self) -> String {
        let mut sql = format!("{} {}", self.name, self.data_type.as_sql());
        for constraint in &self.constraints {
            sql.push(' ');
            sql.push_str(constraint.as_sql());
        }
        if let Some(default) = &self.default_value {
            sql.push_str(" DEFAULT ");
            sql.push_str(&default.to_sql());
        }
        sql
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DataType {
    Integer,
    Text,
    Real,
    Blob,
}

impl DataType {
    fn as_sql(self) -> &'static str {
        match self {
            DataType::Integer => "INTEGER",
            DataType::Text => "TEXT",
            DataType::Real => "REAL",
            DataType::Blob => "BLOB",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnConstraint {
    /// INTEGER PRIMARY KEY AUTOINCREMENT; valid on integer columns only.
    PrimaryKeyAutoincrement,
    NotNull,
    Unique,
}

impl ColumnConstraint {
    fn as_sql(self) -> &'static str {
        match self {
            ColumnConstraint::PrimaryKeyAutoincrement => "PRIMARY KEY AUTOINCREMENT",
            ColumnConstraint::NotNull => "NOT NULL",
            ColumnConstraint::Unique => "UNIQUE",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    Integer(i64),
    Real(f64),
    Text(String),
    Null,
}

impl DefaultValue {
    fn to_sql(&self) -> String {
        match self {
            DefaultValue::Integer(v) => v.to_string(),
            DefaultValue::Real(v) => v.to_string(),
            DefaultValue::Text(v) => format!("'{}'", v.replace('\'', "''")),
            DefaultValue::Null => "NULL".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForeignKey {
    pub column: String,
    pub foreign_table: String,
    pub foreign_column: String,
}

impl ForeignKey {
    pub fn new(column: &str, foreign_table: &str, foreign_column: &str) -> Self {
        Self {
            column: column.to_string(),
            foreign_table: foreign_table.to_string(),
            foreign_column: foreign_column.to_string(),
        }
    }
}

fn id_column() -> ColumnDefinition {
    ColumnDefinition::new("id", DataType::Integer)
        .with_constraint(ColumnConstraint::PrimaryKeyAutoincrement)
}

/// The three-table schema: countries, cities and students, with cities
/// referencing countries and students referencing cities.
pub fn demo_schema() -> Schema {
    Schema::new()
        .add_table(
            TableDefinition::new("countries").add_column(id_column()).add_column(
                ColumnDefinition::new("title", DataType::Text)
                    .with_constraint(ColumnConstraint::NotNull),
            ),
        )
        .add_table(
            TableDefinition::new("cities")
                .add_column(id_column())
                .add_column(
                    ColumnDefinition::new("title", DataType::Text)
                        .with_constraint(ColumnConstraint::NotNull),
                )
                .add_column(
                    ColumnDefinition::new("area", DataType::Real)
                        .with_default(DefaultValue::Integer(0)),
                )
                .add_column(ColumnDefinition::new("country_id", DataType::Integer))
                .add_foreign_key(ForeignKey::new("country_id", "countries", "id")),
        )
        .add_table(
            TableDefinition::new("students")
                .add_column(id_column())
                .add_column(
                    ColumnDefinition::new("first_name", DataType::Text)
                        .with_constraint(ColumnConstraint::NotNull),
                )
                .add_column(
                    ColumnDefinition::new("last_name", DataType::Text)
                        .with_constraint(ColumnConstraint::NotNull),
                )
                .add_column(ColumnDefinition::new("city_id", DataType::Integer))
                .add_foreign_key(ForeignKey::new("city_id", "cities", "id")),
        )
}
