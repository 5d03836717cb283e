//! PostgreSQL table metadata.

/// Schema metadata for PostgreSQL tables.
///
/// All statements are `&'static str` so implementors can build them at
/// compile time with `const_format::concatcp!`. The trait itself performs
/// no I/O; [`migrate`](crate::migrate) executes what it describes.
pub trait Schema {
    /// Returns the table name in the database.
    fn name() -> &'static str;
    /// Returns `CREATE TABLE IF NOT EXISTS` DDL statement.
    fn creates() -> &'static str;
    /// Returns `CREATE INDEX IF NOT EXISTS` statements for all indices.
    fn indices() -> &'static str;
    /// Combines table and index DDL into one batch, table first.
    fn migration() -> String {
        [Self::creates(), Self::indices()]
            .iter()
            .map(|sql| sql.trim())
            .filter(|sql| !sql.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
