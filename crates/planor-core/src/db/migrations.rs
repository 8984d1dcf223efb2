//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        // Databases created before optimistic locking lack the version column
        let has_version_column: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('challenges') WHERE name = 'version'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .db_context("Failed to inspect challenges table")?;

        if !has_version_column {
            self.connection
                .execute(
                    "ALTER TABLE challenges ADD COLUMN version INTEGER NOT NULL DEFAULT 1",
                    [],
                )
                .db_context("Failed to add version column to challenges table")?;
        }

        Ok(())
    }
}
