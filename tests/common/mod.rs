//! Shared fixtures for integration tests.

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use inkpost::db::{DbPool, establish_connection_pool};
use inkpost::repository::DieselRepository;
use tempfile::NamedTempFile;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// SQLite database backed by a temporary file, migrated to the blog schema.
///
/// The file lives as long as the fixture. Connections come from the same
/// pool production uses, so foreign keys are enforced in tests too.
pub struct TestDb {
    _dbfile: NamedTempFile,
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        let dbfile = NamedTempFile::new().expect("temp database file");
        let database_url = dbfile.path().to_str().expect("utf-8 temp path");
        let pool = establish_connection_pool(database_url).expect("connection pool");
        let mut conn = pool.get().expect("pooled connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("blog schema migrations");
        TestDb {
            _dbfile: dbfile,
            pool,
        }
    }

    /// Repository wired to this database.
    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool.clone())
    }
}
