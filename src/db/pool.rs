//! Single SQLite connection held for the duration of one command.

use crate::db::initialize::init_db;
use crate::errors::AppResult;
use rusqlite::{Connection, Result};

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        Ok(Self {
            conn: Connection::open(path)?,
        })
    }

    /// Open `path` and bring its schema up to date.
    pub fn open_ready(path: &str) -> AppResult<Self> {
        let pool = Self::new(path)?;
        init_db(&pool.conn)?;
        Ok(pool)
    }

    /// Run `func` against the connection (used for cached statements).
    pub fn with_conn<F, T>(&mut self, func: F) -> Result<T>
    where
        F: FnOnce(&mut Connection) -> Result<T>,
    {
        func(&mut self.conn)
    }
}
