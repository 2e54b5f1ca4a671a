use anyhow::{Context, Result};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use serde_json::Value;
use uuid::Uuid;

use super::{DocumentStore, StoredRecord};
use crate::db::DbPool;
use crate::schema::records;

const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS records (
        id UUID PRIMARY KEY,
        seq BIGSERIAL NOT NULL,
        collection VARCHAR(100) NOT NULL,
        fields JSONB NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )",
    "CREATE INDEX IF NOT EXISTS records_collection_seq_idx ON records (collection, seq)",
];

#[derive(Insertable)]
#[diesel(table_name = records)]
struct NewRecordRow<'a> {
    id: Uuid,
    collection: &'a str,
    fields: Value,
}

/// Postgres-backed store. Every collection shares the `records` table; the
/// `seq` column preserves insertion order.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Create the `records` table and its index if they are missing.
    pub async fn ensure_schema(&self) -> Result<()> {
        let mut conn = self
            .pool
            .get()
            .await
            .context("Failed to get database connection")?;

        for statement in SCHEMA {
            diesel::sql_query(*statement)
                .execute(&mut *conn)
                .await
                .context("Failed to prepare records table")?;
        }

        Ok(())
    }
}

#[async_trait]
impl DocumentStore for PgStore {
    async fn add_record(&self, collection: &str, fields: Value) -> Result<Uuid> {
        let mut conn = self
            .pool
            .get()
            .await
            .context("Failed to get database connection")?;

        let id = Uuid::new_v4();
        diesel::insert_into(records::table)
            .values(NewRecordRow {
                id,
                collection,
                fields,
            })
            .execute(&mut *conn)
            .await
            .with_context(|| format!("Failed to add record to {}", collection))?;

        Ok(id)
    }

    async fn list_records(&self, collection: &str) -> Result<Vec<StoredRecord>> {
        let mut conn = self
            .pool
            .get()
            .await
            .context("Failed to get database connection")?;

        let rows = records::table
            .filter(records::collection.eq(collection))
            .order_by(records::seq.asc())
            .select((records::id, records::fields))
            .load::<(Uuid, Value)>(&mut *conn)
            .await
            .with_context(|| format!("Failed to list records in {}", collection))?;

        Ok(rows
            .into_iter()
            .map(|(id, fields)| StoredRecord { id, fields })
            .collect())
    }
}
