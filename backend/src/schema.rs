// Mirrors the `records` table created by `PgStore::ensure_schema`.

diesel::table! {
    records (id) {
        id -> Uuid,
        seq -> Int8,
        #[max_length = 100]
        collection -> Varchar,
        fields -> Jsonb,
        created_at -> Timestamptz,
    }
}
