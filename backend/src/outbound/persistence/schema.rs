//! Diesel table definitions.
//!
//! Must match `migrations/` exactly; `diesel print-schema` regenerates it
//! from a live database.

diesel::table! {
    /// Todo records. `id` and `created_at` are filled in by PostgreSQL.
    todos (id) {
        /// `SERIAL` primary key.
        id -> Int4,
        title -> Text,
        completed -> Bool,
        created_at -> Timestamptz,
    }
}
