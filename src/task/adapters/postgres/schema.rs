//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Display title.
        #[max_length = 200]
        title -> Varchar,
        /// Optional free-text description.
        description -> Nullable<Text>,
        /// Task status.
        #[max_length = 20]
        status -> Varchar,
        /// Task priority.
        priority -> Int4,
        /// Optional due date.
        due_date -> Nullable<Timestamptz>,
        /// Optional completion timestamp.
        completed_at -> Nullable<Timestamptz>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
