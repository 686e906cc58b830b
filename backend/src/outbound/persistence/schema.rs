//! Diesel table definitions.
//!
//! Must match `backend/migrations/`; regenerate with `diesel print-schema`
//! after schema changes.

diesel::table! {
    /// Registered accounts. `email` carries the `users_email_key` unique
    /// constraint.
    users (id) {
        id -> Int8,
        #[max_length = 255]
        email -> Varchar,
        #[max_length = 255]
        password_hash -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Job postings.
    jobs (id) {
        id -> Int8,
        #[max_length = 255]
        title -> Varchar,
        #[max_length = 255]
        company -> Varchar,
        #[max_length = 100]
        city -> Nullable<Varchar>,
        salary_min -> Int8,
        salary_max -> Int8,
        tech_stack -> Text,
        #[max_length = 100]
        source -> Varchar,
        #[max_length = 512]
        url -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Saved job alerts. Created by migrations; no adapter reads it yet.
    subscriptions (id) {
        id -> Int8,
        user_id -> Int8,
        #[max_length = 100]
        city -> Varchar,
        min_salary -> Int8,
        tech_keywords -> Text,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(subscriptions -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(jobs, subscriptions, users);
