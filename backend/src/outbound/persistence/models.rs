//! Internal Diesel row structs.
//!
//! These never leave the persistence layer; repositories convert them to
//! domain types.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::{Job, JobId, NewJob, PasswordHash, User, UserId};

use super::schema::{jobs, users};

/// Row read from `users`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId::new(row.id),
            email: row.email,
            password_hash: PasswordHash::new(row.password_hash),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Insertable account; timestamps come from column defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub email: &'a str,
    pub password_hash: &'a str,
}

/// Row read from `jobs`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = jobs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct JobRow {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub city: Option<String>,
    pub salary_min: i64,
    pub salary_max: i64,
    pub tech_stack: String,
    pub source: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<JobRow> for Job {
    fn from(row: JobRow) -> Self {
        Self {
            id: JobId::new(row.id),
            title: row.title,
            company: row.company,
            city: row.city,
            salary_min: row.salary_min,
            salary_max: row.salary_max,
            tech_stack: row.tech_stack,
            source: row.source,
            url: row.url,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Insertable posting borrowed from a validated [`NewJob`].
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = jobs)]
pub(crate) struct NewJobRow<'a> {
    pub title: &'a str,
    pub company: &'a str,
    pub city: Option<&'a str>,
    pub salary_min: i64,
    pub salary_max: i64,
    pub tech_stack: &'a str,
    pub source: &'a str,
    pub url: &'a str,
}

impl<'a> From<&'a NewJob> for NewJobRow<'a> {
    fn from(job: &'a NewJob) -> Self {
        Self {
            title: job.title(),
            company: job.company(),
            city: job.city(),
            salary_min: job.salary_min(),
            salary_max: job.salary_max(),
            tech_stack: job.tech_stack(),
            source: job.source(),
            url: job.url(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::JobFields;
    use rstest::rstest;

    #[rstest]
    fn absent_city_is_inserted_as_null() {
        let job = NewJob::try_from_fields(JobFields {
            title: "Engineer".into(),
            company: "Acme".into(),
            ..JobFields::default()
        })
        .expect("valid draft");

        let row = NewJobRow::from(&job);
        assert_eq!(row.city, None);
        assert_eq!(row.title, "Engineer");
    }

    #[rstest]
    fn user_rows_convert_without_exposing_hash_in_debug() {
        let now = Utc::now();
        let user = User::from(UserRow {
            id: 42,
            email: "a@x.com".into(),
            password_hash: "$argon2id$secret".into(),
            created_at: now,
            updated_at: now,
        });

        assert_eq!(user.id, UserId::new(42));
        assert_eq!(user.password_hash.as_str(), "$argon2id$secret");
        assert!(!format!("{user:?}").contains("secret"));
    }
}
