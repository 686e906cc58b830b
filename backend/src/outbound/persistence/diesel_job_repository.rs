//! PostgreSQL-backed `JobRepository`.
//!
//! Search compiles a [`JobQuery`] into a single boxed select: optional
//! `city = $1`, optional `(title LIKE $2 OR company LIKE $2 OR tech_stack LIKE
//! $2)`, then `ORDER BY id DESC LIMIT $3`.

use async_trait::async_trait;
use diesel::dsl::{AsSelect, IntoBoxed, Select};
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{JobPersistenceError, JobRepository};
use crate::domain::{Job, JobQuery, NewJob};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{JobRow, NewJobRow};
use super::pool::DbPool;
use super::schema::jobs;

/// Diesel implementation of [`JobRepository`].
#[derive(Clone)]
pub struct DieselJobRepository {
    pool: DbPool,
}

impl DieselJobRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_job_diesel_error(error: diesel::result::Error) -> JobPersistenceError {
    map_diesel_error(
        error,
        JobPersistenceError::query,
        JobPersistenceError::connection,
    )
}

type JobSearchStatement = IntoBoxed<'static, Select<jobs::table, AsSelect<JobRow, Pg>>, Pg>;

/// `LIKE` pattern matching `keyword` anywhere in a column.
///
/// `%` and `_` inside the keyword keep their wildcard meaning.
fn contains_pattern(keyword: &str) -> String {
    format!("%{keyword}%")
}

/// Compile `query` into `[WHERE city AND keyword] ORDER BY id DESC LIMIT n`.
fn search_statement(query: &JobQuery) -> JobSearchStatement {
    let mut statement = jobs::table.select(JobRow::as_select()).into_boxed();
    if let Some(city) = query.city() {
        statement = statement.filter(jobs::city.eq(city.to_owned()));
    }
    if let Some(keyword) = query.keyword() {
        let pattern = contains_pattern(keyword);
        statement = statement.filter(
            jobs::title
                .like(pattern.clone())
                .or(jobs::company.like(pattern.clone()))
                .or(jobs::tech_stack.like(pattern)),
        );
    }
    statement
        .order(jobs::id.desc())
        .limit(i64::from(query.limit().get()))
}

#[async_trait]
impl JobRepository for DieselJobRepository {
    async fn insert(&self, job: &NewJob) -> Result<Job, JobPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, JobPersistenceError::connection))?;

        diesel::insert_into(jobs::table)
            .values(NewJobRow::from(job))
            .returning(JobRow::as_returning())
            .get_result(&mut conn)
            .await
            .map(Job::from)
            .map_err(map_job_diesel_error)
    }

    async fn search(&self, query: &JobQuery) -> Result<Vec<Job>, JobPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, JobPersistenceError::connection))?;

        let rows: Vec<JobRow> = search_statement(query)
            .load(&mut conn)
            .await
            .map_err(map_job_diesel_error)?;

        Ok(rows.into_iter().map(Job::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::JobSearchParams;
    use diesel::debug_query;
    use rstest::rstest;

    #[rstest]
    #[case("go", "%go%")]
    #[case("c++", "%c++%")]
    fn keyword_is_wrapped_in_wildcards(#[case] keyword: &str, #[case] expected: &str) {
        assert_eq!(contains_pattern(keyword), expected);
    }

    fn sql_for(city: Option<&str>, keyword: Option<&str>, limit: Option<&str>) -> String {
        let query = JobQuery::from_params(&JobSearchParams {
            city: city.map(str::to_owned),
            keyword: keyword.map(str::to_owned),
            limit: limit.map(str::to_owned),
        });
        debug_query::<Pg, _>(&search_statement(&query)).to_string()
    }

    fn position(sql: &str, fragment: &str) -> usize {
        sql.find(fragment)
            .unwrap_or_else(|| panic!("`{fragment}` missing from {sql}"))
    }

    #[rstest]
    fn no_filters_only_orders_and_limits() {
        let sql = sql_for(None, None, None);

        assert!(!sql.contains("WHERE"), "unexpected filter in {sql}");
        assert!(position(&sql, "ORDER BY \"jobs\".\"id\" DESC") < position(&sql, "LIMIT"));
        assert!(sql.contains("[20]"), "default limit not bound in {sql}");
    }

    #[rstest]
    fn keyword_filter_spans_three_columns() {
        let sql = sql_for(None, Some("go"), Some("5"));

        assert!(sql.contains("\"jobs\".\"title\" LIKE"));
        assert!(sql.contains("\"jobs\".\"company\" LIKE"));
        assert!(sql.contains("\"jobs\".\"tech_stack\" LIKE"));
        assert!(!sql.contains("\"jobs\".\"city\" ="));
        assert!(sql.contains("\"%go%\""));
    }

    #[rstest]
    fn city_and_keyword_are_combined_with_and() {
        let sql = sql_for(Some("Berlin"), Some("go"), None);

        let city = position(&sql, "\"jobs\".\"city\" = $1");
        let and = position(&sql, " AND ");
        let title = position(&sql, "\"jobs\".\"title\" LIKE");
        let order = position(&sql, "ORDER BY \"jobs\".\"id\" DESC");
        assert!(city < and && and < title && title < order, "bad composition: {sql}");
        assert!(!sql[..title].contains(" OR "), "city joined with OR: {sql}");
        assert!(sql.contains("\"Berlin\""));
    }

    #[rstest]
    fn closed_connection_maps_to_connection_error() {
        use diesel::result::{DatabaseErrorKind, Error as DieselError};

        let error = DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection,
            Box::new("terminating connection".to_owned()),
        );
        assert!(matches!(
            map_job_diesel_error(error),
            JobPersistenceError::Connection { .. }
        ));
    }
}
