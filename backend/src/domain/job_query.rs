//! Search predicate construction for the job catalog.
//!
//! Raw query-string values are turned into a [`JobQuery`]: an optional exact
//! city match, an optional keyword substring match over title, company and
//! tech stack, and a bounded result count. Both filters are AND-ed; the
//! keyword is OR-ed across its three columns. Ordering is the store's concern.

use super::Job;

/// Result count used when no valid limit is supplied.
pub const DEFAULT_SEARCH_LIMIT: u32 = 20;
/// Largest accepted result count.
pub const MAX_SEARCH_LIMIT: u32 = 100;

/// Raw search inputs, exactly as received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobSearchParams {
    pub city: Option<String>,
    pub keyword: Option<String>,
    pub limit: Option<String>,
}

/// Number of rows a search may return, always within `1..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimit(u32);

impl SearchLimit {
    /// Resolve a raw limit.
    ///
    /// Absent, unparsable, non-positive and oversized values all fall back to
    /// [`DEFAULT_SEARCH_LIMIT`]; an oversized value is not clamped to the
    /// maximum.
    ///
    /// # Examples
    /// ```
    /// use jobstream::domain::SearchLimit;
    ///
    /// assert_eq!(SearchLimit::parse(Some("50")).get(), 50);
    /// assert_eq!(SearchLimit::parse(Some("500")).get(), 20);
    /// assert_eq!(SearchLimit::parse(None).get(), 20);
    /// ```
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.trim().parse::<i64>().ok())
            .and_then(|value| u32::try_from(value).ok())
            .filter(|value| (1..=MAX_SEARCH_LIMIT).contains(value))
            .map_or(Self(DEFAULT_SEARCH_LIMIT), Self)
    }

    /// Resolved row count.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for SearchLimit {
    fn default() -> Self {
        Self(DEFAULT_SEARCH_LIMIT)
    }
}

/// Composed job filter plus result cap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobQuery {
    city: Option<String>,
    keyword: Option<String>,
    limit: SearchLimit,
}

impl JobQuery {
    /// Build a query from raw parameters.
    ///
    /// # Examples
    /// ```
    /// use jobstream::domain::{JobQuery, JobSearchParams};
    ///
    /// let query = JobQuery::from_params(&JobSearchParams {
    ///     city: Some(" Berlin ".into()),
    ///     keyword: Some("   ".into()),
    ///     limit: Some("abc".into()),
    /// });
    /// assert_eq!(query.city(), Some("Berlin"));
    /// assert_eq!(query.keyword(), None);
    /// assert_eq!(query.limit().get(), 20);
    /// ```
    #[must_use]
    pub fn from_params(params: &JobSearchParams) -> Self {
        Self {
            city: non_blank(params.city.as_deref()),
            keyword: non_blank(params.keyword.as_deref()),
            limit: SearchLimit::parse(params.limit.as_deref()),
        }
    }

    /// Exact city to match, if filtering by city.
    #[must_use]
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    /// Substring to look for in title, company or tech stack.
    #[must_use]
    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref()
    }

    /// Result cap.
    #[must_use]
    pub fn limit(&self) -> SearchLimit {
        self.limit
    }

    /// Evaluate the filter against a job in memory.
    ///
    /// Approximates the storage predicate for in-memory repositories. The
    /// keyword is a plain substring here, so `%` and `_` match only
    /// themselves, whereas the SQL adapter passes them through to `LIKE` as
    /// wildcards. Comparison is case-sensitive; storage adapters may apply
    /// their own collation.
    #[must_use]
    pub fn matches(&self, job: &Job) -> bool {
        let city_ok = self
            .city()
            .is_none_or(|city| job.city.as_deref() == Some(city));
        let keyword_ok = self.keyword().is_none_or(|keyword| {
            job.title.contains(keyword)
                || job.company.contains(keyword)
                || job.tech_stack.contains(keyword)
        });
        city_ok && keyword_ok
    }
}

fn non_blank(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::JobId;
    use chrono::Utc;
    use rstest::rstest;

    fn job(city: Option<&str>, title: &str, company: &str, tech_stack: &str) -> Job {
        let now = Utc::now();
        Job {
            id: JobId::new(1),
            title: title.to_owned(),
            company: company.to_owned(),
            city: city.map(str::to_owned),
            salary_min: 0,
            salary_max: 0,
            tech_stack: tech_stack.to_owned(),
            source: String::new(),
            url: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[rstest]
    #[case(None, 20)]
    #[case(Some("0"), 20)]
    #[case(Some("-5"), 20)]
    #[case(Some("abc"), 20)]
    #[case(Some(""), 20)]
    #[case(Some("1"), 1)]
    #[case(Some("50"), 50)]
    #[case(Some(" 50 "), 50)]
    #[case(Some("100"), 100)]
    #[case(Some("101"), 20)]
    #[case(Some("500"), 20)]
    #[case(Some("99999999999999999999"), 20)]
    fn limit_resolution(#[case] raw: Option<&str>, #[case] expected: u32) {
        assert_eq!(SearchLimit::parse(raw).get(), expected);
    }

    #[rstest]
    fn absent_params_produce_unfiltered_query() {
        let query = JobQuery::from_params(&JobSearchParams::default());
        assert_eq!(query.city(), None);
        assert_eq!(query.keyword(), None);
        assert_eq!(query.limit().get(), DEFAULT_SEARCH_LIMIT);
    }

    #[rstest]
    #[case(Some("  "), None)]
    #[case(Some(" Beijing "), Some("Beijing"))]
    #[case(None, None)]
    fn city_is_trimmed(#[case] raw: Option<&str>, #[case] expected: Option<&str>) {
        let query = JobQuery::from_params(&JobSearchParams {
            city: raw.map(str::to_owned),
            ..JobSearchParams::default()
        });
        assert_eq!(query.city(), expected);
    }

    #[rstest]
    #[case(job(Some("Beijing"), "golang developer", "Acme", ""), true)]
    #[case(job(Some("Beijing"), "Engineer", "gopher inc", ""), true)]
    #[case(job(Some("Beijing"), "Engineer", "Acme", "go, grpc"), true)]
    #[case(job(Some("Beijing"), "Engineer", "Acme", "rust"), false)]
    #[case(job(Some("Shanghai"), "golang developer", "Acme", "go"), false)]
    #[case(job(None, "golang developer", "Acme", "go"), false)]
    fn city_and_keyword_are_combined(#[case] candidate: Job, #[case] expected: bool) {
        let query = JobQuery::from_params(&JobSearchParams {
            city: Some("Beijing".into()),
            keyword: Some("go".into()),
            limit: None,
        });
        assert_eq!(query.matches(&candidate), expected);
    }

    #[rstest]
    #[case("100%", job(None, "100% remote", "Acme", ""), true)]
    #[case("100%", job(None, "1000 remote", "Acme", ""), false)]
    #[case("a_c", job(None, "abc", "Acme", ""), false)]
    fn like_wildcards_are_literal_in_memory(
        #[case] keyword: &str,
        #[case] candidate: Job,
        #[case] expected: bool,
    ) {
        let query = JobQuery::from_params(&JobSearchParams {
            keyword: Some(keyword.into()),
            ..JobSearchParams::default()
        });
        assert_eq!(query.matches(&candidate), expected);
    }

    #[rstest]
    fn narrower_filters_select_subsets() {
        let jobs = [
            job(Some("Beijing"), "golang developer", "Acme", "go"),
            job(Some("Beijing"), "Designer", "Acme", "figma"),
            job(Some("Berlin"), "golang developer", "Acme", "go"),
        ];
        let by_city = JobQuery::from_params(&JobSearchParams {
            city: Some("Beijing".into()),
            ..JobSearchParams::default()
        });
        let by_city_and_keyword = JobQuery::from_params(&JobSearchParams {
            city: Some("Beijing".into()),
            keyword: Some("go".into()),
            limit: None,
        });

        for candidate in &jobs {
            if by_city_and_keyword.matches(candidate) {
                assert!(by_city.matches(candidate));
            }
        }
        assert_eq!(jobs.iter().filter(|j| by_city.matches(j)).count(), 2);
        assert_eq!(
            jobs.iter().filter(|j| by_city_and_keyword.matches(j)).count(),
            1
        );
    }
}
