//! Job posting model.

use std::fmt;

use chrono::{DateTime, Utc};

/// Storage-assigned job identifier; monotonically increasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JobId(i64);

impl JobId {
    /// Wrap a raw identifier produced by storage.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validation failure for a job draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobValidationError {
    /// Title was blank once trimmed.
    EmptyTitle,
    /// Company was blank once trimmed.
    EmptyCompany,
}

impl fmt::Display for JobValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title must not be empty"),
            Self::EmptyCompany => write!(f, "company must not be empty"),
        }
    }
}

impl std::error::Error for JobValidationError {}

/// Raw job fields as received from a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFields {
    pub title: String,
    pub company: String,
    pub city: String,
    pub salary_min: i64,
    pub salary_max: i64,
    pub tech_stack: String,
    pub source: String,
    pub url: String,
}

/// Validated job awaiting persistence.
///
/// ## Invariants
/// - `title` and `company` are trimmed and non-empty.
/// - `city` is trimmed; blank input becomes `None`.
/// - Salary range, URL shape and source are not checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJob {
    title: String,
    company: String,
    city: Option<String>,
    salary_min: i64,
    salary_max: i64,
    tech_stack: String,
    source: String,
    url: String,
}

impl NewJob {
    /// Trim and validate raw fields.
    ///
    /// # Examples
    /// ```
    /// use jobstream::domain::{JobFields, NewJob};
    ///
    /// let job = NewJob::try_from_fields(JobFields {
    ///     title: " Backend Engineer ".into(),
    ///     company: "Acme".into(),
    ///     city: "  ".into(),
    ///     ..JobFields::default()
    /// })
    /// .unwrap();
    /// assert_eq!(job.title(), "Backend Engineer");
    /// assert_eq!(job.city(), None);
    /// ```
    pub fn try_from_fields(fields: JobFields) -> Result<Self, JobValidationError> {
        let JobFields {
            title,
            company,
            city,
            salary_min,
            salary_max,
            tech_stack,
            source,
            url,
        } = fields;

        let title = title.trim();
        if title.is_empty() {
            return Err(JobValidationError::EmptyTitle);
        }
        let company = company.trim();
        if company.is_empty() {
            return Err(JobValidationError::EmptyCompany);
        }
        let city = Some(city.trim()).filter(|value| !value.is_empty());

        Ok(Self {
            title: title.to_owned(),
            company: company.to_owned(),
            city: city.map(str::to_owned),
            salary_min,
            salary_max,
            tech_stack,
            source,
            url,
        })
    }

    /// Job title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Hiring company.
    #[must_use]
    pub fn company(&self) -> &str {
        &self.company
    }

    /// City, when one was given.
    #[must_use]
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    /// Lower salary bound, caller-defined unit.
    #[must_use]
    pub fn salary_min(&self) -> i64 {
        self.salary_min
    }

    /// Upper salary bound, caller-defined unit.
    #[must_use]
    pub fn salary_max(&self) -> i64 {
        self.salary_max
    }

    /// Free-text technology list.
    #[must_use]
    pub fn tech_stack(&self) -> &str {
        &self.tech_stack
    }

    /// Origin label.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Posting URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Persisted job posting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub id: JobId,
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
