// third-party imports
use strum::Display;
use thiserror::Error;

// local imports
use crate::model::{Haystack, PageRecord, RecordFilter};
use crate::query::{Precedence, Query, SyntaxError};

// ---

/// Names which of the two filter queries a syntax error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum QueryField {
    Include,
    Exclude,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{field} query: {error}")]
pub struct FieldError {
    pub field: QueryField,
    #[source]
    pub error: SyntaxError,
}

/// FilterError lists every syntax error found in the include and exclude queries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", .errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
pub struct FilterError {
    pub errors: Vec<FieldError>,
}

// ---

/// Include and exclude queries compiled together.
///
/// A record passes when it matches the include query and does not match the
/// exclude query. Empty queries include everything and exclude nothing.
#[derive(Debug, Clone, Default)]
pub struct PageFilter {
    include: Query,
    exclude: Option<Query>,
}

impl PageFilter {
    pub fn new(include: &str, exclude: &str) -> Result<Self, FilterError> {
        Self::with_precedence(include, exclude, Precedence::default())
    }

    /// Parses both queries, reporting the errors of both if both are malformed.
    pub fn with_precedence(include: &str, exclude: &str, precedence: Precedence) -> Result<Self, FilterError> {
        let parse = |field: QueryField, query: &str| {
            Query::parse_with(query, precedence).map_err(|error| FieldError { field, error })
        };

        match (parse(QueryField::Include, include), parse(QueryField::Exclude, exclude)) {
            (Ok(include), Ok(exclude)) => Ok(Self {
                include,
                exclude: (!exclude.is_all()).then_some(exclude),
            }),
            (include, exclude) => Err(FilterError {
                errors: include.err().into_iter().chain(exclude.err()).collect(),
            }),
        }
    }

    pub fn include(&self) -> &Query {
        &self.include
    }

    pub fn exclude(&self) -> Option<&Query> {
        self.exclude.as_ref()
    }

    pub fn is_pass_through(&self) -> bool {
        self.include.is_all() && self.exclude.is_none()
    }

    pub fn matches<R: PageRecord + ?Sized>(&self, record: &R) -> bool {
        self.is_pass_through() || self.apply(&Haystack::new(record))
    }

    /// Returns the records passing the filter, in their original order.
    pub fn filter<'a, R, I>(&self, records: I) -> Vec<&'a R>
    where
        R: PageRecord + 'a,
        I: IntoIterator<Item = &'a R>,
    {
        records.into_iter().filter(|record| self.matches(*record)).collect()
    }
}

impl RecordFilter for PageFilter {
    fn apply(&self, record: &Haystack) -> bool {
        self.include.apply(record) && !self.exclude.as_ref().is_some_and(|exclude| exclude.apply(record))
    }
}

// ---

/// Keeps the records matching `include` and not matching `exclude`, preserving order.
///
/// Nothing is filtered if either query is malformed; the error names every
/// offending field instead.
pub fn filter_records<'a, R, I>(records: I, include: &str, exclude: &str) -> Result<Vec<&'a R>, FilterError>
where
    R: PageRecord + 'a,
    I: IntoIterator<Item = &'a R>,
{
    Ok(PageFilter::new(include, exclude)?.filter(records))
}
