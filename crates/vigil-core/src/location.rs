//! Location snapshots and active-section state
//!
//! The URL surface the binding layer consumes: the current path, one
//! query parameter, and the fragment as a second source of the same
//! logical value.

use url::Url;

use crate::{VigilError, VigilResult};

/// Snapshot of the host's current location
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Location {
    /// Path component, leading slash included
    pub path: String,
    /// Fragment without the leading `#`, if present and non-empty
    pub hash: Option<String>,
    query: Vec<(String, String)>,
}

impl Location {
    /// Parse a full URL string into a snapshot
    pub fn parse(input: &str) -> VigilResult<Self> {
        let url = Url::parse(input).map_err(|e| VigilError::InvalidLocation(e.to_string()))?;

        Ok(Location {
            path: url.path().to_string(),
            hash: url
                .fragment()
                .filter(|fragment| !fragment.is_empty())
                .map(str::to_string),
            query: url
                .query_pairs()
                .map(|(key, value)| (key.into_owned(), value.into_owned()))
                .collect(),
        })
    }

    /// Build from already-split parts (host adapters that have them)
    pub fn from_parts(
        path: impl Into<String>,
        query: Vec<(String, String)>,
        hash: Option<String>,
    ) -> Self {
        Location {
            path: path.into(),
            hash: hash.filter(|fragment| !fragment.is_empty()),
            query,
        }
    }

    /// First value of a query parameter
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Whether the path sits inside a scope prefix
    pub fn has_path_prefix(&self, prefix: &str) -> bool {
        self.path.starts_with(prefix)
    }
}

/// Currently highlighted content region, derived from the location.
///
/// Replaced wholesale on every resolution pass; fields are `None` when
/// the location carries no value for them, never partially patched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActiveState {
    pub section: Option<String>,
    pub category: Option<String>,
}

impl ActiveState {
    /// Resolve from a location snapshot. The fragment wins over the
    /// query parameter for the section; the category follows the query
    /// parameter alone.
    pub fn resolve(location: &Location, param: &str) -> Self {
        let query = location.query_param(param).map(str::to_string);

        ActiveState {
            section: location.hash.clone().or_else(|| query.clone()),
            category: query,
        }
    }
}
