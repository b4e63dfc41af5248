//! Typed navigation targets.
//!
//! A [`Route`] is one of the catalog's pages: the mixed home listing, a single
//! series listing, or a character's detail page. Detail routes remember where
//! they were opened from so "back" returns to the right listing.
//!
//! # Examples
//!
//! ```rust
//! use kyara::{Route, Series};
//!
//! let route = Route::parse("/characters/op-40?returnUrl=%2Fone-piece").unwrap();
//! assert_eq!(
//!     route,
//!     Route::Detail { id: "op-40".to_string(), return_to: "/one-piece".to_string() }
//! );
//! assert_eq!(route.back(), Some(Route::Series(Series::OnePiece)));
//! ```

use std::fmt;
use url::Url;

use crate::{Error, error::Result, types::Series};

const BASE: &str = "http://localhost";
const RETURN_PARAM: &str = "returnUrl";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Home,
    /// `/dragon-ball`, `/one-piece` or `/naruto`
    Series(Series),
    /// `/characters/{id}?returnUrl={path}`
    Detail { id: String, return_to: String },
}

impl Route {
    /// A detail route that returns to `from`.
    pub fn detail(id: impl Into<String>, from: &Route) -> Self {
        Route::Detail {
            id: id.into(),
            return_to: from.path(),
        }
    }

    /// Parses a path, optionally with a query string.
    ///
    /// # Errors
    ///
    /// * [`Error::NotFound`] - If the path names no page
    /// * [`Error::Parse`] - If the input isn't a valid URL path
    pub fn parse(input: &str) -> Result<Self> {
        let base = Url::parse(BASE).map_err(|e| Error::parse(e.to_string()))?;
        let url = base
            .join(input.trim())
            .map_err(|e| Error::parse(format!("Invalid route {input:?}: {e}")))?;

        let segments: Vec<&str> = url
            .path_segments()
            .map(|s| s.filter(|seg| !seg.is_empty()).collect())
            .unwrap_or_default();

        match segments.as_slice() {
            [] => Ok(Route::Home),
            [slug] => Series::from_slug(slug)
                .map(Route::Series)
                .ok_or_else(|| Error::not_found(format!("Route: {}", url.path()))),
            ["characters", id] => {
                let id = urlencoding::decode(id)
                    .map_err(|e| Error::parse(format!("Invalid character id: {e}")))?
                    .into_owned();
                let return_to = url
                    .query_pairs()
                    .find(|(key, _)| key == RETURN_PARAM)
                    .map(|(_, value)| value.into_owned())
                    .filter(|value| !value.is_empty())
                    .unwrap_or_else(|| "/".to_string());
                Ok(Route::Detail { id, return_to })
            }
            _ => Err(Error::not_found(format!("Route: {}", url.path()))),
        }
    }

    /// Renders the route as a path; the inverse of [`parse`](Route::parse).
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Series(series) => format!("/{}", series.slug()),
            Route::Detail { id, return_to } => format!(
                "/characters/{}?{}={}",
                urlencoding::encode(id),
                RETURN_PARAM,
                urlencoding::encode(return_to)
            ),
        }
    }

    /// The listing series, if this is a series route.
    pub fn series(&self) -> Option<Series> {
        match self {
            Route::Series(series) => Some(*series),
            _ => None,
        }
    }

    /// Where a detail route returns to. Unparsable return paths go home.
    pub fn back(&self) -> Option<Route> {
        match self {
            Route::Detail { return_to, .. } => {
                Some(Route::parse(return_to).unwrap_or(Route::Home))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
