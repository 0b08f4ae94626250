use std::fmt::Display;

use dioxus::prelude::*;
use dioxus::router::FromQuery;

use crate::components::Navbar;
use crate::views::{Details, Home, NotFound};

/// Every page of the app.
///
/// `/` has no page of its own and redirects to `/home`. Anything that does not match lands on
/// [`NotFound`].
#[derive(Routable, Clone, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]
        #[redirect("/", || Route::Home {})]
        #[route("/home")]
        Home {},

        // The breed name is percent-decoded before it gets here
        #[route("/details/:breed?:..query")]
        Details { breed: String, query: DetailsQuery },
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// The details page for `breed`, pinned to its numeric id.
    pub fn details(breed: impl Into<String>, id: u32) -> Self {
        Route::Details {
            breed: breed.into(),
            query: DetailsQuery { id: Some(id) },
        }
    }
}

/// The query string of the details page: `?id=<number>`.
///
/// A missing or unparsable id is treated as absent, in which case the breed is looked up by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetailsQuery {
    pub id: Option<u32>,
}

impl FromQuery for DetailsQuery {
    fn from_query(query: &str) -> Self {
        let id = form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == "id")
            .and_then(|(_, value)| value.trim().parse().ok());

        Self { id }
    }
}

/// Must produce something [`FromQuery`] can read back.
impl Display for DetailsQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.id {
            Some(id) => write!(f, "id={id}"),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn query_reads_the_id() {
        assert_eq!(DetailsQuery::from_query("id=1"), DetailsQuery { id: Some(1) });
        assert_eq!(
            DetailsQuery::from_query("foo=bar&id=42"),
            DetailsQuery { id: Some(42) }
        );
    }

    #[test]
    fn bad_ids_are_ignored() {
        assert_eq!(DetailsQuery::from_query(""), DetailsQuery::default());
        assert_eq!(DetailsQuery::from_query("id=lab"), DetailsQuery::default());
        assert_eq!(DetailsQuery::from_query("id=-3"), DetailsQuery::default());
    }

    #[test]
    fn query_displays_as_it_parses() {
        let query = DetailsQuery { id: Some(7) };
        assert_eq!(DetailsQuery::from_query(&query.to_string()), query);
        assert_eq!(DetailsQuery::default().to_string(), "");
    }

    #[test]
    fn root_redirects_home() {
        assert_eq!(Route::from_str("/").unwrap(), Route::Home {});
    }

    #[test]
    fn details_decodes_the_breed() {
        assert_eq!(
            Route::from_str("/details/Labrador%20Retriever?id=1").unwrap(),
            Route::details("Labrador Retriever", 1)
        );
    }

    #[test]
    fn details_without_id() {
        assert_eq!(
            Route::from_str("/details/Beagle").unwrap(),
            Route::Details {
                breed: "Beagle".to_string(),
                query: DetailsQuery::default(),
            }
        );
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(
            Route::from_str("/breeds/unknown").unwrap(),
            Route::NotFound {
                segments: vec!["breeds".to_string(), "unknown".to_string()],
            }
        );
    }
}
