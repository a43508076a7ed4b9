use serde::{Deserialize, Deserializer};

use crate::entities::movie;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MovieStatus {
    Provisional,
    Rated,
}

impl MovieStatus {
    pub fn as_code(self) -> i32 {
        match self {
            MovieStatus::Provisional => 0,
            MovieStatus::Rated => 1,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(MovieStatus::Provisional),
            1 => Some(MovieStatus::Rated),
            _ => None,
        }
    }
}

/// Fields supplied by the caller when a movie is first added. Rating, review,
/// ranking and status are filled in by the store.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub year: String,
    pub description: String,
    pub img_url: Option<String>,
}

/// Year component of a TMDB release date (`2010-07-16` -> `2010`).
pub fn year_from_release_date(release_date: &str) -> &str {
    release_date.split('-').next().unwrap_or("").trim()
}

/// Year from the date the user confirmed, falling back to the detail's own
/// release date. `None` when neither carries a year.
pub fn release_year<'a>(confirmed: &'a str, detail: &'a str) -> Option<&'a str> {
    [confirmed, detail].into_iter().map(year_from_release_date).find(|y| !y.is_empty())
}

#[derive(Clone, Debug, Deserialize)]
pub struct SearchResult {
    pub id: i32,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub original_title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub release_date: String,
}

impl SearchResult {
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() { &self.original_title } else { &self.title }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct MovieDetail {
    pub original_title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub release_date: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Clone, Debug)]
pub struct RankedMovie {
    pub rank: usize,
    pub movie: movie::Model,
}

/// Pairs each movie with its display rank. Input is in ascending rating
/// order, so the last movie is ranked first.
pub fn rank_movies(movies: Vec<movie::Model>) -> Vec<RankedMovie> {
    let total = movies.len();
    movies
        .into_iter()
        .enumerate()
        .map(|(i, movie)| RankedMovie { rank: total - i, movie })
        .collect()
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Notice {
    Added,
    Rated,
    Deleted,
}

impl Notice {
    pub fn as_code(self) -> &'static str {
        match self {
            Notice::Added => "added",
            Notice::Rated => "rated",
            Notice::Deleted => "deleted",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "added" => Some(Notice::Added),
            "rated" => Some(Notice::Rated),
            "deleted" => Some(Notice::Deleted),
            _ => None,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Notice::Added => "Movie added. Give it a rating and a review.",
            Notice::Rated => "Rating saved.",
            Notice::Deleted => "Movie removed from your list.",
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct EditForm {
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub review: String,
}

#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: i32,
}

#[derive(Debug, Deserialize)]
pub struct FindQuery {
    pub id: i32,
    #[serde(default)]
    pub year: String,
}
