//! Client for the AniList GraphQL API, used by the anime detail page.

use futures::future::{select, Either};
use futures::pin_mut;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::{Deserialize, Serialize};

use crate::config;
use crate::markup::css_color;

pub const ANIME_QUERY: &str = r#"
query ($id: Int) {
  Media(id: $id, type: ANIME) {
    id
    title { romaji english native }
    description
    coverImage { large color }
    bannerImage
    episodes
    status
    startDate { year month }
    endDate { year month }
    studios(isMain: true) { nodes { name } }
    characters(sort: ROLE, perPage: 12) { nodes { name { full } image { medium } } }
    staff(perPage: 8) { nodes { name { full } primaryOccupations } }
  }
}
"#;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MetadataError {
    #[error("could not reach AniList: {0}")]
    Request(String),

    #[error("AniList answered with HTTP {0}")]
    Status(u16),

    #[error("unexpected response from AniList: {0}")]
    Decode(String),

    #[error("AniList reported: {0}")]
    Remote(String),

    #[error("no anime with id {0}")]
    NotFound(u32),

    #[error("AniList did not answer within {0}ms")]
    Timeout(u32),
}

#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: MediaVariables,
}

#[derive(Serialize)]
struct MediaVariables {
    id: u32,
}

#[derive(Deserialize, Debug)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Deserialize, Debug)]
pub struct GraphQlError {
    pub message: String,
    #[serde(default)]
    pub status: Option<u16>,
}

#[derive(Deserialize, Debug)]
pub struct MediaData {
    #[serde(rename = "Media")]
    pub media: Option<AnimeDetails>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct MediaTitle {
    pub romaji: Option<String>,
    pub english: Option<String>,
    pub native: Option<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct CoverImage {
    pub large: Option<String>,
    pub color: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct FuzzyDate {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Connection<T> {
    #[serde(default = "Vec::new")]
    pub nodes: Vec<T>,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Studio {
    pub name: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct PersonName {
    pub full: Option<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct PortraitImage {
    pub medium: Option<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Character {
    #[serde(default)]
    pub name: PersonName,
    #[serde(default)]
    pub image: Option<PortraitImage>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    #[serde(default)]
    pub name: PersonName,
    #[serde(default)]
    pub primary_occupations: Vec<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnimeDetails {
    pub id: u32,
    #[serde(default)]
    pub title: MediaTitle,
    pub description: Option<String>,
    #[serde(default)]
    pub cover_image: CoverImage,
    pub banner_image: Option<String>,
    pub episodes: Option<u32>,
    pub status: Option<String>,
    #[serde(default)]
    pub start_date: FuzzyDate,
    #[serde(default)]
    pub end_date: FuzzyDate,
    #[serde(default)]
    pub studios: Connection<Studio>,
    #[serde(default)]
    pub characters: Connection<Character>,
    #[serde(default)]
    pub staff: Connection<StaffMember>,
}

impl AnimeDetails {
    /// English title when there is one, then romaji, then native.
    pub fn display_title(&self) -> String {
        [&self.title.english, &self.title.romaji, &self.title.native]
            .into_iter()
            .flatten()
            .find(|title| !title.trim().is_empty())
            .cloned()
            .unwrap_or_else(|| format!("Anime #{}", self.id))
    }

    /// Cover colour when it is a plain hex colour, otherwise the default.
    pub fn accent_color(&self) -> &str {
        self.cover_image
            .color
            .as_deref()
            .and_then(css_color)
            .unwrap_or(config::DEFAULT_ACCENT_COLOR)
    }

    /// "Oct 2011 – Sep 2014", "Apr 2024 – ongoing", or "Unknown dates".
    pub fn airing_range(&self) -> String {
        match (format_fuzzy_date(&self.start_date), format_fuzzy_date(&self.end_date)) {
            (Some(start), Some(end)) if start == end => start,
            (Some(start), Some(end)) => format!("{} – {}", start, end),
            (Some(start), None) => format!("{} – ongoing", start),
            (None, Some(end)) => format!("until {}", end),
            (None, None) => "Unknown dates".to_string(),
        }
    }

    pub fn status_label(&self) -> Option<String> {
        self.status.as_deref().map(|status| {
            let lower = status.replace('_', " ").to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
    }
}

pub fn format_fuzzy_date(date: &FuzzyDate) -> Option<String> {
    let year = date.year?;
    let month = date
        .month
        .and_then(|month| u8::try_from(month).ok())
        .and_then(|month| chrono::Month::try_from(month).ok());
    Some(match month {
        Some(month) => format!("{} {}", &month.name()[..3], year),
        None => year.to_string(),
    })
}

/// Interprets a GraphQL envelope for the media query.
pub fn decode_envelope(id: u32, envelope: GraphQlResponse<MediaData>) -> Result<AnimeDetails, MetadataError> {
    if !envelope.errors.is_empty() {
        if envelope.errors.iter().any(|e| e.status == Some(404)) {
            return Err(MetadataError::NotFound(id));
        }
        let messages: Vec<&str> = envelope.errors.iter().map(|e| e.message.as_str()).collect();
        return Err(MetadataError::Remote(messages.join("; ")));
    }

    envelope
        .data
        .and_then(|data| data.media)
        .ok_or(MetadataError::NotFound(id))
}

async fn request_anime(id: u32) -> Result<AnimeDetails, MetadataError> {
    let body = GraphQlRequest {
        query: ANIME_QUERY,
        variables: MediaVariables { id },
    };

    let response = Request::post(config::ANILIST_GRAPHQL_URL)
        .header("Accept", "application/json")
        .json(&body)
        .map_err(|e| MetadataError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| MetadataError::Request(e.to_string()))?;

    let status = response.status();
    let ok = response.ok();
    match response.json::<GraphQlResponse<MediaData>>().await {
        Ok(envelope) => decode_envelope(id, envelope),
        Err(_) if !ok => Err(MetadataError::Status(status)),
        Err(e) => Err(MetadataError::Decode(e.to_string())),
    }
}

/// Looks up one anime by its AniList id, giving up after
/// `config::METADATA_TIMEOUT_MS`.
pub async fn fetch_anime(id: u32) -> Result<AnimeDetails, MetadataError> {
    log::debug!("Fetching AniList media {}", id);

    let lookup = request_anime(id);
    let timeout = TimeoutFuture::new(config::METADATA_TIMEOUT_MS);
    pin_mut!(lookup);
    pin_mut!(timeout);

    let result = match select(lookup, timeout).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(MetadataError::Timeout(config::METADATA_TIMEOUT_MS)),
    };

    if let Err(e) = &result {
        log::error!("AniList lookup for {} failed: {}", id, e);
    }
    result
}
