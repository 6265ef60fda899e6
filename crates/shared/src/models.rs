//! Shared data models for the gratitude board and its posts API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Author shown for posts submitted without a name.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

/// Number of posts requested per feed page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

// --- Posts ---

/// A gratitude post as returned by the backend.
///
/// Posts are read-only on the client. The decoder is lenient about the shapes
/// older backends produced: numeric ids, a missing author, the singular
/// `hashtag` key and empty optional strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", from = "PostWire")]
pub struct Post {
    pub id: String,
    pub author: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hashtags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub college: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Decoded shape of a post before normalization.
///
/// `hashtag` is the legacy key; when both keys are sent the plural wins.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PostWire {
    #[serde(deserialize_with = "id_from_wire")]
    id: String,
    #[serde(default = "anonymous_author", deserialize_with = "author_or_anonymous")]
    author: String,
    message: String,
    #[serde(default, deserialize_with = "non_blank")]
    hashtags: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    hashtag: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    college: Option<String>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

impl From<PostWire> for Post {
    fn from(wire: PostWire) -> Self {
        Self {
            id: wire.id,
            author: wire.author,
            message: wire.message,
            hashtags: wire.hashtags.or(wire.hashtag),
            college: wire.college,
            created_at: wire.created_at,
        }
    }
}

/// Body of `POST /api/posts`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub author: String,
    pub message: String,
    pub hashtags: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub college: Option<String>,
}

/// Query string for `GET /api/posts`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostsQuery {
    pub page: u32,
    pub limit: usize,
}

impl PostsQuery {
    pub fn page(page: u32) -> Self {
        Self {
            page,
            limit: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

fn anonymous_author() -> String {
    ANONYMOUS_AUTHOR.to_string()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireId {
    Text(String),
    Number(serde_json::Number),
}

fn id_from_wire<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match WireId::deserialize(deserializer)? {
        WireId::Text(id) => id,
        WireId::Number(id) => id.to_string(),
    })
}

fn author_or_anonymous<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(non_blank(deserializer)?.unwrap_or_else(anonymous_author))
}

fn non_blank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

// --- Colleges ---

/// Colleges a poster can pick from. The backend stores the label text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum College {
    Engineering,
    Business,
    ComputerSciences,
    SocialSciencesAndHumanities,
    HealthSciences,
    ArtsMediaAndDesign,
    Law,
    ProfessionalStudies,
    Science,
}

impl College {
    /// Selector order.
    pub const ALL: [College; 9] = [
        College::Engineering,
        College::Business,
        College::ComputerSciences,
        College::SocialSciencesAndHumanities,
        College::HealthSciences,
        College::ArtsMediaAndDesign,
        College::Law,
        College::ProfessionalStudies,
        College::Science,
    ];

    pub fn label(self) -> &'static str {
        match self {
            College::Engineering => "College of Engineering",
            College::Business => "D'Amore-McKim School of Business",
            College::ComputerSciences => "Khoury College of Computer Sciences",
            College::SocialSciencesAndHumanities => "College of Social Sciences and Humanities",
            College::HealthSciences => "Bouvé College of Health Sciences",
            College::ArtsMediaAndDesign => "College of Arts, Media and Design",
            College::Law => "School of Law",
            College::ProfessionalStudies => "College of Professional Studies",
            College::Science => "College of Science",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl std::fmt::Display for College {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
