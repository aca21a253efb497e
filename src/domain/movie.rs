use std::cmp::Ordering;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One entry of the daily schedule, optionally enriched with catalog data.
///
/// Field names follow the schedule's JSON so records can be served back
/// unchanged; fields this crate doesn't use are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    #[serde(rename = "ID", default)]
    pub id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(
        rename = "ProductionYear",
        default,
        deserialize_with = "string_or_number"
    )]
    pub production_year: Option<String>,
    #[serde(rename = "MovieScheduleUrl", default)]
    pub schedule_url: String,
    #[serde(default)]
    pub kp_url: Option<String>,
    #[serde(default)]
    pub kp_rating: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MovieRecord {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            production_year: None,
            schedule_url: String::new(),
            kp_url: None,
            kp_rating: None,
            extra: Map::new(),
        }
    }

    pub fn is_rated(&self) -> bool {
        self.kp_url.is_some() && self.kp_rating.is_some()
    }

    /// A catalog link without a rating means the catalog has too few votes;
    /// no link means the movie never made it through enrichment.
    pub fn display_rating(&self) -> String {
        match (&self.kp_url, self.kp_rating) {
            (_, Some(rating)) => rating.to_string(),
            (Some(_), None) => "Rating unavailable (too few votes)".to_string(),
            (None, None) => "Rating unavailable".to_string(),
        }
    }

    /// Prefix a relative schedule link with `base`. Absolute links are kept.
    pub fn absolutize_schedule_url(&mut self, base: &str) {
        if self.schedule_url.starts_with("http://") || self.schedule_url.starts_with("https://") {
            return;
        }
        self.schedule_url = format!("{}{}", base.trim_end_matches('/'), self.schedule_url);
    }
}

/// Sort by rating, best first. Unrated movies go last, in schedule order.
pub fn sort_by_rating(movies: &mut [MovieRecord]) {
    movies.sort_by(|a, b| {
        b.kp_rating
            .partial_cmp(&a.kp_rating)
            .unwrap_or(Ordering::Equal)
    });
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected string or number for ProductionYear, got {}",
            other
        ))),
    }
}
