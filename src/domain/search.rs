use crate::domain::MovieRecord;

/// Query parameters for the catalog's advanced search form.
///
/// The fixed keys select "search content by name and year"; each worker
/// gets its own value from [`SearchParameters::for_movie`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParameters {
    pub find: String,
    pub year: String,
}

impl SearchParameters {
    const FIXED: [(&'static str, &'static str); 5] = [
        ("level", "7"),
        ("from", "forma"),
        ("result", "adv"),
        ("m_act[from]", "forma"),
        ("m_act[what]", "content"),
    ];

    pub fn for_movie(movie: &MovieRecord) -> Self {
        Self {
            find: movie.name.clone(),
            year: movie.production_year.clone().unwrap_or_default(),
        }
    }

    pub fn to_query(&self) -> Vec<(String, String)> {
        Self::FIXED
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .chain([
                ("m_act[find]".to_string(), self.find.clone()),
                ("m_act[year]".to_string(), self.year.clone()),
            ])
            .collect()
    }
}
