use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::app::{CinemaError, Result};
use crate::domain::MovieRecord;

/// The schedule page builds its listing widget client-side; the data is the
/// second argument of this call.
static WIDGET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)React\.createElement\(__desktopComponents\.Widget,(.+?\}\})\),document\.getElementById",
    )
    .unwrap()
});

#[derive(Deserialize)]
struct WidgetProps {
    widget: Widget,
}

#[derive(Deserialize)]
struct Widget {
    #[serde(rename = "Items")]
    items: Vec<MovieRecord>,
}

/// Extract the movie list embedded in a schedule page.
pub fn parse_schedule(html: &str) -> Result<Vec<MovieRecord>> {
    let blob = WIDGET_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .ok_or_else(|| CinemaError::ScheduleParse("widget data not found in page".into()))?
        .as_str();

    let props: WidgetProps =
        serde_json::from_str(blob).map_err(|e| CinemaError::ScheduleParse(e.to_string()))?;

    Ok(props.widget.items)
}
