use quick_xml::events::Event;
use quick_xml::Reader;

use crate::app::{CinemaError, Result};

const RATING_ELEMENT: &[u8] = b"kp_rating";

/// Read the catalog rating out of a rating document such as
/// `<rating><kp_rating num_vote="1000">7.5</kp_rating>...</rating>`.
pub fn parse_rating(xml: &str) -> Result<f64> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();
    let mut in_rating = false;
    let mut text = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) if e.name().as_ref() == RATING_ELEMENT => in_rating = true,
            Ok(Event::Empty(e)) if e.name().as_ref() == RATING_ELEMENT => {
                return Err(CinemaError::RatingParse("empty kp_rating element".into()));
            }
            Ok(Event::Text(e)) if in_rating => {
                let value = e
                    .unescape()
                    .map_err(|e| CinemaError::RatingParse(e.to_string()))?;
                text.push_str(&value);
            }
            Ok(Event::End(e)) if e.name().as_ref() == RATING_ELEMENT => break,
            Ok(Event::Eof) => {
                return Err(CinemaError::RatingParse("kp_rating element not found".into()));
            }
            Err(e) => return Err(CinemaError::RatingParse(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    let text = text.trim();
    text.parse::<f64>()
        .map_err(|_| CinemaError::RatingParse(format!("not a number: {:?}", text)))
}
