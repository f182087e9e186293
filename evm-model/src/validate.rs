//! Event creation form validation.
//!
//! Validation is fail-fast with a fixed precedence: required fields and
//! parseable coordinates first, then coordinate ranges, then URL syntax.
//! A [`ValidationError`] means no network call is made at all.

use crate::error::ValidationError;
use serde::Serialize;
use url::Url;

/// Raw text contents of the add-event form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventForm {
    pub name: String,
    pub country: String,
    pub city: String,
    pub venue: String,
    pub latitude: String,
    pub longitude: String,
    pub date: String,
    pub url: String,
}

/// Validated record ready to POST to the creation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewEvent {
    pub name: String,
    pub country: String,
    pub city: String,
    pub venue: String,
    pub latitude: f64,
    pub longitude: f64,
    pub date: Option<String>,
    pub url: String,
}

/// Check the form, first violation wins.
pub fn validate(form: &EventForm) -> Result<NewEvent, ValidationError> {
    let name = form.name.trim();
    let country = form.country.trim();
    let city = form.city.trim();
    let venue = form.venue.trim();
    let latitude = parse_coordinate(&form.latitude);
    let longitude = parse_coordinate(&form.longitude);

    let (latitude, longitude) = match (latitude, longitude) {
        (Some(lat), Some(lng))
            if !name.is_empty() && !country.is_empty() && !city.is_empty() && !venue.is_empty() =>
        {
            (lat, lng)
        }
        _ => return Err(ValidationError::MissingFields),
    };

    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        return Err(ValidationError::CoordinatesOutOfRange);
    }

    let url = form.url.trim();
    if !url.is_empty() && Url::parse(url).is_err() {
        return Err(ValidationError::InvalidUrl);
    }

    let date = form.date.trim();
    Ok(NewEvent {
        name: name.to_owned(),
        country: country.to_owned(),
        city: city.to_owned(),
        venue: venue.to_owned(),
        latitude,
        longitude,
        date: (!date.is_empty()).then(|| date.to_owned()),
        url: url.to_owned(),
    })
}

fn parse_coordinate(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Whether a record's `url` field is worth rendering as a link.
pub fn valid_absolute_url(text: &str) -> bool {
    Url::parse(text).is_ok()
}
