//! Canonical event model for the Event Mapper client.
//!
//! Everything the map client decides without touching the network or the
//! DOM lives here: the [`EventFeature`] collection backing the marker layer,
//! response-shape normalization, render-time geometry filtering, the
//! client-side fallback search, creation-form validation, viewport bounds
//! math, and the nearest-neighbor result types.
//!
//! The crate is target-independent and all of its logic is exercised by
//! plain host-run `cargo test`.

pub mod bounds;
pub mod error;
pub mod event;
pub mod normalize;
pub mod proximity;
pub mod search;
pub mod validate;

pub use bounds::{bounds_of, LatLngBounds, FIT_PADDING};
pub use error::{NormalizeError, ValidationError};
pub use event::{renderable, EventCollection, EventFeature, EventId, EventProperties, PointGeometry};
pub use normalize::{classify, normalize, RawEvents};
pub use proximity::{NearestResponse, ProximityResult, SearchPoint};
pub use search::filter_by_name_or_city;
pub use validate::{valid_absolute_url, validate, EventForm, NewEvent};
