//! Sources of new unlabeled data items.

pub mod dog_api;

pub use dog_api::{DEFAULT_DOG_API_URL, DogSource, parse_dog_response};

use crate::error::Result;
use crate::model::Datum;

/// A provider of new unlabeled data items
pub trait Source {
    /// Fetch the next item to label
    fn fetch(&mut self) -> Result<Datum>;
}
