//! Destinations that durably persist labeled data.

pub mod jsonl;
pub mod summary;

pub use jsonl::JsonlSink;
pub use summary::LabelCounts;

use crate::error::Result;
use crate::model::LabeledDatum;

/// A destination for labeled data, e.g. a file or a database
pub trait Sink {
    /// Write `items` to the target; `overwrite` discards existing content first
    fn write(&self, items: &[LabeledDatum], overwrite: bool) -> Result<()>;

    /// Write `items` after any existing content
    fn append(&self, items: &[LabeledDatum]) -> Result<()> {
        self.write(items, false)
    }
}
