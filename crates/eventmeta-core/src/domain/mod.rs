//! Domain types for event metadata.
//!
//! These are pure data types with no platform access. Probes fill the
//! platform types; the metadata cache turns them into an [`EventMetadata`].

mod locale;
mod metadata;
mod platform;

pub use locale::{Locale, iso3_for_alpha2};
pub use metadata::{EventMetadata, EventMetadataBuilder, MetadataKey, UnknownKeyError};
pub use platform::{BuildInfo, DisplayMetrics, MemoryInfo};
