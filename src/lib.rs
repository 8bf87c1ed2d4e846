//! Wikidata Brand Linker
//!
//! Joins restaurant records from the European restaurants TriG dataset
//! against a CSV brand table and emits `owl:sameAs` links to Wikidata
//! entities as Turtle.
//!
//! # Pipeline
//!
//! ```text
//! res_brand.csv
//!       │
//!       ▼
//! ┌─────────────────────────────────────────┐
//! │  Brand map loader                       │
//! │  normalized brand name → Wikidata QID  │
//! └─────────────────────────────────────────┘
//!                                │
//! european_restaurants.trig      │
//!       │                        │
//!       ▼                        │
//! ┌─────────────────────────────────────────┐
//! │  Subject extractor (streaming scan)     │
//! │  :restaurant_* → last declared name    │
//! └─────────────────────────────────────────┘
//!       │                        │
//!       └───────────┬────────────┘
//!                   ▼
//! ┌─────────────────────────────────────────┐
//! │  Linker: join on normalized name        │
//! │  hits → BrandLink, misses → counted   │
//! └─────────────────────────────────────────┘
//!                   │
//!                   ▼
//!        wikidata_brand_links.ttl
//! ```

pub mod brand_map;
pub mod extract;
pub mod linker;
pub mod normalize;
pub mod ttl;

pub use brand_map::{load_brand_map, BrandMap};
pub use extract::{SubjectExtractor, SubjectNames};
pub use linker::{link_brands, BrandLink, LinkOutcome};
pub use normalize::normalize_name;
pub use ttl::{escape_label, write_links};
