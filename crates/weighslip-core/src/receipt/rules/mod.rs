//! Rule-based field extractors for Korean weighbridge receipts.
//!
//! Every extractor is a pure function over the normalized text; none
//! depends on another's output.

pub mod direction;
pub mod identifiers;
pub mod normalize;
pub mod parties;
pub mod patterns;
pub mod pickers;
pub mod vehicle;
pub mod weights;

pub use direction::extract_direction;
pub use identifiers::{extract_id_no, extract_weigh_count};
pub use normalize::{normalize, normalize_kg_number};
pub use parties::{extract_issuer, extract_item_name, extract_partner};
pub use pickers::{pick_first_date, pick_first_time, pick_lat_lon};
pub use vehicle::extract_vehicle_no;
pub use weights::{extract_gross_kg, extract_net_kg, extract_tare_kg};
