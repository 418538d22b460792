//! Value coercion and shape normalization for parsed feed trees.
//!
//! Feed documents are loosely structured and frequently malformed. Every
//! function here applies one deterministic leniency policy and signals
//! "this node is not a value of the requested shape" with `None`, never with
//! an error.
//!
//! # Overview
//!
//! - **text**: CDATA stripping and HTML entity decoding
//! - **coercion**: string, number, boolean and date extraction
//! - **shape**: array-like detection, singular/plural reconciliation, nullish pruning
//! - **generate**: inverse primitives used when building output trees
//! - **datetime**: RFC 822 and RFC 3339 date strings
//!
//! # Example
//!
//! ```
//! use feed_normalize::{parse_array_of, parse_string, parse_yes_no_boolean};
//! use serde_json::json;
//!
//! let item = json!({ "title": "  Hello &amp; welcome ", "explicit": "Yes", "category": "news" });
//!
//! assert_eq!(item.get("title").and_then(parse_string), Some("Hello & welcome".to_string()));
//! assert_eq!(item.get("explicit").and_then(parse_yes_no_boolean), Some(true));
//! assert_eq!(
//!     item.get("category").and_then(|value| parse_array_of(value, parse_string)),
//!     Some(vec!["news".to_string()])
//! );
//! ```

pub mod coercion;
pub mod datetime;
pub mod generate;
pub mod shape;
pub mod text;

pub use coercion::{
    parse_boolean, parse_date, parse_number, parse_string, parse_text_boolean, parse_text_date,
    parse_text_number, parse_text_string, parse_text_yes_no_boolean, parse_yes_no_boolean,
};
pub use datetime::{DateLike, generate_rfc3339_date, generate_rfc822_date, parse_date_like};
pub use generate::{
    generate_boolean, generate_cdata_string, generate_number, generate_plain_string,
    generate_text_or_cdata_string, generate_yes_no_boolean,
};
pub use shape::{
    generate_csv, generate_csv_of, parse_array, parse_array_of, parse_csv_of, parse_singular,
    parse_singular_of, trim_array, trim_array_of, trim_object,
};
pub use text::{decode_entities, has_entities, strip_cdata};
