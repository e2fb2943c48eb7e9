//! Room measurement model and square-footage arithmetic.
//!
//! Measurements arrive from form input with width and length kept as the
//! raw typed strings. All arithmetic goes through [`parse_feet`], which
//! treats anything unparseable as zero rather than failing.

mod measurement;

pub use measurement::{
    format_square_footage, parse_feet, parse_measurements, total_square_footage, Measurement,
};
