//! tone-lut: dense 8-bit tone tables from sparse intensity samples
//!
//! A handful of `(input, output)` intensity pairs, usually measured or
//! hand-tuned, are interpolated into a [`LookupTable`] with one entry for
//! every 8-bit intensity. The table is then applied to single-channel
//! pixels by direct indexing.
//!
//! # Quick Start
//!
//! ```
//! use tone_lut::{LookupTable, Sample, SampleSet};
//!
//! let samples = SampleSet::new(vec![Sample::new(4.44, 0.0), Sample::new(235.68, 255.0)]).unwrap();
//! let table = LookupTable::build(&samples);
//!
//! assert_eq!(table[120], 127);
//! assert_eq!(table.complement()[120], 128);
//! ```
//!
//! # Interpolation Rules
//!
//! - Samples are stable-sorted by input.
//! - Queries at or below the smallest input take the first sample's output;
//!   at or above the largest input, the last sample's output.
//! - Between samples the value is linearly interpolated.
//! - Each value is clamped to `[0, 255]` and rounded half away from zero.
//!
//! # Tabular Sources
//!
//! [`parse_samples`] reads comma- or tab-separated text with `Scan` (input)
//! and `Idea` (output) columns. Failures are split into [`FormatError`]
//! (the delimiter cannot be determined) and [`ValidationError`] (missing
//! columns, missing or non-numeric values, no rows).

pub mod error;
pub mod parse;
pub mod sample;
pub mod table;


pub use error::{FormatError, LutError, ValidationError};
pub use parse::{parse_samples, parse_table, Delimiter, IDEA_FIELD, SCAN_FIELD};
pub use sample::{Sample, SampleSet};
pub use table::{LookupTable, TABLE_SIZE};
