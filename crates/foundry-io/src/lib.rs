//! Text formats and state digests for Foundry simulations.
//!
//! Every format is whitespace-separated with one record per line:
//!
//! | Format | Record |
//! |--------|--------|
//! | voltage dataset (import and export) | `i j k conductivity voltage` |
//! | field export | `i j k x y z` |
//! | device points | `i j` |
//!
//! Readers are generic over [`BufRead`](std::io::BufRead) and writers over
//! [`Write`](std::io::Write), so tests can use in-memory buffers; the
//! `*_path` variants open files.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod device;
pub mod digest;
pub mod error;
pub mod field;
pub mod voltage;

pub use device::{DeviceImportSummary, DevicePoints};
pub use digest::{field_digest, voltage_digest};
pub use error::IoError;
pub use field::{write_field, write_field_to_path, FieldExport};
pub use voltage::{load_grid, read_voltage_seeds, write_voltages, write_voltages_to_path};
