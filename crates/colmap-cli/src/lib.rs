//! Library side of the `colmap` command: logging setup and report
//! building, shared by the binary and its tests.

#![deny(unsafe_code)]

pub mod logging;
pub mod report;
