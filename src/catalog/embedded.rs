//! Embedded airport code catalog
//!
//! Raw catalog lines compiled into the binary at build time.

// Include generated code list from build script
include!(concat!(env!("OUT_DIR"), "/airport_codes.rs"));
