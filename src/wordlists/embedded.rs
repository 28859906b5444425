//! Embedded word lists
//!
//! Per-length word lists compiled into the binary at build time.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/words_4.rs"));
include!(concat!(env!("OUT_DIR"), "/words_5.rs"));
include!(concat!(env!("OUT_DIR"), "/words_6.rs"));
