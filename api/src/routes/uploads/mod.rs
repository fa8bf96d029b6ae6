//! # Photo Upload Routes Module
//!
//! Multipart photo uploads for guru and siswa, plus retrieval of the stored
//! files. Uploads are written under the configured photo storage root, one
//! subdirectory per entity kind, and the owning row's `foto` column is
//! updated with the resulting URL.
//!
//! A successful file write followed by a failed database update leaves the
//! stored file orphaned; there is no compensating cleanup.

pub mod get;
pub mod post;
