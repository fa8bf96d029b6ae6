//! # Auth Routes Module
//!
//! Holds the `/login` handler. The credential check is a plaintext equality
//! comparison against the `user` table, matching the upstream system; the
//! returned token is a fixed placeholder.

pub mod post;
