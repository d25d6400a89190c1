//! Repository project info
//!
//! # Overview
//!
//! Summarizes a hosted repository into a single record: its name, owner, the top committer
//! with their commit count, and the set of languages used.
//!
//! The summary is assembled from two upstream queries issued one after another through a
//! [`api::Client`]: the repository's language breakdown, then its contributor list.
//! Contributors are expected in desc order of contributions, so the first one is reported as
//! the top committer. A repository without contribution history yields an empty committer and
//! zero commits rather than an error.
//!
//! Request paths are validated with [`path::parse_project_path`] before anything is queried.

pub mod api;
pub mod path;
#[cfg(feature = "summary")]
pub mod summary;
