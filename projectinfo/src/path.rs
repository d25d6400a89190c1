//! Validation of the inbound request path.
//!
//! The only accepted shape is `/projectinfo/v1/github.com/<owner>/<repo>`,
//! optionally followed by a single trailing slash.

use crate::api::Repo;
use thiserror::Error;

pub const PREFIX: &str = "projectinfo";
pub const VERSION: &str = "v1";
pub const HOST: &str = "github.com";
pub const EXPECTED_URL: &str = "/projectinfo/v1/github.com/<username>/<repo>";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PathError {
    #[error("Bad Request: unexpected number of path segments, the correct url is \"{}\"", EXPECTED_URL)]
    SegmentCount,
    #[error("Bad Request: expected \"{expected}\" but found \"{found}\", the correct url is \"{}\"", EXPECTED_URL)]
    Literal { expected: &'static str, found: String },
    #[error("Bad Request: owner and repo must not be empty, the correct url is \"{}\"", EXPECTED_URL)]
    EmptySegment,
}

/// Extracts owner and repository name from a request path.
///
/// Owner and repository are taken verbatim, no character or length checks are applied.
pub fn parse_project_path(path: &str) -> Result<Repo, PathError> {
    let parts: Vec<&str> = path.split('/').collect();
    let parts = match parts.as_slice() {
        [.., ""] if parts.len() == 7 => &parts[..6],
        _ if parts.len() == 6 => &parts[..],
        _ => return Err(PathError::SegmentCount),
    };

    for (found, expected) in parts[1..4].iter().zip([PREFIX, VERSION, HOST]) {
        if *found != expected {
            return Err(PathError::Literal {
                expected,
                found: found.to_string(),
            });
        }
    }

    let (owner, name) = (parts[4], parts[5]);
    if owner.is_empty() || name.is_empty() {
        return Err(PathError::EmptySegment);
    }
    Ok(Repo::new(owner.to_string(), name.to_string()))
}
