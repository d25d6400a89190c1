use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Deserialize;
use std::collections::HashMap;

/// Byte counts per language. Only the keys are used.
pub type Languages = Option<HashMap<String, IgnoredAny>>;

#[derive(Deserialize, Debug)]
pub struct Contributor {
    pub login: String,
    pub contributions: u32,
}

impl From<Contributor> for projectinfo::api::Contributor {
    fn from(contributor: Contributor) -> Self {
        projectinfo::api::Contributor {
            name: contributor.login,
            contributions: contributor.contributions,
        }
    }
}

/// Decodes the first JSON value of `body`.
///
/// Returns `Ok(None)` if `body` holds nothing but whitespace.
pub fn decode_first<T: DeserializeOwned>(body: &[u8]) -> serde_json::Result<Option<T>> {
    serde_json::Deserializer::from_slice(body)
        .into_iter::<T>()
        .next()
        .transpose()
}

pub fn language_names(body: &[u8]) -> serde_json::Result<Vec<String>> {
    let languages = decode_first::<Languages>(body)?.flatten().unwrap_or_default();
    Ok(languages.into_keys().collect())
}

pub fn contributors(body: &[u8]) -> serde_json::Result<Vec<projectinfo::api::Contributor>> {
    let contributors = decode_first::<Vec<Contributor>>(body)?.unwrap_or_default();
    Ok(contributors.into_iter().map(Into::into).collect())
}
