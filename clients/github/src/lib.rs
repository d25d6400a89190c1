use async_trait::async_trait;
use log::debug;
use log::warn;
use projectinfo::api::Contributor;
use projectinfo::api::Error;
use projectinfo::api::Repo;
use projectinfo::api::Resource;
use projectinfo::api::Result;
use reqwest::Client;

mod builder;
mod payload;

pub use builder::{GithubClientBuilder, GITHUB_URL, USER_AGENT};

pub struct GithubClient {
    client: Client,
    github_url: String,
}

impl GithubClient {
    /// GETs `/repos/{owner}/{repo}/{resource}` and returns the raw body.
    ///
    /// The upstream status code is not interpreted: error payloads are left for the decoder to reject.
    async fn fetch(&self, repo: &Repo, resource: Resource) -> Result<Vec<u8>> {
        let endpoint = match resource {
            Resource::Languages => "languages",
            Resource::Contributors => "contributors",
        };
        let request_url = format!("{}/repos/{}/{}/{}", self.github_url, repo.owner, repo.name, endpoint);
        let response = self.client.get(&request_url).send().await.map_err(|err| {
            warn!("GET {} failed: {}", request_url, err);
            Error::unreachable(resource, err)
        })?;
        let status = response.status();
        if !status.is_success() {
            debug!("GET {} returned {}", request_url, status);
        }
        let body = response
            .bytes()
            .await
            .map_err(|err| Error::decode(resource, err))?;
        Ok(body.to_vec())
    }
}

#[async_trait]
impl projectinfo::api::Client for GithubClient {
    async fn languages(&self, repo: &Repo) -> Result<Vec<String>> {
        let body = self.fetch(repo, Resource::Languages).await?;
        payload::language_names(&body).map_err(|err| Error::decode(Resource::Languages, err))
    }

    async fn contributors(&self, repo: &Repo) -> Result<Vec<Contributor>> {
        let body = self.fetch(repo, Resource::Contributors).await?;
        payload::contributors(&body).map_err(|err| Error::decode(Resource::Contributors, err))
    }
}

#[cfg(test)]
mod tests {
    use crate::GithubClientBuilder;
    use projectinfo::api::{Client, Contributor, Error, Repo, Resource};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn repo() -> Repo {
        Repo::new("golang".to_string(), "go".to_string())
    }

    async fn mock(server: &MockServer, endpoint: &str, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path(format!("/repos/golang/go/{}", endpoint)))
            .and(header("Accept", "application/vnd.github.v3+json"))
            .respond_with(response)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn languages() {
        let server = MockServer::start().await;
        mock(
            &server,
            "languages",
            ResponseTemplate::new(200).set_body_raw(r#"{"Go": 100, "C": 5}"#, "application/json"),
        )
        .await;
        let client = GithubClientBuilder::default().with_github_url(server.uri()).build().unwrap();

        let mut languages = client.languages(&repo()).await.unwrap();
        languages.sort();

        assert_eq!(languages, vec!["C", "Go"]);
    }

    #[tokio::test]
    async fn malformed_languages() {
        let server = MockServer::start().await;
        mock(
            &server,
            "languages",
            ResponseTemplate::new(200).set_body_raw("{\"Go\": 1", "application/json"),
        )
        .await;
        let client = GithubClientBuilder::default().with_github_url(server.uri()).build().unwrap();

        let err = client.languages(&repo()).await.unwrap_err();

        assert!(matches!(
            err,
            Error::Decode {
                resource: Resource::Languages,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn contributors() {
        let server = MockServer::start().await;
        mock(
            &server,
            "contributors",
            ResponseTemplate::new(200).set_body_raw(
                r#"[{"login": "rsc", "contributions": 10}, {"login": "adg", "contributions": 3}]"#,
                "application/json",
            ),
        )
        .await;
        let client = GithubClientBuilder::default().with_github_url(server.uri()).build().unwrap();

        let contributors = client.contributors(&repo()).await.unwrap();

        assert_eq!(
            contributors,
            vec![Contributor::new("rsc", 10), Contributor::new("adg", 3)]
        );
    }

    #[tokio::test]
    async fn no_content_means_no_contributors() {
        let server = MockServer::start().await;
        mock(&server, "contributors", ResponseTemplate::new(204)).await;
        let client = GithubClientBuilder::default().with_github_url(server.uri()).build().unwrap();

        let contributors = client.contributors(&repo()).await.unwrap();

        assert!(contributors.is_empty());
    }

    #[tokio::test]
    async fn missing_repo() {
        let server = MockServer::start().await;
        mock(
            &server,
            "contributors",
            ResponseTemplate::new(404).set_body_raw(
                r#"{"message": "Not Found", "documentation_url": "https://docs.github.com/rest"}"#,
                "application/json",
            ),
        )
        .await;
        let client = GithubClientBuilder::default().with_github_url(server.uri()).build().unwrap();

        let err = client.contributors(&repo()).await.unwrap_err();

        assert!(matches!(
            err,
            Error::Decode {
                resource: Resource::Contributors,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn unreachable() {
        // nothing listens on a port released right after binding it
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let uri = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);
        let client = GithubClientBuilder::default().with_github_url(uri).build().unwrap();

        let err = client.languages(&repo()).await.unwrap_err();

        assert!(matches!(
            err,
            Error::Unreachable {
                resource: Resource::Languages,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn token_is_sent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/golang/go/languages"))
            .and(header("Authorization", "token secret"))
            .and(header("User-Agent", "tester"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("{}", "application/json"))
            .expect(1)
            .mount(&server)
            .await;
        let client = GithubClientBuilder::default()
            .with_github_url(server.uri())
            .try_with_token(secrecy::SecretString::new("secret".to_string()))
            .unwrap()
            .try_with_user_agent("tester")
            .unwrap()
            .build()
            .unwrap();

        assert!(client.languages(&repo()).await.unwrap().is_empty());
    }
}
