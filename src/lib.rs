use github_client::{GithubClient, GithubClientBuilder};
use projectinfo::summary::ProjectInfoService;
use std::net::{Ipv4Addr, SocketAddr};

mod args;
mod server;

pub use args::Args;
pub use server::{handle_request, status_of, Server};

/// Binds the listening socket and wires the GitHub client into the request handler.
pub async fn start_server(args: Args) -> anyhow::Result<Server<GithubClient>> {
    let mut client = GithubClientBuilder::default()
        .with_github_url(args.api_url)
        .try_with_user_agent(args.user_agent)?;
    if let Some(token) = args.api_token {
        client = client.try_with_token(token)?;
    }
    let client = client.build()?;

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, args.port));
    let server = Server::bind(addr, ProjectInfoService::new(client)).await?;
    Ok(server)
}
