use clap::Parser;
use secrecy::SecretString;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Port to listen on
    #[clap(short, long, env)]
    pub port: u16,

    /// API OAuth access token
    #[clap(short, long, env)]
    pub api_token: Option<SecretString>,

    /// Repository API URL
    #[clap(long, env, default_value = github_client::GITHUB_URL)]
    pub api_url: String,

    /// User agent sent to the repository API
    #[clap(short, long, env, default_value = github_client::USER_AGENT)]
    pub user_agent: String,
}
