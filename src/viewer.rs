//! The interactive run: authenticate, ask for a subreddit, print its newest posts.
//!
//! Input and output are passed in as `BufRead`/`Write` so the whole
//! conversation can be driven from tests with scripted stdin.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::api::ApiClient;
use crate::config::{Config, ConfigError, DEFAULT_SUBREDDIT, POST_LIMIT};
use crate::models::Post;
use crate::report::Outcome;
use crate::utils::{format_author, separator};

/// Run the viewer against an already-loaded configuration and print the
/// diagnostic for whatever outcome it reaches.
pub async fn execute<R, W>(config: Result<Config, ConfigError>, input: &mut R, out: &mut W) -> Outcome
where
    R: BufRead,
    W: Write,
{
    let outcome = match config {
        Ok(config) => run(&config, input, out).await,
        Err(err) => Outcome::ConfigError(err),
    };

    if let Err(e) = outcome.report(out) {
        warn!(error = %e, "Failed to write diagnostic");
    }
    outcome
}

/// Authenticate, prompt, fetch and print. Errors are classified, not printed.
pub async fn run<R, W>(config: &Config, input: &mut R, out: &mut W) -> Outcome
where
    R: BufRead,
    W: Write,
{
    match view_posts(config, input, out).await {
        Ok((identity, posts)) => Outcome::Success { identity, posts },
        Err(err) => {
            warn!(error = %format!("{:#}", err), "Run failed");
            Outcome::from_error(&err)
        }
    }
}

async fn view_posts<R, W>(config: &Config, input: &mut R, out: &mut W) -> Result<(String, usize)>
where
    R: BufRead,
    W: Write,
{
    let credentials = &config.credentials;
    credentials.print_summary(out)?;

    let user_agent = credentials.client_user_agent();
    writeln!(out, "Trying with modified user agent: {}", user_agent)?;

    let client = ApiClient::new(&user_agent, config.endpoints.clone())?;

    writeln!(out, "Attempting authentication...")?;
    let session = client.authenticate(credentials).await?;
    info!(
        user = %session.username,
        token_type = %session.token_type,
        scope = %session.scope,
        expired = session.is_expired(),
        "Access token granted"
    );
    let client = client.with_session(&session);

    // Forces the handshake to be verified before anything else is asked of the user
    let me = client.me().await?;
    writeln!(out, "Authenticated as: {}", me.name)?;
    info!(user = %me.name, "Authenticated");

    let subreddit = prompt_subreddit(input, out)?;
    writeln!(out, "\nFetching {} latest posts from r/{}...\n", POST_LIMIT, subreddit)?;

    let posts = client.fetch_new_posts(&subreddit, POST_LIMIT).await?;
    for post in &posts {
        print_post(post, out)?;
    }

    Ok((me.name, posts.len()))
}

fn prompt_subreddit<R, W>(input: &mut R, out: &mut W) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    write!(out, "Enter the subreddit name (default: {}): ", DEFAULT_SUBREDDIT)?;
    out.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read subreddit name")?;
    Ok(resolve_subreddit(&line).to_string())
}

/// Trimmed subreddit name, or the default when nothing was entered
pub fn resolve_subreddit(line: &str) -> &str {
    match line.trim() {
        "" => DEFAULT_SUBREDDIT,
        name => name,
    }
}

fn print_post<W: Write>(post: &Post, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Title   : {}", post.title)?;
    writeln!(out, "Author  : {}", format_author(post.author_name()))?;
    writeln!(out, "Upvotes : {}", post.score)?;
    writeln!(out, "{}", separator())
}
