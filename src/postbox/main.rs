use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use postbox::config::PostboxConfig;
use postbox::error::Result;
use postbox::gateway::http::HttpGateway;
use postbox::model::{Post, PostDraft};
use postbox::session::{CmdMessage, MessageLevel, Session};
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
mod shell;
use args::{Cli, Commands};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        // Config never needs a session or the network.
        Some(Commands::Config { key, value }) => handle_config(key, value),
        command => {
            let config = PostboxConfig::load(config_dir())?;
            let gateway = HttpGateway::new(&config.api_base_url);
            let (mut session, events) = Session::new(gateway, config.debounce());

            match command {
                Some(Commands::View { id }) => handle_view(&mut session, id).await,
                Some(Commands::Create { title, body }) => {
                    handle_create(&mut session, title, body).await
                }
                Some(Commands::Edit { id, title, body }) => {
                    handle_edit(&mut session, id, title, body).await
                }
                Some(Commands::Search { term }) => handle_search(&mut session, term).await,
                Some(Commands::Shell) => shell::run(session, events).await,
                Some(Commands::List) | None => handle_list(&mut session).await,
                Some(Commands::Config { .. }) => unreachable!("handled above"),
            }
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("POSTBOX_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn config_dir() -> PathBuf {
    let proj_dirs =
        ProjectDirs::from("com", "postbox", "postbox").expect("Could not determine config dir");
    proj_dirs.config_dir().to_path_buf()
}

async fn handle_list(session: &mut Session<HttpGateway>) -> Result<()> {
    let outcome = session.refresh().await?;
    print_posts(&outcome.posts);
    print_messages(&outcome.messages);
    Ok(())
}

async fn handle_view(session: &mut Session<HttpGateway>, id: u64) -> Result<()> {
    session.refresh().await?;
    let post = session.post(id).await?;
    print_full_post(&post);
    Ok(())
}

async fn handle_create(
    session: &mut Session<HttpGateway>,
    title: String,
    body: String,
) -> Result<()> {
    session.refresh().await?;
    let outcome = session.create(PostDraft::new(title, body)).await?;
    print_messages(&outcome.messages);
    println!("Assigned id {}", outcome.post.id);
    Ok(())
}

async fn handle_edit(
    session: &mut Session<HttpGateway>,
    id: u64,
    title: String,
    body: String,
) -> Result<()> {
    session.refresh().await?;
    session.begin_edit(id).await?;
    let outcome = session.submit(PostDraft::new(title, body)).await?;
    print_messages(&outcome.messages);
    Ok(())
}

async fn handle_search(session: &mut Session<HttpGateway>, term: String) -> Result<()> {
    let results = session.search(&term).await?;
    print_posts(&results);
    Ok(())
}

fn handle_config(key: Option<String>, value: Option<String>) -> Result<()> {
    let dir = config_dir();
    let mut config = PostboxConfig::load(&dir)?;

    match (key.as_deref(), value) {
        (None, _) => {
            println!("base-url = {}", config.api_base_url);
            println!("debounce-ms = {}", config.debounce_ms);
        }
        (Some("base-url"), None) => println!("base-url = {}", config.api_base_url),
        (Some("base-url"), Some(v)) => {
            config.set_api_base_url(&v);
            config.save(&dir)?;
            println!("{}", format!("base-url set to {}", config.api_base_url).green());
        }
        (Some("debounce-ms"), None) => println!("debounce-ms = {}", config.debounce_ms),
        (Some("debounce-ms"), Some(v)) => match v.parse() {
            Ok(ms) => {
                config.set_debounce_ms(ms);
                config.save(&dir)?;
                println!("{}", format!("debounce-ms set to {}", ms).green());
            }
            Err(_) => println!("{}", "debounce-ms must be a number".red()),
        },
        (Some(other), _) => println!("Unknown config key: {}", other),
    }

    Ok(())
}

const LINE_WIDTH: usize = 100;
const PREVIEW_LEN: usize = 100;

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(crate) fn print_posts(posts: &[Post]) {
    if posts.is_empty() {
        println!("No posts found.");
        return;
    }

    for post in posts {
        let idx_str = format!("{:>4}. ", post.id);

        let preview: String = post
            .body
            .chars()
            .take(PREVIEW_LEN)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();

        let available = LINE_WIDTH.saturating_sub(idx_str.width() + post.title.width() + 1);
        let preview = truncate_to_width(&preview, available);

        println!("{}{} {}", idx_str.dimmed(), post.title.bold(), preview.dimmed());
    }
}

pub(crate) fn print_full_post(post: &Post) {
    println!("{} {}", format!("#{}", post.id).yellow(), post.title.bold());
    println!("--------------------------------");
    println!("{}", post.body);
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
