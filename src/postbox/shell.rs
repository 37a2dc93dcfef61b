//! Interactive mode: one long-lived session, so local drafts, the pending
//! edit and debounced search are visible across commands.

use colored::*;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::UnboundedReceiver;

use postbox::error::Result;
use postbox::gateway::PostBackend;
use postbox::model::PostDraft;
use postbox::session::{EditState, Session, SessionEvent};

use crate::{print_full_post, print_messages, print_posts};

pub async fn run<B: PostBackend + 'static>(
    mut session: Session<B>,
    mut events: UnboundedReceiver<SessionEvent>,
) -> Result<()> {
    let outcome = session.refresh().await?;
    print_posts(&outcome.posts);
    print_messages(&outcome.messages);
    println!("{}", "Type 'help' for commands, 'quit' to leave.".dimmed());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        prompt(&session);
        tokio::select! {
            line = lines.next_line() => {
                match line? {
                    None => break,
                    Some(line) => {
                        if !dispatch(&mut session, line.trim()).await {
                            break;
                        }
                    }
                }
            }
            event = events.recv() => {
                if let Some(event) = event {
                    print_event(&event);
                }
            }
        }
    }

    Ok(())
}

fn prompt<B: PostBackend + 'static>(session: &Session<B>) {
    let text = match session.edit_state() {
        EditState::Idle => "postbox> ".to_string(),
        EditState::Editing(id) => format!("editing #{}> ", id),
    };
    print!("{}", text.cyan());
    let _ = std::io::stdout().flush();
}

/// Runs one command line. Returns false when the shell should exit.
async fn dispatch<B: PostBackend + 'static>(session: &mut Session<B>, line: &str) -> bool {
    let (command, rest) = match line.split_once(' ') {
        Some((c, r)) => (c, r.trim()),
        None => (line, ""),
    };

    let result = match command {
        "" => Ok(()),
        "quit" | "exit" | "q" => return false,
        "help" | "h" => {
            print_help();
            Ok(())
        }
        "list" | "ls" => {
            print_posts(&session.visible_posts().await);
            Ok(())
        }
        "refresh" | "r" => run_refresh(session).await,
        "view" | "v" => run_view(session, rest).await,
        "edit" | "e" => run_edit(session, rest).await,
        "cancel" => {
            session.cancel_edit();
            Ok(())
        }
        "submit" | "s" => run_submit(session, rest).await,
        "search" | "/" => {
            session.search_debounced(rest.to_string());
            Ok(())
        }
        other => {
            println!("Unknown command: {}. Type 'help'.", other);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}", format!("Error: {}", e).red());
    }
    true
}

async fn run_refresh<B: PostBackend + 'static>(session: &mut Session<B>) -> Result<()> {
    let outcome = session.refresh().await?;
    print_posts(&outcome.posts);
    print_messages(&outcome.messages);
    Ok(())
}

async fn run_view<B: PostBackend + 'static>(session: &mut Session<B>, rest: &str) -> Result<()> {
    let Some(id) = parse_id(rest) else {
        println!("Usage: view <id>");
        return Ok(());
    };
    let post = session.post(id).await?;
    print_full_post(&post);
    Ok(())
}

async fn run_edit<B: PostBackend + 'static>(session: &mut Session<B>, rest: &str) -> Result<()> {
    let Some(id) = parse_id(rest) else {
        println!("Usage: edit <id>");
        return Ok(());
    };
    let post = session.begin_edit(id).await?;
    println!("Editing {} {}", format!("#{}", post.id).yellow(), post.title.bold());
    println!("{}", "Apply with: submit <title> | <body>".dimmed());
    Ok(())
}

async fn run_submit<B: PostBackend + 'static>(session: &mut Session<B>, rest: &str) -> Result<()> {
    let Some((title, body)) = rest.split_once('|') else {
        println!("Usage: submit <title> | <body>");
        return Ok(());
    };
    let outcome = session
        .submit(PostDraft::new(title.trim(), body.trim()))
        .await?;
    print_messages(&outcome.messages);
    Ok(())
}

fn parse_id(s: &str) -> Option<u64> {
    s.trim().parse().ok()
}

fn print_event(event: &SessionEvent) {
    match event {
        SessionEvent::SearchCompleted { query, posts } => {
            if query.is_empty() {
                println!("\nAll posts:");
            } else {
                println!("\nResults for '{}':", query);
            }
            print_posts(posts);
        }
        SessionEvent::SearchFailed { query, error } => {
            eprintln!("{}", format!("Search '{}' failed: {}", query, error).red());
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  list              show the current visible posts");
    println!("  refresh           re-fetch from the server (drops local posts)");
    println!("  view <id>         show a post in full");
    println!("  submit <t> | <b>  create a post, or apply the pending edit");
    println!("  edit <id>         select a post to edit");
    println!("  cancel            drop the pending edit");
    println!("  search <term>     live search, title or body");
    println!("  quit              leave");
}
