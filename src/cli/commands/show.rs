//! One-shot show command handler

use crate::cli::render::render_screen;
use crate::services::{RefreshOutcome, SessionHandle};

pub async fn cmd_show(
    handle: &SessionHandle,
    book: Option<String>,
    author: Option<String>,
) -> anyhow::Result<()> {
    if let RefreshOutcome::Failed(message) = handle.refresh().await {
        anyhow::bail!("Generation failed: {message}");
    }

    if let Some(book_id) = book {
        handle.go_to_book(book_id).await;
    } else if let Some(author_id) = author {
        handle.go_to_author(author_id).await;
    }

    let session = handle.read().await;
    println!("{}", render_screen(&session.screen()));
    Ok(())
}
