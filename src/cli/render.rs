//! Plain-text rendering of session screens.

use std::fmt::{self, Write};

use crate::models::Book;
use crate::services::navigation::{
    AuthorProfileView, BookDetailView, Dashboard, NotFound, ResolvedView,
};
use crate::services::session::Screen;

/// Formats a count the way the dashboard does: values above 1000 become
/// rounded thousands (`48210` -> `48k`).
#[must_use]
pub fn format_compact_count(count: u64) -> String {
    if count > 1000 {
        format!("{}k", count.saturating_add(500) / 1000)
    } else {
        count.to_string()
    }
}

#[must_use]
pub fn render_screen(screen: &Screen<'_>) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_screen(&mut out, screen);
    out
}

fn write_screen(out: &mut String, screen: &Screen<'_>) -> fmt::Result {
    match screen {
        Screen::Loading => {
            writeln!(out, "Curating Library...")?;
            writeln!(
                out,
                "Crafting original books, trailers, and author profiles."
            )
        }
        Screen::Landing { error } => write_landing(out, *error),
        Screen::View(ResolvedView::Home(dashboard)) => write_dashboard(out, dashboard),
        Screen::View(ResolvedView::BookDetail(detail)) => write_book_detail(out, detail),
        Screen::View(ResolvedView::AuthorProfile(profile)) => write_author_profile(out, profile),
        Screen::View(ResolvedView::NotFound(missing)) => write_not_found(out, missing),
    }
}

fn write_landing(out: &mut String, error: Option<&str>) -> fmt::Result {
    writeln!(out, "BookStream")?;
    writeln!(out, "Discover Your Next Favorite Story")?;
    writeln!(out)?;
    writeln!(
        out,
        "Generate a unique book community with trailers, authors, and discussions."
    )?;
    writeln!(out, "Type `refresh` to enter BookStream.")?;
    if let Some(error) = error {
        writeln!(out)?;
        writeln!(out, "Error: {error}")?;
    }
    Ok(())
}

fn write_book_line(out: &mut String, book: &Book) -> fmt::Result {
    writeln!(
        out,
        "  [{}] {} | {} | ★ {} ({}) | ▶ {} | 💬 {} | {}",
        book.id,
        book.title,
        book.genre,
        book.rating,
        book.review_count,
        format_compact_count(book.trailer.views),
        book.trailer.comments_count,
        book.trailer.duration
    )
}

fn write_dashboard(out: &mut String, dashboard: &Dashboard<'_>) -> fmt::Result {
    if let Some(featured) = dashboard.featured {
        writeln!(out, "FEATURED TRAILER")?;
        writeln!(out, "{}", featured.title)?;
        writeln!(out, "{}", featured.summary)?;
        writeln!(
            out,
            "★ {} ({} reviews) | open with: book {}",
            featured.rating, featured.review_count, featured.id
        )?;
    } else {
        writeln!(out, "No books in this catalog.")?;
    }

    if !dashboard.trending.is_empty() {
        writeln!(out)?;
        writeln!(out, "TRENDING NOW")?;
        for book in dashboard.trending {
            write_book_line(out, book)?;
        }
    }

    if !dashboard.authors.is_empty() {
        writeln!(out)?;
        writeln!(out, "POPULAR AUTHORS")?;
        for author in dashboard.authors {
            writeln!(
                out,
                "  [{}] {} | {} Followers",
                author.id,
                author.name,
                format_compact_count(author.follower_count)
            )?;
        }
    }
    Ok(())
}

fn write_book_detail(out: &mut String, detail: &BookDetailView<'_>) -> fmt::Result {
    let book = detail.book;
    let trailer = &book.trailer;

    writeln!(out, "{}", book.title)?;
    writeln!(
        out,
        "{} | ★ {} ({} reviews)",
        book.genre, book.rating, book.review_count
    )?;
    writeln!(out)?;
    writeln!(out, "{}", book.summary)?;
    writeln!(out)?;
    writeln!(out, "Trailer: {}", trailer.video_url)?;
    writeln!(
        out,
        "  {} | {} views | {} comments | uploaded {}",
        trailer.duration, trailer.views, trailer.comments_count, trailer.upload_date
    )?;
    writeln!(out)?;

    match detail.author {
        Some(author) => writeln!(
            out,
            "Author: {} [{}] | {} Followers | open with: author",
            author.name,
            author.id,
            format_compact_count(author.follower_count)
        )?,
        None => writeln!(out, "Author: unknown ({})", book.author_id)?,
    }

    writeln!(out)?;
    writeln!(out, "Community Discussion ({})", detail.comments.len())?;
    for comment in &detail.comments {
        writeln!(out, "  @{} · {}", comment.username, comment.timestamp)?;
        writeln!(out, "    {}", comment.text)?;
        writeln!(out, "    ♥ {}", comment.likes)?;
    }
    Ok(())
}

fn write_author_profile(out: &mut String, profile: &AuthorProfileView<'_>) -> fmt::Result {
    let author = profile.author;

    writeln!(out, "{}", author.name)?;
    writeln!(
        out,
        "{} Followers | {} trailer views",
        format_compact_count(author.follower_count),
        format_compact_count(author.total_trailer_views)
    )?;
    writeln!(out)?;
    writeln!(out, "{}", author.bio)?;
    writeln!(out)?;
    writeln!(out, "Books ({})", profile.books.len())?;
    for book in &profile.books {
        write_book_line(out, book)?;
    }
    Ok(())
}

fn write_not_found(out: &mut String, missing: &NotFound) -> fmt::Result {
    writeln!(out, "{} not found: {}", missing.kind, missing.id)?;
    writeln!(out, "Type `home` to go back.")
}
