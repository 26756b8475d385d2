use std::io::{self, Write};

use newsfeed_core::{Article, ResponseData};
use time::format_description::well_known::Rfc3339;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Short human date, e.g. `Wed Jul 21 2021`.
const DISPLAY_DATE: &[BorrowedFormatItem<'_>] =
    format_description!("[weekday repr:short] [month repr:short] [day] [year]");

pub fn render(data: &ResponseData, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(data)?
            } else {
                serde_json::to_string(data)?
            };
            writeln!(out, "{payload}")?;
        }
        OutputFormat::Table => render_table(&mut out, data)?,
    }

    Ok(())
}

fn render_table(out: &mut impl Write, data: &ResponseData) -> Result<(), CliError> {
    writeln!(
        out,
        "{} result(s), showing {}",
        data.total_results,
        data.articles.len()
    )?;

    for article in &data.articles {
        writeln!(out)?;
        render_article(out, article)?;
    }

    Ok(())
}

fn render_article(out: &mut impl Write, article: &Article) -> Result<(), CliError> {
    writeln!(out, "{}", article.title)?;
    if let Some(description) = article.description.as_deref().filter(|d| !d.is_empty()) {
        writeln!(out, "  {description}")?;
    }

    let mut byline = Vec::with_capacity(3);
    if let Some(author) = article.author.as_deref().filter(|a| !a.is_empty()) {
        byline.push(author.to_owned());
    }
    byline.push(article.source.name.clone());
    byline.push(display_date(&article.published_at));
    writeln!(out, "  {}", byline.join(" | "))?;

    writeln!(out, "  {}", article.url)?;
    Ok(())
}

/// Falls back to the raw value when it is not RFC 3339.
fn display_date(published_at: &str) -> String {
    OffsetDateTime::parse(published_at, &Rfc3339)
        .ok()
        .and_then(|value| value.format(DISPLAY_DATE).ok())
        .unwrap_or_else(|| published_at.to_owned())
}

#[cfg(test)]
mod tests {
    use newsfeed_core::{ArticleSource, ResponseStatus};

    use super::*;

    fn article() -> Article {
        Article {
            source: ArticleSource {
                id: None,
                name: String::from("Example News"),
            },
            author: Some(String::from("A. Writer")),
            title: String::from("Rust in space"),
            description: Some(String::from("Satellites rewritten.")),
            url: String::from("https://example.test/rust"),
            url_to_image: None,
            published_at: String::from("2021-07-21T10:00:00Z"),
            content: None,
        }
    }

    #[test]
    fn formats_publish_date_like_a_calendar_label() {
        assert_eq!(display_date("2021-07-21T10:00:00Z"), "Wed Jul 21 2021");
        assert_eq!(display_date("yesterday"), "yesterday");
    }

    #[test]
    fn table_lists_each_article_with_byline() {
        let data = ResponseData {
            status: ResponseStatus::Ok,
            total_results: 42,
            articles: vec![article()],
            code: None,
            message: None,
        };

        let mut buffer = Vec::new();
        render_table(&mut buffer, &data).expect("render");
        let text = String::from_utf8(buffer).expect("utf8");

        assert!(text.starts_with("42 result(s), showing 1\n"));
        assert!(text.contains("Rust in space\n"));
        assert!(text.contains("  Satellites rewritten.\n"));
        assert!(text.contains("  A. Writer | Example News | Wed Jul 21 2021\n"));
        assert!(text.contains("  https://example.test/rust\n"));
    }

    #[test]
    fn byline_skips_missing_author() {
        let mut without_author = article();
        without_author.author = None;

        let mut buffer = Vec::new();
        render_article(&mut buffer, &without_author).expect("render");
        let text = String::from_utf8(buffer).expect("utf8");

        assert!(text.contains("  Example News | Wed Jul 21 2021\n"));
    }
}
