use crate::types::{FeedItem, RawRelease, RepositoryTarget};
use crate::utils::first_present;
use pulldown_cmark::{html, Options, Parser};

/// Render a markdown release body to HTML. An empty body yields an empty
/// string, not an error.
pub fn render_markdown(body: &str) -> String {
    if body.trim().is_empty() {
        return String::new();
    }

    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(body, options);
    let mut rendered = String::with_capacity(body.len() * 2);
    html::push_html(&mut rendered, parser);
    rendered
}

/// Map one qualifying release into a canonical feed item.
///
/// Fallbacks: the permalink URL is the preferred stable id, with
/// `slug@tag` synthesized when the API omitted it; the publication time
/// falls back to the creation time; the display name falls back to
/// `"<slug> <tag>"`.
pub fn normalize(release: &RawRelease, target: &RepositoryTarget) -> FeedItem {
    let slug = target.slug();
    // The classifier guarantees a non-empty tag before we get here.
    let tag = release.tag_name.clone().unwrap_or_default();

    let html_url = release.html_url.clone().unwrap_or_else(|| {
        format!("https://github.com/{}/releases/tag/{}", slug, tag)
    });

    let id = release
        .html_url
        .clone()
        .unwrap_or_else(|| format!("{}@{}", slug, tag));

    let published_at = first_present([release.published_at, release.created_at]);

    let name = release
        .name
        .clone()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| format!("{} {}", slug, tag));

    let description_html = render_markdown(release.body.as_deref().unwrap_or(""));

    FeedItem {
        repo_slug: slug,
        repo_url: target.repo_url(),
        html_url,
        tag_name: tag,
        published_at,
        description_html,
        id,
        name,
    }
}
