use crate::types::{ChannelConfig, FeedDocument, FeedItem};
use crate::utils::{text, xml};
use chrono::{DateTime, Utc};
use tracing::debug;

/// Hard cap on the plain-text summary derived from the release body.
const SUMMARY_MAX_CHARS: usize = 300;

/// Shown when a release has no body to summarize.
const EMPTY_BODY_FALLBACK: &str = "No release notes provided.";

/// Items fetched for one target, still in API response order
/// (newest-first), together with that target's per-repository bound.
#[derive(Debug, Clone)]
pub struct TargetBatch {
    pub cap: usize,
    pub items: Vec<FeedItem>,
}

/// Merge per-target batches into one ordered feed document.
///
/// Each batch is truncated to its own cap before merging; the bound is
/// per repository, not global. The merged list is then sorted descending
/// by publication time. Items with no timestamp sort as epoch zero, i.e.
/// after everything dated. The sort is stable, so ties keep their
/// original relative order.
pub fn assemble(
    channel: &ChannelConfig,
    batches: Vec<TargetBatch>,
    built_at: DateTime<Utc>,
) -> FeedDocument {
    let mut items: Vec<FeedItem> = Vec::new();
    for mut batch in batches {
        batch.items.truncate(batch.cap);
        items.extend(batch.items);
    }

    items.sort_by(|a, b| sort_key(b).cmp(&sort_key(a)));
    debug!("Assembled feed with {} items", items.len());

    FeedDocument {
        channel: channel.clone(),
        items,
        built_at,
    }
}

fn sort_key(item: &FeedItem) -> DateTime<Utc> {
    item.published_at.unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// Serialize the document as RSS 2.0.
pub fn to_rss_xml(doc: &FeedDocument) -> String {
    let channel = &doc.channel;
    let mut out = String::new();

    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str(concat!(
        "<rss version=\"2.0\"",
        " xmlns:content=\"http://purl.org/rss/1.0/modules/content/\"",
        " xmlns:atom=\"http://www.w3.org/2005/Atom\">\n"
    ));
    out.push_str("  <channel>\n");
    push_element(&mut out, 4, "title", &xml::escape(&channel.title));
    push_element(&mut out, 4, "link", &xml::escape(&channel.link));
    push_element(&mut out, 4, "description", &xml::escape(&channel.description));
    push_element(&mut out, 4, "language", &xml::escape(&channel.language));
    push_element(&mut out, 4, "generator", &xml::escape(&channel.generator));
    push_element(&mut out, 4, "ttl", &channel.ttl_minutes.to_string());
    push_element(&mut out, 4, "lastBuildDate", &doc.built_at.to_rfc2822());
    out.push_str(&format!(
        "    <atom:link href=\"{}\" rel=\"self\" type=\"application/rss+xml\"/>\n",
        xml::escape(&self_feed_url(&channel.link))
    ));

    for item in &doc.items {
        push_item(&mut out, item);
    }

    out.push_str("  </channel>\n");
    out.push_str("</rss>\n");
    out
}

/// Self-referencing feed URL: channel link plus `feed.xml`, with exactly
/// one path separator between them.
pub fn self_feed_url(site_link: &str) -> String {
    format!("{}/feed.xml", site_link.trim_end_matches('/'))
}

fn push_item(out: &mut String, item: &FeedItem) {
    let (owner, name) = item
        .repo_slug
        .split_once('/')
        .unwrap_or((item.repo_slug.as_str(), ""));

    // Permalink guids must be the release's own URL; a synthesized
    // slug@tag id is stable but not dereferenceable.
    let is_permalink = item.id == item.html_url;

    let summary = summarize(&item.description_html);
    let content = if item.description_html.trim().is_empty() {
        format!("<p>{}</p>", EMPTY_BODY_FALLBACK)
    } else {
        item.description_html.clone()
    };

    let pub_date = item
        .published_at
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
        .to_rfc2822();

    out.push_str("    <item>\n");
    push_element(out, 6, "title", &xml::escape(&item.name));
    push_element(out, 6, "link", &xml::escape(&item.html_url));
    out.push_str(&format!(
        "      <guid isPermaLink=\"{}\">{}</guid>\n",
        is_permalink,
        xml::escape(&item.id)
    ));
    push_element(out, 6, "pubDate", &pub_date);
    push_element(out, 6, "description", &xml::escape(&summary));
    out.push_str(&format!(
        "      <content:encoded>{}</content:encoded>\n",
        xml::cdata(&content)
    ));
    push_element(out, 6, "category", &xml::escape(owner));
    push_element(out, 6, "category", &xml::escape(name));
    out.push_str(&format!(
        "      <source url=\"{}\">{}</source>\n",
        xml::escape(&item.repo_url),
        xml::escape(&item.repo_slug)
    ));
    out.push_str("    </item>\n");
}

/// Short plain-text summary of the rendered body: tags stripped, entities
/// decoded, whitespace collapsed, hard length cap. Whitespace-only bodies
/// get a fixed fallback so the description element is never empty.
fn summarize(description_html: &str) -> String {
    let stripped = text::decode_entities(&text::strip_html(description_html));
    if stripped.is_empty() {
        return EMPTY_BODY_FALLBACK.to_string();
    }
    text::truncate(&stripped, SUMMARY_MAX_CHARS)
}

fn push_element(out: &mut String, indent: usize, tag: &str, content: &str) {
    out.push_str(&format!(
        "{:indent$}<{tag}>{content}</{tag}>\n",
        "",
        indent = indent,
        tag = tag,
        content = content
    ));
}
