//! `sitemap.xml` rendering.
use crate::application::dto::ArticleDto;
use chrono::{DateTime, SecondsFormat, Utc};
use quick_xml::{
    Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};
use reqwest::Url;
use thiserror::Error;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("failed to write sitemap xml: {0}")]
    Write(#[from] std::io::Error),
    #[error("sitemap xml is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Daily,
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub loc: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

const STATIC_PAGES: [(&str, ChangeFrequency, f32); 5] = [
    ("", ChangeFrequency::Daily, 1.0),
    ("/blog", ChangeFrequency::Daily, 0.9),
    ("/about", ChangeFrequency::Monthly, 0.7),
    ("/contact", ChangeFrequency::Monthly, 0.6),
    ("/newsletter", ChangeFrequency::Monthly, 0.5),
];

/// Static pages stamped `now`, then one entry per article.
pub fn sitemap_entries(site_url: &str, now: DateTime<Utc>, articles: &[ArticleDto]) -> Vec<SitemapEntry> {
    let base = site_url.trim_end_matches('/');
    let pages = STATIC_PAGES.iter().map(|(path, change_frequency, priority)| SitemapEntry {
        loc: format!("{base}{path}"),
        last_modified: now,
        change_frequency: *change_frequency,
        priority: *priority,
    });
    let posts = articles.iter().map(|article| SitemapEntry {
        loc: article_loc(base, &article.slug),
        last_modified: article.date,
        change_frequency: ChangeFrequency::Weekly,
        priority: 0.8,
    });
    pages.chain(posts).collect()
}

/// `{base}/blog/{slug}` with the slug percent-encoded as one path segment.
fn article_loc(base: &str, slug: &str) -> String {
    let Ok(mut url) = Url::parse(base) else {
        return format!("{base}/blog/{slug}");
    };
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push("blog").push(slug);
    }
    url.into()
}

pub fn render_sitemap(entries: &[SitemapEntry]) -> Result<String, SitemapError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", SITEMAP_NS));
    writer.write_event(Event::Start(urlset))?;

    for entry in entries {
        writer.write_event(Event::Start(BytesStart::new("url")))?;
        text_element(&mut writer, "loc", &entry.loc)?;
        text_element(
            &mut writer,
            "lastmod",
            &entry.last_modified.to_rfc3339_opts(SecondsFormat::Secs, true),
        )?;
        text_element(&mut writer, "changefreq", entry.change_frequency.as_str())?;
        text_element(&mut writer, "priority", &format!("{:.1}", entry.priority))?;
        writer.write_event(Event::End(BytesEnd::new("url")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("urlset")))?;
    Ok(String::from_utf8(writer.into_inner())?)
}

fn text_element(writer: &mut Writer<Vec<u8>>, name: &str, value: &str) -> Result<(), SitemapError> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(value)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn article(slug: &str) -> ArticleDto {
        ArticleDto {
            id: "1".into(),
            title: "t".into(),
            slug: slug.into(),
            date: Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap(),
            excerpt: String::new(),
            content: String::new(),
            tags: vec![],
            cover_image: None,
            author: "Lilabs Team".into(),
            reading_time: 1,
        }
    }

    #[test]
    fn static_pages_come_first() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let entries = sitemap_entries("https://blog.example/", now, &[article("hello")]);
        assert_eq!(entries.len(), 6);
        assert_eq!(entries[0].loc, "https://blog.example");
        assert_eq!(entries[0].change_frequency, ChangeFrequency::Daily);
        assert_eq!(entries[4].loc, "https://blog.example/newsletter");
        assert_eq!(entries[5].loc, "https://blog.example/blog/hello");
        assert_eq!(entries[5].last_modified, article("hello").date);
        assert_eq!(entries[5].change_frequency, ChangeFrequency::Weekly);
    }

    #[test]
    fn renders_urlset_and_escapes() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let entries = sitemap_entries("https://blog.example", now, &[article("a&b")]);
        let xml = render_sitemap(&entries).unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">"));
        assert!(xml.contains("<loc>https://blog.example/blog/a&amp;b</loc>"));
        assert!(xml.contains("<lastmod>2024-06-01T08:00:00Z</lastmod>"));
        assert!(xml.contains("<priority>1.0</priority>"));
        assert!(xml.contains("<priority>0.8</priority>"));
    }

    #[test]
    fn slugs_are_percent_encoded_in_loc() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let entries = sitemap_entries(
            "https://blog.example/",
            now,
            &[article("café au lait"), article("a/b?c#d")],
        );
        assert_eq!(entries[5].loc, "https://blog.example/blog/caf%C3%A9%20au%20lait");
        assert_eq!(entries[6].loc, "https://blog.example/blog/a%2Fb%3Fc%23d");

        let xml = render_sitemap(&entries).unwrap();
        assert!(xml.contains("<loc>https://blog.example/blog/caf%C3%A9%20au%20lait</loc>"));
    }

    #[test]
    fn site_under_a_sub_path_keeps_it() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let entries = sitemap_entries("https://example.org/lab", now, &[article("hello")]);
        assert_eq!(entries[5].loc, "https://example.org/lab/blog/hello");
    }
}
