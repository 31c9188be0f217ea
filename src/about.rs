use serde::{Deserialize, Serialize};

#[cfg(feature = "ssr")]
use std::sync::LazyLock;

#[cfg(feature = "ssr")]
use gray_matter::{engine::YAML, Matter};
#[cfg(feature = "ssr")]
use pulldown_cmark::{Options, Parser};

#[cfg(feature = "ssr")]
use crate::content::{read_page, ContentError};

#[cfg(feature = "ssr")]
static ABOUT_PAGE: LazyLock<Result<AboutPage, ContentError>> =
    LazyLock::new(|| read_page("about.md").and_then(|text| parse_page("about.md", &text)));

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutMeta {
    pub title: String,
    pub headline: String,
    pub badge_title: String,
    pub badge_subtitle: String,
    pub image: String,
    pub image_alt: String,
    pub resume: String,
    pub resume_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutPage {
    pub meta: AboutMeta,
    /// Rendered HTML of the biography.
    pub content: String,
}

#[cfg(feature = "ssr")]
pub fn get_about() -> Result<AboutPage, ContentError> {
    ABOUT_PAGE.clone()
}

#[cfg(feature = "ssr")]
pub fn parse_page(path: &str, text: &str) -> Result<AboutPage, ContentError> {
    let matter = Matter::<YAML>::new();
    let parsed = matter
        .parse_with_struct::<AboutMeta>(text)
        .ok_or_else(|| ContentError::Parse {
            path: path.to_string(),
            reason: "missing or incomplete front matter".to_string(),
        })?;

    let parser = Parser::new_ext(&parsed.content, Options::all());
    let mut html_output = String::new();
    pulldown_cmark::html::push_html(&mut html_output, parser);

    Ok(AboutPage {
        meta: parsed.data,
        content: html_output,
    })
}
