use rust_embed::Embed;
use thiserror::Error;

/// Static catalogs rendered on both sides of hydration.
#[derive(Embed)]
#[folder = "content/catalog"]
pub struct CatalogAssets;

/// Long-form pages, only parsed on the server.
#[derive(Embed)]
#[folder = "content/pages"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct PageAssets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("content not found: {0}")]
    NotFound(String),
    #[error("couldn't parse {path}: {reason}")]
    Parse { path: String, reason: String },
    #[error("invalid content: {0}")]
    Invalid(String),
    #[error("unknown project category: {0}")]
    UnknownCategory(String),
}

pub fn read_catalog(name: &str) -> Result<String, ContentError> {
    let file = CatalogAssets::get(name).ok_or_else(|| ContentError::NotFound(name.to_string()))?;
    decode(name, file.data.into_owned())
}

#[cfg(feature = "ssr")]
pub fn read_page(name: &str) -> Result<String, ContentError> {
    let file = PageAssets::get(name).ok_or_else(|| ContentError::NotFound(name.to_string()))?;
    decode(name, file.data.into_owned())
}

fn decode(name: &str, bytes: Vec<u8>) -> Result<String, ContentError> {
    String::from_utf8(bytes).map_err(|e| ContentError::Parse {
        path: name.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_files_are_embedded() {
        for name in ["projects.json", "tech.json", "social.json"] {
            let text = read_catalog(name).expect("catalog file should be embedded");
            assert!(text.trim_start().starts_with('['), "{name} should be a JSON array");
        }
    }

    #[test]
    fn test_missing_catalog_file() {
        assert_eq!(
            read_catalog("nope.json"),
            Err(ContentError::NotFound("nope.json".to_string()))
        );
    }

    #[test]
    fn test_invalid_utf8_is_a_parse_error() {
        let err = decode("bad.json", vec![0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, ContentError::Parse { ref path, .. } if path == "bad.json"));
    }
}
