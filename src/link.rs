//! Project link classification.
//!
//! A record link is either an absolute web URL or a path to a static document
//! relative to the document root. Nothing here fetches or checks
//! reachability; opening the resolved URL is left to the host.

use std::path::Path;

use url::Url;

/// Where a project link points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// Absolute http(s) URL
    External(Url),
    /// Percent-encoded path relative to the document root
    Document(String),
}

/// Error while classifying or resolving a link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkError {
    pub raw: String,
    pub message: String,
}

impl LinkError {
    fn new(raw: &str, message: impl Into<String>) -> Self {
        Self {
            raw: raw.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for LinkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid link '{}': {}", self.raw, self.message)
    }
}

impl std::error::Error for LinkError {}

impl LinkTarget {
    pub fn parse(raw: &str) -> Result<Self, LinkError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(LinkError::new(raw, "empty link"));
        }
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            let url = Url::parse(trimmed).map_err(|e| LinkError::new(raw, e.to_string()))?;
            return Ok(LinkTarget::External(url));
        }
        if trimmed.contains("://") {
            return Err(LinkError::new(raw, "unsupported scheme"));
        }
        Ok(LinkTarget::Document(trimmed.to_string()))
    }

    pub fn is_external(&self) -> bool {
        matches!(self, LinkTarget::External(_))
    }

    /// Resolve to an openable URL. Documents become `file://` URLs under `root`.
    pub fn resolve(&self, root: &Path) -> Result<Url, LinkError> {
        match self {
            LinkTarget::External(url) => Ok(url.clone()),
            LinkTarget::Document(path) => {
                let root = if root.is_absolute() {
                    root.to_path_buf()
                } else {
                    std::env::current_dir()
                        .map_err(|e| LinkError::new(path, format!("no working directory: {}", e)))?
                        .join(root)
                };
                let base = Url::from_directory_path(&root).map_err(|_| {
                    LinkError::new(path, format!("bad document root {}", root.display()))
                })?;
                base.join(path).map_err(|e| LinkError::new(path, e.to_string()))
            }
        }
    }

    /// Short human label: `host/path` for web links, decoded file or folder
    /// name for documents.
    pub fn display_label(&self) -> String {
        match self {
            LinkTarget::External(url) => {
                let host = url.host_str().unwrap_or_default();
                format!("{}{}", host, url.path().trim_end_matches('/'))
            }
            LinkTarget::Document(path) => {
                let last = path
                    .trim_end_matches('/')
                    .rsplit('/')
                    .next()
                    .unwrap_or(path.as_str());
                decode_segment(last).unwrap_or_else(|| last.to_string())
            }
        }
    }
}

/// Percent-decode one path segment through a throwaway `file://` URL.
fn decode_segment(segment: &str) -> Option<String> {
    let url = Url::parse("file:///").ok()?.join(segment).ok()?;
    let path = url.to_file_path().ok()?;
    path.file_name().map(|n| n.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_external() {
        let t =
            LinkTarget::parse("https://github.com/Debadri1999/computer-price-analysis").unwrap();
        assert!(t.is_external());
        assert_eq!(t.display_label(), "github.com/Debadri1999/computer-price-analysis");
    }

    #[test]
    fn parse_document() {
        let t = LinkTarget::parse("Chatbot_Project/Doubledo_Gaming_AI_Chatbot_Report.pdf").unwrap();
        assert_eq!(
            t,
            LinkTarget::Document(
                "Chatbot_Project/Doubledo_Gaming_AI_Chatbot_Report.pdf".to_string()
            )
        );
        assert_eq!(t.display_label(), "Doubledo_Gaming_AI_Chatbot_Report.pdf");
    }

    #[test]
    fn parse_rejects_empty_and_foreign_schemes() {
        assert!(LinkTarget::parse("   ").is_err());
        let err = LinkTarget::parse("ftp://example.com/file").unwrap_err();
        assert_eq!(err.message, "unsupported scheme");
    }

    #[test]
    fn folder_link_label() {
        let t = LinkTarget::parse("Gaming_Laptop_Webscraping_Market_Analysis/").unwrap();
        assert_eq!(t.display_label(), "Gaming_Laptop_Webscraping_Market_Analysis");
    }

    #[cfg(unix)]
    #[test]
    fn document_label_is_decoded() {
        let t = LinkTarget::parse(
            "Accrual_Anamoly_Final_Project/Final%20Project/Accrual_Anomaly_Analysis_Report%20final.pdf",
        )
        .unwrap();
        assert_eq!(t.display_label(), "Accrual_Anomaly_Analysis_Report final.pdf");
    }

    #[cfg(unix)]
    #[test]
    fn document_resolves_under_root() {
        let t = LinkTarget::parse("Final%20Project/report.pdf").unwrap();
        let url = t.resolve(Path::new("/srv/site")).unwrap();
        assert_eq!(url.as_str(), "file:///srv/site/Final%20Project/report.pdf");
    }

    #[test]
    fn external_resolves_to_itself() {
        let t = LinkTarget::parse("https://example.com/a").unwrap();
        let url = t.resolve(Path::new("ignored")).unwrap();
        assert_eq!(url.as_str(), "https://example.com/a");
    }
}
