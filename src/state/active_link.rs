pub const INDEX_PAGE: &str = "index.html";

/// Last segment of the page path, kept both as written in `pathname` and
/// percent-decoded, so hrefs in either form match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentPage {
    raw: String,
    decoded: String,
}

impl CurrentPage {
    /// `index.html` for a bare directory.
    pub fn from_pathname(pathname: &str) -> Self {
        let last = pathname.rsplit('/').next().unwrap_or_default();
        if last.is_empty() {
            return Self {
                raw: INDEX_PAGE.to_string(),
                decoded: INDEX_PAGE.to_string(),
            };
        }
        let decoded = urlencoding::decode(last)
            .map(|decoded| decoded.into_owned())
            .unwrap_or_else(|_| last.to_string());
        Self {
            raw: last.to_string(),
            decoded,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn decoded(&self) -> &str {
        &self.decoded
    }

    pub fn matches(&self, href: Option<&str>) -> bool {
        match href {
            Some(href) => href == self.raw || href == self.decoded,
            None => false,
        }
    }
}
