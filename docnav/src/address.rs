//! Address resolution and comparison against the current page.

use url::Url;

/// Resolves navigation link targets against the path to the site root.
#[derive(Debug, Clone)]
pub struct Resolver {
    base: Base,
}

#[derive(Debug, Clone)]
enum Base {
    /// Absolute base URL; hrefs resolve the way a browser resolves them.
    Url(Url),
    /// Plain prefix; hrefs are joined lexically, the way site templates
    /// emit relative roots.
    Prefix(String),
}

impl Resolver {
    pub fn new(path_to_root: impl Into<String>) -> Self {
        let prefix = path_to_root.into();
        let base = match Url::parse(&prefix) {
            Ok(url) => Base::Url(url),
            Err(_) => Base::Prefix(prefix),
        };
        Self { base }
    }

    /// Resolve a link target into the address used for comparison and
    /// display.
    pub fn resolve(&self, href: &str) -> String {
        match &self.base {
            Base::Url(url) => url
                .join(href)
                .map(String::from)
                .unwrap_or_else(|_| format!("{url}{href}")),
            Base::Prefix(prefix) => format!("{prefix}{href}"),
        }
    }
}

/// The address with any `#fragment` component removed.
pub fn strip_fragment(address: &str) -> &str {
    address.split_once('#').map_or(address, |(page, _)| page)
}

/// Fragment-insensitive address equality: two addresses that differ only by
/// a fragment refer to the same page.
pub fn same_page(a: &str, b: &str) -> bool {
    strip_fragment(a) == strip_fragment(b)
}
