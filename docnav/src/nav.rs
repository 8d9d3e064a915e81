//! The navigation forest: one `NavItem` per entry, in display order.

use serde::Deserialize;

use crate::error::NavDataError;

/// One entry in the navigation tree: a display title, an optional link
/// target, and an ordered list of child entries. Grouping entries carry no
/// link of their own.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "NavItemRepr")]
pub struct NavItem {
    pub title: String,
    pub href: Option<String>,
    pub children: Vec<NavItem>,
}

impl NavItem {
    pub fn page(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: Some(href.into()),
            children: Vec::new(),
        }
    }

    pub fn group(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: None,
            children: Vec::new(),
        }
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn child(mut self, child: NavItem) -> Self {
        self.children.push(child);
        self
    }

    /// The link target, if this entry is addressable. An empty href means
    /// "no page of its own" and yields None.
    pub fn link(&self) -> Option<&str> {
        self.href.as_deref().filter(|href| !href.is_empty())
    }
}

/// Parse a JSON navigation forest.
///
/// Accepts the canonical shape plus the legacy serializations older site
/// templates emitted; everything is normalized into [`NavItem`].
pub fn load_nav(json: &str) -> Result<Vec<NavItem>, NavDataError> {
    let forest: Vec<NavItem> = serde_json::from_str(json)?;
    Ok(forest)
}

/// The shapes navigation data arrives in. Variants beyond the canonical one
/// are legacy serializations, equivalent in meaning and normalized away at
/// this boundary:
///
/// - canonical: `{"title": …, "href": …, "children": […]}`
/// - grouped:   `{"title": …, "href": …, "pages": […], "sections": […]}`
///   (pages come before sections in display order)
/// - pair:      `[["title", "href"], [child, …]]`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NavItemRepr {
    Entry(EntryRepr),
    Pair(PairRepr),
}

#[derive(Debug, Deserialize)]
struct EntryRepr {
    #[serde(default)]
    title: String,
    #[serde(default)]
    href: Option<String>,
    #[serde(default)]
    children: Vec<NavItemRepr>,
    #[serde(default)]
    pages: Vec<NavItemRepr>,
    #[serde(default)]
    sections: Vec<NavItemRepr>,
}

#[derive(Debug, Deserialize)]
struct PairRepr((String, String), Vec<NavItemRepr>);

impl From<NavItemRepr> for NavItem {
    fn from(repr: NavItemRepr) -> Self {
        match repr {
            NavItemRepr::Entry(entry) => {
                let mut children: Vec<NavItem> =
                    entry.children.into_iter().map(NavItem::from).collect();
                children.extend(entry.pages.into_iter().map(NavItem::from));
                children.extend(entry.sections.into_iter().map(NavItem::from));

                NavItem {
                    title: entry.title,
                    href: normalize_href(entry.href),
                    children,
                }
            }
            NavItemRepr::Pair(PairRepr((title, href), children)) => NavItem {
                title,
                href: normalize_href(Some(href)),
                children: children.into_iter().map(NavItem::from).collect(),
            },
        }
    }
}

fn normalize_href(href: Option<String>) -> Option<String> {
    href.filter(|href| !href.is_empty())
}
