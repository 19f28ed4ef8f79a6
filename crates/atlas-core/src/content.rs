//! Home page and navigation content: sliders, menus, and blog posts.

use serde::{Deserialize, Serialize};

/// Slider group shown on wide screens.
pub const DESKTOP_SLIDER_GROUP: &str = "header";
/// Slider group shown on phones.
pub const MOBILE_SLIDER_GROUP: &str = "header-mobile";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub group: String,
    /// Inactive slides are hidden. The API sends `0`/`1`.
    #[serde(default, deserialize_with = "bool_from_int_or_bool")]
    pub status: bool,
}

impl Slide {
    #[must_use]
    pub fn is_shown_in(&self, group: &str) -> bool {
        self.status && self.group == group
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub children: Vec<MenuItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub views_count: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostCategory {
    pub id: i64,
    pub name: String,
}

/// Where a navigation menu is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuPlacement {
    Header,
    Footer,
}

impl MenuPlacement {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            MenuPlacement::Header => "header",
            MenuPlacement::Footer => "footer",
        }
    }
}

impl std::fmt::Display for MenuPlacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Blog content shown on the home page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostsFeed {
    pub posts: Vec<Post>,
    pub most_viewed: Vec<Post>,
    pub categories: Vec<PostCategory>,
}

fn bool_from_int_or_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Bool(b) => b,
        serde_json::Value::Number(n) => n.as_i64().is_some_and(|n| n != 0),
        serde_json::Value::String(s) => s == "1" || s.eq_ignore_ascii_case("true"),
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_status_accepts_integers() {
        let slide: Slide =
            serde_json::from_str(r#"{"id": 1, "group": "header", "status": 1}"#).unwrap();
        assert!(slide.status);
        assert!(slide.is_shown_in(DESKTOP_SLIDER_GROUP));
        assert!(!slide.is_shown_in(MOBILE_SLIDER_GROUP));
    }

    #[test]
    fn slide_without_status_is_hidden() {
        let slide: Slide = serde_json::from_str(r#"{"group": "header-mobile"}"#).unwrap();
        assert!(!slide.is_shown_in(MOBILE_SLIDER_GROUP));
    }

    #[test]
    fn post_category_requires_name() {
        assert!(serde_json::from_str::<PostCategory>(r#"{"id": 3}"#).is_err());
    }
}
