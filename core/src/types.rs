//! Navigation table row types.
//!
//! Rows are immutable value objects: they are built once by the parser, compared
//! by field equality and read through accessors. They serialize with [`serde`]
//! so callers can persist or diff them. Deserialization goes through the same
//! rules as the constructors: an empty link becomes `None`, and an empty title
//! or path is rejected.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// The `[title](link)` cell of a navigation table row.
///
/// A navlink without a link target is a grouping entry: it titles a section of
/// the hierarchy without pointing at a page.
///
/// # Examples
///
/// ```
/// use navtable_core::Navlink;
///
/// let page = Navlink::new("Page 1", Some("group-1/page-1"));
/// assert_eq!(page.title(), "Page 1");
/// assert_eq!(page.link(), Some("group-1/page-1"));
///
/// // An empty link is the same as no link.
/// assert_eq!(Navlink::new("Group 1", Some("")), Navlink::group("Group 1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "NavlinkFields")]
pub struct Navlink {
    title: String,
    link: Option<String>,
}

#[derive(Deserialize)]
struct NavlinkFields {
    title: String,
    #[serde(default)]
    link: Option<String>,
}

impl TryFrom<NavlinkFields> for Navlink {
    type Error = ModelError;

    fn try_from(fields: NavlinkFields) -> Result<Self, Self::Error> {
        if fields.title.is_empty() {
            return Err(ModelError::EmptyTitle);
        }
        Ok(Self::new(fields.title, fields.link.as_deref()))
    }
}

impl Navlink {
    /// Creates a navlink. An empty `link` is stored as `None`.
    pub fn new(title: impl Into<String>, link: Option<&str>) -> Self {
        Self {
            title: title.into(),
            link: link.filter(|link| !link.is_empty()).map(String::from),
        }
    }

    /// Creates a navlink without a link target.
    pub fn group(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: None,
        }
    }

    /// Display title of the entry.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Link target, `None` for grouping entries.
    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }
}

/// One data row of a navigation table.
///
/// # Examples
///
/// ```
/// use navtable_core::{Navlink, TableRow};
///
/// let row = TableRow::new(2, "page-1", Navlink::new("Page 1", Some("group-1/page-1")));
/// assert_eq!(row.level(), 2);
/// assert_eq!(row.path(), "page-1");
/// assert!(!row.is_group());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TableRowFields")]
pub struct TableRow {
    level: u64,
    path: String,
    navlink: Navlink,
}

#[derive(Deserialize)]
struct TableRowFields {
    level: u64,
    path: String,
    navlink: Navlink,
}

impl TryFrom<TableRowFields> for TableRow {
    type Error = ModelError;

    fn try_from(fields: TableRowFields) -> Result<Self, Self::Error> {
        if fields.path.is_empty() {
            return Err(ModelError::EmptyPath);
        }
        Ok(Self::new(fields.level, fields.path, fields.navlink))
    }
}

impl TableRow {
    /// Creates a row.
    pub fn new(level: u64, path: impl Into<String>, navlink: Navlink) -> Self {
        Self {
            level,
            path: path.into(),
            navlink,
        }
    }

    /// Hierarchy depth, 1 for root entries.
    pub fn level(&self) -> u64 {
        self.level
    }

    /// Path identifier of the entry.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The `[title](link)` cell.
    pub fn navlink(&self) -> &Navlink {
        &self.navlink
    }

    /// Returns `true` when the row is a grouping entry (its navlink has no
    /// link target).
    pub fn is_group(&self) -> bool {
        self.navlink.link.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navlink_empty_link_is_none() {
        let navlink = Navlink::new("Group", Some(""));
        assert_eq!(navlink.link(), None);
        assert_eq!(navlink, Navlink::group("Group"));
    }

    #[test]
    fn test_navlink_keeps_whitespace_link() {
        // Only the exact empty string collapses to `None`.
        let navlink = Navlink::new("Title", Some(" "));
        assert_eq!(navlink.link(), Some(" "));
    }

    #[test]
    fn test_table_row_is_group() {
        let group = TableRow::new(1, "group-1", Navlink::group("Group 1"));
        let page = TableRow::new(2, "page-1", Navlink::new("Page 1", Some("group-1/page-1")));

        assert!(group.is_group());
        assert!(!page.is_group());
    }

    #[test]
    fn test_table_row_equality_is_field_equality() {
        let a = TableRow::new(1, "a", Navlink::new("A", Some("t/a")));
        let b = TableRow::new(1, "a", Navlink::new("A", Some("t/a")));
        let c = TableRow::new(2, "a", Navlink::new("A", Some("t/a")));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_table_row_json_shape() {
        let row = TableRow::new(1, "group-1", Navlink::group("Group 1"));
        let json = serde_json::to_value(&row).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "level": 1,
                "path": "group-1",
                "navlink": { "title": "Group 1", "link": null }
            })
        );

        let back: TableRow = serde_json::from_value(json).unwrap();
        assert_eq!(back, row);
    }

    #[test]
    fn test_navlink_json_empty_link_loads_as_group() {
        let navlink: Navlink = serde_json::from_str(r#"{"title":"Group 1","link":""}"#).unwrap();
        assert_eq!(navlink, Navlink::group("Group 1"));
        assert_eq!(navlink.link(), None);

        let navlink: Navlink = serde_json::from_str(r#"{"title":"Group 1"}"#).unwrap();
        assert_eq!(navlink, Navlink::group("Group 1"));
    }

    #[test]
    fn test_table_row_json_empty_link_is_group() {
        let row: TableRow = serde_json::from_str(
            r#"{"level":1,"path":"group-1","navlink":{"title":"Group 1","link":""}}"#,
        )
        .unwrap();
        assert!(row.is_group());
        assert_eq!(row, TableRow::new(1, "group-1", Navlink::group("Group 1")));
    }

    #[test]
    fn test_navlink_json_rejects_empty_title() {
        let err = serde_json::from_str::<Navlink>(r#"{"title":"","link":""}"#).unwrap_err();
        assert!(err.to_string().contains("navlink title cannot be empty"));
    }

    #[test]
    fn test_table_row_json_rejects_empty_path() {
        let err = serde_json::from_str::<TableRow>(
            r#"{"level":1,"path":"","navlink":{"title":"A","link":null}}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("table row path cannot be empty"));
    }

    #[test]
    fn test_navlink_json_round_trip_keeps_link() {
        let navlink = Navlink::new("Page 1", Some("group-1/page-1"));
        let json = serde_json::to_string(&navlink).unwrap();
        assert_eq!(serde_json::from_str::<Navlink>(&json).unwrap(), navlink);
    }
}
