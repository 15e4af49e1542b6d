use serde::{Deserialize, Serialize};

/// Access level requested from the host. The widget only ever reads.
pub const REQUIRED_ACCESS: &str = "read table";

/// One column the widget expects the host to supply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: String,
    pub optional: bool,
    pub description: String,
}

impl ColumnSpec {
    fn new(name: &str, column_type: &str, optional: bool, description: &str) -> Self {
        Self {
            name: name.to_string(),
            column_type: column_type.to_string(),
            optional,
            description: description.to_string(),
        }
    }
}

/// Payload of the host ready-handshake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadyRequest {
    pub required_access: String,
    pub columns: Vec<ColumnSpec>,
}

impl ReadyRequest {
    /// Column declaration for this widget. Menu columns are only declared
    /// when menu tiles are enabled.
    pub fn for_widget(menu_support: bool) -> Self {
        let mut columns = vec![
            ColumnSpec::new("Label", "Text", false, "Tile caption"),
            ColumnSpec::new("Link", "Text", false, "Page hash or URL opened on click"),
            ColumnSpec::new("X", "Numeric", false, "Start column (0-based)"),
            ColumnSpec::new("Y", "Numeric", false, "Start row (0-based)"),
            ColumnSpec::new("W", "Numeric", false, "Width in columns"),
            ColumnSpec::new("H", "Numeric", false, "Height in rows"),
            ColumnSpec::new("Color", "Text", true, "CSS color"),
        ];
        if menu_support {
            columns.push(ColumnSpec::new("Type", "Choice", true, "\"Menu\" for a page list"));
            columns.push(ColumnSpec::new("Pages", "RefList", true, "Pages listed by a menu tile"));
        }
        Self {
            required_access: REQUIRED_ACCESS.to_string(),
            columns,
        }
    }
}
