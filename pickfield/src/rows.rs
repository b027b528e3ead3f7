//! Dropdown rows as the presentation layer should draw them.

/// One line of an open dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// A ranked option. The top option is highlighted while a query is typed,
    /// marking what Enter would pick.
    Option { label: String, highlighted: bool },
    /// Commit the typed text as a new value.
    AddNew { label: String },
    /// Nothing matched and adding is disabled.
    NoMatch { label: String },
}

impl Row {
    /// Text of the row.
    pub fn label(&self) -> &str {
        match self {
            Row::Option { label, .. } | Row::AddNew { label } | Row::NoMatch { label } => label,
        }
    }
}

/// Option rows for a ranked list.
pub(crate) fn option_rows(ranked: Vec<String>, query: &str) -> impl Iterator<Item = Row> {
    let highlight_top = !query.is_empty();
    ranked.into_iter().enumerate().map(move |(i, label)| Row::Option {
        label,
        highlighted: highlight_top && i == 0,
    })
}
