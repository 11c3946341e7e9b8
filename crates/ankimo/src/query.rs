//! Query builder for Anki search syntax.
//!
//! Values passed to the builder are escaped, so a deck name can never
//! inject search operators into the query.
//!
//! # Example
//!
//! ```
//! use ankimo::QueryBuilder;
//!
//! let query = QueryBuilder::new().deck("English").build();
//! assert_eq!(query, "deck:English");
//!
//! let query = QueryBuilder::new().deck("My Deck").build();
//! assert_eq!(query, "deck:\"My Deck\"");
//! ```

/// A builder for constructing Anki search queries.
#[derive(Debug, Clone, Default)]
#[must_use = "QueryBuilder does nothing until .build() is called"]
pub struct QueryBuilder {
    parts: Vec<String>,
}

impl QueryBuilder {
    /// Create a new empty query builder.
    pub fn new() -> Self {
        Self { parts: Vec::new() }
    }

    /// Filter by deck name.
    ///
    /// Hierarchical names with `::` pass through unchanged. Wildcards are
    /// escaped so the name matches literally.
    ///
    /// ```
    /// use ankimo::QueryBuilder;
    ///
    /// let q = QueryBuilder::new().deck("Languages::Italian").build();
    /// assert_eq!(q, "deck:Languages::Italian");
    ///
    /// let q = QueryBuilder::new().deck("50% off*").build();
    /// assert_eq!(q, "deck:\"50% off\\*\"");
    /// ```
    pub fn deck(mut self, name: &str) -> Self {
        self.parts.push(format!("deck:{}", quote_if_needed(name)));
        self
    }

    /// Build the final query string.
    pub fn build(self) -> String {
        self.parts.join(" ")
    }
}

/// Escape search metacharacters and quote the value when it contains
/// whitespace, quotes, grouping, or a leading negation.
fn quote_if_needed(s: &str) -> String {
    let escaped = escape(s);
    let needs_quotes = s.is_empty()
        || s.starts_with('-')
        || s.chars()
            .any(|c| c.is_whitespace() || matches!(c, '"' | '(' | ')'));

    if needs_quotes {
        format!("\"{}\"", escaped)
    } else {
        escaped
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '\\' | '"' | '*' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

impl std::fmt::Display for QueryBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.parts.join(" "))
    }
}
