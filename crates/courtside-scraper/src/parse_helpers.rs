//! Element-level helpers shared by the section parsers.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

static LABEL_CELL: LazyLock<Selector> = LazyLock::new(|| selector("th"));
static VALUE_CELL: LazyLock<Selector> = LazyLock::new(|| selector("td"));

/// Parses a CSS selector that is a compile-time constant of this crate.
///
/// # Panics
///
/// Panics if `css` is not a valid selector, which is a programming error.
pub(crate) fn selector(css: &'static str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid built-in selector {css:?}: {e:?}"))
}

/// All descendant text of `element`, concatenated and trimmed.
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_owned()
}

/// Trimmed text of the first descendant of `element` matching `sel`, or an
/// empty string when nothing matches.
pub(crate) fn child_text(element: ElementRef<'_>, sel: &Selector) -> String {
    element
        .select(sel)
        .next()
        .map(element_text)
        .unwrap_or_default()
}

/// Trimmed text of the first element in `document` matching `sel`.
pub(crate) fn first_text(document: &Html, sel: &Selector) -> Option<String> {
    document.select(sel).next().map(element_text)
}

/// What to do with a table row whose label cell is empty or missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EmptyLabel {
    /// Keep the row under the empty label.
    Keep,
    /// Drop the row.
    Skip,
}

/// Label/value pairs read from table rows, in document order, where a
/// repeated label replaces the earlier value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct LabelTable {
    rows: Vec<(String, String)>,
}

impl LabelTable {
    /// Reads every element matching `rows` in `document`, taking the first
    /// `th` as the label and the first `td` as the value.
    pub(crate) fn read(document: &Html, rows: &Selector, empty_label: EmptyLabel) -> Self {
        let mut table = Self::default();
        for row in document.select(rows) {
            let label = child_text(row, &LABEL_CELL);
            if label.is_empty() && empty_label == EmptyLabel::Skip {
                continue;
            }
            let value = child_text(row, &VALUE_CELL);
            table.insert(label, value);
        }
        table
    }

    fn insert(&mut self, label: String, value: String) {
        match self.rows.iter_mut().find(|(l, _)| *l == label) {
            Some((_, existing)) => *existing = value,
            None => self.rows.push((label, value)),
        }
    }

    /// Value for an exact label match.
    pub(crate) fn get(&self, label: &str) -> Option<String> {
        self.rows
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.clone())
    }

    pub(crate) fn into_rows(self) -> Vec<(String, String)> {
        self.rows
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(html: &str) -> Html {
        Html::parse_document(html)
    }

    #[test]
    fn element_text_joins_and_trims_nested_text() {
        let html = doc("<p class=\"x\">\n  <b>Novak</b> Djokovic \n</p>");
        let text = first_text(&html, &selector("p.x"));
        assert_eq!(text.as_deref(), Some("Novak Djokovic"));
    }

    #[test]
    fn first_text_is_none_without_match() {
        let html = doc("<div></div>");
        assert_eq!(first_text(&html, &selector("h1")), None);
    }

    #[test]
    fn label_table_keeps_empty_labels_when_asked() {
        let html = doc(
            "<table class=\"t\">\
             <tr><th>Age</th><td>37</td></tr>\
             <tr><td>orphan</td></tr>\
             </table>",
        );
        let table = LabelTable::read(&html, &selector(".t tr"), EmptyLabel::Keep);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("Age").as_deref(), Some("37"));
        assert_eq!(table.get("").as_deref(), Some("orphan"));
    }

    #[test]
    fn label_table_skips_empty_labels_when_asked() {
        let html = doc(
            "<table class=\"t\">\
             <tr><th>Hard</th><td>10-2</td></tr>\
             <tr><th>  </th><td>1-1</td></tr>\
             </table>",
        );
        let table = LabelTable::read(&html, &selector(".t tr"), EmptyLabel::Skip);
        assert_eq!(
            table.into_rows(),
            vec![("Hard".to_owned(), "10-2".to_owned())]
        );
    }

    #[test]
    fn label_table_missing_value_cell_is_empty_string() {
        let html = doc("<table class=\"t\"><tr><th>Weight</th></tr></table>");
        let table = LabelTable::read(&html, &selector(".t tr"), EmptyLabel::Keep);
        assert_eq!(table.get("Weight").as_deref(), Some(""));
    }

    #[test]
    fn label_table_last_duplicate_wins() {
        let html = doc(
            "<table class=\"t\">\
             <tr><th>Rank</th><td>1</td></tr>\
             <tr><th>Rank</th><td>2</td></tr>\
             </table>",
        );
        let table = LabelTable::read(&html, &selector(".t tr"), EmptyLabel::Keep);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("Rank").as_deref(), Some("2"));
    }
}
