//! Plain-text grid table renderer. Cells are preformatted strings; the only
//! job here is width-aware padding and the `+`/`-`/`=` rule lines.

use unicode_width::UnicodeWidthStr;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Table {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.headers.len());
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.width()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(cell.width());
                }
            }
        }
        widths
    }

    /// Render the whole table, header rule in `=`, row rules in `-`.
    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut out = String::new();
        rule(&mut out, &widths, '-');
        line(&mut out, &widths, &self.headers);
        rule(&mut out, &widths, '=');
        for row in &self.rows {
            line(&mut out, &widths, row);
            rule(&mut out, &widths, '-');
        }
        out
    }
}

fn rule(out: &mut String, widths: &[usize], fill: char) {
    for &w in widths {
        out.push('+');
        // one space of padding on each side of the cell
        for _ in 0..w + 2 {
            out.push(fill);
        }
    }
    out.push_str("+\n");
}

fn line(out: &mut String, widths: &[usize], cells: &[String]) {
    for (i, &w) in widths.iter().enumerate() {
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        out.push_str("| ");
        out.push_str(cell);
        for _ in 0..w.saturating_sub(cell.width()) + 1 {
            out.push(' ');
        }
    }
    out.push_str("|\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_layout_pads_to_widest_cell() {
        let mut table = Table::new(["PID", "Process Name"]);
        table.push_row(vec!["1".to_string(), "init".to_string()]);
        table.push_row(vec!["4242".to_string(), "x".to_string()]);

        let expected = "\
+------+--------------+
| PID  | Process Name |
+======+==============+
| 1    | init         |
+------+--------------+
| 4242 | x            |
+------+--------------+
";
        assert_eq!(table.render(), expected);
    }

    #[test]
    fn every_line_has_equal_display_width() {
        let mut table = Table::new(["Name", "Running"]);
        table.push_row(vec!["监视器".to_string(), "Yes".to_string()]);
        table.push_row(vec!["sh".to_string(), "No".to_string()]);

        let rendered = table.render();
        let widths: Vec<usize> = rendered.lines().map(UnicodeWidthStr::width).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn empty_table_is_header_only() {
        let table = Table::new(["PID"]);
        assert!(table.is_empty());
        let rendered = table.render();
        assert_eq!(rendered.lines().count(), 3);
    }
}
