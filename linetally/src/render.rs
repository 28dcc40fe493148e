//! Table and JSON rendering for the summary rows

use console::Style;
use linetallylib::{Grouping, SummaryRow};

/// Width of the group label column
const GROUP_WIDTH: usize = 40;
/// Width of each numeric column
const CELL_WIDTH: usize = 10;

/// Truncate a name to fit within max_len, adding ".." prefix if needed
fn truncate_name(name: &str, max_len: usize) -> String {
    if name.len() > max_len {
        format!("..{}", &name[name.len() - max_len + 2..])
    } else {
        name.to_string()
    }
}

/// Display label for a group key; the empty extension key gets a placeholder
fn group_label(group: &str) -> &str {
    if group.is_empty() {
        "(none)"
    } else {
        group
    }
}

/// Render the summary rows as an aligned table with a total footer.
pub fn render_table(rows: &[SummaryRow], grouping: Grouping) -> String {
    let header_style = Style::new().bold();
    let name_header = match grouping {
        Grouping::Extension => "Extension",
        Grouping::Directory => "Directory",
    };

    let mut out = String::new();

    let header = format!(
        "{:<gw$} {:>cw$} {:>cw$}",
        name_header,
        "Files",
        "Lines",
        gw = GROUP_WIDTH,
        cw = CELL_WIDTH
    );
    out.push_str(&header_style.apply_to(header).to_string());
    out.push('\n');
    out.push_str(&"-".repeat(GROUP_WIDTH + (CELL_WIDTH + 1) * 2));
    out.push('\n');

    for row in rows {
        let label = truncate_name(group_label(&row.group), GROUP_WIDTH - 2);
        out.push_str(&format!(
            "{:<gw$} {:>cw$} {:>cw$}\n",
            label,
            row.files,
            row.lines,
            gw = GROUP_WIDTH,
            cw = CELL_WIDTH
        ));
    }

    let total_files: u64 = rows.iter().map(|r| r.files).sum();
    let total_lines: u64 = rows.iter().map(|r| r.lines).sum();
    out.push_str(&"-".repeat(GROUP_WIDTH + (CELL_WIDTH + 1) * 2));
    out.push('\n');
    out.push_str(&format!(
        "{:<gw$} {:>cw$} {:>cw$}\n",
        format!("Total ({} files)", total_files),
        total_files,
        total_lines,
        gw = GROUP_WIDTH,
        cw = CELL_WIDTH
    ));

    out
}

/// Render the summary rows as pretty-printed JSON.
pub fn render_json(rows: &[SummaryRow]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<SummaryRow> {
        vec![
            SummaryRow {
                group: ".log".to_string(),
                files: 1,
                lines: 5,
            },
            SummaryRow {
                group: ".txt".to_string(),
                files: 2,
                lines: 3,
            },
        ]
    }

    #[test]
    fn test_table_has_headers_rows_and_footer() {
        let table = render_table(&sample_rows(), Grouping::Extension);

        assert!(table.contains("Extension"));
        assert!(table.contains("Files"));
        assert!(table.contains("Lines"));
        assert!(table.contains(".log"));
        assert!(table.contains(".txt"));
        assert!(table.contains("Total (3 files)"));
    }

    #[test]
    fn test_directory_grouping_changes_header() {
        let table = render_table(&sample_rows(), Grouping::Directory);
        assert!(table.contains("Directory"));
    }

    #[test]
    fn test_empty_group_gets_placeholder() {
        let rows = vec![SummaryRow {
            group: String::new(),
            files: 1,
            lines: 2,
        }];
        let table = render_table(&rows, Grouping::Extension);
        assert!(table.contains("(none)"));
    }

    #[test]
    fn test_truncate_name() {
        assert_eq!(truncate_name("short", 10), "short");
        assert_eq!(truncate_name("abcdefghij", 8), "..efghij");
    }

    #[test]
    fn test_json_output_round_trips() {
        let json = render_json(&sample_rows()).unwrap();
        let parsed: Vec<SummaryRow> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample_rows());
    }
}
