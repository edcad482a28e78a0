// src/scan/table.rs
//
// Pure table logic: header lookup, page count and row classification.
// Nothing here touches the browser.

use crate::browser::RawRow;
use crate::config::options::Labels;
use crate::core::{date::parse_date, link::edit_id, sanitize::{find_header, normalize_ws}};
use super::types::{Columns, PageTally, StaleRow};

/// Resolve the date column (required) and the room/class columns (optional).
pub fn resolve_columns(headers: &[String], labels: &Labels) -> Option<Columns> {
    let updated = find_header(headers, &labels.updated)?;
    Some(Columns {
        updated,
        room: find_header(headers, &labels.room),
        class: find_header(headers, &labels.class),
    })
}

/// Highest numeric pagination label; 1 when there is none.
pub fn total_pages<S: AsRef<str>>(labels: &[S]) -> u32 {
    labels
        .iter()
        .filter_map(|l| l.as_ref().trim().parse::<u32>().ok())
        .fold(1, u32::max)
}

fn cell_text(row: &RawRow, col: Option<usize>) -> String {
    col.and_then(|c| row.cells.get(c))
        .map(|t| normalize_ws(t))
        .unwrap_or_default()
}

/// Split one page of rows into stale/current/skipped.
///
/// Rows too short to hold the date column and rows with an empty date are
/// skipped. A stale row is always counted, but only becomes a `StaleRow` when
/// its edit link yields a numeric id.
pub fn classify_rows(rows: &[RawRow], cols: Columns, today: &str) -> PageTally {
    let mut tally = PageTally::default();

    for row in rows {
        if row.cells.len() <= cols.updated {
            tally.skipped += 1;
            continue;
        }
        let Some(updated) = parse_date(&row.cells[cols.updated]) else {
            tally.skipped += 1;
            continue;
        };
        if updated == today {
            tally.current += 1;
            continue;
        }

        tally.stale_total += 1;

        let Some(href) = row.edit_href.as_deref() else {
            logd!("Scan: Stale row without edit link ({})", updated);
            continue;
        };
        let Some(id) = edit_id(href) else {
            logd!("Scan: Unparsable edit link {}", href);
            continue;
        };

        tally.stale.push(StaleRow {
            id,
            class: cell_text(row, cols.class),
            room: cell_text(row, cols.room),
            updated: s!(updated),
            edit_url: s!(href),
        });
    }

    tally
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str], href: Option<&str>) -> RawRow {
        RawRow {
            cells: cells.iter().map(|c| s!(*c)).collect(),
            edit_href: href.map(|h| s!(h)),
        }
    }

    const COLS: Columns = Columns { updated: 2, room: Some(0), class: Some(1) };

    #[test]
    fn pages_default_to_one() {
        let none: [&str; 0] = [];
        assert_eq!(total_pages(&none), 1);
        assert_eq!(total_pages(&["Previous", "Next"]), 1);
        assert_eq!(total_pages(&["Previous", "1", "2", "…", "14", "Next"]), 14);
        assert_eq!(total_pages(&[" 3 ", "0"]), 3);
    }

    #[test]
    fn columns_need_the_date_header() {
        let labels = Labels::default();
        let headers: Vec<String> = vec!["Ruang".into(), "Kelas".into(), "Tgl Update".into()];
        assert_eq!(resolve_columns(&headers, &labels), Some(COLS));

        let headers: Vec<String> = vec!["Ruang".into(), "Kelas".into()];
        assert_eq!(resolve_columns(&headers, &labels), None);

        let headers: Vec<String> = vec!["Tgl Update".into()];
        let cols = resolve_columns(&headers, &labels).unwrap();
        assert_eq!((cols.room, cols.class), (None, None));
    }

    #[test]
    fn classifies_stale_current_and_skipped() {
        let today = "2024-06-01";
        let rows = vec![
            row(&["Melati 1", "VIP", "2024-05-30 10:00"], Some("https://h/tt/edit/11")),
            row(&["Melati 2", "I", "2024-06-01 07:45"], Some("https://h/tt/edit/12")),
            row(&["broken", "II"], Some("https://h/tt/edit/13")),
            row(&["Mawar", "III", "   "], Some("https://h/tt/edit/14")),
            row(&["Anggrek", "III", "2024-01-01"], None),
            row(&["Kenanga", "III", "2024-01-01"], Some("https://h/tt/edit/x")),
        ];
        let t = classify_rows(&rows, COLS, today);

        assert_eq!(t.current, 1);
        assert_eq!(t.skipped, 2);
        assert_eq!(t.stale_total, 3);
        assert_eq!(t.stale.len(), 1);
        assert_eq!(t.stale[0], StaleRow {
            id: 11,
            class: s!("VIP"),
            room: s!("Melati 1"),
            updated: s!("2024-05-30"),
            edit_url: s!("https://h/tt/edit/11"),
        });
    }

    #[test]
    fn missing_optional_columns_give_empty_labels() {
        let cols = Columns { updated: 0, room: None, class: Some(5) };
        let t = classify_rows(&[row(&["2024-01-01"], Some("/edit/9"))], cols, "2024-06-01");
        assert_eq!(t.stale[0].room, "");
        assert_eq!(t.stale[0].class, "");
    }
}
