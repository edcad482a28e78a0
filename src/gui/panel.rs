// src/gui/panel.rs
//
// The floating status panel's state. Position and drag state live here and
// are dropped together with the panel; nothing about them is persisted.

use eframe::egui::{Pos2, Response};

use crate::scan::{ScanReport, StaleRow};

/// Pointer-drag state for the panel header.
#[derive(Clone, Debug)]
pub struct PanelDrag {
    pos: Pos2,
    dragging: bool,
}

impl PanelDrag {
    pub fn new(pos: Pos2) -> Self {
        Self { pos, dragging: false }
    }

    #[inline] pub fn pos(&self) -> Pos2 { self.pos }
    #[inline] pub fn is_dragging(&self) -> bool { self.dragging }

    /// Feed the header's response; moves the panel by the pointer delta.
    pub fn track(&mut self, resp: &Response) {
        if resp.drag_started() {
            self.dragging = true;
        }
        if self.dragging && resp.dragged() {
            self.pos += resp.drag_delta();
        }
        if resp.drag_stopped() {
            self.dragging = false;
        }
    }
}

pub struct Panel {
    pub report: ScanReport,
    /// One flag per `report.stale` row, same order.
    pub checked: Vec<bool>,
    pub drag: PanelDrag,
}

impl Panel {
    pub fn new(report: ScanReport, pos: Pos2) -> Self {
        let checked = vec![false; report.stale.len()];
        Self { report, checked, drag: PanelDrag::new(pos) }
    }

    /// Put a panel for `report` into `slot` unless one is already there.
    /// Returns whether a panel was created.
    pub fn place(slot: &mut Option<Panel>, report: ScanReport, pos: Pos2) -> bool {
        if slot.is_some() {
            return false;
        }
        *slot = Some(Panel::new(report, pos));
        true
    }

    pub fn select_all(&mut self) {
        self.checked.iter_mut().for_each(|c| *c = true);
    }

    pub fn clear_all(&mut self) {
        self.checked.iter_mut().for_each(|c| *c = false);
    }

    pub fn selected_count(&self) -> usize {
        self.checked.iter().filter(|c| **c).count()
    }

    /// Checked rows in checklist (document) order.
    pub fn selected_rows(&self) -> Vec<StaleRow> {
        self.report
            .stale
            .iter()
            .zip(&self.checked)
            .filter(|(_, c)| **c)
            .map(|(r, _)| r.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stale(id: u64) -> StaleRow {
        StaleRow {
            id,
            class: s!("VIP"),
            room: format!("Room {id}"),
            updated: s!("2024-01-01"),
            edit_url: format!("https://h/tt/edit/{id}"),
        }
    }

    fn panel(ids: &[u64]) -> Panel {
        let report = ScanReport {
            date: s!("2024-06-01"),
            scanned_at: s!("08:00:00"),
            pages: 1,
            stale_total: ids.len(),
            stale: ids.iter().map(|i| stale(*i)).collect(),
        };
        Panel::new(report, Pos2::new(50.0, 120.0))
    }

    #[test]
    fn selection_keeps_checklist_order() {
        let mut p = panel(&[5, 3, 9]);
        p.checked[2] = true;
        p.checked[0] = true;
        let ids: Vec<u64> = p.selected_rows().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![5, 9]);
    }

    #[test]
    fn select_all_then_clear_all() {
        let mut p = panel(&[1, 2, 3]);
        p.select_all();
        assert_eq!(p.selected_count(), 3);
        p.clear_all();
        assert_eq!(p.selected_count(), 0);
        assert!(p.selected_rows().is_empty());
    }

    #[test]
    fn at_most_one_panel() {
        let mut slot = None;
        let first = panel(&[1, 2]).report;
        let second = panel(&[7]).report;

        assert!(Panel::place(&mut slot, first, Pos2::new(10.0, 10.0)));
        slot.as_mut().unwrap().select_all();

        assert!(!Panel::place(&mut slot, second, Pos2::new(90.0, 90.0)));
        let kept = slot.unwrap();
        assert_eq!(kept.report.stale.len(), 2);
        assert_eq!(kept.selected_count(), 2);
        assert_eq!(kept.drag.pos(), Pos2::new(10.0, 10.0));
    }

    #[test]
    fn new_panel_starts_unchecked_and_still() {
        let p = panel(&[1]);
        assert_eq!(p.checked, vec![false]);
        assert!(!p.drag.is_dragging());
        assert_eq!(p.drag.pos(), Pos2::new(50.0, 120.0));
    }
}
