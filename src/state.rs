//! View state for the single-page portfolio: pointer position, scroll
//! offset, and the derived active navigation section. Kept free of any
//! browser types so the derivation logic is testable on the host.

/// Viewport line, in pixels from the top, used to decide which section
/// counts as active while scrolling.
pub const REFERENCE_LINE_PX: f64 = 100.0;

pub const SECTION_COUNT: usize = 4;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SectionId {
    Home,
    Projects,
    Skills,
    Contacts,
}

impl SectionId {
    /// Declared order; doubles as the tie-break order when more than one
    /// section straddles the reference line.
    pub const ALL: [Self; SECTION_COUNT] = [Self::Home, Self::Projects, Self::Skills, Self::Contacts];

    pub fn anchor(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Projects => "progetti",
            Self::Skills => "skills",
            Self::Contacts => "contatti",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Projects => "Progetti",
            Self::Skills => "Skills",
            Self::Contacts => "Contatti",
        }
    }
}

/// On-screen vertical extent of one anchor region, relative to the viewport.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SectionBox {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBox {
    fn straddles_reference_line(self) -> bool {
        self.top <= REFERENCE_LINE_PX && self.bottom >= REFERENCE_LINE_PX
    }
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

/// First section in declared order whose box straddles the reference line.
/// Absent anchors are skipped; if nothing straddles the line the previous
/// selection is kept rather than cleared.
pub fn active_section(
    boxes: &[Option<SectionBox>; SECTION_COUNT],
    previous: SectionId,
) -> SectionId {
    SectionId::ALL
        .iter()
        .zip(boxes.iter())
        .find_map(|(section, rect)| {
            rect.filter(|rect| rect.straddles_reference_line())
                .map(|_| *section)
        })
        .unwrap_or(previous)
}

/// State owned by the page view and mutated only through its two event
/// reaction entry points.
#[derive(Clone, PartialEq, Debug)]
pub struct ViewState {
    pub pointer: PointerPosition,
    pub scroll_y: f64,
    pub active: SectionId,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            pointer: PointerPosition::default(),
            scroll_y: 0.0,
            active: SectionId::Home,
        }
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.pointer = PointerPosition { x, y };
    }

    pub fn on_scroll(&mut self, offset: f64, boxes: &[Option<SectionBox>; SECTION_COUNT]) {
        self.scroll_y = offset;
        self.active = active_section(boxes, self.active);
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed(top: f64, bottom: f64) -> Option<SectionBox> {
        Some(SectionBox { top, bottom })
    }

    /// Four stacked non-overlapping sections, scrolled so the reference
    /// line sits inside the section at `index`.
    fn stacked_with_line_in(index: usize) -> [Option<SectionBox>; SECTION_COUNT] {
        let mut boxes = [None; SECTION_COUNT];
        for (slot, rect) in boxes.iter_mut().enumerate() {
            let offset = (slot as f64 - index as f64) * 600.0;
            *rect = boxed(offset, offset + 600.0);
        }
        boxes
    }

    #[test]
    fn pointer_move_overwrites_exactly() {
        let mut view = ViewState::new();
        view.on_pointer_move(481.5, -3.25);
        assert_eq!(view.pointer, PointerPosition { x: 481.5, y: -3.25 });
        view.on_pointer_move(0.0, 0.0);
        assert_eq!(view.pointer, PointerPosition { x: 0.0, y: 0.0 });
    }

    #[test]
    fn starts_on_home_before_any_scroll() {
        assert_eq!(ViewState::new().active, SectionId::Home);
    }

    #[test]
    fn scroll_offset_is_recorded() {
        let mut view = ViewState::new();
        view.on_scroll(742.0, &[None; SECTION_COUNT]);
        assert_eq!(view.scroll_y, 742.0);
    }

    #[test]
    fn line_inside_skills_box_selects_skills() {
        let mut view = ViewState::new();
        view.on_scroll(1300.0, &stacked_with_line_in(2));
        assert_eq!(view.active, SectionId::Skills);
    }

    #[test]
    fn line_in_a_gap_keeps_previous_selection() {
        let mut view = ViewState::new();
        view.on_scroll(700.0, &stacked_with_line_in(1));
        assert_eq!(view.active, SectionId::Projects);

        // Every box now sits below the reference line.
        let all_below = [boxed(200.0, 800.0), boxed(800.0, 1400.0), None, None];
        view.on_scroll(750.0, &all_below);
        assert_eq!(view.active, SectionId::Projects);
    }

    #[test]
    fn overlap_tie_break_picks_earlier_declared_section() {
        let overlapping = [
            None,
            boxed(0.0, 400.0),
            boxed(50.0, 500.0),
            None,
        ];
        assert_eq!(
            active_section(&overlapping, SectionId::Home),
            SectionId::Projects
        );
    }

    #[test]
    fn missing_anchors_are_skipped() {
        let sparse = [None, None, None, boxed(40.0, 900.0)];
        assert_eq!(
            active_section(&sparse, SectionId::Home),
            SectionId::Contacts
        );
    }

    #[test]
    fn boundary_touch_counts_as_straddling() {
        let at_line = [boxed(100.0, 100.0), None, None, None];
        assert_eq!(active_section(&at_line, SectionId::Skills), SectionId::Home);
    }

    #[test]
    fn scrolling_into_contacts_highlights_contacts() {
        let mut view = ViewState::new();
        view.on_scroll(0.0, &stacked_with_line_in(0));
        view.on_scroll(2400.0, &stacked_with_line_in(3));
        assert_eq!(view.active, SectionId::Contacts);
        assert_eq!(view.active.anchor(), "contatti");
        assert_eq!(view.active.label(), "Contatti");
    }

    #[test]
    fn declared_order_matches_page_order() {
        let anchors: Vec<&str> = SectionId::ALL.iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors, ["home", "progetti", "skills", "contatti"]);
    }
}
