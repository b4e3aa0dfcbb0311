//! Cell state.
//!
//! A cell is either excluded (a border/counter cell that only shows dot
//! counts) or included (a maze cell with design lines, play lines and an
//! optional special mark).
//!
//! # Encoding
//!
//! ```text
//! { "position": { "row": 0, "column": 0 }, "cellType": { "dotCount": { "toTheRight": 2 } } }
//! { "position": { "row": 1, "column": 1 }, "cellType": { "included": { "designLines": 9, "playLines": 0 } } }
//! ```

use serde::{Deserialize, Serialize};

use super::lines::{LegalLineSet, LineSet};
use super::position::GridPosition;
use super::tool::Mode;

/// Annotation on an included cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpecialMark {
    /// Maze entrance
    Start,
    /// Maze exit
    End,
    /// Cell visited while playing
    Dot,
    /// Cell ruled out while playing
    Blank,
}

impl SpecialMark {
    /// Next mark when cycling in design mode, which only knows start/end.
    pub fn toggled_for_design(&self) -> Self {
        match self {
            Self::Start => Self::End,
            Self::End => Self::Start,
            Self::Dot | Self::Blank => Self::Start,
        }
    }

    /// Marks placed while authoring (as opposed to while playing).
    pub fn is_design_mark(&self) -> bool {
        matches!(self, Self::Start | Self::End)
    }
}

/// Counts of path cells shown on an excluded cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DotCount {
    /// Cells the maze crosses to the right, up to the next excluded cell.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_the_right: Option<usize>,
    /// Cells the maze crosses below, up to the next excluded cell.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub below: Option<usize>,
}

impl DotCount {
    pub fn new(to_the_right: Option<usize>, below: Option<usize>) -> Self {
        Self {
            to_the_right,
            below,
        }
    }

    pub fn is_bidirectional(&self) -> bool {
        self.to_the_right.is_some() && self.below.is_some()
    }
}

/// Payload of an included cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Included {
    pub design_lines: LegalLineSet,
    pub play_lines: LegalLineSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_mark: Option<SpecialMark>,
}

impl Included {
    pub fn new(
        design_lines: LegalLineSet,
        play_lines: LegalLineSet,
        special_mark: Option<SpecialMark>,
    ) -> Self {
        Self {
            design_lines,
            play_lines,
            special_mark,
        }
    }

    /// Line set read and written in `mode`.
    pub fn lines(&self, mode: Mode) -> LegalLineSet {
        match mode {
            Mode::Design => self.design_lines,
            Mode::Play => self.play_lines,
        }
    }

    /// Copy with the `mode` line set replaced.
    pub fn with_lines(mut self, mode: Mode, lines: LegalLineSet) -> Self {
        match mode {
            Mode::Design => self.design_lines = lines,
            Mode::Play => self.play_lines = lines,
        }
        self
    }

    pub fn contains(&self, lines: LineSet, mode: Mode) -> bool {
        self.lines(mode).contains(lines)
    }

    pub fn toggling_mark_for_design(mut self) -> Self {
        self.special_mark = Some(
            self.special_mark
                .map_or(SpecialMark::Start, |mark| mark.toggled_for_design()),
        );
        self
    }

    /// none -> dot, dot -> none, other marks untouched.
    pub fn toggling_dot(self) -> Self {
        self.toggling(SpecialMark::Dot)
    }

    /// none -> blank, blank -> none, other marks untouched.
    pub fn toggling_blank(self) -> Self {
        self.toggling(SpecialMark::Blank)
    }

    fn toggling(mut self, mark: SpecialMark) -> Self {
        self.special_mark = match self.special_mark {
            None => Some(mark),
            Some(current) if current == mark => None,
            other => other,
        };
        self
    }
}

/// Category of a cell together with its category-specific data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CellType {
    #[serde(rename = "dotCount")]
    Excluded(DotCount),
    Included(Included),
}

impl Default for CellType {
    fn default() -> Self {
        Self::Excluded(DotCount::default())
    }
}

impl CellType {
    pub fn is_excluded(&self) -> bool {
        matches!(self, Self::Excluded(_))
    }

    /// No lines in either mode. Excluded cells never have lines.
    pub fn has_no_lines(&self) -> bool {
        match self {
            Self::Excluded(_) => true,
            Self::Included(included) => {
                included.design_lines.is_empty() && included.play_lines.is_empty()
            }
        }
    }

    pub fn has_no_lines_in(&self, mode: Mode) -> bool {
        match self {
            Self::Excluded(_) => true,
            Self::Included(included) => included.lines(mode).is_empty(),
        }
    }

    pub fn contains(&self, lines: LineSet, mode: Mode) -> bool {
        match self {
            Self::Excluded(_) => false,
            Self::Included(included) => included.contains(lines, mode),
        }
    }

    pub fn dot_count(&self) -> Option<DotCount> {
        match self {
            Self::Excluded(count) => Some(*count),
            Self::Included(_) => None,
        }
    }

    pub fn special_mark(&self) -> Option<SpecialMark> {
        match self {
            Self::Excluded(_) => None,
            Self::Included(included) => included.special_mark,
        }
    }

    /// Flip category. Line and mark data never survive the flip.
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Excluded(_) => Self::Included(Included::default()),
            Self::Included(_) => Self::default(),
        };
    }
}

/// One grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    pub position: GridPosition,
    pub cell_type: CellType,
}

impl Cell {
    pub fn new(position: GridPosition, cell_type: CellType) -> Self {
        Self {
            position,
            cell_type,
        }
    }

    pub fn excluded(position: GridPosition) -> Self {
        Self::new(position, CellType::default())
    }

    pub fn included(
        position: GridPosition,
        design: LegalLineSet,
        play: LegalLineSet,
        special_mark: Option<SpecialMark>,
    ) -> Self {
        Self::new(
            position,
            CellType::Included(Included::new(design, play, special_mark)),
        )
    }

    pub fn is_excluded(&self) -> bool {
        self.cell_type.is_excluded()
    }

    pub fn has_no_lines(&self) -> bool {
        self.cell_type.has_no_lines()
    }

    pub fn has_no_lines_in(&self, mode: Mode) -> bool {
        self.cell_type.has_no_lines_in(mode)
    }

    pub fn contains(&self, lines: LineSet, mode: Mode) -> bool {
        self.cell_type.contains(lines, mode)
    }

    pub fn dot_count(&self) -> Option<DotCount> {
        self.cell_type.dot_count()
    }

    pub fn special_mark(&self) -> Option<SpecialMark> {
        self.cell_type.special_mark()
    }

    pub fn toggle(&mut self) {
        self.cell_type.toggle();
    }

    pub fn clearing_play_lines(mut self) -> Self {
        if let CellType::Included(included) = &mut self.cell_type {
            included.play_lines = LegalLineSet::NONE;
        }
        self
    }

    pub fn clearing_dot(mut self) -> Self {
        self.clear_mark(SpecialMark::Dot);
        self
    }

    pub fn clearing_blank(mut self) -> Self {
        self.clear_mark(SpecialMark::Blank);
        self
    }

    fn clear_mark(&mut self, mark: SpecialMark) {
        if let CellType::Included(included) = &mut self.cell_type {
            if included.special_mark == Some(mark) {
                included.special_mark = None;
            }
        }
    }
}

/// Read-only, mode-projected view of a cell for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellView {
    pub position: GridPosition,
    pub lines: LineSet,
    pub horizontal_dot_count: Option<usize>,
    pub vertical_dot_count: Option<usize>,
    pub special_mark: Option<SpecialMark>,
    pub is_excluded: bool,
    pub is_selected: bool,
}

impl CellView {
    pub fn new(cell: &Cell, mode: Mode, selected: bool) -> Self {
        match cell.cell_type {
            CellType::Excluded(count) => Self {
                position: cell.position,
                lines: LineSet::empty(),
                horizontal_dot_count: count.to_the_right,
                vertical_dot_count: count.below,
                special_mark: None,
                is_excluded: true,
                is_selected: selected,
            },
            CellType::Included(included) => Self {
                position: cell.position,
                lines: included.lines(mode).lines(),
                horizontal_dot_count: None,
                vertical_dot_count: None,
                special_mark: included.special_mark,
                is_excluded: false,
                is_selected: selected,
            },
        }
    }

    pub fn has_bidirectional_dot_count(&self) -> bool {
        self.horizontal_dot_count.is_some() && self.vertical_dot_count.is_some()
    }

    /// Blank cells are drawn without a border.
    pub fn has_border(&self) -> bool {
        self.special_mark != Some(SpecialMark::Blank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pos() -> GridPosition {
        GridPosition::new(1, 1)
    }

    #[test]
    fn test_toggled_for_design_cycles_start_end() {
        assert_eq!(SpecialMark::Start.toggled_for_design(), SpecialMark::End);
        assert_eq!(
            SpecialMark::Start.toggled_for_design().toggled_for_design(),
            SpecialMark::Start
        );
        for mark in [SpecialMark::Dot, SpecialMark::Blank] {
            let once = mark.toggled_for_design();
            assert_eq!(once, SpecialMark::Start);
            assert_eq!(once.toggled_for_design(), SpecialMark::End);
        }
    }

    #[test]
    fn test_toggling_design_mark_from_none() {
        let included = Included::default().toggling_mark_for_design();
        assert_eq!(included.special_mark, Some(SpecialMark::Start));
    }

    #[test]
    fn test_toggling_dot_and_blank() {
        let none = Included::default();
        assert_eq!(none.toggling_dot().special_mark, Some(SpecialMark::Dot));
        assert_eq!(none.toggling_dot().toggling_dot().special_mark, None);
        assert_eq!(none.toggling_blank().special_mark, Some(SpecialMark::Blank));
        assert_eq!(none.toggling_blank().toggling_blank().special_mark, None);

        let start = Included::new(LegalLineSet::NONE, LegalLineSet::NONE, Some(SpecialMark::Start));
        assert_eq!(start.toggling_blank().special_mark, Some(SpecialMark::Start));
        assert_eq!(start.toggling_dot().special_mark, Some(SpecialMark::Start));
    }

    #[test]
    fn test_toggle_discards_payload() {
        let mut cell = Cell::included(
            pos(),
            LegalLineSet::HORIZONTAL,
            LegalLineSet::VERTICAL,
            Some(SpecialMark::Start),
        );
        cell.toggle();
        assert_eq!(cell, Cell::excluded(pos()));

        cell.cell_type = CellType::Excluded(DotCount::new(Some(3), Some(1)));
        cell.toggle();
        assert_eq!(cell.cell_type, CellType::Included(Included::default()));
    }

    #[test]
    fn test_lines_per_mode() {
        let cell = Cell::included(pos(), LegalLineSet::HORIZONTAL, LegalLineSet::NONE, None);
        assert!(!cell.has_no_lines());
        assert!(!cell.has_no_lines_in(Mode::Design));
        assert!(cell.has_no_lines_in(Mode::Play));
        assert!(cell.contains(LineSet::LEFT, Mode::Design));
        assert!(!cell.contains(LineSet::LEFT, Mode::Play));

        let excluded = Cell::excluded(pos());
        assert!(excluded.has_no_lines());
        assert!(excluded.has_no_lines_in(Mode::Play));
    }

    #[test]
    fn test_clearing_helpers() {
        let cell = Cell::included(
            pos(),
            LegalLineSet::VERTICAL,
            LegalLineSet::VERTICAL,
            Some(SpecialMark::Dot),
        );
        let cleared = cell.clearing_play_lines().clearing_dot();
        assert_eq!(
            cleared,
            Cell::included(pos(), LegalLineSet::VERTICAL, LegalLineSet::NONE, None)
        );

        let start = Cell::included(pos(), LegalLineSet::NONE, LegalLineSet::NONE, Some(SpecialMark::Start));
        assert_eq!(start.clearing_blank().clearing_dot(), start);
    }

    #[test]
    fn test_dot_count_bidirectional() {
        assert!(!DotCount::default().is_bidirectional());
        assert!(!DotCount::new(Some(1), None).is_bidirectional());
        assert!(DotCount::new(Some(1), Some(0)).is_bidirectional());
    }

    #[test]
    fn test_excluded_encoding_has_only_dot_count_key() {
        let cell = Cell::new(pos(), CellType::Excluded(DotCount::new(Some(2), None)));
        let json = serde_json::to_value(cell).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "position": {"row": 1, "column": 1},
                "cellType": {"dotCount": {"toTheRight": 2}}
            })
        );
    }

    #[test]
    fn test_included_encoding_has_only_included_key() {
        let cell = Cell::included(pos(), LegalLineSet::LOWER_LEFT, LegalLineSet::NONE, Some(SpecialMark::End));
        let json = serde_json::to_value(cell).unwrap();
        assert_eq!(
            json["cellType"],
            serde_json::json!({
                "included": {"designLines": 9, "playLines": 0, "specialMark": "end"}
            })
        );

        let back: Cell = serde_json::from_value(json).unwrap();
        assert_eq!(back, cell);
    }

    #[test]
    fn test_view_projects_mode() {
        let cell = Cell::included(
            pos(),
            LegalLineSet::HORIZONTAL,
            LegalLineSet::VERTICAL,
            Some(SpecialMark::Blank),
        );
        let design = CellView::new(&cell, Mode::Design, true);
        assert_eq!(design.lines, LineSet::HORIZONTAL);
        assert!(design.is_selected);
        assert!(!design.has_border());

        let play = CellView::new(&cell, Mode::Play, false);
        assert_eq!(play.lines, LineSet::VERTICAL);

        let excluded = Cell::new(pos(), CellType::Excluded(DotCount::new(Some(4), Some(2))));
        let view = CellView::new(&excluded, Mode::Play, false);
        assert!(view.is_excluded);
        assert!(view.has_bidirectional_dot_count());
        assert_eq!(view.horizontal_dot_count, Some(4));
        assert_eq!(view.vertical_dot_count, Some(2));
        assert!(view.lines.is_empty());
    }
}
