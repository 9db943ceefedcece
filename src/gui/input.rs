use crate::grid::{Bounds, Coord};
use eframe::egui::{PointerState, Pos2, Rect};

/// Mouse button currently painting on the field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaintButton {
    /// Paints live cells.
    Primary,
    /// Erases cells.
    Secondary,
    #[default]
    None,
}

impl PaintButton {
    pub fn from_pointer(pointer: &PointerState, field: Rect) -> Self {
        Self::from_buttons(
            pointer.primary_down(),
            pointer.secondary_down(),
            pointer.press_origin(),
            field,
        )
    }

    /// Only a press that started on the field paints, so drags coming in
    /// from the control panel leave the cells alone.
    pub fn from_buttons(
        primary: bool,
        secondary: bool,
        press_origin: Option<Pos2>,
        field: Rect,
    ) -> Self {
        if !press_origin.is_some_and(|pos| field.contains(pos)) {
            Self::None
        } else if primary {
            Self::Primary
        } else if secondary {
            Self::Secondary
        } else {
            Self::None
        }
    }

    /// State written into every cell dragged over while the button is held.
    pub fn paint_state(self) -> Option<bool> {
        match self {
            Self::Primary => Some(true),
            Self::Secondary => Some(false),
            Self::None => None,
        }
    }
}

/// Translates a screen position into the cell under it, `None` outside `field`.
pub fn cell_at(field: Rect, pos: Pos2, bounds: Bounds) -> Option<Coord> {
    if !field.contains(pos) || field.width() <= 0. || field.height() <= 0. {
        return None;
    }
    let cell_w = field.width() / bounds.width() as f32;
    let cell_h = field.height() / bounds.height() as f32;
    let x = ((pos.x - field.min.x) / cell_w).floor() as i64;
    let y = ((pos.y - field.min.y) / cell_h).floor() as i64;
    // `Rect::contains` includes the far edges
    Some(Coord::new(
        x.clamp(0, bounds.width() - 1),
        y.clamp(0, bounds.height() - 1),
    ))
}

#[cfg(test)]
mod tests {
    use super::{cell_at, PaintButton};
    use crate::grid::{Bounds, Coord};
    use eframe::egui::{pos2, vec2, Rect};

    #[test]
    fn test_paint_states() {
        assert_eq!(PaintButton::Primary.paint_state(), Some(true));
        assert_eq!(PaintButton::Secondary.paint_state(), Some(false));
        assert_eq!(PaintButton::None.paint_state(), None);
        assert_eq!(PaintButton::default(), PaintButton::None);
    }

    #[test]
    fn test_drag_from_outside_does_not_paint() {
        let field = Rect::from_min_size(pos2(400., 0.), vec2(200., 100.));
        let inside = Some(pos2(450., 50.));
        let panel = Some(pos2(100., 50.));

        assert_eq!(
            PaintButton::from_buttons(true, false, inside, field),
            PaintButton::Primary
        );
        assert_eq!(
            PaintButton::from_buttons(false, true, inside, field),
            PaintButton::Secondary
        );
        assert_eq!(
            PaintButton::from_buttons(false, false, inside, field),
            PaintButton::None
        );
        // slider drag that wandered onto the field
        assert_eq!(
            PaintButton::from_buttons(true, false, panel, field),
            PaintButton::None
        );
        assert_eq!(
            PaintButton::from_buttons(false, true, panel, field),
            PaintButton::None
        );
        assert_eq!(
            PaintButton::from_buttons(true, false, None, field),
            PaintButton::None
        );
    }

    #[test]
    fn test_cell_at() {
        let bounds = Bounds::new(10, 5).unwrap();
        let field = Rect::from_min_size(pos2(10., 20.), vec2(100., 50.));

        assert_eq!(cell_at(field, pos2(10., 20.), bounds), Some(Coord::new(0, 0)));
        assert_eq!(cell_at(field, pos2(55., 45.), bounds), Some(Coord::new(4, 2)));
        assert_eq!(cell_at(field, pos2(109.5, 69.5), bounds), Some(Coord::new(9, 4)));
        assert_eq!(cell_at(field, pos2(110., 70.), bounds), Some(Coord::new(9, 4)));

        assert_eq!(cell_at(field, pos2(9., 30.), bounds), None);
        assert_eq!(cell_at(field, pos2(50., 71.), bounds), None);
    }
}
