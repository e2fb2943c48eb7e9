//! Floor-plan layout: canvas sizing, grid, room stacking, and labels.

use crate::surface::{DrawingSurface, TextStyle};
use plansmith_measure::{total_square_footage, Measurement};
use plansmith_types::{Color, Rect, Size};

/// Drawing scale: one foot of room dimension is 40 canvas pixels.
pub const PIXELS_PER_FOOT: f32 = 40.0;
/// Border left around the grid region for dimension labels.
pub const PADDING: f32 = 60.0;

/// Vertical gap between stacked rooms.
const ROOM_GAP: f32 = 20.0;

const BACKGROUND: Color = Color::rgb(0xff, 0xff, 0xff);
const GRID_LINE: Color = Color::rgb(0xe2, 0xe8, 0xf0);
const ROOM_OUTLINE: Color = Color::rgb(0x1e, 0x29, 0x3b);
const LABEL: Color = Color::rgb(0x1e, 0x29, 0x3b);
const CAPTION: Color = Color::rgb(0x4f, 0x46, 0xe5);

/// Canvas size for a measurement list.
///
/// Sized to the single largest room plus padding on each side. Rooms are
/// stacked below one another from the same origin, so multi-room plans
/// extend past the computed height and clip; this reproduces the shipped
/// layout rather than switching to a sum-of-lengths canvas.
pub fn plan_size(measurements: &[Measurement]) -> Size {
    let max_width = measurements
        .iter()
        .map(Measurement::width_ft)
        .fold(0.0f32, f32::max);
    let max_length = measurements
        .iter()
        .map(Measurement::length_ft)
        .fold(0.0f32, f32::max);
    Size::new(
        max_width * PIXELS_PER_FOOT + PADDING * 2.0,
        max_length * PIXELS_PER_FOOT + PADDING * 2.0,
    )
}

/// Draw the full diagram onto `surface` in paint order: background,
/// one-foot grid, stacked rooms with labels, total-area caption.
///
/// Pure with respect to its inputs; two calls with the same list issue an
/// identical sequence of draw operations.
pub fn draw_floor_plan<S: DrawingSurface>(surface: &mut S, measurements: &[Measurement]) {
    let size = plan_size(measurements);
    let max_width = measurements
        .iter()
        .map(Measurement::width_ft)
        .fold(0.0f32, f32::max);
    let max_length = measurements
        .iter()
        .map(Measurement::length_ft)
        .fold(0.0f32, f32::max);
    let total_area = total_square_footage(measurements);

    surface.fill_rect(Rect::new(0.0, 0.0, size.width, size.height), &BACKGROUND);

    // One-foot grid across the measured region.
    let grid_right = max_width * PIXELS_PER_FOOT + PADDING;
    let grid_bottom = max_length * PIXELS_PER_FOOT + PADDING;
    for x in 0..=max_width as u32 {
        let px = x as f32 * PIXELS_PER_FOOT + PADDING;
        surface.line(px, PADDING, px, grid_bottom, &GRID_LINE, 1.0);
    }
    for y in 0..=max_length as u32 {
        let py = y as f32 * PIXELS_PER_FOOT + PADDING;
        surface.line(PADDING, py, grid_right, py, &GRID_LINE, 1.0);
    }

    let mut cursor_y = PADDING;
    for (index, room) in measurements.iter().enumerate() {
        let width = room.width_ft();
        let length = room.length_ft();
        let area = width * length;
        let rect = Rect::new(
            PADDING,
            cursor_y,
            width * PIXELS_PER_FOOT,
            length * PIXELS_PER_FOOT,
        );

        surface.stroke_rect(rect, &ROOM_OUTLINE, 4.0);

        // Pastel wash, hue rotating 60 degrees per room.
        let wash = Color::from_hsla((index as f32 * 60.0) % 360.0, 0.7, 0.95, 0.5);
        surface.fill_rect(rect, &wash);

        surface.text(
            rect.center_x(),
            rect.center_y(),
            &format!("{} ({:.2} sq ft)", room.area, area),
            &TextStyle { size: 16.0, bold: true, color: LABEL },
            0.0,
        );

        let dim_style = TextStyle { size: 14.0, bold: false, color: LABEL };
        surface.text(
            rect.center_x(),
            cursor_y - 10.0,
            &format!("{} ft", width),
            &dim_style,
            0.0,
        );
        surface.text(
            PADDING - 10.0,
            rect.center_y(),
            &format!("{} ft", length),
            &dim_style,
            -90.0,
        );

        cursor_y += length * PIXELS_PER_FOOT + ROOM_GAP;
    }

    surface.text(
        size.width / 2.0,
        size.height - PADDING / 2.0,
        &format!("Total Area: {:.2} sq ft", total_area),
        &TextStyle { size: 18.0, bold: true, color: CAPTION },
        0.0,
    );
}
