use macroquad::prelude::*;

use crate::application::Simulation;
use crate::domain::Grid;
use crate::ui::{GridLayout, InteractiveRegion};

const BACKGROUND: Color = WHITE;
const ALIVE: Color = BLACK;
const GRID_LINE: Color = Color::new(0.5, 0.5, 0.5, 1.0);
const BUTTON: Color = Color::new(0.0, 1.0, 0.0, 1.0);
const BUTTON_HOVER: Color = Color::new(0.45, 1.0, 0.45, 1.0);
const LABEL_SIZE: u16 = 36;

/// Draw the board: live cells filled, every cell outlined
pub fn draw_grid(grid: &Grid, layout: &GridLayout) {
    let (w, h) = (layout.cell_width, layout.cell_height);

    grid.iter_cells()
        .filter(|(_, _, cell)| cell.is_alive())
        .for_each(|(x, y, _)| {
            let (sx, sy) = layout.cell_origin(x, y);
            draw_rectangle(sx, sy, w, h, ALIVE);
        });

    for y in 0..layout.rows {
        for x in 0..layout.columns {
            let (sx, sy) = layout.cell_origin(x, y);
            draw_rectangle_lines(sx, sy, w, h, 1.0, GRID_LINE);
        }
    }
}

fn draw_button(region: &InteractiveRegion, mouse_pos: (f32, f32)) {
    let color = if region.contains(mouse_pos) {
        BUTTON_HOVER
    } else {
        BUTTON
    };
    draw_rectangle(region.x, region.y, region.width, region.height, color);

    let text_size = measure_text(region.label, None, LABEL_SIZE, 1.0);
    let (cx, cy) = region.center();
    draw_text(
        region.label,
        cx - text_size.width / 2.0,
        cy + text_size.height / 2.0,
        LABEL_SIZE as f32,
        BLACK,
    );
}

/// Control strip plus a one-line status readout
pub fn draw_controls(regions: &[InteractiveRegion], simulation: &Simulation, mouse_pos: (f32, f32)) {
    regions.iter().for_each(|region| draw_button(region, mouse_pos));

    let status = if simulation.is_running() { "Running" } else { "Stopped" };
    let status_color = if simulation.is_running() {
        Color::from_rgba(0, 150, 0, 255)
    } else {
        Color::from_rgba(200, 100, 0, 255)
    };
    draw_text(
        &format!("{status} | Generation {}", simulation.generation()),
        8.0,
        20.0,
        20.0,
        status_color,
    );
}

/// Full frame: background, board, controls
pub fn draw_frame(simulation: &Simulation, layout: &GridLayout, regions: &[InteractiveRegion], mouse_pos: (f32, f32)) {
    clear_background(BACKGROUND);
    draw_grid(simulation.grid(), layout);
    draw_controls(regions, simulation, mouse_pos);
}
