use std::time::Duration;

use macroquad::prelude::*;
use life_loop::{
    InputRouter, Simulation, SimulationConfig,
    application::LoopControl,
    input, rendering,
    ui::{self, GridLayout},
};

fn window_conf() -> Conf {
    let config = SimulationConfig::default();
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: config.window_width as i32,
        window_height: config.window_height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    // Closing the window becomes an input event instead of an immediate exit
    prevent_quit();

    let mut simulation = Simulation::new(SimulationConfig::default());
    let config = simulation.config();
    log::info!("starting with {config:?}");

    // Layout is computed once; the window is not resizable
    let layout = GridLayout::new(config.window_width, config.window_height, config.grid_width, config.grid_height);
    let router = InputRouter::new(ui::control_layout(), layout);

    let started = get_time();
    loop {
        let now = Duration::from_secs_f64((get_time() - started).max(0.0));

        rendering::draw_frame(&simulation, router.grid_layout(), router.regions(), mouse_position());

        let events = input::collect_events();
        if simulation.handle_events(&events, &router, now) == LoopControl::Quit {
            log::info!("quit requested after {} generations", simulation.generation());
            break;
        }

        simulation.tick(now);

        next_frame().await;
    }
}
