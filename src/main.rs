use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use macroquad::prelude::*;
use tracing::info;

use life_engine::{Simulation, SimulationConfig, input, rendering, ui};

#[derive(Parser, Debug)]
#[command(name = "life", version, about = "Conway's Game of Life on a fixed grid")]
struct Cli {
    /// JSON config file; flags below override its values.
    #[arg(long, env = "LIFE_CONFIG")]
    config: Option<PathBuf>,
    #[arg(long)]
    rows: Option<usize>,
    #[arg(long)]
    cols: Option<usize>,
    /// Delay between generations in milliseconds.
    #[arg(long)]
    tick_ms: Option<u64>,
    /// Chance that Random makes a cell alive.
    #[arg(long)]
    birth_probability: Option<f64>,
    /// Seed for Random, for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn simulation_config(&self) -> Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::load(path)?,
            None => SimulationConfig::default(),
        };
        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.cols = cols;
        }
        if let Some(ms) = self.tick_ms {
            config.tick_delay = Duration::from_millis(ms);
        }
        if let Some(p) = self.birth_probability {
            config.birth_probability = p;
        }
        config.validate()?;
        Ok(config)
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = cli.simulation_config()?;
    let sim = match cli.seed {
        Some(seed) => Simulation::with_seed(config, seed)?,
        None => Simulation::new(config)?,
    };
    info!(
        rows = sim.config().rows,
        cols = sim.config().cols,
        tick_ms = sim.config().tick_delay.as_millis() as u64,
        "starting Game of Life"
    );

    let (window_width, window_height) = ui::window_size(sim.config().rows, sim.config().cols);
    let conf = Conf {
        window_title: "The Game of Life".to_owned(),
        window_width,
        window_height,
        window_resizable: false,
        ..Default::default()
    };
    macroquad::Window::from_config(conf, run(sim));
    Ok(())
}

async fn run(mut sim: Simulation) {
    let mut stamped = None;
    loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons(sim.is_running());

        input::process_button_clicks(&mut sim, &buttons, mouse_pos);
        input::handle_cell_click(&mut sim, mouse_pos);
        if let Some(pattern) = input::process_keyboard_input(&mut sim) {
            stamped = Some(pattern);
        }

        sim.advance(Duration::from_secs_f32(get_frame_time()));

        clear_background(Color::from_rgba(40, 40, 40, 255));
        let grid = sim.grid();
        rendering::draw_grid(&grid);
        rendering::draw_controls(&sim, &grid, stamped.as_ref(), &buttons, mouse_pos);

        next_frame().await;
    }
}
