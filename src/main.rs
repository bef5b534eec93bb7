use std::{error::Error, io::stdout, time::Duration};

use log::info;

mod driver;
mod grid;
mod render;

use grid::Grid;

const SEED_CELLS: usize = 1000;
const TICK_INTERVAL: Duration = Duration::from_millis(10);

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // Each cell takes two columns on screen, so halve the terminal width.
    let (cols, rows) = crossterm::terminal::size()?;
    let width = (cols / 2).max(1) as usize;
    let height = (rows.max(2) - 1) as usize;

    let mut grid = Grid::new(width, height)?;
    driver::seed_random(&mut grid, &mut rand::thread_rng(), SEED_CELLS)?;
    info!("seeded {SEED_CELLS} cells on a {width}x{height} grid");

    driver::run(&mut grid, &mut stdout(), TICK_INTERVAL, None)?;
    Ok(())
}
