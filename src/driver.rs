use std::{io, io::Write, thread, time::Duration};

use log::debug;
use rand::Rng;

use crate::grid::{Grid, GridError};
use crate::render;

/// Seeds `cells` random positions alive. Hitting an already-alive cell is a
/// harmless no-op, so the live population may come out lower than `cells`.
pub fn seed_random<R: Rng>(grid: &mut Grid, rng: &mut R, cells: usize) -> Result<(), GridError> {
    for _ in 0..cells {
        let x = rng.gen_range(0..grid.width());
        let y = rng.gen_range(0..grid.height());
        grid.set_alive(x, y)?;
    }
    Ok(())
}

/// Runs the tick loop: sleep, advance one generation, display. With
/// `max_generations` of `None` the loop only ends when the process does;
/// tests pass a bound instead.
pub fn run<W: Write>(
    grid: &mut Grid,
    out: &mut W,
    tick_interval: Duration,
    max_generations: Option<u64>,
) -> io::Result<()> {
    let mut generation = 0u64;
    loop {
        if max_generations.is_some_and(|max| generation >= max) {
            return Ok(());
        }
        thread::sleep(tick_interval);
        grid.tick();
        generation += 1;
        debug!("generation {generation}");
        render::display(out, grid)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_seed_random_stays_in_bounds() {
        let mut grid = Grid::new(4, 3).unwrap();
        let mut rng = StdRng::seed_from_u64(17);
        seed_random(&mut grid, &mut rng, 100).unwrap();
        let live = grid.rows().flatten().filter(|&&c| c).count();
        assert!(live > 0);
        assert!(live <= 12);
    }

    #[test]
    fn test_run_respects_generation_bound() {
        // Two ticks bring a blinker back to its starting phase.
        let start: Grid = "   \nooo\n   ".parse().unwrap();
        let mut grid = start.clone();
        let mut out = Vec::new();
        run(&mut grid, &mut out, Duration::ZERO, Some(2)).unwrap();
        assert_eq!(grid, start);
        assert!(!out.is_empty());
    }

    #[test]
    fn test_run_zero_generations_is_a_no_op() {
        let start: Grid = "   \nooo\n   ".parse().unwrap();
        let mut grid = start.clone();
        let mut out = Vec::new();
        run(&mut grid, &mut out, Duration::ZERO, Some(0)).unwrap();
        assert_eq!(grid, start);
        assert!(out.is_empty());
    }
}
