//! Block grid layout

use glam::Vec2;

use super::rect::Rect;
use crate::config::Config;

/// Rects of the full block grid, row by row from the top
///
/// Column `j` sits at `j * (width + gap) + margin`; row `i` sits
/// `i * (height + gap)` below the anchor.
pub fn block_grid(config: &Config) -> Vec<Rect> {
    let size = config.block_size;
    let mut rects = Vec::with_capacity(config.block_count());

    for row in 0..config.block_rows {
        let y = config.block_anchor_y - row as f32 * (size.y + config.block_gap);
        for col in 0..config.block_cols {
            let x = col as f32 * (size.x + config.block_gap) + config.block_margin;
            rects.push(Rect::new(Vec2::new(x, y), size));
        }
    }

    rects
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid_positions() {
        let grid = block_grid(&Config::default());
        assert_eq!(grid.len(), 45);

        // Top-left block
        assert_eq!(grid[0].pos, Vec2::new(10.0, 340.0));
        // Top-right block
        assert_eq!(grid[8].pos, Vec2::new(490.0, 340.0));
        // Bottom-left block
        assert_eq!(grid[36].pos, Vec2::new(10.0, 220.0));
        // Bottom-right block
        assert_eq!(grid[44].pos, Vec2::new(490.0, 220.0));
    }

    #[test]
    fn test_default_grid_fits_playfield() {
        let config = Config::default();
        for rect in block_grid(&config) {
            assert!(rect.inside(config.playfield), "{:?} outside playfield", rect);
        }
    }

    #[test]
    fn test_blocks_do_not_overlap() {
        let grid = block_grid(&Config::default());
        for (i, a) in grid.iter().enumerate() {
            for b in &grid[i + 1..] {
                assert!(!a.overlaps(b));
            }
        }
    }

    #[test]
    fn test_custom_grid_size() {
        let config = Config {
            block_rows: 2,
            block_cols: 3,
            ..Config::default()
        };
        assert_eq!(block_grid(&config).len(), 6);
    }
}
