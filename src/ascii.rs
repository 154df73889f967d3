use color_eyre::{eyre::ensure, Result};

/// Maps an intensity to a ramp character by linear bucketing: integer
/// division guarantees 0 lands on the first character and 255 on the last.
pub fn map_pixel_to_char(value: u8, ramp: &[char]) -> char {
    let index = value as usize * (ramp.len() - 1) / 255;

    ramp[index]
}

/// Maps a flat row-major intensity stream to its character stream.
pub fn pixels_to_ascii(pixels: &[u8], ramp: &[char]) -> String {
    pixels
        .iter()
        .map(|&value| map_pixel_to_char(value, ramp))
        .collect()
}

/// Slices a flat character stream into rows of exactly `width` characters.
///
/// The resize stage always produces exact width x height grids, so a stream
/// that does not divide evenly means a bug upstream; refuse it rather than
/// emit a short last line that would misrender the grid.
pub fn reshape_lines(flat: &str, width: usize) -> Result<Vec<String>> {
    ensure!(width > 0, "grid width must be positive");
    ensure!(
        flat.len() % width == 0,
        "character stream of length {} does not divide into rows of {}",
        flat.len(),
        width
    );

    let chars: Vec<char> = flat.chars().collect();

    Ok(chars
        .chunks(width)
        .map(|row| row.iter().collect())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ASCII_CHARS;

    #[test]
    fn extremes_map_to_ramp_ends() {
        assert_eq!(map_pixel_to_char(0, ASCII_CHARS), ' ');
        assert_eq!(map_pixel_to_char(255, ASCII_CHARS), '4');
    }

    #[test]
    fn mapping_is_monotonic() {
        let index_of = |c: char| ASCII_CHARS.iter().position(|&r| r == c).unwrap();

        let mut previous = 0;
        for value in 0..=255u8 {
            let index = index_of(map_pixel_to_char(value, ASCII_CHARS));

            assert!(index >= previous, "index dropped at value {}", value);
            previous = index;
        }
    }

    #[test]
    fn bucket_boundaries_follow_floor_division() {
        // bucket width is 255/11, ~23.2: 23 still floors into bucket 0
        assert_eq!(map_pixel_to_char(23, ASCII_CHARS), ' ');
        assert_eq!(map_pixel_to_char(24, ASCII_CHARS), '.');
        assert_eq!(map_pixel_to_char(47, ASCII_CHARS), ':');
        assert_eq!(map_pixel_to_char(254, ASCII_CHARS), '1');
    }

    #[test]
    fn all_zero_grid_becomes_blank_lines() {
        let pixels = [0u8; 8];
        let flat = pixels_to_ascii(&pixels, ASCII_CHARS);

        assert_eq!(flat, "        ");

        let lines = reshape_lines(&flat, 4).unwrap();

        assert_eq!(lines, vec!["    ".to_string(), "    ".to_string()]);
    }

    #[test]
    fn reshape_round_trips() {
        let flat = "abcdefghijkl";
        let lines = reshape_lines(flat, 4).unwrap();

        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|line| line.len() == 4));
        assert_eq!(lines.concat(), flat);
    }

    #[test]
    fn reshape_rejects_short_last_line() {
        assert!(reshape_lines("abcde", 4).is_err());
        assert!(reshape_lines("abcd", 0).is_err());
    }
}
