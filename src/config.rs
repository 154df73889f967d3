/// Characters ordered from lightest to darkest intensity.
pub const ASCII_CHARS: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@', '1', '4'];

/// All tunables for the capture/transform/render pipeline. Built once in
/// `main` and shared read-only; nothing here changes between frames.
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    /// Output width of the ASCII grid, in characters.
    pub ascii_width: i32,
    /// Also mirror the output into two highgui windows.
    pub show_gui: bool,
    /// Intensity ramp used by the pixel-to-character mapper.
    pub ramp: &'static [char],
    /// Vertical compression applied when computing the target height,
    /// compensating for the aspect ratio of a terminal character cell.
    pub vertical_compression: f64,
    /// Canny hysteresis thresholds.
    pub canny_low: f64,
    pub canny_high: f64,
    /// Linear gain/bias applied after histogram equalization.
    pub contrast_gain: f64,
    pub contrast_bias: f64,
    /// Blend weights for the edge overlay.
    pub base_weight: f64,
    pub edge_weight: f64,
    /// Geometry of the synthesized ASCII canvas window.
    pub font_scale: f64,
    pub line_height: i32,
    pub char_width: i32,
    /// Pause after each iteration, in milliseconds.
    pub frame_delay_ms: u64,
    /// Key that requests shutdown, polled via the highgui event queue.
    pub quit_key: char,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        ConverterConfig {
            ascii_width: 150,
            show_gui: true,
            ramp: ASCII_CHARS,
            vertical_compression: 0.55,
            canny_low: 100.0,
            canny_high: 200.0,
            contrast_gain: 1.5,
            contrast_bias: 0.0,
            base_weight: 0.8,
            edge_weight: 0.5,
            font_scale: 0.35,
            line_height: 12,
            char_width: 6,
            frame_delay_ms: 50,
            quit_key: 'q',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_spans_space_to_darkest() {
        assert_eq!(ASCII_CHARS.len(), 12);
        assert_eq!(ASCII_CHARS[0], ' ');
        assert_eq!(ASCII_CHARS[11], '4');
    }

    #[test]
    fn defaults_match_the_documented_constants() {
        let config = ConverterConfig::default();

        assert_eq!(config.ascii_width, 150);
        assert_eq!(config.vertical_compression, 0.55);
        assert_eq!(config.canny_low, 100.0);
        assert_eq!(config.canny_high, 200.0);
        assert_eq!(config.frame_delay_ms, 50);
    }
}
