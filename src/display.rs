use std::io::{self, Write};

use color_eyre::Result;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use opencv::{core, highgui, imgproc, prelude::*};

use crate::config::ConverterConfig;

pub const ORIGINAL_WINDOW: &str = "Webcam Original";
pub const ASCII_WINDOW: &str = "ASCII Art";

/// Clears the terminal and prints the grid top-left. crossterm issues the
/// right clear mechanism for the host console, so there is no platform split
/// to maintain here.
pub fn print_grid(lines: &[String]) -> Result<()> {
    let mut stdout = io::stdout();

    execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
    writeln!(stdout, "{}", lines.join("\n"))?;
    stdout.flush()?;

    Ok(())
}

/// Draws each grid row as text onto a black canvas, one row per line pitch.
pub fn render_ascii_canvas(lines: &[String], config: &ConverterConfig) -> Result<Mat> {
    let size = core::Size::new(
        config.ascii_width * config.char_width,
        lines.len() as i32 * config.line_height,
    );
    let mut canvas =
        Mat::new_size_with_default(size, core::CV_8UC3, core::Scalar::all(0.0))?;
    let color = core::Scalar::new(255.0, 255.0, 255.0, 0.0);

    for (i, line) in lines.iter().enumerate() {
        imgproc::put_text(
            &mut canvas,
            line,
            core::Point::new(5, (i as i32 + 1) * config.line_height),
            imgproc::FONT_HERSHEY_PLAIN,
            config.font_scale,
            color,
            1,
            imgproc::LINE_8,
            false,
        )?;
    }

    Ok(canvas)
}

/// Refreshes the two preview windows with the raw frame and the synthesized
/// ASCII canvas.
pub fn show_windows(frame: &Mat, lines: &[String], config: &ConverterConfig) -> Result<()> {
    highgui::imshow(ORIGINAL_WINDOW, frame)?;

    let canvas = render_ascii_canvas(lines, config)?;
    highgui::imshow(ASCII_WINDOW, &canvas)?;

    Ok(())
}

/// Pumps the highgui event queue and reports whether the quit key was seen.
/// Must run every iteration even without a key check, or the windows never
/// repaint.
pub fn quit_requested(config: &ConverterConfig) -> Result<bool> {
    let key = highgui::wait_key(1)?;

    Ok(key >= 0 && (key & 0xFF) == config.quit_key as i32)
}

pub fn close_windows() -> Result<()> {
    highgui::destroy_all_windows()?;

    Ok(())
}
