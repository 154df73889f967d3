use std::{thread, time::Duration};

use color_eyre::Result;
use opencv::{prelude::*, videoio::VideoCapture};

use crate::{ascii, config::ConverterConfig, display, pipeline};

/// What a single loop iteration decided about the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopOutcome {
    Continue,
    StreamEnded,
    UserQuit,
}

pub struct FrameToAsciiConverter {
    config: ConverterConfig,
}

impl FrameToAsciiConverter {
    pub fn new(config: ConverterConfig) -> Self {
        FrameToAsciiConverter { config }
    }

    /// One capture + transform + render cycle.
    pub fn tick(&self, camera: &mut VideoCapture) -> Result<LoopOutcome> {
        let mut frame = Mat::default();
        let grabbed = camera.read(&mut frame)?;

        if !grabbed || frame.empty() {
            log::warn!("capture returned no frame, stopping");
            println!("Webcam failed");

            return Ok(LoopOutcome::StreamEnded);
        }

        let mirrored = pipeline::mirror(&frame)?;
        let resized = pipeline::resize_frame(&mirrored, &self.config)?;
        let enhanced = pipeline::enhance(&resized, &self.config)?;

        let pixels = pipeline::flat_pixels(&enhanced)?;
        let flat = ascii::pixels_to_ascii(&pixels, self.config.ramp);
        let lines = ascii::reshape_lines(&flat, enhanced.cols() as usize)?;

        display::print_grid(&lines)?;

        if self.config.show_gui {
            display::show_windows(&mirrored, &lines, &self.config)?;

            if display::quit_requested(&self.config)? {
                log::info!("quit key pressed");

                return Ok(LoopOutcome::UserQuit);
            }
        }

        Ok(LoopOutcome::Continue)
    }

    /// Blocking capture loop; returns the outcome that ended it.
    pub fn run(&self, camera: &mut VideoCapture) -> Result<LoopOutcome> {
        loop {
            let outcome = self.tick(camera)?;

            if outcome != LoopOutcome::Continue {
                return Ok(outcome);
            }

            thread::sleep(Duration::from_millis(self.config.frame_delay_ms));
        }
    }
}
