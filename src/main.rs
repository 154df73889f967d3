mod ascii;
mod config;
mod converter;
mod display;
mod pipeline;

use std::{fs::File, io::Write};

use color_eyre::Result;
use env_logger::Builder;
use log::LevelFilter;
use opencv::{
    prelude::*,
    videoio::{VideoCapture, CAP_ANY},
};

use config::ConverterConfig;
use converter::FrameToAsciiConverter;

fn setup_logging() -> Result<(), Box<dyn std::error::Error>> {
    let log_file = File::create("output.log")?;

    Builder::new()
        .filter(None, LevelFilter::Info)
        .format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()))
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;
    setup_logging().ok();

    let config = ConverterConfig::default();

    let mut camera = VideoCapture::new(0, CAP_ANY)?;
    if !camera.is_opened()? {
        log::error!("unable to open video capture device 0");
        println!("Webcam failed");

        return Ok(());
    }

    log::info!(
        "camera opened, rendering at {} characters wide (gui: {})",
        config.ascii_width,
        config.show_gui
    );

    let converter = FrameToAsciiConverter::new(config);
    let res = converter.run(&mut camera);

    // release the device and windows on every exit path, including errors
    camera.release().ok();
    display::close_windows().ok();

    let outcome = res?;
    log::info!("loop ended: {:?}", outcome);

    Ok(())
}
