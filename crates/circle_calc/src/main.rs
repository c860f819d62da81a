use circle_calc::{RADII, render};

fn main() -> eyre::Result<()> {
    env_logger::init();

    log::info!("circle formulas for radii {RADII:?}");

    let stdout = std::io::stdout();
    render(&mut stdout.lock(), &RADII)?;

    log::info!("terminated.");

    Ok(())
}
