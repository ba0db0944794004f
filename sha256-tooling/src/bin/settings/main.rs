use anyhow::Result;

use sha256_core::settings::SETTINGS;

fn main() -> Result<()> {
    fil_logger::init();

    println!("{:#?}", *SETTINGS);
    Ok(())
}
