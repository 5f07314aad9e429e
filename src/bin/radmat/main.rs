use std::error::Error;

use clap::Parser;

use radmat::{white_glow, MaterialLibrary, RadianceMaterial};

mod args;

use args::{Args, Command};

fn main() {
    env_logger::init();

    // clion needs help in trait annotation
    let args = <Args as Parser>::parse();

    if let Err(e) = run(args.command) {
        eprintln!("{e}");
        std::process::exit(-1);
    }
}

fn run(command: Command) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Render {
            library,
            minimal,
            output,
        } => {
            let library = MaterialLibrary::load_path(&library)
                .map_err(|e| format!("Could not read material library: {e}"))?;

            match output {
                Some(path) => library.write_rad_file(path, minimal)?,
                None => println!("{}", library.to_rad_string(minimal)),
            }
        }
        Command::WhiteGlow {
            name,
            json,
            minimal,
        } => {
            let glow = white_glow(name.as_deref())?;

            if json {
                println!("{}", serde_json::to_string_pretty(&glow)?);
            } else {
                println!("{}", glow.to_rad_string(minimal));
            }
        }
    }

    Ok(())
}
