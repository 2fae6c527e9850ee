use quicker_appicon::{config, logger};

fn main() {
    logger::init();

    let out_dir = config::default_output_dir();
    match quicker_appicon::write_icons(out_dir) {
        Ok(count) => println!("Wrote {} files to {}", count, out_dir.display()),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
