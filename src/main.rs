use papirs_commands::{demo, Status};

fn main() -> anyhow::Result<()> {
    {
        let level = if cfg!(debug_assertions) {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Info
        };
        env_logger::Builder::new()
            .filter_level(level)
            .parse_default_env()
            .init();
    }

    let print = |status: Status| println!("{}", status);

    log::debug!("running the shapes demo...");
    demo::shapes(print)?;

    log::debug!("running the rectangle demo...");
    demo::rectangle(print)?;

    Ok(())
}
