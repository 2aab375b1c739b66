use clap::Parser;
use fiber_laser::{
    console::{Args, PartialArgs},
    error::FlResult,
    reporting::AnalysisReport,
    LaserSetup,
};

fn main() -> FlResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    //parse CLI arguments
    let args = Args::try_from(PartialArgs::parse())?;

    let setup = match &args.setup_path {
        Some(path) => LaserSetup::from_file(path)?,
        None => LaserSetup::default(),
    };
    if args.check {
        setup.check();
    }

    let system = setup.build();
    let result = system.operate();
    println!("{}", result.message(args.language));

    if let Some(report_path) = &args.report_path {
        AnalysisReport::new(&setup, &system, result).save_to_file(report_path)?;
    }
    Ok(())
}
