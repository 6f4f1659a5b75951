use clap::Parser;
use std::io::Write;
use tdd_drills::utils::{logger, validation::Validate};
use tdd_drills::{
    checked_sum, countdown, countdown_fixed, countdown_with, CliConfig, Command, CountdownArgs,
    CountdownSettings, DefaultSleeper, DrillError, DrillsConfig, SumArgs, TokioSleeper, Variant,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting tdd-drills");
    tracing::debug!("CLI config: {:?}", config);

    let result = match &config.command {
        None => run_default(),
        Some(Command::Countdown(args)) => run_countdown(args).await,
        Some(Command::Sum(args)) => run_sum(args),
    };

    if let Err(e) = result {
        tracing::error!("❌ {} (Severity: {:?})", e, e.severity());
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = e.exit_code();
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

/// Both countdowns back to back, as the drill was first written.
fn run_default() -> Result<(), DrillError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    countdown(&mut out)?;
    writeln!(out)?;

    countdown_with(&mut out, &mut DefaultSleeper::default())?;
    writeln!(out)?;

    Ok(())
}

async fn run_countdown(args: &CountdownArgs) -> Result<(), DrillError> {
    let file = args
        .config
        .as_ref()
        .map(DrillsConfig::from_file)
        .transpose()?;
    let settings = CountdownSettings::resolve(file.as_ref(), args.overrides());
    settings.validate()?;
    tracing::debug!("Countdown settings: {:?}", settings);

    if args.variant != Variant::Injected {
        if settings != CountdownSettings::default() {
            tracing::warn!(
                "⚠️ {:?} variant always counts 3,2,1,Go! with a one second pause; settings ignored",
                args.variant
            );
        }
        if args.run_async {
            tracing::warn!("⚠️ --async only applies to the injected variant");
        }
    }

    match args.variant {
        Variant::Fixed => countdown_fixed()?,
        Variant::Writer => {
            let stdout = std::io::stdout();
            countdown(&mut stdout.lock())?;
        }
        Variant::Injected if args.run_async => {
            let mut out = tokio::io::stdout();
            let mut sleeper = TokioSleeper::new(settings.pause());
            settings.countdown().run_async(&mut out, &mut sleeper).await?;
        }
        Variant::Injected => {
            let stdout = std::io::stdout();
            let mut sleeper = DefaultSleeper::new(settings.pause());
            settings.countdown().run(&mut stdout.lock(), &mut sleeper)?;
        }
    }

    println!();
    Ok(())
}

fn run_sum(args: &SumArgs) -> Result<(), DrillError> {
    let total = checked_sum(&args.numbers)?;
    tracing::debug!("Summed {} numbers", args.numbers.len());
    println!("{}", total);
    Ok(())
}
