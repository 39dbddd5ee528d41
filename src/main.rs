use clap::Parser;
use levain_calc::core::selftest;
use levain_calc::utils::{logger, validation::Validate};
use levain_calc::{CliConfig, Formulas, LevainError, Outcome, Session, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting levain");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        fail(&e);
    }

    if config.test {
        run_self_test()?;
        return Ok(());
    }

    // 載入設定檔
    let config_path = config.config_path();
    let settings = match Settings::from_file(&config_path) {
        Ok(settings) => settings,
        Err(e) => fail(&e),
    };

    let formulas = Formulas::from_provider(&settings);
    let scripted = config.is_scripted();
    let mode = config.mode();
    let presets = config.presets();
    let format = config.format;

    let session = tokio::task::spawn_blocking(move || {
        let input = std::io::stdin().lock();
        let output = std::io::stdout().lock();
        Session::new(formulas, input, output)
            .with_presets(presets)
            .with_format(format)
            .run(mode)
    });

    let outcome = tokio::select! {
        joined = session => joined?,
        signal = tokio::signal::ctrl_c() => {
            if let Err(e) = signal {
                tracing::error!("Signal handling failed: {}", e);
            }
            tracing::info!("Interrupted by Ctrl+C");
            println!();
            std::process::exit(0);
        }
    };

    match outcome {
        Ok(Outcome::Infeasible) if scripted => std::process::exit(2),
        Ok(outcome) => tracing::debug!(?outcome, "session finished"),
        Err(LevainError::Interrupted) => {
            tracing::info!("Input closed");
            println!();
        }
        Err(e) => fail(&e),
    }

    Ok(())
}

fn run_self_test() -> anyhow::Result<()> {
    let report = selftest::run_examples()?;
    for outcome in &report.outcomes {
        let status = if outcome.passed() { "ok" } else { "FAILED" };
        println!("{} ... {}", outcome.name, status);
        if !outcome.passed() {
            println!("    expected {:?}", outcome.expected);
            println!("    got      {:?}", outcome.actual);
        }
    }
    println!(
        "{} examples, {} failed",
        report.outcomes.len(),
        report.failures()
    );

    if !report.passed() {
        std::process::exit(1);
    }
    Ok(())
}

fn fail(e: &LevainError) -> ! {
    tracing::error!("❌ {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
