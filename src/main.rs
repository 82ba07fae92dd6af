use anyhow::Context;
use clap::Parser;
use fpga_scaffold::core::RequestSource;
use fpga_scaffold::utils::logger;
use fpga_scaffold::{
    CliConfig, InputCollector, ScaffoldEngine, ScaffoldError, Settings, TerminalPrompt,
};
use std::io::{self, IsTerminal};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("🚀 Starting fpga-scaffold");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        let exit_code = match e.downcast_ref::<ScaffoldError>() {
            Some(ScaffoldError::Aborted) => {
                println!();
                println!("Aborted, nothing was written.");
                ScaffoldError::Aborted.exit_code()
            }
            Some(err) => {
                tracing::error!("❌ {} failed: {:#}", err.stage(), e);
                tracing::error!("💡 Suggestion: {}", err.recovery_suggestion());
                eprintln!("❌ {}", err.user_friendly_message());
                eprintln!("💡 {}", err.recovery_suggestion());
                err.exit_code()
            }
            None => {
                tracing::error!("❌ {:#}", e);
                eprintln!("❌ {:#}", e);
                1
            }
        };
        std::process::exit(exit_code);
    }
}

fn run(config: &CliConfig) -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("cannot determine the current directory")?;
    let settings = config.settings(&cwd)?;
    let engine = ScaffoldEngine::new(settings);

    // 互動終端使用 dialoguer；輸入被導向時逐行讀取
    if io::stdin().is_terminal() {
        scaffold(&engine, &mut TerminalPrompt::new(), config.dry_run)
    } else {
        tracing::debug!("stdin is not a terminal, reading answers line by line");
        let stdin = io::stdin();
        let mut collector = InputCollector::new(stdin.lock(), io::stdout());
        scaffold(&engine, &mut collector, config.dry_run)
    }
}

fn scaffold<S: RequestSource>(
    engine: &ScaffoldEngine<Settings>,
    source: &mut S,
    dry_run: bool,
) -> anyhow::Result<()> {
    if dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be written");
        let plan = engine.plan(source)?;
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    let outcome = engine.run(source)?;

    println!("✅ Project '{}' created", outcome.request.name);
    println!("📁 Project root: {}", outcome.project_root.display());
    println!("📌 Constraints:  {}", outcome.constraints_file.display());
    println!(
        "📜 Tcl script:   {} ({} lines)",
        outcome.script_path.display(),
        outcome.script_lines
    );
    println!(
        "💡 In Vivado's Tcl console run: source {}",
        outcome.script_path.to_string_lossy().replace('\\', "/")
    );

    Ok(())
}
