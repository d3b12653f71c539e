use clap::Parser;
use rgit::audit::CommandHistory;
use rgit::cli::Cli;
use rgit::config::Config;
use rgit::git::{DryRunExecutor, Executor, GitExecutor};
use rgit::{AppResult, Reporter, Runner};
use std::io::{self, IsTerminal, Write};

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| writeln!(buf, "[{}]: {}", record.level(), record.args()))
        .init();
}

fn run(cli: Cli) -> AppResult<()> {
    // Configuration problems are fatal before anything is scanned
    let config = Config::load(cli.config.as_deref())?;
    let remote = cli.remote_spec(&config)?;
    let action = cli.command.to_action();

    let executor: Box<dyn Executor + Send> = if cli.dry_run {
        Box::new(DryRunExecutor::new())
    } else {
        Box::new(GitExecutor::new())
    };

    let mut runner = Runner::new(action, remote, executor);
    if config.behavior.log_commands && !cli.dry_run {
        match CommandHistory::new() {
            Ok(history) => runner = runner.with_history(history),
            Err(e) => log::warn!("Command history disabled: {}", e),
        }
    }

    let stdout = io::stdout();
    let color = config.output.color && !cli.no_color && stdout.is_terminal();
    let mut reporter = Reporter::new(stdout, color, config.output.path_width);

    runner.run(&cli.dir, &mut reporter)?;
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    log::debug!("Options {:?}", cli);

    let code = tokio::select! {
        finished = tokio::task::spawn_blocking(move || run(cli)) => match finished {
            Ok(Ok(())) => 0,
            Ok(Err(e)) => {
                eprintln!("Error: {}", e);
                1
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                1
            }
        },
        _ = tokio::signal::ctrl_c() => {
            // Waits for the repository block being written, then ends the line
            let mut out = io::stdout().lock();
            let _ = out.write_all(b"\n");
            let _ = out.flush();
            0
        }
    };

    std::process::exit(code);
}
