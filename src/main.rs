use clap::Parser;

use fincalc::cli::{Cli, Command, render_calculation, render_ranges};
use fincalc::logging::init_cli_logger;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    let rendered = match cli.command {
        Command::Serve(args) => {
            if let Err(e) = fincalc::api::run_http_server(args.port).await {
                tracing::error!(error = %e, "server error");
                std::process::exit(1);
            }
            return;
        }
        Command::Ranges(args) => render_ranges(args),
        Command::Calc(command) => render_calculation(command),
    };

    match rendered {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
