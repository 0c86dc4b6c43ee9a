use std::process;
use std::sync::Arc;

use clap::Parser;
use colored::Colorize;

use url_shortener::cli::{Cli, Commands};
use url_shortener::config::StaticConfig;
use url_shortener::errors::ShortenerError;
use url_shortener::runtime::modes::run_server;
use url_shortener::system::init_logging;

/// 默认示例配置输出路径
const DEFAULT_SAMPLE_OUTPUT: &str = "config.example.toml";

#[actix_web::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Some(Commands::GenerateConfig { output }) = &cli.command {
        let output = output.as_deref().unwrap_or(DEFAULT_SAMPLE_OUTPUT);
        if let Err(e) = StaticConfig::default().save_to_file(output) {
            eprintln!("{}", e.format_colored());
            process::exit(1);
        }
        println!("{} {}", "Sample configuration written to".green(), output);
        return;
    }

    let config = Arc::new(StaticConfig::load(cli.config.as_deref()));

    // guard 必须存活到进程结束，否则非阻塞 writer 会丢日志
    let _guard = match init_logging(&config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("{}", e.format_colored());
            process::exit(1);
        }
    };

    if let Err(e) = run_server(config).await {
        match e.downcast_ref::<ShortenerError>() {
            Some(err) => eprintln!("{}", err.format_colored()),
            None => eprintln!("{} {:#}", "Error:".red().bold(), e),
        }
        process::exit(1);
    }
}
