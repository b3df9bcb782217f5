use clap::Parser;
use feedreader::utils::{logger, validation::Validate};
use feedreader::{CliConfig, FeedError, FeedReader, RenderableState};

fn report(e: &FeedError) -> ! {
    tracing::error!("❌ {}", e);
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());

    let exit_code = match e {
        FeedError::HttpError(_)
        | FeedError::FeedServiceError { .. }
        | FeedError::SerializationError(_) => 2,
        _ => 1,
    };
    std::process::exit(exit_code);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting feedreader");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = cli.validate() {
        report(&e);
    }

    let config = cli.reader_config().unwrap_or_else(|e| report(&e));
    let reader = FeedReader::from_config(&config).unwrap_or_else(|e| report(&e));

    if cli.list {
        for (i, feed) in reader.feeds().await.iter().enumerate() {
            println!("{:>3}  {}  <{}>", i, feed.name, feed.url);
        }
        return Ok(());
    }

    match reader.load_feed(cli.feed).await {
        Ok(outcome) => {
            tracing::info!(
                "✅ Loaded {} entries from '{}'",
                outcome.entry_count,
                outcome.feed_name
            );
            if let Some(title) = reader.header_title().await {
                println!("# {}", title);
            }
            for entry in reader.rendered_entries().await {
                println!("- {}", entry.title);
                if !entry.link.is_empty() {
                    println!("  {}", entry.link);
                }
            }
        }
        Err(e) => report(&e),
    }

    Ok(())
}
