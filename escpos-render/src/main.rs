mod config;

use anyhow::Context;
use config::Config;
use escpos_helpers::PrintJob;
use std::io::{Read, Write};
use tracing::info;

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // stdout may carry the rendered bytes, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "escpos_render=info,escpos_helpers=info".into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = Config::from_env()?.with_job_arg(std::env::args().nth(1));

    let json = match &config.job {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading print job {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading print job from stdin")?;
            buf
        }
    };

    let mut job = PrintJob::from_json(&json)?;
    if job.replacement.is_none() {
        job.replacement = config.replacement;
    }

    let builder = job.to_builder().context("rendering print job")?;
    info!(
        instructions = job.instructions.len(),
        bytes = builder.len(),
        "print job rendered"
    );

    let output = if config.base64 {
        let mut text = builder.to_base64();
        text.push('\n');
        text.into_bytes()
    } else {
        builder.build()
    };

    match &config.output {
        Some(path) => {
            std::fs::write(path, &output)
                .with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), "output written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&output)?;
            stdout.flush()?;
        }
    }

    Ok(())
}
