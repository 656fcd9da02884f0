mod cache;
mod cli;
mod server;

use std::borrow::Cow;
use std::io::{self, Read};
use std::path::Path;
use std::{env, fs, process, sync::Arc};

use anyhow::{ensure, Context, Result};
use env_logger::Env;
use event_adder_parser::{Encoding, LinkBuilder, Page};
use log::{info, warn};
use tokio::{net::TcpListener, signal};

use crate::cache::{Config, PageCache};
use crate::server::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("event_adder=info")).init();

    let args = cli::parse(env::args().skip(1).collect());

    if let Some(path) = args.print {
        if !print_links(&path, args.encoding)? {
            process::exit(1);
        }
        return Ok(());
    }

    ensure!(
        !args.upstreams.is_empty(),
        "At least one --upstream host is required to serve"
    );

    let state = Arc::new(AppState {
        cache: PageCache::new(Config {
            enabled: args.enable_cache,
            ttl: args.cache_ttl,
        }),
        encoding: args.encoding,
        upstreams: args.upstreams,
    });

    let listener = TcpListener::bind(args.address)
        .await
        .with_context(|| format!("Failed to bind {}", args.address))?;
    info!("Listening at http://{}", args.address);

    axum::serve(listener, server::router(state))
        .with_graceful_shutdown(async {
            signal::ctrl_c().await.ok();
            info!("Shutting down");
        })
        .await?;

    Ok(())
}

/// Prints one link per trigger, line breaks from untrimmed text escaped. Returns whether every link could be built.
fn print_links(path: &Path, encoding: Encoding) -> Result<bool> {
    let html = if path == Path::new("-") {
        let mut html = String::new();
        io::stdin()
            .read_to_string(&mut html)
            .context("Failed to read stdin")?;
        html
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?
    };

    let links = LinkBuilder::new().encoding(encoding);
    let mut ok = true;

    for (index, (event, link)) in Page::parse(html).click_all(&links).into_iter().enumerate() {
        match link {
            Ok(link) => println!("{}", single_line(&link)),
            Err(err) => {
                warn!("trigger {index} ({:?}): {err}", event.title);
                ok = false;
            }
        }
    }

    Ok(ok)
}

fn single_line(link: &str) -> Cow<'_, str> {
    if !link.contains(['\r', '\n']) {
        return Cow::Borrowed(link);
    }

    Cow::Owned(link.replace('\r', "%0D").replace('\n', "%0A"))
}
