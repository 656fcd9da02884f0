use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process;

use event_adder_parser::Encoding;
use getopts::{Matches, Options};
use tokio::time::Duration;

#[derive(Debug)]
pub struct Args {
    pub address: SocketAddr,
    pub enable_cache: bool,
    pub cache_ttl: Duration,
    pub encoding: Encoding,
    pub print: Option<PathBuf>,
    pub upstreams: Vec<String>,
}

fn opts() -> Options {
    let mut opts = Options::new();
    opts.optflag(
        "h",
        "help",
        concat!("Print the help output of ", env!("CARGO_PKG_NAME")),
    );
    opts.optopt(
        "a",
        "address",
        "Socket address (IP and port) to listen on [Default: 127.0.0.1:8080]",
        "SOCKET_ADDRESS",
    );
    opts.optflag(
        "c",
        "enable-cache",
        "Enable caching of fetched pages [Default: false]",
    );
    opts.optopt(
        "t",
        "cache-ttl",
        "Time-to-live for cached pages [Default: 3600]",
        "SECONDS",
    );
    opts.optmulti(
        "u",
        "upstream",
        "Host the server may fetch pages from, repeatable [Required when serving]",
        "HOST",
    );
    opts.optflag(
        "e",
        "encode",
        "Percent-encode event fields in generated links [Default: false]",
    );
    opts.optopt(
        "p",
        "print",
        "Print the link of every add-event trigger in FILE ('-' for stdin) and exit",
        "FILE",
    );
    opts
}

pub fn parse(args: Vec<String>) -> Args {
    let opts = opts();

    let matches = match opts.parse(args) {
        Ok(matches) => matches,
        Err(fail) => {
            eprintln!("{fail}");
            process::exit(1);
        }
    };

    if matches.opt_present("help") {
        println!("{}", opts.usage(&opts.short_usage(env!("CARGO_PKG_NAME"))));
        process::exit(0);
    }

    match from_matches(&matches) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn from_matches(matches: &Matches) -> Result<Args, String> {
    let address = matches
        .opt_get_default("address", SocketAddr::from(([127, 0, 0, 1], 8080)))
        .map_err(|err| format!("Provided value for option 'address' is invalid: {err}"))?;

    let cache_ttl = matches
        .opt_get_default("cache-ttl", 3600)
        .map(Duration::from_secs)
        .map_err(|err| format!("Provided value for option 'cache-ttl' is invalid: {err}"))?;

    let encoding = if matches.opt_present("encode") {
        Encoding::Percent
    } else {
        Encoding::Raw
    };

    Ok(Args {
        address,
        enable_cache: matches.opt_present("enable-cache"),
        cache_ttl,
        encoding,
        print: matches.opt_str("print").map(PathBuf::from),
        upstreams: matches
            .opt_strs("upstream")
            .into_iter()
            .map(|host| host.to_ascii_lowercase())
            .collect(),
    })
}
