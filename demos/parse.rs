//! An example to parse a WebSocket URL from the CLI argument.

use ws_url::WsUrl;

const USAGE: &str = "\
USAGE:
    parse [FLAGS] [--] URL

FLAGS:
    -h, --help      Prints this help
    -d, --default   Prints the default port when the URL has no explicit port

ARGS:
    <URL>           WebSocket URL (ws:// or wss://)
";

fn print_help() {
    eprintln!("{}", USAGE);
}

fn help_and_exit() -> ! {
    print_help();
    std::process::exit(1);
}

fn die(msg: impl std::fmt::Display) -> ! {
    eprintln!("ERROR: {}", msg);
    eprintln!();
    print_help();
    std::process::exit(1);
}

/// CLI options.
#[derive(Default, Debug, Clone)]
struct CliOpt {
    /// URL.
    url: String,
    /// Whether to fall back to the default port.
    default_port: bool,
}

impl CliOpt {
    fn parse() -> Self {
        let mut args = std::env::args();
        // Skip `argv[0]`.
        args.next();

        let mut url = None;
        let mut default_port = false;

        for arg in args.by_ref() {
            match arg.as_str() {
                "--default" | "-d" => default_port = true,
                "--help" | "-h" => help_and_exit(),
                "--" => break,
                opt if opt.starts_with('-') => die(format_args!("Unknown option: {}", opt)),
                _ => {
                    if url.replace(arg).is_some() {
                        die("URL can be specified at most once");
                    }
                }
            }
        }

        for arg in args {
            if url.replace(arg).is_some() {
                die("URL can be specified at most once");
            }
        }

        let url = url.unwrap_or_else(|| die("URL should be specified"));
        Self { url, default_port }
    }
}

fn main() {
    let opt = CliOpt::parse();

    let url = match WsUrl::parse(&opt.url) {
        Ok(v) => v,
        Err(e) => die(format_args!("Failed to parse {:?}: {}", opt.url, e)),
    };
    println!("Successfully parsed: {:?}", url);

    println!("secure: {}", url.is_secure());
    println!("host:   {}", url.host());
    match (url.port(), opt.default_port) {
        (Some(port), _) => println!("port:   {}", port),
        (None, true) => println!("port:   {} (default)", url.port_or_default()),
        (None, false) => println!("port:   (none)"),
    }
    match url.path() {
        Some(path) => println!("path:   {}", path),
        None => println!("path:   (none)"),
    }
    match url.query() {
        Some(query) => println!("query:  {}", query),
        None => println!("query:  (none)"),
    }
}
