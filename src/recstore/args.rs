use clap::Parser;
use recstore::config::Arguments;
use std::ffi::OsString;

/// Long flags that may also be written with a single dash (`-fileName=db.json`).
const LONG_FLAGS: &[&str] = &[
    "operation",
    "fileName",
    "item",
    "id",
    "verbose",
    "help",
    "version",
];

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "recstore", bin_name = "recstore", version = get_version())]
#[command(args_override_self = true)]
#[command(about = "Manage user records stored as a JSON array in a file", long_about = None)]
pub struct Cli {
    /// Operation to be performed: add, list, findById or remove
    #[arg(long = "operation", default_value = "", hide_default_value = true)]
    pub operation: String,

    /// File name with user data (created if missing)
    #[arg(long = "fileName", default_value = "", hide_default_value = true)]
    pub file_name: String,

    /// Item to be created, as a JSON object
    #[arg(long = "item", default_value = "", hide_default_value = true)]
    pub item: String,

    /// Person id
    #[arg(
        long = "id",
        default_value = "",
        hide_default_value = true,
        allow_hyphen_values = true
    )]
    pub id: String,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse the process arguments, accepting single-dash long flags.
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }
}

impl From<Cli> for Arguments {
    fn from(cli: Cli) -> Self {
        Arguments {
            operation: cli.operation,
            file_name: cli.file_name,
            item: cli.item,
            id: cli.id,
        }
    }
}

/// Rewrite `-name` / `-name=value` into `--name` / `--name=value` for the known
/// long flags. Everything after a bare `--` is left alone, and so is the
/// program name.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .enumerate()
        .map(|(i, arg)| {
            if i == 0 || passthrough {
                return arg;
            }
            if arg == "--" {
                passthrough = true;
                return arg;
            }
            match arg.to_str() {
                Some(s) if is_single_dash_long(s) => OsString::from(format!("-{}", s)),
                _ => arg,
            }
        })
        .collect()
}

fn is_single_dash_long(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    if rest.starts_with('-') {
        return false;
    }
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    LONG_FLAGS.contains(&name)
}
