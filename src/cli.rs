use bangumi_client::bangumi::{Pagination, SearchOptions, SortOrder, SubjectType};
use bangumi_client::constants::pagination::{DEFAULT_LIMIT, DEFAULT_OFFSET, LISTING_LIMIT};
use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Bangumi (bgm.tv) catalog client
///
/// Queries the daily broadcast calendar, subject details, comments and
/// search, and prints the API's JSON response to stdout.
#[derive(Parser, Debug)]
#[command(about, version, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Also write logs to stderr. Without this flag logs only go to the log file.
    #[arg(long = "debug", global = true, help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", global = true, help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the daily broadcast schedule
    Calendar,

    /// Show details for a subject
    Subject {
        /// Subject ID
        id: u64,
    },

    /// Show comments for a subject
    Comments {
        /// Subject ID
        id: u64,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Search subjects by keyword
    Search {
        keyword: String,

        /// Result ordering
        #[arg(long, value_enum, default_value_t = SortArg::Match)]
        sort: SortArg,

        /// Subject category code (1 book, 2 anime, 3 music, 4 game, 6 real). Repeatable.
        #[arg(long = "type", value_name = "CODE", value_parser = parse_subject_type)]
        types: Vec<SubjectType>,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Anime airing this season and last, sorted by heat
    Popular {
        #[command(flatten)]
        page: ListingPageArgs,
    },

    /// Ranked anime sorted by score
    TopRated {
        #[command(flatten)]
        page: ListingPageArgs,
    },

    /// Print the start date of the current season window
    Season,

    /// Show or change configuration
    Config(ConfigArgs),
}

#[derive(ClapArgs, Debug, Clone, Copy)]
pub struct PageArgs {
    /// Number of results to return
    #[arg(long, default_value_t = DEFAULT_LIMIT, value_parser = clap::value_parser!(u32).range(1..))]
    pub limit: u32,

    /// Number of results to skip
    #[arg(long, default_value_t = DEFAULT_OFFSET)]
    pub offset: u32,
}

#[derive(ClapArgs, Debug, Clone, Copy)]
pub struct ListingPageArgs {
    /// Number of results to return
    #[arg(long, default_value_t = LISTING_LIMIT, value_parser = clap::value_parser!(u32).range(1..))]
    pub limit: u32,

    /// Number of results to skip
    #[arg(long, default_value_t = DEFAULT_OFFSET)]
    pub offset: u32,
}

impl From<PageArgs> for Pagination {
    fn from(args: PageArgs) -> Self {
        Pagination::new(args.limit, args.offset)
    }
}

impl From<ListingPageArgs> for Pagination {
    fn from(args: ListingPageArgs) -> Self {
        Pagination::new(args.limit, args.offset)
    }
}

#[derive(ClapArgs, Debug)]
pub struct ConfigArgs {
    /// List current configuration settings
    #[arg(long = "list", short = 'l')]
    pub list: bool,

    /// Set a persistent custom log file location
    #[arg(long = "set-log-file", value_name = "PATH")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path and revert to the default location
    #[arg(long = "clear-log-file", conflicts_with = "new_log_file_path")]
    pub clear_log_file_path: bool,

    /// Set the HTTP timeout in seconds
    #[arg(long = "set-timeout", value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..))]
    pub new_http_timeout: Option<u64>,
}

impl ConfigArgs {
    pub fn has_updates(&self) -> bool {
        self.new_log_file_path.is_some() || self.clear_log_file_path || self.new_http_timeout.is_some()
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortArg {
    Match,
    Heat,
    Rank,
    Score,
}

impl From<SortArg> for SortOrder {
    fn from(sort: SortArg) -> Self {
        match sort {
            SortArg::Match => SortOrder::Match,
            SortArg::Heat => SortOrder::Heat,
            SortArg::Rank => SortOrder::Rank,
            SortArg::Score => SortOrder::Score,
        }
    }
}

fn parse_subject_type(value: &str) -> Result<SubjectType, String> {
    let code: u8 = value
        .parse()
        .map_err(|_| format!("'{value}' is not a category code"))?;
    SubjectType::from_code(code).ok_or_else(|| format!("unknown category code {code}"))
}

/// Builds search options from the `search` subcommand flags.
/// No `--type` flag means the default anime category.
pub fn search_options(sort: SortArg, types: &[SubjectType], page: PageArgs) -> SearchOptions {
    let mut options = SearchOptions {
        sort: sort.into(),
        pagination: page.into(),
        ..Default::default()
    };
    if !types.is_empty() {
        options.subject_types = types.to_vec();
    }
    options
}
