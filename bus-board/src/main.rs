use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use bus_board::board::{
    BoardError, BoardReport, DEFAULT_RADIUS_METERS, DEFAULT_STOP_LIMIT, Pipeline, RunParameters,
};
use bus_board::postcodes::{GeocoderClient, GeocoderConfig};
use bus_board::tfl::{TflClient, TflConfig};

/// Upcoming bus arrivals at the stops nearest a UK postcode.
#[derive(Debug, Parser)]
#[command(name = "bus-board", version)]
struct Cli {
    /// Postcode to search around. Prompted for when omitted.
    postcode: Option<String>,

    /// Search radius in meters.
    #[arg(short, long, default_value_t = DEFAULT_RADIUS_METERS)]
    radius: u32,

    /// Maximum number of stops to show.
    #[arg(short = 'n', long = "stops", default_value_t = DEFAULT_STOP_LIMIT)]
    stops: usize,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// Override the postcodes.io base URL.
    #[arg(long, env = "BUS_BOARD_POSTCODES_URL")]
    postcodes_url: Option<String>,

    /// Override the TfL API base URL.
    #[arg(long, env = "BUS_BOARD_TFL_URL")]
    tfl_url: Option<String>,

    /// Log requests and pipeline decisions to stderr.
    #[arg(short, long)]
    verbose: bool,
}

/// Failures that end the process.
#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error("could not read postcode: {0}")]
    Input(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Board(#[from] BoardError),
}

impl AppError {
    fn exit_code(&self) -> u8 {
        match self {
            AppError::Input(_) | AppError::Config(_) => 1,
            AppError::Board(BoardError::InvalidParameters(_)) => 1,
            AppError::Board(BoardError::NotFound { .. } | BoardError::NoStopsFound { .. }) => 2,
            AppError::Board(_) => 3,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "bus_board=debug"
    } else {
        "bus_board=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

/// Ask for a postcode on stdin.
async fn prompt_postcode() -> Result<String, AppError> {
    print!("Enter a postcode: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut line)
        .await?;
    Ok(line)
}

async fn run(cli: Cli) -> Result<BoardReport, AppError> {
    let postcode = match cli.postcode {
        Some(postcode) => postcode,
        None => prompt_postcode().await?,
    };

    let params = RunParameters::new(postcode)
        .with_radius(cli.radius)
        .with_stop_limit(cli.stops);
    params.validate()?;
    debug!(?params, "starting run");

    let mut geocoder_config = GeocoderConfig::new().with_timeout(cli.timeout);
    if let Some(url) = cli.postcodes_url {
        geocoder_config = geocoder_config.with_base_url(url);
    }
    let geocoder =
        GeocoderClient::new(geocoder_config).map_err(|e| AppError::Config(e.to_string()))?;

    let mut tfl_config = TflConfig::new().with_timeout(cli.timeout);
    if let Some(url) = cli.tfl_url {
        tfl_config = tfl_config.with_base_url(url);
    }
    let tfl = TflClient::new(tfl_config).map_err(|e| AppError::Config(e.to_string()))?;

    let report = Pipeline::new(&geocoder, &tfl, &tfl).run(&params).await?;
    Ok(report)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!(error = ?e, "run failed");
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
