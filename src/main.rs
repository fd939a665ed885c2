use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::runtime::Runtime;
use tracing::info;
use url::Url;

use medal_count::config::{ClientSettings, Settings};
use medal_count::export::{standings_json, standings_text};
use medal_count::{
    events, logging, server, ui, App, DataSource, FetchResult, FileSource, HttpSource, Location,
    MedalClient, SortKey, Theme, ThemeStore,
};

#[derive(Parser, Debug)]
#[command(name = "medal-count")]
#[command(about = "Olympic medal standings: mock medal API and terminal table")]
struct Cli {
    /// Configuration file (TOML). Defaults to ./medal-count.toml if present.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the mock medal API and HTML standings page
    Serve(ServeArgs),
    /// Show the standings in an interactive terminal table (default)
    View(ViewArgs),
    /// Fetch once and print the standings
    Standings(StandingsArgs),
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// Address to bind
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Static JSON file with the medal data
    #[arg(short, long)]
    data_file: Option<PathBuf>,
}

/// Where the medal data comes from.
#[derive(Args, Debug, Default)]
struct SourceArgs {
    /// Medal API endpoint
    #[arg(long, conflicts_with = "file")]
    endpoint: Option<String>,

    /// Read a medal JSON file directly instead of calling the API
    #[arg(short, long)]
    file: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
struct ViewArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Starting location, a full URL or a query such as '?sort=total'
    #[arg(short, long)]
    location: Option<String>,

    /// Write logs to this file (the terminal is used by the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct StandingsArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Column to rank by: gold, silver, bronze, or total
    #[arg(short, long, default_value = "gold")]
    sort: SortKey,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::View(ViewArgs::default())) {
        Command::Serve(args) => run_serve(settings, args),
        Command::View(args) => run_view(settings, args),
        Command::Standings(args) => run_standings(settings, args),
    }
}

fn run_serve(mut settings: Settings, args: ServeArgs) -> Result<()> {
    logging::init_stderr();

    if let Some(host) = args.host {
        settings.server.host = host;
    }
    if let Some(port) = args.port {
        settings.server.port = port;
    }
    if let Some(data_file) = args.data_file {
        settings.server.data_file = data_file;
    }

    let rt = Runtime::new()?;
    rt.block_on(server::serve(&settings.server))
}

/// Build the medal client from settings, with an optional endpoint override.
fn medal_client(client: &ClientSettings, endpoint: Option<&str>) -> Result<MedalClient> {
    let endpoint = endpoint.unwrap_or(&client.endpoint);
    let url = Url::parse(endpoint).with_context(|| format!("invalid endpoint: {}", endpoint))?;
    let medal_client = MedalClient::new(url, Duration::from_millis(client.timeout_ms))
        .context("failed to build HTTP client")?
        .with_delay(Duration::from_millis(client.delay_ms));
    Ok(medal_client)
}

fn run_standings(settings: Settings, args: StandingsArgs) -> Result<()> {
    logging::init_stderr();

    let result: FetchResult = match args.source.file {
        Some(ref path) => {
            let mut source = FileSource::new(path);
            source.request();
            source
                .poll()
                .context("file source produced no result")?
        }
        None => {
            let client = medal_client(&settings.client, args.source.endpoint.as_deref())?;
            let rt = Runtime::new()?;
            rt.block_on(client.fetch())
        }
    };

    let medals = result.map_err(|e| anyhow::anyhow!(e.user_message()))?;
    info!(countries = medals.len(), sort = %args.sort, "fetched standings");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&standings_json(&medals, args.sort))?);
    } else {
        print!("{}", standings_text(&medals, args.sort));
    }
    Ok(())
}

fn run_view(settings: Settings, args: ViewArgs) -> Result<()> {
    if let Some(path) = args.log_file.as_ref().or(settings.ui.log_file.as_ref()) {
        logging::init_file(path)?;
    }

    let base = Url::parse(&settings.ui.base_url)
        .with_context(|| format!("invalid base URL: {}", settings.ui.base_url))?;
    let location = match args.location.as_deref() {
        Some(input) => Location::parse(input, &base)
            .with_context(|| format!("invalid location: {}", input))?,
        None => Location::new(base),
    };

    let theme_store = match settings.ui.theme_file {
        Some(ref path) => ThemeStore::new(path),
        None => ThemeStore::default_location(),
    };
    // Detect before the alternate screen takes over the terminal
    let theme = match theme_store.load().or_else(|| settings.ui.theme_mode()) {
        Some(mode) => Theme::for_mode(mode),
        None => Theme::auto_detect(),
    };

    // The runtime must outlive the UI; HTTP fetches run on it
    let rt = Runtime::new()?;
    let source: Box<dyn DataSource> = match args.source.file {
        Some(ref path) => Box::new(FileSource::new(path)),
        None => {
            let client = medal_client(&settings.client, args.source.endpoint.as_deref())?;
            Box::new(HttpSource::new(client, rt.handle().clone()))
        }
    };

    let app = App::new(source, location, theme, theme_store);
    run_tui(app, Duration::from_millis(settings.ui.tick_ms))
}

/// Run the TUI until the user quits
fn run_tui(mut app: App, tick: Duration) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic);
    }));

    app.start();

    // Run the main loop
    let result = run_app(&mut terminal, &mut app, tick);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!("exiting");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    tick: Duration,
) -> Result<()> {
    while app.running {
        app.tick();
        terminal.draw(|frame| ui::draw(frame, app))?;

        if let Some(event) = events::poll_event(tick)? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Mouse(mouse) => events::handle_mouse_event(app, mouse),
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_to_view() {
        let cli = Cli::parse_from(["medal-count"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_standings_sort() {
        let cli = Cli::parse_from(["medal-count", "standings", "--sort", "total", "--json"]);
        match cli.command {
            Some(Command::Standings(args)) => {
                assert_eq!(args.sort, SortKey::Total);
                assert!(args.json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_sort() {
        assert!(Cli::try_parse_from(["medal-count", "standings", "--sort", "flags"]).is_err());
    }

    #[test]
    fn test_cli_endpoint_conflicts_with_file() {
        let result = Cli::try_parse_from([
            "medal-count",
            "view",
            "--endpoint",
            "http://localhost:3000/api/medals",
            "--file",
            "medals.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_medal_client_rejects_bad_endpoint() {
        let client = ClientSettings::default();
        assert!(medal_client(&client, Some("not a url")).is_err());
        assert!(medal_client(&client, None).is_ok());
    }
}
