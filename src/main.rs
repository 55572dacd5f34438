use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use mentions::TriggerLocation;
use mentions::config::{self, InputConfig};

mod app;

use app::App;
use app::users::UserDirectory;

/// Redraw interval while the suggestions panel animates
const FRAME_INTERVAL: Duration = Duration::from_millis(16);
/// Poll interval when nothing animates
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Chat-style composer demonstrating @-mention tracking
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Character that starts a mention
    #[arg(long)]
    trigger: Option<String>,

    /// Accept the trigger in the middle of a word
    #[arg(long)]
    anywhere: bool,

    /// Lay suggestions out on a single line
    #[arg(long, conflicts_with = "vertical")]
    horizontal: bool,

    /// List suggestions one per row
    #[arg(long)]
    vertical: bool,

    /// Rows of suggestions shown at most (vertical layout)
    #[arg(long, value_name = "N")]
    max_rows: Option<usize>,

    /// Rows per suggestion
    #[arg(long, value_name = "N")]
    row_height: Option<u16>,

    /// JSON array of {"id", "handle", "name"} users to suggest
    #[arg(long, value_name = "FILE")]
    users: Option<PathBuf>,

    /// Config file (defaults to ~/.config/mentions/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Validate the configuration, print any warning and exit
    #[arg(long)]
    check: bool,
}

impl Args {
    /// Command line flags win over the config file
    fn apply(&self, mut input: InputConfig) -> InputConfig {
        if let Some(trigger) = &self.trigger {
            input.trigger = trigger.clone();
        }
        if self.anywhere {
            input.trigger_location = TriggerLocation::Anywhere;
        }
        if self.horizontal {
            input.horizontal = true;
        }
        if self.vertical {
            input.horizontal = false;
        }
        if let Some(max_rows) = self.max_rows {
            input.max_visible_row_count = Some(max_rows);
        }
        if let Some(row_height) = self.row_height {
            input.suggestion_row_height = row_height;
        }
        input
    }
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    #[cfg(debug_assertions)]
    init_logging();

    let config = match &args.config {
        Some(path) => config::load_config_from_path(path),
        None => config::load_config(),
    };
    let options = args.apply(config.input).to_options()?;

    if args.check {
        match options.validate() {
            Ok(()) => println!("Configuration OK"),
            Err(e) => eprintln!("warning: {}", e),
        }
        return Ok(());
    }

    let directory = match &args.users {
        Some(path) => UserDirectory::from_json_file(path)?,
        None => UserDirectory::default(),
    };
    log::info!("Loaded {} users", directory.len());

    let app = App::new(options, directory);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    let result = run(terminal, app);

    // Restore terminal (automatic cleanup)
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        let now = Instant::now();
        terminal.draw(|frame| app.render(frame, now))?;

        if app.should_quit() {
            break;
        }

        let timeout = if app.input.is_animating(Instant::now()) {
            FRAME_INTERVAL
        } else {
            IDLE_POLL
        };

        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key_event(key);
        }
    }

    Ok(())
}

/// Debug builds log to a file so output never lands on the terminal
#[cfg(debug_assertions)]
fn init_logging() {
    use std::fs::{self, File};

    let Some(dir) = dirs::cache_dir().map(|d| d.join("mentions")) else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = File::create(dir.join("debug.log")) else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
}
