use {
  alert::Alert,
  anyhow::{Context, anyhow, bail},
  app::App,
  chrono::{DateTime, Local, Utc},
  client::Client,
  collapse_set::CollapseSet,
  command::Command,
  command_dispatch::CommandDispatch,
  comment::Comment,
  comment_view::CommentView,
  compose_form::ComposeForm,
  config::Config,
  crossterm::{
    event as crossterm_event,
    event::{
      Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    },
    execute,
    style::Stylize,
    terminal::{
      EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
      enable_raw_mode,
    },
  },
  display_node::{DisplayNode, Toggle},
  effect::Effect,
  error_response::ErrorResponse,
  event::Event,
  help_view::HelpView,
  locale::Locale,
  mode::Mode,
  new_comment::NewComment,
  page_cursor::PageCursor,
  pending_delete::PendingDelete,
  ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
      Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap,
    },
  },
  search_input::SearchInput,
  serde::{Deserialize, Deserializer, Serialize},
  sort::Sort,
  state::State,
  std::{
    backtrace::BacktraceStatus,
    collections::{HashSet, VecDeque},
    env,
    fs::{self, OpenOptions},
    io::{self, IsTerminal, Stdout},
    path::PathBuf,
    process,
    str::FromStr,
    sync::Mutex,
    time::{Duration, Instant},
  },
  tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
  },
  tracing::{Level, debug, info, warn},
  transient_message::TransientMessage,
  utils::{
    deserialize_null_default, popup_area, sanitize_comment, truncate,
    wrap_text,
  },
};

mod alert;
mod app;
mod client;
mod collapse_set;
mod command;
mod command_dispatch;
mod comment;
mod comment_view;
mod compose_form;
mod config;
mod display_node;
mod effect;
mod error_response;
mod event;
mod help_view;
mod locale;
mod logging;
mod mode;
mod new_comment;
mod page_cursor;
mod pending_delete;
mod search_input;
mod sort;
mod state;
mod transient_message;
mod tree_renderer;
mod utils;

const BROWSE_STATUS: &str = "↑/k ↓/j move • ←/→ collapse/expand • n/p page • s sort • / search • c comment • r reply • d delete • ? help • q quit";

const FORM_STATUS: &str =
  "tab switch field • enter next field / submit • esc close";

const ALERT_TITLE: &str = "Error";
const ALERT_STATUS: &str = "Press enter to dismiss";

const HELP_TITLE: &str = "Help";
const HELP_STATUS: &str = "Press ? or esc to close help";

const LOADING_STATUS: &str = "Loading comments...";

const EMPTY_FIELDS_MESSAGE: &str = "Please fill in all fields";
const EMPTY_QUERY_MESSAGE: &str = "Enter a search query";
const SERVER_ERROR_MESSAGE: &str = "server error";

const BASE_INDENT: &str = " ";

const HELP_TEXT: &str = "\
Navigation:
  ↑ / k   move selection up
  ↓ / j   move selection down
  pg↓     page down
  pg↑     page up
  ctrl+d  page down
  ctrl+u  page up
  home    jump to first comment
  end     jump to last comment

Threads:
  ← / h   collapse or go to parent
  → / l   expand or go to first reply
  enter   toggle collapse or expand
  n / ]   next page
  p / [   previous page
  s       toggle sort order
  g       reload the current page

Actions:
  c       write a new comment
  r       reply to the selected comment
  d       delete the selected comment
  /       search (type to edit, enter to submit)
  x       clear the search
  ?       toggle this help
  q       quit

Forms:
  tab     switch between author and content
  enter   next field, then submit
  esc     close the form
";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
  enable_raw_mode()?;

  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;

  Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(
  terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result {
  disable_raw_mode()?;

  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

  terminal.show_cursor()?;

  Ok(())
}

async fn run() -> Result {
  let config = Config::load().context("could not load configuration")?;

  logging::init(&config).context("could not initialize logging")?;

  info!(
    api_url = %config.api_url,
    page_size = config.page_size,
    locale = ?config.locale,
    "starting"
  );

  let client = Client::new(&config.api_url);

  let state = State::new(PageCursor::new(config.page_size), config.locale);

  let mut terminal = initialize_terminal()?;

  let mut app = App::new(client, state);

  let result = app.run(&mut terminal);

  restore_terminal(&mut terminal)?;

  result
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
