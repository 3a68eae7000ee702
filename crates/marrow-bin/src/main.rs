use anyhow::{Context, Result};
use clap::Parser;
use core_actions::{Io, dispatch};
use core_events::KeySource;
use core_input::CrosstermKeys;
use core_model::{Render, Workspace};
use core_render::TerminalRenderer;
use core_terminal::{CrosstermBackend, TerminalBackend, text_area};
use std::io::stdout;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "marrow", version, about = "Marrow modal text editor")]
struct Args {
    /// File to open; created when missing. Without it the welcome screen is shown.
    pub path: Option<PathBuf>,
    /// Configuration file (overrides discovery of `marrow.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
}

struct AppStartup {
    backend: CrosstermBackend,
    log_guard: Option<WorkerGuard>,
}

impl AppStartup {
    fn new() -> Self {
        Self {
            backend: CrosstermBackend::new(),
            log_guard: None,
        }
    }

    fn configure_logging(&mut self) {
        let log_dir = Path::new(".");
        let log_path = log_dir.join("marrow.log");
        if log_path.exists() {
            let _ = std::fs::remove_file(&log_path);
        }
        let file_appender = tracing_appender::rolling::never(log_dir, "marrow.log");
        let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
        match tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(nb_writer)
            .with_ansi(false)
            .try_init()
        {
            Ok(_) => self.log_guard = Some(guard),
            // Subscriber already installed; dropping the guard stops the writer.
            Err(_err) => {}
        }
    }

    fn install_panic_hook() {
        static HOOK: Once = Once::new();
        HOOK.call_once(|| {
            let default_panic = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                tracing::error!(target: "runtime.panic", ?info, "panic");
                default_panic(info);
            }));
        });
    }

    fn run(&mut self, args: Args) -> Result<()> {
        self.configure_logging();
        Self::install_panic_hook();
        info!(target: "runtime", "startup");

        let config = core_config::load_from(args.config.clone())?;
        let settings = config.settings();
        let themes = config.themes();
        let theme = config.theme_name(&themes);

        self.backend.set_title("Marrow")?;
        let mut guard = self.backend.enter_guard()?;
        let (cols, rows) = guard.backend().size()?;
        let mut ws = Workspace::new(settings, themes, theme, text_area(cols, rows));
        if let Some(path) = &args.path {
            ws.open_tab(path)
                .with_context(|| format!("opening {}", path.display()))?;
        }
        let path_str = args.path.as_ref().map(|p| p.display().to_string());
        info!(
            target: "runtime.startup",
            path = path_str.as_deref(),
            config_override = args.config.is_some(),
            "bootstrap_complete"
        );

        let mut keys = CrosstermKeys::new();
        let mut renderer = TerminalRenderer::new(stdout());
        event_loop(&mut ws, &mut keys, &mut renderer, |k| k.take_resize())?;
        info!(target: "runtime", "shutdown");
        drop(guard);
        Ok(())
    }
}

/// Render, read one key, apply it; until a dispatch asks to quit.
/// `poll_resize` reports a terminal size `(cols, rows)` seen while reading.
fn event_loop<K: KeySource>(
    ws: &mut Workspace,
    keys: &mut K,
    render: &mut dyn Render,
    mut poll_resize: impl FnMut(&mut K) -> Option<(u16, u16)>,
) -> Result<()> {
    loop {
        render.render(ws)?;
        let key = keys.read_key()?;
        if let Some((cols, rows)) = poll_resize(keys) {
            let (text_rows, text_cols) = text_area(cols, rows);
            ws.resize(text_rows, text_cols);
            info!(target: "runtime", rows = text_rows, cols = text_cols, "resize");
        }
        let mut io = Io::new(&mut *keys, &mut *render);
        if dispatch(key, ws, &mut io)?.quit {
            return Ok(());
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    AppStartup::new().run(args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_config::Config;
    use core_events::{KeyCode, KeyEvent, ScriptedKeys};

    #[derive(Default)]
    struct CountingRender {
        frames: usize,
    }

    impl Render for CountingRender {
        fn render(&mut self, _ws: &Workspace) -> Result<()> {
            self.frames += 1;
            Ok(())
        }
    }

    fn workspace() -> Workspace {
        let cfg = Config::default();
        Workspace::new(cfg.settings(), cfg.themes(), "default".into(), (10, 40))
    }

    #[test]
    fn loop_edits_saves_and_quits() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        let mut ws = workspace();
        ws.open_tab(&path).unwrap();
        let mut keys = ScriptedKeys::from_text("ihi");
        keys.push(KeyEvent::plain(KeyCode::Esc));
        keys.push_text(":wq");
        keys.push(KeyEvent::plain(KeyCode::Enter));
        let mut render = CountingRender::default();
        event_loop(&mut ws, &mut keys, &mut render, |_| None).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hi\n");
        assert_eq!(keys.remaining(), 0);
        assert!(render.frames >= 5);
    }

    #[test]
    fn resize_applies_to_open_documents() {
        let mut ws = workspace();
        let doc = core_state::Document::new(4, ws.document_options(), ws.screen());
        ws.push_tab(doc);
        let mut keys = ScriptedKeys::new([KeyEvent::char('j'), KeyEvent::ctrl('q')]);
        let mut pending = Some((100u16, 30u16));
        let mut render = CountingRender::default();
        event_loop(&mut ws, &mut keys, &mut render, |_| pending.take()).unwrap();
        assert_eq!(ws.screen(), (28, 100));
        assert_eq!(ws.active_doc().unwrap().viewport().rows, 28);
    }

    #[test]
    fn exhausted_key_source_is_an_error() {
        let mut ws = workspace();
        let mut keys = ScriptedKeys::default();
        let res = event_loop(&mut ws, &mut keys, &mut CountingRender::default(), |_| None);
        assert!(res.is_err());
    }

    #[test]
    fn args_parse_path_and_config() {
        let args = Args::try_parse_from(["marrow", "--config", "c.toml", "a.rs"]).unwrap();
        assert_eq!(args.path, Some(PathBuf::from("a.rs")));
        assert_eq!(args.config, Some(PathBuf::from("c.toml")));
    }
}
