#![allow(dead_code)]

use core_actions::{DispatchResult, Io, dispatch};
use core_config::Config;
use core_events::{KeyCode, KeyEvent, KeySource, ScriptedKeys};
use core_model::{Render, Workspace};
use core_state::{Document, DocumentOptions};

pub const SCREEN: (usize, usize) = (5, 40);

/// Records every paint: how many happened and the status text at the time.
#[derive(Default)]
pub struct RecordingRender {
    pub renders: usize,
    pub statuses: Vec<String>,
}

impl Render for RecordingRender {
    fn render(&mut self, ws: &Workspace) -> anyhow::Result<()> {
        self.renders += 1;
        self.statuses.push(ws.status.text().to_string());
        Ok(())
    }
}

pub fn empty_workspace() -> Workspace {
    let cfg = Config::default();
    Workspace::new(cfg.settings(), cfg.themes(), "default".into(), SCREEN)
}

pub fn workspace(text: &str) -> Workspace {
    let mut ws = empty_workspace();
    ws.push_tab(Document::from_text(text, 4, DocumentOptions::default(), SCREEN));
    ws
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::plain(code)
}

pub fn esc() -> KeyEvent {
    key(KeyCode::Esc)
}

pub fn enter() -> KeyEvent {
    key(KeyCode::Enter)
}

/// Build a script from literal text interleaved with special keys.
pub fn script(parts: &[Part]) -> ScriptedKeys {
    let mut keys = ScriptedKeys::default();
    for part in parts {
        match part {
            Part::Text(t) => keys.push_text(t),
            Part::Key(k) => keys.push(*k),
        }
    }
    keys
}

pub enum Part<'a> {
    Text(&'a str),
    Key(KeyEvent),
}

pub struct Outcome {
    pub last: Option<DispatchResult>,
    pub render: RecordingRender,
}

/// Feed every scripted key through the dispatcher until it runs dry or quits.
pub fn run(ws: &mut Workspace, mut keys: ScriptedKeys) -> Outcome {
    let mut render = RecordingRender::default();
    let mut last = None;
    while keys.remaining() > 0 {
        let k = keys.read_key().unwrap();
        let mut io = Io::new(&mut keys, &mut render);
        let res = dispatch(k, ws, &mut io).unwrap();
        last = Some(res);
        if res.quit {
            break;
        }
    }
    Outcome { last, render }
}

pub fn row_texts(ws: &Workspace) -> Vec<String> {
    ws.active_doc()
        .unwrap()
        .rows()
        .iter()
        .map(|r| r.text())
        .collect()
}
