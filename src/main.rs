mod config;
mod error;
mod scene;
mod storage;
mod ui;

use std::io::{self, Write};
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use num_traits::{FromPrimitive, ToPrimitive};
use stopwatch_core::{route, Button, Hand, InputEvent, NavigationController, PinchEvent};

use crate::config::LensConfig;
use crate::error::Result;
use crate::scene::Scene;
use crate::storage::FileFlagStore;

const APP_NAME: &str = "lens-stopwatch";
const INPUT_POLL: Duration = Duration::from_millis(100);
// stderr shares the terminal with the scene; info lines would land on it.
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, num_derive::FromPrimitive, num_derive::ToPrimitive)]
enum AppOp {
    Redraw = 0,
    Key,
    Pump,
    Quit,
}

/// Opcode plus one scalar argument, as posted to the app loop.
struct Message {
    id: usize,
    arg: u32,
}

impl Message {
    fn new(op: AppOp, arg: u32) -> Self {
        Self {
            id: op.to_usize().unwrap_or(usize::MAX),
            arg,
        }
    }
}

/// Map a host key to a stopwatch input. Capital pinch keys stand for a
/// pinch made while the hand's ray is on a button.
fn key_event(key: char) -> Option<InputEvent> {
    let press = |button| Some(InputEvent::Press(button));
    let pinch = |hand, targeting| Some(InputEvent::Pinch(PinchEvent::new(hand, targeting)));
    match key {
        ' ' => press(Button::StartStop),
        'r' => press(Button::Reset),
        's' => press(Button::SaveTime),
        'i' => press(Button::Info),
        'b' => press(Button::BackFromInfo),
        'l' => pinch(Hand::Left, false),
        'L' => pinch(Hand::Left, true),
        'p' => pinch(Hand::Right, false),
        'P' => pinch(Hand::Right, true),
        _ => None,
    }
}

struct LensApp {
    nav: NavigationController,
    scene: Scene,
    store: FileFlagStore,
    epoch: Instant,
}

impl LensApp {
    fn new(config: &LensConfig) -> Result<Self> {
        let scene = Scene::bind(&config.scene)?;
        let store = FileFlagStore::open(&config.store_path)?;
        Ok(Self {
            nav: NavigationController::new(),
            scene,
            store,
            epoch: Instant::now(),
        })
    }

    fn now_ms(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }

    fn start_up(&mut self) {
        let fx = self.nav.start_up(&mut self.store);
        self.scene.apply(&fx);
    }

    fn dispatch(&mut self, event: InputEvent) {
        let now = self.now_ms();
        let fx = route(&mut self.nav, event, now);
        self.scene.apply(&fx);
    }

    fn handle_key(&mut self, key: char) {
        match key_event(key) {
            Some(event) => self.dispatch(event),
            None => log::debug!("unmapped key {:?}", key),
        }
    }

    fn redraw(&mut self, out: &mut impl Write, force: bool) -> io::Result<()> {
        if self.scene.take_dirty() || force {
            ui::draw(out, &self.scene)?;
        }
        Ok(())
    }
}

/// Posts a `Pump` every frame until the app loop goes away.
fn pump_thread(interval: Duration, main_conn: Sender<Message>) {
    loop {
        std::thread::sleep(interval);
        if main_conn.send(Message::new(AppOp::Pump, 0)).is_err() {
            break;
        }
    }
}

fn input_thread(main_conn: Sender<Message>) {
    loop {
        let msg = match event::poll(INPUT_POLL) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) => key_message(key),
                Ok(Event::Resize(_, _)) => Some(Message::new(AppOp::Redraw, 0)),
                Ok(_) => None,
                Err(e) => {
                    log::error!("input error: {}", e);
                    Some(Message::new(AppOp::Quit, 0))
                }
            },
            Ok(false) => None,
            Err(e) => {
                log::error!("input error: {}", e);
                Some(Message::new(AppOp::Quit, 0))
            }
        };
        if let Some(msg) = msg {
            if main_conn.send(msg).is_err() {
                break;
            }
        }
    }
}

fn key_message(key: KeyEvent) -> Option<Message> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Esc => Some(Message::new(AppOp::Quit, 0)),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Message::new(AppOp::Quit, 0))
        }
        KeyCode::Char('q') => Some(Message::new(AppOp::Quit, 0)),
        KeyCode::Char(c) => Some(Message::new(AppOp::Key, c as u32)),
        _ => None,
    }
}

fn run_loop(app: &mut LensApp, rx: Receiver<Message>, out: &mut impl Write) -> Result<()> {
    app.redraw(out, true)?;
    while let Ok(msg) = rx.recv() {
        match FromPrimitive::from_usize(msg.id) {
            Some(AppOp::Redraw) => app.redraw(out, true)?,
            Some(AppOp::Key) => {
                if let Some(key) = char::from_u32(msg.arg) {
                    app.handle_key(key);
                }
                app.redraw(out, false)?;
            }
            Some(AppOp::Pump) => {
                app.dispatch(InputEvent::Tick);
                app.redraw(out, false)?;
            }
            Some(AppOp::Quit) => break,
            None => log::error!("unknown opcode: {}", msg.id),
        }
    }
    Ok(())
}

fn run() -> Result<()> {
    let config = LensConfig::load()?;
    let mut app = LensApp::new(&config)?;
    app.start_up();

    let (tx, rx) = mpsc::channel();
    let pump_conn = tx.clone();
    let interval = config.frame_interval();
    std::thread::spawn(move || pump_thread(interval, pump_conn));
    std::thread::spawn(move || input_thread(tx));

    let mut stdout = io::stdout();
    ui::enter(&mut stdout)?;
    let result = run_loop(&mut app, rx, &mut stdout);
    ui::leave(&mut stdout);
    result
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER)).init();
    log::info!("{} PID is {}", APP_NAME, std::process::id());

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stopwatch_core::{FlagKey, FlagStore, ScreenId};

    fn temp_config(name: &str) -> LensConfig {
        let path = std::env::temp_dir().join(format!("lens-stopwatch-app-{}-{}.json", name, std::process::id()));
        std::fs::remove_file(&path).ok();
        LensConfig {
            store_path: path.display().to_string(),
            ..LensConfig::default()
        }
    }

    #[test]
    fn test_key_map() {
        let presses = [' ', 'r', 's', 'i', 'b'].map(key_event);
        let expected = Button::ALL.map(|b| Some(InputEvent::Press(b)));
        assert_eq!(presses, expected);
        assert_eq!(
            key_event('P'),
            Some(InputEvent::Pinch(PinchEvent::new(Hand::Right, true)))
        );
        assert_eq!(key_event('x'), None);
    }

    #[test]
    fn test_default_log_filter_keeps_info_off_the_scene() {
        assert_eq!(DEFAULT_LOG_FILTER, "warn");
    }

    #[test]
    fn test_opcodes_round_trip() {
        let msg = Message::new(AppOp::Pump, 0);
        assert!(matches!(FromPrimitive::from_usize(msg.id), Some(AppOp::Pump)));
    }

    #[test]
    fn test_first_and_second_launch() {
        let config = temp_config("launch");

        let mut app = LensApp::new(&config).unwrap();
        app.start_up();
        assert_eq!(app.nav.current_screen(), Some(ScreenId::Info));
        assert!(app.scene.info_screen.enabled);
        assert!(!app.scene.main_screen.enabled);
        assert!(app.store.get_bool(FlagKey::HasBeenRun));

        let mut app = LensApp::new(&config).unwrap();
        app.start_up();
        assert_eq!(app.nav.current_screen(), Some(ScreenId::Main));
        assert!(app.scene.main_screen.enabled);

        app.handle_key(' ');
        assert!(app.nav.engine().is_running());
        app.handle_key(' ');
        assert!(!app.nav.engine().is_running());
        app.handle_key('s');
        assert_eq!(app.scene.slot_a.text.lines().count(), 1);
        app.handle_key('r');
        assert!(app.scene.slot_a.text.is_empty());
        assert_eq!(app.scene.timer_text.text, "00:00:00");

        std::fs::remove_file(&config.store_path).ok();
    }

    #[test]
    fn test_missing_handle_is_fatal() {
        let mut config = temp_config("missing");
        config.scene.retain(|o| o.name != "stopwatch_text");
        assert!(matches!(
            LensApp::new(&config),
            Err(crate::error::LensError::Config(_))
        ));
    }
}
