use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use stopwatch_core::{Icon, Slot};

use crate::scene::Scene;

const COLUMN_WIDTH: usize = 16;

const INFO_TEXT: &str = "\
Stopwatch

Start, stop and reset the clock, and save up to 14 times.

  left pinch    start / stop
  right pinch   save a time

Pinches are ignored while pointing at a button.";

pub fn enter(out: &mut impl Write) -> io::Result<()> {
    terminal::enable_raw_mode()?;
    execute!(out, EnterAlternateScreen, Hide, Clear(ClearType::All))
}

pub fn leave(out: &mut impl Write) {
    execute!(out, Show, LeaveAlternateScreen).ok();
    terminal::disable_raw_mode().ok();
}

fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Play => "[ > ]",
        Icon::Pause => "[ || ]",
    }
}

/// Lines of the main screen: clock, save columns and the key legend.
pub fn main_lines(scene: &Scene) -> Vec<String> {
    let mut lines = vec![
        format!("{}   {}", scene.timer_text.text, icon_glyph(scene.icon)),
        String::new(),
    ];

    let a: Vec<&str> = scene.slot(Slot::A).text.lines().collect();
    let b: Vec<&str> = scene.slot(Slot::B).text.lines().collect();
    for row in 0..a.len().max(b.len()) {
        let left = a.get(row).copied().unwrap_or("");
        let right = b.get(row).copied().unwrap_or("");
        let row = format!("{:<width$}{}", left, right, width = COLUMN_WIDTH);
        lines.push(row.trim_end().to_string());
    }

    lines.push(String::new());
    lines.push("space=start/stop  r=reset  s=save  i=info  q=quit".to_string());
    lines.push("l/L=left pinch  p/P=right pinch (capital: pointing at a button)".to_string());
    lines
}

pub fn info_lines() -> Vec<String> {
    let mut lines: Vec<String> = INFO_TEXT.lines().map(str::to_string).collect();
    lines.push(String::new());
    lines.push("b=back  q=quit".to_string());
    lines
}

/// Draw whichever screen is enabled. Nothing is drawn before start-up.
pub fn draw(out: &mut impl Write, scene: &Scene) -> io::Result<()> {
    let lines = if scene.main_screen.enabled {
        main_lines(scene)
    } else if scene.info_screen.enabled {
        info_lines()
    } else {
        Vec::new()
    };

    queue!(out, Clear(ClearType::All))?;
    for (row, line) in lines.iter().enumerate() {
        queue!(out, MoveTo(2, row as u16 + 1))?;
        if row == 0 {
            queue!(out, SetAttribute(Attribute::Bold), Print(line), SetAttribute(Attribute::Reset))?;
        } else {
            queue!(out, Print(line))?;
        }
    }
    out.flush()
}
