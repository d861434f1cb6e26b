use crate::editor::{Button, Command};
use cgolpaint::{Vec2, view::Renderer, view::Snapshot};
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute, queue,
    style::{self, Color},
    terminal,
};
use std::io::{self, Write};

pub enum ConsoleCommand {
    Exit,
    Handled,
    Editor(Command),
}

/// Maps a terminal cell to the local point at its center
///
/// Terminal cells are about twice as tall as they are wide, so rows count
/// double to keep local units square.
pub fn local_point(column: u16, row: u16) -> Vec2 {
    Vec2 {
        x: f32::from(column) + 0.5,
        y: 2.0 * f32::from(row) + 1.0,
    }
}

pub struct ConsoleRender {
    report: String,
}
impl ConsoleRender {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )?;
        Ok(Self {
            report: String::new(),
        })
    }

    /// Center of the drawable area in local space
    pub fn center() -> io::Result<Vec2> {
        let (cols, rows) = terminal::size()?;
        Ok(local_point(cols / 2, rows.saturating_sub(1) / 2))
    }

    pub fn poll_events(&mut self) -> io::Result<Option<ConsoleCommand>> {
        // make sure an event is present for us to take
        if !event::poll(std::time::Duration::from_secs(0))? {
            return Ok(None);
        }

        let command = match event::read()? {
            event::Event::Key(key) => map_key(key, Self::center()?),
            event::Event::Mouse(mouse) => map_mouse(mouse),
            _ => None,
        };
        Ok(Some(command.unwrap_or(ConsoleCommand::Handled)))
    }

    pub fn set_report(&mut self, report: String) {
        self.report = report;
    }
}

fn map_key(key: KeyEvent, center: Vec2) -> Option<ConsoleCommand> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let command = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return Some(ConsoleCommand::Exit);
        }
        KeyCode::Char('q') | KeyCode::Esc => return Some(ConsoleCommand::Exit),
        KeyCode::Char(' ') => Command::TogglePause,
        KeyCode::Char('c') => Command::Clear,
        KeyCode::Char('r') => Command::ResetCounter,
        KeyCode::Char('+') | KeyCode::Char('=') => Command::RateUp,
        KeyCode::Char('-') => Command::RateDown,
        KeyCode::Char('0') => Command::ResetCamera,
        KeyCode::Char('z') => Command::Zoom {
            anchor: center,
            steps: 1.0,
        },
        KeyCode::Char('x') => Command::Zoom {
            anchor: center,
            steps: -1.0,
        },
        KeyCode::Up => Command::Pan(Vec2::new(0.0, -1.0)),
        KeyCode::Down => Command::Pan(Vec2::new(0.0, 1.0)),
        KeyCode::Left => Command::Pan(Vec2::new(-1.0, 0.0)),
        KeyCode::Right => Command::Pan(Vec2::new(1.0, 0.0)),
        _ => return None,
    };
    Some(ConsoleCommand::Editor(command))
}

fn map_button(button: MouseButton) -> Button {
    match button {
        MouseButton::Left => Button::Primary,
        MouseButton::Right => Button::Secondary,
        MouseButton::Middle => Button::Middle,
    }
}

fn map_mouse(mouse: MouseEvent) -> Option<ConsoleCommand> {
    let at = local_point(mouse.column, mouse.row);
    let command = match mouse.kind {
        MouseEventKind::Down(button) => Command::Button {
            button: map_button(button),
            pressed: true,
            at,
        },
        MouseEventKind::Up(button) => Command::Button {
            button: map_button(button),
            pressed: false,
            at,
        },
        MouseEventKind::Drag(_) | MouseEventKind::Moved => Command::PointerMoved(at),
        MouseEventKind::ScrollUp => Command::Zoom {
            anchor: at,
            steps: 1.0,
        },
        MouseEventKind::ScrollDown => Command::Zoom {
            anchor: at,
            steps: -1.0,
        },
        _ => return None,
    };
    Some(ConsoleCommand::Editor(command))
}

impl Renderer for ConsoleRender {
    type Error = io::Error;

    fn render(&mut self, snapshot: &Snapshot<'_>) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        let board_rows = rows.saturating_sub(1);
        let mut stdout = io::stdout();

        let mut last = None;
        for row in 0..board_rows {
            queue!(stdout, cursor::MoveTo(0, row))?;
            for col in 0..cols {
                let [r, g, b] = snapshot.sample(local_point(col, row)).color().to_bytes();
                if last != Some([r, g, b]) {
                    queue!(stdout, style::SetBackgroundColor(Color::Rgb { r, g, b }))?;
                    last = Some([r, g, b]);
                }
                stdout.write_all(b" ")?;
            }
        }

        // write footer
        queue!(
            stdout,
            style::ResetColor,
            cursor::MoveTo(0, board_rows),
            terminal::Clear(terminal::ClearType::CurrentLine)
        )?;
        let footer = self.report.chars().take(cols as usize).collect::<String>();
        stdout.write_all(footer.as_bytes())?;

        stdout.flush()
    }
}

impl Drop for ConsoleRender {
    fn drop(&mut self) {
        // if we can enable it, we should be able to disable it
        let _ = execute!(
            io::stdout(),
            style::ResetColor,
            DisableMouseCapture,
            terminal::LeaveAlternateScreen,
            cursor::Show
        );
        if let Err(err) = terminal::disable_raw_mode() {
            log::error!("failed to disable raw mode: {}", err);
        }
    }
}
