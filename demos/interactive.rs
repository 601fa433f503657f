use ballsim::{ArenaBounds, ArrowKey, ForceMode, InputEvent, Material, Simulation, Vector2};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, size, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
    QueueableCommand,
};
use std::io::{stdout, Stdout, Write};
use std::time::{Duration, Instant};

// Interactive demo: drag the ball with the mouse, toggle force modes with
// the keyboard and watch the wall hits scroll by in the HUD.
//
//   g/f/w/a/r  gravity, friction, wind, magnetic attract, magnetic repel
//   1-5        metal, rubber, ice, stone, plastic
//   arrows     wind direction while wind is on
//   q / Esc    quit

const FRAME_DURATION: Duration = Duration::from_millis(33); // ~30 FPS
const PX_PER_COL: f32 = 5.0;
const PX_PER_ROW: f32 = 10.0;
const HUD_ROWS: u16 = 3;

fn main() -> Result<(), std::io::Error> {
    let mut stdout = stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        Hide,
        EnableMouseCapture,
        terminal::SetTitle("ballsim interactive")
    )?;
    terminal::enable_raw_mode()?;

    let (mut cols, mut rows) = size()?;
    let mut sim = Simulation::new();
    let tick = Duration::from_millis(sim.get_config().tick_ms);

    let mut accumulator = Duration::ZERO;
    let mut last_update = Instant::now();
    let mut last_frame = Instant::now();
    let mut last_hit = String::new();
    let mut is_running = true;

    while is_running {
        // Handle input
        if event::poll(Duration::from_millis(1))? {
            match event::read()? {
                Event::Key(KeyEvent { code, .. }) => match code {
                    KeyCode::Char('q') | KeyCode::Esc => is_running = false,
                    KeyCode::Char('g') => {
                        sim.handle_input(InputEvent::ModeToggle(ForceMode::Gravity))
                    }
                    KeyCode::Char('f') => {
                        sim.handle_input(InputEvent::ModeToggle(ForceMode::Friction))
                    }
                    KeyCode::Char('w') => {
                        sim.handle_input(InputEvent::ModeToggle(ForceMode::Wind))
                    }
                    KeyCode::Char('a') => {
                        sim.handle_input(InputEvent::ModeToggle(ForceMode::MagneticAttract))
                    }
                    KeyCode::Char('r') => {
                        sim.handle_input(InputEvent::ModeToggle(ForceMode::MagneticRepel))
                    }
                    KeyCode::Char('1') => {
                        sim.handle_input(InputEvent::MaterialSelect(Material::metal()))
                    }
                    KeyCode::Char('2') => {
                        sim.handle_input(InputEvent::MaterialSelect(Material::rubber()))
                    }
                    KeyCode::Char('3') => {
                        sim.handle_input(InputEvent::MaterialSelect(Material::ice()))
                    }
                    KeyCode::Char('4') => {
                        sim.handle_input(InputEvent::MaterialSelect(Material::stone()))
                    }
                    KeyCode::Char('5') => {
                        sim.handle_input(InputEvent::MaterialSelect(Material::plastic()))
                    }
                    KeyCode::Up => sim.handle_input(InputEvent::KeyDown(ArrowKey::Up)),
                    KeyCode::Down => sim.handle_input(InputEvent::KeyDown(ArrowKey::Down)),
                    KeyCode::Left => sim.handle_input(InputEvent::KeyDown(ArrowKey::Left)),
                    KeyCode::Right => sim.handle_input(InputEvent::KeyDown(ArrowKey::Right)),
                    _ => {}
                },
                Event::Mouse(MouseEvent {
                    kind, column, row, ..
                }) => {
                    let point = cell_to_px(column, row);
                    match kind {
                        MouseEventKind::Down(MouseButton::Left) => {
                            sim.handle_input(InputEvent::PointerDown(point))
                        }
                        MouseEventKind::Drag(MouseButton::Left) => {
                            sim.handle_input(InputEvent::PointerMove(point))
                        }
                        MouseEventKind::Up(MouseButton::Left) => {
                            sim.handle_input(InputEvent::PointerUp)
                        }
                        MouseEventKind::Moved => {
                            sim.handle_input(InputEvent::PointerMove(point))
                        }
                        _ => {}
                    }
                }
                Event::Resize(new_cols, new_rows) => {
                    cols = new_cols;
                    rows = new_rows;
                }
                _ => {}
            }
        }

        // The arena follows the terminal, so resizes take effect mid-flight
        let arena_rows = rows.saturating_sub(HUD_ROWS).max(12);
        let bounds = ArenaBounds::new(
            f32::from(cols.max(24) - 2) * PX_PER_COL,
            f32::from(arena_rows - 2) * PX_PER_ROW,
        );

        // Fixed-timestep update
        accumulator += last_update.elapsed();
        last_update = Instant::now();
        while accumulator >= tick {
            sim.advance(bounds);
            accumulator -= tick;
        }

        while let Some(hit) = sim.get_events_mut().next_collision_event() {
            last_hit = format!("hit {:?} wall at {:.1} px/tick", hit.wall, hit.impact_speed);
        }
        while let Some(_event) = sim.get_events_mut().next_body_event() {
            // The sleep state already shows in the HUD
        }

        if last_frame.elapsed() >= FRAME_DURATION {
            draw(&mut stdout, &sim, cols.max(24), arena_rows, &last_hit)?;
            last_frame = Instant::now();
        }
    }

    // Clean up
    terminal::disable_raw_mode()?;
    execute!(stdout, Show, DisableMouseCapture, LeaveAlternateScreen)?;
    Ok(())
}

fn cell_to_px(column: u16, row: u16) -> Vector2 {
    Vector2::new(
        f32::from(column.saturating_sub(1)) * PX_PER_COL + PX_PER_COL * 0.5,
        f32::from(row.saturating_sub(1)) * PX_PER_ROW + PX_PER_ROW * 0.5,
    )
}

fn draw(
    stdout: &mut Stdout,
    sim: &Simulation,
    cols: u16,
    arena_rows: u16,
    last_hit: &str,
) -> Result<(), std::io::Error> {
    let snapshot = sim.snapshot();

    stdout.queue(Clear(ClearType::All))?;

    // Arena border
    stdout.queue(SetForegroundColor(Color::DarkGrey))?;
    for col in 0..cols {
        stdout
            .queue(MoveTo(col, 0))?
            .queue(Print('#'))?
            .queue(MoveTo(col, arena_rows - 1))?
            .queue(Print('#'))?;
    }
    for row in 1..arena_rows - 1 {
        stdout
            .queue(MoveTo(0, row))?
            .queue(Print('#'))?
            .queue(MoveTo(cols - 1, row))?
            .queue(Print('#'))?;
    }

    // Magnet target
    if snapshot.mode.is_magnetic() {
        if let Some(point) = sim.get_magnet_point() {
            let col = 1 + (point.x / PX_PER_COL).round() as u16;
            let row = 1 + (point.y / PX_PER_ROW).round() as u16;
            stdout
                .queue(MoveTo(col.min(cols - 2), row.min(arena_rows - 2)))?
                .queue(SetForegroundColor(Color::Cyan))?
                .queue(Print('+'))?;
        }
    }

    // Ball
    let center = sim.get_ball().center();
    let ball_col = 1 + (center.x / PX_PER_COL).round() as u16;
    let ball_row = 1 + (center.y / PX_PER_ROW).round() as u16;
    let (glyph, color) = if snapshot.dragging {
        ('&', Color::Green)
    } else if snapshot.asleep {
        ('o', Color::Blue)
    } else {
        ('@', Color::Red)
    };
    stdout
        .queue(MoveTo(ball_col.min(cols - 2), ball_row.min(arena_rows - 2)))?
        .queue(SetForegroundColor(color))?
        .queue(Print(glyph))?
        .queue(ResetColor)?;

    // HUD
    let wind = match sim.get_wind_direction() {
        Some(ArrowKey::Up) => " wind:up",
        Some(ArrowKey::Down) => " wind:down",
        Some(ArrowKey::Left) => " wind:left",
        Some(ArrowKey::Right) => " wind:right",
        None => "",
    };
    stdout.queue(MoveTo(0, arena_rows))?.queue(Print(format!(
        "{} | {}{} | pos=({:.0},{:.0}) vel=({:.1},{:.1}){}",
        snapshot.mode.label(),
        snapshot.material,
        wind,
        snapshot.position.x,
        snapshot.position.y,
        snapshot.velocity.x,
        snapshot.velocity.y,
        if snapshot.asleep { " zzz" } else { "" },
    )))?;
    stdout
        .queue(MoveTo(0, arena_rows + 1))?
        .queue(Print(last_hit))?;
    stdout.queue(MoveTo(0, arena_rows + 2))?.queue(Print(
        "drag ball | g/f/w/a/r modes | 1-5 materials | arrows wind | q quit",
    ))?;

    stdout.flush()?;
    Ok(())
}
