use ballsim::{ArenaBounds, ForceMode, InputEvent, Material, Simulation, Vector2};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{size, Clear, ClearType},
    ExecutableCommand, QueueableCommand,
};
use rand::Rng;
use std::io::{stdout, Write};
use std::thread::sleep;
use std::time::{Duration, Instant};

// Scripted demo: a rubber ball flung across the arena under gravity,
// drawn as ASCII in the terminal.

const DEMO_DURATION: f32 = 15.0; // seconds
const TICKS_PER_FRAME: u32 = 3; // ~30 FPS at the default 10 ms tick
const PX_PER_COL: f32 = 5.0;
const PX_PER_ROW: f32 = 10.0; // terminal cells are about twice as tall as wide
const HUD_ROWS: u16 = 2;

fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .init();

    let mut stdout = stdout();
    stdout.execute(Hide)?;

    // Size the arena to the terminal, leaving room for the HUD
    let (cols, rows) = size()?;
    let cols = cols.max(24);
    let rows = rows.max(12);
    let arena_rows = rows - HUD_ROWS;
    let bounds = ArenaBounds::new(
        f32::from(cols - 2) * PX_PER_COL,
        f32::from(arena_rows - 2) * PX_PER_ROW,
    );

    // Rubber keeps its bounce, so the ball stays lively for the whole demo
    let mut sim = Simulation::new();
    sim.handle_input(InputEvent::MaterialSelect(Material::rubber()));
    sim.handle_input(InputEvent::ModeToggle(ForceMode::Gravity));

    // Fling the ball with a drag gesture of random strength
    let mut rng = rand::thread_rng();
    let grab = sim.get_ball().center();
    let fling = Vector2::new(rng.gen_range(6.0..12.0), rng.gen_range(-4.0..4.0));
    sim.handle_input(InputEvent::PointerDown(grab));
    sim.handle_input(InputEvent::PointerMove(grab + fling));
    sim.handle_input(InputEvent::PointerUp);

    let tick = Duration::from_millis(sim.get_config().tick_ms);
    let frame_duration = tick * TICKS_PER_FRAME;
    let start = Instant::now();
    let mut last_hit = String::new();

    while start.elapsed().as_secs_f32() < DEMO_DURATION {
        let frame_start = Instant::now();

        for _ in 0..TICKS_PER_FRAME - 1 {
            sim.advance(bounds);
        }
        let snapshot = sim.advance(bounds);

        let mut hit_this_frame = false;
        while let Some(event) = sim.get_events_mut().next_collision_event() {
            last_hit = format!(
                "hit {:?} wall at {:.1} px/tick",
                event.wall, event.impact_speed
            );
            hit_this_frame = true;
        }

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

        // Ball at its centre cell, flashing yellow on a wall hit
        let center = sim.get_ball().center();
        let ball_col = 1 + (center.x / PX_PER_COL).round() as u16;
        let ball_row = 1 + (center.y / PX_PER_ROW).round() as u16;
        let glyph = if snapshot.speed > 8.0 {
            '@'
        } else if snapshot.speed > 3.0 {
            'O'
        } else {
            'o'
        };
        let color = if hit_this_frame {
            Color::Yellow
        } else {
            Color::Red
        };
        stdout
            .queue(MoveTo(ball_col.min(cols - 2), ball_row.min(arena_rows - 2)))?
            .queue(SetForegroundColor(color))?
            .queue(Print(glyph))?
            .queue(ResetColor)?;

        // HUD
        stdout.queue(MoveTo(0, arena_rows))?.queue(Print(format!(
            "{} | {} | pos=({:.0},{:.0}) vel=({:.1},{:.1})",
            snapshot.mode.label(),
            snapshot.material,
            snapshot.position.x,
            snapshot.position.y,
            snapshot.velocity.x,
            snapshot.velocity.y,
        )))?;
        stdout
            .queue(MoveTo(0, arena_rows + 1))?
            .queue(Print(&last_hit))?;

        stdout.flush()?;

        // Frame pacing
        let elapsed = frame_start.elapsed();
        if elapsed < frame_duration {
            sleep(frame_duration - elapsed);
        }
    }

    // Clean up
    stdout.execute(Show)?;
    stdout.execute(MoveTo(0, rows - 1))?;
    Ok(())
}
