use std::{thread, time::Instant};

use cgolpaint::{Board, Controller, Pos2, RenderSettings, view::Renderer};

mod console;
mod editor;
mod error;
mod options;
mod stats;

use error::AppError;

fn args_to_board(args: &options::Args) -> Board {
    let (width, height) = args.board_size();
    let mut board = args.fill_mode().create_board(width, height);
    if let Some(pattern) = args.pattern() {
        let origin = Pos2 {
            x: width / 2,
            y: height / 2,
        } - Pos2 {
            x: pattern.size().x / 2,
            y: pattern.size().y / 2,
        };
        board.stamp(pattern, origin);
    }
    board
}

/// Runs generations back to back without a terminal, printing stats as it goes
fn run_headless(args: &options::Args, mut controller: Controller) {
    let mut stats = stats::SimpleRecord::default();
    for _ in 0..args.generations() {
        controller.step();
        stats.record(1);
        if stats.has_report() {
            println!("{}", stats.report(&controller, None));
        }
    }
    println!("{}", stats.report(&controller, None));
}

fn run_console(args: &options::Args, controller: Controller) -> Result<(), AppError> {
    let (gradient_left, gradient_right) = args.gradient();
    let settings = RenderSettings {
        cell_size: args.cell_size(),
        gradient_left,
        gradient_right,
        highlight: None,
    };
    let mut editor = editor::Editor::new(controller, settings);
    let mut console = console::ConsoleRender::new()?;
    let mut stats = stats::SimpleRecord::default();
    let frame_time = args.frame_time();

    let mut last_frame = Instant::now();
    'frames: loop {
        let frame_start = Instant::now();
        let delta = frame_start.duration_since(last_frame).as_secs_f64();
        last_frame = frame_start;

        while let Some(cmd) = console.poll_events()? {
            match cmd {
                console::ConsoleCommand::Exit => break 'frames,
                console::ConsoleCommand::Editor(command) => editor.apply(command),
                console::ConsoleCommand::Handled => {}
            }
        }

        let gens = editor.frame(delta);
        stats.record(gens);
        if stats.has_report() {
            console.set_report(stats.report(&editor.controller, Some(&editor.camera)));
        }
        console.render(&editor.snapshot())?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
    Ok(())
}

fn main() -> Result<(), AppError> {
    env_logger::init();

    let Some(args) = options::Args::from_env()? else {
        return Ok(());
    };

    let board = args_to_board(&args);
    log::info!(
        "board {}x{} with {} alive",
        board.width(),
        board.height(),
        board.alive_count()
    );

    let mut controller = Controller::new(board);
    controller.set_iterations_per_second(args.rate());

    if args.headless() {
        run_headless(&args, controller);
        return Ok(());
    }
    run_console(&args, controller)
}
