use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::path::PathBuf;

mod app;
mod chart;
mod config;
mod error;
mod help;
mod input;
mod layout;
mod notification;
mod report;
#[cfg(test)]
mod test_utils;
mod theme;
mod vessel;
mod widgets;

use app::App;
use chart::{ChartContext, ChartScene, LayoutRenderer, RenderWarning};
use input::TableReader;

/// Berth allocation chart for vessel schedules
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Plot a berth allocation chart from a vessel schedule table"
)]
struct Args {
    /// Vessel planning spreadsheet (.xlsx) or its export (.csv or .json)
    input: PathBuf,

    /// Print the computed layout as a table instead of opening the chart
    #[arg(long)]
    print: bool,
}

fn main() -> Result<()> {
    // Writes to /tmp/berthplot-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/berthplot-debug.log")?;

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== BERTHPLOT DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    let config_result = config::load_config();

    let args = Args::parse();

    // Read before entering raw mode so load errors print normally
    let records = TableReader::read_records(&args.input, &config_result.config.columns)?;

    if args.print {
        if let Some(warning) = &config_result.warning {
            eprintln!("Warning: {}", warning);
        }
        return print_layout(&records, &config_result.config);
    }

    let terminal = init_terminal()?;

    let app = App::new(records, &config_result.config);
    let result = run(terminal, app, config_result.warning);

    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== BERTHPLOT DEBUG SESSION ENDED ===");

    Ok(())
}

/// Render headless and write the layout table to stdout
fn print_layout(records: &[vessel::VesselRecord], config: &config::Config) -> Result<()> {
    let renderer = LayoutRenderer::new(config.chart.scale());
    let mut chart = ChartContext::new();
    let mut scene = ChartScene::new();

    let summary = renderer
        .render(&mut chart, records, &mut scene)
        .map_err(error::BerthPlotError::from)?;
    if summary.warning == Some(RenderWarning::EmptyInput) {
        eprintln!("Warning: no vessels to draw");
    }

    print!("{}", report::layout_report(chart.shapes()));
    Ok(())
}

/// Initialize terminal with raw mode, alternate screen, and mouse capture
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(stdout(), EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App, config_warning: Option<String>) -> Result<()> {
    if let Some(warning) = config_warning {
        app.notification.show_warning(&warning);
    }

    loop {
        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
