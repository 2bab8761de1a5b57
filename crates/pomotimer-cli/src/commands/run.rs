//! Interactive timer session.
//!
//! Renders the screen to the terminal and reads command text from
//! stdin. stdin is the free-form input surface: whatever the user types
//! after `focus` or `break` goes through the resolver, so arbitrary
//! text is tolerated and mapped to defaults.
//!
//! The ticker is restarted on every running-flag transition
//! (cancel-and-restart, never mid-interval resumption).

use clap::Args;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use pomotimer_core::view::{BREAK_FIELD_LABEL, FOCUS_FIELD_LABEL};
use pomotimer_core::{
    Config, Durations, Event, HapticFeedback, NoopHaptics, Screen, Ticker, TimerEngine, TimerMode,
    COMPLETION_PULSE_MS, TICK_INTERVAL,
};

use crate::haptics::TerminalBell;

#[derive(Args)]
pub struct RunArgs {
    /// Raw focus duration text (goes through the resolver)
    #[arg(long)]
    focus: Option<String>,
    /// Raw break duration text (goes through the resolver)
    #[arg(long = "break")]
    break_text: Option<String>,
    /// Start the countdown immediately
    #[arg(long)]
    start: bool,
    /// Disable the terminal-bell pulse on interval completion
    #[arg(long)]
    no_bell: bool,
    /// Print events and snapshots as JSON lines instead of the screen
    #[arg(long)]
    json: bool,
}

pub fn run(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(session(args))
}

enum Command {
    Toggle,
    Reset,
    Focus(String),
    Break(String),
    Status,
    Help,
    Quit,
    Unknown(String),
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };
    match head.to_ascii_lowercase().as_str() {
        "start" | "pause" | "toggle" | "s" | "p" => Command::Toggle,
        "reset" | "r" => Command::Reset,
        "focus" | "f" => Command::Focus(rest.to_string()),
        "break" | "b" => Command::Break(rest.to_string()),
        "status" | "" => Command::Status,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    }
}

fn mode_label(mode: TimerMode) -> &'static str {
    match mode {
        TimerMode::Focus => "focus",
        TimerMode::Break => "break",
    }
}

fn help_text() -> String {
    format!(
        "commands:\n\
         \x20 start | pause    toggle the countdown\n\
         \x20 reset            stop and refill the current period\n\
         \x20 focus <text>     {FOCUS_FIELD_LABEL}\n\
         \x20 break <text>     {BREAK_FIELD_LABEL}\n\
         \x20 status           redraw the screen\n\
         \x20 quit             exit"
    )
}

struct Session {
    engine: TimerEngine,
    focus_text: String,
    break_text: String,
    haptics: Box<dyn HapticFeedback>,
    json: bool,
}

impl Session {
    fn emit(&self, event: &Event) {
        if self.json {
            if let Ok(line) = serde_json::to_string(event) {
                println!("{line}");
            }
            return;
        }
        if let Event::IntervalCompleted {
            completed_mode,
            next_mode,
            ..
        } = event
        {
            println!(
                "\n*** {} period complete - {} is up next ***",
                mode_label(*completed_mode),
                mode_label(*next_mode)
            );
        }
    }

    fn draw(&self) {
        if self.json {
            if let Ok(line) = serde_json::to_string(&self.engine.snapshot()) {
                println!("{line}");
            }
            return;
        }
        let screen = Screen::project(&self.engine);
        println!();
        match screen.banner.subline() {
            Some(sub) => println!("== {} == {}", screen.banner.headline(), sub),
            None => println!("== {} ==", screen.banner.headline()),
        }
        if screen.show_card {
            println!("   {}  ({})", screen.clock, screen.color);
        }
        println!("{}", screen.sessions_line);
        println!("[{}] [Reset]", screen.start_pause_label);
    }

    /// Re-resolve the raw field text and push the result to the engine.
    fn apply_durations(&mut self) {
        let durations = Durations::resolve(&self.focus_text, &self.break_text);
        if let Some(event) = self.engine.set_durations(durations) {
            self.emit(&event);
        }
    }
}

async fn session(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let focus_text = args.focus.unwrap_or_else(|| config.focus_min.to_string());
    let break_text = args
        .break_text
        .unwrap_or_else(|| config.break_min.to_string());
    let durations = Durations::resolve(&focus_text, &break_text);

    let haptics: Box<dyn HapticFeedback> = if args.no_bell || !config.haptics {
        Box::new(NoopHaptics)
    } else {
        Box::new(TerminalBell)
    };

    let mut session = Session {
        engine: TimerEngine::new(durations),
        focus_text,
        break_text,
        haptics,
        json: args.json,
    };
    let mut ticker = Ticker::new();
    let mut ticks: Option<mpsc::Receiver<()>> = None;

    if !session.json {
        println!("{}", help_text());
    }
    if args.start {
        let event = session.engine.toggle();
        session.emit(&event);
        ticks = Some(ticker.start(TICK_INTERVAL));
    }
    session.draw();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            Some(_) = recv_tick(&mut ticks) => {
                if let Some(event) = session.engine.tick() {
                    ticker.cancel();
                    ticks = None;
                    session.haptics.pulse(COMPLETION_PULSE_MS);
                    session.emit(&event);
                }
                session.draw();
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_command(&line) {
                    Command::Toggle => {
                        let event = session.engine.toggle();
                        session.emit(&event);
                        if session.engine.is_running() {
                            ticks = Some(ticker.start(TICK_INTERVAL));
                        } else {
                            ticker.cancel();
                            ticks = None;
                        }
                        session.draw();
                    }
                    Command::Reset => {
                        let event = session.engine.reset();
                        session.emit(&event);
                        ticker.cancel();
                        ticks = None;
                        session.draw();
                    }
                    Command::Focus(text) => {
                        session.focus_text = text;
                        session.apply_durations();
                        session.draw();
                    }
                    Command::Break(text) => {
                        session.break_text = text;
                        session.apply_durations();
                        session.draw();
                    }
                    Command::Status => session.draw(),
                    Command::Help => {
                        if !session.json {
                            println!("{}", help_text());
                        }
                    }
                    Command::Quit => break,
                    Command::Unknown(word) => {
                        eprintln!("unknown command: {word} (try 'help')");
                    }
                }
            }
        }
    }

    Ok(())
}

async fn recv_tick(ticks: &mut Option<mpsc::Receiver<()>>) -> Option<()> {
    match ticks {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}
