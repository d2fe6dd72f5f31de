use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};

use mealcoach::screens::{Alert, CliPicker, CoachScreen, HomeScreen, PlanScreen, Route};
use mealcoach::{AppConfig, AppState};

#[derive(Debug, Parser)]
#[command(name = "mealcoach", version, about = "Meal planner and food photo coach")]
struct Cli {
    /// Host runtime: web, ios or android. Overrides RUNTIME_TARGET.
    #[arg(long, global = true)]
    target: Option<String>,

    /// Backend base URL. Overrides API_BASE_URL.
    #[arg(long, global = true)]
    api_base: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Landing screen; Enter opens the weekly plan.
    Home,
    /// Fetch and show this week's plan.
    Plan,
    /// Analyze a food photo (file path, URL or data URI).
    Coach { image: String },
}

impl Command {
    fn route(&self) -> Route {
        match self {
            Command::Home => Route::Home,
            Command::Plan => Route::Plan,
            Command::Coach { .. } => Route::Coach,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "mealcoach=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();
    let config = AppConfig::resolve(
        |key| std::env::var(key).ok(),
        cli.target.as_deref(),
        cli.api_base.as_deref(),
    )?;
    let state = AppState::new(config);
    tracing::info!(
        runtime = %state.config.target,
        api_base = %state.config.api_base,
        "client configured"
    );

    let mut route = cli.command.route();
    loop {
        route = match route {
            Route::Home => {
                let home = HomeScreen;
                print_lines(&home.render());
                let mut line = String::new();
                BufReader::new(tokio::io::stdin()).read_line(&mut line).await?;
                home.press()
            }
            Route::Plan => {
                let mut screen = PlanScreen::new();
                print_lines(&screen.render());
                screen.load(&state).await;
                print_lines(&screen.render());
                break;
            }
            Route::Coach => {
                let Command::Coach { image } = &cli.command else {
                    break;
                };
                run_coach(&state, image).await;
                break;
            }
        };
    }

    Ok(())
}

async fn run_coach(state: &AppState, image: &str) {
    let mut screen = CoachScreen::new();
    if let Some(alert) = screen.pick_image(&CliPicker::new(image)).await {
        show_alert(&alert);
        return;
    }
    if !screen.can_analyze() {
        print_lines(&screen.render());
        return;
    }
    if let Some(alert) = screen.analyze(state).await {
        show_alert(&alert);
    }
    print_lines(&screen.render());
}

fn print_lines(lines: &[String]) {
    for l in lines {
        println!("{}", l);
    }
}

fn show_alert(alert: &Alert) {
    eprintln!("{}: {}", alert.title, alert.message);
}
