use clap::Parser;
use serde::Serialize;
use sitecast::config::Config;
use sitecast::error::Result;
use sitecast::logic::{
    LaborAdjustment, NoAdjustment, RandomJitter, SchedulingEngine, WeatherService,
};
use sitecast::report;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{Cli, Commands, ScheduleArgs};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load .env file if present
    let _ = dotenvy::dotenv();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match cli.command {
        Some(Commands::Init) => {
            Config::setup_interactive()?;
            return Ok(());
        }
        _ => load_config(&cli),
    };

    let engine = SchedulingEngine::default();
    let mut weather = WeatherService::new(&config);

    match cli.command {
        Some(Commands::Init) => {}
        Some(Commands::Check) => {
            let status = weather.check_connection().await;
            println!("Config OK: {} ({})", config.site.name, config.site.location);
            println!("{}", status.describe());
        }
        Some(Commands::Current) => {
            let reading = weather.current().await;
            let assessment = engine.analyze_weather_impact(reading.as_ref());
            emit(cli.json, &assessment, || report::render_assessment(&assessment))?;
        }
        Some(Commands::Forecast) => {
            let days = forecast_days(&engine, &mut weather, &config).await;
            emit(cli.json, &days, || report::render_forecast(&days))?;
        }
        Some(Commands::Schedule(ref args)) => {
            let days = forecast_days(&engine, &mut weather, &config).await;
            let labor = args.labor.unwrap_or(config.site.labor_availability);
            let plan = engine.schedule_week(&days, labor, &mut *labor_adjustment(args, &config));
            emit(cli.json, &plan, || report::render_plan(&plan))?;
        }
        Some(Commands::Recommend) => {
            let days = forecast_days(&engine, &mut weather, &config).await;
            let recommendations = engine.recommend(&days);
            emit(cli.json, &recommendations, || {
                report::render_recommendations(&recommendations)
            })?;
        }
        Some(Commands::Dashboard(ref args)) => {
            run_dashboard(&cli, &config, &engine, &mut weather, args).await?
        }
        None => {
            let args = ScheduleArgs::default();
            run_dashboard(&cli, &config, &engine, &mut weather, &args).await?
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Config {
    match Config::load_or_default(cli.config.clone()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            eprintln!("Run `sitecast init` or fix config/config.yaml");
            std::process::exit(1);
        }
    }
}

fn labor_adjustment(args: &ScheduleArgs, config: &Config) -> Box<dyn LaborAdjustment> {
    if args.no_jitter || !config.schedule.labor_jitter {
        return Box::new(NoAdjustment);
    }
    match args.seed.or(config.schedule.seed) {
        Some(seed) => Box::new(RandomJitter::seeded(seed)),
        None => Box::new(RandomJitter::from_entropy()),
    }
}

async fn forecast_days(
    engine: &SchedulingEngine<'_>,
    weather: &mut WeatherService,
    config: &Config,
) -> Vec<sitecast::models::DailyForecastSummary> {
    let entries = weather.forecast().await;
    let mut days = engine.aggregate_forecast(&entries);
    days.truncate(config.schedule.forecast_days);
    days
}

async fn run_dashboard(
    cli: &Cli,
    config: &Config,
    engine: &SchedulingEngine<'_>,
    weather: &mut WeatherService,
    args: &ScheduleArgs,
) -> Result<()> {
    let reading = weather.current().await;
    let assessment = engine.analyze_weather_impact(reading.as_ref());
    let days = forecast_days(engine, weather, config).await;
    let labor = args.labor.unwrap_or(config.site.labor_availability);
    let plan = engine.schedule_week(&days, labor, &mut *labor_adjustment(args, config));

    if cli.json {
        #[derive(Serialize)]
        struct Dashboard<'a> {
            site: &'a str,
            location: &'a str,
            current: &'a sitecast::models::WeatherAssessment,
            forecast: &'a [sitecast::models::DailyForecastSummary],
            plan: &'a sitecast::models::WeeklyPlan,
        }
        let dashboard = Dashboard {
            site: &config.site.name,
            location: &config.site.location,
            current: &assessment,
            forecast: &days,
            plan: &plan,
        };
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
        return Ok(());
    }

    println!("{} - {}", config.site.name, config.site.location);
    if !weather.is_live() {
        println!("(demo weather)");
    }
    println!();
    print!("{}", report::render_assessment(&assessment));
    println!();
    print!("{}", report::render_forecast(&days));
    println!();
    print!("{}", report::render_plan(&plan));
    Ok(())
}

fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce() -> String) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print!("{}", text());
    }
    Ok(())
}
