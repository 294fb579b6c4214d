use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use anyhow::Context;
use challenger_export::{
    config::{Config, DataDirs, DEFAULT_DATA_DIR, DEFAULT_HOST_TEMPLATE, DEFAULT_QUEUE_TYPE},
    export::{export_records, snapshot::write_raw_snapshot, ExportFormat, OutputPolicy},
    model::{ids::Region, locale::Locale},
    service::{data_manager::LadderManager, gameapi::client::LeagueClient},
    ui::prompt::{parse_count, Prompt},
};
use clap::{Parser, ValueEnum};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Export the Challenger ladder of a League of Legends region
#[derive(Parser, Debug)]
#[command(name = "challenger-export")]
#[command(version, about, long_about = None)]
struct Args {
    /// Platform region, e.g. euw1, na1 or kr (asked for when missing)
    #[arg(short, long)]
    region: Option<Region>,

    /// Number of players to export (asked for when missing)
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u32).range(1..))]
    count: Option<u32>,

    /// Output format: csv, excel or db (asked for when missing)
    #[arg(short, long)]
    format: Option<String>,

    /// Output filename (asked for when missing)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Riot API key
    #[arg(long, env = "RIOT_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Ranked queue to query
    #[arg(long, env = "RIOT_QUEUE_TYPE", default_value = DEFAULT_QUEUE_TYPE)]
    queue: String,

    /// API host, `{region}` is replaced by the region
    #[arg(long, env = "RIOT_API_HOST", default_value = DEFAULT_HOST_TEMPLATE)]
    host: String,

    /// Where export files are written
    #[arg(long, value_enum, default_value_t = PolicyArg::Rooted)]
    policy: PolicyArg,

    /// Base directory for the processed and interim folders
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Do not store the raw API response
    #[arg(long)]
    no_raw: bool,

    /// Language of the exported yes/no and ratio tokens
    #[arg(long, value_enum, default_value_t = Locale::En)]
    locale: Locale,

    /// Read the league from a local JSON file instead of the API
    #[arg(short = 'l', long = "load-local", value_name = "FILE")]
    load_local: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyArg {
    /// Write to the given filename as-is
    Direct,
    /// Write below <data-dir>/processed
    Rooted,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args = Args::parse();
    let mut prompt = Prompt::stdio();
    run(args, &mut prompt)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn run<R: BufRead, W: Write>(args: Args, prompt: &mut Prompt<R, W>) -> anyhow::Result<()> {
    let config = Config::new(args.api_key.unwrap_or_default())
        .with_queue_type(args.queue)
        .with_host_template(args.host)
        .with_local_file(args.load_local);
    config.validate()?;

    let dirs = DataDirs::new(args.data_dir);
    let policy = match args.policy {
        PolicyArg::Direct => OutputPolicy::Direct,
        PolicyArg::Rooted => OutputPolicy::Rooted(dirs.processed()),
    };

    let region = match args.region {
        Some(region) => region,
        None => prompt.ask_parsed("Region (euw1, na1, kr)", |s| s.parse::<Region>())?,
    };
    let count = match args.count {
        Some(count) => count,
        None => prompt.ask_parsed("Number of players to export", parse_count)?,
    };

    let client = LeagueClient::new(&config).context("Could not set up the API client")?;
    let manager = LadderManager::new(client, region);

    // Fetch errors were already reported by the client.
    let raw = match manager.get_raw() {
        Ok(raw) => raw,
        Err(_) => {
            println!("Unable to retrieve player data.");
            return Ok(());
        }
    };
    if !args.no_raw {
        write_raw_snapshot(raw, manager.region(), &dirs.interim()).context("Could not store raw league data")?;
    }

    let players = match manager.get_top_players(count, args.locale) {
        Ok(players) if !players.is_empty() => players,
        Ok(_) => {
            warn!(region = %manager.region(), "league has no entries");
            println!("Unable to retrieve player data.");
            return Ok(());
        }
        Err(err) => {
            error!("{}", err);
            println!("Unable to retrieve player data.");
            return Ok(());
        }
    };
    info!(players = players.len(), "players ranked");

    let selector = match args.format {
        Some(format) => format,
        None => prompt.ask("Output format (csv, excel, db)")?,
    };
    let format = match selector.parse::<ExportFormat>() {
        Ok(format) => format,
        Err(err) => {
            println!("{}", err);
            return Ok(());
        }
    };

    let filename = match args.output {
        Some(output) => output,
        None => {
            let question = format!("{} filename (e.g. {})", format, format.example_filename());
            PathBuf::from(prompt.ask_parsed(&question, non_empty)?)
        }
    };

    let path = export_records(&players, format, &filename, &policy)?;
    println!("Data saved to {}", path.display());
    Ok(())
}

fn non_empty(s: &str) -> Result<String, &'static str> {
    if s.is_empty() {
        return Err("Filename must not be empty");
    }
    Ok(s.to_string())
}

#[cfg(test)]
mod tests {
    use std::{fs, io::Cursor};

    use tempfile::{tempdir, TempDir};
    use wiremock::{matchers::method, Mock, MockServer, ResponseTemplate};

    use super::*;

    const LEAGUE: &str = r#"{"tier": "CHALLENGER", "entries": [
        {"summonerName": "A", "leaguePoints": 100, "wins": 10, "losses": 0},
        {"summonerName": "B", "leaguePoints": 100, "wins": 5, "losses": 5}
    ]}"#;

    fn args(extra: &[&str], dir: &TempDir) -> Args {
        let data_dir = dir.path().join("data");
        let mut argv = vec!["challenger-export".to_string(), "--data-dir".to_string()];
        argv.push(data_dir.to_string_lossy().into_owned());
        argv.extend(extra.iter().map(|a| a.to_string()));
        Args::try_parse_from(argv).unwrap()
    }

    fn league_file(dir: &TempDir, body: &str) -> String {
        let path = dir.path().join("league.json");
        fs::write(&path, body).unwrap();
        path.to_string_lossy().into_owned()
    }

    fn run_with(args: Args, answers: &str) -> anyhow::Result<()> {
        let mut prompt = Prompt::new(Cursor::new(answers.to_string()), Vec::new());
        run(args, &mut prompt)
    }

    #[test]
    fn prompted_run_exports_csv_below_processed() {
        let dir = tempdir().unwrap();
        let league = league_file(&dir, LEAGUE);

        run_with(args(&["-l", &league], &dir), "euw1\n2\ncsv\nplayers.csv\n").unwrap();

        let csv = fs::read_to_string(dir.path().join("data/processed/players.csv")).unwrap();
        let lines = csv.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "1,A,100,10,0,No,infinite");
        assert_eq!(lines[2], "2,B,100,5,5,No,1.00");
        assert!(dir.path().join("data/interim/euw1_raw_data.json").is_file());
    }

    #[test]
    fn unsupported_format_writes_no_export() {
        let dir = tempdir().unwrap();
        let league = league_file(&dir, LEAGUE);

        run_with(args(&["-l", &league, "-r", "euw1", "-n", "2", "-f", "bogus"], &dir), "").unwrap();

        assert!(!dir.path().join("data/processed").exists());
        assert!(dir.path().join("data/interim/euw1_raw_data.json").is_file());
    }

    #[test]
    fn empty_league_writes_no_export() {
        let dir = tempdir().unwrap();
        let league = league_file(&dir, r#"{"tier": "CHALLENGER", "entries": []}"#);

        let run_args = args(&["-l", &league, "-r", "kr", "-n", "5", "-f", "csv", "-o", "players.csv"], &dir);
        run_with(run_args, "").unwrap();

        assert!(!dir.path().join("data/processed").exists());
    }

    #[test]
    fn missing_local_file_writes_nothing() {
        let dir = tempdir().unwrap();
        let absent = dir.path().join("absent.json");

        let run_args = args(
            &["-l", absent.to_str().unwrap(), "-r", "na1", "-n", "5", "-f", "db", "-o", "players.db"],
            &dir,
        );
        run_with(run_args, "").unwrap();

        assert!(!dir.path().join("data").exists());
    }

    #[tokio::test]
    async fn forbidden_fetch_writes_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403))
            .expect(1)
            .mount(&server)
            .await;

        let dir = tempdir().unwrap();
        let host = server.uri();
        let run_args = args(
            &["--api-key", "expired", "--host", &host, "-r", "euw1", "-n", "5", "-f", "csv", "-o", "p.csv"],
            &dir,
        );

        // The blocking client must not run on the async test runtime.
        let outcome = tokio::task::spawn_blocking(move || run_with(run_args, "")).await.unwrap();

        assert!(outcome.is_ok());
        assert!(!dir.path().join("data").exists());
    }
}
