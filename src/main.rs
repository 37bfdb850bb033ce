use anyhow::Context;
use clap::Parser;
use data_legends::api::RiotApiClient;
use data_legends::config::Config;
use data_legends::controller::{parse_riot_id, Controller};
use data_legends::display::html;
use data_legends::display::terminal::{display_error, display_info, display_success, print_page};
use data_legends::reference::ReferenceData;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "Data Legends")]
#[command(about = "League of Legends player dashboard: rank, roles and recent matches", long_about = None)]
struct Args {
    /// Riot Game Name
    #[arg(default_value = "smoke")]
    game_name: String,

    /// Riot Tag (tag line)
    #[arg(default_value = "071")]
    tag_line: String,

    /// Platform region (default: RIOT_REGION or br1)
    #[arg(short, long)]
    region: Option<String>,

    /// Also write the dashboard as a standalone HTML page
    #[arg(long, value_name = "PATH")]
    html: Option<PathBuf>,

    /// Keep prompting for Name#TAG after the first search
    #[arg(short, long)]
    interactive: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut config = Config::from_env()?;
    if let Some(region) = &args.region {
        config.set_region(region)?;
    }

    display_info(&format!(
        "Carregando dados estáticos (ddragon {})...",
        config.ddragon_version
    ));
    let refs = ReferenceData::load(&config)?;
    display_success(&format!(
        "{} campeões, {} feitiços",
        refs.champion_count(),
        refs.spell_count()
    ));

    let client = RiotApiClient::new(config.clone());
    let mut controller = Controller::new(&client, &refs);

    let mut game_name = args.game_name.clone();
    let mut tag_line = args.tag_line.clone();

    loop {
        display_info(&format!(
            "Buscando {}#{} em {}...",
            game_name, tag_line, config.region
        ));

        controller.submit(&game_name, &tag_line);

        if let Some(page) = controller.page() {
            print_page(page);
            if let Some(path) = &args.html {
                html::write_page(path, page, chrono::Local::now())
                    .with_context(|| format!("writing {}", path.display()))?;
                display_success(&format!("Página salva em {}", path.display()));
            }
        }

        if !args.interactive {
            return Ok(());
        }

        match prompt_riot_id()? {
            Some((name, tag)) => {
                game_name = name;
                tag_line = tag;
            }
            None => return Ok(()),
        }
    }
}

/// Reads lines until a valid `Name#TAG`; `None` on EOF or an empty line.
fn prompt_riot_id() -> anyhow::Result<Option<(String, String)>> {
    let stdin = io::stdin();
    loop {
        print!("Nome#Tag (vazio para sair): ");
        io::stdout().flush().context("flushing prompt")?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).context("reading stdin")? == 0 {
            return Ok(None);
        }
        if line.trim().is_empty() {
            return Ok(None);
        }

        match parse_riot_id(&line) {
            Ok(riot_id) => return Ok(Some(riot_id)),
            Err(e) => display_error(&e.to_string()),
        }
    }
}
