use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use linkpage::manager::LinkPageManager;
use linkpage::model::LinkPageConfig;
use linkpage::settings::DashboardState;
use linkpage::slug;
use linkpage::store::FileStore;
use linkpage::util::valid_origin;

#[derive(Parser)]
#[command(name = "linkpage", about = "Configure and share a public link page")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a slug and print its share URL without saving anything
    Preview { slug: String },
    /// Save a link-page configuration and print its share URL
    Save {
        /// Public slug; derived from --title when omitted
        slug: Option<String>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        subtitle: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Opaque image reference, stored verbatim
        #[arg(long)]
        image: Option<String>,
        #[arg(long)]
        whatsapp: Option<String>,
        #[arg(long)]
        facebook: Option<String>,
        #[arg(long)]
        instagram: Option<String>,
        #[arg(long)]
        cta_text: Option<String>,
        #[arg(long)]
        cta_url: Option<String>,
    },
    /// Print the stored configuration for a slug
    Show { slug: String },
    /// List all known slugs in the order they were first saved
    List,
    /// Print the dashboard view-model defaults (transient, never persisted)
    Settings,
}

struct Ctx {
    origin: String,
    store_path: String,
}

impl Ctx {
    fn from_env() -> Self {
        let origin = std::env::var("LINKPAGE_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());
        let store_path =
            std::env::var("LINKPAGE_STORE").unwrap_or_else(|_| "linkpage.json".to_string());
        Self { origin, store_path }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .without_time()
        .init();

    let cli = Cli::parse();
    let ctx = Ctx::from_env();
    if !valid_origin(&ctx.origin) {
        tracing::warn!(
            origin = %ctx.origin,
            "LINKPAGE_ORIGIN is not an http(s) origin; share URLs may be unusable"
        );
    }
    let mut mgr = LinkPageManager::new(FileStore::new(&ctx.store_path), ctx.origin);

    match run(cli.command, &mut mgr) {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("{msg}");
            ExitCode::FAILURE
        }
    }
}

fn run(cmd: Command, mgr: &mut LinkPageManager<FileStore>) -> Result<(), String> {
    match cmd {
        Command::Preview { slug } => {
            let url = mgr.generate_preview(&slug).map_err(|e| e.to_string())?;
            println!("{url}");
            Ok(())
        }
        Command::Save {
            slug,
            title,
            subtitle,
            description,
            image,
            whatsapp,
            facebook,
            instagram,
            cta_text,
            cta_url,
        } => {
            let resolved = match slug {
                Some(s) => s,
                None => pick_free_slug(mgr, title.as_deref())?,
            };
            let cfg = LinkPageConfig {
                slug: resolved,
                title,
                subtitle,
                description,
                image,
                whatsapp,
                facebook,
                instagram,
                cta_text,
                cta_url,
            };
            let url = mgr.save_config(&cfg).map_err(|e| e.to_string())?;
            println!("{url}");
            Ok(())
        }
        Command::Show { slug } => match mgr.load_config(&slug) {
            Some(cfg) => {
                let raw = serde_json::to_string_pretty(&cfg).map_err(|e| e.to_string())?;
                println!("{raw}");
                Ok(())
            }
            None => Err(format!("no configuration saved for {slug:?}")),
        },
        Command::List => {
            for s in mgr.list_slugs() {
                println!("{s}");
            }
            Ok(())
        }
        Command::Settings => {
            print_settings();
            Ok(())
        }
    }
}

/// Derive a slug from the title and retry with salted candidates until one
/// is unclaimed. Saves still overwrite by design; salting only applies when
/// the user let us pick the slug.
fn pick_free_slug(mgr: &LinkPageManager<FileStore>, title: Option<&str>) -> Result<String, String> {
    let title = title.ok_or("either a slug or --title is required")?;
    let base = slug::derive_slug(title)
        .ok_or("could not derive a usable slug from the title; pass one explicitly")?;

    let mut candidate = base.clone();
    let mut attempt = 0u32;
    while mgr.load_config(&candidate).is_some() {
        attempt += 1;
        if attempt > 6 {
            return Err("could not find a free slug; pass one explicitly".into());
        }
        candidate = slug::with_suffix(&base);
    }
    Ok(candidate)
}

fn print_settings() {
    let state = DashboardState::default();
    println!("dashboard state (in-memory only, resets every run)");
    println!("  email notifications: {}", state.preferences.email_notifications);
    println!("  sms alerts:          {}", state.preferences.sms_alerts);
    println!("  marketing emails:    {}", state.preferences.marketing_emails);
    println!("  two-factor auth:     {}", state.preferences.two_factor_auth);
    println!("  public profile:      {}", state.preferences.public_profile);
}
