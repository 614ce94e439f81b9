use bhasha::Resolver;
use bhasha_mt::{
    FallbackTranslator, JsonFileStore, MachineTranslator, MockMode, MockTranslator, PackManager,
    PackManagerConfig, RemoteTranslator, TranslationSource, URL_ENV,
};
use clap::{Arg, ArgAction, Command};
use std::io::Write;
use std::ops::ControlFlow;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const MANAGEMENT_ARGS: [&str; 4] = ["install", "remove", "packs", "pairs"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("bhasha-mt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Translate text with a remote endpoint, offline packs or the built-in dictionary")
        .arg(
            Arg::new("text")
                .help("Text to translate")
                .required_unless_present_any(MANAGEMENT_ARGS)
                .index(1),
        )
        .arg(
            Arg::new("target-locale")
                .help("Target language code (e.g., hi, ne, fr)")
                .required_unless_present_any(MANAGEMENT_ARGS)
                .index(2),
        )
        .arg(
            Arg::new("source-locale")
                .long("source")
                .short('s')
                .help("Source language code (default: en)")
                .default_value("en"),
        )
        .arg(
            Arg::new("offline")
                .long("offline")
                .help("Skip the remote endpoint")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("mock")
                .long("mock")
                .short('m')
                .help("Use the mock translator as the remote tier")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("store")
                .long("store")
                .help("Path of the pack and cache store")
                .default_value("bhasha-store.json"),
        )
        .arg(
            Arg::new("lexicons")
                .long("lexicons")
                .value_name("DIR")
                .help("Directory of {source}-{target}.json lexicons merged into the built-in dictionary"),
        )
        .arg(
            Arg::new("install")
                .long("install")
                .value_name("LANG")
                .help("Download and install an offline language pack"),
        )
        .arg(
            Arg::new("remove")
                .long("remove")
                .value_name("LANG")
                .help("Remove an installed language pack"),
        )
        .arg(
            Arg::new("packs")
                .long("packs")
                .help("List language packs and storage use")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("pairs")
                .long("pairs")
                .help("List language pairs with a built-in dictionary")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Show detailed translation process")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let verbose = matches.get_flag("verbose");
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" })),
        )
        .init();

    let store_path = matches
        .get_one::<String>("store")
        .map(String::as_str)
        .unwrap_or("bhasha-store.json");
    let store = Arc::new(JsonFileStore::open(store_path));
    let packs = Arc::new(PackManager::new(store, PackManagerConfig::default()));
    let resolver = Arc::new(match matches.get_one::<String>("lexicons") {
        Some(dir) => Resolver::builtin_with_dir(Path::new(dir))?,
        None => Resolver::builtin(),
    });

    if let Some(language) = matches.get_one::<String>("install") {
        let installed = packs
            .install_pack(language, |progress| {
                print!("\r⬇️  {}: {:>3}%", language, progress);
                let _ = std::io::stdout().flush();
                ControlFlow::Continue(())
            })
            .await?;
        println!();
        if installed {
            println!("✅ Installed {}", language);
        } else {
            println!("❌ Download of {} was interrupted", language);
        }
    }

    if let Some(language) = matches.get_one::<String>("remove") {
        if packs.remove_pack(language)? {
            println!("🗑️  Removed {}", language);
        } else {
            println!("ℹ️  {} is not removable or not installed", language);
        }
    }

    if matches.get_flag("packs") {
        for pack in packs.list_packs() {
            println!(
                "{} {:<3} {:<10} {:<10} {:>6.1} MB",
                if pack.installed { "✅" } else { "⬜" },
                pack.code,
                pack.name,
                pack.native_name,
                megabytes(pack.size_bytes)
            );
        }
        let summary = packs.storage_summary();
        println!(
            "📦 {}/{} installed, {:.1} of {:.1} MB",
            summary.installed_count,
            summary.pack_count,
            megabytes(summary.used_size),
            megabytes(summary.total_declared_size)
        );
    }

    if matches.get_flag("pairs") {
        for pair in resolver.supported_pairs() {
            println!("{}", pair);
        }
    }

    let (Some(text), Some(target_locale)) = (
        matches.get_one::<String>("text"),
        matches.get_one::<String>("target-locale"),
    ) else {
        return Ok(());
    };
    let source_locale = matches
        .get_one::<String>("source-locale")
        .map(String::as_str)
        .unwrap_or("en");
    let offline = matches.get_flag("offline");

    let remote: Option<Arc<dyn MachineTranslator>> = if matches.get_flag("mock") {
        Some(Arc::new(MockTranslator::new(MockMode::Suffix)))
    } else if offline {
        None
    } else {
        match RemoteTranslator::from_env() {
            Ok(remote) => Some(Arc::new(remote)),
            Err(e) => {
                if verbose {
                    eprintln!("ℹ️  Remote tier disabled: {} (set {})", e, URL_ENV);
                }
                None
            }
        }
    };

    if verbose {
        println!("📝 Source: \"{}\"", text);
        println!("🌍 {} → {}", source_locale, target_locale);
        if let Some(remote) = &remote {
            println!("🔌 Remote: {}", remote.provider_name());
        }
        println!();
    }

    let chain = FallbackTranslator::new(remote, packs, resolver);
    let outcome = chain
        .translate(text, source_locale, target_locale, offline)
        .await;

    if verbose {
        let tier = match outcome.source {
            TranslationSource::Remote => "remote endpoint",
            TranslationSource::OfflinePack => "offline pack",
            TranslationSource::Dictionary => "built-in dictionary",
        };
        match outcome.confidence {
            Some(confidence) => println!("🔧 Translated by {} (confidence {:.1})", tier, confidence),
            None => println!("🔧 Translated by {}", tier),
        }
    }
    println!("{}", outcome.text);

    Ok(())
}

fn megabytes(bytes: u64) -> f64 {
    bytes as f64 / 1_000_000.0
}
