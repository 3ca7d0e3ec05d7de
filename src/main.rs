//! Dashboard shell: load the collection from the persistence port, derive
//! the display data, print it. All scoring happens in the library; this
//! binary only wires storage and formatting together.

use chrono::Utc;

use fundpipe::engagement::{engagement_score, outreach_urgency};
use fundpipe::prioritization::prioritize_investors;
use fundpipe::recommendations::generate_recommendations;
use fundpipe::store::{InvestorStore, JsonFileStore};
use fundpipe::summary::pipeline_summary;
use fundpipe::types::Investor;
use fundpipe::CrmError;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{}", e);
        eprintln!("fundpipe: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), CrmError> {
    // Optional argument: path to the JSON cache. Defaults to
    // ~/.fundpipe/investors.json.
    let store = match std::env::args().nth(1) {
        Some(path) => JsonFileStore::new(path),
        None => JsonFileStore::open_default()?,
    };

    let investors = store.load()?;
    log::info!(
        "Loaded {} investors from {}",
        investors.len(),
        store.path().display()
    );

    // Mirror the cache into the SQLite row store when one is configured.
    if std::env::var_os("FUNDPIPE_DB").is_some() {
        match fundpipe::db::SqliteStore::open() {
            Ok(db) => {
                db.save_all(&investors)?;
                log::info!("Mirrored {} investors to SQLite", investors.len());
            }
            Err(e) => log::warn!("SQLite mirror unavailable: {}", e),
        }
    }

    print_dashboard(&investors);
    Ok(())
}

fn print_dashboard(investors: &[Investor]) {
    let now = Utc::now();

    let summary = pipeline_summary(investors, now);
    println!("PIPELINE");
    println!(
        "  {} contacts | ${:.2}M committed | {} active | {} need action",
        summary.total,
        summary.committed_total as f64 / 1e6,
        summary.active,
        summary.needs_action
    );
    for (stage, count) in &summary.by_stage {
        if *count > 0 {
            println!("  {:<18} {}", stage.label(), count);
        }
    }

    let targets = prioritize_investors(investors, now);
    if !targets.is_empty() {
        println!("\nTOP TARGETS");
        for t in &targets {
            let urgency = outreach_urgency(&t.investor, now)
                .map(|u| u.label)
                .unwrap_or_default();
            println!(
                "  [{:>3}] {} ({}) engagement {} {}",
                t.ai_score,
                t.investor.name,
                t.investor.investor_type.label(),
                engagement_score(&t.investor, now),
                urgency
            );
            for reason in &t.ai_reasons {
                println!("        - {}", reason);
            }
            println!("        next: {}", t.ai_action);
        }
    }

    let recs = generate_recommendations(investors, now);
    if !recs.is_empty() {
        println!("\nRECOMMENDATIONS");
        for rec in &recs {
            println!("  {} ({} investors)", rec.category, rec.investors.len());
            println!("    {}", rec.action);
            for inv in &rec.investors {
                println!("    - {}", inv.name);
            }
        }
    }
}
