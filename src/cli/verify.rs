use std::{path::PathBuf, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{error, info, registry, success, utils, warning};

pub async fn verify(hash: Option<String>, file: Option<PathBuf>, json: bool) {
    let hash = match file {
        Some(path) => match utils::sha256_file(&path).await {
            Ok(digest) => {
                info!("Local SHA-256: {}", digest);
                digest
            }
            Err(e) => error!("Failed to hash {}: {}", path.display(), e),
        },
        None => match hash {
            Some(hash) => utils::normalize_hash(&hash),
            None => error!("Nothing to verify. Pass --hash or --file."),
        },
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message("Querying registry...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let result = match registry::verify::verify(&hash).await {
        Ok(result) => {
            pb.finish_and_clear();
            result
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Verification request failed: {}", e);
        }
    };

    if json {
        match serde_json::to_string_pretty(&result) {
            Ok(dump) => println!("{}", dump),
            Err(e) => error!("Failed to render response: {}", e),
        }
        return;
    }

    if result.on_chain {
        success!("Hash is anchored on chain.");
        if let Some(issuer) = &result.issuer {
            info!("Anchor issuer: {}", issuer);
        }
        if let Some(ts) = result.timestamp {
            info!("Anchored at: {}", utils::format_timestamp(ts));
        }
    } else {
        warning!("Hash is not anchored on chain.");
    }

    match &result.meta {
        Some(meta) => {
            info!(
                "Registry record: {} • {} • {}",
                meta.student_name, meta.course_name, meta.issue_date
            );
            info!("Issued to {} by issuer {}", meta.student_email, meta.issuer_id);
        }
        None => warning!("No registry record for this hash."),
    }
}
