use std::{path::PathBuf, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    config, error, info,
    management::SessionManager,
    registry, success,
    types::{CertificateHashTableRow, CertificateTableRow},
    utils, warning,
};

pub async fn list_certificates(search: Option<String>, show_hashes: bool) {
    let session = SessionManager::load().await.ok();
    if session.is_none() {
        warning!("No session found, requesting without authentication.");
    }
    let token = session.as_ref().map(|s| s.token());

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching certificates...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let mut records = match registry::certificates::list(token).await {
        Ok(records) => {
            pb.finish_and_clear();
            records
        }
        Err(e) if e.is_unauthorized() => {
            pb.finish_and_clear();
            error!("{}. Run certcli login first.", e);
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to load certificates: {}", e);
        }
    };

    if let Some(term) = search {
        let term = term.to_lowercase();
        records.retain(|r| {
            r.student_name.to_lowercase().contains(&term)
                || r.course_name.to_lowercase().contains(&term)
        });
    }

    if records.is_empty() {
        info!("No certificates found.");
        return;
    }

    utils::sort_certificates(&mut records);

    if show_hashes {
        let rows: Vec<CertificateHashTableRow> = records
            .into_iter()
            .map(|r| CertificateHashTableRow {
                id: r.id,
                date: r.issue_date,
                student: r.student_name,
                course: r.course_name,
                hash: r.file_hash,
            })
            .collect();

        let table = Table::new(rows);
        println!("{}", table);
        return;
    }

    let rows: Vec<CertificateTableRow> = records
        .into_iter()
        .map(|r| CertificateTableRow {
            id: r.id,
            date: r.issue_date,
            student: r.student_name,
            course: r.course_name,
            file: r.filename.unwrap_or_default(),
        })
        .collect();

    let table = Table::new(rows);
    println!("{}", table);
}

pub async fn download_certificate(id: i64, out: Option<PathBuf>) {
    let session = SessionManager::load().await.ok();
    let token = session.as_ref().map(|s| s.token());

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching certificates...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let records = match registry::certificates::list(token).await {
        Ok(records) => {
            pb.finish_and_clear();
            records
        }
        Err(e) if e.is_unauthorized() => {
            pb.finish_and_clear();
            error!("{}. Run certcli login first.", e);
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to load certificates: {}", e);
        }
    };

    let record = match records.into_iter().find(|r| r.id == id) {
        Some(record) => record,
        None => error!("No certificate with id {}.", id),
    };

    let download_url = match &record.download_url {
        Some(url) => url.clone(),
        None => error!("Certificate {} has no stored file to download.", id),
    };

    info!("Downloading certificate for {}", utils::meta_line(&record));

    let pb = ProgressBar::new_spinner();
    pb.set_message("Downloading file...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    // a failed response aborts here; nothing is written to disk
    let bytes = match registry::certificates::download(token, &download_url).await {
        Ok(bytes) => {
            pb.finish_and_clear();
            bytes
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Download failed: {}", e);
        }
    };

    let dir = out.unwrap_or_else(config::download_dir);
    let filename = record
        .filename
        .clone()
        .unwrap_or_else(|| "certificate.pdf".to_string());
    match utils::save_download(&bytes, &dir, &filename).await {
        Ok(path) => success!("Saved {}", path.display()),
        Err(e) => error!("Failed to save download: {}", e),
    }
}
