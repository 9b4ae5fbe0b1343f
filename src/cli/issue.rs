use std::{path::PathBuf, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    config, error, info, management::SessionManager, registry, success, types::IssueRequest, utils,
};

use super::prompt::prompt_text;

pub async fn issue(
    student_name: Option<String>,
    student_email: Option<String>,
    course_name: Option<String>,
    issue_date: Option<String>,
    file: PathBuf,
    download: bool,
) {
    let session = match SessionManager::load().await {
        Ok(session) => session,
        Err(e) => {
            error!(
                "No session found. Please run certcli login\n Error: {}",
                e
            );
        }
    };

    if async_fs::metadata(&file).await.is_err() {
        error!("File not found: {}", file.display());
    }
    if !utils::is_pdf(&file) {
        error!("Only PDF certificates can be issued: {}", file.display());
    }

    let student_name = student_name.unwrap_or_else(|| prompt_text("Student name"));
    let student_email = student_email.unwrap_or_else(|| prompt_text("Student email"));
    let course_name = course_name.unwrap_or_else(|| prompt_text("Course name"));
    let issue_date_input = issue_date.unwrap_or_else(|| prompt_text("Issue date (YYYY-MM-DD)"));
    // the registry accepts two date formats; always transmit ISO
    let issue_date = match utils::parse_issue_date(&issue_date_input) {
        Ok(date) => date.format("%Y-%m-%d").to_string(),
        Err(e) => error!("{}", e),
    };

    let request = IssueRequest {
        student_name,
        student_email,
        course_name,
        issue_date,
        file,
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message("Uploading certificate...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let issued = match registry::certificates::issue(session.token(), &request).await {
        Ok(issued) => {
            pb.finish_and_clear();
            issued
        }
        Err(e) if e.is_unauthorized() => {
            pb.finish_and_clear();
            error!("{}. Your session may have expired, run certcli login.", e);
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to issue certificate: {}", e);
        }
    };

    match issued.id {
        Some(id) => success!("Certificate {} issued for {}.", id, request.student_name),
        None => success!("Certificate issued for {}.", request.student_name),
    }
    info!("File hash: {}", issued.hash);
    if let Some(tx) = &issued.tx {
        info!("Anchored on chain in transaction {}", tx);
    }

    if !download {
        info!("Fetch the stored copy with: certcli certificates download <id>");
        return;
    }

    let pb = ProgressBar::new_spinner();
    pb.set_message("Downloading stored copy...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    match registry::certificates::download(Some(session.token()), &issued.download_url).await {
        Ok(bytes) => {
            pb.finish_and_clear();
            let dir = config::download_dir();
            match utils::save_download(&bytes, &dir, &issued.filename).await {
                Ok(path) => success!("Saved {}", path.display()),
                Err(e) => error!("Failed to save download: {}", e),
            }
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Download failed: {}", e);
        }
    }
}
