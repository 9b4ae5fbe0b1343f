use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{error, info, management::SessionManager, registry};

pub async fn whoami() {
    let session = match SessionManager::load().await {
        Ok(session) => session,
        Err(e) => {
            error!(
                "No session found. Please run certcli login\n Error: {}",
                e
            );
        }
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching account...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    match registry::account::me(session.token()).await {
        Ok(profile) => {
            pb.finish_and_clear();
            info!("Logged in as {} ({})", profile.email, profile.role);
            info!("Account id: {}", profile.id);
        }
        Err(e) if e.is_unauthorized() => {
            pb.finish_and_clear();
            error!("{}. Your session may have expired, run certcli login.", e);
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch account: {}", e);
        }
    }
}

pub async fn stats() {
    let session = match SessionManager::load().await {
        Ok(session) => session,
        Err(e) => {
            error!(
                "No session found. Please run certcli login\n Error: {}",
                e
            );
        }
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching registry statistics...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    match registry::account::stats(session.token()).await {
        Ok(counts) => {
            pb.finish_and_clear();
            info!("Registered users: {}", counts.users);
            info!("Issued certificates: {}", counts.certificates);
        }
        Err(e) if e.is_unauthorized() => {
            pb.finish_and_clear();
            error!("{}. Your session may have expired, run certcli login.", e);
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch statistics: {}", e);
        }
    }
}
