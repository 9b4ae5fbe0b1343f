use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    error, info,
    management::SessionManager,
    registry, success,
    types::{LoginRequest, RegisterRequest},
    utils,
};

use super::prompt::{prompt_password, prompt_role, prompt_text};

pub async fn register(email: Option<String>, role: Option<String>, password: Option<String>) {
    let email = email.unwrap_or_else(|| prompt_text("Email"));
    let role = match role {
        Some(role) => match utils::parse_role(&role) {
            Ok(role) => role,
            Err(e) => error!("{}", e),
        },
        None => prompt_role(),
    };
    let password = password.unwrap_or_else(|| prompt_password("Password"));

    let request = RegisterRequest {
        email,
        password,
        role,
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message("Registering account...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    match registry::auth::register(&request).await {
        Ok(message) => {
            pb.finish_and_clear();
            success!("{}. You can now log in.", message);
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Registration failed: {}", e);
        }
    }
}

pub async fn login(email: Option<String>, password: Option<String>) {
    let email = email.unwrap_or_else(|| prompt_text("Email"));
    let password = password.unwrap_or_else(|| prompt_password("Password"));

    let request = LoginRequest {
        email: email.clone(),
        password,
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message("Logging in...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let access_token = match registry::auth::login(&request).await {
        Ok(token) => {
            pb.finish_and_clear();
            token
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Login failed: {}", e);
        }
    };

    // the session stores the token exactly as the registry returned it
    let session = SessionManager::new(access_token, email);
    if let Err(e) = session.persist().await {
        error!("Failed to save session: {}", e);
    }

    success!("Logged in");
}

pub async fn logout() {
    match SessionManager::clear().await {
        Ok(_) => success!("Logged out, session removed."),
        Err(_) => info!("No session to remove."),
    }
}
