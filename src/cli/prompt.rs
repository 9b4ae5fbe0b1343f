use dialoguer::{Input, Password, Select};

use crate::error;

pub(crate) fn prompt_text(prompt: &str) -> String {
    match Input::new().with_prompt(prompt).interact_text() {
        Ok(value) => value,
        Err(e) => error!("Failed to read input: {}", e),
    }
}

pub(crate) fn prompt_password(prompt: &str) -> String {
    match Password::new().with_prompt(prompt).interact() {
        Ok(value) => value,
        Err(e) => error!("Failed to read input: {}", e),
    }
}

pub(crate) fn prompt_role() -> String {
    let roles = ["issuer", "student"];
    match Select::new()
        .with_prompt("Role")
        .items(&roles)
        .default(1)
        .interact()
    {
        Ok(index) => roles[index].to_string(),
        Err(e) => error!("Failed to read input: {}", e),
    }
}
