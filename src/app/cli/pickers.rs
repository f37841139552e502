//! Interactive field pickers.

use dialoguer::{Confirm, Input, Select};

use crate::domain::{AppError, FieldSelection, Language, RefinementMode, TYPE_YOUR_OWN};

fn picker_error(what: &str, err: impl std::fmt::Display) -> AppError {
    AppError::Validation(format!("Failed to select {}: {}", what, err))
}

/// Pick a field value from a preset catalog, or type free text behind the
/// sentinel entry. Choosing a preset discards any previously typed text.
pub fn typed_or_select(label: &str, options: &[&str]) -> Result<String, AppError> {
    let mut items: Vec<&str> = Vec::with_capacity(options.len() + 1);
    items.push(TYPE_YOUR_OWN);
    items.extend_from_slice(options);

    let selection = Select::new()
        .with_prompt(label)
        .items(&items)
        .default(0)
        .interact()
        .map_err(|err| picker_error(label, err))?;

    let selection = if selection == 0 {
        let typed: String = Input::new()
            .with_prompt(format!("{} (custom)", label))
            .allow_empty(true)
            .interact_text()
            .map_err(|err| picker_error(label, err))?;
        FieldSelection::Custom(typed)
    } else {
        FieldSelection::Preset(items[selection].to_string())
    };

    Ok(selection.resolve())
}

pub fn select_language(default: Language) -> Result<Language, AppError> {
    let items: Vec<&str> = Language::ALL.iter().map(|l| l.display_name()).collect();
    let default_index =
        Language::ALL.iter().position(|l| *l == default).unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Output language")
        .items(&items)
        .default(default_index)
        .interact()
        .map_err(|err| picker_error("output language", err))?;

    Ok(Language::ALL[selection])
}

pub fn select_mode() -> Result<RefinementMode, AppError> {
    let items: Vec<&str> = RefinementMode::ALL.iter().map(|m| m.display_name()).collect();

    let selection = Select::new()
        .with_prompt("Smart prompt refinement")
        .items(&items)
        .default(0)
        .interact()
        .map_err(|err| picker_error("refinement mode", err))?;

    Ok(RefinementMode::ALL[selection])
}

pub fn confirm_tips(default: bool) -> Result<bool, AppError> {
    Confirm::new()
        .with_prompt("Auto-apply output tips for print/seller styles?")
        .default(default)
        .interact()
        .map_err(|err| picker_error("tips toggle", err))
}

pub fn input_idea() -> Result<String, AppError> {
    let idea: String = Input::new()
        .with_prompt("Short idea (e.g. magical forest cat)")
        .allow_empty(true)
        .interact_text()
        .map_err(|err| picker_error("idea", err))?;
    Ok(idea.trim().to_string())
}
