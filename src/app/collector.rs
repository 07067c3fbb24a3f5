//! Interactive configuration collector.
//!
//! Prompts the operator for every field in a fixed order. All validation
//! happens here, before acceptance; a rejected value is re-prompted and
//! never escapes. Cancelling any prompt (Ctrl-C) or declining the final
//! confirmation yields `Ok(None)`: no step runs, the caller exits cleanly.

use std::io::ErrorKind;

use dialoguer::{Confirm, Error as DialoguerError, Input, MultiSelect};

use crate::domain::validation::{
    is_valid_application_name, is_valid_composer_name, is_valid_email, is_valid_https_url,
};
use crate::domain::{AppError, Author, BaseFile, ComposerSettings, Configuration, Tool};

/// Collect the full configuration record, or `None` when the operator
/// cancels.
pub fn collect() -> Result<Option<Configuration>, AppError> {
    let Some(application_name) = prompt_application_name()? else {
        return Ok(None);
    };
    let Some(base_files) = prompt_base_files()? else {
        return Ok(None);
    };
    let Some(tools) = prompt_tools()? else {
        return Ok(None);
    };
    let Some(composer) = prompt_composer(&application_name)? else {
        return Ok(None);
    };
    let Some(move_tinker) = prompt_confirm("Move tinker to require-dev?", true)? else {
        return Ok(None);
    };
    let Some(remove_frontend) = prompt_confirm("Remove frontend scaffolding?", true)? else {
        return Ok(None);
    };

    let Some(proceed) = prompt_confirm("Apply this configuration?", true)? else {
        return Ok(None);
    };
    if !proceed {
        return Ok(None);
    }

    Ok(Some(Configuration {
        application_name,
        base_files,
        tools,
        composer,
        move_tinker,
        remove_frontend,
    }))
}

/// Map a dialoguer result: Ctrl-C becomes `None`, anything else unexpected
/// becomes a validation error.
fn prompted<T>(result: Result<T, DialoguerError>, what: &str) -> Result<Option<T>, AppError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::validation(format!("Failed to read {what}: {err}"))),
    }
}

fn prompt_application_name() -> Result<Option<String>, AppError> {
    prompted(
        Input::<String>::new()
            .with_prompt("Application name (PascalCase, letters only)")
            .validate_with(|input: &String| -> Result<(), String> {
                if is_valid_application_name(input) {
                    Ok(())
                } else {
                    Err("The name must be strict PascalCase with letters only, e.g. MyApp"
                        .to_string())
                }
            })
            .interact_text(),
        "application name",
    )
}

fn prompt_base_files() -> Result<Option<Vec<BaseFile>>, AppError> {
    let labels: Vec<&str> = BaseFile::ALL.iter().map(|file| file.label()).collect();
    let selected = prompted(
        MultiSelect::new()
            .with_prompt("Base files to create")
            .items(&labels)
            .defaults(&[true; 2])
            .interact(),
        "base file selection",
    )?;
    Ok(selected.map(|indices| {
        BaseFile::ALL
            .iter()
            .enumerate()
            .filter(|(index, _)| indices.contains(index))
            .map(|(_, file)| *file)
            .collect()
    }))
}

fn prompt_tools() -> Result<Option<Vec<Tool>>, AppError> {
    let labels: Vec<&str> = Tool::ALL.iter().map(|tool| tool.label()).collect();
    let selected = prompted(
        MultiSelect::new()
            .with_prompt("Tools to install")
            .items(&labels)
            .defaults(&[true; 6])
            .interact(),
        "tool selection",
    )?;
    Ok(selected.map(|indices| {
        Tool::ALL
            .iter()
            .enumerate()
            .filter(|(index, _)| indices.contains(index))
            .map(|(_, tool)| *tool)
            .collect()
    }))
}

fn prompt_composer(application_name: &str) -> Result<Option<ComposerSettings>, AppError> {
    let Some(name) = prompted(
        Input::<String>::new()
            .with_prompt("Composer package name (vendor/package)")
            .validate_with(|input: &String| -> Result<(), String> {
                if is_valid_composer_name(input) {
                    Ok(())
                } else {
                    Err("Must match vendor/package in lowercase, e.g. acme/my-app".to_string())
                }
            })
            .interact_text(),
        "composer package name",
    )?
    else {
        return Ok(None);
    };

    let Some(description) = prompted(
        Input::<String>::new()
            .with_prompt("Package description")
            .default(format!("The {application_name} application"))
            .interact_text(),
        "package description",
    )?
    else {
        return Ok(None);
    };

    let Some(license) = prompted(
        Input::<String>::new().with_prompt("License").default("MIT".to_string()).interact_text(),
        "license",
    )?
    else {
        return Ok(None);
    };

    let mut authors = Vec::new();
    loop {
        let Some(author) = prompt_author()? else {
            return Ok(None);
        };
        authors.push(author);

        let Some(another) = prompt_confirm("Add another author?", false)? else {
            return Ok(None);
        };
        if !another {
            break;
        }
    }

    Ok(Some(ComposerSettings { name, description, license, authors }))
}

fn prompt_author() -> Result<Option<Author>, AppError> {
    let Some(name) =
        prompted(Input::<String>::new().with_prompt("Author name").interact_text(), "author name")?
    else {
        return Ok(None);
    };

    let Some(email) = prompted(
        Input::<String>::new()
            .with_prompt("Author email")
            .validate_with(|input: &String| -> Result<(), String> {
                if is_valid_email(input) {
                    Ok(())
                } else {
                    Err("Must be a valid email address".to_string())
                }
            })
            .interact_text(),
        "author email",
    )?
    else {
        return Ok(None);
    };

    let Some(role) = prompted(
        Input::<String>::new()
            .with_prompt("Author role")
            .default("Developer".to_string())
            .interact_text(),
        "author role",
    )?
    else {
        return Ok(None);
    };

    let Some(homepage) = prompted(
        Input::<String>::new()
            .with_prompt("Author homepage")
            .validate_with(|input: &String| -> Result<(), String> {
                if is_valid_https_url(input) {
                    Ok(())
                } else {
                    Err("Must be an HTTPS URL, e.g. https://example.com".to_string())
                }
            })
            .interact_text(),
        "author homepage",
    )?
    else {
        return Ok(None);
    };

    Ok(Some(Author { name, email, role, homepage }))
}

fn prompt_confirm(prompt: &str, default: bool) -> Result<Option<bool>, AppError> {
    prompted(Confirm::new().with_prompt(prompt).default(default).interact(), "confirmation")
}
