//! Interactive front-end driving the core wizard through dialoguer prompts.
//!
//! All form rules live in the core state machine; this module only turns
//! render models into prompts and terminal events into wizard events.

use anyhow::{Context, Result};
use dialoguer::{Confirm, Input, MultiSelect, Select};

use ideadrop_config::WebhookConfig;
use ideadrop_core::questions::OTHER_PLATFORM;
use ideadrop_core::render::{EntryView, Progress, RenderModel, Screen};
use ideadrop_core::webhook::WebhookSink;
use ideadrop_core::wizard::Wizard;

use super::style::style;

/// Typing this at a text prompt returns to the previous question.
const BACK_COMMAND: &str = ":back";

pub async fn handle_wizard_command() -> Result<()> {
    let config = WebhookConfig::from_env().context("cannot start the idea wizard")?;
    let sink = WebhookSink::new(config);
    tracing::debug!(endpoint = sink.endpoint(), "webhook sink ready");
    let mut wizard = Wizard::new();

    println!("{}", style("Software Idea Collection").magenta().bold());
    println!("Share your software idea. If it gets developed, you'll be notified!");

    loop {
        let model = wizard.render();
        match &model.screen {
            Screen::Question { .. } => {
                print_step_header(&model);
                prompt_question(&mut wizard, &model)?;
            }
            Screen::Notification { .. } => {
                print_step_header(&model);
                if prompt_notification(&mut wizard, &model)? {
                    println!("{}", style("Submitting...").dim());
                    wizard.advance_with(&sink).await;
                }
            }
            Screen::Submitted {
                heading,
                message,
                restart_label,
            } => {
                println!();
                println!("{}", style(*heading).green().bold());
                println!("{message}");
                println!("{}", style(ideadrop_config::share_url()).cyan());
                let again = Confirm::new()
                    .with_prompt(restart_label.to_string())
                    .default(false)
                    .interact()?;
                if !again {
                    break;
                }
                wizard.restart();
            }
        }
        if let Some(error) = wizard.error() {
            println!("{}", style(error).red());
        }
    }
    Ok(())
}

fn print_step_header(model: &RenderModel) {
    println!();
    println!("{}", style(progress_line(model.progress)).dim());
    match &model.screen {
        Screen::Question {
            label, description, ..
        } => {
            println!("{}", style(*label).bold());
            println!("{}", style(*description).dim());
        }
        Screen::Notification { .. } => {
            println!("{}", style("How would you like to be notified?").bold());
            println!(
                "{}",
                style("Choose your preferred notification method. If your idea gets developed, you'll be notified!")
                    .dim()
            );
        }
        Screen::Submitted { .. } => {}
    }
}

fn progress_line(progress: Progress) -> String {
    const BAR_WIDTH: usize = 24;
    let filled = ((progress.fraction() * BAR_WIDTH as f32).round() as usize).min(BAR_WIDTH);
    format!(
        "Question {} of {}  [{}{}]",
        progress.position,
        progress.total,
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled)
    )
}

fn prompt_question(wizard: &mut Wizard, model: &RenderModel) -> Result<()> {
    let Screen::Question {
        key,
        placeholder,
        entry,
        ..
    } = &model.screen
    else {
        return Ok(());
    };
    match entry {
        EntryView::Text { current } => {
            if let Some(hint) = placeholder {
                println!("{}", style(*hint).dim());
            }
            if model.controls.back_enabled {
                println!(
                    "{}",
                    style(format!("(type {BACK_COMMAND} to go back)")).dim()
                );
            }
            let value: String = Input::new()
                .with_prompt("Your answer")
                .allow_empty(true)
                .with_initial_text(current.clone())
                .interact_text()?;
            if value.trim() == BACK_COMMAND {
                wizard.previous();
                return Ok(());
            }
            wizard.set_text_answer(key, value);
            wizard.next();
        }
        EntryView::Platform {
            options,
            other_detail,
            ..
        } => {
            let items: Vec<String> = options
                .iter()
                .map(|option| format!("{} {}", option.icon, option.value))
                .collect();
            let defaults: Vec<bool> = options.iter().map(|option| option.selected).collect();
            let chosen = MultiSelect::new()
                .with_prompt("Select your target platforms")
                .items(&items)
                .defaults(&defaults)
                .interact()?;
            let values: Vec<String> = chosen
                .into_iter()
                .map(|index| options[index].value.to_string())
                .collect();
            let other_selected = values.iter().any(|value| value == OTHER_PLATFORM);
            wizard.set_platforms(values);
            if other_selected {
                let detail: String = Input::new()
                    .with_prompt("Please specify other platform")
                    .allow_empty(true)
                    .with_initial_text(other_detail.clone().unwrap_or_default())
                    .interact_text()?;
                wizard.set_platform_other(detail);
            }
            wizard.next();
        }
    }
    Ok(())
}

/// Prompt for method and contact. Returns true when the wizard should submit.
fn prompt_notification(wizard: &mut Wizard, model: &RenderModel) -> Result<bool> {
    let Screen::Notification { methods, contact } = &model.screen else {
        return Ok(false);
    };
    let labels: Vec<&str> = methods.iter().map(|view| view.method.label()).collect();
    let default_index = methods.iter().position(|view| view.chosen).unwrap_or(0);
    let selection = Select::new()
        .with_prompt("Notification method")
        .default(default_index)
        .items(&labels)
        .interact()?;
    let method = methods[selection].method;
    wizard.choose_method(method);

    println!(
        "{}",
        style(format!("(type {BACK_COMMAND} to go back)")).dim()
    );
    let value: String = Input::new()
        .with_prompt(method.contact_prompt())
        .allow_empty(true)
        .with_initial_text(contact.clone())
        .interact_text()?;
    if value.trim() == BACK_COMMAND {
        wizard.previous();
        return Ok(false);
    }
    wizard.set_contact(value);
    Ok(true)
}
