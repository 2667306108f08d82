mod args;
mod interactive;
mod render;

use std::process::ExitCode;

use anyhow::{Context, bail};
use args::{Cli, Command};
use clap::Parser;
use client::forms::{AdminLoginForm, CompForm, QuizForm, StatusQueryForm};
use client::{ClientConfig, DashboardState, Screen, ViewController};
use dialoguer::Password;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok(), cli.log_level))
        .init();

    let mut config = match &cli.config {
        Some(path) => ClientConfig::load_from(path),
        None => ClientConfig::load(),
    }
    .context("Failed to load config")?;
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }
    info!(base_url = %config.api.base_url, "Client starting");

    let controller = client::connect(&config)
        .await
        .context("Failed to initialize client")?;

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Interactive => {
            interactive::run(&controller).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::ApplyQuiz {
            name,
            email,
            answers,
        } => {
            let form = QuizForm {
                name,
                email,
                answers,
            };
            form.submit(|application| controller.submit(application))
                .await?;
            Ok(show_result(&controller).await)
        }
        Command::ApplyComp {
            team_name,
            members,
            details,
        } => {
            let form = CompForm {
                team_name,
                members,
                competition_details: details,
            };
            form.submit(|application| controller.submit(application))
                .await?;
            Ok(show_result(&controller).await)
        }
        Command::Status { id } => {
            let controller = &controller;
            StatusQueryForm { id }
                .submit(|id| async move { controller.query(&id).await })
                .await?;
            Ok(show_result(controller).await)
        }
        Command::Login { password } => {
            let password = match password {
                Some(password) => password,
                None => {
                    interactive::prompt(|| Password::new().with_prompt("Admin password").interact())
                        .await?
                }
            };
            let controller = &controller;
            AdminLoginForm { password }
                .submit(|password| async move { controller.admin_login(&password).await })
                .await?;
            show_notice(controller).await;
            Ok(if controller.is_authenticated().await {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Logout => {
            controller
                .logout()
                .await
                .context("Failed to clear the saved session")?;
            show_notice(&controller).await;
            Ok(ExitCode::SUCCESS)
        }
        Command::Applications => {
            let Some(mut dashboard) = controller.mount_dashboard().await else {
                bail!("Not signed in. Run `openrev login` first.");
            };
            dashboard.load().await;
            render::dashboard(&dashboard.view());
            match dashboard.state() {
                DashboardState::Failed { auth_expired, .. } => {
                    if *auth_expired {
                        render::problem("Run `openrev login` to sign in again.");
                    }
                    Ok(ExitCode::FAILURE)
                }
                _ => Ok(ExitCode::SUCCESS),
            }
        }
    }
}

/// `RUST_LOG` directives when set and valid, otherwise `fallback`.
fn log_filter(directives: Option<String>, fallback: Level) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(fallback.as_str().to_ascii_lowercase()))
}

async fn show_result(controller: &ViewController) -> ExitCode {
    let Screen::StatusResult(view) = controller.screen().await else {
        return ExitCode::FAILURE;
    };
    render::result(&view);
    match controller.outcome().await {
        Some(outcome) if !outcome.is_failure() => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}

async fn show_notice(controller: &ViewController) {
    if let Some(notice) = controller.notice().await {
        render::notice(&notice);
    }
}
