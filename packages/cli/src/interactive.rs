use anyhow::Result;
use client::forms::{AdminLoginForm, CompForm, QuizForm, StatusQueryForm};
use client::{DashboardState, Page, Screen, ViewController};
use common::ValidationError;
use dialoguer::{Confirm, Input, Password};

use crate::render;

/// Typed at the navigation prompt to reach the admin login page.
const ADMIN_SHORTCUT: &str = ":admin";

#[derive(Debug, PartialEq, Eq)]
enum Nav {
    Go(Page),
    AdminShortcut,
    SignOut,
    Quit,
}

/// Whether a page's flow moved the controller somewhere new.
enum Flow {
    Moved,
    Stay,
}

/// Run a blocking terminal prompt on the blocking pool so the runtime keeps
/// driving notice timers and in-flight requests while the user types.
pub async fn prompt<T, F>(ask: F) -> Result<T>
where
    F: FnOnce() -> std::result::Result<T, dialoguer::Error> + Send + 'static,
    T: Send + 'static,
{
    Ok(tokio::task::spawn_blocking(ask).await??)
}

pub async fn run(controller: &ViewController) -> Result<()> {
    loop {
        let page = controller.current_page().await;
        render::heading(page);
        show_notice(controller).await;

        let mut back = None;
        let flow = match controller.screen().await {
            Screen::Home => {
                println!("Pick a form from the menu to apply, or look up an application by ID.");
                Flow::Stay
            }
            Screen::QuizApply => quiz(controller).await?,
            Screen::CompApply => comp(controller).await?,
            Screen::StatusQuery => status(controller).await?,
            Screen::StatusResult(view) => {
                render::result(&view);
                back = Some(view.back);
                Flow::Stay
            }
            Screen::AdminLogin => login(controller).await?,
            Screen::AdminDashboard { .. } => dashboard(controller).await?,
            Screen::Blank => Flow::Stay,
        };
        if let Flow::Moved = flow {
            continue;
        }

        let items = controller.nav_items().await;
        let signed_in = controller.is_authenticated().await;
        println!();
        render::nav_bar(&items, page, signed_in, back.is_some());
        match prompt_nav(&items, signed_in, back).await? {
            Nav::Go(target) => controller.navigate(target).await,
            Nav::AdminShortcut => controller.open_admin_login().await,
            Nav::SignOut => {
                if let Err(e) = controller.logout().await {
                    render::problem(format!("Could not clear the saved session: {e}"));
                }
            }
            Nav::Quit => return Ok(()),
        }
    }
}

/// Print the visible notice once; the terminal does not redraw it.
async fn show_notice(controller: &ViewController) {
    if let Some(notice) = controller.notice().await {
        render::notice(&notice);
        controller.dismiss_notice().await;
    }
}

fn parse_nav(choice: &str, items: &[Page], signed_in: bool, back: Option<Page>) -> Option<Nav> {
    match choice {
        "q" => Some(Nav::Quit),
        "x" if signed_in => Some(Nav::SignOut),
        "b" => back.map(Nav::Go),
        "0" => Some(Nav::Go(Page::Home)),
        ADMIN_SHORTCUT => Some(Nav::AdminShortcut),
        other => other
            .parse::<usize>()
            .ok()
            .and_then(|n| items.get(n.checked_sub(1)?))
            .or_else(|| {
                other
                    .parse::<Page>()
                    .ok()
                    .and_then(|p| items.iter().find(|i| **i == p))
            })
            .map(|p| Nav::Go(*p)),
    }
}

async fn prompt_nav(items: &[Page], signed_in: bool, back: Option<Page>) -> Result<Nav> {
    loop {
        let choice: String = prompt(|| Input::new().with_prompt(">").interact_text()).await?;
        let choice = choice.trim();
        match parse_nav(choice, items, signed_in, back) {
            Some(nav) => return Ok(nav),
            None => render::problem(format!("Unknown choice '{choice}'")),
        }
    }
}

async fn field(label: &'static str) -> Result<String> {
    prompt(move || {
        Input::new()
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()
    })
    .await
}

fn missing(e: ValidationError) -> Flow {
    render::problem(e);
    Flow::Stay
}

async fn quiz(controller: &ViewController) -> Result<Flow> {
    let form = QuizForm {
        name: field("Name").await?,
        email: field("Email").await?,
        answers: field("Answers").await?,
    };
    Ok(match form.submit(|application| controller.submit(application)).await {
        Ok(()) => Flow::Moved,
        Err(e) => missing(e),
    })
}

async fn comp(controller: &ViewController) -> Result<Flow> {
    let form = CompForm {
        team_name: field("Team name").await?,
        members: field("Members (comma-separated)").await?,
        competition_details: field("Competition details").await?,
    };
    Ok(match form.submit(|application| controller.submit(application)).await {
        Ok(()) => Flow::Moved,
        Err(e) => missing(e),
    })
}

async fn status(controller: &ViewController) -> Result<Flow> {
    let form = StatusQueryForm {
        id: field("Application ID").await?,
    };
    Ok(match form.submit(|id| async move { controller.query(&id).await }).await {
        Ok(()) => Flow::Moved,
        Err(e) => missing(e),
    })
}

async fn login(controller: &ViewController) -> Result<Flow> {
    let password = prompt(|| {
        Password::new()
            .with_prompt("Admin password")
            .allow_empty_password(true)
            .interact()
    })
    .await?;
    let form = AdminLoginForm { password };
    if let Err(e) = form
        .submit(|password| async move { controller.admin_login(&password).await })
        .await
    {
        return Ok(missing(e));
    }
    if controller.is_authenticated().await {
        return Ok(Flow::Moved);
    }
    show_notice(controller).await;
    Ok(Flow::Stay)
}

async fn dashboard(controller: &ViewController) -> Result<Flow> {
    let Some(mut dashboard) = controller.mount_dashboard().await else {
        return Ok(Flow::Stay);
    };
    render::dashboard(&dashboard.view());
    dashboard.load().await;
    render::dashboard(&dashboard.view());

    if let DashboardState::Failed { .. } = dashboard.state() {
        let again = prompt(|| {
            Confirm::new()
                .with_prompt("Log in again?")
                .default(true)
                .interact()
        })
        .await?;
        if again {
            if let Err(e) = controller.logout().await {
                render::problem(format!("Could not clear the saved session: {e}"));
            }
            controller.navigate(Page::AdminLogin).await;
            return Ok(Flow::Moved);
        }
    }
    Ok(Flow::Stay)
}
