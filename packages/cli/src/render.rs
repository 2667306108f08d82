use client::dashboard::DashboardEntry;
use client::{DashboardView, Notice, Page, ResultLine, ResultView, Tone};
use console::style;

pub fn nav_bar(items: &[Page], current: Page, signed_in: bool, has_back: bool) {
    let mut parts = vec![format!("[0] {}", Page::Home.title())];
    for (i, page) in items.iter().enumerate() {
        let label = format!("[{}] {}", i + 1, page.title());
        if *page == current {
            parts.push(style(label).bold().underlined().to_string());
        } else {
            parts.push(label);
        }
    }
    if has_back {
        parts.push("[b] Back".into());
    }
    if signed_in {
        parts.push("[x] Sign out".into());
    }
    parts.push("[q] Quit".into());
    println!("{}", parts.join("  "));
}

pub fn heading(page: Page) {
    println!();
    println!("{}", style(page.title()).bold());
}

pub fn notice(notice: &Notice) {
    println!("{} {}", style("›").cyan(), style(&notice.message).cyan());
}

pub fn problem(message: impl std::fmt::Display) {
    println!("{}", style(message).red());
}

fn line(line: &ResultLine) {
    match line {
        ResultLine::Field { label, value } => {
            println!("  {} {}", style(format!("{label}:")).dim(), value)
        }
        ResultLine::Note(text) => println!("  {}", style(text).italic()),
    }
}

pub fn result(view: &ResultView) {
    let title = match view.tone {
        Tone::Success => style(&view.title).green().bold(),
        Tone::Failure => style(&view.title).red().bold(),
        Tone::Info => style(&view.title).cyan().bold(),
    };
    println!("{title}");
    for l in &view.lines {
        line(l);
    }
}

fn entry(entry: &DashboardEntry) {
    println!(
        "{}  {}",
        style(&entry.heading).bold(),
        style(format!("[{}]", entry.status)).yellow()
    );
    for l in &entry.lines {
        line(l);
    }
}

pub fn dashboard(view: &DashboardView) {
    match view {
        DashboardView::Loading => println!("{}", style("Loading...").dim()),
        DashboardView::Failed { message } => problem(format!("Error: {message}")),
        DashboardView::Empty => println!("There are no applications to review."),
        DashboardView::Entries(entries) => {
            for e in entries {
                entry(e);
                println!();
            }
        }
    }
}
