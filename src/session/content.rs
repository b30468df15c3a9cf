use std::sync::OnceLock;

use time::OffsetDateTime;
use time::format_description::FormatItem;

use super::commands::command_defs;
use crate::model::{Fragment, Output};

pub const PROMPT: &str = "guest@terry-djony-portfolio:~$";
pub const WINDOW_TITLE: &str = "terry-djony@portfolio: ~";

const BANNER_FULL: &str = concat!(
    "\n",
    "████████╗███████╗██████╗ ██████╗ ██╗   ██╗    ██████╗      ██╗ ██████╗ ███╗   ██╗██╗   ██╗\n",
    "╚══██╔══╝██╔════╝██╔══██╗██╔══██╗╚██╗ ██╔╝    ██╔══██╗     ██║██╔═══██╗████╗  ██║╚██╗ ██╔╝\n",
    "   ██║   █████╗  ██████╔╝██████╔╝ ╚████╔╝     ██║  ██║     ██║██║   ██║██╔██╗ ██║ ╚████╔╝ \n",
    "   ██║   ██╔══╝  ██╔══██╗██╔══██╗  ╚██╔╝      ██║  ██║██   ██║██║   ██║██║╚██╗██║  ╚██╔╝  \n",
    "   ██║   ███████╗██║  ██║██║  ██║   ██║       ██████╔╝╚█████╔╝╚██████╔╝██║ ╚████║   ██║   \n",
    "   ╚═╝   ╚══════╝╚═╝  ╚═╝╚═╝  ╚═╝   ╚═╝       ╚═════╝  ╚════╝  ╚═════╝ ╚═╝  ╚═══╝   ╚═╝   \n",
);

const BANNER_COMPACT: &str = concat!(
    "\n",
    "████████╗███████╗██████╗ ██████╗ ██╗   ██╗\n",
    "╚══██╔══╝██╔════╝██╔══██╗██╔══██╗╚██╗ ██╔╝\n",
    "   ██║   █████╗  ██████╔╝██████╔╝ ╚████╔╝ \n",
    "   ██║   ██╔══╝  ██╔══██╗██╔══██╗  ╚██╔╝  \n",
    "   ██║   ███████╗██║  ██║██║  ██║   ██║   \n",
    "   ╚═╝   ╚══════╝╚═╝  ╚═╝╚═╝  ╚═╝   ╚═╝   \n",
);

const WELCOME: &str = concat!(
    "Welcome to Terry Djony's Terminal Portfolio!\n",
    "Indonesian YC W21 Alumni • Self-taught programmer • Tech Startup Entrepreneur (SaaS and AI)\n",
    "Type 'help' for available commands.\n",
);

const ABOUT: &str = concat!(
    "Hey there! 👋 I'm Terry Djony\n",
    "\n",
    "🇮🇩 The First Indonesian Gen-Z at YCombinator Batch W21\n",
    "🏠 Now based in Bandung, Indonesia\n",
    "💻 Self-taught programmer since age 13\n",
    "🎓 Former engineering physics student\n",
    "🚀 Building in SaaS & AI\n",
);

const NEOFETCH_HEAD: &str = concat!(
    "                    terry-djony@indonesia\n",
    "                    ----------------------\n",
    "        ..          OS: Entrepreneur OS\n",
    "      .::::::.      Host: YC W21 Alumni\n",
    "     ::::::::::::   Location: Bandung, Indonesia\n",
    "    ::::::::::::::  Uptime: ",
);

const NEOFETCH_TAIL: &str = concat!(
    " minutes\n",
    "   ::::::::::::::::  Experience: Self-taught since age 13\n",
    "  ::::::::::::::::::  Status: Building SaaS Companies\n",
    "   ::::::::::::::::  Focus: AI + Customer Support\n",
    "    ::::::::::::::   Products: Serving millions of users\n",
    "     ::::::::::::    \n",
    "      .::::::.      \n",
    "        ..          ",
);

struct Project {
    icon: &'static str,
    name: &'static str,
    url: Option<&'static str>,
    year: u16,
    details: &'static [&'static str],
}

const PROJECTS: &[Project] = &[
    Project {
        icon: "🤖",
        name: "FirstSupport.ai",
        url: Some("https://firstsupport.ai"),
        year: 2024,
        details: &[
            "QA Automation for Customer Support",
            "AI-powered customer service automation",
        ],
    },
    Project {
        icon: "💬",
        name: "Chatbiz",
        url: None,
        year: 2021,
        details: &[
            "WhatsApp Chatbot Builder for Indonesia",
            "Serving millions of chats per month",
            "Used by telco, FMCG, hospitals, and more",
        ],
    },
    Project {
        icon: "🧪",
        name: "SnipSolve AI",
        url: None,
        year: 2024,
        details: &[
            "Chrome Extension with AI + Snipping Tool",
            "Solve questions easily with built-in AI",
        ],
    },
    Project {
        icon: "⏺️",
        name: "Recordscript",
        url: None,
        year: 2024,
        details: &[
            "Open-source video recorder + transcriber",
            "Built with Rust & WhisperCpp",
        ],
    },
    Project {
        icon: "📊",
        name: "GPT Sheets Plus",
        url: None,
        year: 2024,
        details: &[
            "Formula add-on for Google Sheets",
            "Integrates Perplexity, OpenAI GPT, and more",
        ],
    },
    Project {
        icon: "📹",
        name: "YouTube Tools",
        url: None,
        year: 2025,
        details: &[
            "Video Transcripts & Caption Plus extensions",
            "AI chat about video content",
        ],
    },
    Project {
        icon: "🕸️",
        name: "dTON Explorer",
        url: None,
        year: 2025,
        details: &["TON Blockchain Query & Data Explorer"],
    },
];

pub fn banner(compact: bool) -> &'static str {
    if compact { BANNER_COMPACT } else { BANNER_FULL }
}

pub fn welcome(compact: bool) -> Output {
    Output::PlainText(format!("{}\n{}", banner(compact), WELCOME))
}

/// One row per command; each name is clickable in views that support it.
pub fn help_table() -> Output {
    let mut frags = vec![Fragment::text("Available commands:\n")];
    let defs = command_defs();
    for (i, def) in defs.iter().enumerate() {
        if i > 0 {
            frags.push(Fragment::text("\n"));
        }
        let pad = 12usize.saturating_sub(def.name.chars().count());
        frags.push(Fragment::text("  "));
        frags.push(Fragment::invocable(def.name));
        frags.push(Fragment::text(format!("{} - {}", " ".repeat(pad), def.help)));
    }
    Output::Structured(frags)
}

pub fn about() -> Output {
    Output::PlainText(ABOUT.to_string())
}

pub fn projects() -> Output {
    let mut frags = vec![Fragment::text("My Projects:\n\n")];
    for (i, p) in PROJECTS.iter().enumerate() {
        if i > 0 {
            frags.push(Fragment::text("\n"));
        }
        frags.push(Fragment::text(format!("{} ", p.icon)));
        match p.url {
            Some(url) => frags.push(Fragment::link(url, p.name)),
            None => frags.push(Fragment::text(p.name)),
        }
        let mut tail = format!(" ({})\n", p.year);
        for d in p.details {
            tail.push_str("   └── ");
            tail.push_str(d);
            tail.push('\n');
        }
        frags.push(Fragment::text(tail));
    }
    Output::Structured(frags)
}

pub fn contact() -> Output {
    Output::Structured(vec![
        Fragment::text("Contact Information:\n\n📧 Email: "),
        Fragment::link("mailto:hi@terrydjony.com", "hi@terrydjony.com"),
        Fragment::text("\n🐙 GitHub:    "),
        Fragment::link("https://github.com/terryds", "https://github.com/terryds"),
        Fragment::text("\n🐦 Twitter:   "),
        Fragment::link("https://x.com/Terry_Djony", "https://x.com/Terry_Djony"),
        Fragment::text("\n"),
    ])
}

pub fn whoami() -> Output {
    Output::PlainText(PROMPT.to_string())
}

pub fn ls() -> Output {
    Output::Structured(vec![
        Fragment::invocable("about"),
        Fragment::text("  "),
        Fragment::invocable("projects"),
        Fragment::text("  "),
        Fragment::invocable("contact"),
    ])
}

fn date_format() -> &'static [FormatItem<'static>] {
    static FMT: OnceLock<Vec<FormatItem<'static>>> = OnceLock::new();
    FMT.get_or_init(|| {
        time::format_description::parse(
            "[weekday repr:short] [month repr:short] [day padding:zero] [year] [hour padding:zero]:[minute padding:zero]:[second padding:zero] GMT[offset_hour sign:mandatory][offset_minute]",
        )
        .expect("valid time format")
    })
}

pub fn date(now: OffsetDateTime) -> Output {
    let s = now
        .format(date_format())
        .map(|s| format!("{} (UTC)", s))
        .unwrap_or_else(|_| "<time>".to_string());
    Output::PlainText(s)
}

pub fn neofetch(uptime_minutes: i64) -> Output {
    Output::PlainText(format!(
        "{}{}{}",
        NEOFETCH_HEAD, uptime_minutes, NEOFETCH_TAIL
    ))
}

pub fn echo(args: &[&str]) -> Output {
    Output::PlainText(args.join(" "))
}

/// 1-indexed, index right-aligned to three columns.
pub fn history(lines: &[String]) -> Output {
    Output::PlainText(
        lines
            .iter()
            .enumerate()
            .map(|(i, l)| format!("{:>3} {}", i + 1, l))
            .collect::<Vec<_>>()
            .join("\n"),
    )
}

pub fn not_found(command: &str) -> Output {
    Output::PlainText(format!(
        "Command not found: {}\nType 'help' for available commands.",
        command
    ))
}

#[cfg(test)]
#[path = "../tests/session/content_tests.rs"]
mod tests;
