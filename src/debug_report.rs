use festpal::{Branch, RenderStatus, ReplyResult, VerbatimReason};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        fn wrap(&self, s: &str, code: &str) -> String {
            if self.enabled { format!("{code}{s}{RESET}") } else { s.to_string() }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            self.wrap(s.as_ref(), color)
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            self.wrap(s.as_ref(), BOLD)
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            self.wrap(s.as_ref(), DIM)
        }
    }
}

pub fn print_reply(input: &str, res: &ReplyResult, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("💬 Message: \"{input}\""), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Dispatch ━━━", ansi::GRAY));
    print_branch(res, &palette);

    if !res.details.captures.is_empty() {
        println!("\n{}", palette.paint("━━━ Captures ━━━", ansi::GRAY));
        for (idx, (raw, reflected)) in res.details.captures.iter().zip(&res.details.reflected).enumerate() {
            println!(
                "  {} {} {} {}",
                palette.paint(format!("{{{idx}}}"), ansi::GRAY),
                palette.paint(format!("{raw:?}"), ansi::YELLOW),
                palette.dim("→"),
                palette.paint(format!("{reflected:?}"), ansi::GREEN),
            );
        }
    }

    if let Some(status) = res.details.render {
        println!("\n{}", palette.paint("━━━ Render ━━━", ansi::GRAY));
        println!("  {}", describe_render(status, &palette));
    }

    println!("\n{}", palette.paint("━━━ Reply ━━━", ansi::GRAY));
    for line in res.reply.lines() {
        println!("  {}", palette.bold(line));
    }

    let m = &res.details.metrics;
    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Matching: {}  │  Render: {}",
        palette.paint(format!("{:?}", m.total), ansi::GREEN),
        palette.paint(format!("{:?}", m.matching), ansi::CYAN),
        palette.dim(format!("{:?}", m.render)),
    );
    println!();
}

fn print_branch(res: &ReplyResult, palette: &ansi::Palette) {
    let m = &res.details.metrics;
    match &res.details.branch {
        Branch::Intro => println!("  {}", palette.paint("empty input → introduction", ansi::BLUE)),
        Branch::Fallback => {
            println!("  {}", palette.dim("✗ no rule matched → default response"));
            println!(
                "  {} {}  {} {}",
                palette.dim("evaluated:"),
                palette.paint(m.rules_evaluated.to_string(), ansi::YELLOW),
                palette.dim("gated out:"),
                palette.paint(m.rules_skipped.to_string(), ansi::YELLOW),
            );
        }
        Branch::Matched { index, rule } => {
            println!(
                "  {} {} {}",
                palette.paint("✓", ansi::GREEN),
                palette.bold(palette.paint(rule, ansi::CYAN)),
                palette.dim(format!("(rule #{index})")),
            );
            println!(
                "  {} {}  {} {}",
                palette.dim("evaluated:"),
                palette.paint(m.rules_evaluated.to_string(), ansi::YELLOW),
                palette.dim("gated out:"),
                palette.paint(m.rules_skipped.to_string(), ansi::YELLOW),
            );
        }
        Branch::Fault => println!("  {}", palette.paint("! turn failed → default response", ansi::YELLOW)),
    }
}

fn describe_render(status: RenderStatus, palette: &ansi::Palette) -> String {
    match status {
        RenderStatus::Rendered => palette.paint("rendered with reflected captures", ansi::GREEN),
        RenderStatus::Verbatim(reason) => {
            let why = match reason {
                VerbatimReason::NoPlaceholders => "template has no placeholders".to_string(),
                VerbatimReason::NoGroups => "pattern captured nothing".to_string(),
                VerbatimReason::MissingGroup { index, available } => {
                    format!("placeholder {{{index}}} but only {available} group(s)")
                }
                VerbatimReason::Malformed { offset } => format!("malformed placeholder at byte {offset}"),
            };
            format!("{} {}", palette.paint("verbatim:", ansi::YELLOW), palette.dim(why))
        }
    }
}
