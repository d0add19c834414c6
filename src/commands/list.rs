//! List handler - names and summaries of the demonstration sections.

use anyhow::Result;

use ansiprobe::demos::Section;
use ansiprobe::theme::current_theme;

pub fn handle() -> Result<()> {
    let theme = current_theme();

    println!("{}", theme.primary_text("Available sections, in run order:"));
    for section in Section::ALL {
        println!(
            "  {}  {}",
            theme.accent_text(&format!("{:9}", section.name())),
            theme.secondary_text(section.summary()),
        );
    }
    Ok(())
}
