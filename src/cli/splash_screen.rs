//! The module contains function for displaying CLI splash screen.
//!
//! The splash screen shows:
//! - Title
//! - Short Description
//! - Version Information

use colored::*;

use crate::cli::colors::DISC_GOLD;

pub fn splash_screen() {
    show_splash_screen();
    show_version_info();
}

fn show_splash_screen() {
    print!(
        r#"
    {}
        "#,
        r"
     ██████╗██████╗     ██╗███╗   ██╗██╗   ██╗
    ██╔════╝██╔══██╗    ██║████╗  ██║██║   ██║
    ██║     ██║  ██║    ██║██╔██╗ ██║██║   ██║
    ██║     ██║  ██║    ██║██║╚██╗██║╚██╗ ██╔╝
    ╚██████╗██████╔╝    ██║██║ ╚████║ ╚████╔╝
     ╚═════╝╚═════╝     ╚═╝╚═╝  ╚═══╝  ╚═══╝
        "
        .color(DISC_GOLD)
    )
}

fn show_version_info() {
    println!(
        r"
    {}

    Version {}
        ",
        env!("CARGO_PKG_DESCRIPTION").color(DISC_GOLD),
        env!("CARGO_PKG_VERSION").color(DISC_GOLD).italic(),
    )
}
