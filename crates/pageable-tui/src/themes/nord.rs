//! Nord
//! https://www.nordtheme.com/

use ratatui::style::Color;

use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        bg0: Color::Rgb(0x2e, 0x34, 0x40), // nord0
        bg1: Color::Rgb(0x3b, 0x42, 0x52), // nord1
        bg2: Color::Rgb(0x43, 0x4c, 0x5e), // nord2
        fg0: Color::Rgb(0xec, 0xef, 0xf4), // nord6
        grey1: Color::Rgb(0x5e, 0x68, 0x7a),
        grey2: Color::Rgb(0xd8, 0xde, 0xe9), // nord4
        accent: Color::Rgb(0x8f, 0xbc, 0xbb), // nord7
        pip: Color::Rgb(0x4c, 0x56, 0x6a),   // nord3
        pip_active: Color::Rgb(0x88, 0xc0, 0xd0), // nord8
        disabled: Color::Rgb(0x43, 0x4c, 0x5e),
    }
}
