// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Semantic palettes for the built-in themes.

use super::escape::{
    color256, rgb, BRIGHT_BLACK, BRIGHT_BLUE, BRIGHT_CYAN, BRIGHT_GREEN, BRIGHT_MAGENTA,
    BRIGHT_RED, BRIGHT_WHITE, BRIGHT_YELLOW, CYAN, DIM, MAGENTA, WHITE, YELLOW,
};

/// Colors for each semantic role. A theme maps token categories onto these,
/// adding attributes such as bold for commands and interfaces.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Palette {
    /// Identifiers and column headers
    pub foreground: String,
    /// `!` lines and neutral states
    pub comment: String,

    pub command: String,
    pub section: String,
    pub protocol: String,
    pub action: String,
    pub interface: String,
    pub ip: String,
    pub number: String,
    pub string: String,
    pub keyword: String,
    pub operator: String,
    pub asn: String,
    pub community: String,
    pub value: String,
    pub mac: String,
    pub negation: String,

    pub state_good: String,
    pub state_bad: String,
    pub state_warning: String,
    pub duration: String,
    pub route_protocol: String,

    pub prompt_host: String,
    pub prompt_mode: String,
    pub prompt_oper: String,
    pub prompt_conf: String,
}

pub fn tokyonight() -> Palette {
    let foreground = rgb(192, 202, 245);
    let comment = rgb(86, 95, 137);
    let red = rgb(247, 118, 142);
    let green = rgb(158, 206, 106);
    let yellow = rgb(224, 175, 104);
    let blue = rgb(122, 162, 247);
    let magenta = rgb(187, 154, 247);
    let cyan = rgb(125, 207, 255);
    let orange = rgb(255, 158, 100);
    let purple = rgb(157, 124, 216);
    let teal = rgb(115, 218, 202);

    Palette {
        foreground,
        comment,
        command: magenta.clone(),
        section: blue.clone(),
        protocol: cyan.clone(),
        action: green.clone(),
        interface: orange.clone(),
        ip: teal.clone(),
        number: purple.clone(),
        string: green.clone(),
        keyword: yellow.clone(),
        operator: blue,
        asn: orange.clone(),
        community: magenta,
        value: cyan.clone(),
        mac: cyan,
        negation: red.clone(),
        state_good: green.clone(),
        state_bad: red.clone(),
        state_warning: yellow.clone(),
        duration: orange,
        route_protocol: purple,
        prompt_host: teal,
        prompt_mode: yellow,
        prompt_oper: green,
        prompt_conf: red,
    }
}

pub fn vibrant() -> Palette {
    Palette {
        foreground: WHITE.into(),
        comment: format!("{DIM}{BRIGHT_BLACK}"),
        command: BRIGHT_YELLOW.into(),
        section: BRIGHT_BLUE.into(),
        protocol: BRIGHT_CYAN.into(),
        action: BRIGHT_GREEN.into(),
        interface: BRIGHT_MAGENTA.into(),
        ip: BRIGHT_GREEN.into(),
        number: BRIGHT_CYAN.into(),
        string: BRIGHT_YELLOW.into(),
        keyword: YELLOW.into(),
        operator: BRIGHT_WHITE.into(),
        asn: BRIGHT_MAGENTA.into(),
        community: MAGENTA.into(),
        value: BRIGHT_CYAN.into(),
        mac: CYAN.into(),
        negation: BRIGHT_RED.into(),
        state_good: BRIGHT_GREEN.into(),
        state_bad: BRIGHT_RED.into(),
        state_warning: BRIGHT_YELLOW.into(),
        duration: BRIGHT_MAGENTA.into(),
        route_protocol: MAGENTA.into(),
        prompt_host: BRIGHT_CYAN.into(),
        prompt_mode: BRIGHT_YELLOW.into(),
        prompt_oper: BRIGHT_GREEN.into(),
        prompt_conf: BRIGHT_RED.into(),
    }
}

pub fn solarized() -> Palette {
    let base01 = color256(240);
    let base0 = color256(244);
    let yellow = color256(136);
    let orange = color256(166);
    let red = color256(160);
    let magenta = color256(125);
    let violet = color256(61);
    let blue = color256(33);
    let cyan = color256(37);
    let green = color256(64);

    Palette {
        prompt_host: cyan.clone(),
        prompt_mode: yellow.clone(),
        prompt_oper: green.clone(),
        prompt_conf: red.clone(),
        foreground: base0.clone(),
        comment: base01,
        command: yellow.clone(),
        section: blue,
        protocol: cyan.clone(),
        action: green.clone(),
        interface: magenta.clone(),
        ip: green.clone(),
        number: cyan.clone(),
        string: yellow.clone(),
        keyword: orange.clone(),
        operator: base0,
        asn: magenta,
        community: violet.clone(),
        value: cyan.clone(),
        mac: cyan,
        negation: red.clone(),
        state_good: green,
        state_bad: red,
        state_warning: yellow,
        duration: orange,
        route_protocol: violet,
    }
}

pub fn monokai() -> Palette {
    let pink = color256(197);
    let green = color256(148);
    let orange = color256(208);
    let purple = color256(141);
    let cyan = color256(81);
    let yellow = color256(186);
    let gray = color256(242);
    let white = color256(231);
    let red = color256(196);

    Palette {
        prompt_host: cyan.clone(),
        prompt_mode: yellow.clone(),
        prompt_oper: green.clone(),
        prompt_conf: pink.clone(),
        foreground: white,
        comment: gray,
        command: pink.clone(),
        section: cyan.clone(),
        protocol: purple.clone(),
        action: green.clone(),
        interface: orange.clone(),
        ip: green.clone(),
        number: purple.clone(),
        string: yellow.clone(),
        keyword: orange.clone(),
        operator: pink,
        asn: orange.clone(),
        community: purple.clone(),
        value: cyan.clone(),
        mac: cyan,
        negation: red.clone(),
        state_good: green,
        state_bad: red,
        state_warning: yellow,
        duration: orange,
        route_protocol: purple,
    }
}

pub fn nord() -> Palette {
    let nord4 = color256(252);
    let nord7 = color256(109);
    let nord8 = color256(110);
    let nord9 = color256(68);
    let nord11 = color256(167);
    let nord12 = color256(173);
    let nord13 = color256(179);
    let nord14 = color256(108);
    let nord15 = color256(139);
    let comment = color256(60);

    Palette {
        prompt_host: nord7.clone(),
        prompt_mode: nord13.clone(),
        prompt_oper: nord14.clone(),
        prompt_conf: nord11.clone(),
        foreground: nord4,
        comment,
        command: nord13.clone(),
        section: nord9.clone(),
        protocol: nord8.clone(),
        action: nord14.clone(),
        interface: nord15.clone(),
        ip: nord14.clone(),
        number: nord15.clone(),
        string: nord13.clone(),
        keyword: nord12.clone(),
        operator: nord9,
        asn: nord12.clone(),
        community: nord15.clone(),
        value: nord8,
        mac: nord7,
        negation: nord11.clone(),
        state_good: nord14,
        state_bad: nord11,
        state_warning: nord13,
        duration: nord12,
        route_protocol: nord15,
    }
}

pub fn catppuccin() -> Palette {
    let text = rgb(205, 214, 244);
    let overlay0 = rgb(108, 112, 134);
    let red = rgb(243, 139, 168);
    let peach = rgb(250, 179, 135);
    let yellow = rgb(249, 226, 175);
    let green = rgb(166, 227, 161);
    let teal = rgb(148, 226, 213);
    let sky = rgb(137, 220, 235);
    let sapphire = rgb(116, 199, 236);
    let blue = rgb(137, 180, 250);
    let lavender = rgb(180, 190, 254);
    let mauve = rgb(203, 166, 247);
    let pink = rgb(245, 194, 231);

    Palette {
        prompt_host: sapphire.clone(),
        prompt_mode: yellow.clone(),
        prompt_oper: green.clone(),
        prompt_conf: red.clone(),
        foreground: text,
        comment: overlay0,
        command: mauve.clone(),
        section: blue,
        protocol: sapphire,
        action: green.clone(),
        interface: peach.clone(),
        ip: teal,
        number: lavender,
        string: green.clone(),
        keyword: yellow.clone(),
        operator: sky.clone(),
        asn: peach.clone(),
        community: pink,
        value: sky.clone(),
        mac: sky,
        negation: red.clone(),
        state_good: green,
        state_bad: red,
        state_warning: yellow,
        duration: peach,
        route_protocol: mauve,
    }
}

pub fn dracula() -> Palette {
    let foreground = rgb(248, 248, 242);
    let comment = rgb(98, 114, 164);
    let cyan = rgb(139, 233, 253);
    let green = rgb(80, 250, 123);
    let orange = rgb(255, 184, 108);
    let pink = rgb(255, 121, 198);
    let purple = rgb(189, 147, 249);
    let red = rgb(255, 85, 85);
    let yellow = rgb(241, 250, 140);

    Palette {
        prompt_host: cyan.clone(),
        prompt_mode: yellow.clone(),
        prompt_oper: green.clone(),
        prompt_conf: red.clone(),
        foreground,
        comment,
        command: pink.clone(),
        section: purple.clone(),
        protocol: cyan.clone(),
        action: green.clone(),
        interface: orange.clone(),
        ip: green.clone(),
        number: purple.clone(),
        string: yellow.clone(),
        keyword: orange.clone(),
        operator: pink,
        asn: orange.clone(),
        community: purple.clone(),
        value: cyan.clone(),
        mac: cyan,
        negation: red.clone(),
        state_good: green,
        state_bad: red,
        state_warning: yellow,
        duration: orange,
        route_protocol: purple,
    }
}

pub fn gruvbox() -> Palette {
    let foreground = rgb(235, 219, 178);
    let comment = rgb(146, 131, 116);
    let red = rgb(251, 73, 52);
    let green = rgb(184, 187, 38);
    let yellow = rgb(250, 189, 47);
    let blue = rgb(131, 165, 152);
    let purple = rgb(211, 134, 155);
    let aqua = rgb(142, 192, 124);
    let orange = rgb(254, 128, 25);

    Palette {
        prompt_host: aqua.clone(),
        prompt_mode: yellow.clone(),
        prompt_oper: green.clone(),
        prompt_conf: red.clone(),
        foreground: foreground.clone(),
        comment,
        command: yellow.clone(),
        section: blue,
        protocol: aqua.clone(),
        action: green.clone(),
        interface: orange.clone(),
        ip: aqua.clone(),
        number: purple.clone(),
        string: green.clone(),
        keyword: orange.clone(),
        operator: foreground,
        asn: orange.clone(),
        community: purple.clone(),
        value: aqua.clone(),
        mac: aqua,
        negation: red.clone(),
        state_good: green,
        state_bad: red,
        state_warning: yellow,
        duration: orange,
        route_protocol: purple,
    }
}

pub fn onedark() -> Palette {
    let foreground = rgb(171, 178, 191);
    let comment = rgb(92, 99, 112);
    let red = rgb(224, 108, 117);
    let green = rgb(152, 195, 121);
    let yellow = rgb(229, 192, 123);
    let blue = rgb(97, 175, 239);
    let purple = rgb(198, 120, 221);
    let cyan = rgb(86, 182, 194);
    let orange = rgb(209, 154, 102);

    Palette {
        prompt_host: cyan.clone(),
        prompt_mode: yellow.clone(),
        prompt_oper: green.clone(),
        prompt_conf: red.clone(),
        foreground: foreground.clone(),
        comment,
        command: purple.clone(),
        section: blue,
        protocol: cyan.clone(),
        action: green.clone(),
        interface: orange.clone(),
        ip: green.clone(),
        number: orange.clone(),
        string: green.clone(),
        keyword: yellow.clone(),
        operator: foreground,
        asn: orange.clone(),
        community: purple.clone(),
        value: cyan.clone(),
        mac: cyan,
        negation: red.clone(),
        state_good: green,
        state_bad: red,
        state_warning: yellow,
        duration: orange,
        route_protocol: purple,
    }
}
