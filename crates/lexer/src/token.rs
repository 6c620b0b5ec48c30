// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Token types produced by the lexer.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Category assigned to a single token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenCategory {
    /// Whitespace and separators; never colored
    Text,
    /// interface, router, ip, show, configure, ...
    Command,
    /// access-list, route-map, class-map, ... (section headers)
    Section,
    /// ospf, bgp, eigrp, tcp, udp, ...
    Protocol,
    /// permit, deny, log, match, set
    Action,
    /// GigabitEthernet0/0/0, Gi0/0/0, Loopback0, ...
    Interface,
    /// 192.168.1.1
    Ipv4,
    /// 192.168.1.0/24
    Ipv4Prefix,
    /// 2001:db8::1
    Ipv6,
    /// 2001:db8::/32
    Ipv6Prefix,
    /// 0011.2233.4455 or 00:11:22:33:44:55
    Mac,
    /// 100, 1000
    Number,
    /// "quoted string"
    String,
    /// `!` section separator line
    Comment,
    /// Anything not recognized
    Identifier,
    /// Other configuration keywords
    Keyword,
    /// eq, gt, lt, neq, range, ge, le, any, host
    Operator,
    /// AS65000
    Asn,
    /// 65000:100 after `community`
    Community,
    /// Free text after description, hostname, banner, remark
    Value,
    /// Leading `no`
    Negation,

    /// up, connected, established, full
    StateGood,
    /// down, notconnect, err-disabled
    StateBad,
    /// init, 2way, exstart, loading
    StateWarning,
    /// inactive, standby, backup
    StateNeutral,
    /// Table column headers in show output
    ColumnHeader,
    /// Route table markers: *, +, >, C, O, ...
    StatusSymbol,
    /// 1w2d, 00:05:30
    TimeDuration,
    /// 50%, 99.9%
    Percentage,
    /// 1.5G, 500M, 10KB
    ByteSize,
    /// [BGP/170], [OSPF/110]
    RouteProtocol,

    /// Hostname portion of a CLI prompt
    PromptHost,
    /// (config), (config-if), ...
    PromptMode,
    /// `>` (user EXEC)
    PromptOper,
    /// `#` (privileged EXEC / configuration)
    PromptConf,
}

impl TokenCategory {
    /// Every category, in declaration order.
    pub const ALL: [TokenCategory; 35] = [
        TokenCategory::Text,
        TokenCategory::Command,
        TokenCategory::Section,
        TokenCategory::Protocol,
        TokenCategory::Action,
        TokenCategory::Interface,
        TokenCategory::Ipv4,
        TokenCategory::Ipv4Prefix,
        TokenCategory::Ipv6,
        TokenCategory::Ipv6Prefix,
        TokenCategory::Mac,
        TokenCategory::Number,
        TokenCategory::String,
        TokenCategory::Comment,
        TokenCategory::Identifier,
        TokenCategory::Keyword,
        TokenCategory::Operator,
        TokenCategory::Asn,
        TokenCategory::Community,
        TokenCategory::Value,
        TokenCategory::Negation,
        TokenCategory::StateGood,
        TokenCategory::StateBad,
        TokenCategory::StateWarning,
        TokenCategory::StateNeutral,
        TokenCategory::ColumnHeader,
        TokenCategory::StatusSymbol,
        TokenCategory::TimeDuration,
        TokenCategory::Percentage,
        TokenCategory::ByteSize,
        TokenCategory::RouteProtocol,
        TokenCategory::PromptHost,
        TokenCategory::PromptMode,
        TokenCategory::PromptOper,
        TokenCategory::PromptConf,
    ];

    /// Display name of the category.
    pub fn name(self) -> &'static str {
        match self {
            TokenCategory::Text => "Text",
            TokenCategory::Command => "Command",
            TokenCategory::Section => "Section",
            TokenCategory::Protocol => "Protocol",
            TokenCategory::Action => "Action",
            TokenCategory::Interface => "Interface",
            TokenCategory::Ipv4 => "IPv4",
            TokenCategory::Ipv4Prefix => "IPv4Prefix",
            TokenCategory::Ipv6 => "IPv6",
            TokenCategory::Ipv6Prefix => "IPv6Prefix",
            TokenCategory::Mac => "MAC",
            TokenCategory::Number => "Number",
            TokenCategory::String => "String",
            TokenCategory::Comment => "Comment",
            TokenCategory::Identifier => "Identifier",
            TokenCategory::Keyword => "Keyword",
            TokenCategory::Operator => "Operator",
            TokenCategory::Asn => "ASN",
            TokenCategory::Community => "Community",
            TokenCategory::Value => "Value",
            TokenCategory::Negation => "Negation",
            TokenCategory::StateGood => "StateGood",
            TokenCategory::StateBad => "StateBad",
            TokenCategory::StateWarning => "StateWarning",
            TokenCategory::StateNeutral => "StateNeutral",
            TokenCategory::ColumnHeader => "ColumnHeader",
            TokenCategory::StatusSymbol => "StatusSymbol",
            TokenCategory::TimeDuration => "TimeDuration",
            TokenCategory::Percentage => "Percentage",
            TokenCategory::ByteSize => "ByteSize",
            TokenCategory::RouteProtocol => "RouteProtocol",
            TokenCategory::PromptHost => "PromptHost",
            TokenCategory::PromptMode => "PromptMode",
            TokenCategory::PromptOper => "PromptOper",
            TokenCategory::PromptConf => "PromptConf",
        }
    }

    /// True for categories that only arise from show output classification.
    #[cfg(test)]
    pub(crate) fn is_show_output(self) -> bool {
        matches!(
            self,
            TokenCategory::StateGood
                | TokenCategory::StateBad
                | TokenCategory::StateWarning
                | TokenCategory::StateNeutral
                | TokenCategory::ColumnHeader
                | TokenCategory::StatusSymbol
                | TokenCategory::TimeDuration
                | TokenCategory::Percentage
                | TokenCategory::ByteSize
                | TokenCategory::RouteProtocol
        )
    }

    /// True for categories that only arise from prompt recognition.
    #[cfg(test)]
    pub(crate) fn is_prompt(self) -> bool {
        matches!(
            self,
            TokenCategory::PromptHost
                | TokenCategory::PromptMode
                | TokenCategory::PromptOper
                | TokenCategory::PromptConf
        )
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown category name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown token category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for TokenCategory {
    type Err = UnknownCategory;

    /// Accepts display names case-insensitively, with or without `_`/`-`
    /// separators (`IPv4Prefix`, `ipv4_prefix`, `state-good`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_name(s);
        TokenCategory::ALL
            .into_iter()
            .find(|category| normalize_name(category.name()) == wanted)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_' && *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// 1-based line/column location in the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    /// Line 1, column 1.
    pub const START: Position = Position { line: 1, column: 1 };

    /// Move past `text`. Columns count characters; a newline starts a new line.
    pub fn advance(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::START
    }
}

/// A classified, positioned slice of the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub category: TokenCategory,
    /// Verbatim slice of the input
    pub text: &'a str,
    pub line: usize,
    pub column: usize,
}

impl<'a> Token<'a> {
    pub fn new(category: TokenCategory, text: &'a str, at: Position) -> Self {
        Token {
            category,
            text,
            line: at.line,
            column: at.column,
        }
    }

    /// Start position of the token.
    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;
