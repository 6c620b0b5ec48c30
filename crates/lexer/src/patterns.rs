// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Static word sets and regular expressions used for classification.
//!
//! Word sets hold lowercase entries and are matched against the lowercased
//! word. Regexes use explicit ASCII classes so behavior does not depend on
//! Unicode digit or word tables.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Set of lowercase words.
pub type WordSet = HashSet<&'static str>;

/// Lazily compiled regex. `None` only if the pattern failed to compile.
pub type Pattern = LazyLock<Option<Regex>>;

fn word_set(words: &[&'static str]) -> WordSet {
    words.iter().copied().collect()
}

/// Test `text` against a lazily compiled pattern.
pub fn is_match(pattern: &Pattern, text: &str) -> bool {
    pattern.as_ref().is_some_and(|re| re.is_match(text))
}

// -----------------------------------------------------------------------------
// Configuration syntax
// -----------------------------------------------------------------------------

pub static COMMANDS: LazyLock<WordSet> = LazyLock::new(|| {
    word_set(&[
        "interface", "router", "ip", "ipv6", "show", "configure", "hostname",
        "username", "enable", "service", "line", "logging", "ntp", "snmp-server",
        "crypto", "aaa", "spanning-tree", "vlan", "banner", "shutdown", "write",
        "copy", "reload", "ping", "traceroute", "clock", "boot", "archive",
        "errdisable", "default-gateway", "do", "exit", "end",
    ])
});

pub static SECTIONS: LazyLock<WordSet> = LazyLock::new(|| {
    word_set(&[
        "interface", "router", "line", "access-list", "route-map", "prefix-list",
        "class-map", "policy-map", "crypto", "vlan", "redundancy", "controller",
        "key", "track", "monitor", "event", "applet",
    ])
});

pub static PROTOCOLS: LazyLock<WordSet> = LazyLock::new(|| {
    word_set(&[
        "ospf", "bgp", "eigrp", "rip", "isis", "mpls", "hsrp", "vrrp", "stp",
        "rstp", "lacp", "dot1q", "ipsec", "gre", "tcp", "udp", "icmp", "ssh",
        "dhcp", "bfd", "cdp", "lldp", "evpn", "vxlan", "isakmp", "nhrp", "pim",
        "igmp", "msdp", "lisp", "omp", "snmp", "radius", "tacacs", "tacacs+",
        "telnet", "ftp", "tftp", "http", "https", "ntp", "dns", "syslog",
        "netflow", "sflow", "ipfix",
    ])
});

pub static ACTIONS: LazyLock<WordSet> = LazyLock::new(|| {
    word_set(&[
        "permit", "deny", "log", "log-input", "established", "match", "set",
        "remark", "evaluate", "reflect",
    ])
});

pub static OPERATORS: LazyLock<WordSet> = LazyLock::new(|| {
    word_set(&["eq", "gt", "lt", "neq", "range", "ge", "le", "any", "host"])
});

pub static KEYWORDS: LazyLock<WordSet> = LazyLock::new(|| {
    word_set(&[
        // interface
        "description", "address", "switchport", "speed", "duplex", "mtu",
        "bandwidth", "encapsulation", "channel-group", "channel-protocol",
        "standby", "no-autostate", "autostate",
        // routing
        "network", "neighbor", "redistribute", "area", "remote-as",
        "update-source", "route-map", "access-group", "nat", "inside", "outside",
        "overload", "default-information", "originate", "summary-address",
        "passive-interface", "distance", "metric", "weight", "local-preference",
        "next-hop-self", "soft-reconfiguration", "inbound", "prefix-list",
        "distribute-list", "maximum-paths", "auto-summary", "synchronization",
        "log-neighbor-changes", "address-family", "unicast", "multicast",
        "vpnv4", "vpnv6",
        // security
        "access-class", "transport", "input", "output", "login", "password",
        "secret", "privilege", "authentication", "authorization", "accounting",
        "group", "method", "local",
        // system
        "version", "source", "trap", "community", "location", "contact",
        "default", "timeout", "exec-timeout", "mask", "wildcard", "inverse-mask",
        // spanning tree
        "mode", "priority", "vlan", "portfast", "bpduguard", "bpdufilter",
        "guard", "root",
        // vlan
        "name", "state", "active", "suspend",
        // qos
        "class", "police", "shape", "queue", "dscp", "cos", "service-policy",
        "policy-map",
        // aaa
        "new-model", "server", "key",
        // switching
        "trunk", "native", "allowed", "tagging", "nonegotiate", "negotiation",
        "auto", "half", "flow-control", "send", "both", "storm-control", "level",
    ])
});

/// Words whose remaining line is free text.
pub static VALUE_KEYWORDS: LazyLock<WordSet> =
    LazyLock::new(|| word_set(&["description", "hostname", "banner", "remark"]));

/// Keyword that gates community classification of the next word.
pub const COMMUNITY_KEYWORD: &str = "community";

/// Interface family followed by slot/port numbering and an optional
/// sub-interface: GigabitEthernet0/0/0.100, Gi0/0/0, Po1, Lo0, BDI1, nve1.
pub static INTERFACE: Pattern = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:GigabitEthernet|Gi|FastEthernet|Fa|TenGigabitEthernet|TenGigE|Te|TwentyFiveGigE|TwentyFiveGigabitEthernet|FortyGigabitEthernet|Fo|HundredGigE|Hu|Ethernet|Eth|Loopback|Lo|Vlan|Vl|Port-channel|Po|Tunnel|Tu|Serial|Se|Null|BDI|mgmt|nve|Dialer|Di|Virtual-Template|Vt|Virtual-Access|Va|Multilink|Mu|ATM|Cellular|Async)[0-9]+(?:/[0-9]+)*(?:\.[0-9]+)?$",
    )
    .ok()
});

pub static IPV4: Pattern =
    LazyLock::new(|| Regex::new(r"^(?:[0-9]{1,3}\.){3}[0-9]{1,3}$").ok());

pub static IPV4_PREFIX: Pattern =
    LazyLock::new(|| Regex::new(r"^(?:[0-9]{1,3}\.){3}[0-9]{1,3}/[0-9]{1,2}$").ok());

// Either "::" compression or at least three colon-separated groups.
const IPV6_BODY: &str = r"(?:[0-9a-fA-F]{0,4}:){2,7}[0-9a-fA-F]{0,4}|::(?:[0-9a-fA-F]{1,4}:)*[0-9a-fA-F]{0,4}|[0-9a-fA-F]{1,4}::(?:[0-9a-fA-F]{1,4}:)*[0-9a-fA-F]{0,4}";

pub static IPV6: Pattern = LazyLock::new(|| Regex::new(&format!("^(?:{IPV6_BODY})$")).ok());

pub static IPV6_PREFIX: Pattern =
    LazyLock::new(|| Regex::new(&format!("^(?:{IPV6_BODY})/[0-9]{{1,3}}$")).ok());

/// Cisco dotted MAC: 0011.2233.4455
pub static MAC_DOTTED: Pattern =
    LazyLock::new(|| Regex::new(r"^[0-9a-fA-F]{4}\.[0-9a-fA-F]{4}\.[0-9a-fA-F]{4}$").ok());

/// Colon MAC: 00:11:22:33:44:55
pub static MAC_COLON: Pattern =
    LazyLock::new(|| Regex::new(r"^(?:[0-9a-fA-F]{2}:){5}[0-9a-fA-F]{2}$").ok());

pub static COMMUNITY: Pattern = LazyLock::new(|| Regex::new(r"^[0-9]+:[0-9]+$").ok());

pub static ASN: Pattern = LazyLock::new(|| Regex::new(r"^[Aa][Ss][0-9]+$").ok());

// -----------------------------------------------------------------------------
// Show output
// -----------------------------------------------------------------------------

/// Whole-word compound states checked before the single-word sets.
pub const STATES_GOOD_COMPOUND: &[&str] = &["up/up"];
pub const STATES_BAD_COMPOUND: &[&str] = &["down/down", "administratively"];

pub static STATES_GOOD: LazyLock<WordSet> = LazyLock::new(|| {
    word_set(&[
        "up", "connected", "established", "full", "enabled", "active",
        "forwarding", "ok", "online", "running", "ready", "complete",
    ])
});

pub static STATES_BAD: LazyLock<WordSet> = LazyLock::new(|| {
    word_set(&[
        "down", "notconnect", "err-disabled", "disabled", "failed", "idle",
        "connect", "opensent", "openconfirm", "error", "offline", "unreachable",
    ])
});

pub static STATES_WARNING: LazyLock<WordSet> = LazyLock::new(|| {
    word_set(&[
        "init", "2way", "exstart", "exchange", "loading", "attempt", "flapping",
        "pending", "waiting", "starting", "stopping",
    ])
});

pub static STATES_NEUTRAL: LazyLock<WordSet> = LazyLock::new(|| {
    word_set(&["inactive", "standby", "backup", "suspended", "n/a", "none"])
});

pub static COLUMN_HEADERS: LazyLock<WordSet> = LazyLock::new(|| {
    word_set(&[
        "interface", "status", "protocol", "address", "admin", "link", "speed",
        "type", "duplex", "neighbor", "peer", "state", "as", "inpkt", "outpkt",
        "uptime", "dead", "pri", "mtu", "metric", "local", "remote", "outq",
        "up/dn", "flaps", "prefixes", "paths", "vlan", "description",
    ])
});

/// Route markers. Case-sensitive, compared against the original word.
pub const STATUS_SYMBOLS: &[&str] = &[
    "*", "+", "-", ">", "B", "O", "I", "S", "L", "D", "C", "R",
];

/// Longest word considered for a status symbol.
pub const STATUS_SYMBOL_MAX_LEN: usize = 2;

pub static TIME_DURATION: Pattern = LazyLock::new(|| {
    Regex::new(r"^(?:[0-9]+[wdhms])+$|^[0-9]+:[0-9]{2}(?::[0-9]{2})?$").ok()
});

pub static PERCENTAGE: Pattern = LazyLock::new(|| Regex::new(r"^[0-9]+(?:\.[0-9]+)?%$").ok());

pub static BYTE_SIZE: Pattern =
    LazyLock::new(|| Regex::new(r"^[0-9]+(?:\.[0-9]+)?[KMGTP][Bb]?$").ok());

pub static ROUTE_PROTOCOL: Pattern = LazyLock::new(|| {
    Regex::new(r"^\[(?:BGP|OSPF|EIGRP|RIP|ISIS|Static|Direct|Local|Connected|Aggregate)/[0-9]+\]$")
        .ok()
});

/// Three words separated by runs of two or more blanks: a columnar table row.
pub static TABULAR: Pattern = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9_]+[\t\n\x0C\r ]{2,}[A-Za-z0-9_]+[\t\n\x0C\r ]{2,}[A-Za-z0-9_]+").ok()
});

// -----------------------------------------------------------------------------
// Prompt
// -----------------------------------------------------------------------------

/// Whole-input CLI prompt.
///
/// Groups: 1 leading blanks/control bytes, 2 hostname, 3 optional `(mode)`,
/// 4 terminator, 5 blanks before the command, 6 command, 7 trailing newline.
pub static PROMPT: Pattern = LazyLock::new(|| {
    Regex::new(r"^([\x00-\x20]*)([A-Za-z0-9_.-]+)(\([A-Za-z0-9_-]+\))?([>#])([ \t]*)(.*?)(\n?)$")
        .ok()
});

#[cfg(test)]
#[path = "patterns_tests.rs"]
mod tests;
