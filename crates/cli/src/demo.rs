// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in samples rendered by `--demo`.

use std::fmt::Write;

use crate::cli::DemoKind;
use crate::highlighter::Highlighter;
use crate::theme::{theme_names, Theme, DEFAULT_THEME};

pub const SAMPLE_CONFIG: &str = r#"!
hostname edge-rtr-01
!
interface GigabitEthernet0/0/0
 description Uplink to ISP
 ip address 203.0.113.1 255.255.255.252
 no shutdown
!
interface GigabitEthernet0/0/1
 description Server LAN
 ip address 10.0.1.1 255.255.255.0
 switchport mode access
 switchport access vlan 100
 spanning-tree portfast
 no shutdown
!
interface Loopback0
 ip address 10.255.255.1 255.255.255.255
 ipv6 address 2001:db8::1/128
!
interface Vlan100
 description Management VLAN
 ip address 10.100.0.1 255.255.255.0
 no shutdown
!
router ospf 1
 router-id 10.255.255.1
 network 10.0.0.0 0.0.0.255 area 0
 passive-interface default
 no passive-interface GigabitEthernet0/0/0
!
router bgp 65001
 bgp router-id 10.255.255.1
 bgp log-neighbor-changes
 neighbor 203.0.113.2 remote-as 65000
 neighbor 203.0.113.2 description ISP Transit Peer
 !
 address-family ipv4 unicast
  network 10.0.0.0 mask 255.255.0.0
  neighbor 203.0.113.2 activate
  neighbor 203.0.113.2 route-map ISP-IN in
  neighbor 203.0.113.2 route-map ISP-OUT out
 exit-address-family
!
ip access-list extended PROTECT
 permit tcp 10.0.0.0 0.0.255.255 any eq 22
 permit icmp any any
 deny   ip any any log
!
ip prefix-list DEFAULT-ONLY seq 10 permit 0.0.0.0/0
!
route-map ISP-IN permit 10
 match ip address prefix-list DEFAULT-ONLY
 set community 65001:100 additive
!
ip route 0.0.0.0 0.0.0.0 203.0.113.2 name Default-to-ISP
!
logging host 10.0.0.100
ntp server 10.0.0.1
snmp-server location "Main Data Center, Rack 42"
!
line vty 0 15
 exec-timeout 5 0
 transport input ssh
 login local
!
banner motd ^
*** Authorized access only ***
^
!
end
"#;

pub const SAMPLE_BGP_SUMMARY: &str = "\
BGP router identifier 10.255.255.1, local AS number 65001
BGP table version is 4821, main routing table version 4821
4 network entries using 992 bytes of memory

Neighbor        V           AS MsgRcvd MsgSent   TblVer  InQ OutQ Up/Down  State/PfxRcd
203.0.113.2     4        65000   12345   12340     4821    0    0 1w2d     150
10.0.0.2        4        65001    8234    8230     4821    0    0 3d12h    2500
192.168.1.1     4        65002     100     105     4821    0   15 00:05:30 Active
172.16.0.1      4        65003       0       0        0    0    0 2w1d     Idle
";

pub const SAMPLE_OSPF_NEIGHBORS: &str = "\
Neighbor ID     Pri   State           Dead Time   Address         Interface
10.255.255.2    128   FULL/DR         00:00:35    10.0.0.2        GigabitEthernet0/0/0
10.255.255.3    128   FULL/BDR        00:00:38    10.0.0.6        GigabitEthernet0/0/1
10.255.255.4      1   2WAY/DROTHER    00:00:32    10.0.0.10       Port-channel1
10.255.255.5    128   INIT/-          00:00:40    10.0.0.14       Tunnel0
";

pub const SAMPLE_INTERFACE_BRIEF: &str = "\
Interface                  IP-Address      OK? Method Status                Protocol
GigabitEthernet0/0/0       203.0.113.1     YES manual up                    up
GigabitEthernet0/0/2       unassigned      YES unset  administratively down down
TenGigabitEthernet1/0/0    10.0.0.1        YES manual up                    up
Loopback0                  10.255.255.1    YES manual up                    up
Tunnel0                    192.168.100.1   YES manual up                    down
";

pub const SAMPLE_SHOW_VERSION: &str = "\
Cisco IOS XE Software, Version 17.06.01
Cisco IOS Software [Bengaluru], ASR1000 Software, Version 17.6.1, RELEASE SOFTWARE (fc2)
edge-rtr-01 uptime is 12 weeks, 3 days, 4 hours, 10 minutes
cisco ASR1001-X (1NG) processor with 3670989K/6147K bytes of memory.
2 Ten Gigabit Ethernet interfaces
8388608K bytes of physical memory.
Configuration register is 0x2102
";

pub const SAMPLE_MAC_TABLE: &str = "\
          Mac Address Table
-------------------------------------------

Vlan    Mac Address       Type        Ports
----    -----------       --------    -----
 100    0011.2233.4455    DYNAMIC     Gi0/0/1
 100    aabb.ccdd.eeff    DYNAMIC     Gi0/0/2
 200    1122.3344.5566    STATIC      Po1
";

/// Short configuration shown once per theme.
pub const THEME_SAMPLE: &str = "\
!
hostname router-01
!
interface GigabitEthernet0/0/0
 description Uplink to ISP
 ip address 192.168.1.1 255.255.255.0
 no shutdown
!
router bgp 65001
 neighbor 10.0.0.1 remote-as 65000
!
ip access-list extended PROTECT
 permit tcp 10.0.0.0 0.0.255.255 any eq 22
 deny   ip any any log
!
";

/// Show command samples, in display order.
pub const SHOW_SAMPLES: &[(&str, &str)] = &[
    ("show ip bgp summary", SAMPLE_BGP_SUMMARY),
    ("show ip ospf neighbor", SAMPLE_OSPF_NEIGHBORS),
    ("show ip interface brief", SAMPLE_INTERFACE_BRIEF),
    ("show version", SAMPLE_SHOW_VERSION),
    ("show mac address-table", SAMPLE_MAC_TABLE),
];

/// Render a demo. `Config` and `Show` use the highlighter's theme; `Themes`
/// renders [`THEME_SAMPLE`] in every built-in theme.
pub fn render(kind: DemoKind, highlighter: &Highlighter) -> String {
    let mut out = String::new();
    let theme_name = highlighter.theme().name().to_string();

    match kind {
        DemoKind::Config => {
            let _ = writeln!(
                out,
                "\n=== Cisco IOS Syntax Highlighting Demo (Theme: {theme_name}) ===\n"
            );
            out.push_str(&highlighter.highlight_forced(SAMPLE_CONFIG));
        }
        DemoKind::Show => {
            let _ = writeln!(
                out,
                "\n=== Cisco Show Output Highlighting Demo (Theme: {theme_name}) ==="
            );
            for (command, sample) in SHOW_SAMPLES {
                let _ = writeln!(out, "\n--- {command} ---");
                out.push_str(&highlighter.highlight_show_output(sample));
            }
        }
        DemoKind::Themes => {
            for name in theme_names() {
                let label = if name == DEFAULT_THEME {
                    format!("{name} (default)")
                } else {
                    name.to_string()
                };
                let themed = Highlighter::with_theme(Theme::by_name(name));
                let _ = writeln!(out, "\n=== Theme: {label} ===");
                out.push_str(&themed.highlight_forced(THEME_SAMPLE));
            }
        }
    }
    out
}

/// One line per built-in theme for `--list-themes`, default marked.
pub fn theme_list() -> String {
    theme_names()
        .into_iter()
        .map(|name| {
            if name == DEFAULT_THEME {
                format!("{name} (default)\n")
            } else {
                format!("{name}\n")
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "demo_tests.rs"]
mod tests;
