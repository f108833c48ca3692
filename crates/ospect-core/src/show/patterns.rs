//! Compiled patterns for the show-output parsers, one per dialect.
//!
//! All patterns use verbose mode so they read like the CLI output they
//! match; block patterns that cross line boundaries enable `(?s)`.
//! Table-row patterns are applied per line and must never rely on
//! anchors: headers and separator lines simply fail to match.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Neighbor table rows ("show ip ospf neighbor" family). The
    // STATE/ROLE column is split at the slash; the role is `-` on
    // point-to-point links.
    pub static ref IOS_NEIGHBOR_ROW: Regex = Regex::new(
        r"(?x)
        (?P<rid>\d+\.\d+\.\d+\.\d+)\s+
        (?P<priority>\d+)\s+
        (?P<state>\w+)/\s*
        (?P<role>[A-Z-]+)\s+
        (?P<deadtime>[0-9:]+)\s+
        (?P<peer>\d+\.\d+\.\d+\.\d+)\s+
        (?P<intf>[0-9A-Za-z./-]+)
        "
    ).unwrap();

    // NX-OS prints uptime where IOS prints the dead timer.
    pub static ref NXOS_NEIGHBOR_ROW: Regex = Regex::new(
        r"(?x)
        (?P<rid>\d+\.\d+\.\d+\.\d+)\s+
        (?P<priority>\d+)\s+
        (?P<state>\w+)/\s*
        (?P<role>[A-Z-]+)\s+
        (?P<uptime>[0-9:]+)\s+
        (?P<peer>\d+\.\d+\.\d+\.\d+)\s+
        (?P<intf>[0-9A-Za-z./-]+)
        "
    ).unwrap();

    // IOS-XR prints both timers.
    pub static ref XR_NEIGHBOR_ROW: Regex = Regex::new(
        r"(?x)
        (?P<rid>\d+\.\d+\.\d+\.\d+)\s+
        (?P<priority>\d+)\s+
        (?P<state>\w+)/\s*
        (?P<role>[A-Z-]+)\s+
        (?P<deadtime>[0-9:]+)\s+
        (?P<peer>\d+\.\d+\.\d+\.\d+)\s+
        (?P<uptime>[0-9:]+)\s+
        (?P<intf>[0-9A-Za-z./-]+)
        "
    ).unwrap();

    // "show ospf" process headers.
    pub static ref IOS_PROCESS: Regex = Regex::new(
        r#"(?sx)
        Routing\s+Process\s+"ospf\s+(?P<id>\d+)"\s+with\s+ID\s+(?P<rid>\d+\.\d+\.\d+\.\d+)
        .*
        \s*Initial\s+SPF\s+schedule\s+delay\s+(?P<init_spf>\d+)\s+msecs
        \s*Minimum\s+hold\s+time\s+between\s+two\s+consecutive\s+SPFs\s+(?P<min_spf>\d+)\s+msecs
        \s*Maximum\s+wait\s+time\s+between\s+two\s+consecutive\s+SPFs\s+(?P<max_spf>\d+)\s+msecs
        .*
        \s*Reference\s+bandwidth\s+unit\s+is\s+(?P<ref_bw>\d+)\s+mbps
        "#
    ).unwrap();

    // The IOS-XR header stops after the SPF throttle timers; it has no
    // reference-bandwidth line.
    pub static ref XR_PROCESS: Regex = Regex::new(
        r#"(?sx)
        Routing\s+Process\s+"ospf\s+(?P<id>\d+)"\s+with\s+ID\s+(?P<rid>\d+\.\d+\.\d+\.\d+)
        .*
        \s*Initial\s+SPF\s+schedule\s+delay\s+(?P<init_spf>\d+)\s+msecs
        \s*Minimum\s+hold\s+time\s+between\s+two\s+consecutive\s+SPFs\s+(?P<min_spf>\d+)\s+msecs
        \s*Maximum\s+wait\s+time\s+between\s+two\s+consecutive\s+SPFs\s+(?P<max_spf>\d+)\s+msecs
        "#
    ).unwrap();

    // NX-OS words the same facts differently and prints fractional
    // msecs on the throttle timers; the fraction is dropped.
    pub static ref NXOS_PROCESS: Regex = Regex::new(
        r"(?sx)
        Routing\s+Process\s+(?P<id>\d+)\s+with\s+ID\s+(?P<rid>\d+\.\d+\.\d+\.\d+)
        .*
        \s*Reference\s+Bandwidth\s+is\s+(?P<ref_bw>\d+)\s+Mbps
        .*
        \s*SPF\s+throttling\s+delay\s+time\s+of\s+(?P<init_spf>\d+)(?:\.\d+)\s+msecs,
        \s*SPF\s+throttling\s+hold\s+time\s+of\s+(?P<min_spf>\d+)(?:\.\d+)\s+msecs,
        \s*SPF\s+throttling\s+maximum\s+wait\s+time\s+of\s+(?P<max_spf>\d+)(?:\.\d+)\s+msecs
        "
    ).unwrap();

    // "show ospf" area blocks. The backbone is decorated BACKBONE(0);
    // the type line is only printed for stub/NSSA areas.
    pub static ref IOS_AREA: Regex = Regex::new(
        r"(?x)
        Area\s+(?:BACKBONE\()?(?P<id>\d+)(?:\))?\s+
        Number\s+of\s+interfaces\s+in\s+this\s+area\s+is\s+(?P<num_intfs>\d+).*\n
        \s+(?:It\s+is\s+a\s+(?P<type>\w+)\s+area)?
        "
    ).unwrap();

    pub static ref XR_AREA: Regex = Regex::new(
        r"(?sx)
        Area\s+(?:BACKBONE\()?(?P<id>\d+)(?:\))?\s+
        Number\s+of\s+interfaces\s+in\s+this\s+area\s+is\s+(?P<num_intfs>\d+).*?\n
        \s+(?:It\s+is\s+a\s+(?P<type>\w+)\s+area)?
        .*?
        Number\s+of\s+LFA\s+enabled\s+interfaces\s+(?P<frr_intfs>\d+)
        "
    ).unwrap();

    pub static ref NXOS_AREA: Regex = Regex::new(
        r"(?x)
        Area\s+(?:BACKBONE)?\((?P<id_dd>\d+\.\d+\.\d+\.\d+)\)\s+
        \s+(?:Area\s+has\s+existed.*)\n
        \s+Interfaces\s+in\s+this\s+area:\s+(?P<num_intfs>\d+).*\n
        \s+(?:Passive.*)\n
        \s+(?:This\s+area\s+is\s+a\s+(?P<type>\w+)\s+area)?
        "
    ).unwrap();

    // "show ip ospf database database-summary". The process rollup is
    // printed after the per-area rollups; only it carries a type-5
    // row. The column header is absent on some versions. This pattern
    // also covers IOS-XR output.
    pub static ref IOS_DBSUM_PROCESS: Regex = Regex::new(
        r"(?sx)
        Process\s+(?P<process_id>\d+)\s+database\s+summary\s+
        (?:LSA\s+Type\s+Count\s+Delete\s+Maxage\s+)?
        Router\s+(?P<router>\d+).*\n\s+
        Network\s+(?P<network>\d+).*\n\s+
        Summary\s+Net\s+(?P<summary_net>\d+).*\n\s+
        Summary\s+ASBR\s+(?P<summary_asbr>\d+).*\n\s+
        Type-7\s+Ext\s+(?P<type7>\d+).*
        \s+Type-5\s+Ext\s+(?P<type5>\d+)
        "
    ).unwrap();

    pub static ref IOS_DBSUM_AREA: Regex = Regex::new(
        r"(?x)
        Area\s+(?P<id>\d+)\s+database\s+summary\s+
        (?:LSA\s+Type\s+Count\s+Delete\s+Maxage\s+)?
        Router\s+(?P<router>\d+).*\n\s+
        Network\s+(?P<network>\d+).*\n\s+
        Summary\s+Net\s+(?P<summary_net>\d+).*\n\s+
        Summary\s+ASBR\s+(?P<summary_asbr>\d+).*\n\s+
        Type-7\s+Ext\s+(?P<type7>\d+)
        "
    ).unwrap();

    // NX-OS interleaves opaque-LSA rows and prints dotted-decimal
    // area IDs.
    pub static ref NXOS_DBSUM_PROCESS: Regex = Regex::new(
        r"(?x)
        Process\s+(?P<process_id>\d+)\s+database\s+summary\s+
        LSA\s+Type\s+Count\s+
        Opaque\s+Link\s+\d+\s+
        Router\s+(?P<router>\d+)\s+
        Network\s+(?P<network>\d+)\s+
        Summary\s+Network\s+(?P<summary_net>\d+)\s+
        Summary\s+ASBR\s+(?P<summary_asbr>\d+)\s+
        Type-7\s+AS\s+External\s+(?P<type7>\d+)\s+
        Opaque\s+Area\s+\d+\s+
        Type-5\s+AS\s+External\s+(?P<type5>\d+)
        "
    ).unwrap();

    pub static ref NXOS_DBSUM_AREA: Regex = Regex::new(
        r"(?x)
        Area\s+(?P<id>\d+\.\d+\.\d+\.\d+)\s+database\s+summary\s+
        LSA\s+Type\s+Count\s+
        Opaque\s+Link\s+\d+\s+
        Router\s+(?P<router>\d+)\s+
        Network\s+(?P<network>\d+)\s+
        Summary\s+Network\s+(?P<summary_net>\d+)\s+
        Summary\s+ASBR\s+(?P<summary_asbr>\d+)\s+
        Type-7\s+AS\s+External\s+(?P<type7>\d+)\s+
        "
    ).unwrap();

    // "show ip ospf traffic" per-interface blocks. The [^s] keeps the
    // block anchor off the "Interface statistics:" heading.
    pub static ref IOS_TRAFFIC_INTERFACE: Regex = Regex::new(
        r"(?sx)
        Interface\s+(?P<intf>[^s]\S+)\s+
        .*?
        OSPF\s+header\s+errors
        \s+Length\s+(?P<length>\d+),
        \s+Instance\s+ID\s+(?P<instance_id>\d+),
        \s+Checksum\s+(?P<checksum>\d+),
        \s+Auth\s+Type\s+(?P<auth_type>\d+),
        \s+Version\s+(?P<version>\d+),
        \s+Bad\s+Source\s+(?P<bad_src>\d+),
        \s+No\s+Virtual\s+Link\s+(?P<no_vl>\d+),
        \s+Area\s+Mismatch\s+(?P<area_mismatch>\d+),
        \s+No\s+Sham\s+Link\s+(?P<no_sl>\d+),
        \s+Self\s+Originated\s+(?P<self_orig>\d+),
        \s+Duplicate\s+ID\s+(?P<dup_rid>\d+),
        \s+Hello\s+(?P<hello_pkt>\d+),
        \s+MTU\s+Mismatch\s+(?P<mtu_mismatch>\d+),
        \s+Nbr\s+Ignored\s+(?P<nbr_ignored>\d+),
        \s+LLS\s+(?P<lls>\d+),
        \s+Unknown\s+Neighbor\s+(?P<unk_nbr>\d+),
        \s+Authentication\s+(?P<auth>\d+),
        \s+TTL\s+Check\s+Fail\s+(?P<ttlsec_fail>\d+),
        \s+Adjacency\s+Throttle\s+(?P<adj_throttle>\d+),
        \s+BFD\s+(?P<bfd>\d+),
        \s+Test\s+discard\s+(?P<test_discard>\d+)
        \s*OSPF\s+LSA\s+errors
        \s+Type\s+(?P<lsa_type>\d+),
        \s+Length\s+(?P<lsa_length>\d+),
        \s+Data\s+(?P<lsa_data>\d+),
        \s+Checksum\s+(?P<lsa_checksum>\d+)
        "
    ).unwrap();

    // IOS-XR groups its counters into three titled subsections.
    pub static ref XR_TRAFFIC_INTERFACE: Regex = Regex::new(
        r"(?sx)
        Interface\s+(?P<intf>\S+)\s+
        Process\s+ID\s+(?P<pid>\d+)\s+
        Area\s+(?P<area_id>\d+)\s+
        .*?
        OSPF\s+Header\s+Errors
        \s+Version\s+(?P<version>\d+)
        \s+LLS\s+(?P<lls>\d+)
        \s+Type\s+(?P<pkt_type>\d+)
        \s+Auth\s+RX\s+(?P<auth_rx>\d+)
        \s+Length\s+(?P<length>\d+)
        \s+Auth\s+TX\s+(?P<auth_tx>\d+)
        \s+Checksum\s+(?P<checksum>\d+)
        \s*OSPF\s+LSA\s+Errors
        \s+Type\s+(?P<lsa_type>\d+)
        \s+Checksum\s+(?P<lsa_checksum>\d+)
        \s+Length\s+(?P<lsa_length>\d+)
        \s+Data\s+(?P<lsa_data>\d+)
        \s*OSPF\s+Errors
        \s+Bad\s+Source\s+(?P<bad_src>\d+)
        \s+Area\s+Mismatch\s+(?P<area_mismatch>\d+)
        \s+No\s+Virtual\s+Link\s+(?P<no_vl>\d+)
        \s+Self\s+Originated\s+(?P<self_orig>\d+)
        \s+No\s+Sham\s+Link\s+(?P<no_sl>\d+)
        \s+Duplicate\s+ID\s+(?P<dup_rid>\d+)
        \s+Nbr\s+ignored\s+(?P<nbr_ignored>\d+)
        \s+Graceful\s+Shutdown\s+(?P<gshut>\d+)
        \s+Unknown\s+nbr\s+(?P<unk_nbr>\d+)
        \s+Passive\s+intf\s+(?P<passive_intf>\d+)
        \s+No\s+DR/BDR\s+(?P<no_dr_bdr>\d+)
        \s+Disabled\s+intf\s+(?P<disable_intf>\d+)
        \s+Enqueue\s+hello\s+(?P<enq_hello>\d+)
        \s+Enqueue\s+router\s+(?P<enq_rtr>\d+)
        \s+Unspecified\s+RX\s+(?P<unspec_rx>\d+)
        \s+Unspecified\s+TX\s+(?P<unspec_tx>\d+)
        \s+Socket\s+(?P<socket>\d+)
        "
    ).unwrap();

    // NX-OS reports traffic per process, not per interface.
    pub static ref NXOS_TRAFFIC_PROCESS: Regex = Regex::new(
        r"(?sx)
        OSPF\s+Process\s+ID\s+(?P<pid>\d+)\s+
        .*?
        Ignored\s+LSAs:\s+(?P<ignore_lsa>\d+),\s+
        LSAs\s+dropped\s+during\s+SPF:\s+(?P<lsa_drop_spf>\d+)\s+
        LSAs\s+dropped\s+during\s+graceful\s+restart:\s+(?P<lsa_drop_gr>\d+)
        \s+Errors:\s+
        drops\s+in\s+(?P<drops_in>\d+),\s+
        drops\s+out\s+(?P<drops_out>\d+),\s+
        errors\s+in\s+(?P<errors_in>\d+),\s+
        errors\s+out\s+(?P<errors_out>\d+),\s+
        hellos\s+in\s+(?P<hellos_in>\d+),\s+
        dbds\s+in\s+(?P<dbds_in>\d+),\s+
        lsreq\s+in\s+(?P<lsreq_in>\d+),\s+
        lsu\s+in\s+(?P<lsu_in>\d+),\s+
        lsacks\s+in\s+(?P<lsacks_in>\d+),\s+
        unknown\s+in\s+(?P<unk_in>\d+),\s+
        unknown\s+out\s+(?P<unk_out>\d+),\s+
        no\s+ospf\s+(?P<no_ospf>\d+),\s+
        bad\s+version\s+(?P<bad_ver>\d+),\s+
        bad\s+crc\s+(?P<bad_crc>\d+),\s+
        dup\s+rid\s+(?P<dup_rid>\d+),\s+
        dup\s+src\s+(?P<dup_src>\d+),\s+
        invalid\s+src\s+(?P<inv_src>\d+),\s+
        invalid\s+dst\s+(?P<inv_dst>\d+),\s+
        no\s+nbr\s+(?P<no_nbr>\d+),\s+
        passive\s+(?P<passive>\d+),\s+
        wrong\s+area\s+(?P<wrong_area>\d+),\s+
        pkt\s+length\s+(?P<pkt_len>\d+),\s+
        nbr\s+changed\s+rid/ip\s+addr\s+(?P<nbr_change>\d+)\s+
        bad\s+auth\s+(?P<bad_auth>\d+),\s+
        no\s+vrf\s+(?P<no_vrf>\d+)
        "
    ).unwrap();

    // "show ip ospf fast-reroute" per-area rows.
    pub static ref FRR_ROW: Regex = Regex::new(
        r"(?x)
        (?P<id>\d+)\s+
        (?P<topology>\w+)\s+
        (?P<pref_pri>(?:High|Low))\s+
        (?P<rlfa>(?:Yes|No))\s+
        (?P<tilfa>(?:Yes|No))
        "
    ).unwrap();

    // "show bfd neighbors" rows; the discriminator column is LD/RD.
    pub static ref BFD_NEIGHBOR_ROW: Regex = Regex::new(
        r"(?x)
        (?P<peer>\d+\.\d+\.\d+\.\d+)\s+
        (?P<ld>\d+)/
        (?P<rd>\d+)\s+
        (?P<rhrs>\w+)\s+
        (?P<state>\w+)\s+
        (?P<intf>[0-9A-Za-z./-]+)
        "
    ).unwrap();
}
