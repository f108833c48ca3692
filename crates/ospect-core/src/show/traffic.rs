//! OSPF traffic-counter parsers ("show ip ospf traffic" family).
//!
//! Pure block extraction over large fixed counter schemas. IOS and
//! IOS-XR report per interface; NX-OS reports per process. The field
//! sets barely overlap, so each dialect gets its own record type.

use tracing::debug;

use super::patterns::{IOS_TRAFFIC_INTERFACE, NXOS_TRAFFIC_PROCESS, XR_TRAFFIC_INTERFACE};
use super::Result;
use crate::models::ospf::{IosInterfaceTraffic, NxosProcessTraffic, XrInterfaceTraffic};
use crate::pattern::{block_matches, int_field};

/// Parse Cisco IOS "show ip ospf traffic" output, one record per
/// interface section.
pub fn ios(text: &str) -> Result<Vec<IosInterfaceTraffic>> {
    let records = block_matches(&IOS_TRAFFIC_INTERFACE, text, |caps| {
        Ok(IosInterfaceTraffic {
            intf: caps["intf"].to_string(),
            length: int_field(caps, "length")?,
            instance_id: int_field(caps, "instance_id")?,
            checksum: int_field(caps, "checksum")?,
            auth_type: int_field(caps, "auth_type")?,
            version: int_field(caps, "version")?,
            bad_src: int_field(caps, "bad_src")?,
            no_vl: int_field(caps, "no_vl")?,
            area_mismatch: int_field(caps, "area_mismatch")?,
            no_sl: int_field(caps, "no_sl")?,
            self_orig: int_field(caps, "self_orig")?,
            dup_rid: int_field(caps, "dup_rid")?,
            hello_pkt: int_field(caps, "hello_pkt")?,
            mtu_mismatch: int_field(caps, "mtu_mismatch")?,
            nbr_ignored: int_field(caps, "nbr_ignored")?,
            lls: int_field(caps, "lls")?,
            unk_nbr: int_field(caps, "unk_nbr")?,
            auth: int_field(caps, "auth")?,
            ttlsec_fail: int_field(caps, "ttlsec_fail")?,
            adj_throttle: int_field(caps, "adj_throttle")?,
            bfd: int_field(caps, "bfd")?,
            test_discard: int_field(caps, "test_discard")?,
            lsa_type: int_field(caps, "lsa_type")?,
            lsa_length: int_field(caps, "lsa_length")?,
            lsa_data: int_field(caps, "lsa_data")?,
            lsa_checksum: int_field(caps, "lsa_checksum")?,
        })
    })?;
    debug!("parsed {} ios traffic interface blocks", records.len());
    Ok(records)
}

/// Parse Cisco IOS-XR "show ospf traffic" output, one record per
/// interface section.
pub fn iosxr(text: &str) -> Result<Vec<XrInterfaceTraffic>> {
    let records = block_matches(&XR_TRAFFIC_INTERFACE, text, |caps| {
        Ok(XrInterfaceTraffic {
            intf: caps["intf"].to_string(),
            pid: int_field(caps, "pid")?,
            area_id: int_field(caps, "area_id")?,
            version: int_field(caps, "version")?,
            lls: int_field(caps, "lls")?,
            pkt_type: int_field(caps, "pkt_type")?,
            auth_rx: int_field(caps, "auth_rx")?,
            length: int_field(caps, "length")?,
            auth_tx: int_field(caps, "auth_tx")?,
            checksum: int_field(caps, "checksum")?,
            lsa_type: int_field(caps, "lsa_type")?,
            lsa_checksum: int_field(caps, "lsa_checksum")?,
            lsa_length: int_field(caps, "lsa_length")?,
            lsa_data: int_field(caps, "lsa_data")?,
            bad_src: int_field(caps, "bad_src")?,
            area_mismatch: int_field(caps, "area_mismatch")?,
            no_vl: int_field(caps, "no_vl")?,
            self_orig: int_field(caps, "self_orig")?,
            no_sl: int_field(caps, "no_sl")?,
            dup_rid: int_field(caps, "dup_rid")?,
            nbr_ignored: int_field(caps, "nbr_ignored")?,
            gshut: int_field(caps, "gshut")?,
            unk_nbr: int_field(caps, "unk_nbr")?,
            passive_intf: int_field(caps, "passive_intf")?,
            no_dr_bdr: int_field(caps, "no_dr_bdr")?,
            disable_intf: int_field(caps, "disable_intf")?,
            enq_hello: int_field(caps, "enq_hello")?,
            enq_rtr: int_field(caps, "enq_rtr")?,
            unspec_rx: int_field(caps, "unspec_rx")?,
            unspec_tx: int_field(caps, "unspec_tx")?,
            socket: int_field(caps, "socket")?,
        })
    })?;
    debug!("parsed {} ios-xr traffic interface blocks", records.len());
    Ok(records)
}

/// Parse Cisco NX-OS "show ip ospf traffic" output, one record per
/// process section.
pub fn nxos(text: &str) -> Result<Vec<NxosProcessTraffic>> {
    let records = block_matches(&NXOS_TRAFFIC_PROCESS, text, |caps| {
        Ok(NxosProcessTraffic {
            pid: int_field(caps, "pid")?,
            ignore_lsa: int_field(caps, "ignore_lsa")?,
            lsa_drop_spf: int_field(caps, "lsa_drop_spf")?,
            lsa_drop_gr: int_field(caps, "lsa_drop_gr")?,
            drops_in: int_field(caps, "drops_in")?,
            drops_out: int_field(caps, "drops_out")?,
            errors_in: int_field(caps, "errors_in")?,
            errors_out: int_field(caps, "errors_out")?,
            hellos_in: int_field(caps, "hellos_in")?,
            dbds_in: int_field(caps, "dbds_in")?,
            lsreq_in: int_field(caps, "lsreq_in")?,
            lsu_in: int_field(caps, "lsu_in")?,
            lsacks_in: int_field(caps, "lsacks_in")?,
            unk_in: int_field(caps, "unk_in")?,
            unk_out: int_field(caps, "unk_out")?,
            no_ospf: int_field(caps, "no_ospf")?,
            bad_ver: int_field(caps, "bad_ver")?,
            bad_crc: int_field(caps, "bad_crc")?,
            dup_rid: int_field(caps, "dup_rid")?,
            dup_src: int_field(caps, "dup_src")?,
            inv_src: int_field(caps, "inv_src")?,
            inv_dst: int_field(caps, "inv_dst")?,
            no_nbr: int_field(caps, "no_nbr")?,
            passive: int_field(caps, "passive")?,
            wrong_area: int_field(caps, "wrong_area")?,
            pkt_len: int_field(caps, "pkt_len")?,
            nbr_change: int_field(caps, "nbr_change")?,
            bad_auth: int_field(caps, "bad_auth")?,
            no_vrf: int_field(caps, "no_vrf")?,
        })
    })?;
    debug!("parsed {} nx-os traffic process blocks", records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn ios_block(intf: &str, bad_src: u64) -> String {
        format!(
            "\
Interface {intf}

Last clearing of interface traffic counters never

OSPF packets received/sent
  Type          Packets              Bytes
  RX Invalid    0                    0
  RX Hello      1412                 67776

OSPF header errors
  Length 0, Instance ID 0, Checksum 0, Auth Type 0,
  Version 0, Bad Source {bad_src}, No Virtual Link 0,
  Area Mismatch 0, No Sham Link 0, Self Originated 0,
  Duplicate ID 0, Hello 3, MTU Mismatch 0,
  Nbr Ignored 0, LLS 0, Unknown Neighbor 0,
  Authentication 0, TTL Check Fail 0, Adjacency Throttle 0,
  BFD 0, Test discard 0

OSPF LSA errors
  Type 0, Length 0, Data 0, Checksum 1
"
        )
    }

    #[test]
    fn test_ios_interface_counters() {
        let text = ios_block("GigabitEthernet0/0", 12);
        let records = ios(&text).unwrap();
        assert_eq!(records.len(), 1);

        let rec = &records[0];
        assert_eq!(rec.intf, "GigabitEthernet0/0");
        assert_eq!(rec.bad_src, 12);
        assert_eq!(rec.hello_pkt, 3);
        assert_eq!(rec.test_discard, 0);
        assert_eq!(rec.lsa_checksum, 1);
    }

    #[test]
    fn test_ios_one_record_per_interface() {
        let text = format!(
            "{}\n{}",
            ios_block("GigabitEthernet0/0", 1),
            ios_block("GigabitEthernet0/1", 2)
        );
        let records = ios(&text).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].intf, "GigabitEthernet0/0");
        assert_eq!(records[0].bad_src, 1);
        assert_eq!(records[1].intf, "GigabitEthernet0/1");
        assert_eq!(records[1].bad_src, 2);
    }

    #[test]
    fn test_iosxr_interface_counters() {
        let text = "\
          Interface GigabitEthernet0/0/0/0
Process ID 1
Area 0

  OSPF Header Errors
    Version     0    LLS         0
    Type        0    Auth RX     0
    Length      0    Auth TX     0
    Checksum    0

  OSPF LSA Errors
    Type        0    Checksum    2
    Length      0    Data        0

  OSPF Errors
    Bad Source        7    Area Mismatch     0
    No Virtual Link   0    Self Originated   0
    No Sham Link      0    Duplicate ID      0
    Nbr ignored       0    Graceful Shutdown 0
    Unknown nbr       0    Passive intf      0
    No DR/BDR         0    Disabled intf     0
    Enqueue hello     0    Enqueue router    0
    Unspecified RX    0    Unspecified TX    0
    Socket            0
";
        let records = iosxr(text).unwrap();
        assert_eq!(records.len(), 1);

        let rec = &records[0];
        assert_eq!(rec.intf, "GigabitEthernet0/0/0/0");
        assert_eq!(rec.pid, 1);
        assert_eq!(rec.area_id, 0);
        assert_eq!(rec.lsa_checksum, 2);
        assert_eq!(rec.bad_src, 7);
        assert_eq!(rec.socket, 0);
    }

    #[test]
    fn test_nxos_process_counters() {
        let text = "\
 OSPF Process ID 1 VRF default, Packet Counters (cleared 6d02h ago)
  Total: 1234 in, 1230 out
  LSUs: 55 in, 53 out
  Ignored LSAs: 4, LSAs dropped during SPF: 1
  LSAs dropped during graceful restart: 0
  Errors: drops in 0, drops out 0, errors in 0,
    errors out 0, hellos in 0, dbds in 0, lsreq in 0,
    lsu in 0, lsacks in 0, unknown in 0, unknown out 0,
    no ospf 0, bad version 0, bad crc 9, dup rid 0,
    dup src 0, invalid src 0, invalid dst 0, no nbr 0,
    passive 0, wrong area 0, pkt length 0,
    nbr changed rid/ip addr 0
    bad auth 0, no vrf 0
";
        let records = nxos(text).unwrap();
        assert_eq!(records.len(), 1);

        let rec = &records[0];
        assert_eq!(rec.pid, 1);
        assert_eq!(rec.ignore_lsa, 4);
        assert_eq!(rec.lsa_drop_spf, 1);
        assert_eq!(rec.bad_crc, 9);
        assert_eq!(rec.no_vrf, 0);
    }
}
