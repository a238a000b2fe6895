use std::net::Ipv4Addr;

pub const DOMAIN: &str = "asda.uk";

pub const UKRED_HOSTS: [(&str, Ipv4Addr); 11] = [
    ("R1A.UKRED.asda.uk", Ipv4Addr::new(10, 0, 8, 146)),
    ("R1B.UKRED.asda.uk", Ipv4Addr::new(10, 0, 8, 147)),
    ("R2A.UKRED.asda.uk", Ipv4Addr::new(10, 0, 6, 81)),
    ("R3A.UKRED.asda.uk", Ipv4Addr::new(10, 0, 6, 82)),
    ("S1A.UKRED.asda.uk", Ipv4Addr::new(10, 0, 8, 148)),
    ("S1B.UKRED.asda.uk", Ipv4Addr::new(10, 0, 8, 149)),
    ("S2A.UKRED.asda.uk", Ipv4Addr::new(10, 0, 8, 150)),
    ("S2B.UKRED.asda.uk", Ipv4Addr::new(10, 0, 8, 151)),
    ("S3A.UKRED.asda.uk", Ipv4Addr::new(10, 13, 6, 130)),
    ("R1A.OOB.UKRED.asda.uk", Ipv4Addr::new(10, 0, 6, 0)),
    ("S1A.OOB.UKRED.asda.uk", Ipv4Addr::new(10, 0, 6, 68)),
];

pub const UKSLO_HOSTS: [(&str, Ipv4Addr); 11] = [
    ("R1A.UKSLO.asda.uk", Ipv4Addr::new(10, 0, 8, 140)),
    ("R1B.UKSLO.asda.uk", Ipv4Addr::new(10, 0, 8, 141)),
    ("R2A.UKSLO.asda.uk", Ipv4Addr::new(10, 0, 4, 81)),
    ("R3A.UKSLO.asda.uk", Ipv4Addr::new(10, 0, 4, 82)),
    ("S1A.UKSLO.asda.uk", Ipv4Addr::new(10, 0, 8, 142)),
    ("S1B.UKSLO.asda.uk", Ipv4Addr::new(10, 0, 8, 143)),
    ("S2A.UKSLO.asda.uk", Ipv4Addr::new(10, 0, 8, 144)),
    ("S2B.UKSLO.asda.uk", Ipv4Addr::new(10, 0, 8, 145)),
    ("S3A.UKSLO.asda.uk", Ipv4Addr::new(10, 12, 6, 130)),
    ("R1A.OOB.UKSLO.asda.uk", Ipv4Addr::new(10, 0, 4, 0)),
    ("S1A.OOB.UKSLO.asda.uk", Ipv4Addr::new(10, 0, 4, 68)),
];

/// Device roles at a regular store.
pub const STANDARD_ROLES: [&str; 11] = [
    "ra", "rb", "supc1", "sgrc1", "sgrc2", "sgm1", "sgm2", "shs1", "shs2", "shoarea1", "shoarea2",
];

/// Device roles at `7xxx` sites (distribution centres).
///
/// `rcoreb` and `sacc1` are two separate devices.
pub const ALTERNATE_ROLES: [&str; 38] = [
    "ra", "rb", "rcorea", "rcoreb", "sacc1", "sacc2", "ssrvacc1", "ssrvacc2", "ssrvacc1-1",
    "ssrvacc1-2", "ssrvacca", "ssrvaccb", "stca01", "stcb01", "stcc01", "stcd01", "stce01",
    "stcf01", "stcg01", "stch01", "stci01", "stcj01", "stck01", "stcl01", "stcm01", "stcn01",
    "stco01", "stcp01", "stcq01", "stcr01", "stcs01", "stct01", "stcu01", "stcv01", "stcw01",
    "stcx01", "stcy01", "stcz01",
];
