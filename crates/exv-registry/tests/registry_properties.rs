//! # Registry Property Tests
//!
//! Drives the registry with random call sequences from the admin and from
//! outsiders, and checks the invariants that must hold after every call:
//!
//! - a rejected call leaves the snapshot byte-for-byte unchanged;
//! - records are never removed;
//! - `company-name`, `country` and `verification-date` never change once set;
//! - an inactive record never becomes active again;
//! - error codes follow the guard order (authorization first).

use std::collections::BTreeMap;

use exv_core::{BlockHeight, Principal};
use exv_registry::{ErrorCode, ExporterRecord, ExporterRegistry, TxContext};
use proptest::prelude::*;

const ADMIN: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";
const OUTSIDER: &str = "ST3NBRSFKX28FQ2ZJ1MAKX58HKHSDGNV5NH7B0M";
const EXPORTERS: [&str; 4] = [
    "ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG",
    "ST2JHG361ZXG51QTKY2NQCVBPPRRE2KZB1HR05NNC",
    "ST2NEB84ASENDXKYGJPQW86YXQCEFEX2ZQPG87ND",
    "ST2REHHS5J3CERCRBEPMGH7921Q6PYKAADT7JP2VB",
];

#[derive(Debug, Clone)]
enum Call {
    Verify {
        by_admin: bool,
        exporter: usize,
        company: String,
        country: String,
    },
    Deactivate {
        by_admin: bool,
        exporter: usize,
    },
    Query {
        exporter: usize,
    },
}

fn call_strategy() -> impl Strategy<Value = Call> {
    prop_oneof![
        (
            any::<bool>(),
            0..EXPORTERS.len(),
            "[A-Za-z ]{1,24}",
            prop::sample::select(vec!["USA", "Canada", "Kenya", "Pakistan"]),
        )
            .prop_map(|(by_admin, exporter, company, country)| Call::Verify {
                by_admin,
                exporter,
                company,
                country: country.to_string(),
            }),
        (any::<bool>(), 0..EXPORTERS.len())
            .prop_map(|(by_admin, exporter)| Call::Deactivate { by_admin, exporter }),
        (0..EXPORTERS.len()).prop_map(|exporter| Call::Query { exporter }),
    ]
}

fn p(s: &str) -> Principal {
    Principal::new(s).unwrap()
}

fn ctx(by_admin: bool, height: u64) -> TxContext {
    TxContext::new(p(if by_admin { ADMIN } else { OUTSIDER }), height)
}

proptest! {
    #[test]
    fn registry_invariants_hold(calls in prop::collection::vec(call_strategy(), 1..40)) {
        let mut reg = ExporterRegistry::new(p(ADMIN));
        let mut first_seen: BTreeMap<Principal, ExporterRecord> = BTreeMap::new();

        for (i, call) in calls.into_iter().enumerate() {
            let height = 100 + i as u64;
            let before = reg.snapshot();

            let result = match call {
                Call::Verify { by_admin, exporter, company, country } => {
                    let e = p(EXPORTERS[exporter]);
                    let existed = before.exporters.contains_key(&e);
                    let r = reg.verify_exporter(&ctx(by_admin, height), e.clone(), company.clone(), country.clone());
                    match (&r, by_admin, existed) {
                        (Err(err), false, _) => prop_assert_eq!(err.code(), ErrorCode::NotAuthorized),
                        (Err(err), true, true) => prop_assert_eq!(err.code(), ErrorCode::AlreadyVerified),
                        (Ok(true), true, false) => {
                            let rec = reg.get_exporter(&e).unwrap();
                            prop_assert_eq!(rec, ExporterRecord::verified(company, country, BlockHeight(height)));
                        }
                        other => prop_assert!(false, "unexpected verify outcome {:?}", other),
                    }
                    r
                }
                Call::Deactivate { by_admin, exporter } => {
                    let e = p(EXPORTERS[exporter]);
                    let existed = before.exporters.contains_key(&e);
                    let r = reg.deactivate_exporter(&ctx(by_admin, height), &e);
                    match (&r, by_admin, existed) {
                        (Err(err), false, _) => prop_assert_eq!(err.code(), ErrorCode::NotAuthorized),
                        (Err(err), true, false) => prop_assert_eq!(err.code(), ErrorCode::NotFound),
                        (Ok(true), true, true) => prop_assert_eq!(reg.is_verified_exporter(&e), Ok(false)),
                        other => prop_assert!(false, "unexpected deactivate outcome {:?}", other),
                    }
                    r
                }
                Call::Query { exporter } => {
                    let e = p(EXPORTERS[exporter]);
                    let r = reg.is_verified_exporter(&e);
                    match before.exporters.get(&e) {
                        Some(rec) => prop_assert_eq!(&r, &Ok(rec.is_active)),
                        None => prop_assert_eq!(r.as_ref().map_err(|e| e.code()), Err(ErrorCode::NotFound)),
                    }
                    r
                }
            };

            let after = reg.snapshot();
            if result.is_err() {
                prop_assert_eq!(&after, &before);
            }
            for (key, old) in &before.exporters {
                let new = after.exporters.get(key);
                prop_assert!(new.is_some(), "record for {} disappeared", key);
                let new = new.unwrap();
                if !old.is_active {
                    prop_assert!(!new.is_active, "record for {} was reactivated", key);
                }
            }
            for (key, rec) in &after.exporters {
                let original = first_seen.entry(key.clone()).or_insert_with(|| rec.clone());
                prop_assert_eq!(&rec.company_name, &original.company_name);
                prop_assert_eq!(&rec.country, &original.country);
                prop_assert_eq!(rec.verification_date, original.verification_date);
            }
        }
    }

    #[test]
    fn outsiders_never_change_state(
        calls in prop::collection::vec(call_strategy(), 1..30)
    ) {
        let mut reg = ExporterRegistry::new(p(ADMIN));
        let seed = TxContext::new(p(ADMIN), 1);
        reg.verify_exporter(&seed, p(EXPORTERS[0]), "Seed Exports", "USA").unwrap();
        let digest = reg.snapshot().digest().unwrap();
        let events = reg.events().len();

        for (i, call) in calls.into_iter().enumerate() {
            let c = ctx(false, 10 + i as u64);
            match call {
                Call::Verify { exporter, company, country, .. } => {
                    let r = reg.verify_exporter(&c, p(EXPORTERS[exporter]), company, country);
                    prop_assert_eq!(r.map_err(|e| e.code()), Err(ErrorCode::NotAuthorized));
                }
                Call::Deactivate { exporter, .. } => {
                    let r = reg.deactivate_exporter(&c, &p(EXPORTERS[exporter]));
                    prop_assert_eq!(r.map_err(|e| e.code()), Err(ErrorCode::NotAuthorized));
                }
                Call::Query { exporter } => {
                    let _ = reg.is_verified_exporter(&p(EXPORTERS[exporter]));
                }
            }
        }

        prop_assert_eq!(reg.snapshot().digest().unwrap(), digest);
        prop_assert_eq!(reg.events().len(), events);
    }
}
