use ngo_ledger_core::{
    composite_key, init, invoke, ErrorKind, LedgerStore, MemoryLedgerStore, Operation, Response,
};

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn call(store: &mut MemoryLedgerStore, function: &str, values: &[&str]) -> Response {
    invoke(store, function, &args(values))
}

fn assert_not_found(response: &Response) {
    assert_eq!(response.error_kind(), Some(ErrorKind::NotFound), "{response:?}");
}

#[test]
fn register_then_query_ngo_end_to_end() {
    let mut store = MemoryLedgerStore::new();

    assert_eq!(init(), Response::success("NGO Chaincode Initialized"));
    assert_eq!(
        call(&mut store, "registerNGO", &["ngo1", "Red Cross"]),
        Response::success("NGO registered successfully: ngo1")
    );
    assert_eq!(
        call(&mut store, "queryNGO", &["ngo1"]),
        Response::success("Red Cross")
    );

    let missing = call(&mut store, "queryNGO", &["ngo2"]);
    assert_eq!(
        missing,
        Response::error(ErrorKind::NotFound, "NGO not found: ngo2")
    );
}

#[test]
fn register_overwrites_existing_ngo() {
    let mut store = MemoryLedgerStore::new();
    call(&mut store, "registerNGO", &["ngo1", "first"]);
    call(&mut store, "registerNGO", &["ngo1", "second"]);
    assert_eq!(call(&mut store, "queryNGO", &["ngo1"]).message(), "second");
    assert_eq!(store.len(), 1);
}

#[test]
fn donation_request_query_before_and_after_create() {
    let mut store = MemoryLedgerStore::new();
    assert_not_found(&call(&mut store, "queryDonationRequest", &["O1", "R1"]));

    assert_eq!(
        call(&mut store, "createDonationRequest", &["R1", "O1", "blankets"]),
        Response::success("Donation request created successfully: R1")
    );
    assert_eq!(
        call(&mut store, "queryDonationRequest", &["O1", "R1"]),
        Response::success("blankets")
    );
}

#[test]
fn update_before_create_is_not_found_and_writes_nothing() {
    let mut store = MemoryLedgerStore::new();
    let response = call(&mut store, "updateDonationRequest", &["R1", "O1", "x"]);
    assert_eq!(
        response,
        Response::error(ErrorKind::NotFound, "Donation request not found: R1")
    );
    assert!(store.is_empty());
}

#[test]
fn create_update_query_returns_updated_value() {
    let mut store = MemoryLedgerStore::new();
    call(&mut store, "createDonationRequest", &["R1", "O1", "original"]);

    assert_eq!(
        call(&mut store, "updateDonationRequest", &["R1", "O1", "updated"]),
        Response::success("Donation request updated successfully: R1")
    );
    assert_eq!(
        call(&mut store, "queryDonationRequest", &["O1", "R1"]),
        Response::success("updated")
    );

    // Same value again is harmless.
    assert!(call(&mut store, "updateDonationRequest", &["R1", "O1", "updated"]).is_success());
}

#[test]
fn delete_then_query_and_second_delete_are_not_found() {
    let mut store = MemoryLedgerStore::new();
    call(&mut store, "createDonationRequest", &["R1", "O1", "info"]);

    assert_eq!(
        call(&mut store, "deleteDonationRequest", &["O1", "R1"]),
        Response::success("Donation request deleted successfully: R1")
    );
    assert_not_found(&call(&mut store, "queryDonationRequest", &["O1", "R1"]));
    assert_not_found(&call(&mut store, "deleteDonationRequest", &["O1", "R1"]));
    assert!(store.is_empty());
}

#[test]
fn swapped_ids_address_a_different_record() {
    let mut store = MemoryLedgerStore::new();
    call(&mut store, "createDonationRequest", &["R1", "O1", "info"]);

    // Delete/query take the NGO id first; passing create's order misses.
    assert_not_found(&call(&mut store, "queryDonationRequest", &["R1", "O1"]));
    assert_not_found(&call(&mut store, "deleteDonationRequest", &["R1", "O1"]));
    assert_eq!(
        call(&mut store, "queryDonationRequest", &["O1", "R1"]).message(),
        "info"
    );
}

#[test]
fn requests_are_scoped_per_ngo() {
    let mut store = MemoryLedgerStore::new();
    call(&mut store, "createDonationRequest", &["R1", "O1", "for O1"]);
    call(&mut store, "createDonationRequest", &["R1", "O2", "for O2"]);

    assert_eq!(
        call(&mut store, "queryDonationRequest", &["O1", "R1"]).message(),
        "for O1"
    );
    assert_eq!(
        call(&mut store, "queryDonationRequest", &["O2", "R1"]).message(),
        "for O2"
    );
    assert_eq!(store.len(), 2);
}

#[test]
fn separator_characters_in_ids_never_collide() {
    let mut store = MemoryLedgerStore::new();
    call(&mut store, "createDonationRequest", &["C", "A:B", "first"]);
    call(&mut store, "createDonationRequest", &["B:C", "A", "second"]);

    assert_eq!(store.len(), 2);
    assert_eq!(
        call(&mut store, "queryDonationRequest", &["A:B", "C"]).message(),
        "first"
    );
    assert_eq!(
        call(&mut store, "queryDonationRequest", &["A", "B:C"]).message(),
        "second"
    );
    assert_ne!(
        composite_key("DonationRequest", &["A:B", "C"]).unwrap(),
        composite_key("DonationRequest", &["A", "B:C"]).unwrap()
    );
}

#[test]
fn donate_writes_donation_namespace_only() {
    let mut store = MemoryLedgerStore::new();
    assert_eq!(
        call(&mut store, "donate", &["D1", "O1", "250.00"]),
        Response::success("Donation made successfully: D1")
    );
    assert!(call(&mut store, "donate", &["D1", "O1", "300.00"]).is_success());

    let key = composite_key("Donation", &["O1", "D1"]).unwrap();
    assert_eq!(store.get_state(&key).unwrap().as_deref(), Some("300.00"));

    // A donation is not a donation request.
    assert_not_found(&call(&mut store, "queryDonationRequest", &["O1", "D1"]));
}

#[test]
fn ngo_ids_cannot_shadow_composite_keys() {
    let mut store = MemoryLedgerStore::new();
    call(&mut store, "createDonationRequest", &["R1", "O1", "info"]);
    let shadow = composite_key("DonationRequest", &["O1", "R1"]).unwrap();

    let response = invoke(
        &mut store,
        "registerNGO",
        &[shadow.clone(), "hijack".to_string()],
    );
    assert_eq!(response.error_kind(), Some(ErrorKind::InvalidKey));
    assert_eq!(store.get_state(&shadow).unwrap().as_deref(), Some("info"));

    let empty = call(&mut store, "registerNGO", &["", "info"]);
    assert_eq!(empty.error_kind(), Some(ErrorKind::InvalidKey));
}

#[test]
fn wrong_arity_fails_without_mutation() {
    let mut store = MemoryLedgerStore::new();
    call(&mut store, "registerNGO", &["ngo1", "Red Cross"]);
    call(&mut store, "createDonationRequest", &["R1", "O1", "info"]);
    let before = store.clone();

    let cases: &[(&str, &[&str])] = &[
        ("registerNGO", &["ngo1"]),
        ("registerNGO", &["ngo1", "changed", "extra"]),
        ("createDonationRequest", &["R2", "O1"]),
        ("updateDonationRequest", &["R1", "O1"]),
        ("updateDonationRequest", &["R1", "O1", "changed", "extra"]),
        ("deleteDonationRequest", &["O1"]),
        ("deleteDonationRequest", &["O1", "R1", "extra"]),
        ("donate", &["D1", "O1"]),
        ("queryNGO", &[]),
        ("queryDonationRequest", &["O1"]),
    ];

    for (function, values) in cases {
        let response = call(&mut store, function, values);
        let operation = Operation::from_name(function).unwrap();
        assert_eq!(
            response,
            Response::error(ErrorKind::Arity, operation.usage()),
            "{function} {values:?}"
        );
    }

    assert_eq!(store.keys().collect::<Vec<_>>(), before.keys().collect::<Vec<_>>());
    assert_eq!(call(&mut store, "queryNGO", &["ngo1"]).message(), "Red Cross");
    assert_eq!(
        call(&mut store, "queryDonationRequest", &["O1", "R1"]).message(),
        "info"
    );
}

#[test]
fn empty_stored_value_counts_as_missing() {
    let mut store = MemoryLedgerStore::new();
    call(&mut store, "createDonationRequest", &["R1", "O1", ""]);
    call(&mut store, "registerNGO", &["ngo1", ""]);

    assert_not_found(&call(&mut store, "queryDonationRequest", &["O1", "R1"]));
    assert_not_found(&call(&mut store, "updateDonationRequest", &["R1", "O1", "x"]));
    assert_not_found(&call(&mut store, "deleteDonationRequest", &["O1", "R1"]));
    assert_not_found(&call(&mut store, "queryNGO", &["ngo1"]));
}

#[test]
fn function_names_are_case_sensitive() {
    let mut store = MemoryLedgerStore::new();
    for name in ["registerngo", "QueryNGO", "init", ""] {
        let response = call(&mut store, name, &["ngo1", "info"]);
        assert_eq!(
            response,
            Response::error(
                ErrorKind::UnknownOperation,
                format!("Invalid function name: {name}")
            )
        );
    }
    assert!(store.is_empty());
}

#[test]
fn responses_serialize_as_tagged_json() {
    let success = serde_json::to_value(Response::success("Red Cross")).unwrap();
    assert_eq!(
        success,
        serde_json::json!({ "status": "success", "payload": "Red Cross" })
    );

    let error = serde_json::to_value(Response::error(ErrorKind::NotFound, "NGO not found: x"))
        .unwrap();
    assert_eq!(
        error,
        serde_json::json!({
            "status": "error",
            "kind": "not_found",
            "message": "NGO not found: x",
        })
    );

    let parsed: Response = serde_json::from_value(error).unwrap();
    assert_eq!(parsed.error_kind(), Some(ErrorKind::NotFound));
}
