use tfs_bridge::{
    build_args, CheckinOptions, CheckoutOptions, GetLatestOptions, HistoryOptions, MergeOptions,
    OperationOptions, PathOptions, StatusOptions,
};

fn args(op: &OperationOptions) -> Vec<String> {
    build_args(op)
}

#[test]
fn test_checkout_example() {
    let op = OperationOptions::Checkout(CheckoutOptions {
        paths: vec!["a.txt".into(), "b.txt".into()],
        lock_type: Some("checkout".into()),
        recursive: true,
        file_type: None,
    });
    assert_eq!(
        args(&op),
        vec!["checkout", "/lock:checkout", "/recursive", "a.txt", "b.txt"]
    );
}

#[test]
fn test_checkin_example() {
    let op = OperationOptions::Checkin(CheckinOptions {
        paths: vec!["f.txt".into()],
        comment: "fix bug".into(),
        recursive: false,
        associate: vec![123],
        resolve: vec![],
        override_reason: None,
    });
    assert_eq!(
        args(&op),
        vec!["checkin", "/comment:fix bug", "/associate:123", "f.txt"]
    );
}

#[test]
fn test_status_example() {
    let op = OperationOptions::Status(StatusOptions {
        paths: None,
        recursive: false,
    });
    assert_eq!(args(&op), vec!["status", "."]);
}

#[test]
fn test_base_token_first_for_every_operation() {
    let ops = vec![
        ("checkout", OperationOptions::Checkout(CheckoutOptions::default())),
        ("checkin", OperationOptions::Checkin(CheckinOptions::default())),
        ("add", OperationOptions::Add(PathOptions::default())),
        ("delete", OperationOptions::Delete(PathOptions::default())),
        ("undo", OperationOptions::Undo(PathOptions::default())),
        ("status", OperationOptions::Status(StatusOptions::default())),
        ("get", OperationOptions::GetLatest(GetLatestOptions::default())),
        ("merge", OperationOptions::Merge(MergeOptions::default())),
        ("history", OperationOptions::History(HistoryOptions::default())),
    ];
    for (token, op) in ops {
        let a = args(&op);
        assert_eq!(a[0], token, "operation {} produced {:?}", op.name(), a);
        assert!(
            !a.iter().any(|t| t == "/recursive" || t == "/force"),
            "false switches must be omitted: {:?}",
            a
        );
    }
}

#[test]
fn test_one_flag_per_work_item_in_input_order() {
    let ids: Vec<u64> = vec![42, 7, 1000, 7];
    let op = OperationOptions::Checkin(CheckinOptions {
        paths: vec!["x".into()],
        comment: "c".into(),
        associate: ids.clone(),
        resolve: ids.clone(),
        ..Default::default()
    });
    let a = args(&op);
    let assoc: Vec<&str> = a
        .iter()
        .filter_map(|t| t.strip_prefix("/associate:"))
        .collect();
    let resolve: Vec<&str> = a.iter().filter_map(|t| t.strip_prefix("/resolve:")).collect();
    let expected: Vec<String> = ids.iter().map(|i| i.to_string()).collect();
    assert_eq!(assoc, expected);
    assert_eq!(resolve, expected);
}
