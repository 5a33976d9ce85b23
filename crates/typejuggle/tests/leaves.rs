use std::time::Duration;

use typejuggle::{fill_fields, fill_fields_with, Mappable, MismatchKind, Options};

#[derive(Mappable, Debug, Clone, Default, PartialEq)]
enum Status {
    #[default]
    Pending,
    Active {
        since: u32,
    },
}

#[derive(Mappable, Debug, Clone, Default, PartialEq)]
#[mappable(leaf)]
struct Money {
    cents: i64,
    currency: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Checksum([u8; 4]);

typejuggle::leaf!(Checksum);

#[derive(Mappable, Default)]
struct Account {
    status: Status,
    balance: Money,
    checksum: Option<Checksum>,
    timeout: Duration,
}

#[derive(Mappable, Default)]
struct AccountRow {
    status: Option<Status>,
    balance: Money,
    checksum: Checksum,
    timeout: Duration,
}

#[test]
fn leaves_clone_between_identical_types() {
    let account = Account {
        status: Status::Active { since: 2020 },
        balance: Money {
            cents: 1299,
            currency: "EUR".into(),
        },
        checksum: Some(Checksum([1, 2, 3, 4])),
        timeout: Duration::from_secs(30),
    };
    let mut row = AccountRow::default();

    fill_fields(&account, &mut row);

    assert_eq!(row.status, Some(Status::Active { since: 2020 }));
    assert_eq!(row.balance, account.balance);
    assert_eq!(row.checksum, Checksum([1, 2, 3, 4]));
    assert_eq!(row.timeout, Duration::from_secs(30));
}

#[test]
fn leaves_of_different_types_are_skipped() {
    #[derive(Mappable)]
    struct Src {
        balance: Checksum,
    }
    let mut row = AccountRow::default();

    let report = fill_fields_with(
        &Src {
            balance: Checksum([9; 4]),
        },
        &mut row,
        &Options::new().lossy(true),
    )
    .unwrap();

    assert_eq!(row.balance, Money::default());
    assert!(matches!(
        report.mismatches[0].kind,
        MismatchKind::LeafType { .. }
    ));
    assert_eq!(report.cloned, 0);
}
