#![allow(non_snake_case)]

use typejuggle::{fill_fields, Aggregate, Mappable};

#[test]
fn upper_id_maps_to_mixed_case_id() {
    #[derive(Mappable)]
    struct Src {
        ID: i32,
    }
    #[derive(Mappable, Default)]
    struct Dest {
        Id: i32,
    }
    let mut dest = Dest::default();

    fill_fields(&Src { ID: 42 }, &mut dest);

    assert_eq!(dest.Id, 42);
}

#[test]
fn mixed_case_id_maps_to_upper_id() {
    #[derive(Mappable)]
    struct Src {
        Id: i32,
    }
    #[derive(Mappable, Default)]
    struct Dest {
        ID: i32,
    }
    let mut dest = Dest::default();

    fill_fields(&Src { Id: 7 }, &mut dest);

    assert_eq!(dest.ID, 7);
}

#[test]
fn alias_wins_over_exact_name_when_both_exist() {
    #[derive(Mappable)]
    struct Src {
        ID: i32,
    }
    #[derive(Mappable, Default)]
    struct Dest {
        ID: i32,
        Id: i32,
    }
    let mut dest = Dest::default();

    fill_fields(&Src { ID: 3 }, &mut dest);

    assert_eq!(dest.Id, 3);
    assert_eq!(dest.ID, 0);
}

#[test]
fn both_spellings_on_source_cross_over() {
    #[derive(Mappable)]
    struct Src {
        ID: i32,
        Id: i32,
    }
    #[derive(Mappable, Default)]
    struct Dest {
        ID: i32,
        Id: i32,
    }
    let mut dest = Dest::default();

    fill_fields(&Src { ID: 1, Id: 2 }, &mut dest);

    assert_eq!(dest.Id, 1);
    assert_eq!(dest.ID, 2);
}

#[test]
fn matching_is_case_sensitive() {
    #[derive(Mappable)]
    struct Src {
        id: i32,
        Name: String,
    }
    #[derive(Mappable, Default)]
    struct Dest {
        Id: i32,
        name: String,
    }
    let mut dest = Dest::default();

    fill_fields(
        &Src {
            id: 5,
            Name: "Ada".into(),
        },
        &mut dest,
    );

    assert_eq!(dest.Id, 0);
    assert_eq!(dest.name, "");
}

#[test]
fn rename_exposes_external_spelling() {
    #[derive(Mappable)]
    struct ApiUser {
        #[mappable(rename = "ID")]
        user_id: u64,
        display_name: String,
    }
    #[derive(Mappable, Default)]
    struct UserRow {
        #[mappable(rename = "Id")]
        id: u64,
        #[mappable(rename = "display_name")]
        name: String,
    }
    let mut row = UserRow::default();

    fill_fields(
        &ApiUser {
            user_id: 9,
            display_name: "Grace".into(),
        },
        &mut row,
    );

    assert_eq!(row.id, 9);
    assert_eq!(row.name, "Grace");
}

#[test]
fn skipped_fields_are_invisible_in_both_directions() {
    #[derive(Mappable)]
    struct Src {
        name: String,
        #[mappable(skip)]
        secret: String,
    }
    #[derive(Mappable, Default)]
    struct Dest {
        name: String,
        #[mappable(skip)]
        secret: String,
    }
    let src = Src {
        name: "visible".into(),
        secret: "hidden".into(),
    };
    let mut dest = Dest {
        name: String::new(),
        secret: "mine".into(),
    };

    fill_fields(&src, &mut dest);

    assert_eq!(dest.name, "visible");
    assert_eq!(dest.secret, "mine");
    assert_eq!(src.field_names(), ["name"]);
    assert_eq!(src.secret, "hidden");
}

#[test]
fn raw_identifiers_are_exposed_without_prefix() {
    #[derive(Mappable)]
    struct Src {
        r#type: String,
    }
    #[derive(Mappable, Default)]
    struct Dest {
        #[mappable(rename = "type")]
        kind: String,
    }
    let mut dest = Dest::default();

    fill_fields(
        &Src {
            r#type: "admin".into(),
        },
        &mut dest,
    );

    assert_eq!(dest.kind, "admin");
}

#[test]
fn tuple_structs_match_by_position() {
    #[derive(Mappable)]
    struct Pair(i32, String);
    #[derive(Mappable, Default)]
    struct Triple(i32, String, bool);
    let mut dest = Triple(0, String::new(), true);

    fill_fields(&Pair(4, "four".into()), &mut dest);

    assert_eq!(dest.0, 4);
    assert_eq!(dest.1, "four");
    assert!(dest.2);
}

#[test]
fn generic_aggregates_derive() {
    #[derive(Mappable)]
    struct Envelope<T> {
        ID: u32,
        payload: T,
    }
    #[derive(Mappable, Default)]
    struct Stored<T: Default> {
        Id: u32,
        payload: Option<T>,
    }
    let mut dest: Stored<Vec<String>> = Stored::default();

    fill_fields(
        &Envelope {
            ID: 12,
            payload: vec!["a".to_string(), "b".to_string()],
        },
        &mut dest,
    );

    assert_eq!(dest.Id, 12);
    assert_eq!(dest.payload, Some(vec!["a".to_string(), "b".to_string()]));
}

#[test]
fn read_only_aggregates_can_borrow() {
    #[derive(Mappable)]
    #[mappable(read_only)]
    struct View<'a> {
        name: &'a str,
        tags: &'a Vec<String>,
    }
    #[derive(Mappable, Default)]
    struct Owned {
        name: String,
        tags: Vec<String>,
    }
    let tags = vec!["x".to_string()];
    let mut dest = Owned::default();

    fill_fields(
        &View {
            name: "borrowed",
            tags: &tags,
        },
        &mut dest,
    );

    assert_eq!(dest.name, "borrowed");
    assert_eq!(dest.tags, tags);
}
