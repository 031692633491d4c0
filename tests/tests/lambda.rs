use pretty_assertions::assert_eq;
use tests::{
    seed, setup,
    views::{names, OpsTenant},
};
use uuid::Uuid;
use vista::{
    options::{Path, Predicate},
    stmt::Params,
    Db, QueryOptions, Result,
};

async fn tenants(db: &Db, query: &str) -> Result<Vec<OpsTenant>> {
    let options = vista_query::parse(query)?;
    db.all::<OpsTenant>("TMandator", &options, Params::new()).await
}

async fn add_empty_tenant(db: &Db) {
    let id = Uuid::from_u128(0x0a11_0000_0000_0000_0000_0000_0000_0003);
    db.insert("TMandator", [seed::mandator(id, "Three")])
        .await
        .unwrap();
}

#[tokio::test]
async fn any_matches_one_element() {
    let test = setup().await;

    let found = tenants(&test.db, "$filter=Buildings/any(b: b/Name eq 'One L1')")
        .await
        .unwrap();
    assert_eq!(names(&found), ["One"]);

    let found = tenants(&test.db, "$filter=Buildings/any(b: startswith(b/Name, 'T'))")
        .await
        .unwrap();
    assert_eq!(names(&found), ["Two"]);
}

#[tokio::test]
async fn any_through_element_relation() {
    let test = setup().await;

    let found = tenants(
        &test.db,
        "$filter=Buildings/any(b: b/Builder/City/Name eq 'Leeds')",
    )
    .await
    .unwrap();

    assert_eq!(names(&found), ["Two"]);
}

#[tokio::test]
async fn all_requires_every_element() {
    let test = setup().await;

    let found = tenants(&test.db, "$filter=Buildings/all(b: b/BuilderName eq 'Sam')")
        .await
        .unwrap();
    assert_eq!(names(&found), ["One"]);

    let found = tenants(
        &test.db,
        "$filter=Buildings/all(b: b/Builder/City/Name eq 'London')",
    )
    .await
    .unwrap();
    assert_eq!(names(&found), ["One"]);
}

#[tokio::test]
async fn empty_collection() {
    let test = setup().await;
    add_empty_tenant(&test.db).await;

    let found = tenants(
        &test.db,
        "$filter=Buildings/all(b: b/Name eq 'nothing')&$orderby=Name",
    )
    .await
    .unwrap();
    assert_eq!(names(&found), ["Three"]);

    let found = tenants(&test.db, "$filter=Buildings/any(b: b/Name ne 'nothing')&$orderby=Name")
        .await
        .unwrap();
    assert_eq!(names(&found), ["One", "Two"]);

    let found = tenants(&test.db, "$filter=not Buildings/any(b: b/Name ne 'x')")
        .await
        .unwrap();
    assert_eq!(names(&found), ["Three"]);
}

#[tokio::test]
async fn lambda_combined_with_outer_predicate() {
    let test = setup().await;

    let found = tenants(
        &test.db,
        "$filter=Name ne 'One' and Buildings/any(b: contains(b/Name, 'L2'))&$expand=Buildings",
    )
    .await
    .unwrap();

    assert_eq!(names(&found), ["Two"]);

    // The filter narrows tenants, not their expanded buildings
    assert_eq!(names(&found[0].buildings), ["Two L1", "Two L2"]);
}

#[tokio::test]
async fn paths_must_start_with_the_variable() {
    let test = setup().await;

    let err = tenants(&test.db, "$filter=Buildings/any(b: Name eq 'One L1')")
        .await
        .unwrap_err();
    assert!(err.is_unsupported_operator(), "{err}");

    let err = tenants(&test.db, "$filter=Buildings/any(b: b eq 'One L1')")
        .await
        .unwrap_err();
    assert!(err.is_unsupported_operator(), "{err}");
}

#[tokio::test]
async fn lambda_members_are_checked() {
    let test = setup().await;

    let err = tenants(&test.db, "$filter=Buildings/any(b: b/Colour eq 'red')")
        .await
        .unwrap_err();
    assert!(err.is_unmapped_property(), "{err}");

    let err = tenants(&test.db, "$filter=Buildings/any(b: b/Name eq 7)")
        .await
        .unwrap_err();
    assert!(err.is_type_mismatch(), "{err}");
}

#[tokio::test]
async fn lambda_requires_a_collection() {
    let test = setup().await;

    let options = QueryOptions::new().filter(Predicate::any(
        "Name",
        "n",
        Predicate::eq(Path::parse("n/Name"), "One"),
    ));

    let err = test
        .db
        .translate("TMandator", "OpsTenant", &options, Params::new())
        .unwrap_err();
    assert!(err.is_unsupported_operator(), "{err}");

    let options = QueryOptions::new().filter(Predicate::all(
        "Tenant",
        "t",
        Predicate::eq(Path::parse("t/Name"), "One"),
    ));

    let err = test
        .db
        .translate("TBuilding", "CoreBuilding", &options, Params::new())
        .unwrap_err();
    assert!(err.is_unsupported_operator(), "{err}");
}
