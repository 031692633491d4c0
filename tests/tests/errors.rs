use tests::{fixture, setup, views::CoreBuilding};
use vista::{
    options::{OrderByItem, Path, Predicate},
    stmt::Params,
    Db, Error, QueryOptions,
};

async fn building_error(db: &Db, query: &str) -> Error {
    let options = vista_query::parse(query).unwrap();

    db.all::<CoreBuilding>("TBuilding", &options, Params::new())
        .await
        .unwrap_err()
}

fn translate_error(db: &Db, source: &str, view: &str, options: QueryOptions) -> Error {
    db.translate(source, view, &options, Params::new())
        .unwrap_err()
}

// --- unmapped properties ---

#[tokio::test]
async fn unknown_member() {
    let test = setup().await;

    let err = building_error(&test.db, "$filter=Colour eq 'red'").await;
    assert!(err.is_unmapped_property(), "{err}");
}

#[tokio::test]
async fn descending_past_a_scalar() {
    let test = setup().await;

    let err = building_error(&test.db, "$filter=Builder/City/Name/Foo eq 'x'").await;
    assert!(err.is_unmapped_property(), "{err}");
}

#[tokio::test]
async fn unknown_member_in_order_by() {
    let test = setup().await;

    let err = building_error(&test.db, "$orderby=Builder/Age").await;
    assert!(err.is_unmapped_property(), "{err}");
}

#[tokio::test]
async fn expanding_an_unknown_member() {
    let test = setup().await;

    let err = building_error(&test.db, "$expand=Owner").await;
    assert!(err.is_unmapped_property(), "{err}");
}

// --- unsupported operators ---

#[tokio::test]
async fn ordering_comparison_on_relation() {
    let test = setup().await;

    let err = building_error(&test.db, "$filter=Builder gt null").await;
    assert!(err.is_unsupported_operator(), "{err}");

    let err = building_error(&test.db, "$filter=Builder eq 'Sam'").await;
    assert!(err.is_unsupported_operator(), "{err}");
}

#[tokio::test]
async fn order_by_relation() {
    let test = setup().await;

    let err = building_error(&test.db, "$orderby=Builder").await;
    assert!(err.is_unsupported_operator(), "{err}");
}

#[tokio::test]
async fn expanding_a_scalar() {
    let test = setup().await;

    let err = building_error(&test.db, "$expand=Name").await;
    assert!(err.is_unsupported_operator(), "{err}");
}

#[tokio::test]
async fn windowing_a_single_object_expand() {
    let test = setup().await;

    let err = building_error(&test.db, "$expand=Builder($top=1)").await;
    assert!(err.is_unsupported_operator(), "{err}");

    // Nesting further expands is allowed
    let options = vista_query::parse("$expand=Builder($expand=City)").unwrap();
    test.db
        .all::<CoreBuilding>("TBuilding", &options, Params::new())
        .await
        .unwrap();
}

#[tokio::test]
async fn string_function_on_non_string() {
    let test = setup().await;

    let err = translate_error(
        &test.db,
        "TBuilder",
        "OpsBuilder",
        QueryOptions::new().filter(Predicate::contains("Id", "1")),
    );
    assert!(err.is_unsupported_operator(), "{err}");
}

#[tokio::test]
async fn navigating_through_a_collection() {
    let test = setup().await;

    let err = translate_error(
        &test.db,
        "TMandator",
        "OpsTenant",
        QueryOptions::new().filter(Predicate::eq(Path::parse("Buildings/Name"), "One L1")),
    );
    assert!(err.is_unsupported_operator(), "{err}");

    let err = translate_error(
        &test.db,
        "TMandator",
        "OpsTenant",
        QueryOptions::new().order_by(OrderByItem::asc("Buildings/Name")),
    );
    assert!(err.is_unsupported_operator(), "{err}");
}

// --- type mismatches ---

#[tokio::test]
async fn literal_of_wrong_type() {
    let test = setup().await;

    let err = building_error(&test.db, "$filter=Name eq 1").await;
    assert!(err.is_type_mismatch(), "{err}");

    let err = building_error(&test.db, "$filter=Id eq 'not a guid'").await;
    assert!(err.is_type_mismatch(), "{err}");
}

#[tokio::test]
async fn comparing_members_of_different_types() {
    let test = setup().await;

    let err = translate_error(
        &test.db,
        "TBuilder",
        "OpsBuilder",
        QueryOptions::new().filter(Predicate::eq(Path::parse("Id"), Path::parse("Name"))),
    );
    assert!(err.is_type_mismatch(), "{err}");
}

#[tokio::test]
async fn string_function_with_non_string_argument() {
    let test = setup().await;

    let err = translate_error(
        &test.db,
        "TBuilder",
        "OpsBuilder",
        QueryOptions::new().filter(Predicate::starts_with("Name", 1_i64)),
    );
    assert!(err.is_type_mismatch(), "{err}");
}

#[tokio::test]
async fn parameter_of_wrong_type() {
    let test = setup().await;
    let options = vista_query::parse("$top=1").unwrap();

    let err = test
        .db
        .all::<CoreBuilding>(
            "TBuilding",
            &options,
            Params::new().with(fixture::PARAMETER, 5_i64),
        )
        .await
        .unwrap_err();

    assert!(err.is_type_mismatch(), "{err}");
    assert_eq!(
        err.to_string(),
        "type mismatch: `CoreBuilding.Parameter` is String, literal is I64"
    );
    assert!(test.log.is_empty());

    // Keys no member reads are not checked
    let buildings = test
        .db
        .all::<CoreBuilding>("TBuilding", &options, Params::new().with("other", 5_i64))
        .await
        .unwrap();
    assert_eq!(buildings.len(), 1);
}

// --- invalid options ---

#[tokio::test]
async fn negative_paging() {
    let test = setup().await;

    let err = building_error(&test.db, "$top=-1").await;
    assert!(err.is_invalid_query_options(), "{err}");

    let err = building_error(&test.db, "$expand=Tenant($expand=Buildings($skip=-2))").await;
    assert!(err.is_invalid_query_options(), "{err}");
}

#[tokio::test]
async fn conflicting_expand_options_differing_in_case() {
    let test = setup().await;
    let options = vista_query::parse("$expand=Buildings($top=1),buildings($skip=1)").unwrap();

    let err = test
        .db
        .translate("TMandator", "OpsTenant", &options, Params::new())
        .unwrap_err();

    assert!(err.is_invalid_query_options(), "{err}");
}

#[tokio::test]
async fn no_driver_work_for_rejected_options() {
    let test = setup().await;

    building_error(&test.db, "$top=-1").await;
    building_error(&test.db, "$filter=Colour eq 'red'").await;

    assert!(test.log.is_empty());
}

// --- schema lookups ---

#[tokio::test]
async fn unknown_models() {
    let test = setup().await;

    let err = translate_error(&test.db, "TNope", "CoreBuilding", QueryOptions::new());
    assert!(err.is_invalid_schema(), "{err}");
    assert_eq!(err.to_string(), "invalid schema: unknown source model `TNope`");

    let err = translate_error(&test.db, "TBuilding", "Nope", QueryOptions::new());
    assert!(err.is_invalid_schema(), "{err}");

    // Both models exist but no mapping joins them
    let err = translate_error(&test.db, "TCity", "CoreBuilding", QueryOptions::new());
    assert!(err.is_invalid_schema(), "{err}");
}
