use pretty_assertions::assert_eq;
use tests::{
    fixture::{PARAMETER, PARAMETER_DEFAULT},
    seed, setup,
    views::{names, CoreBuilding},
};
use vista::{stmt::Params, Db};

async fn buildings(db: &Db, query: &str, params: Params) -> Vec<CoreBuilding> {
    let options = vista_query::parse(query).unwrap();
    db.all::<CoreBuilding>("TBuilding", &options, params)
        .await
        .unwrap()
}

#[tokio::test]
async fn filter_through_single_relation() {
    let test = setup().await;

    let buildings = buildings(
        &test.db,
        "$top=5&$expand=Builder,Tenant&$filter=Builder/Name eq 'Sam'&$orderby=Name asc",
        Params::new(),
    )
    .await;

    assert_eq!(names(&buildings), ["One L1", "One L2"]);

    let first = &buildings[0];
    assert_eq!(first.builder.as_ref().unwrap().name, "Sam");
    assert_eq!(first.tenant.as_ref().unwrap().name, "One");
    assert_eq!(first.id, seed::ONE_L1);
}

#[tokio::test]
async fn ne_filter_with_nested_expand() {
    let test = setup().await;

    let buildings = buildings(
        &test.db,
        "$top=5&$expand=Builder($expand=City),Tenant&$filter=Name ne 'One L2'&$orderby=Name desc",
        Params::new(),
    )
    .await;

    assert_eq!(names(&buildings), ["Two L2", "Two L1", "One L1"]);
    assert!(buildings.iter().all(|building| building.name != "One L2"));

    let city = buildings[0].builder.as_ref().unwrap().city.as_ref().unwrap();
    assert_eq!(city.name, "Leeds");
}

#[tokio::test]
async fn filter_three_steps_deep() {
    let test = setup().await;

    let buildings = buildings(
        &test.db,
        "$top=5&$expand=Builder($expand=City),Tenant&$filter=Builder/City/Name eq 'Leeds'",
        Params::new(),
    )
    .await;

    assert_eq!(names(&buildings), ["Two L2"]);
    assert_eq!(
        buildings[0].builder.as_ref().unwrap().city.as_ref().unwrap().name,
        "Leeds"
    );
}

#[tokio::test]
async fn unexpanded_relations_stay_empty() {
    let test = setup().await;

    let buildings = buildings(&test.db, "$filter=Name eq 'One L1'", Params::new()).await;

    assert_eq!(buildings.len(), 1);
    assert_eq!(buildings[0].builder, None);
    assert_eq!(buildings[0].tenant, None);
}

#[tokio::test]
async fn flattened_member_needs_no_expand() {
    let test = setup().await;

    let buildings = buildings(&test.db, "$orderby=Name", Params::new()).await;

    let builder_names: Vec<_> = buildings
        .iter()
        .map(|building| &building.builder_name[..])
        .collect();

    assert_eq!(builder_names, ["Sam", "Sam", "John", "Mark"]);
}

#[tokio::test]
async fn filter_and_order_on_flattened_member() {
    let test = setup().await;

    let buildings = buildings(
        &test.db,
        "$filter=BuilderName ne 'Sam'&$orderby=BuilderName desc",
        Params::new(),
    )
    .await;

    assert_eq!(names(&buildings), ["Two L2", "Two L1"]);
}

#[tokio::test]
async fn parameter_is_mapped_when_supplied() {
    let test = setup().await;
    let value = uuid::Uuid::new_v4().to_string();

    let buildings = buildings(
        &test.db,
        "$top=5&$orderby=Name",
        Params::new().with(PARAMETER, value.clone()),
    )
    .await;

    assert_eq!(buildings.len(), 4);
    assert!(buildings.iter().all(|building| building.parameter == value));
}

#[tokio::test]
async fn parameter_falls_back_when_absent() {
    let test = setup().await;

    let buildings = buildings(
        &test.db,
        "$top=5&$orderby=Name",
        Params::new().with("another", "value"),
    )
    .await;

    assert!(buildings
        .iter()
        .all(|building| building.parameter == PARAMETER_DEFAULT));
}

#[tokio::test]
async fn filter_on_parameter_member() {
    let test = setup().await;

    let options = vista_query::parse("$filter=Parameter eq 'x'").unwrap();

    let supplied = test
        .db
        .all::<CoreBuilding>("TBuilding", &options, Params::new().with(PARAMETER, "x"))
        .await
        .unwrap();
    assert_eq!(supplied.len(), 4);

    let absent = test
        .db
        .all::<CoreBuilding>("TBuilding", &options, Params::new())
        .await
        .unwrap();
    assert!(absent.is_empty());
}

#[tokio::test]
async fn guid_literal_against_renamed_key() {
    let test = setup().await;

    let query = format!("$filter=Id eq {}", seed::TWO_L1);
    let found = buildings(&test.db, &query, Params::new()).await;
    assert_eq!(names(&found), ["Two L1"]);

    // A quoted GUID is read as the member's type
    let query = format!("$filter=Id eq '{}'", seed::TWO_L1);
    let found = buildings(&test.db, &query, Params::new()).await;
    assert_eq!(names(&found), ["Two L1"]);
}

#[tokio::test]
async fn single_relation_null_check() {
    let test = setup().await;

    let all = buildings(&test.db, "$filter=Tenant ne null", Params::new()).await;
    assert_eq!(all.len(), 4);

    let none = buildings(&test.db, "$filter=Builder eq null", Params::new()).await;
    assert!(none.is_empty());
}
