use pretty_assertions::assert_eq;
use tests::{
    setup,
    views::{names, OpsTenant},
};
use vista::{stmt::Params, Db};

async fn tenants(db: &Db, query: &str) -> Vec<OpsTenant> {
    let options = vista_query::parse(query).unwrap();
    db.all::<OpsTenant>("TMandator", &options, Params::new())
        .await
        .unwrap()
}

#[tokio::test]
async fn filter_eq_with_expand() {
    let test = setup().await;

    let tenants = tenants(
        &test.db,
        "$top=5&$expand=Buildings&$filter=Name eq 'One'&$orderby=Name desc",
    )
    .await;

    assert_eq!(names(&tenants), ["One"]);
    assert_eq!(names(&tenants[0].buildings), ["One L1", "One L2"]);
}

#[tokio::test]
async fn filter_ne_with_expand() {
    let test = setup().await;

    let tenants = tenants(
        &test.db,
        "$top=5&$expand=Buildings&$filter=Name ne 'One'&$orderby=Name desc",
    )
    .await;

    assert_eq!(names(&tenants), ["Two"]);
    assert_eq!(names(&tenants[0].buildings), ["Two L1", "Two L2"]);
}

#[tokio::test]
async fn filter_only() {
    let test = setup().await;

    let tenants = tenants(&test.db, "$filter=Name eq 'One'").await;

    assert_eq!(names(&tenants), ["One"]);
    // Not expanded
    assert!(tenants[0].buildings.is_empty());
}

#[tokio::test]
async fn expand_without_filter() {
    let test = setup().await;

    let tenants = tenants(&test.db, "$top=5&$expand=Buildings&$orderby=Name desc").await;

    assert_eq!(names(&tenants), ["Two", "One"]);
    assert_eq!(tenants[0].buildings.len(), 2);
    assert_eq!(tenants[1].buildings.len(), 2);
}

#[tokio::test]
async fn order_by_only() {
    let test = setup().await;

    let tenants = tenants(&test.db, "$orderby=Name desc").await;

    assert_eq!(names(&tenants), ["Two", "One"]);
    assert!(tenants.iter().all(|tenant| tenant.buildings.is_empty()));
}

#[tokio::test]
async fn top_filter_and_order_without_expand() {
    let test = setup().await;

    let tenants = tenants(&test.db, "$top=5&$filter=Name eq 'One'&$orderby=Name desc").await;

    assert_eq!(names(&tenants), ["One"]);
    assert!(tenants[0].buildings.is_empty());
}

#[tokio::test]
async fn expand_three_levels() {
    let test = setup().await;

    let tenants = tenants(
        &test.db,
        "$top=5&$expand=Buildings($expand=Builder($expand=City))&$filter=Name ne 'One'&$orderby=Name desc",
    )
    .await;

    assert_eq!(names(&tenants), ["Two"]);

    let buildings = &tenants[0].buildings;
    assert_eq!(names(buildings), ["Two L1", "Two L2"]);

    let builder = buildings[1].builder.as_ref().unwrap();
    assert_eq!(builder.name, "Mark");
    assert_eq!(builder.city.as_ref().unwrap().name, "Leeds");

    // Expansion stops where the query stops
    assert!(buildings[1].tenant.is_none());
}

#[tokio::test]
async fn nested_options_window_each_collection() {
    let test = setup().await;

    let tenants = tenants(
        &test.db,
        "$orderby=Name&$expand=Buildings($orderby=Name desc;$top=1)",
    )
    .await;

    assert_eq!(names(&tenants), ["One", "Two"]);
    assert_eq!(names(&tenants[0].buildings), ["One L2"]);
    assert_eq!(names(&tenants[1].buildings), ["Two L2"]);
}

#[tokio::test]
async fn nested_filter_applies_per_parent() {
    let test = setup().await;

    let tenants = tenants(
        &test.db,
        "$orderby=Name&$expand=Buildings($filter=endswith(Name, 'L1'))",
    )
    .await;

    assert_eq!(names(&tenants[0].buildings), ["One L1"]);
    assert_eq!(names(&tenants[1].buildings), ["Two L1"]);
}

#[tokio::test]
async fn expand_items_differing_in_case_merge() {
    let test = setup().await;

    let tenants = tenants(&test.db, "$orderby=Name&$expand=Buildings($top=1),buildings").await;

    assert_eq!(names(&tenants[0].buildings), ["One L1"]);
    assert_eq!(names(&tenants[1].buildings), ["Two L1"]);
}
