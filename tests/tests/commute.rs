//! Filtering in the engine must agree with filtering the fully expanded
//! results after the fact.

use pretty_assertions::assert_eq;
use tests::{setup, views::CoreBuilding};
use vista::{stmt::Params, Db};

const EXPAND_ALL: &str = "$expand=Builder($expand=City),Tenant";

async fn buildings(db: &Db, query: &str) -> Vec<CoreBuilding> {
    let options = vista_query::parse(query).unwrap();

    db.all::<CoreBuilding>("TBuilding", &options, Params::new())
        .await
        .unwrap()
}

fn builder_name(building: &CoreBuilding) -> &str {
    &building.builder.as_ref().unwrap().name
}

fn city_name(building: &CoreBuilding) -> &str {
    &building
        .builder
        .as_ref()
        .unwrap()
        .city
        .as_ref()
        .unwrap()
        .name
}

type Keep = fn(&CoreBuilding) -> bool;

fn case(filter: &'static str, keep: Keep) -> (&'static str, Keep) {
    (filter, keep)
}

fn tenant_name(building: &CoreBuilding) -> &str {
    &building.tenant.as_ref().unwrap().name
}

#[tokio::test]
async fn filter_commutes_with_projection() {
    let test = setup().await;

    let everything = buildings(&test.db, EXPAND_ALL).await;
    assert_eq!(everything.len(), 4);

    let cases = [
        case("Name eq 'One L1'", |b| b.name == "One L1"),
        case("Name ne 'One L1'", |b| b.name != "One L1"),
        case("Name gt 'One L2'", |b| b.name.as_str() > "One L2"),
        case("Name le 'One L2'", |b| b.name.as_str() <= "One L2"),
        case("Builder/Name eq 'Sam'", |b| builder_name(b) == "Sam"),
        case("Builder/City/Name ne 'London'", |b| city_name(b) != "London"),
        case("Tenant/Name eq 'Two'", |b| tenant_name(b) == "Two"),
        case("BuilderName eq Builder/Name", |_| true),
        case("startswith(Name, 'Two')", |b| b.name.starts_with("Two")),
        case("endswith(Name, 'L2')", |b| b.name.ends_with("L2")),
        case("contains(Builder/Name, 'a')", |b| builder_name(b).contains('a')),
        case(
            "Tenant/Name eq 'Two' and Builder/City/Name eq 'London'",
            |b| tenant_name(b) == "Two" && city_name(b) == "London",
        ),
        case(
            "Builder/Name eq 'Mark' or Name eq 'One L1'",
            |b| builder_name(b) == "Mark" || b.name == "One L1",
        ),
        case("not (Tenant/Name eq 'One')", |b| tenant_name(b) != "One"),
    ];

    for (filter, keep) in cases {
        let filtered = buildings(&test.db, &format!("{EXPAND_ALL}&$filter={filter}")).await;

        let expected: Vec<_> = everything.iter().filter(|b| keep(b)).cloned().collect();

        assert_eq!(filtered, expected, "$filter={filter}");
    }
}

#[tokio::test]
async fn order_commutes_with_projection() {
    let test = setup().await;

    let mut expected = buildings(&test.db, EXPAND_ALL).await;
    expected.sort_by(|a, b| {
        city_name(a)
            .cmp(city_name(b))
            .then_with(|| b.name.cmp(&a.name))
    });

    let ordered = buildings(
        &test.db,
        &format!("{EXPAND_ALL}&$orderby=Builder/City/Name asc,Name desc"),
    )
    .await;

    assert_eq!(ordered, expected);
}
